//! Reusable building blocks shared by solutions

pub mod grid;
pub mod jigsaw;
