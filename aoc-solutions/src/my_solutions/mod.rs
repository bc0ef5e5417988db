pub mod year_2020;
