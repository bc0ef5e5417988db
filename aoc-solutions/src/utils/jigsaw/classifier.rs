//! Tile classification by match count

use super::JigsawError;
use super::edge_matcher::Match;
use super::tile::TileId;
use std::collections::BTreeMap;

/// Where a tile can sit in a square arrangement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileType {
    /// Two neighbours
    Corner,
    /// Three neighbours
    Border,
    /// Four neighbours
    Interior,
}

impl TileType {
    pub fn from_match_count(count: usize) -> Option<TileType> {
        match count {
            2 => Some(TileType::Corner),
            3 => Some(TileType::Border),
            4 => Some(TileType::Interior),
            _ => None,
        }
    }

    pub fn match_count(self) -> usize {
        match self {
            TileType::Corner => 2,
            TileType::Border => 3,
            TileType::Interior => 4,
        }
    }

    /// Corner and border tiles form the outer ring
    pub fn is_on_perimeter(self) -> bool {
        !matches!(self, TileType::Interior)
    }
}

/// Match counts and derived types of every tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    counts: BTreeMap<TileId, usize>,
    types: BTreeMap<TileId, TileType>,
}

impl Classification {
    /// Count matches per tile and classify each one
    ///
    /// Tiles without any match keep a count of zero, which fails
    /// classification like any other count outside 2..=4.
    pub fn new(
        tile_ids: impl IntoIterator<Item = TileId>,
        matches: &[Match],
    ) -> Result<Self, JigsawError> {
        let mut counts: BTreeMap<TileId, usize> = tile_ids.into_iter().map(|id| (id, 0)).collect();
        for m in matches {
            *counts.entry(m.a).or_default() += 1;
            *counts.entry(m.b).or_default() += 1;
        }

        let types = counts
            .iter()
            .map(|(&id, &count)| {
                TileType::from_match_count(count)
                    .map(|tile_type| (id, tile_type))
                    .ok_or(JigsawError::InconsistentTopology { id, count })
            })
            .collect::<Result<_, _>>()?;

        Ok(Self { counts, types })
    }

    pub fn match_count(&self, id: TileId) -> Option<usize> {
        self.counts.get(&id).copied()
    }

    pub fn tile_type(&self, id: TileId) -> Option<TileType> {
        self.types.get(&id).copied()
    }

    /// Ids of the given type, ascending
    pub fn ids_of(&self, wanted: TileType) -> impl Iterator<Item = TileId> + '_ {
        self.types
            .iter()
            .filter(move |&(_, &tile_type)| tile_type == wanted)
            .map(|(&id, _)| id)
    }

    /// Corner ids, ascending
    pub fn corners(&self) -> Vec<TileId> {
        self.ids_of(TileType::Corner).collect()
    }

    /// Sum of all match counts, twice the number of adjacencies
    pub fn total_matches(&self) -> usize {
        self.counts.values().sum()
    }

    /// Product of the corner ids; there must be exactly four corners
    pub fn corner_product(&self) -> Result<u128, JigsawError> {
        let corners = self.corners();
        if corners.len() != 4 {
            return Err(JigsawError::CornerCount {
                found: corners.len(),
            });
        }
        Ok(corners.into_iter().map(u128::from).product())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::jigsaw::fixtures::{link, square_links};

    #[test]
    fn test_three_by_three() {
        let links = square_links(3);
        let classification = Classification::new(1..=9, &links).unwrap();

        assert_eq!(classification.corners(), vec![1, 3, 7, 9]);
        assert_eq!(classification.ids_of(TileType::Border).collect::<Vec<_>>(), vec![2, 4, 6, 8]);
        assert_eq!(classification.ids_of(TileType::Interior).collect::<Vec<_>>(), vec![5]);
        assert_eq!(classification.match_count(5), Some(4));
        assert_eq!(classification.tile_type(2), Some(TileType::Border));
        assert_eq!(classification.tile_type(10), None);
        assert_eq!(classification.corner_product().unwrap(), 189);
    }

    #[test]
    fn test_counts_sum_to_twice_the_adjacencies() {
        for side in 2..=6 {
            let links = square_links(side);
            let classification = Classification::new(1..=side * side, &links).unwrap();
            let by_type = |tile_type| classification.ids_of(tile_type).count();

            let weighted = 2 * by_type(TileType::Corner)
                + 3 * by_type(TileType::Border)
                + 4 * by_type(TileType::Interior);
            assert_eq!(weighted, 2 * links.len());
            assert_eq!(classification.total_matches(), 2 * links.len());
        }
    }

    #[test]
    fn test_unmatched_tile_is_inconsistent() {
        let links = square_links(2);
        let error = Classification::new(1..=5, &links).unwrap_err();
        assert_eq!(error, JigsawError::InconsistentTopology { id: 5, count: 0 });
    }

    #[test]
    fn test_overmatched_tile_is_inconsistent() {
        let links: Vec<Match> = (2..=6).map(|other| link(1, other)).collect();
        let error = Classification::new(1..=6, &links).unwrap_err();
        assert_eq!(error, JigsawError::InconsistentTopology { id: 1, count: 5 });
    }

    #[test]
    fn test_corner_product_needs_four_corners() {
        // A ring of six tiles: every tile has two matches
        let links: Vec<Match> = (1..=6).map(|id| link(id, id % 6 + 1)).collect();
        let classification = Classification::new(1..=6, &links).unwrap();
        assert_eq!(
            classification.corner_product(),
            Err(JigsawError::CornerCount { found: 6 })
        );
    }

    #[test]
    fn test_tile_type_counts() {
        for tile_type in [TileType::Corner, TileType::Border, TileType::Interior] {
            assert_eq!(TileType::from_match_count(tile_type.match_count()), Some(tile_type));
        }
        assert_eq!(TileType::from_match_count(1), None);
        assert!(TileType::Border.is_on_perimeter());
        assert!(!TileType::Interior.is_on_perimeter());
    }
}
