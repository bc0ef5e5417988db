//! Pairwise border matching between tiles

use super::tile::{Tile, TileId};
use crate::utils::grid::Side;
use itertools::Itertools;
use std::collections::{BTreeSet, HashMap};

/// Two tiles sharing a border
///
/// `a_side` of tile `a` carries the same cells as `b_side` of tile `b`, read
/// in the same direction unless `reversed` is set. Sides refer to the tiles
/// as parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub a: TileId,
    pub b: TileId,
    pub a_side: Side,
    pub b_side: Side,
    pub reversed: bool,
}

impl Match {
    /// The other tile of the match, if `id` takes part in it
    pub fn partner(&self, id: TileId) -> Option<TileId> {
        if id == self.a {
            Some(self.b)
        } else if id == self.b {
            Some(self.a)
        } else {
            None
        }
    }

    /// The same match seen from tile `b`
    pub fn swapped(self) -> Match {
        Match {
            a: self.b,
            b: self.a,
            a_side: self.b_side,
            b_side: self.a_side,
            reversed: self.reversed,
        }
    }
}

/// Whether `edge` equals `other` read forward or backward
pub fn edges_fit(edge: &[bool], other: &[bool]) -> bool {
    edge == other || edge.iter().eq(other.iter().rev())
}

/// Find the border two tiles share
///
/// Sides of `a` are scanned in top, right, bottom, left order, and for each
/// of them the sides of `b` in the same order. The first pair that is equal
/// forward or reversed is returned; forward equality wins over reversed.
pub fn match_tiles(a: &Tile, b: &Tile) -> Option<Match> {
    let a_edges = a.base().edges();
    let b_edges = b.base().edges();

    for a_side in Side::ALL {
        let a_edge = &a_edges[a_side.index()];
        for b_side in Side::ALL {
            let b_edge = &b_edges[b_side.index()];
            let forward = a_edge == b_edge;
            if forward || a_edge.iter().eq(b_edge.iter().rev()) {
                return Some(Match {
                    a: a.id(),
                    b: b.id(),
                    a_side,
                    b_side,
                    reversed: !forward,
                });
            }
        }
    }
    None
}

/// Match every unordered pair of tiles, in input order
pub fn find_all_matches(tiles: &[Tile]) -> Vec<Match> {
    tiles
        .iter()
        .tuple_combinations()
        .filter_map(|(a, b)| match_tiles(a, b))
        .collect()
}

/// Match partners of every tile, in match discovery order
#[derive(Debug, Clone, Default)]
pub struct Adjacency {
    partners: HashMap<TileId, Vec<TileId>>,
}

impl Adjacency {
    pub fn from_matches(matches: &[Match]) -> Self {
        let mut partners: HashMap<TileId, Vec<TileId>> = HashMap::new();
        for m in matches {
            partners.entry(m.a).or_default().push(m.b);
            partners.entry(m.b).or_default().push(m.a);
        }
        Self { partners }
    }

    /// Tiles matching `id`; empty for unknown or unmatched tiles
    pub fn partners(&self, id: TileId) -> &[TileId] {
        self.partners.get(&id).map_or(&[], Vec::as_slice)
    }

    /// Partners of `id` together with `id` itself
    pub fn neighborhood(&self, id: TileId) -> BTreeSet<TileId> {
        self.partners(id)
            .iter()
            .copied()
            .chain(std::iter::once(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::grid::Grid;
    use proptest::prelude::*;

    const TILE_1951: &str = "Tile 1951:
#.##...##.
#.####...#
.....#..##
#...######
.##.#....#
.###.#####
###.##.##.
.###....#.
..#.#..#.#
#...##.#..";

    const TILE_2311: &str = "Tile 2311:
..##.#..#.
##..#.....
#...##..#.
####.#...#
##.##.###.
##...#.###
.#.#.#..##
..#....#..
###...#.#.
..###..###";

    fn tile(id: TileId, rows: &[&str]) -> Tile {
        Tile::new(id, Grid::parse_bitmap(&rows.join("\n")).unwrap())
    }

    fn random_tile(id: TileId) -> impl Strategy<Value = Tile> {
        prop::collection::vec(any::<bool>(), 16)
            .prop_map(move |cells| Tile::new(id, Grid::from_vec(4, 4, cells).unwrap()))
    }

    #[test]
    fn test_known_neighbours() {
        let a: Tile = TILE_1951.parse().unwrap();
        let b: Tile = TILE_2311.parse().unwrap();

        let found = match_tiles(&a, &b).unwrap();
        assert_eq!(
            found,
            Match {
                a: 1951,
                b: 2311,
                a_side: Side::Right,
                b_side: Side::Left,
                reversed: false,
            }
        );
        assert_eq!(match_tiles(&b, &a), Some(found.swapped()));
    }

    #[test]
    fn test_reversed_match() {
        let a = tile(1, &["#.#.", "...#", "....", "#.##"]);
        let b = tile(2, &["##.#", "#...", "#...", "#..."]);
        let found = match_tiles(&a, &b).unwrap();
        assert_eq!((found.a_side, found.b_side), (Side::Bottom, Side::Top));
        assert!(found.reversed);
    }

    #[test]
    fn test_first_match_in_scan_order_wins() {
        // Every edge of an all-off tile equals every other
        let a = tile(1, &["...", "...", "..."]);
        let b = tile(2, &["...", "...", "..."]);
        let found = match_tiles(&a, &b).unwrap();
        assert_eq!((found.a_side, found.b_side), (Side::Top, Side::Top));
        assert!(!found.reversed);
    }

    #[test]
    fn test_no_match() {
        let a = tile(1, &["#.#", "...", "#.#"]);
        let b = tile(2, &["...", "...", "..."]);
        assert_eq!(match_tiles(&a, &b), None);
    }

    #[test]
    fn test_partner_and_adjacency() {
        let matches = [
            Match { a: 1, b: 2, a_side: Side::Right, b_side: Side::Left, reversed: false },
            Match { a: 1, b: 3, a_side: Side::Bottom, b_side: Side::Top, reversed: true },
        ];
        assert_eq!(matches[0].partner(1), Some(2));
        assert_eq!(matches[0].partner(2), Some(1));
        assert_eq!(matches[0].partner(3), None);

        let adjacency = Adjacency::from_matches(&matches);
        assert_eq!(adjacency.partners(1), &[2, 3]);
        assert_eq!(adjacency.partners(3), &[1]);
        assert!(adjacency.partners(9).is_empty());
        assert_eq!(adjacency.neighborhood(1), BTreeSet::from([1, 2, 3]));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(128))]

        #[test]
        fn prop_match_is_symmetric(a in random_tile(1), b in random_tile(2)) {
            let forward = match_tiles(&a, &b);
            let backward = match_tiles(&b, &a);
            prop_assert_eq!(forward.is_some(), backward.is_some());

            if let Some(found) = forward {
                prop_assert_eq!((found.a, found.b), (1, 2));
                let a_edge = a.base().edge(found.a_side);
                let mut b_edge = b.base().edge(found.b_side);
                if found.reversed {
                    b_edge.reverse();
                }
                prop_assert_eq!(a_edge, b_edge);
            }
        }

        #[test]
        fn prop_rotated_copy_matches_itself(a in random_tile(1), turns in 0usize..8) {
            let mut b = Tile::new(2, a.base().clone());
            for _ in 0..turns {
                b.next_permutation();
            }
            let b = Tile::new(2, b.grid().clone());
            prop_assert!(match_tiles(&a, &b).is_some());
        }
    }
}
