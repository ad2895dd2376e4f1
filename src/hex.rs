use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, Sub},
};

use serde::{Deserialize, Serialize};

use crate::sector::{Sector, SectorHex};

// Axial-space offsets to the six adjacent hexes
const DIRECTIONS: [(i32, i32); 6] = [
    (1, 0),  // east
    (1, -1), // southeast
    (0, -1), // south
    (-1, 0), // west
    (-1, 1), // northwest
    (0, 1),  // north
];

/// Universal address of a hex: one flat grid across all sectors.
///
/// This is the canonical form for hashing, ordering, and range math; the
/// sector-relative view is derived from it on demand.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Hex {
    pub x: i32,
    pub y: i32,
}

impl Hex {
    pub fn shift(&self, dx: i32, dy: i32) -> Hex {
        Hex { x: self.x + dx, y: self.y + dy }
    }

    /// Every hex in the closed rectangle spanned by the two corners, in
    /// row-major order: ascending y, then ascending x. Either corner may be
    /// the larger one on either axis.
    pub fn between(&self, other: &Hex) -> Vec<Hex> {
        let (x0, x1) = (self.x.min(other.x), self.x.max(other.x));
        let (y0, y1) = (self.y.min(other.y), self.y.max(other.y));
        (y0..=y1).flat_map(|y| (x0..=x1).map(move |x| Hex { x, y })).collect()
    }

    /// Distance in hexes across the grid. Columns are flat-top; odd columns
    /// sit half a hex north of even ones.
    pub fn distance(&self, other: &Hex) -> i32 {
        let (q0, r0) = self.axial();
        let (q1, r1) = other.axial();
        *[
            (q0 - q1).abs(),
            (r0 - r1).abs(),
            (-q0 - r0 - (-q1 - r1)).abs(),
        ].iter().max().unwrap()
    }

    /// The six adjacent hexes, nearest-east first, counterclockwise.
    pub fn neighbors(&self) -> [Hex; 6] {
        let (q, r) = self.axial();
        DIRECTIONS.map(|(dq, dr)| Hex::from_axial(q + dq, r + dr))
    }

    /// The sector this hex falls in.
    pub fn sector(&self) -> Sector {
        SectorHex::from(*self).sector()
    }

    /// Deterministic map key, unique per address.
    pub fn key(&self) -> String {
        format!("{}.{}", self.x, self.y)
    }

    fn axial(&self) -> (i32, i32) {
        (self.x, self.y - (self.x - self.x.rem_euclid(2)) / 2)
    }

    fn from_axial(q: i32, r: i32) -> Hex {
        Hex { x: q, y: r + (q - q.rem_euclid(2)) / 2 }
    }
}

// Row-major: all hexes at one y sort before the next, west to east within a
// row. BTreeMap iteration and between() agree on this order.
impl Ord for Hex {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Hex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add<Hex> for Hex {
    type Output = Hex;
    fn add(self, rhs: Hex) -> Self::Output {
        Hex { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub<Hex> for Hex {
    type Output = Hex;
    fn sub(self, rhs: Hex) -> Self::Output {
        Hex { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // ===== SHIFT TESTS =====

    #[test]
    fn test_shift_zero_is_identity() {
        let hex = Hex { x: 17, y: -9 };
        assert_eq!(hex.shift(0, 0), hex);
    }

    #[test]
    fn test_shift_is_plain_addition() {
        let hex = Hex { x: -3, y: 7 };
        assert_eq!(hex.shift(40, -100), Hex { x: 37, y: -93 });
    }

    #[test]
    fn test_shift_additivity() {
        let hex = Hex { x: 5, y: -12 };
        for (dx1, dy1, dx2, dy2) in [(0, 0, 0, 0), (1, -1, 2, 3), (-50, 80, 7, -7), (32, 40, -64, -80)] {
            assert_eq!(
                hex.shift(dx1, dy1).shift(dx2, dy2),
                hex.shift(dx1 + dx2, dy1 + dy2),
                "additivity failed for ({},{}) then ({},{})", dx1, dy1, dx2, dy2
            );
        }
    }

    #[test]
    fn test_add_sub_roundtrip() {
        let a = Hex { x: 9, y: -4 };
        let d = Hex { x: -13, y: 22 };
        assert_eq!(a + d - d, a);
    }

    // ===== ORDERING TESTS =====

    #[test]
    fn test_ord_is_row_major() {
        let mut hexes = vec![
            Hex { x: 1, y: 1 },
            Hex { x: 0, y: 2 },
            Hex { x: 2, y: 0 },
            Hex { x: 0, y: 1 },
        ];
        hexes.sort();
        assert_eq!(hexes, vec![
            Hex { x: 2, y: 0 },
            Hex { x: 0, y: 1 },
            Hex { x: 1, y: 1 },
            Hex { x: 0, y: 2 },
        ]);
    }

    // ===== BETWEEN TESTS =====

    #[test]
    fn test_between_single_hex() {
        let hex = Hex { x: -7, y: 3 };
        assert_eq!(hex.between(&hex), vec![hex]);
    }

    #[test]
    fn test_between_size_and_uniqueness() {
        let a = Hex { x: -2, y: -3 };
        let b = Hex { x: 4, y: 1 }; // 7 wide, 5 tall
        let hexes = a.between(&b);
        assert_eq!(hexes.len(), 35);

        let keys: HashSet<String> = hexes.iter().map(|hex| hex.key()).collect();
        assert_eq!(keys.len(), 35, "between produced duplicate addresses");
    }

    #[test]
    fn test_between_symmetry() {
        let a = Hex { x: 10, y: -1 };
        let b = Hex { x: -5, y: 6 };
        assert_eq!(a.between(&b), b.between(&a));

        let c = Hex { x: 10, y: 6 };
        let d = Hex { x: -5, y: -1 };
        assert_eq!(a.between(&b), c.between(&d), "opposite corner pairs should span the same rectangle");
    }

    #[test]
    fn test_between_is_row_major_sorted() {
        let a = Hex { x: 3, y: 8 };
        let b = Hex { x: 0, y: 5 };
        let hexes = a.between(&b);
        let mut sorted = hexes.clone();
        sorted.sort();
        assert_eq!(hexes, sorted);
        assert_eq!(hexes[0], Hex { x: 0, y: 5 });
        assert_eq!(hexes[hexes.len() - 1], Hex { x: 3, y: 8 });
    }

    // ===== DISTANCE AND NEIGHBOR TESTS =====

    #[test]
    fn test_distance_to_self_is_zero() {
        for hex in [Hex { x: 0, y: 0 }, Hex { x: -17, y: 42 }, Hex { x: 1, y: -1 }] {
            assert_eq!(hex.distance(&hex), 0);
        }
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Hex { x: -4, y: 9 };
        for b in a.between(&Hex { x: 3, y: 15 }) {
            assert_eq!(a.distance(&b), b.distance(&a), "asymmetric distance for {:?}", b);
        }
    }

    #[test]
    fn test_neighbors_are_distinct_and_adjacent() {
        // Both column parities
        for hex in [Hex { x: 0, y: 0 }, Hex { x: 1, y: 0 }, Hex { x: -3, y: 7 }, Hex { x: 8, y: -2 }] {
            let neighbors = hex.neighbors();
            let distinct: HashSet<Hex> = neighbors.iter().copied().collect();
            assert_eq!(distinct.len(), 6, "duplicate neighbors for {:?}", hex);
            assert!(!distinct.contains(&hex));
            for neighbor in neighbors {
                assert_eq!(hex.distance(&neighbor), 1, "{:?} not adjacent to {:?}", neighbor, hex);
            }
        }
    }

    #[test]
    fn test_distance_counts_steps_along_a_column() {
        let a = Hex { x: 2, y: 1 };
        let b = Hex { x: 2, y: 11 };
        assert_eq!(a.distance(&b), 10);
    }

    // ===== KEY TESTS =====

    #[test]
    fn test_key_format() {
        assert_eq!(Hex { x: 17, y: -9 }.key(), "17.-9");
        assert_eq!(Hex { x: 0, y: 0 }.key(), "0.0");
    }

    #[test]
    fn test_display_matches_key() {
        let hex = Hex { x: -1, y: 80 };
        assert_eq!(format!("{}", hex), hex.key());
    }
}
