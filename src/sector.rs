//! Sector-relative addressing.
//!
//! The map is an infinite plane tiled by fixed-size sectors, 32 columns by
//! 40 rows. A hex is addressed either universally (`Hex`) or by the sector
//! it falls in plus a 1-based column/row inside that sector (`SectorHex`).
//! The two forms convert losslessly in both directions; arithmetic that
//! pushes a local coordinate past a sector edge renormalizes into the
//! neighboring sector rather than ever producing a 0 or out-of-range local.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::hex::Hex;

/// Columns per sector
pub const SECTOR_COLS: i32 = 32;

/// Rows per sector
pub const SECTOR_ROWS: i32 = 40;

/// Sector identifier in sector-coordinate space
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub struct Sector(pub i32, pub i32);

impl Sector {
    pub fn new(sx: i32, sy: i32) -> Self {
        Sector(sx, sy)
    }
}

/// Sector-relative address of a hex: sector indices plus 1-based local
/// column and row, `col` in [1,32], `row` in [1,40].
///
/// Increasing `sy` moves north (toward larger universal y); increasing `row`
/// moves south within a sector. Every operation returns a new address with
/// locals back in range.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct SectorHex {
    pub sx: i32,
    pub sy: i32,
    pub col: i32,
    pub row: i32,
}

impl SectorHex {
    /// Move by a signed delta in local col/row space. Positive `dy` moves
    /// south, toward larger rows. A single call may cross any number of
    /// sector boundaries on either axis.
    pub fn shift(&self, dx: i32, dy: i32) -> SectorHex {
        let (col, crossed_x) = wrap_axis(self.col, dx, SECTOR_COLS);
        let (row, crossed_y) = wrap_axis(self.row, dy, SECTOR_ROWS);
        // Crossing the south edge (positive row direction) lands in the
        // sector with the smaller sy.
        SectorHex { sx: self.sx + crossed_x, sy: self.sy - crossed_y, col, row }
    }

    /// Every hex in the closed rectangle spanned by the two corners, in the
    /// same row-major order as `Hex::between`, stitched across however many
    /// sectors the span touches.
    pub fn between(&self, other: &SectorHex) -> Vec<SectorHex> {
        Hex::from(*self).between(&Hex::from(*other))
            .into_iter().map(SectorHex::from).collect()
    }

    pub fn sector(&self) -> Sector {
        Sector(self.sx, self.sy)
    }

    /// Deterministic map key, unique per address.
    pub fn key(&self) -> String {
        format!("{}.{}.{}.{}", self.sx, self.sy, self.col, self.row)
    }

    /// 4-digit hex number shown on the map, e.g. "0140". Unique only within
    /// a sector; never a lookup key.
    pub fn label(&self) -> String {
        format!("{:02}{:02}", self.col, self.row)
    }
}

/// Move a 1-based coordinate on a wrapping axis of `size` hexes. Returns the
/// new coordinate, still in [1, size], and the number of whole sectors
/// crossed (signed, in the direction of the delta).
///
/// The coordinate's position on the infinite line is `current - 1 + delta`;
/// euclidean remainder and division split that into an in-sector offset and
/// a sector count that are exact for any delta, including none (identity)
/// and moves spanning many sectors.
pub fn wrap_axis(current: i32, delta: i32, size: i32) -> (i32, i32) {
    let line = current - 1 + delta;
    (line.rem_euclid(size) + 1, line.div_euclid(size))
}

/// The sectors a rectangle touches, deduplicated, in row-major order
/// (ascending sy, then ascending sx). Feed the result to per-sector request
/// batching.
pub fn sectors_between(a: &Hex, b: &Hex) -> Vec<Sector> {
    let corner_a = SectorHex::from(Hex { x: a.x.min(b.x), y: a.y.min(b.y) });
    let corner_b = SectorHex::from(Hex { x: a.x.max(b.x), y: a.y.max(b.y) });
    (corner_a.sy..=corner_b.sy)
        .flat_map(|sy| (corner_a.sx..=corner_b.sx).map(move |sx| Sector(sx, sy)))
        .collect()
}

impl From<SectorHex> for Hex {
    fn from(it: SectorHex) -> Hex {
        Hex {
            x: it.col + it.sx * SECTOR_COLS,
            y: it.sy * SECTOR_ROWS - it.row,
        }
    }
}

impl From<Hex> for SectorHex {
    fn from(it: Hex) -> SectorHex {
        // Floor division, not truncation: x = -1 is column 31 of sector -1,
        // and a coordinate exactly on a boundary resolves to one sector only.
        let sx = (it.x - 1).div_euclid(SECTOR_COLS);
        let col = (it.x - 1).rem_euclid(SECTOR_COLS) + 1;
        let sy = it.y.div_euclid(SECTOR_ROWS) + 1;
        let row = sy * SECTOR_ROWS - it.y;
        SectorHex { sx, sy, col, row }
    }
}

impl fmt::Display for SectorHex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.col, self.row)
    }
}
