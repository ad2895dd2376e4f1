mod hex;
mod map;
mod sector;

pub use hex::Hex;
pub use map::Map;
pub use sector::{sectors_between, wrap_axis, Sector, SectorHex, SECTOR_COLS, SECTOR_ROWS};
