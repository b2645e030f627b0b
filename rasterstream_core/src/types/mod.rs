//! Contains the value types shared by splitters and streaming managers.

mod region;
pub use region::*;

mod tile_hint;
pub use tile_hint::*;
