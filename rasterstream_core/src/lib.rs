//! Partitioning of large raster regions into bounded-memory pieces.
//!
//! A [`Region`] is cut by one of the [`splitter`]s into pieces that together cover it exactly
//! once. [`streaming`] managers decide how many pieces a writer needs for a RAM budget, a piece
//! count or a tile size, and [`config`] builds them from YAML or extended filenames.
//!
//! ```
//! use rasterstream_core::{AdaptiveSplitter, Region, TileHint, split_map};
//!
//! // 4 x 4 storage tiles of 256 px, grouped into 4 pieces
//! let mut splitter = AdaptiveSplitter::new(TileHint::new([256, 256]));
//! let pieces = split_map(&mut splitter, &Region::new([0, 0], [1024, 1024]), 4);
//! assert_eq!(pieces.len(), 4);
//! assert_eq!(pieces[0], Region::new([0, 0], [512, 512]));
//! ```

pub mod config;

pub mod splitter;

pub mod streaming;

pub mod types;

pub use splitter::*;
pub use streaming::*;
pub use types::*;
