//! # rasterstream
//!
//! Plans the streamed processing of large rasters: which pieces a region is cut into, and how
//! many are needed to stay within a RAM budget.
//!
//! The algorithms live in [`rasterstream_core`] and are re-exported here. The `rasterstream`
//! binary prints split maps and streaming plans on the command line.
//!
//! ```rust
//! use rasterstream::{PixelFootprint, Region, StreamingManager, config::StreamingConfig};
//!
//! let config = StreamingConfig::from_string("type: tiled\nsize_mode: nbsplits\nsize_value: 4").unwrap();
//! let mut manager = config.build_manager::<2>().unwrap();
//! manager.prepare_streaming(&PixelFootprint::new(4.0), &Region::new([0, 0], [2048, 2048]));
//!
//! for i in 0..manager.number_of_splits() {
//!     println!("{}", manager.split(i));
//! }
//! ```

pub use rasterstream_core::*;
