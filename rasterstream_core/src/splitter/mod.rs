//! Partitioning of raster regions into streaming pieces.
//!
//! Every splitter answers two questions about a [`Region`]: how many pieces it will be
//! cut into for a requested piece count, and which region the `i`-th piece covers.
//! Together the pieces of one region always cover it exactly once.
//!
//! | splitter             | piece shape                                      |
//! | -------------------- | ------------------------------------------------ |
//! | [`SquareTileSplitter`] | square tiles, edge a multiple of an alignment   |
//! | [`TileMapSplitter`]    | cells of a fixed absolute grid                  |
//! | [`AdaptiveSplitter`]   | groups or subdivisions of the storage tiles     |
//! | [`StripSplitter`]      | full-width strips of lines                      |

mod adaptive;
mod square_tile;
mod strip;
mod tile_map;

pub use adaptive::*;
pub use square_tile::*;
pub use strip::*;
pub use tile_map::*;

use crate::Region;
#[cfg(feature = "cli")]
use clap::ValueEnum;
use enumset::EnumSetType;
use std::fmt::Display;

/// The contract shared by all splitters.
///
/// `number_of_splits` must be called for a region before `split` is called for it.
/// Indices passed to `split` must be lower than the returned count; anything else is a
/// caller error and panics.
pub trait Splitter<const D: usize>: Send + Sync {
	/// Compute the partition of `region` for roughly `requested` pieces and return the
	/// actual number of pieces.
	fn number_of_splits(&mut self, region: &Region<D>, requested: usize) -> usize;

	/// Return piece `i` of `number_of_pieces` of `region`.
	///
	/// # Panics
	/// Panics if `i >= number_of_pieces`.
	fn split(&self, i: usize, number_of_pieces: usize, region: &Region<D>) -> Region<D>;
}

/// Compute all pieces of `region` in order.
///
/// ```
/// # use rasterstream_core::{Region, SquareTileSplitter, split_map};
/// let mut splitter = SquareTileSplitter::new(16);
/// let pieces = split_map(&mut splitter, &Region::new([0, 0], [64, 32]), 2);
/// assert_eq!(pieces, [Region::new([0, 0], [32, 32]), Region::new([32, 0], [32, 32])]);
/// ```
pub fn split_map<const D: usize, S: Splitter<D> + ?Sized>(
	splitter: &mut S,
	region: &Region<D>,
	requested: usize,
) -> Vec<Region<D>> {
	let count = splitter.number_of_splits(region, requested);
	(0..count).map(|i| splitter.split(i, count, region)).collect()
}

/// Selects one of the splitters, e.g. from the command line.
#[cfg_attr(feature = "cli", derive(ValueEnum))]
#[derive(Debug, EnumSetType)]
pub enum SplitterKind {
	Square,
	TileMap,
	Adaptive,
	Strip,
}

impl SplitterKind {
	pub fn as_str(&self) -> &str {
		match self {
			SplitterKind::Square => "square",
			SplitterKind::TileMap => "tile-map",
			SplitterKind::Adaptive => "adaptive",
			SplitterKind::Strip => "strip",
		}
	}
}

impl Display for SplitterKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Panics unless `i` addresses one of `number_of_pieces` pieces.
pub(crate) fn check_split_index(i: usize, number_of_pieces: usize) {
	assert!(
		i < number_of_pieces,
		"split index ({i}) must be < number of pieces ({number_of_pieces})"
	);
}

pub(crate) fn ceil_div(numerator: u64, denominator: u64) -> u64 {
	numerator.div_ceil(denominator)
}

/// Division rounding towards negative infinity, for pixel indices left of the origin.
pub(crate) fn floor_div(numerator: i64, denominator: i64) -> i64 {
	numerator.div_euclid(denominator)
}

/// Division rounding towards positive infinity for signed pixel indices.
pub(crate) fn ceil_div_signed(numerator: i64, denominator: i64) -> i64 {
	-((-numerator).div_euclid(denominator))
}

/// Non-negative remainder matching [`floor_div`].
pub(crate) fn floor_mod(numerator: i64, denominator: i64) -> i64 {
	numerator.rem_euclid(denominator)
}
