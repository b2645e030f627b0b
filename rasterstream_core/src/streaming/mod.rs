//! Streaming managers decide how many pieces a region is written in.
//!
//! A manager is prepared once for a region, then hands out the pieces of that region to the
//! (possibly multi-threaded) caller:
//!
//! ```
//! # use rasterstream_core::{NumberOfDivisionsStreamingManager, PixelFootprint, Region, StreamingManager};
//! let mut manager = NumberOfDivisionsStreamingManager::tiled(4);
//! manager.prepare_streaming(&PixelFootprint::new(4.0), &Region::new([0, 0], [1024, 1024]));
//! assert_eq!(manager.number_of_splits(), 4);
//! assert_eq!(manager.split(3), Region::new([512, 512], [512, 512]));
//! ```
//!
//! Policies differ in how they derive the piece count (a fixed count, a tile edge, a number of
//! lines or a RAM budget) and in the [`SplitLayout`] of the pieces.

mod memory;
mod number_of_divisions;
mod number_of_lines;
mod ram_driven;
mod tile_dimension;

pub use memory::*;
pub use number_of_divisions::*;
pub use number_of_lines::*;
pub use ram_driven::*;
pub use tile_dimension::*;

use crate::{AdaptiveSplitter, Region, SquareTileSplitter, StripSplitter, TileHint, splitter::Splitter};
#[cfg(feature = "cli")]
use clap::ValueEnum;
use enumset::EnumSetType;
use std::fmt::Display;

/// The contract between a streaming writer and its manager.
///
/// `prepare_streaming` is called once, then `number_of_splits` and any number of `split`
/// calls, in any order and from any thread.
pub trait StreamingManager<const D: usize>: Send + Sync {
	/// Compute the pieces `region` is streamed in.
	fn prepare_streaming(&mut self, input: &dyn StreamingInput<D>, region: &Region<D>);

	/// Number of pieces computed by the last `prepare_streaming`.
	fn number_of_splits(&self) -> usize;

	/// Piece `i` of the prepared region.
	///
	/// # Panics
	/// Panics if the manager was not prepared or if `i >= number_of_splits()`.
	fn split(&self, i: usize) -> Region<D>;

	/// Policy name, e.g. `RAMDrivenAdaptive`.
	fn name(&self) -> &str;
}

/// Shape of the pieces a manager hands out.
#[cfg_attr(feature = "cli", derive(ValueEnum))]
#[derive(Debug, EnumSetType)]
pub enum SplitLayout {
	/// Square tiles, see [`SquareTileSplitter`].
	Tiled,
	/// Full-width strips of lines, see [`StripSplitter`].
	Stripped,
	/// Pieces following the storage tiles, see [`AdaptiveSplitter`].
	Adaptive,
}

impl SplitLayout {
	pub fn as_str(&self) -> &str {
		match self {
			SplitLayout::Tiled => "tiled",
			SplitLayout::Stripped => "stripped",
			SplitLayout::Adaptive => "adaptive",
		}
	}

	fn splitter<const D: usize>(&self, tile_hint: TileHint<D>) -> Box<dyn Splitter<D>> {
		match self {
			SplitLayout::Tiled => Box::new(SquareTileSplitter::<D>::default()),
			SplitLayout::Stripped => Box::new(StripSplitter::new()),
			SplitLayout::Adaptive => Box::new(AdaptiveSplitter::new(tile_hint)),
		}
	}
}

impl Display for SplitLayout {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// The splitter, region and piece count a manager was prepared with.
#[derive(Default)]
pub struct StreamingPlan<const D: usize> {
	splitter: Option<Box<dyn Splitter<D>>>,
	region: Region<D>,
	number_of_splits: usize,
}

impl<const D: usize> StreamingPlan<D> {
	/// Let a splitter of `layout` cut `region` into roughly `requested` pieces.
	pub fn prepare(&mut self, layout: SplitLayout, tile_hint: TileHint<D>, region: &Region<D>, requested: usize) {
		let mut splitter = layout.splitter(tile_hint);
		self.number_of_splits = splitter.number_of_splits(region, requested);
		self.region = *region;
		self.splitter = Some(splitter);

		log::debug!(
			"streaming {region} in {} {layout} pieces ({requested} requested)",
			self.number_of_splits
		);
	}

	pub fn number_of_splits(&self) -> usize {
		self.number_of_splits
	}

	pub fn region(&self) -> &Region<D> {
		&self.region
	}

	pub fn split(&self, i: usize) -> Region<D> {
		let Some(splitter) = &self.splitter else {
			panic!("streaming must be prepared before requesting split {i}");
		};
		crate::splitter::check_split_index(i, self.number_of_splits);
		splitter.split(i, self.number_of_splits, &self.region)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	#[should_panic(expected = "streaming must be prepared before requesting split 0")]
	fn split_before_prepare() {
		StreamingPlan::<2>::default().split(0);
	}

	#[test]
	#[should_panic(expected = "split index (4) must be < number of pieces (4)")]
	fn split_out_of_range() {
		let mut plan = StreamingPlan::default();
		plan.prepare(SplitLayout::Tiled, TileHint::undefined(), &Region::new([0, 0], [1024, 1024]), 4);
		plan.split(4);
	}

	#[test]
	fn prepared_plan() {
		let region = Region::new([-8, 8], [100, 10]);
		let mut plan = StreamingPlan::default();
		plan.prepare(SplitLayout::Stripped, TileHint::undefined(), &region, 2);
		assert_eq!(plan.number_of_splits(), 2);
		assert_eq!(plan.region(), &region);
		assert_eq!(plan.split(1), Region::new([-8, 13], [100, 5]));
	}

	#[test]
	fn layout_names() {
		let names: Vec<String> = enumset::EnumSet::<SplitLayout>::all()
			.iter()
			.map(|layout| layout.to_string())
			.collect();
		assert_eq!(names, ["tiled", "stripped", "adaptive"]);
	}
}
