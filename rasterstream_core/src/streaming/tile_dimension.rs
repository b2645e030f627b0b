use super::{SplitLayout, StreamingInput, StreamingManager, StreamingPlan};
use crate::{Region, TileHint, splitter::ceil_div};

/// Smallest tile edge [`TileDimensionStreamingManager`] accepts.
pub const MIN_TILE_DIMENSION: u64 = 16;

/// Streams a region in square tiles of roughly `tile_dimension` pixels per edge.
pub struct TileDimensionStreamingManager<const D: usize> {
	tile_dimension: u64,
	plan: StreamingPlan<D>,
}

impl<const D: usize> TileDimensionStreamingManager<D> {
	pub fn new(tile_dimension: u64) -> Self {
		TileDimensionStreamingManager {
			tile_dimension,
			plan: StreamingPlan::default(),
		}
	}

	pub fn tile_dimension(&self) -> u64 {
		self.tile_dimension
	}
}

impl<const D: usize> StreamingManager<D> for TileDimensionStreamingManager<D> {
	fn prepare_streaming(&mut self, _input: &dyn StreamingInput<D>, region: &Region<D>) {
		let mut tile_dimension = self.tile_dimension;
		if tile_dimension < MIN_TILE_DIMENSION {
			log::warn!("tile dimension {tile_dimension} is below {MIN_TILE_DIMENSION}, using {MIN_TILE_DIMENSION}");
			tile_dimension = MIN_TILE_DIMENSION;
		}

		let divisions = ceil_div(region.pixel_count(), tile_dimension.saturating_mul(tile_dimension));
		self.plan.prepare(SplitLayout::Tiled, TileHint::undefined(), region, divisions as usize);
	}

	fn number_of_splits(&self) -> usize {
		self.plan.number_of_splits()
	}

	fn split(&self, i: usize) -> Region<D> {
		self.plan.split(i)
	}

	fn name(&self) -> &str {
		"TileDimensionTiled"
	}
}
