use super::{SplitLayout, StreamingInput, StreamingManager, StreamingPlan};
use crate::Region;

/// Streams a region in a fixed number of pieces.
///
/// The adaptive layout groups or divides the storage tiles of the input.
pub struct NumberOfDivisionsStreamingManager<const D: usize> {
	layout: SplitLayout,
	number_of_divisions: usize,
	plan: StreamingPlan<D>,
}

impl<const D: usize> NumberOfDivisionsStreamingManager<D> {
	/// A count of `0` is treated as one requested division.
	pub fn new(layout: SplitLayout, number_of_divisions: usize) -> Self {
		NumberOfDivisionsStreamingManager {
			layout,
			number_of_divisions,
			plan: StreamingPlan::default(),
		}
	}

	pub fn tiled(number_of_divisions: usize) -> Self {
		Self::new(SplitLayout::Tiled, number_of_divisions)
	}

	pub fn stripped(number_of_divisions: usize) -> Self {
		Self::new(SplitLayout::Stripped, number_of_divisions)
	}

	pub fn number_of_divisions(&self) -> usize {
		self.number_of_divisions
	}
}

impl<const D: usize> StreamingManager<D> for NumberOfDivisionsStreamingManager<D> {
	fn prepare_streaming(&mut self, input: &dyn StreamingInput<D>, region: &Region<D>) {
		let divisions = if self.number_of_divisions == 0 {
			log::warn!("number of divisions is 0, requesting one division of {region}");
			1
		} else {
			self.number_of_divisions
		};
		self.plan.prepare(self.layout, input.tile_hint(), region, divisions);
	}

	fn number_of_splits(&self) -> usize {
		self.plan.number_of_splits()
	}

	fn split(&self, i: usize) -> Region<D> {
		self.plan.split(i)
	}

	fn name(&self) -> &str {
		match self.layout {
			SplitLayout::Tiled => "NumberOfDivisionsTiled",
			SplitLayout::Stripped => "NumberOfDivisionsStripped",
			SplitLayout::Adaptive => "NumberOfDivisionsAdaptive",
		}
	}
}
