use super::{SplitLayout, StreamingInput, StreamingManager, StreamingPlan};
use crate::{Region, TileHint, splitter::ceil_div};

/// Streams a region in strips of a fixed number of lines.
pub struct NumberOfLinesStreamingManager<const D: usize> {
	lines_per_strip: u64,
	plan: StreamingPlan<D>,
}

impl<const D: usize> NumberOfLinesStreamingManager<D> {
	pub fn new(lines_per_strip: u64) -> Self {
		NumberOfLinesStreamingManager {
			lines_per_strip,
			plan: StreamingPlan::default(),
		}
	}

	pub fn lines_per_strip(&self) -> u64 {
		self.lines_per_strip
	}
}

impl<const D: usize> StreamingManager<D> for NumberOfLinesStreamingManager<D> {
	fn prepare_streaming(&mut self, _input: &dyn StreamingInput<D>, region: &Region<D>) {
		let lines_per_strip = if self.lines_per_strip == 0 {
			log::warn!("number of lines per strip is 0, using 1");
			1
		} else {
			self.lines_per_strip
		};

		let lines = region.size().last().copied().unwrap_or(0);
		let divisions = ceil_div(lines, lines_per_strip);
		self.plan.prepare(SplitLayout::Stripped, TileHint::undefined(), region, divisions as usize);
	}

	fn number_of_splits(&self) -> usize {
		self.plan.number_of_splits()
	}

	fn split(&self, i: usize) -> Region<D> {
		self.plan.split(i)
	}

	fn name(&self) -> &str {
		"NumberOfLinesStripped"
	}
}
