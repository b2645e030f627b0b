use super::{SplitLayout, StreamingInput, StreamingManager, StreamingPlan, default_ram_hint, estimate_optimal_number_of_divisions};
use crate::Region;

/// Streams a region in as many pieces as needed to stay within a RAM budget.
///
/// The adaptive layout follows the storage tiles reported by the [`StreamingInput`].
pub struct RamDrivenStreamingManager<const D: usize> {
	layout: SplitLayout,
	available_ram_mb: u64,
	default_ram_mb: u64,
	bias: f64,
	plan: StreamingPlan<D>,
}

impl<const D: usize> RamDrivenStreamingManager<D> {
	/// `available_ram_mb == 0` uses [`default_ram_mb`](Self::default_ram_mb).
	pub fn new(layout: SplitLayout, available_ram_mb: u64) -> Self {
		RamDrivenStreamingManager {
			layout,
			available_ram_mb,
			default_ram_mb: default_ram_hint(),
			bias: 1.0,
			plan: StreamingPlan::default(),
		}
	}

	pub fn tiled(available_ram_mb: u64) -> Self {
		Self::new(SplitLayout::Tiled, available_ram_mb)
	}

	pub fn stripped(available_ram_mb: u64) -> Self {
		Self::new(SplitLayout::Stripped, available_ram_mb)
	}

	pub fn adaptive(available_ram_mb: u64) -> Self {
		Self::new(SplitLayout::Adaptive, available_ram_mb)
	}

	/// Multiplier applied to the estimated memory print.
	pub fn with_bias(mut self, bias: f64) -> Self {
		self.bias = bias;
		self
	}

	pub fn with_default_ram_mb(mut self, default_ram_mb: u64) -> Self {
		self.default_ram_mb = default_ram_mb;
		self
	}

	pub fn layout(&self) -> SplitLayout {
		self.layout
	}

	pub fn available_ram_mb(&self) -> u64 {
		self.available_ram_mb
	}

	pub fn default_ram_mb(&self) -> u64 {
		self.default_ram_mb
	}

	pub fn bias(&self) -> f64 {
		self.bias
	}
}

impl<const D: usize> StreamingManager<D> for RamDrivenStreamingManager<D> {
	fn prepare_streaming(&mut self, input: &dyn StreamingInput<D>, region: &Region<D>) {
		let divisions =
			estimate_optimal_number_of_divisions(input, region, self.available_ram_mb, self.default_ram_mb, self.bias);
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
			SplitLayout::Tiled => "RAMDrivenTiled",
			SplitLayout::Stripped => "RAMDrivenStripped",
			SplitLayout::Adaptive => "RAMDrivenAdaptive",
		}
	}
}
