use super::{SizeMode, StreamingConfig, StreamingType};
use crate::{
	NumberOfDivisionsStreamingManager, NumberOfLinesStreamingManager, RamDrivenStreamingManager, SplitLayout,
	StreamingManager, TileDimensionStreamingManager,
};
use anyhow::{Result, ensure};

impl StreamingConfig {
	/// Create the streaming manager this configuration describes.
	///
	/// ```
	/// # use rasterstream_core::config::StreamingConfig;
	/// let config = StreamingConfig::from_extended_filename("out.tif?&streaming:type=stripped&streaming:sizemode=height&streaming:sizevalue=64").unwrap();
	/// assert_eq!(config.build_manager::<2>().unwrap().name(), "NumberOfLinesStripped");
	/// ```
	pub fn build_manager<const D: usize>(&self) -> Result<Box<dyn StreamingManager<D>>> {
		let bias = self.bias.unwrap_or(1.0);
		ensure!(bias.is_finite() && bias > 0.0, "bias must be a positive number, got {bias}");
		if let Some(default_ram_mb) = self.default_ram_mb {
			ensure!(default_ram_mb > 0, "default_ram_mb must be positive");
		}

		let Some(streaming_type) = self.streaming_type else {
			if self.size_mode.is_some() || self.size_value.is_some() {
				log::warn!("no streaming type is set, streaming size mode and size value are ignored");
			}
			return Ok(Box::new(self.ram_driven(SplitLayout::Adaptive, 0, bias)));
		};

		let size_mode = self.size_mode.unwrap_or(SizeMode::Auto);
		let size_value = self.size_value.unwrap_or(0);

		if size_value == 0 {
			match (streaming_type, size_mode) {
				(StreamingType::Disabled, _) => {}
				(StreamingType::Auto, _) | (_, SizeMode::Auto) => {
					log::warn!("streaming size value is 0, using the default RAM budget")
				}
				_ => log::warn!("streaming size mode is {size_mode} but size value is 0"),
			}
		}

		let manager: Box<dyn StreamingManager<D>> = match (streaming_type, size_mode) {
			(StreamingType::Auto, size_mode) => {
				if size_mode != SizeMode::Auto {
					log::warn!("streaming type is auto, size mode {size_mode} is ignored");
				}
				Box::new(self.ram_driven(SplitLayout::Adaptive, size_value, bias))
			}
			(StreamingType::Tiled, SizeMode::Auto) => Box::new(self.ram_driven(SplitLayout::Tiled, size_value, bias)),
			(StreamingType::Tiled, SizeMode::Nbsplits) => {
				Box::new(NumberOfDivisionsStreamingManager::tiled(size_value as usize))
			}
			(StreamingType::Tiled, SizeMode::Height) => Box::new(TileDimensionStreamingManager::new(size_value)),
			(StreamingType::Stripped, SizeMode::Auto) => {
				Box::new(self.ram_driven(SplitLayout::Stripped, size_value, bias))
			}
			(StreamingType::Stripped, SizeMode::Nbsplits) => {
				Box::new(NumberOfDivisionsStreamingManager::stripped(size_value as usize))
			}
			(StreamingType::Stripped, SizeMode::Height) => Box::new(NumberOfLinesStreamingManager::new(size_value)),
			(StreamingType::Disabled, _) => {
				if self.size_mode.is_some() || self.size_value.is_some() {
					log::warn!("streaming is disabled, streaming size mode and size value are ignored");
				}
				Box::new(NumberOfDivisionsStreamingManager::tiled(1))
			}
		};

		log::debug!("streaming with {}", manager.name());
		Ok(manager)
	}

	fn ram_driven<const D: usize>(&self, layout: SplitLayout, ram_mb: u64, bias: f64) -> RamDrivenStreamingManager<D> {
		let manager = RamDrivenStreamingManager::new(layout, ram_mb).with_bias(bias);
		match self.default_ram_mb {
			Some(default_ram_mb) => manager.with_default_ram_mb(default_ram_mb),
			None => manager,
		}
	}
}
