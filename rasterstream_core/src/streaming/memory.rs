//! Memory budget of a streamed pipeline.
//!
//! The raster I/O layer knows how many bytes the pipeline upstream of a region needs per
//! pixel. Together with the RAM that may be used, this yields the number of pieces the
//! region must be cut into so that each one fits.

use crate::{Region, TileHint};
use anyhow::Result;

/// Environment variable holding the default RAM budget in MB.
pub const MAX_RAM_HINT_VARIABLE: &str = "RASTERSTREAM_MAX_RAM_HINT";

/// RAM budget in MB used when neither the caller nor the environment sets one.
pub const DEFAULT_MAX_RAM_HINT_MB: u64 = 256;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// What a streaming manager needs to know about the data it streams.
pub trait StreamingInput<const D: usize> {
	/// Bytes the whole pipeline needs per pixel of `region`.
	fn estimate_bytes_per_pixel(&self, region: &Region<D>) -> Result<f64>;

	/// Native tiling of the storage the data is read from.
	fn tile_hint(&self) -> TileHint<D> {
		TileHint::undefined()
	}
}

/// A [`StreamingInput`] with a fixed memory footprint per pixel.
///
/// ```
/// # use rasterstream_core::{PixelFootprint, Region, StreamingInput, TileHint};
/// let input = PixelFootprint::new(4.0).with_tile_hint(TileHint::new([256, 256]));
/// let region = Region::new([0, 0], [10, 10]);
/// assert_eq!(input.estimate_bytes_per_pixel(&region).unwrap(), 4.0);
/// assert_eq!(input.tile_hint(), TileHint::new([256, 256]));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelFootprint<const D: usize> {
	bytes_per_pixel: f64,
	tile_hint: TileHint<D>,
}

impl<const D: usize> PixelFootprint<D> {
	pub fn new(bytes_per_pixel: f64) -> Self {
		PixelFootprint {
			bytes_per_pixel,
			tile_hint: TileHint::undefined(),
		}
	}

	pub fn with_tile_hint(mut self, tile_hint: TileHint<D>) -> Self {
		self.tile_hint = tile_hint;
		self
	}
}

impl<const D: usize> StreamingInput<D> for PixelFootprint<D> {
	fn estimate_bytes_per_pixel(&self, _region: &Region<D>) -> Result<f64> {
		anyhow::ensure!(
			self.bytes_per_pixel.is_finite() && self.bytes_per_pixel >= 0.0,
			"invalid pixel footprint: {} bytes",
			self.bytes_per_pixel
		);
		Ok(self.bytes_per_pixel)
	}

	fn tile_hint(&self) -> TileHint<D> {
		self.tile_hint
	}
}

/// Default RAM budget in MB: the value of [`MAX_RAM_HINT_VARIABLE`] if it holds a positive
/// integer, otherwise [`DEFAULT_MAX_RAM_HINT_MB`].
pub fn default_ram_hint() -> u64 {
	match std::env::var(MAX_RAM_HINT_VARIABLE) {
		Ok(value) => parse_ram_hint(&value).unwrap_or_else(|| {
			log::warn!("ignoring {MAX_RAM_HINT_VARIABLE}={value:?}, using {DEFAULT_MAX_RAM_HINT_MB} MB");
			DEFAULT_MAX_RAM_HINT_MB
		}),
		Err(_) => DEFAULT_MAX_RAM_HINT_MB,
	}
}

fn parse_ram_hint(value: &str) -> Option<u64> {
	value.trim().parse::<u64>().ok().filter(|&mb| mb > 0)
}

/// Number of pieces needed to stream `region` within `available_ram_mb`.
///
/// A budget of `0` falls back to `default_ram_mb`. The estimated memory print of the whole
/// region is multiplied by `bias`. When the input cannot estimate its footprint the region
/// is streamed in a single piece.
///
/// ```
/// # use rasterstream_core::{PixelFootprint, Region, estimate_optimal_number_of_divisions};
/// // 4096 x 4096 pixels of 4 bytes = 64 MB, streamed in 16 MB
/// let region = Region::new([0, 0], [4096, 4096]);
/// let divisions = estimate_optimal_number_of_divisions(&PixelFootprint::new(4.0), &region, 16, 256, 1.0);
/// assert_eq!(divisions, 4);
/// ```
pub fn estimate_optimal_number_of_divisions<const D: usize>(
	input: &dyn StreamingInput<D>,
	region: &Region<D>,
	available_ram_mb: u64,
	default_ram_mb: u64,
	bias: f64,
) -> usize {
	let ram_mb = if available_ram_mb == 0 {
		default_ram_mb.max(1)
	} else {
		available_ram_mb
	};
	let available_bytes = ram_mb as f64 * BYTES_PER_MB;

	let bias = if bias.is_finite() && bias > 0.0 {
		bias
	} else {
		log::warn!("invalid memory bias {bias}, using 1.0");
		1.0
	};

	let bytes_per_pixel = match input.estimate_bytes_per_pixel(region) {
		Ok(bytes) => bytes,
		Err(err) => {
			log::warn!("could not estimate the memory print of {region}, requesting one division: {err:#}");
			return 1;
		}
	};

	let memory_print = bytes_per_pixel * region.pixel_count() as f64 * bias;
	let divisions = (memory_print / available_bytes).ceil().max(1.0) as usize;

	log::debug!(
		"memory print of {region}: {:.1} MB for {ram_mb} MB of RAM: {divisions} divisions",
		memory_print / BYTES_PER_MB
	);

	divisions
}
