//! Native tile size of the storage underneath a raster.
//!
//! Tiled formats (tiled TIFF, JPEG2000, …) read and decode whole blocks at once. A
//! `TileHint` tells the splitters how large those blocks are, so that splits can be
//! aligned with them. A zero along any axis means the storage has no known tiling.

use anyhow::{Context, Error, Result, ensure};
use itertools::Itertools;
use std::{fmt, str::FromStr};

/// Edge length, per axis, of the storage's native tiles.
///
/// # Example
/// ```
/// # use rasterstream_core::TileHint;
/// assert!(TileHint::new([256, 256]).is_defined());
/// assert!(!TileHint::new([256, 0]).is_defined());
/// assert!(!TileHint::<2>::undefined().is_defined());
/// ```
#[derive(Clone, Copy, Hash, PartialEq, Eq)]
pub struct TileHint<const D: usize>([u64; D]);

impl<const D: usize> TileHint<D> {
	pub const fn new(size: [u64; D]) -> Self {
		TileHint(size)
	}

	/// A hint that carries no tiling information.
	pub const fn undefined() -> Self {
		TileHint([0; D])
	}

	/// Returns `true` when every axis has a non-zero tile edge.
	pub fn is_defined(&self) -> bool {
		D > 0 && self.0.iter().all(|&s| s > 0)
	}

	pub const fn size(&self) -> &[u64; D] {
		&self.0
	}

	/// Pixels in a single storage tile.
	pub fn pixel_count(&self) -> u64 {
		self.0.iter().product()
	}
}

impl<const D: usize> Default for TileHint<D> {
	fn default() -> Self {
		TileHint::undefined()
	}
}

impl<const D: usize> From<[u64; D]> for TileHint<D> {
	fn from(size: [u64; D]) -> Self {
		TileHint(size)
	}
}

impl<const D: usize> fmt::Display for TileHint<D> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0.iter().join("x"))
	}
}

impl<const D: usize> fmt::Debug for TileHint<D> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "TileHint({self})")
	}
}

/// Parses `"256x256"`. A single number is used for every axis.
impl<const D: usize> FromStr for TileHint<D> {
	type Err = Error;

	fn from_str(text: &str) -> Result<Self> {
		let values = text
			.split(['x', 'X', ','])
			.map(|s| {
				s.trim()
					.parse::<u64>()
					.with_context(|| format!("tile size {s:?} is not an unsigned integer"))
			})
			.collect::<Result<Vec<u64>>>()?;

		if values.len() == 1 {
			return Ok(TileHint([values[0]; D]));
		}

		ensure!(
			values.len() == D,
			"tile hint {text:?} has {} components, expected {D}",
			values.len()
		);
		let mut size = [0u64; D];
		size.copy_from_slice(&values);
		Ok(TileHint(size))
	}
}
