//! Axis-aligned integer regions of a raster.
//!
//! A `Region` describes a **rectangular block of pixels** in `D` dimensions. It is
//! stored as the index of its first pixel plus its extent per axis. Pixel indices are
//! signed (a region may start left of or above the image origin), extents are unsigned.
//!
//! ## Conventions
//! - Axis `0` is the fastest varying axis (columns), the last axis is the slowest (lines).
//! - The pixels covered along axis `d` are `index[d] .. index[d] + size[d]` (half-open).
//! - A region is *empty* when any extent is zero. Empty regions never intersect anything.
//!
//! ## Examples
//! ```
//! # use rasterstream_core::Region;
//! let region = Region::new([10, 20], [100, 50]);
//! assert_eq!(region.pixel_count(), 5000);
//! assert_eq!(region.upper_index(), [110, 70]);
//! ```

/// A rectangular block of pixels in `D` dimensions.
///
/// # Example
/// ```
/// # use rasterstream_core::Region;
/// let region = Region::new([-42, -42], [1000, 1000]);
/// assert_eq!(region.index(), &[-42, -42]);
/// assert_eq!(region.size(), &[1000, 1000]);
/// ```
#[derive(Clone, Copy, Hash, PartialEq, Eq)]
pub struct Region<const D: usize> {
	/// Index of the first pixel.
	index: [i64; D],
	/// Extent per axis in pixels.
	size: [u64; D],
}

impl<const D: usize> Region<D> {
	/// Create a region from the index of its first pixel and its extent.
	pub const fn new(index: [i64; D], size: [u64; D]) -> Self {
		Region { index, size }
	}

	/// Create a region anchored at the origin.
	///
	/// ```
	/// # use rasterstream_core::Region;
	/// let region = Region::from_size([512, 256]);
	/// assert_eq!(region.index(), &[0, 0]);
	/// ```
	pub const fn from_size(size: [u64; D]) -> Self {
		Region { index: [0; D], size }
	}

	/// Create an empty region at the origin.
	pub const fn empty() -> Self {
		Region {
			index: [0; D],
			size: [0; D],
		}
	}

	/// Create the region spanned by a lower (inclusive) and an upper (exclusive) index.
	///
	/// Axes where `upper <= lower` get a zero extent, so the result is empty.
	///
	/// ```
	/// # use rasterstream_core::Region;
	/// let region = Region::from_bounds([-5, 0], [5, 3]);
	/// assert_eq!(region.size(), &[10, 3]);
	/// ```
	pub fn from_bounds(lower: [i64; D], upper: [i64; D]) -> Self {
		let mut size = [0u64; D];
		for d in 0..D {
			size[d] = if upper[d] > lower[d] {
				(upper[d] - lower[d]) as u64
			} else {
				0
			};
		}
		Region { index: lower, size }
	}

	pub const fn index(&self) -> &[i64; D] {
		&self.index
	}

	pub const fn size(&self) -> &[u64; D] {
		&self.size
	}

	/// Set the index and the extent along a single axis.
	///
	/// # Panics
	/// Panics if `axis >= D`.
	pub fn set_axis(&mut self, axis: usize, index: i64, size: u64) {
		assert!(axis < D, "axis ({axis}) must be < dimension ({D})");
		self.index[axis] = index;
		self.size[axis] = size;
	}
}

impl<const D: usize> Default for Region<D> {
	fn default() -> Self {
		Region::empty()
	}
}
