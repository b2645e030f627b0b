//! Read-only queries on `Region`.

use crate::Region;

impl<const D: usize> Region<D> {
	/// Returns `true` when any extent is zero.
	pub fn is_empty(&self) -> bool {
		D == 0 || self.size().iter().any(|&s| s == 0)
	}

	/// Total number of pixels covered by the region.
	///
	/// ```
	/// # use rasterstream_core::Region;
	/// assert_eq!(Region::new([3, 4], [10, 20]).pixel_count(), 200);
	/// assert_eq!(Region::new([3, 4], [10, 0]).pixel_count(), 0);
	/// ```
	pub fn pixel_count(&self) -> u64 {
		if D == 0 {
			return 0;
		}
		self.size().iter().product()
	}

	/// Exclusive upper index along each axis (`index + size`).
	pub fn upper_index(&self) -> [i64; D] {
		let mut upper = *self.index();
		for d in 0..D {
			upper[d] += self.size()[d] as i64;
		}
		upper
	}

	/// Returns `true` if the pixel `index` lies inside the region.
	pub fn contains_index(&self, index: &[i64; D]) -> bool {
		let upper = self.upper_index();
		(0..D).all(|d| index[d] >= self.index()[d] && index[d] < upper[d])
	}

	/// Returns `true` if `other` lies entirely inside this region.
	///
	/// Empty regions are contained in every non-empty region.
	///
	/// ```
	/// # use rasterstream_core::Region;
	/// let outer = Region::new([0, 0], [256, 256]);
	/// assert!(outer.contains_region(&Region::new([128, 0], [128, 256])));
	/// assert!(!outer.contains_region(&Region::new([128, 0], [129, 256])));
	/// ```
	pub fn contains_region(&self, other: &Region<D>) -> bool {
		if other.is_empty() {
			return !self.is_empty();
		}
		let upper = self.upper_index();
		let other_upper = other.upper_index();
		(0..D).all(|d| other.index()[d] >= self.index()[d] && other_upper[d] <= upper[d])
	}

	/// Returns `true` if both regions share at least one pixel.
	pub fn intersects(&self, other: &Region<D>) -> bool {
		if self.is_empty() || other.is_empty() {
			return false;
		}
		let upper = self.upper_index();
		let other_upper = other.upper_index();
		(0..D).all(|d| self.index()[d] < other_upper[d] && other.index()[d] < upper[d])
	}
}
