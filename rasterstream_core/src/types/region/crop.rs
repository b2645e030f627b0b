//! Cropping regions against each other.
//!
//! Cropping yields the intersection of two regions. When the regions are disjoint, or
//! either one is empty, the intersection is not representable and cropping reports
//! failure instead of producing a zero-sized region.

use crate::Region;

impl<const D: usize> Region<D> {
	/// Returns the intersection of `self` and `other`, or `None` if they share no pixel.
	///
	/// ```
	/// # use rasterstream_core::Region;
	/// let a = Region::new([0, 0], [100, 100]);
	/// let b = Region::new([-20, 50], [40, 100]);
	/// assert_eq!(a.crop(&b), Some(Region::new([0, 50], [20, 50])));
	/// assert_eq!(a.crop(&Region::new([100, 0], [5, 5])), None);
	/// ```
	pub fn crop(&self, other: &Region<D>) -> Option<Region<D>> {
		if !self.intersects(other) {
			return None;
		}
		let upper = self.upper_index();
		let other_upper = other.upper_index();
		let mut lower = [0i64; D];
		let mut higher = [0i64; D];
		for d in 0..D {
			lower[d] = self.index()[d].max(other.index()[d]);
			higher[d] = upper[d].min(other_upper[d]);
		}
		Some(Region::from_bounds(lower, higher))
	}

	/// Crop this region in place to `other`.
	///
	/// Returns `false` and leaves the region untouched if the regions are disjoint.
	pub fn crop_to(&mut self, other: &Region<D>) -> bool {
		match self.crop(other) {
			Some(cropped) => {
				*self = cropped;
				true
			}
			None => false,
		}
	}
}
