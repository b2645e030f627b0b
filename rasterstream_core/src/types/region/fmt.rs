use crate::Region;
use itertools::Itertools;
use std::fmt;

/// Implements `Display` for [`Region`].
///
/// ```text
/// [x,y] (wxh)
/// ```
///
/// Example:
/// ```
/// # use rasterstream_core::Region;
/// let region = Region::new([-42, 7], [1000, 24]);
/// assert_eq!(format!("{region}"), "[-42,7] (1000x24)");
/// ```
impl<const D: usize> fmt::Display for Region<D> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"[{}] ({})",
			self.index().iter().join(","),
			self.size().iter().join("x")
		)
	}
}

/// Implements `Debug` for [`Region`].
///
/// ```
/// # use rasterstream_core::Region;
/// let region = Region::new([0, 0], [16, 16]);
/// assert_eq!(format!("{region:?}"), "Region [0,0] (16x16)");
/// ```
impl<const D: usize> fmt::Debug for Region<D> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Region {self}")
	}
}
