use crate::Region;
use anyhow::{Context, Error, Result, ensure};
use std::str::FromStr;

/// Parses `"x,y,w,h"`: all index components followed by all extents.
///
/// Separators may be commas, semicolons or spaces.
///
/// ```
/// # use rasterstream_core::Region;
/// let region: Region<2> = "-42,-42,1000,1000".parse().unwrap();
/// assert_eq!(region, Region::new([-42, -42], [1000, 1000]));
/// ```
impl<const D: usize> FromStr for Region<D> {
	type Err = Error;

	fn from_str(text: &str) -> Result<Self> {
		let parts: Vec<&str> = text.split([' ', ',', ';']).filter(|s| !s.is_empty()).collect();
		ensure!(
			parts.len() == 2 * D,
			"a {D}-dimensional region needs {} numbers (index then size), but got {}: {text:?}",
			2 * D,
			parts.len()
		);

		let mut index = [0i64; D];
		let mut size = [0u64; D];
		for d in 0..D {
			index[d] = parts[d]
				.parse()
				.with_context(|| format!("index component {:?} is not an integer", parts[d]))?;
			size[d] = parts[D + d]
				.parse()
				.with_context(|| format!("size component {:?} is not an unsigned integer", parts[D + d]))?;
		}
		Ok(Region::new(index, size))
	}
}
