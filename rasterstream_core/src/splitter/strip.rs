//! Full-width strips along the slowest varying axis.
//!
//! Line-oriented formats write an image strip by strip. Pieces therefore span the whole
//! region in every axis but the last, and are cut into runs of lines of equal height.
//! Only the last strip may be shorter.

use super::{Splitter, ceil_div, check_split_index};
use crate::Region;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StripSplitter {
	lines_per_strip: u64,
}

impl StripSplitter {
	pub fn new() -> Self {
		StripSplitter::default()
	}

	/// Height of a strip computed by the last call to [`Splitter::number_of_splits`].
	pub fn lines_per_strip(&self) -> u64 {
		self.lines_per_strip
	}
}

impl<const D: usize> Splitter<D> for StripSplitter {
	fn number_of_splits(&mut self, region: &Region<D>, requested: usize) -> usize {
		if region.is_empty() {
			self.lines_per_strip = 0;
			return 0;
		}
		let lines = region.size()[D - 1];
		let requested = (requested.max(1) as u64).min(lines);

		self.lines_per_strip = ceil_div(lines, requested);
		let count = ceil_div(lines, self.lines_per_strip);

		log::trace!(
			"strips of {} lines for {region} ({requested} requested): {count} pieces",
			self.lines_per_strip
		);

		count as usize
	}

	fn split(&self, i: usize, number_of_pieces: usize, region: &Region<D>) -> Region<D> {
		check_split_index(i, number_of_pieces);

		let axis = D - 1;
		let lines = region.size()[axis];
		let offset = (i as u64 * self.lines_per_strip).min(lines);
		let height = self.lines_per_strip.min(lines - offset);

		let mut piece = *region;
		piece.set_axis(axis, region.index()[axis] + offset as i64, height);
		piece
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::split_map;
	use rstest::rstest;

	#[rstest]
	#[case(1000, 4, 250, 4)]
	#[case(1000, 3, 334, 3)]
	#[case(10, 4, 3, 4)]
	#[case(10, 6, 2, 5)]
	#[case(5, 100, 1, 5)]
	#[case(5, 0, 5, 1)]
	fn strip_height(#[case] lines: u64, #[case] requested: usize, #[case] height: u64, #[case] count: usize) {
		let mut splitter = StripSplitter::new();
		let region = Region::new([-3, 17], [640, lines]);
		assert_eq!(splitter.number_of_splits(&region, requested), count);
		assert_eq!(splitter.lines_per_strip(), height);
	}

	#[test]
	fn strips_cover_full_width() {
		let region = Region::new([-3, 17], [640, 10]);
		let mut splitter = StripSplitter::new();
		assert_eq!(
			split_map(&mut splitter, &region, 4),
			[
				Region::new([-3, 17], [640, 3]),
				Region::new([-3, 20], [640, 3]),
				Region::new([-3, 23], [640, 3]),
				Region::new([-3, 26], [640, 1]),
			]
		);
	}

	#[test]
	fn last_axis_of_three() {
		let region = Region::new([0, 0, 0], [4, 4, 9]);
		let mut splitter = StripSplitter::new();
		let pieces = split_map(&mut splitter, &region, 3);
		assert_eq!(pieces.len(), 3);
		assert_eq!(pieces[2], Region::new([0, 0, 6], [4, 4, 3]));
	}
}
