//! Pieces aligned to a fixed, absolute grid.
//!
//! Split boundaries fall on multiples of `align_step` in image coordinates, wherever the
//! region itself starts. The first piece along an axis runs from the region start to the
//! first boundary it reaches, the last piece absorbs whatever remains after the last full
//! piece. This matches storage that is cut into fixed tiles (tile maps, tiled files) and
//! must be written tile by tile.

use super::{Splitter, ceil_div, check_split_index, floor_div, floor_mod};
use crate::Region;

pub const DEFAULT_ALIGN_STEP: u64 = 256;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileMapSplitter<const D: usize> {
	align_step: u64,
	splits_per_dimension: [u64; D],
}

impl<const D: usize> TileMapSplitter<D> {
	/// Create a splitter for a grid of `align_step` pixels. A step of `0` is treated as `1`.
	pub fn new(align_step: u64) -> Self {
		TileMapSplitter {
			align_step: align_step.max(1),
			splits_per_dimension: [0; D],
		}
	}

	pub fn align_step(&self) -> u64 {
		self.align_step
	}

	pub fn set_align_step(&mut self, align_step: u64) {
		self.align_step = align_step.max(1);
	}

	/// Pieces per axis computed by the last call to [`Splitter::number_of_splits`].
	pub fn splits_per_dimension(&self) -> &[u64; D] {
		&self.splits_per_dimension
	}

	/// Number of grid cells touched by `extent` pixels starting at `start`.
	fn cells_touched(&self, start: i64, extent: u64) -> u64 {
		if extent == 0 {
			return 0;
		}
		let step = self.align_step as i64;
		let last = start + extent as i64 - 1;
		(floor_div(last, step) - floor_div(start, step) + 1) as u64
	}
}

impl<const D: usize> Default for TileMapSplitter<D> {
	fn default() -> Self {
		TileMapSplitter::new(DEFAULT_ALIGN_STEP)
	}
}

impl<const D: usize> Splitter<D> for TileMapSplitter<D> {
	fn number_of_splits(&mut self, region: &Region<D>, requested: usize) -> usize {
		let requested = requested.max(1) as u64;
		let mut number_of_pieces = 1u64;

		for d in (0..D).rev() {
			let max_pieces = self.cells_touched(region.index()[d], region.size()[d]);
			if max_pieces == 0 {
				self.splits_per_dimension[d] = 0;
				number_of_pieces = 0;
				continue;
			}

			let remaining_to_do = ceil_div(requested, number_of_pieces.max(1));

			let mut step_per_piece = 1;
			if remaining_to_do < max_pieces {
				step_per_piece = max_pieces / remaining_to_do;
				// a coarser step is only taken while it still yields enough pieces
				if ceil_div(max_pieces, step_per_piece + 1) >= remaining_to_do {
					step_per_piece += 1;
				}
			}

			self.splits_per_dimension[d] = ceil_div(max_pieces, step_per_piece);
			number_of_pieces *= self.splits_per_dimension[d];
		}
		if D == 0 {
			number_of_pieces = 0;
		}

		log::trace!(
			"tile map grid of {} px for {region} ({requested} requested): {:?} = {number_of_pieces} pieces",
			self.align_step,
			self.splits_per_dimension
		);

		number_of_pieces as usize
	}

	fn split(&self, i: usize, number_of_pieces: usize, region: &Region<D>) -> Region<D> {
		check_split_index(i, number_of_pieces);

		let step = self.align_step;
		let mut piece = *region;
		let mut remaining = i as u64;

		for d in 0..D {
			let splits = self.splits_per_dimension[d].max(1);
			let slice = remaining % splits;
			remaining /= splits;

			if splits == 1 {
				continue;
			}

			let start = region.index()[d];
			let extent = region.size()[d] as i64;
			let end = start + extent;

			let general_split_size = (ceil_div(region.size()[d], splits * step) * step) as i64;
			let first_split_size = general_split_size - floor_mod(start, step as i64);
			let boundary = |k: u64| (start + first_split_size + (k as i64 - 1) * general_split_size).clamp(start, end);

			let lower = if slice == 0 { start } else { boundary(slice) };
			let upper = if slice == splits - 1 { end } else { boundary(slice + 1) };
			piece.set_axis(d, lower, (upper - lower).max(0) as u64);
		}

		piece
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::split_map;
	use rstest::rstest;

	#[test]
	fn single_request_returns_region() {
		let region = Region::new([42, 42], [1000, 1000]);
		let mut splitter = TileMapSplitter::new(256);
		let count = splitter.number_of_splits(&region, 1);
		assert_eq!(count, 1);
		assert_eq!(splitter.split(0, count, &region), region);
	}

	#[rstest]
	#[case(0, 1000, 4)]
	#[case(42, 1000, 5)]
	#[case(200, 100, 2)]
	#[case(-1, 2, 2)]
	#[case(-256, 256, 1)]
	#[case(255, 1, 1)]
	fn cells_touched(#[case] start: i64, #[case] extent: u64, #[case] cells: u64) {
		assert_eq!(TileMapSplitter::<1>::new(256).cells_touched(start, extent), cells);
	}

	#[test]
	fn boundaries_are_on_the_absolute_grid() {
		let region = Region::new([42, 42], [1000, 1000]);
		let mut splitter = TileMapSplitter::new(256);
		let pieces = split_map(&mut splitter, &region, 25);
		assert_eq!(splitter.splits_per_dimension(), &[5, 5]);
		assert_eq!(pieces.len(), 25);

		let xs: Vec<(i64, u64)> = pieces[0..5].iter().map(|p| (p.index()[0], p.size()[0])).collect();
		assert_eq!(xs, [(42, 214), (256, 256), (512, 256), (768, 256), (1024, 18)]);

		for piece in &pieces {
			for d in 0..2 {
				let lower = piece.index()[d];
				assert!(lower == 42 || lower % 256 == 0, "{piece} does not start on the grid");
			}
		}
	}

	#[test]
	fn groups_cells_when_fewer_pieces_are_requested() {
		// 10 cells of 256 px in each direction, 4 pieces requested
		let region = Region::new([0, 0], [2560, 2560]);
		let mut splitter = TileMapSplitter::new(256);
		let count = splitter.number_of_splits(&region, 4);
		// the last axis takes the whole budget: 10 / 4 -> 3 cells per piece -> 4 pieces
		assert_eq!(splitter.splits_per_dimension(), &[1, 4]);
		assert_eq!(count, 4);

		let pieces = split_map(&mut splitter, &region, 4);
		let ys: Vec<(i64, u64)> = pieces.iter().map(|p| (p.index()[1], p.size()[1])).collect();
		assert_eq!(ys, [(0, 768), (768, 768), (1536, 768), (2304, 256)]);
		assert!(pieces.iter().all(|p| p.size()[0] == 2560));
	}

	#[test]
	fn negative_origin() {
		let region = Region::new([-300, -10], [600, 20]);
		let mut splitter = TileMapSplitter::new(256);
		let pieces = split_map(&mut splitter, &region, 100);
		// x touches the cells starting at -512, -256, 0 and 256
		assert_eq!(splitter.splits_per_dimension(), &[4, 2]);
		assert_eq!(
			pieces,
			[
				Region::new([-300, -10], [44, 10]),
				Region::new([-256, -10], [256, 10]),
				Region::new([0, -10], [256, 10]),
				Region::new([256, -10], [44, 10]),
				Region::new([-300, 0], [44, 10]),
				Region::new([-256, 0], [256, 10]),
				Region::new([0, 0], [256, 10]),
				Region::new([256, 0], [44, 10]),
			]
		);
	}

	#[test]
	#[should_panic(expected = "split index (1) must be < number of pieces (1)")]
	fn index_out_of_range() {
		let region = Region::new([42, 42], [1000, 1000]);
		let mut splitter = TileMapSplitter::new(256);
		let count = splitter.number_of_splits(&region, 1);
		splitter.split(1, count, &region);
	}
}
