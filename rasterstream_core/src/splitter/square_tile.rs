//! Near-square tiles whose edge is a multiple of an alignment constant.
//!
//! The tile edge is derived from the requested piece count: the square root of the
//! pixels each piece should hold, rounded up to the next multiple of
//! `tile_size_alignment` and never smaller than one alignment unit. Tiles at the right
//! and bottom border are cropped to the region. Rounding the edge up can produce fewer
//! pieces than requested; tiles never shrink below the alignment.

use super::{Splitter, ceil_div, check_split_index};
use crate::Region;

pub const DEFAULT_TILE_SIZE_ALIGNMENT: u64 = 16;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SquareTileSplitter<const D: usize> {
	tile_size_alignment: u64,
	tile_size: u64,
	splits_per_dimension: [u64; D],
}

impl<const D: usize> SquareTileSplitter<D> {
	/// Create a splitter whose tile edges are multiples of `tile_size_alignment`.
	///
	/// An alignment of `0` is treated as `1`.
	pub fn new(tile_size_alignment: u64) -> Self {
		SquareTileSplitter {
			tile_size_alignment: tile_size_alignment.max(1),
			tile_size: 0,
			splits_per_dimension: [0; D],
		}
	}

	pub fn tile_size_alignment(&self) -> u64 {
		self.tile_size_alignment
	}

	pub fn set_tile_size_alignment(&mut self, tile_size_alignment: u64) {
		self.tile_size_alignment = tile_size_alignment.max(1);
	}

	/// Tile edge computed by the last call to [`Splitter::number_of_splits`].
	pub fn tile_size(&self) -> u64 {
		self.tile_size
	}

	/// Tiles per axis computed by the last call to [`Splitter::number_of_splits`].
	pub fn splits_per_dimension(&self) -> &[u64; D] {
		&self.splits_per_dimension
	}
}

impl<const D: usize> Default for SquareTileSplitter<D> {
	fn default() -> Self {
		SquareTileSplitter::new(DEFAULT_TILE_SIZE_ALIGNMENT)
	}
}

impl<const D: usize> Splitter<D> for SquareTileSplitter<D> {
	fn number_of_splits(&mut self, region: &Region<D>, requested: usize) -> usize {
		let requested = requested.max(1) as u64;
		let alignment = self.tile_size_alignment;

		let ideal_pixels_per_tile = region.pixel_count() / requested;
		let ideal_edge = ideal_pixels_per_tile.isqrt();

		let mut tile_size = ceil_div(ideal_edge, alignment) * alignment;
		if tile_size < alignment {
			tile_size = alignment;
		}
		self.tile_size = tile_size;

		let mut count = 1u64;
		for (splits, &extent) in self.splits_per_dimension.iter_mut().zip(region.size()) {
			*splits = ceil_div(extent, tile_size);
			count *= *splits;
		}
		if D == 0 {
			count = 0;
		}

		log::trace!(
			"square tiles of {tile_size} px for {region} ({requested} requested): {:?} = {count} pieces",
			self.splits_per_dimension
		);

		count as usize
	}

	fn split(&self, i: usize, number_of_pieces: usize, region: &Region<D>) -> Region<D> {
		check_split_index(i, number_of_pieces);

		let mut remaining = i as u64;
		let mut index = *region.index();
		for d in 0..D {
			let splits = self.splits_per_dimension[d].max(1);
			let position = remaining % splits;
			remaining /= splits;
			index[d] += (position * self.tile_size) as i64;
		}

		let tile = Region::new(index, [self.tile_size; D]);
		match tile.crop(region) {
			Some(piece) => piece,
			None => panic!("split {i} of {region} is empty, number_of_splits has not been called for this region"),
		}
	}
}
