//! Splits synchronised with the tiling of the underlying storage.
//!
//! Reading a tiled file is cheapest when every storage tile is decoded exactly once. The
//! `AdaptiveSplitter` therefore builds its pieces from the storage tiles described by a
//! [`TileHint`]:
//!
//! * When the region touches at least as many storage tiles as pieces are requested,
//!   neighbouring tiles are grouped into blocks and every block becomes one piece.
//! * When the region touches fewer storage tiles, every storage tile is subdivided and
//!   each subdivision becomes one piece. Subdivisions never reach into a neighbouring
//!   storage tile.
//!
//! Without a usable hint, or for regions that are not two-dimensional, the pieces of a
//! [`SquareTileSplitter`] are used instead.
//!
//! The computed split map is cached. Setters mark the cache stale; the next query
//! recomputes it. Staleness check and recomputation happen under one lock, so the
//! splitter can be shared between worker threads that all query pieces concurrently.

use super::{DEFAULT_TILE_SIZE_ALIGNMENT, SquareTileSplitter, Splitter, ceil_div, ceil_div_signed, floor_div};
use crate::{Region, TileHint};
use itertools::Itertools;
use parking_lot::Mutex;

#[derive(Debug)]
struct SplitState<const D: usize> {
	image_region: Region<D>,
	tile_hint: TileHint<D>,
	requested_number_of_splits: usize,
	split_map: Vec<Region<D>>,
	is_up_to_date: bool,
}

impl<const D: usize> SplitState<D> {
	fn ensure_up_to_date(&mut self) {
		if !self.is_up_to_date {
			self.split_map = estimate_split_map(&self.image_region, &self.tile_hint, self.requested_number_of_splits);
			self.is_up_to_date = true;
		}
	}
}

#[derive(Debug)]
pub struct AdaptiveSplitter<const D: usize> {
	state: Mutex<SplitState<D>>,
}

impl<const D: usize> AdaptiveSplitter<D> {
	pub fn new(tile_hint: TileHint<D>) -> Self {
		AdaptiveSplitter {
			state: Mutex::new(SplitState {
				image_region: Region::empty(),
				tile_hint,
				requested_number_of_splits: 0,
				split_map: Vec::new(),
				is_up_to_date: false,
			}),
		}
	}

	pub fn tile_hint(&self) -> TileHint<D> {
		self.state.lock().tile_hint
	}

	pub fn image_region(&self) -> Region<D> {
		self.state.lock().image_region
	}

	pub fn requested_number_of_splits(&self) -> usize {
		self.state.lock().requested_number_of_splits
	}

	pub fn set_tile_hint(&mut self, tile_hint: TileHint<D>) {
		let state = self.state.get_mut();
		if state.tile_hint != tile_hint {
			state.tile_hint = tile_hint;
			state.is_up_to_date = false;
		}
	}

	pub fn set_image_region(&mut self, image_region: Region<D>) {
		let state = self.state.get_mut();
		if state.image_region != image_region {
			state.image_region = image_region;
			state.is_up_to_date = false;
		}
	}

	pub fn set_requested_number_of_splits(&mut self, requested: usize) {
		let state = self.state.get_mut();
		if state.requested_number_of_splits != requested {
			state.requested_number_of_splits = requested;
			state.is_up_to_date = false;
		}
	}

	/// Force the split map to be recomputed on the next query.
	pub fn modified(&self) {
		self.state.lock().is_up_to_date = false;
	}

	/// Returns `true` while the cached split map matches the current configuration.
	pub fn is_up_to_date(&self) -> bool {
		self.state.lock().is_up_to_date
	}

	/// A copy of the current split map, computing it first if needed.
	pub fn split_map(&self) -> Vec<Region<D>> {
		let mut state = self.state.lock();
		state.ensure_up_to_date();
		state.split_map.clone()
	}
}

impl<const D: usize> Default for AdaptiveSplitter<D> {
	fn default() -> Self {
		AdaptiveSplitter::new(TileHint::undefined())
	}
}

impl<const D: usize> Splitter<D> for AdaptiveSplitter<D> {
	fn number_of_splits(&mut self, region: &Region<D>, requested: usize) -> usize {
		self.set_image_region(*region);
		self.set_requested_number_of_splits(requested);

		let state = self.state.get_mut();
		state.ensure_up_to_date();
		state.split_map.len()
	}

	fn split(&self, i: usize, _number_of_pieces: usize, region: &Region<D>) -> Region<D> {
		let mut state = self.state.lock();
		if state.image_region != *region {
			state.image_region = *region;
			state.is_up_to_date = false;
		}
		state.ensure_up_to_date();

		assert!(
			i < state.split_map.len(),
			"split index ({i}) must be < number of pieces ({})",
			state.split_map.len()
		);
		state.split_map[i]
	}
}

fn estimate_split_map<const D: usize>(region: &Region<D>, tile_hint: &TileHint<D>, requested: usize) -> Vec<Region<D>> {
	if region.is_empty() {
		return Vec::new();
	}

	if requested <= 1 {
		log::debug!("single piece for {region}");
		return vec![*region];
	}

	if D != 2 || !tile_hint.is_defined() {
		log::debug!("no usable tile hint ({tile_hint:?}) for {region}, falling back to square tiles");
		let mut splitter = SquareTileSplitter::<D>::new(DEFAULT_TILE_SIZE_ALIGNMENT);
		let count = splitter.number_of_splits(region, requested);
		return (0..count).map(|i| splitter.split(i, count, region)).collect();
	}

	let hint = tile_hint.size();
	let index = region.index();
	let upper = region.upper_index();

	let mut first_tile = [0i64; D];
	let mut tiles_per_dim = [0u64; D];
	for d in 0..D {
		let step = hint[d] as i64;
		first_tile[d] = floor_div(index[d], step);
		tiles_per_dim[d] = (ceil_div_signed(upper[d], step) - first_tile[d]) as u64;
	}
	let total_tiles: u64 = tiles_per_dim.iter().product();
	let requested = requested as u64;

	let split_map = if total_tiles >= requested {
		group_tiles(region, hint, &first_tile, &tiles_per_dim, total_tiles, requested)
	} else {
		divide_tiles(region, hint, &first_tile, &tiles_per_dim, total_tiles, requested)
	};

	log::debug!(
		"{} pieces for {region} on {tile_hint:?} tiles ({total_tiles} tiles touched, {requested} requested)",
		split_map.len()
	);

	split_map
}

/// Every piece is a block of `group` storage tiles, cropped to the region.
fn group_tiles<const D: usize>(
	region: &Region<D>,
	hint: &[u64; D],
	first_tile: &[i64; D],
	tiles_per_dim: &[u64; D],
	total_tiles: u64,
	requested: u64,
) -> Vec<Region<D>> {
	let mut group = [1u64; D];
	let mut axis = 0;
	while total_tiles / group.iter().product::<u64>() > requested {
		if group[axis] < tiles_per_dim[axis] {
			group[axis] += 1;
		}
		axis = (axis + 1) % D;
	}
	log::trace!("grouping {group:?} storage tiles per piece");

	let mut block_size = [0u64; D];
	for d in 0..D {
		block_size[d] = group[d] * hint[d];
	}

	(0..ceil_div(tiles_per_dim[1], group[1]))
		.cartesian_product(0..ceil_div(tiles_per_dim[0], group[0]))
		.filter_map(|(by, bx)| {
			let block = [bx, by];
			let mut index = [0i64; D];
			for d in 0..D {
				index[d] = (first_tile[d] + (block[d] * group[d]) as i64) * hint[d] as i64;
			}
			Region::new(index, block_size).crop(region)
		})
		.collect()
}

/// Every storage tile is cut into `divide` pieces, each cropped to the region and to its tile.
fn divide_tiles<const D: usize>(
	region: &Region<D>,
	hint: &[u64; D],
	first_tile: &[i64; D],
	tiles_per_dim: &[u64; D],
	total_tiles: u64,
	requested: u64,
) -> Vec<Region<D>> {
	let mut divide = [1u64; D];
	let mut axis = 0;
	while total_tiles * divide.iter().product::<u64>() < requested {
		if (0..D).all(|d| divide[d] >= hint[d]) {
			break;
		}
		if divide[axis] < hint[axis] {
			divide[axis] += 1;
		}
		axis = (axis + 1) % D;
	}
	log::trace!("dividing every storage tile into {divide:?} pieces");

	let mut split_size = [0u64; D];
	for d in 0..D {
		split_size[d] = ceil_div(hint[d], divide[d]);
	}

	let mut split_map = Vec::new();
	for (ty, tx) in (0..tiles_per_dim[1]).cartesian_product(0..tiles_per_dim[0]) {
		let tile_position = [tx, ty];
		let mut tile_index = [0i64; D];
		for d in 0..D {
			tile_index[d] = (first_tile[d] + tile_position[d] as i64) * hint[d] as i64;
		}
		let tile = Region::new(tile_index, *hint);

		for (sy, sx) in (0..divide[1]).cartesian_product(0..divide[0]) {
			let sub_position = [sx, sy];
			let mut index = tile_index;
			for d in 0..D {
				index[d] += (sub_position[d] * split_size[d]) as i64;
			}
			let piece = Region::new(index, split_size)
				.crop(region)
				.and_then(|piece| piece.crop(&tile));
			if let Some(piece) = piece {
				split_map.push(piece);
			}
		}
	}
	split_map
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::split_map;
	use rstest::rstest;

	fn splitter(hint: u64) -> AdaptiveSplitter<2> {
		AdaptiveSplitter::new(TileHint::new([hint, hint]))
	}

	#[test]
	fn single_request_covers_everything() {
		let region = Region::new([0, 0], [512, 512]);
		let mut splitter = splitter(256);
		assert_eq!(splitter.number_of_splits(&region, 1), 1);
		assert_eq!(splitter.split(0, 1, &region), region);
	}

	#[test]
	fn subdivides_storage_tiles() {
		let region = Region::new([0, 0], [512, 512]);
		let mut splitter = splitter(256);
		let pieces = split_map(&mut splitter, &region, 16);
		assert_eq!(pieces.len(), 16);
		assert!(pieces.iter().all(|p| p.size() == &[128, 128]));

		// the four pieces of a storage tile are contiguous
		assert_eq!(
			pieces[0..4],
			[
				Region::new([0, 0], [128, 128]),
				Region::new([128, 0], [128, 128]),
				Region::new([0, 128], [128, 128]),
				Region::new([128, 128], [128, 128]),
			]
		);
		assert_eq!(pieces[4], Region::new([256, 0], [128, 128]));
	}

	#[test]
	fn groups_storage_tiles() {
		// 8x8 storage tiles of 64 px
		let region = Region::new([0, 0], [512, 512]);
		let mut splitter = splitter(64);
		let pieces = split_map(&mut splitter, &region, 4);
		assert_eq!(
			pieces,
			[
				Region::new([0, 0], [256, 256]),
				Region::new([256, 0], [256, 256]),
				Region::new([0, 256], [256, 256]),
				Region::new([256, 256], [256, 256]),
			]
		);
	}

	#[test]
	fn grouping_crops_to_unaligned_region() {
		let region = Region::new([100, -30], [300, 100]);
		let mut splitter = splitter(128);
		// x touches tiles 0..=3, y touches tiles -1..=0: 8 tiles
		let pieces = split_map(&mut splitter, &region, 8);
		assert_eq!(pieces.len(), 8);
		assert_eq!(pieces[0], Region::new([100, -30], [28, 30]));
		assert_eq!(pieces[3], Region::new([384, -30], [16, 30]));
		assert_eq!(pieces[7], Region::new([384, 0], [16, 70]));
	}

	#[test]
	fn subdivisions_stay_inside_their_storage_tile() {
		// hint 10 divided by 4 gives pieces of 3 px: the last piece is cut by the tile border
		let region = Region::new([0, 0], [20, 10]);
		let mut splitter = splitter(10);
		let pieces = split_map(&mut splitter, &region, 32);
		for piece in &pieces {
			let tile_x = piece.index()[0].div_euclid(10);
			let tile = Region::new([tile_x * 10, 0], [10, 10]);
			assert!(tile.contains_region(piece), "{piece} leaves {tile}");
		}
		let pixels: u64 = pieces.iter().map(Region::pixel_count).sum();
		assert_eq!(pixels, 200);
	}

	#[rstest]
	#[case(TileHint::new([0, 256]))]
	#[case(TileHint::undefined())]
	fn falls_back_without_hint(#[case] hint: TileHint<2>) {
		let region = Region::new([-42, -42], [1000, 1000]);
		let mut adaptive = AdaptiveSplitter::new(hint);
		let mut square = SquareTileSplitter::new(16);
		assert_eq!(split_map(&mut adaptive, &region, 4), split_map(&mut square, &region, 4));
	}

	#[test]
	fn falls_back_for_three_dimensions() {
		let region = Region::new([0, 0, 0], [64, 64, 64]);
		let mut adaptive = AdaptiveSplitter::new(TileHint::new([16, 16, 16]));
		let mut square = SquareTileSplitter::new(16);
		assert_eq!(split_map(&mut adaptive, &region, 512), split_map(&mut square, &region, 512));
	}

	#[test]
	fn setters_invalidate_the_cache() {
		let region = Region::new([0, 0], [512, 512]);
		let mut splitter = splitter(256);
		assert_eq!(splitter.number_of_splits(&region, 16), 16);
		assert!(splitter.is_up_to_date());

		// same values keep the cache
		splitter.set_image_region(region);
		splitter.set_requested_number_of_splits(16);
		assert!(splitter.is_up_to_date());

		splitter.set_tile_hint(TileHint::new([512, 512]));
		assert!(!splitter.is_up_to_date());
		assert_eq!(splitter.split_map().len(), 16);
		assert!(splitter.is_up_to_date());

		splitter.modified();
		assert!(!splitter.is_up_to_date());
	}

	#[test]
	fn split_recomputes_for_a_new_region() {
		let mut splitter = splitter(256);
		splitter.number_of_splits(&Region::new([0, 0], [512, 512]), 4);

		let other = Region::new([0, 0], [256, 256]);
		assert_eq!(splitter.split(0, 4, &other), Region::new([0, 0], [128, 128]));
		assert_eq!(splitter.image_region(), other);
		assert_eq!(splitter.requested_number_of_splits(), 4);
	}

	#[test]
	#[should_panic(expected = "split index (4) must be < number of pieces (4)")]
	fn index_out_of_range() {
		let region = Region::new([0, 0], [512, 512]);
		let mut splitter = splitter(256);
		let count = splitter.number_of_splits(&region, 4);
		splitter.split(count, count, &region);
	}
}
