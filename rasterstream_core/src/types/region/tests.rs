use crate::Region;
use rstest::rstest;

#[rstest]
#[case(Region::new([0, 0], [10, 10]), 100, false)]
#[case(Region::new([-5, 3], [1, 1]), 1, false)]
#[case(Region::new([0, 0], [0, 10]), 0, true)]
#[case(Region::new([7, 7], [10, 0]), 0, true)]
fn pixel_count_and_emptiness(#[case] region: Region<2>, #[case] pixels: u64, #[case] empty: bool) {
	assert_eq!(region.pixel_count(), pixels);
	assert_eq!(region.is_empty(), empty);
}

#[test]
fn accessors_and_queries() {
	let mut region = Region::new([-4, 2], [6, 3]);
	assert_eq!(region.index(), &[-4, 2]);
	assert_eq!(region.size(), &[6, 3]);
	assert_eq!(region.upper_index(), [2, 5]);
	assert!(region.contains_index(&[-4, 4]));
	assert!(!region.contains_index(&[2, 4]));

	assert!(region.crop_to(&Region::new([0, 0], [10, 10])));
	assert_eq!(region.index(), &[0, 2]);
	assert_eq!(region.size(), &[2, 3]);
	assert!(!region.crop_to(&Region::new([50, 50], [1, 1])));
	assert_eq!(region, Region::new([0, 2], [2, 3]));
}

#[test]
fn boolean_operations() {
	/*
		  #---#
	  #---# |
	  | | | |
	  | #-|-#
	  #---#
	*/
	let a = Region::new([0, 11], [3, 3]);
	let b = Region::new([1, 10], [3, 3]);

	assert!(a.intersects(&b));
	assert!(b.intersects(&a));
	assert_eq!(a.crop(&b), Some(Region::new([1, 11], [2, 2])));
	assert_eq!(b.crop(&a), Some(Region::new([1, 11], [2, 2])));
}

#[rstest]
// touching edges share no pixel
#[case(Region::new([0, 0], [10, 10]), Region::new([10, 0], [10, 10]))]
#[case(Region::new([0, 0], [10, 10]), Region::new([0, -10], [10, 10]))]
// far apart
#[case(Region::new([0, 0], [10, 10]), Region::new([100, 100], [1, 1]))]
// empty regions never intersect
#[case(Region::new([0, 0], [10, 10]), Region::new([2, 2], [0, 5]))]
#[case(Region::new([0, 0], [0, 0]), Region::new([0, 0], [10, 10]))]
fn crop_fails_without_intersection(#[case] a: Region<2>, #[case] b: Region<2>) {
	assert!(!a.intersects(&b));
	assert_eq!(a.crop(&b), None);

	let mut c = a;
	assert!(!c.crop_to(&b));
	assert_eq!(c, a);
}

#[test]
fn crop_with_negative_indices() {
	let image = Region::new([-42, -42], [1000, 1000]);
	let tile = Region::new([-64, -64], [64, 64]);
	assert_eq!(image.crop(&tile), Some(Region::new([-42, -42], [42, 42])));

	let mut tile = Region::new([944, 900], [64, 64]);
	assert!(tile.crop_to(&image));
	assert_eq!(tile, Region::new([944, 900], [14, 58]));
}

#[test]
fn crop_is_commutative_and_contained() {
	let a = Region::new([3, -7], [50, 31]);
	let b = Region::new([-10, 0], [30, 100]);
	let ab = a.crop(&b).unwrap();
	assert_eq!(Some(ab), b.crop(&a));
	assert!(a.contains_region(&ab));
	assert!(b.contains_region(&ab));
}

#[test]
fn contains() {
	let region = Region::new([10, 20], [5, 5]);
	assert!(region.contains_index(&[10, 20]));
	assert!(region.contains_index(&[14, 24]));
	assert!(!region.contains_index(&[15, 24]));
	assert!(!region.contains_index(&[9, 20]));

	assert!(region.contains_region(&region));
	assert!(region.contains_region(&Region::new([11, 21], [3, 3])));
	assert!(!region.contains_region(&Region::new([11, 21], [5, 3])));
}

#[test]
fn from_bounds_and_upper_index() {
	let region = Region::from_bounds([-3, 4], [7, 9]);
	assert_eq!(region, Region::new([-3, 4], [10, 5]));
	assert_eq!(region.upper_index(), [7, 9]);

	let inverted = Region::from_bounds([5, 5], [4, 9]);
	assert!(inverted.is_empty());
}

#[test]
fn set_axis() {
	let mut region = Region::new([0, 0, 0], [1, 1, 1]);
	region.set_axis(2, -4, 8);
	assert_eq!(region, Region::new([0, 0, -4], [1, 1, 8]));
}

#[test]
#[should_panic(expected = "axis (2) must be < dimension (2)")]
fn set_axis_out_of_range() {
	let mut region = Region::new([0, 0], [1, 1]);
	region.set_axis(2, 0, 1);
}

#[test]
fn one_dimensional() {
	let a = Region::new([-5], [10]);
	let b = Region::new([3], [10]);
	assert_eq!(a.crop(&b), Some(Region::new([3], [2])));
	assert_eq!(Region::<1>::default(), Region::empty());
}
