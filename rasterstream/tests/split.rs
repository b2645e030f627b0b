use predicates::str;
use rstest::rstest;
use test_utilities::*;

#[test]
fn square_tiles() {
	rasterstream_cmd()
		.args(["split", "0,0,1024,1024", "-s", "square", "-n", "4"])
		.assert()
		.success()
		.stdout("0: [0,0] (512x512)\n1: [512,0] (512x512)\n2: [0,512] (512x512)\n3: [512,512] (512x512)\n")
		.stderr(str::contains("4 pieces"));
}

#[test]
fn tile_map_keeps_the_region_for_one_piece() {
	rasterstream_cmd()
		.args(["split", "42,42,1000,1000", "-s", "tile-map"])
		.assert()
		.success()
		.stdout("0: [42,42] (1000x1000)\n");
}

#[test]
fn adaptive_subdivides_storage_tiles() {
	let o = rasterstream_output("split 0,0,512,512 -s adaptive -n 16 -t 256x256");
	assert!(o.success, "stderr: {}", o.stderr);
	assert_eq!(o.stdout.lines().count(), 16);
	assert!(o.stdout.starts_with("0: [0,0] (128x128)\n"), "{}", o.stdout);
	assert!(o.stderr.contains("16 pieces"));
}

#[test]
fn negative_origin_strips() {
	rasterstream_cmd()
		.args(["split", "-42,-42,100,10", "-s", "strip", "-n", "2"])
		.assert()
		.success()
		.stdout("0: [-42,-42] (100x5)\n1: [-42,-37] (100x5)\n");
}

#[rstest]
#[case("split 0,0,10", "needs 4 numbers")]
#[case("split 0,0,10,x", "size component \"x\" is not an unsigned integer")]
#[case("split 0,0,10,10 -s hexagon", "invalid value 'hexagon'")]
#[case("split 0,0,10,10 -t 0x0x0", "has 3 components")]
fn invalid_arguments(#[case] args: &str, #[case] message: &str) {
	let o = rasterstream_output(args);
	assert_eq!(o.code, 2);
	assert!(o.stdout.is_empty());
	assert!(o.stderr.contains(message), "{}", o.stderr);
}
