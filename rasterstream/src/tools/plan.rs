use anyhow::Result;
use rasterstream_core::{PixelFootprint, Region, TileHint, config::StreamingConfig};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// region to stream: index then size, e.g. "0,0,40000,30000"
	#[arg(required = true, allow_hyphen_values = true)]
	region: Region<2>,

	/// streaming configuration file (YAML), see "help config"
	#[arg(long, short)]
	config: Option<PathBuf>,

	/// extended filename carrying streaming options,
	/// e.g. "out.tif?&streaming:type=tiled&streaming:sizemode=nbsplits&streaming:sizevalue=8"
	#[arg(long, short, conflicts_with = "config", verbatim_doc_comment)]
	streaming: Option<String>,

	/// memory the pipeline needs per pixel
	#[arg(long, short, default_value_t = 4.0)]
	bytes_per_pixel: f64,

	/// native storage tiling, e.g. "256x256"
	#[arg(long, short)]
	tile_hint: Option<TileHint<2>>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let config = if let Some(path) = &arguments.config {
		StreamingConfig::from_path(path)?
	} else if let Some(filename) = &arguments.streaming {
		StreamingConfig::from_extended_filename(filename)?
	} else {
		StreamingConfig::default()
	};
	log::debug!("{config:?}");

	let mut manager = config.build_manager::<2>()?;
	let input = PixelFootprint::new(arguments.bytes_per_pixel).with_tile_hint(arguments.tile_hint.unwrap_or_default());
	manager.prepare_streaming(&input, &arguments.region);

	let count = manager.number_of_splits();
	log::info!("{} plans {count} pieces for {}", manager.name(), arguments.region);

	super::print_pieces((0..count).map(|i| manager.split(i)))?;
	eprintln!("{}: {count} pieces", manager.name());

	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;
	use std::io::Write;

	#[test]
	fn default_plan() {
		run_command(vec!["rasterstream", "plan", "-q", "0,0,4096,4096"]).unwrap();
	}

	#[test]
	fn extended_filename() {
		run_command(vec![
			"rasterstream",
			"plan",
			"-q",
			"--streaming",
			"out.tif?&streaming:type=stripped&streaming:sizemode=height&streaming:sizevalue=100",
			"-42,-42,1000,1000",
		])
		.unwrap();
	}

	#[test]
	fn config_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "type: tiled\nsize_value: 16").unwrap();
		let path = file.path().to_str().unwrap();
		run_command(vec!["rasterstream", "plan", "-q", "-c", path, "0,0,4096,4096"]).unwrap();
	}

	#[test]
	fn invalid_streaming_option() {
		let err = run_command(vec![
			"rasterstream",
			"plan",
			"--streaming",
			"out.tif?&streaming:type=diagonal",
			"0,0,10,10",
		])
		.unwrap_err()
		.to_string();
		assert!(err.starts_with("unknown streaming type"), "{err}");
	}

	#[test]
	fn config_conflicts_with_streaming() {
		assert!(
			run_command(vec!["rasterstream", "plan", "-c", "a.yml", "-s", "out.tif", "0,0,10,10"]).is_err()
		);
	}
}
