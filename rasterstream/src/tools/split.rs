use anyhow::Result;
use rasterstream_core::{
	AdaptiveSplitter, Region, Splitter, SplitterKind, SquareTileSplitter, StripSplitter, TileHint, TileMapSplitter,
	split_map,
};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// region to split: index then size, e.g. "-42,-42,1000,1000"
	#[arg(required = true, allow_hyphen_values = true, verbatim_doc_comment)]
	region: Region<2>,

	/// splitter to use
	#[arg(long, short, value_enum, default_value_t = SplitterKind::Adaptive)]
	splitter: SplitterKind,

	/// requested number of pieces
	#[arg(long, short = 'n', default_value_t = 1)]
	count: usize,

	/// native storage tiling used by the adaptive splitter, e.g. "256x256"
	#[arg(long, short)]
	tile_hint: Option<TileHint<2>>,

	/// tile edge granularity of the square splitter
	#[arg(long, default_value_t = 16)]
	alignment: u64,

	/// grid step of the tile-map splitter
	#[arg(long, default_value_t = 256)]
	align_step: u64,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let mut splitter: Box<dyn Splitter<2>> = match arguments.splitter {
		SplitterKind::Square => Box::new(SquareTileSplitter::new(arguments.alignment)),
		SplitterKind::TileMap => Box::new(TileMapSplitter::new(arguments.align_step)),
		SplitterKind::Adaptive => Box::new(AdaptiveSplitter::new(arguments.tile_hint.unwrap_or_default())),
		SplitterKind::Strip => Box::new(StripSplitter::new()),
	};

	let pieces = split_map(splitter.as_mut(), &arguments.region, arguments.count);
	log::info!(
		"{} splitter: {} pieces requested for {}",
		arguments.splitter,
		arguments.count,
		arguments.region
	);

	super::print_pieces(pieces.iter().copied())?;
	eprintln!("{} pieces", pieces.len());

	Ok(())
}
