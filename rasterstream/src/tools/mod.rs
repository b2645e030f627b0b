pub mod help;
pub mod plan;
pub mod split;

use rasterstream_core::Region;
use std::io::{self, Write};

/// Print one `i: region` line per piece to stdout.
fn print_pieces<const D: usize>(pieces: impl IntoIterator<Item = Region<D>>) -> io::Result<()> {
	let mut stdout = io::stdout().lock();
	for (i, piece) in pieces.into_iter().enumerate() {
		writeln!(stdout, "{i}: {piece}")?;
	}
	stdout.flush()
}
