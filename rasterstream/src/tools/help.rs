use anyhow::Result;
use rasterstream_core::config::StreamingConfig;
use termimad::MadSkin;

#[derive(clap::Args, Debug)]
#[command(
	arg_required_else_help = true,
	disable_help_flag = true,
	disable_version_flag = true
)]
pub struct Subcommand {
	#[command(subcommand)]
	topic: Topic,

	/// print markdown instead of formatted text
	#[arg(long, global = true)]
	raw: bool,
}

#[derive(clap::Subcommand, Debug)]
enum Topic {
	/// Streaming configuration
	Config,
}

pub fn run(command: &Subcommand) -> Result<()> {
	let markdown = match command.topic {
		Topic::Config => config_docs(),
	};

	if command.raw {
		println!("{markdown}");
	} else {
		println!("{}", MadSkin::default().term_text(&markdown));
	}
	Ok(())
}

fn config_docs() -> String {
	format!(
		"# Streaming Configuration\n\n\
		The `plan` command reads the streaming configuration from a YAML file (`--config`) \
		or from the `streaming:` options of an extended filename (`--streaming`).\n\n\
		| YAML | extended filename | values |\n\
		| --- | --- | --- |\n\
		| `type` | `streaming:type` | auto, tiled, stripped, none |\n\
		| `size_mode` | `streaming:sizemode` | auto, nbsplits, height |\n\
		| `size_value` | `streaming:sizevalue` | number |\n\
		| `bias` | | factor, default 1.0 |\n\
		| `default_ram_mb` | | MB, default $RASTERSTREAM_MAX_RAM_HINT or 256 |\n\n\
		## Example\n\n\
		```yaml\n{}```\n",
		StreamingConfig::demo_yaml()
	)
}

#[cfg(test)]
mod tests {
	use super::config_docs;
	use crate::tests::run_command;
	use rasterstream_core::config::StreamingConfig;

	#[test]
	fn config_topic() {
		run_command(vec!["rasterstream", "help", "config"]).unwrap();
		run_command(vec!["rasterstream", "help", "--raw", "config"]).unwrap();
	}

	#[test]
	fn example_is_valid() {
		let docs = config_docs();
		let yaml = docs
			.split("```yaml\n")
			.nth(1)
			.and_then(|rest| rest.split("```").next())
			.unwrap();
		StreamingConfig::from_string(yaml).unwrap();
	}
}
