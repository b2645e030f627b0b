use anyhow::{Context, Result, bail};
use enumset::EnumSetType;
use serde::Deserialize;
use std::{
	fmt::Display,
	fs::File,
	io::{BufReader, Read},
	path::Path,
	str::FromStr,
};

/// How the pieces of a streamed region are laid out.
#[derive(Debug, Deserialize, EnumSetType)]
#[serde(rename_all = "lowercase")]
pub enum StreamingType {
	/// Pieces follow the storage tiles, sized by RAM.
	Auto,
	Tiled,
	Stripped,
	/// One requested division; square tiles may still cut a non-square region.
	#[serde(rename = "none")]
	Disabled,
}

impl StreamingType {
	pub fn as_str(&self) -> &str {
		match self {
			StreamingType::Auto => "auto",
			StreamingType::Tiled => "tiled",
			StreamingType::Stripped => "stripped",
			StreamingType::Disabled => "none",
		}
	}
}

impl FromStr for StreamingType {
	type Err = anyhow::Error;

	fn from_str(value: &str) -> Result<Self> {
		Ok(match value {
			"auto" => StreamingType::Auto,
			"tiled" => StreamingType::Tiled,
			"stripped" => StreamingType::Stripped,
			"none" => StreamingType::Disabled,
			_ => bail!("unknown streaming type {value:?}, expected auto, tiled, stripped or none"),
		})
	}
}

impl Display for StreamingType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// What `size_value` means.
#[derive(Debug, Deserialize, EnumSetType)]
#[serde(rename_all = "lowercase")]
pub enum SizeMode {
	/// RAM budget in MB.
	Auto,
	/// Number of pieces.
	Nbsplits,
	/// Tile edge or strip height in pixels.
	Height,
}

impl SizeMode {
	pub fn as_str(&self) -> &str {
		match self {
			SizeMode::Auto => "auto",
			SizeMode::Nbsplits => "nbsplits",
			SizeMode::Height => "height",
		}
	}
}

impl FromStr for SizeMode {
	type Err = anyhow::Error;

	fn from_str(value: &str) -> Result<Self> {
		Ok(match value {
			"auto" => SizeMode::Auto,
			"nbsplits" => SizeMode::Nbsplits,
			"height" => SizeMode::Height,
			_ => bail!("unknown streaming size mode {value:?}, expected auto, nbsplits or height"),
		})
	}
}

impl Display for SizeMode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Streaming configuration of a writer.
///
/// Every field is optional. Without a `type` the writer streams adaptively within the
/// default RAM budget.
#[derive(Default, Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct StreamingConfig {
	#[serde(default, rename = "type")]
	pub streaming_type: Option<StreamingType>,

	#[serde(default)]
	pub size_mode: Option<SizeMode>,

	/// MB for `auto`, number of pieces for `nbsplits`, pixels for `height`.
	#[serde(default)]
	pub size_value: Option<u64>,

	/// Multiplier applied to the estimated memory print.
	#[serde(default)]
	pub bias: Option<f64>,

	/// RAM budget used when `size_value` is 0 in `auto` mode.
	#[serde(default)]
	pub default_ram_mb: Option<u64>,
}

impl StreamingConfig {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("failed to open config file {path:?}"))?;
		StreamingConfig::from_reader(BufReader::new(file))
			.with_context(|| format!("failed to parse config file {path:?}"))
	}

	/// Annotated example configuration.
	pub fn demo_yaml() -> String {
		String::from(
			r#"# auto: pieces follow the storage tiles, sized by RAM
# tiled: square tiles
# stripped: full-width strips
# none: one requested division of square tiles
type: tiled

# auto: size_value is a RAM budget in MB (0 uses default_ram_mb)
# nbsplits: size_value is the number of pieces
# height: size_value is the tile edge or strip height in pixels
size_mode: auto
size_value: 128

# multiplier applied to the estimated memory print
bias: 1.0

# defaults to $RASTERSTREAM_MAX_RAM_HINT or 256
default_ram_mb: 256
"#,
		)
	}
}
