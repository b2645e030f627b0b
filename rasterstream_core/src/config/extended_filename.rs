use super::StreamingConfig;
use anyhow::{Context, Result, bail};

const STREAMING_PREFIX: &str = "streaming:";

impl StreamingConfig {
	/// Read the `streaming:` options of an extended filename such as
	/// `out.tif?&streaming:type=tiled&streaming:sizemode=height&streaming:sizevalue=512`.
	///
	/// Options of other writers are ignored, unknown `streaming:` options are errors.
	pub fn from_extended_filename(filename: &str) -> Result<Self> {
		let mut config = StreamingConfig::default();
		let Some((_, options)) = filename.split_once('?') else {
			return Ok(config);
		};

		for option in options.split('&').filter(|option| !option.is_empty()) {
			let Some(key) = option.strip_prefix(STREAMING_PREFIX) else {
				log::trace!("ignoring option {option:?}");
				continue;
			};
			let Some((key, value)) = key.split_once('=') else {
				bail!("streaming option {option:?} has no value");
			};

			match key {
				"type" => config.streaming_type = Some(value.parse()?),
				"sizemode" => config.size_mode = Some(value.parse()?),
				"sizevalue" => {
					let size_value = value
						.parse::<f64>()
						.with_context(|| format!("streaming size value {value:?} is not a number"))?;
					anyhow::ensure!(
						size_value.is_finite() && size_value >= 0.0,
						"streaming size value {value:?} must not be negative"
					);
					config.size_value = Some(size_value as u64);
				}
				_ => bail!("unknown streaming option {option:?}"),
			}
		}

		Ok(config)
	}
}
