//! Streaming configuration.
//!
//! A [`StreamingConfig`] is read from YAML or from the `streaming:` options of an extended
//! filename and turned into a [`StreamingManager`](crate::StreamingManager) with
//! [`StreamingConfig::build_manager`].
//!
//! # Example YAML
//! ```yaml
//! type: tiled
//! size_mode: height
//! size_value: 512
//! ```

mod build;
mod extended_filename;
mod streaming;

pub use streaming::*;
