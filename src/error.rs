//! Error type for the fallible startup paths.
//!
//! Nothing inside an animation tick can fail; only configuration loading and
//! surface allocation report errors.

use thiserror::Error;

/// Errors raised while configuring or constructing the animation.
#[derive(Debug, Error)]
pub enum DotsError {
    /// A configuration value is out of its allowed range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configuration document could not be parsed.
    #[error("malformed configuration JSON: {0}")]
    ConfigFormat(#[from] serde_json::Error),

    /// The configuration file could not be read.
    #[error("failed to read configuration file {path}: {source}")]
    ConfigIo {
        /// Path that was being read
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A preset name did not match any known preset.
    #[error("unknown preset `{0}` (expected classic, glow or trails)")]
    UnknownPreset(String),

    /// The raster surface could not be allocated.
    #[error("cannot allocate a {width}x{height} drawing surface")]
    Surface {
        /// Requested width in pixels
        width: u32,
        /// Requested height in pixels
        height: u32,
    },
}
