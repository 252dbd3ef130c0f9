//! Stackshot Core - pixel-wise image averaging.
//!
//! Stackshot averages a directory of same-sized images into a single
//! composite, the way stacking many frames produces a long-exposure
//! photograph.
//!
//! # Architecture
//!
//! A single sequential pipeline:
//!
//! ```text
//! Directory → Discover → Decode → Accumulate → Mean → Encode
//! ```
//!
//! The accumulator is an `f64` buffer shaped like the first decoded
//! image; every later image must match its dimensions exactly.
//!
//! # Usage
//!
//! ```rust,no_run
//! use stackshot_core::{Config, Stacker};
//!
//! fn main() -> stackshot_core::Result<()> {
//!     let config = Config::load()?;
//!     let stacker = Stacker::new(&config);
//!
//!     let stacked = stacker.stack("./screens".as_ref(), |done, total| {
//!         println!("{}/{}", done, total);
//!     })?;
//!     stackshot_core::output::write_image(&stacked.image, "result.png".as_ref())?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod types;

pub use config::{Config, DiscoveryConfig, LimitsConfig, LoggingConfig, MatchMode, OutputConfig};
pub use error::{ConfigError, PipelineError, PipelineResult, Result, StackshotError};
pub use pipeline::{Accumulator, FileDiscovery, ImageDecoder, StackedImage, Stacker};
pub use types::StackReport;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
