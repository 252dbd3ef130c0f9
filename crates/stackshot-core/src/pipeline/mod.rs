//! The averaging pipeline: discovery, decoding, accumulation, and
//! orchestration.

pub mod accumulate;
pub mod decode;
pub mod discovery;
pub mod stacker;

pub use accumulate::Accumulator;
pub use decode::ImageDecoder;
pub use discovery::FileDiscovery;
pub use stacker::{StackedImage, Stacker};
