//! Serializable result types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::pipeline::StackedImage;

/// Machine-readable summary of a completed stacking run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackReport {
    /// Where the averaged image was written
    pub output: PathBuf,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Channel count (always 3, inputs are normalized to RGB)
    pub channels: u8,
    /// Number of images folded into the mean
    pub images: usize,
    /// Source files, in processing order
    pub sources: Vec<PathBuf>,
}

impl StackReport {
    /// Build a report from a stacking result and its output path.
    pub fn new(stacked: &StackedImage, output: PathBuf) -> Self {
        let (width, height) = stacked.image.dimensions();
        Self {
            output,
            width,
            height,
            channels: 3,
            images: stacked.sources.len(),
            sources: stacked.sources.clone(),
        }
    }
}
