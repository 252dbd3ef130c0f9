//! Pipeline orchestration - wires discovery, decoding, and accumulation.

use image::RgbImage;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{PipelineError, PipelineResult};

use super::accumulate::Accumulator;
use super::decode::ImageDecoder;
use super::discovery::FileDiscovery;

/// Result of stacking a set of images.
#[derive(Debug)]
pub struct StackedImage {
    /// The pixel-wise mean of all inputs
    pub image: RgbImage,
    /// The files that went into the mean, in processing order
    pub sources: Vec<PathBuf>,
}

/// The stacker orchestrates the full averaging pipeline:
/// discover, then for each file decode and accumulate, then divide.
///
/// Images are decoded and released one at a time, so peak memory is
/// the accumulator plus a single decoded image.
pub struct Stacker {
    decoder: ImageDecoder,
    discovery: FileDiscovery,
}

impl Stacker {
    /// Create a new stacker with the given configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            decoder: ImageDecoder::new(config.limits.clone()),
            discovery: FileDiscovery::new(config.discovery.clone()),
        }
    }

    /// Discover qualifying image files in a directory, sorted by path.
    pub fn discover(&self, dir: &Path) -> PipelineResult<Vec<PathBuf>> {
        self.discovery.discover(dir)
    }

    /// Discover and average every qualifying image in a directory.
    pub fn stack<F>(&self, dir: &Path, progress: F) -> PipelineResult<StackedImage>
    where
        F: FnMut(usize, usize),
    {
        let files = self.discover(dir)?;
        self.stack_files(dir, files, progress)
    }

    /// Average a pre-discovered file list.
    ///
    /// `progress(done, total)` is called after each image is folded
    /// into the sum, with `done` 1-based. An empty list is rejected;
    /// a mean over zero images is a division by zero.
    pub fn stack_files<F>(
        &self,
        dir: &Path,
        files: Vec<PathBuf>,
        mut progress: F,
    ) -> PipelineResult<StackedImage>
    where
        F: FnMut(usize, usize),
    {
        let Some((first, rest)) = files.split_first() else {
            return Err(PipelineError::NoImages {
                dir: dir.to_path_buf(),
                marker: self.discovery.marker().to_string(),
            });
        };
        let total = files.len();

        // The first image fixes the accumulator shape
        tracing::debug!("Decoding {:?}", first);
        let image = self.decoder.decode(first)?;
        let (width, height) = image.dimensions();
        tracing::debug!("Accumulator sized to {}x{}", width, height);
        let mut accumulator = Accumulator::new(width, height);
        accumulator.add(first, &image)?;
        progress(1, total);

        for (index, path) in rest.iter().enumerate() {
            tracing::debug!("Decoding {:?}", path);
            let image = self.decoder.decode(path)?;
            accumulator.add(path, &image)?;
            progress(index + 2, total);
        }

        tracing::info!("Averaged {} image(s) at {}x{}", total, width, height);

        Ok(StackedImage {
            image: accumulator.mean()?,
            sources: files,
        })
    }
}
