//! The running sum buffer behind the pixel-wise average.
//!
//! Pixels are summed into an `f64` buffer: integer sums are exact up
//! to 2^53, so there is no overflow or drift for any realistic image
//! count, and the final division is a single rounding step.

use image::{Rgb, RgbImage};
use ndarray::Array3;
use std::path::Path;

use crate::error::{PipelineError, PipelineResult};

const CHANNELS: usize = 3;

/// Accumulates decoded images into a running elementwise sum.
///
/// The buffer shape is fixed by the first image; every later image
/// must match it exactly.
pub struct Accumulator {
    sum: Array3<f64>,
    count: usize,
    width: u32,
    height: u32,
}

impl Accumulator {
    /// Create a zeroed accumulator sized to the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            sum: Array3::zeros((height as usize, width as usize, CHANNELS)),
            count: 0,
            width,
            height,
        }
    }

    /// Add an image's pixel values elementwise into the sum.
    ///
    /// Returns a dimension mismatch error (naming the offending file)
    /// if the image does not match the accumulator shape.
    pub fn add(&mut self, path: &Path, image: &RgbImage) -> PipelineResult<()> {
        let (width, height) = image.dimensions();
        if width != self.width || height != self.height {
            return Err(PipelineError::DimensionMismatch {
                path: path.to_path_buf(),
                expected_width: self.width,
                expected_height: self.height,
                found_width: width,
                found_height: height,
            });
        }

        for (x, y, pixel) in image.enumerate_pixels() {
            for c in 0..CHANNELS {
                self.sum[[y as usize, x as usize, c]] += pixel[c] as f64;
            }
        }
        self.count += 1;
        Ok(())
    }

    /// Number of images accumulated so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Consume the accumulator and produce the mean image.
    ///
    /// Each channel is divided by the image count, rounded to the
    /// nearest integer, and clamped to the 8-bit range. An accumulator
    /// with no images has no mean; that is an error, not a NaN image.
    pub fn mean(self) -> PipelineResult<RgbImage> {
        if self.count == 0 {
            return Err(PipelineError::EmptyAccumulator);
        }
        let n = self.count as f64;
        Ok(RgbImage::from_fn(self.width, self.height, |x, y| {
            let mut channels = [0u8; CHANNELS];
            for (c, value) in channels.iter_mut().enumerate() {
                let mean = self.sum[[y as usize, x as usize, c]] / n;
                *value = mean.round().clamp(0.0, 255.0) as u8;
            }
            Rgb(channels)
        }))
    }
}
