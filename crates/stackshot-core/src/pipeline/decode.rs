//! Image decoding with format detection and dimension limits.

use image::{GenericImageView, RgbImage};
use std::io::Cursor;
use std::path::Path;

use crate::config::LimitsConfig;
use crate::error::{PipelineError, PipelineResult};

/// Image decoder with configurable limits.
pub struct ImageDecoder {
    limits: LimitsConfig,
}

impl ImageDecoder {
    /// Create a new decoder with the given limits.
    pub fn new(limits: LimitsConfig) -> Self {
        Self { limits }
    }

    /// Decode an image file into 8-bit RGB pixel data.
    ///
    /// The format is detected from the file contents (falling back to
    /// the extension), so a misnamed file still decodes. All sources
    /// are normalized to three channels; grayscale and alpha inputs
    /// are converted rather than rejected.
    pub fn decode(&self, path: &Path) -> PipelineResult<RgbImage> {
        let bytes = std::fs::read(path).map_err(|e| PipelineError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let reader = image::ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| PipelineError::Decode {
                path: path.to_path_buf(),
                message: format!("Cannot detect image format: {}", e),
            })?;

        let image = reader.decode().map_err(|e| PipelineError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let (width, height) = image.dimensions();
        if width > self.limits.max_image_dimension || height > self.limits.max_image_dimension {
            return Err(PipelineError::ImageTooLarge {
                path: path.to_path_buf(),
                width,
                height,
                max_dim: self.limits.max_image_dimension,
            });
        }

        Ok(image.into_rgb8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn write_png(path: &Path, width: u32, height: u32, value: u8) {
        let img = RgbImage::from_pixel(width, height, Rgb([value, value, value]));
        img.save(path).unwrap();
    }

    #[test]
    fn test_decode_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");
        write_png(&path, 4, 3, 128);

        let decoder = ImageDecoder::new(LimitsConfig::default());
        let decoded = decoder.decode(&path).unwrap();
        assert_eq!(decoded.dimensions(), (4, 3));
        assert_eq!(decoded.get_pixel(0, 0), &Rgb([128, 128, 128]));
    }

    #[test]
    fn test_decode_detects_format_by_content() {
        // PNG bytes behind a .jpg name still decode
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("real.png");
        write_png(&png, 2, 2, 10);
        let misnamed = dir.path().join("misnamed.jpg");
        std::fs::copy(&png, &misnamed).unwrap();

        let decoder = ImageDecoder::new(LimitsConfig::default());
        let decoded = decoder.decode(&misnamed).unwrap();
        assert_eq!(decoded.dimensions(), (2, 2));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not an image").unwrap();

        let decoder = ImageDecoder::new(LimitsConfig::default());
        assert!(matches!(
            decoder.decode(&path),
            Err(PipelineError::Decode { .. })
        ));
    }

    #[test]
    fn test_decode_rejects_oversized_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.png");
        write_png(&path, 8, 8, 0);

        let decoder = ImageDecoder::new(LimitsConfig {
            max_image_dimension: 4,
        });
        assert!(matches!(
            decoder.decode(&path),
            Err(PipelineError::ImageTooLarge { max_dim: 4, .. })
        ));
    }
}
