//! Writing the averaged image and the optional JSON report.

use image::RgbImage;
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;

use crate::error::{PipelineError, PipelineResult};

/// Encode and write the averaged image, overwriting any existing file.
///
/// The encoding is inferred from the output path's extension (PNG for
/// the default `result.png`).
pub fn write_image(image: &RgbImage, path: &Path) -> PipelineResult<()> {
    image.save(path).map_err(|e| PipelineError::Encode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    tracing::info!("Output written to {:?}", path);
    Ok(())
}

/// Serialize a report as pretty JSON to the given writer.
pub fn write_report<W: Write, T: Serialize>(mut writer: W, report: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut writer, report).map_err(io::Error::other)?;
    writeln!(writer)?;
    Ok(())
}
