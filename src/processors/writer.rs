// shotscale/src/processors/writer.rs
use crate::core::{Result, ShotScaleError};
use image::{DynamicImage, ImageFormat};
use oxipng::{optimize_from_memory, Options};
use std::io::Cursor;
use std::path::Path;

pub struct Writer {
    optimize_png: bool,
}

impl Writer {
    pub fn new() -> Self {
        Self { optimize_png: true }
    }

    pub fn with_png_optimization(mut self, optimize: bool) -> Self {
        self.optimize_png = optimize;
        self
    }

    /// Encode `image` and write it to `path`, replacing any existing file.
    ///
    /// The image is encoded fully in memory first; the target file is only
    /// touched by the final single write.
    pub fn save(&self, image: &DynamicImage, path: &Path) -> Result<()> {
        let format = Self::detect_format(path);

        log::debug!("Saving image to {} with format {:?}", path.display(), format);

        let mut buffer = Cursor::new(Vec::new());
        image.write_to(&mut buffer, format)?;

        let data = if format == ImageFormat::Png && self.optimize_png {
            optimize_from_memory(&buffer.into_inner(), &Options::default()).map_err(|e| {
                ShotScaleError::ProcessingError(format!("PNG optimization failed: {}", e))
            })?
        } else {
            buffer.into_inner()
        };

        std::fs::write(path, data).map_err(|e| {
            ShotScaleError::WriteError(format!("Failed to write {}: {}", path.display(), e))
        })?;

        self.log_save_result(path)
    }

    fn detect_format(path: &Path) -> ImageFormat {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("jpg") | Some("jpeg") => ImageFormat::Jpeg,
            Some("tif") | Some("tiff") => ImageFormat::Tiff,
            _ => ImageFormat::Png,
        }
    }

    fn log_save_result(&self, path: &Path) -> Result<()> {
        let file_size = std::fs::metadata(path)?.len();
        log::debug!("Saved image: {} ({} bytes)", path.display(), file_size);
        Ok(())
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}
