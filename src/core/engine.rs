// shotscale/src/core/engine.rs
use super::{Method, ResizeOptions, Result};
use crate::catalog::ImageEntry;
use crate::processors::{Labeler, Loader, Resizer, Writer};
use crate::utils::resize_output_path;
use image::{imageops, DynamicImage, RgbImage};
use std::path::PathBuf;

/// Turns one catalog entry into a resized copy written next to the source,
/// either with a single interpolation method or as a stacked comparison of
/// all of them.
pub struct ResizeEngine {
    options: ResizeOptions,
    loader: Loader,
    resizer: Resizer,
    labeler: Labeler,
    writer: Writer,
}

impl ResizeEngine {
    pub fn new(options: ResizeOptions) -> Result<Self> {
        options.validate()?;

        Ok(Self {
            options,
            loader: Loader::new(),
            resizer: Resizer::new(),
            labeler: Labeler::new()?,
            writer: Writer::new(),
        })
    }

    pub fn options(&self) -> &ResizeOptions {
        &self.options
    }

    /// The source file is never touched; failures leave no partial output.
    pub fn resize(&self, entry: &ImageEntry) -> Result<PathBuf> {
        let image = self.loader.load(&entry.path)?;

        let (width, height) = Resizer::target_dimensions(
            image.width(),
            image.height(),
            self.options.target_width,
        );

        log::debug!(
            "Working with id {}, {}x{}, {}",
            entry.id,
            image.width(),
            image.height(),
            entry.path.display()
        );

        let result = if self.options.compare {
            self.render_comparison(&image, width, height)
        } else {
            self.resizer.resample(&image, width, height, self.options.method)
        };

        let output_path = resize_output_path(&entry.path, self.options.target_width);
        self.writer.save(&result, &output_path)?;

        log::info!("New file is saved to {}", output_path.display());

        Ok(output_path)
    }

    /// One labeled panel per method, stacked vertically in declaration
    /// order.
    fn render_comparison(&self, image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
        let mut canvas = RgbImage::new(width, height * Method::ALL.len() as u32);

        for (index, method) in Method::ALL.iter().enumerate() {
            let mut panel = self.resizer.resample(image, width, height, *method).to_rgb8();
            self.labeler.label(&mut panel, method.name());

            imageops::replace(&mut canvas, &panel, 0, (index as u32 * height) as i64);
        }

        DynamicImage::ImageRgb8(canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::core::ShotScaleError;
    use assert_fs::prelude::*;
    use assert_fs::TempDir;
    use image::RgbImage;

    fn write_test_image(dir: &TempDir, name: &str, width: u32, height: u32) {
        let path = dir.path().join(name);
        RgbImage::new(width, height).save(&path).unwrap();
    }

    fn scan_one(dir: &TempDir) -> ImageEntry {
        Catalog::scan(dir.path(), None).unwrap().get(0).unwrap().clone()
    }

    #[test]
    fn resize_produces_expected_file_and_dimensions() {
        let dir = TempDir::new().unwrap();
        write_test_image(&dir, "shot.png", 1200, 800);

        let engine = ResizeEngine::new(ResizeOptions::default()).unwrap();
        let output = engine.resize(&scan_one(&dir)).unwrap();

        assert_eq!(output, dir.path().join("_resize-300-shot.png"));
        let image = image::open(&output).unwrap();
        assert_eq!((image.width(), image.height()), (300, 200));
    }

    #[test]
    fn resize_twice_overwrites_instead_of_duplicating() {
        let dir = TempDir::new().unwrap();
        write_test_image(&dir, "shot.png", 600, 400);

        let engine = ResizeEngine::new(ResizeOptions::default()).unwrap();
        let entry = scan_one(&dir);
        let first = engine.resize(&entry).unwrap();
        let second = engine.resize(&entry).unwrap();

        assert_eq!(first, second);
        let generated: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().starts_with('_'))
            .collect();
        assert_eq!(generated.len(), 1);
    }

    #[test]
    fn comparison_stacks_one_panel_per_method() {
        let dir = TempDir::new().unwrap();
        write_test_image(&dir, "shot.png", 400, 200);

        let options = ResizeOptions {
            target_width: 100,
            compare: true,
            ..Default::default()
        };
        let engine = ResizeEngine::new(options).unwrap();
        let output = engine.resize(&scan_one(&dir)).unwrap();

        let image = image::open(&output).unwrap();
        assert_eq!(image.width(), 100);
        assert_eq!(image.height(), 50 * Method::ALL.len() as u32);
    }

    #[test]
    fn every_method_produces_output() {
        let dir = TempDir::new().unwrap();
        write_test_image(&dir, "shot.jpg", 64, 64);
        let entry = scan_one(&dir);

        for method in Method::ALL {
            let options = ResizeOptions {
                target_width: 16,
                compare: false,
                method,
            };
            let engine = ResizeEngine::new(options).unwrap();
            let output = engine.resize(&entry).unwrap();
            assert!(output.exists());
        }
    }

    #[test]
    fn undecodable_source_is_a_recoverable_failure() {
        let dir = TempDir::new().unwrap();
        dir.child("broken.png").write_str("not an image").unwrap();

        let engine = ResizeEngine::new(ResizeOptions::default()).unwrap();
        let result = engine.resize(&scan_one(&dir));

        assert!(matches!(result, Err(ShotScaleError::DecodeError(_))));
        assert!(!dir.path().join("_resize-300-broken.png").exists());
    }

    #[test]
    fn source_file_is_left_untouched() {
        let dir = TempDir::new().unwrap();
        write_test_image(&dir, "shot.png", 100, 100);
        let entry = scan_one(&dir);
        let before = std::fs::read(&entry.path).unwrap();

        ResizeEngine::new(ResizeOptions::default())
            .unwrap()
            .resize(&entry)
            .unwrap();

        assert_eq!(before, std::fs::read(&entry.path).unwrap());
    }
}
