// shotscale/src/processors/resizer.rs
use crate::core::Method;
use image::DynamicImage;

#[derive(Clone, Default)]
pub struct Resizer;

impl Resizer {
    pub fn new() -> Self {
        Self
    }

    /// Output dimensions for a width-pinned resize: height follows the
    /// source aspect ratio, rounded, never below 1.
    pub fn target_dimensions(source_width: u32, source_height: u32, target_width: u32) -> (u32, u32) {
        let ratio = target_width as f32 / source_width as f32;
        let height = (source_height as f32 * ratio).round() as u32;
        (target_width, height.max(1))
    }

    pub fn resample(
        &self,
        image: &DynamicImage,
        width: u32,
        height: u32,
        method: Method,
    ) -> DynamicImage {
        if width == image.width() && height == image.height() {
            log::debug!("Image dimensions unchanged, skipping resize");
            return image.clone();
        }

        log::debug!(
            "Resizing image from {}x{} to {}x{} ({})",
            image.width(),
            image.height(),
            width,
            height,
            method.name()
        );

        image.resize_exact(width, height, method.filter_type())
    }
}
