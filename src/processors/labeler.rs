// shotscale/src/processors/labeler.rs
use crate::core::{Result, ShotScaleError};
use ab_glyph::{FontRef, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};

static FONT_BYTES: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");

const FONT_SIZE: f32 = 14.0;
const FRAME_THICKNESS: u32 = 2;
const FRAME_SHADE: u8 = 100;

/// Stamps comparison panels: the method name centered on the panel in the
/// inverse of its mean color, plus separator bars along the top and bottom
/// edges.
pub struct Labeler {
    font: FontRef<'static>,
    scale: PxScale,
}

impl Labeler {
    pub fn new() -> Result<Self> {
        let font = FontRef::try_from_slice(FONT_BYTES)
            .map_err(|e| ShotScaleError::ProcessingError(format!("Failed to load font: {}", e)))?;

        Ok(Self {
            font,
            scale: PxScale::from(FONT_SIZE),
        })
    }

    pub fn label(&self, panel: &mut RgbImage, text: &str) {
        let color = invert_mean_color(panel);

        let (text_width, text_height) = text_size(self.scale, &self.font, text);
        let x = panel.width().saturating_sub(text_width) / 2;
        let y = panel.height().saturating_sub(text_height) / 2;

        draw_text_mut(panel, color, x as i32, y as i32, self.scale, &self.font, text);

        self.draw_frame_bars(panel);
    }

    fn draw_frame_bars(&self, panel: &mut RgbImage) {
        let (width, height) = panel.dimensions();
        let shade = Rgb([FRAME_SHADE; 3]);

        for y in (0..FRAME_THICKNESS.min(height)).chain(height.saturating_sub(FRAME_THICKNESS)..height) {
            for x in 0..width {
                panel.put_pixel(x, y, shade);
            }
        }
    }
}

/// Per-channel photometric inverse of the image mean, so the label stays
/// legible on both light and dark content.
fn invert_mean_color(image: &RgbImage) -> Rgb<u8> {
    let pixel_count = (image.width() as u64 * image.height() as u64).max(1);
    let mut sums = [0u64; 3];

    for pixel in image.pixels() {
        for (sum, channel) in sums.iter_mut().zip(pixel.0.iter()) {
            *sum += *channel as u64;
        }
    }

    let mut inverted = [0u8; 3];
    for (out, sum) in inverted.iter_mut().zip(sums.iter()) {
        *out = 255 - (sum / pixel_count) as u8;
    }

    Rgb(inverted)
}
