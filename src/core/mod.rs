// shotscale/src/core/mod.rs
mod engine;

pub use engine::ResizeEngine;

use image::imageops::FilterType;
use thiserror::Error;

/// The fixed set of interpolation methods, in the order comparison panels
/// are stacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Linear,
    Area,
    Cubic,
    Lanczos,
}

impl Method {
    pub const ALL: [Method; 4] = [Method::Linear, Method::Area, Method::Cubic, Method::Lanczos];

    pub const DEFAULT: Method = Method::Area;

    /// Lenient name lookup; `None` means the caller should fall back to
    /// [`Method::DEFAULT`].
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "linear" => Some(Method::Linear),
            "area" => Some(Method::Area),
            "cubic" => Some(Method::Cubic),
            "lanc" | "lanczos" => Some(Method::Lanczos),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Method::Linear => "linear",
            Method::Area => "area",
            Method::Cubic => "cubic",
            Method::Lanczos => "lanc",
        }
    }

    pub fn filter_type(&self) -> FilterType {
        match self {
            Method::Linear => FilterType::Triangle,
            // image has no box/average filter; Gaussian is the closest match
            Method::Area => FilterType::Gaussian,
            Method::Cubic => FilterType::CatmullRom,
            Method::Lanczos => FilterType::Lanczos3,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResizeOptions {
    pub target_width: u32,
    pub compare: bool,
    pub method: Method,
}

impl Default for ResizeOptions {
    fn default() -> Self {
        Self {
            target_width: 300,
            compare: false,
            method: Method::DEFAULT,
        }
    }
}

impl ResizeOptions {
    pub fn validate(&self) -> Result<()> {
        if self.target_width == 0 {
            return Err(ShotScaleError::InvalidParameter(
                "Width must be greater than zero".to_string(),
            ));
        }

        if self.target_width > 100_000 {
            return Err(ShotScaleError::InvalidParameter(
                "Width too large (max 100,000 pixels)".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum ShotScaleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Scan error: {0}")]
    ScanError(String),

    #[error("Decode error: {0}")]
    DecodeError(String),

    #[error("Write error: {0}")]
    WriteError(String),

    #[error("Processing error: {0}")]
    ProcessingError(String),
}

pub type Result<T> = std::result::Result<T, ShotScaleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_lookup_accepts_known_names() {
        assert_eq!(Method::from_name("linear"), Some(Method::Linear));
        assert_eq!(Method::from_name("AREA"), Some(Method::Area));
        assert_eq!(Method::from_name("cubic"), Some(Method::Cubic));
        assert_eq!(Method::from_name("lanc"), Some(Method::Lanczos));
        assert_eq!(Method::from_name("lanczos"), Some(Method::Lanczos));
    }

    #[test]
    fn method_lookup_rejects_unknown_names() {
        assert_eq!(Method::from_name("nearest-ish"), None);
        assert_eq!(Method::from_name(""), None);
    }

    #[test]
    fn options_reject_zero_width() {
        let options = ResizeOptions {
            target_width: 0,
            ..Default::default()
        };
        assert!(options.validate().is_err());
    }

    #[test]
    fn default_options_are_valid() {
        assert!(ResizeOptions::default().validate().is_ok());
    }
}
