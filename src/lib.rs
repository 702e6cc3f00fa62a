mod catalog;
mod cli;
mod core;
mod processors;
mod session;
mod utils;

pub use catalog::{Catalog, ImageEntry, SUPPORTED_EXTENSIONS};
pub use cli::Cli;
pub use core::{Method, ResizeEngine, ResizeOptions, Result, ShotScaleError};
pub use processors::{Labeler, Loader, Resizer, Writer};
pub use session::{Command, InteractiveSession};
pub use utils::{default_scan_dir, file_extension, resize_output_path};

pub mod prelude {
    pub use crate::{
        Catalog, ImageEntry, InteractiveSession, Method, ResizeEngine, ResizeOptions,
    };
}

// Re-export commonly used types
pub use image::DynamicImage;
