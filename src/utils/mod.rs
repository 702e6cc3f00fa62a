// shotscale/src/utils/mod.rs
use std::path::{Path, PathBuf};

/// Derive the output path for a resized copy of `source`.
///
/// The file lands next to the source as `_resize-{width}-{name}`. The
/// leading underscore keeps generated files out of later catalog scans.
pub fn resize_output_path(source: &Path, width: u32) -> PathBuf {
    let name = source
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("image");

    source.with_file_name(format!("_resize-{}-{}", width, name))
}

pub fn file_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase())
}

/// Directory scanned when `--dir` is not given.
pub fn default_scan_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Pictures")
        .join("snipaste")
}
