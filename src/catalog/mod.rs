// shotscale/src/catalog/mod.rs
use crate::core::{Result, ShotScaleError};
use crate::utils::file_extension;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "tif", "tiff"];

/// Prefix marking generated output files; names carrying it are never
/// ingested by a scan.
const GENERATED_PREFIX: char = '_';

/// One scanned image file. `id` is the 0-based position in scan order and
/// stays valid for the lifetime of the catalog snapshot.
#[derive(Debug, Clone)]
pub struct ImageEntry {
    pub id: usize,
    pub path: PathBuf,
    pub extension: String,
    pub name: String,
}

/// Ordered, indexed listing of the eligible images found by one scan of one
/// directory. Immutable once built; changing the directory or filter means
/// scanning again.
#[derive(Debug)]
pub struct Catalog {
    directory: PathBuf,
    entries: Vec<ImageEntry>,
}

impl Catalog {
    /// Scan the direct children of `directory`, keeping regular files whose
    /// lower-cased extension is in [`SUPPORTED_EXTENSIONS`], whose name does
    /// not start with `_`, and whose name contains `name_filter`.
    pub fn scan(directory: &Path, name_filter: Option<&str>) -> Result<Self> {
        let filter = name_filter.unwrap_or("");

        if !directory.is_dir() {
            return Err(ShotScaleError::ScanError(format!(
                "Directory does not exist: {}",
                directory.display()
            )));
        }

        // Surfaces permission problems up front instead of as a silently
        // empty listing.
        std::fs::read_dir(directory).map_err(|e| {
            ShotScaleError::ScanError(format!(
                "Cannot read directory {}: {}",
                directory.display(),
                e
            ))
        })?;

        let mut entries = Vec::new();

        let walker = WalkDir::new(directory)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        for entry in walker.into_iter().filter_map(|entry| entry.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }

            let name = match entry.file_name().to_str() {
                Some(name) => name.to_string(),
                None => continue,
            };

            let extension = match file_extension(entry.path()) {
                Some(ext) if SUPPORTED_EXTENSIONS.contains(&ext.as_str()) => ext,
                _ => continue,
            };

            if name.starts_with(GENERATED_PREFIX) || !name.contains(filter) {
                continue;
            }

            entries.push(ImageEntry {
                id: entries.len(),
                path: entry.into_path(),
                extension,
                name,
            });
        }

        log::debug!(
            "Found {} images in folder {}",
            entries.len(),
            directory.display()
        );
        if entries.is_empty() {
            log::warn!("Found no image.");
        }

        Ok(Self {
            directory: directory.to_path_buf(),
            entries,
        })
    }

    pub fn get(&self, id: usize) -> Option<&ImageEntry> {
        self.entries.get(id)
    }

    pub fn entries(&self) -> &[ImageEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;
    use assert_fs::TempDir;

    fn touch(dir: &TempDir, name: &str) {
        dir.child(name).touch().unwrap();
    }

    #[test]
    fn scan_keeps_only_eligible_files() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "shot1.png");
        touch(&dir, "shot2.jpg");
        touch(&dir, "_generated.png");
        touch(&dir, "notes.txt");

        let catalog = Catalog::scan(dir.path(), None).unwrap();

        let names: Vec<&str> = catalog.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["shot1.png", "shot2.jpg"]);
        assert_eq!(catalog.get(0).unwrap().extension, "png");
        assert_eq!(catalog.get(1).unwrap().extension, "jpg");
    }

    #[test]
    fn scan_ids_follow_scan_order() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "b.png");
        touch(&dir, "a.png");
        touch(&dir, "c.tiff");

        let catalog = Catalog::scan(dir.path(), None).unwrap();

        for (position, entry) in catalog.entries().iter().enumerate() {
            assert_eq!(entry.id, position);
        }
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn scan_applies_name_filter_as_substring() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "window-1.png");
        touch(&dir, "window-2.png");
        touch(&dir, "desktop.png");

        let catalog = Catalog::scan(dir.path(), Some("window")).unwrap();

        assert_eq!(catalog.len(), 2);
        assert!(catalog.entries().iter().all(|e| e.name.contains("window")));
    }

    #[test]
    fn scan_of_only_generated_files_is_empty() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "_resize-300-a.png");
        touch(&dir, "_b.jpg");

        let catalog = Catalog::scan(dir.path(), None).unwrap();

        assert!(catalog.is_empty());
    }

    #[test]
    fn scan_is_not_recursive() {
        let dir = TempDir::new().unwrap();
        dir.child("nested/deep.png").touch().unwrap();
        touch(&dir, "top.png");

        let catalog = Catalog::scan(dir.path(), None).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).unwrap().name, "top.png");
    }

    #[test]
    fn scan_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");

        let result = Catalog::scan(&missing, None);

        assert!(matches!(result, Err(ShotScaleError::ScanError(_))));
    }

    #[test]
    fn uppercase_extensions_are_accepted() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "LOUD.PNG");

        let catalog = Catalog::scan(dir.path(), None).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).unwrap().extension, "png");
    }
}
