use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;

/// Suffix of pre-parsed template documents.
pub const DOCUMENT_SUFFIX: &str = ".slim.json";

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// Finds document files by suffix. A root that is itself a file is returned
/// as-is, whatever its name.
pub struct DirectoryScanner {
    suffix: String,
}

impl Default for DirectoryScanner {
    fn default() -> Self {
        Self::new(DOCUMENT_SUFFIX)
    }
}

impl DirectoryScanner {
    #[must_use]
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    fn should_include(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(&self.suffix))
    }
}

impl FileScanner for DirectoryScanner {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if root.is_file() {
            return Ok(vec![root.to_path_buf()]);
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                e.into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"))
            })?;
            if entry.file_type().is_file() && self.should_include(entry.path()) {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
