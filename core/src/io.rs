use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::ConvertError;
use crate::format::ImageFormat;

/// A PNG found in the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    pub file_name: String,
    pub path: PathBuf,
}

/// Collect the PNG files directly inside `dir`, in listing order.
///
/// Only the top level is read. Directories are skipped even when their
/// name ends in `.png`; symlinks count if they point at a file.
pub fn collect_png_files(dir: &Path) -> Result<Vec<SourceEntry>, ConvertError> {
    if !dir.is_dir() {
        return Err(ConvertError::SourceDirectoryMissing {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| ConvertError::ReadDirectory {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let Some(file_name) = entry.file_name().to_str() else {
            log::warn!("Skipping non UTF-8 file name: {}", entry.path().display());
            continue;
        };
        if ImageFormat::from_file_name(file_name) != Some(ImageFormat::Png) {
            continue;
        }
        if !entry.path().is_file() {
            log::debug!("Skipping {}: not a regular file", entry.path().display());
            continue;
        }

        files.push(SourceEntry {
            file_name: file_name.to_string(),
            path: entry.path().to_path_buf(),
        });
    }

    Ok(files)
}

/// Create `dir` and any missing parents. Succeeds if it already exists.
pub fn ensure_dir(dir: &Path) -> Result<(), ConvertError> {
    fs::create_dir_all(dir).map_err(|e| ConvertError::CreateDirectory {
        path: dir.to_path_buf(),
        source: e,
    })
}

/// Whether two paths name the same existing directory.
pub fn same_directory(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Read file contents.
pub fn read_file(path: &Path) -> Result<Vec<u8>, ConvertError> {
    fs::read(path).map_err(|e| ConvertError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write file contents, replacing whatever was there.
pub fn write_file(path: &Path, data: &[u8]) -> Result<(), ConvertError> {
    fs::write(path, data).map_err(|e| ConvertError::WriteFile {
        path: path.to_path_buf(),
        source: e,
    })
}
