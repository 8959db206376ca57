use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("quality must be between 0 and 100, got {0}")]
    InvalidQuality(u8),

    #[error("jobs must be at least 1")]
    InvalidJobs,

    #[error("source directory {path} does not exist or is not a directory")]
    SourceDirectoryMissing { path: PathBuf },

    #[error("failed to create directory {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to list directory {path}: {source}")]
    ReadDirectory {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error("failed to read file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("failed to encode {path} as WebP: {reason}")]
    Encode { path: PathBuf, reason: String },

    #[error("refusing to overwrite source file {path}")]
    WouldOverwriteSource { path: PathBuf },

    #[error("destination {path} is already written from {first}")]
    DuplicateDestination { path: PathBuf, first: PathBuf },

    #[error("failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
