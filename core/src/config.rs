use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::ConvertError;

/// Highest quality accepted by the WebP encoder.
pub const MAX_QUALITY: u8 = 100;

/// How an output file name is derived from its source name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenameMode {
    /// Replace the first literal ".png" anywhere in the name.
    #[default]
    Substring,
    /// Swap the trailing ".png" (any case) for ".webp".
    Extension,
}

impl fmt::Display for RenameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Substring => write!(f, "substring"),
            Self::Extension => write!(f, "extension"),
        }
    }
}

impl FromStr for RenameMode {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "substring" => Ok(Self::Substring),
            "extension" | "ext" => Ok(Self::Extension),
            _ => Err(format!("unknown rename mode: {s}")),
        }
    }
}

/// What to do when a single file fails to convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Log the error, record it in the report and move on.
    #[default]
    Continue,
    /// Stop the batch and return the error.
    Abort,
}

#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Directory scanned (top level only) for `.png` files
    pub source_dir: PathBuf,
    /// Directory receiving the `.webp` files, created if missing
    pub dest_dir: PathBuf,
    /// Lossy quality 0-100 (higher = better fidelity, larger file)
    pub quality: u8,
    /// Encode losslessly instead of at `quality`
    pub lossless: bool,
    /// Output naming scheme
    pub rename: RenameMode,
    /// Per-file failure handling
    pub on_error: FailurePolicy,
    /// Worker threads; 1 converts sequentially
    pub jobs: usize,
}

impl ConvertConfig {
    pub fn new(source_dir: impl Into<PathBuf>, dest_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            dest_dir: dest_dir.into(),
            ..Self::default()
        }
    }

    /// Reject settings that can never work, before touching the filesystem.
    pub fn validate(&self) -> Result<(), ConvertError> {
        if self.quality > MAX_QUALITY {
            return Err(ConvertError::InvalidQuality(self.quality));
        }
        if self.jobs == 0 {
            return Err(ConvertError::InvalidJobs);
        }
        Ok(())
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("./pngs"),
            dest_dir: PathBuf::from("./webps"),
            quality: 80,
            lossless: false,
            rename: RenameMode::Substring,
            on_error: FailurePolicy::Continue,
            jobs: 1,
        }
    }
}
