use std::path::PathBuf;

use clap::Parser;

use png2webp_core::{ConvertConfig, FailurePolicy, RenameMode};

/// Convert every PNG in a directory to WebP, keeping transparency
#[derive(Debug, Parser)]
#[command(name = "png2webp", version, about)]
pub struct Cli {
    /// Directory containing the PNG files (top level only)
    #[arg(default_value = "./pngs")]
    pub source: PathBuf,

    /// Directory receiving the WebP files, created if missing
    #[arg(default_value = "./webps")]
    pub dest: PathBuf,

    /// Lossy quality 0–100
    #[arg(short, long, default_value_t = 80, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub quality: u8,

    /// Encode losslessly (quality is ignored)
    #[arg(long)]
    pub lossless: bool,

    /// Output naming: `substring` swaps the first ".png", `extension` the trailing one
    #[arg(long, default_value_t = RenameMode::Substring)]
    pub rename: RenameMode,

    /// Stop at the first file that fails instead of skipping it
    #[arg(long)]
    pub fail_fast: bool,

    /// Number of files converted in parallel
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    pub jobs: u16,

    /// Show what would be converted without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn to_config(&self) -> ConvertConfig {
        ConvertConfig {
            source_dir: self.source.clone(),
            dest_dir: self.dest.clone(),
            quality: self.quality,
            lossless: self.lossless,
            rename: self.rename,
            on_error: if self.fail_fast {
                FailurePolicy::Abort
            } else {
                FailurePolicy::Continue
            },
            jobs: self.jobs as usize,
        }
    }
}
