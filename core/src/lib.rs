//! Batch conversion of PNG images to WebP, keeping transparency.
//!
//! ```no_run
//! use png2webp_core::{convert_all, ConvertConfig};
//!
//! let report = convert_all(&ConvertConfig::new("./pngs", "./webps"))?;
//! println!("{} converted, {} failed", report.success_count(), report.error_count());
//! # Ok::<(), png2webp_core::ConvertError>(())
//! ```

pub mod batch;
pub mod config;
pub mod converter;
pub mod error;
pub mod format;
pub mod io;
pub mod naming;
pub mod report;

pub use batch::{convert_all, BatchConverter, Conflict, ConversionJob};
pub use config::{ConvertConfig, FailurePolicy, RenameMode};
pub use error::ConvertError;
pub use report::{FileResult, Report};
