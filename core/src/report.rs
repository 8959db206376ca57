use std::path::PathBuf;

/// Result of converting a single file.
#[derive(Debug, Clone)]
pub struct FileResult {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub original_size: u64,
    pub converted_size: u64,
    /// Whether the decoded source already carried an alpha channel
    pub had_alpha: bool,
    pub error: Option<String>,
}

impl FileResult {
    pub fn failed(source: PathBuf, destination: PathBuf, error: String) -> Self {
        Self {
            source,
            destination,
            original_size: 0,
            converted_size: 0,
            had_alpha: false,
            error: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn savings_pct(&self) -> f64 {
        if self.original_size == 0 {
            return 0.0;
        }
        (1.0 - self.converted_size as f64 / self.original_size as f64) * 100.0
    }
}

/// Aggregate report for a batch, in directory-listing order.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub results: Vec<FileResult>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, result: FileResult) {
        self.results.push(result);
    }

    fn successes(&self) -> impl Iterator<Item = &FileResult> {
        self.results.iter().filter(|r| r.is_ok())
    }

    pub fn total_original(&self) -> u64 {
        self.successes().map(|r| r.original_size).sum()
    }

    pub fn total_converted(&self) -> u64 {
        self.successes().map(|r| r.converted_size).sum()
    }

    pub fn total_savings_pct(&self) -> f64 {
        let orig = self.total_original();
        if orig == 0 {
            return 0.0;
        }
        (1.0 - self.total_converted() as f64 / orig as f64) * 100.0
    }

    pub fn success_count(&self) -> usize {
        self.successes().count()
    }

    pub fn error_count(&self) -> usize {
        self.failures().count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileResult> {
        self.results.iter().filter(|r| !r.is_ok())
    }
}
