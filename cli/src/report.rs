use std::path::Path;

use png2webp_core::Report;

pub fn print_summary(report: &Report) {
    println!("\n--- Summary ---");
    println!(
        "Files converted: {} | Errors: {}",
        report.success_count(),
        report.error_count()
    );

    if report.success_count() > 0 {
        println!(
            "Total: {} → {} ({:.1}% reduction)",
            format_size(report.total_original()),
            format_size(report.total_converted()),
            report.total_savings_pct()
        );
    }

    for r in report.failures() {
        if let Some(ref err) = r.error {
            println!("  ERROR {}: {}", r.source.display(), err);
        }
    }
}

/// File name for progress lines, falling back to the full path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * KB;
    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_use_binary_units() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.00 MB");
    }

    #[test]
    fn display_name_prefers_file_name() {
        assert_eq!(display_name(Path::new("/tmp/pngs/a.png")), "a.png");
        assert_eq!(display_name(Path::new("/")), "/");
    }
}
