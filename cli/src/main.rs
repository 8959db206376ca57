use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use png2webp::cli::Cli;
use png2webp::report::{display_name, print_summary};
use png2webp_core::{BatchConverter, Conflict};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Init logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let converter = BatchConverter::new(cli.to_config()).context("Invalid configuration")?;
    let config = converter.config();

    let planned = converter
        .plan()
        .context("Failed to collect input files")?;

    if cli.dry_run {
        println!("[dry-run] Would convert {} file(s):", planned.len());
        for job in &planned {
            match &job.conflict {
                None => println!("  {} → {}", job.source.display(), job.destination.display()),
                Some(Conflict::OverwritesSource) => println!(
                    "  {} → {} (skipped: would overwrite a source file)",
                    job.source.display(),
                    job.destination.display()
                ),
                Some(Conflict::DuplicateOf(first)) => println!(
                    "  {} → {} (skipped: already written from {})",
                    job.source.display(),
                    job.destination.display(),
                    first.display()
                ),
            }
        }
        return Ok(());
    }

    if planned.is_empty() {
        println!("No PNG files found in {}.", config.source_dir.display());
    } else {
        println!(
            "Converting {} file(s) to WebP ({})...",
            planned.len(),
            if config.lossless {
                "lossless".to_string()
            } else {
                format!("quality {}", config.quality)
            }
        );
    }

    let pb = ProgressBar::new(planned.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .context("Invalid progress bar template")?
            .progress_chars("█▓░"),
    );

    let report = converter
        .convert_jobs(&planned, |result| {
            if result.is_ok() {
                // suspend still prints when the bar is hidden (piped output)
                pb.suspend(|| {
                    println!(
                        "✓ {} → {} ({:.1}%)",
                        display_name(&result.source),
                        display_name(&result.destination),
                        result.savings_pct()
                    )
                });
            }
            pb.set_message(display_name(&result.source));
            pb.inc(1);
        })
        .context("Conversion failed")?;

    pb.finish_with_message("Done!");
    print_summary(&report);

    if report.error_count() > 0 {
        anyhow::bail!("{} file(s) failed to convert", report.error_count());
    }

    Ok(())
}
