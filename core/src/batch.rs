use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use rayon::prelude::*;

use crate::config::{ConvertConfig, FailurePolicy};
use crate::converter::convert_file;
use crate::error::ConvertError;
use crate::io::{collect_png_files, ensure_dir, same_directory};
use crate::naming::output_file_name;
use crate::report::{FileResult, Report};

/// Why a planned job must not write its destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conflict {
    /// The destination is one of the PNGs being converted in place.
    OverwritesSource,
    /// An earlier file in the listing already writes this destination.
    DuplicateOf(PathBuf),
}

/// One planned PNG → WebP conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    pub file_name: String,
    pub output_name: String,
    pub source: PathBuf,
    pub destination: PathBuf,
    pub conflict: Option<Conflict>,
}

/// Converts every PNG at the top level of a directory into WebP.
pub struct BatchConverter {
    config: ConvertConfig,
}

impl BatchConverter {
    pub fn new(config: ConvertConfig) -> Result<Self, ConvertError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// List the conversions a run would perform. Touches nothing on disk.
    ///
    /// Jobs whose destination is another source PNG, or a destination an
    /// earlier job already claimed, carry a [`Conflict`] and are refused
    /// when run.
    pub fn plan(&self) -> Result<Vec<ConversionJob>, ConvertError> {
        let entries = collect_png_files(&self.config.source_dir)?;

        let source_names: HashSet<String> =
            if same_directory(&self.config.source_dir, &self.config.dest_dir) {
                entries.iter().map(|e| e.file_name.clone()).collect()
            } else {
                HashSet::new()
            };
        let mut claimed: HashMap<String, PathBuf> = HashMap::new();

        let mut jobs = Vec::with_capacity(entries.len());
        for entry in entries {
            let output_name = output_file_name(&entry.file_name, self.config.rename);

            let conflict = if source_names.contains(&output_name) {
                Some(Conflict::OverwritesSource)
            } else if let Some(first) = claimed.get(&output_name) {
                Some(Conflict::DuplicateOf(first.clone()))
            } else {
                claimed.insert(output_name.clone(), entry.path.clone());
                None
            };

            jobs.push(ConversionJob {
                destination: self.config.dest_dir.join(&output_name),
                source: entry.path,
                file_name: entry.file_name,
                output_name,
                conflict,
            });
        }

        Ok(jobs)
    }

    pub fn convert_all(&self) -> Result<Report, ConvertError> {
        self.convert_all_with(|_| {})
    }

    /// Plan and run the batch, calling `on_file` once for every file
    /// processed, failed ones included.
    pub fn convert_all_with<F>(&self, on_file: F) -> Result<Report, ConvertError>
    where
        F: Fn(&FileResult) + Sync,
    {
        // listing first: a missing source must not leave a fresh dest behind
        let jobs = self.plan()?;
        self.convert_jobs(&jobs, on_file)
    }

    /// Run jobs previously returned by [`plan`](Self::plan).
    pub fn convert_jobs<F>(&self, jobs: &[ConversionJob], on_file: F) -> Result<Report, ConvertError>
    where
        F: Fn(&FileResult) + Sync,
    {
        ensure_dir(&self.config.dest_dir)?;

        log::info!(
            "Converting {} file(s) from {} to {}",
            jobs.len(),
            self.config.source_dir.display(),
            self.config.dest_dir.display()
        );

        let results = if self.config.jobs > 1 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.config.jobs)
                .build()?;
            pool.install(|| {
                jobs.par_iter()
                    .map(|job| self.settle(job, self.convert_job(job), &on_file))
                    .collect::<Result<Vec<_>, _>>()
            })?
        } else {
            jobs.iter()
                .map(|job| self.settle(job, self.convert_job(job), &on_file))
                .collect::<Result<Vec<_>, _>>()?
        };

        Ok(Report { results })
    }

    fn convert_job(&self, job: &ConversionJob) -> Result<FileResult, ConvertError> {
        match &job.conflict {
            Some(Conflict::OverwritesSource) => Err(ConvertError::WouldOverwriteSource {
                path: job.destination.clone(),
            }),
            Some(Conflict::DuplicateOf(first)) => Err(ConvertError::DuplicateDestination {
                path: job.destination.clone(),
                first: first.clone(),
            }),
            None => convert_file(&job.source, &job.destination, &self.config),
        }
    }

    /// Apply the failure policy to one outcome.
    fn settle<F>(
        &self,
        job: &ConversionJob,
        outcome: Result<FileResult, ConvertError>,
        on_file: &F,
    ) -> Result<FileResult, ConvertError>
    where
        F: Fn(&FileResult) + Sync,
    {
        match outcome {
            Ok(result) => {
                log::info!("{} → {}", job.file_name, job.output_name);
                on_file(&result);
                Ok(result)
            }
            Err(e) if self.config.on_error == FailurePolicy::Abort => Err(e),
            Err(e) => {
                log::error!("Error converting {}: {}", job.source.display(), e);
                let result =
                    FileResult::failed(job.source.clone(), job.destination.clone(), e.to_string());
                on_file(&result);
                Ok(result)
            }
        }
    }
}

/// Validate `config` and convert the whole source directory.
pub fn convert_all(config: &ConvertConfig) -> Result<Report, ConvertError> {
    BatchConverter::new(config.clone())?.convert_all()
}
