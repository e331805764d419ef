//! Sequential batch conversion of markdown files into PDF files.
//!
//! A batch never aborts: every job runs, per-job failures are captured as
//! values, and the summary reports how many succeeded out of the total.

use std::fs;
use std::io;
use std::path::PathBuf;

use log::{debug, warn};
use thiserror::Error;

use crate::layout::PageSetup;
use crate::markdown;
use crate::render::{self, DocumentHeader};
use crate::styles::StyleSheet;

/// One conversion: a markdown source file and the PDF path to write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Job {
    /// Markdown input path.
    pub source: PathBuf,
    /// PDF output path.
    pub output: PathBuf,
}

impl Job {
    /// Creates a job from a (source, output) pair.
    pub fn new(source: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output: output.into(),
        }
    }
}

/// Failure modes of a single conversion job.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The source path did not point at a file; detected before reading.
    #[error("source file not found: {0}")]
    MissingSource(PathBuf),
    /// The source file existed but could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The layout library failed while building the PDF.
    #[error("failed to render PDF: {0}")]
    Render(#[from] genpdf::error::Error),
    /// The rendered bytes could not be written to the output path.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result of one job: the size of the written PDF, or the failure.
#[derive(Debug)]
pub struct JobOutcome {
    /// The job that was attempted.
    pub job: Job,
    /// Bytes written on success.
    pub result: Result<u64, ConvertError>,
}

/// Per-job outcomes plus the succeeded/total tally of a completed batch.
#[derive(Debug, Default)]
pub struct BatchSummary {
    outcomes: Vec<JobOutcome>,
}

impl BatchSummary {
    /// Returns the outcome of every job, in batch order.
    pub fn outcomes(&self) -> &[JobOutcome] {
        &self.outcomes
    }

    /// Number of jobs that produced a PDF.
    pub fn succeeded(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.result.is_ok())
            .count()
    }

    /// Number of jobs attempted.
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }
}

/// Converts one markdown file into a PDF at the job's output path.
///
/// The source is checked for existence before reading; all later failures
/// (read, render, write) are returned as [`ConvertError`] values.
pub fn convert_file(
    job: &Job,
    styles: &StyleSheet,
    setup: &PageSetup,
    header: Option<&DocumentHeader>,
) -> Result<u64, ConvertError> {
    if !job.source.is_file() {
        return Err(ConvertError::MissingSource(job.source.clone()));
    }

    let source = fs::read_to_string(&job.source).map_err(|err| ConvertError::Read {
        path: job.source.clone(),
        source: err,
    })?;

    let blocks = markdown::transform(&source);
    let pdf = render::render_document(&blocks, styles, setup, header)?;

    if let Some(parent) = job.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|err| ConvertError::Write {
                path: job.output.clone(),
                source: err,
            })?;
        }
    }
    fs::write(&job.output, &pdf.bytes).map_err(|err| ConvertError::Write {
        path: job.output.clone(),
        source: err,
    })?;

    Ok(pdf.bytes.len() as u64)
}

/// Runs every job in order and collects the per-job outcomes.
///
/// Failures are recorded, never propagated; the batch always completes.
pub fn run(
    jobs: &[Job],
    styles: &StyleSheet,
    setup: &PageSetup,
    header: Option<&DocumentHeader>,
) -> BatchSummary {
    let mut outcomes = Vec::with_capacity(jobs.len());

    for job in jobs {
        debug!("converting {} -> {}", job.source.display(), job.output.display());
        let result = convert_file(job, styles, setup, header);
        if let Err(err) = &result {
            warn!("conversion of {} failed: {}", job.source.display(), err);
        }
        outcomes.push(JobOutcome {
            job: job.clone(),
            result,
        });
    }

    BatchSummary { outcomes }
}
