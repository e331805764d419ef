//! Job lists: the built-in documentation set and TOML manifests.
//!
//! The conversion set is data, not code: a manifest file holds the document
//! title and the (source, output) pairs, so arbitrary file sets can be
//! converted and tested.  The historical documentation set ships built in.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::batch::Job;

/// A named list of conversion jobs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobList {
    /// Banner title stamped onto every generated document, if any.
    pub title: Option<String>,
    /// The conversions to run, in order.
    pub jobs: Vec<Job>,
}

/// Failure modes of manifest loading.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file could not be read.
    #[error("failed to read manifest {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The manifest was not valid TOML or did not match the schema.
    #[error("failed to parse manifest {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Deserialize)]
struct Manifest {
    title: Option<String>,
    #[serde(default, rename = "job")]
    jobs: Vec<JobSpec>,
}

#[derive(Debug, Deserialize)]
struct JobSpec {
    source: PathBuf,
    output: PathBuf,
}

/// Loads a TOML manifest of the form:
///
/// ```toml
/// title = "Project Documentation"
///
/// [[job]]
/// source = "docs/README.md"
/// output = "docs/Overview.pdf"
/// ```
pub fn load_manifest(path: &Path) -> Result<JobList, ManifestError> {
    let raw = fs::read_to_string(path).map_err(|err| ManifestError::Read {
        path: path.to_path_buf(),
        source: err,
    })?;
    let manifest: Manifest = toml::from_str(&raw).map_err(|err| ManifestError::Parse {
        path: path.to_path_buf(),
        source: err,
    })?;

    Ok(JobList {
        title: manifest.title,
        jobs: manifest
            .jobs
            .into_iter()
            .map(|spec| Job::new(spec.source, spec.output))
            .collect(),
    })
}

/// The built-in documentation set converted by `docpdf docs`.
pub fn documentation_set() -> JobList {
    const PAIRS: [(&str, &str); 9] = [
        ("docs/README.md", "docs/Stormwater_AI_Documentation_Overview.pdf"),
        ("docs/ai-system-overview.md", "docs/AI_System_Overview.pdf"),
        (
            "docs/ai-technical-implementation.md",
            "docs/AI_Technical_Implementation.pdf",
        ),
        ("docs/ai-performance-report.md", "docs/AI_Performance_Report.pdf"),
        (
            "docs/system-architecture-complete.md",
            "docs/System_Architecture_Complete.pdf",
        ),
        (
            "docs/current-status-and-issues.md",
            "docs/Current_Status_and_Issues.pdf",
        ),
        ("docs/bug-tracking-log.md", "docs/Bug_Tracking_Log.pdf"),
        ("docs/development-roadmap.md", "docs/Development_Roadmap.pdf"),
        ("replit.md", "docs/Project_Overview_and_Architecture.pdf"),
    ];

    JobList {
        title: Some("Stormwater AI Documentation".to_owned()),
        jobs: PAIRS
            .iter()
            .map(|(source, output)| Job::new(*source, *output))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::{documentation_set, load_manifest, ManifestError};
    use std::io::Write;

    #[test]
    fn documentation_set_lists_all_nine_documents() {
        let list = documentation_set();
        assert_eq!(list.jobs.len(), 9);
        assert_eq!(list.title.as_deref(), Some("Stormwater AI Documentation"));
        assert_eq!(
            list.jobs[0].source.to_str(),
            Some("docs/README.md")
        );
        assert_eq!(
            list.jobs[8].output.to_str(),
            Some("docs/Project_Overview_and_Architecture.pdf")
        );
    }

    #[test]
    fn manifest_round_trip() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("jobs.toml");
        let mut file = std::fs::File::create(&path).expect("create manifest");
        writeln!(
            file,
            "title = \"Sample Docs\"\n\n[[job]]\nsource = \"a.md\"\noutput = \"a.pdf\"\n\n[[job]]\nsource = \"b.md\"\noutput = \"out/b.pdf\"\n"
        )
        .expect("write manifest");

        let list = load_manifest(&path).expect("parse manifest");
        assert_eq!(list.title.as_deref(), Some("Sample Docs"));
        assert_eq!(list.jobs.len(), 2);
        assert_eq!(list.jobs[1].output.to_str(), Some("out/b.pdf"));
    }

    #[test]
    fn manifest_without_title_or_jobs_is_valid() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("empty.toml");
        std::fs::write(&path, "").expect("write manifest");

        let list = load_manifest(&path).expect("parse manifest");
        assert!(list.title.is_none());
        assert!(list.jobs.is_empty());
    }

    #[test]
    fn missing_manifest_reports_read_error() {
        let err = load_manifest(std::path::Path::new("no-such-manifest.toml")).unwrap_err();
        assert!(matches!(err, ManifestError::Read { .. }));
    }

    #[test]
    fn invalid_toml_reports_parse_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "title = [not toml").expect("write manifest");

        let err = load_manifest(&path).unwrap_err();
        assert!(matches!(err, ManifestError::Parse { .. }));
    }
}
