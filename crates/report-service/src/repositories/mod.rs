//! Read-only access to report files on disk.
//!
//! Layout: `<root>/<test_type>/reports/test_results_<id>.json` with a
//! matching `test_report_<id>.html`. Nothing here writes to the tree.

use crate::errors::ReportError;
use crate::models::{
    html_file_name, report_id_from_file_name, results_file_name, ReportEntry, TestType,
};
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Listing cap used when counting a type's reports.
pub const MAX_COUNTED_REPORTS: usize = 100;

#[derive(Debug, Clone)]
pub struct ReportStore {
    root: PathBuf,
}

impl ReportStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn reports_dir(&self, test_type: TestType) -> PathBuf {
        self.root.join(test_type.as_str()).join("reports")
    }

    /// Newest-first report files, by file name.
    async fn result_file_names(&self, test_type: TestType) -> Vec<String> {
        let dir = self.reports_dir(test_type);
        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!(target: "report.repositories", dir = %dir.display(), error = %e, "Cannot list reports");
                return Vec::new();
            }
        };

        let mut names = Vec::new();
        loop {
            match entries.next_entry().await {
                Ok(Some(entry)) => {
                    if let Some(name) = entry.file_name().to_str() {
                        if report_id_from_file_name(name).is_some() {
                            names.push(name.to_string());
                        }
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    tracing::warn!(target: "report.repositories", dir = %dir.display(), error = %e, "Stopped listing reports");
                    break;
                }
            }
        }

        names.sort_unstable_by(|a, b| b.cmp(a));
        names
    }

    /// Up to `limit` newest reports. Files that cannot be read or parsed are
    /// logged and skipped; they still count against `limit`.
    pub async fn list(&self, test_type: TestType, limit: usize) -> Vec<ReportEntry> {
        let dir = self.reports_dir(test_type);
        let mut reports = Vec::new();

        for name in self.result_file_names(test_type).await.into_iter().take(limit) {
            let Some(id) = report_id_from_file_name(&name) else {
                continue;
            };
            match read_json(&dir.join(&name)).await {
                Ok(report) => reports.push(ReportEntry::from_report(test_type, id, &report)),
                Err(e) => {
                    tracing::warn!(target: "report.repositories", file = %name, error = %e, "Skipping unreadable report");
                }
            }
        }

        reports
    }

    pub async fn latest(&self, test_type: TestType) -> Option<ReportEntry> {
        self.list(test_type, 1).await.into_iter().next()
    }

    /// The raw JSON of one report.
    ///
    /// # Errors
    ///
    /// `ReportNotFound` if the file does not exist, `Unreadable` if it cannot
    /// be read or is not JSON.
    pub async fn get_report(&self, test_type: TestType, report_id: &str) -> Result<Value, ReportError> {
        if !is_plain_id(report_id) {
            return Err(ReportError::ReportNotFound(report_id.to_string()));
        }

        let path = self.reports_dir(test_type).join(results_file_name(report_id));
        match read_json(&path).await {
            Ok(report) => Ok(report),
            Err(ReadError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                Err(ReportError::ReportNotFound(report_id.to_string()))
            }
            Err(e) => Err(ReportError::Unreadable(e.to_string())),
        }
    }

    /// The HTML rendering of one report.
    ///
    /// # Errors
    ///
    /// `HtmlNotFound` if the file does not exist, `Unreadable` otherwise.
    pub async fn get_html(&self, test_type: TestType, report_id: &str) -> Result<Vec<u8>, ReportError> {
        if !is_plain_id(report_id) {
            return Err(ReportError::HtmlNotFound(report_id.to_string()));
        }

        let path = self.reports_dir(test_type).join(html_file_name(report_id));
        tokio::fs::read(&path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                ReportError::HtmlNotFound(report_id.to_string())
            } else {
                ReportError::Unreadable(e.to_string())
            }
        })
    }
}

/// Ids are single file-name fragments; separators and `..` never resolve.
fn is_plain_id(report_id: &str) -> bool {
    !report_id.is_empty()
        && !report_id.contains(['/', '\\'])
        && !report_id.contains("..")
}

#[derive(Debug, thiserror::Error)]
enum ReadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

async fn read_json(path: &Path) -> Result<Value, ReadError> {
    let bytes = tokio::fs::read(path).await?;
    Ok(serde_json::from_slice(&bytes)?)
}
