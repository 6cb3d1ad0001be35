//! Stored object references and per-operation outcomes

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A document as listed from the object store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectRef {
    /// Last path segment, used for display
    #[serde(rename = "name")]
    pub display_name: String,
    /// Full key within the bucket
    pub full_path: String,
    /// Object size in bytes
    pub size_bytes: u64,
    /// Human readable size, e.g. "2.0 KB"
    pub size: String,
}

impl ObjectRef {
    /// Build a reference from a full key and byte size
    pub fn new(full_path: impl Into<String>, size_bytes: u64) -> Self {
        let full_path = full_path.into();
        Self {
            display_name: display_name(&full_path).to_string(),
            size: size_label(size_bytes),
            full_path,
            size_bytes,
        }
    }
}

/// Last `/`-separated segment of a key
pub fn display_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Size in KiB with one decimal place
pub fn size_label(size_bytes: u64) -> String {
    format!("{:.1} KB", size_bytes as f64 / 1024.0)
}

/// Outcome of a single gateway mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationResult {
    /// Path or prefix acted on
    pub target: String,
    /// Whether the operation succeeded
    pub succeeded: bool,
    /// Human readable outcome, populated on success and failure
    pub message: String,
}

impl OperationResult {
    pub fn success(target: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            succeeded: true,
            message: message.into(),
        }
    }

    pub fn failure(target: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            succeeded: false,
            message: message.into(),
        }
    }
}

/// Ordered outcomes of one batch call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// One result per requested target, in request order
    pub results: Vec<OperationResult>,
    /// Number of successful results
    pub succeeded_count: usize,
    /// Number of requested targets
    pub total_count: usize,
}

impl BatchSummary {
    /// Build a summary, deriving the counts from the results
    pub fn from_results(results: Vec<OperationResult>) -> Self {
        let succeeded_count = results.iter().filter(|r| r.succeeded).count();
        let total_count = results.len();
        Self {
            results,
            succeeded_count,
            total_count,
        }
    }

    /// Number of failed results
    pub fn failed_count(&self) -> usize {
        self.total_count - self.succeeded_count
    }

    /// Whether every item succeeded
    pub fn all_succeeded(&self) -> bool {
        self.succeeded_count == self.total_count
    }

    /// Turn item failures into a typed error
    pub fn check(&self) -> Result<()> {
        if self.all_succeeded() {
            Ok(())
        } else {
            Err(Error::PartialBatchFailure {
                failed: self.failed_count(),
                total: self.total_count,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_ref_from_path() {
        let obj = ObjectRef::new("base/2024/report.pdf", 2048);
        assert_eq!(obj.display_name, "report.pdf");
        assert_eq!(obj.full_path, "base/2024/report.pdf");
        assert_eq!(obj.size, "2.0 KB");
    }

    #[test]
    fn test_size_label_rounding() {
        assert_eq!(size_label(0), "0.0 KB");
        assert_eq!(size_label(1536), "1.5 KB");
        assert_eq!(size_label(100), "0.1 KB");
    }

    #[test]
    fn test_display_name_without_separator() {
        assert_eq!(display_name("notes.txt"), "notes.txt");
    }

    #[test]
    fn test_summary_counts() {
        let summary = BatchSummary::from_results(vec![
            OperationResult::success("a", "ok"),
            OperationResult::failure("b", "missing"),
            OperationResult::success("c", "ok"),
        ]);
        assert_eq!(summary.total_count, 3);
        assert_eq!(summary.succeeded_count, 2);
        assert_eq!(summary.failed_count(), 1);
        assert!(matches!(
            summary.check(),
            Err(Error::PartialBatchFailure { failed: 1, total: 3 })
        ));
    }

    #[test]
    fn test_empty_summary_is_success() {
        let summary = BatchSummary::from_results(Vec::new());
        assert!(summary.all_succeeded());
        assert!(summary.check().is_ok());
    }
}
