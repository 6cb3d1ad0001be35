//! Upload items and object naming

use chrono::{DateTime, TimeZone};

/// A file submitted for upload
#[derive(Debug, Clone)]
pub struct UploadItem {
    /// Name the file arrived with
    pub filename: String,
    /// File content
    pub data: Vec<u8>,
    /// Object name to use instead of the generated one
    pub custom_name: Option<String>,
}

impl UploadItem {
    pub fn new(filename: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            data,
            custom_name: None,
        }
    }

    pub fn with_custom_name(mut self, name: impl Into<String>) -> Self {
        self.custom_name = Some(name.into());
        self
    }

    /// Object name relative to the base path
    ///
    /// A non-empty custom name wins; otherwise the original filename is
    /// prefixed with `YYYYMMDD_HHMMSS_` taken from `now`.
    pub fn object_name<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        match self.custom_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => timestamped_name(&self.filename, now),
        }
    }
}

/// `{YYYYMMDD_HHMMSS}_{filename}`
pub fn timestamped_name<Tz: TimeZone>(filename: &str, now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{}_{}", now.format("%Y%m%d_%H%M%S"), filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap()
    }

    #[test]
    fn test_timestamped_name() {
        assert_eq!(
            timestamped_name("report.pdf", &fixed_time()),
            "20240309_140507_report.pdf"
        );
    }

    #[test]
    fn test_custom_name_wins() {
        let item = UploadItem::new("report.pdf", vec![1]).with_custom_name("final.pdf");
        assert_eq!(item.object_name(&fixed_time()), "final.pdf");
    }

    #[test]
    fn test_empty_custom_name_falls_back() {
        let item = UploadItem::new("report.pdf", vec![1]).with_custom_name("");
        assert_eq!(item.object_name(&fixed_time()), "20240309_140507_report.pdf");
    }
}
