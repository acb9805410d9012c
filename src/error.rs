//! Crate-wide error type.

use std::path::PathBuf;

/// Errors surfaced by the table engine, the data sources and the create forms.
#[derive(Debug, thiserror::Error)]
pub enum DashError {
    /// Apply was requested on the date picker before both ends were chosen.
    #[error("select both a start and an end date before applying")]
    IncompleteRange,
    /// A dataset or export file could not be read or written.
    #[error("i/o error on {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// A dataset file was not valid JSON for the record types.
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },
    /// A record with this id is already present in the collection.
    #[error("record id {0} already exists")]
    DuplicateId(String),
    /// Drawing to or reading from the terminal failed.
    #[error("terminal i/o failed: {0}")]
    Terminal(#[from] std::io::Error),
    /// A form field failed validation.
    #[error("{field}: {message}")]
    InvalidField {
        /// Field label as shown to the user.
        field: String,
        /// Human readable reason.
        message: String,
    },
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, DashError>;

impl DashError {
    /// What: Build an `InvalidField` error.
    ///
    /// Inputs:
    /// - `field`: Field label
    /// - `message`: Reason the value was rejected
    ///
    /// Output:
    /// - `DashError::InvalidField`
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DashError;

    #[test]
    /// What: Error messages render the offending field and id
    ///
    /// - Input: `InvalidField` and `DuplicateId` values
    /// - Output: Display strings contain the field label and the id
    fn error_display_mentions_context() {
        let e = DashError::invalid("Amount", "must be a number");
        assert_eq!(e.to_string(), "Amount: must be a number");
        let d = DashError::DuplicateId("C-0001".into());
        assert!(d.to_string().contains("C-0001"));
        assert!(
            DashError::IncompleteRange
                .to_string()
                .contains("start and an end date")
        );
    }
}
