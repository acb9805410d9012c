//! JSON datasets: loading at start-up and exporting selections.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DashError, Result};
use crate::state::records::{Collection, Review, Transaction, User};

/// Every collection the dashboard shows.
///
/// Missing keys deserialize as empty collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    /// Users page records.
    pub users: Vec<User>,
    /// Collections page records.
    pub collections: Vec<Collection>,
    /// Reviews page records.
    pub reviews: Vec<Review>,
    /// Transactions page records.
    pub transactions: Vec<Transaction>,
}

/// What: Read a dataset from a JSON file.
///
/// Inputs:
/// - `path`: File to read
///
/// Output:
/// - Parsed `Dataset`; `DashError::Io` or `DashError::Parse` on failure
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let body = fs::read_to_string(path).map_err(|source| DashError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let data: Dataset = serde_json::from_str(&body).map_err(|source| DashError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(
        path = %path.display(),
        users = data.users.len(),
        collections = data.collections.len(),
        reviews = data.reviews.len(),
        transactions = data.transactions.len(),
        "dataset loaded"
    );
    Ok(data)
}

/// What: Write records as pretty JSON into `dir`.
///
/// Inputs:
/// - `dir`: Target directory (created when missing)
/// - `stem`: File name stem, e.g. `transactions`
/// - `records`: Records to write
///
/// Output:
/// - Path of the written file, named `<stem>-<timestamp>.json`
pub fn export_records<R: Serialize>(dir: &Path, stem: &str, records: &[R]) -> Result<PathBuf> {
    let io_err = |path: &Path| {
        let path = path.to_path_buf();
        move |source| DashError::Io { path, source }
    };
    fs::create_dir_all(dir).map_err(io_err(dir))?;
    let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let mut path = dir.join(format!("{stem}-{stamp}.json"));
    let mut n = 1;
    while path.exists() {
        path = dir.join(format!("{stem}-{stamp}-{n}.json"));
        n += 1;
    }
    let body = serde_json::to_string_pretty(records).map_err(|source| DashError::Parse {
        path: path.clone(),
        source,
    })?;
    fs::write(&path, body).map_err(io_err(&path))?;
    tracing::info!(path = %path.display(), count = records.len(), "records exported");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Partial dataset files and malformed input
    ///
    /// - Input: JSON with only `reviews`; invalid JSON; missing file
    /// - Output: Other collections empty; Parse and Io errors respectively
    fn load_partial_and_errors() {
        let dir = tempfile::tempdir().expect("tempdir");
        let good = dir.path().join("data.json");
        fs::write(
            &good,
            r#"{"reviews":[{"id":"R-1","user":"Sara Khan","product":"Headphones",
                "rating":4,"comment":"ok","created":"Sep 2, 2025"}]}"#,
        )
        .expect("write");
        let data = load_dataset(&good).expect("load");
        assert_eq!(data.reviews.len(), 1);
        assert!(data.users.is_empty());

        let bad = dir.path().join("bad.json");
        fs::write(&bad, "{ not json").expect("write");
        assert!(matches!(load_dataset(&bad), Err(DashError::Parse { .. })));
        assert!(matches!(
            load_dataset(&dir.path().join("missing.json")),
            Err(DashError::Io { .. })
        ));
    }

    #[test]
    /// What: Export writes a readable JSON array and never overwrites
    ///
    /// - Input: Export the same records twice into a temp dir
    /// - Output: Two distinct files that parse back to the records
    fn export_twice() {
        let dir = tempfile::tempdir().expect("tempdir");
        let data = crate::sources::fixtures::demo_dataset();
        let a = export_records(dir.path(), "reviews", &data.reviews[..2]).expect("export");
        let b = export_records(dir.path(), "reviews", &data.reviews[..2]).expect("export");
        assert_ne!(a, b);
        let back: Vec<Review> =
            serde_json::from_str(&fs::read_to_string(&a).expect("read")).expect("parse");
        assert_eq!(back, data.reviews[..2].to_vec());
    }
}
