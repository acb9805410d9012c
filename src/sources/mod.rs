//! Where records come from: providers, dataset files and demo fixtures.

mod dataset;
pub mod fixtures;
mod provider;

pub use dataset::{Dataset, export_records, load_dataset};
pub use provider::{DataProvider, InMemoryProvider};

/// What: Resolve the dataset to show.
///
/// Inputs:
/// - `path`: Dataset file from the command line or settings
///
/// Output:
/// - The loaded file; the demo fixtures when `path` is `None`
///
/// Details:
/// - Read and parse failures are returned; the caller decides whether to abort.
pub fn resolve_dataset(path: Option<&std::path::Path>) -> crate::error::Result<Dataset> {
    match path {
        Some(p) => load_dataset(p),
        None => {
            tracing::info!("no dataset configured; using demo records");
            Ok(fixtures::demo_dataset())
        }
    }
}
