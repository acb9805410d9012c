//! Record collections behind each page.

use crate::error::{DashError, Result};
use crate::state::Record;

/// What: Owner of one record collection.
///
/// Details:
/// - The table engine only reads `list()`; create and delete flows go
///   through the provider so id uniqueness is checked in one place.
pub trait DataProvider<R: Record> {
    /// Records in provider order.
    fn list(&self) -> &[R];

    /// What: Insert a new record.
    ///
    /// Inputs:
    /// - `record`: Complete record with its id already assigned
    ///
    /// Output:
    /// - `Ok(())` on success; `DashError::DuplicateId` when the id is taken
    fn create(&mut self, record: R) -> Result<()>;

    /// Remove the record with `id`; returns it when present.
    fn remove(&mut self, id: &str) -> Option<R>;

    /// Whether a record with `id` exists.
    fn contains(&self, id: &str) -> bool {
        self.list().iter().any(|r| r.id() == id)
    }
}

/// Vec-backed provider used for demo fixtures and loaded datasets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemoryProvider<R> {
    /// Records in insertion order.
    records: Vec<R>,
}

impl<R: Record> InMemoryProvider<R> {
    /// What: Wrap an existing collection.
    ///
    /// Inputs:
    /// - `records`: Initial records
    ///
    /// Output:
    /// - Provider holding the records; later duplicates of an id are dropped with a warning
    pub fn new(records: Vec<R>) -> Self {
        let mut out = Self {
            records: Vec::with_capacity(records.len()),
        };
        for r in records {
            if let Err(e) = out.create(r) {
                tracing::warn!(error = %e, "skipping record while loading");
            }
        }
        out
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R: Record> DataProvider<R> for InMemoryProvider<R> {
    fn list(&self) -> &[R] {
        &self.records
    }

    fn create(&mut self, record: R) -> Result<()> {
        if self.contains(record.id()) {
            return Err(DashError::DuplicateId(record.id().to_string()));
        }
        tracing::debug!(id = record.id(), "record created");
        self.records.push(record);
        Ok(())
    }

    fn remove(&mut self, id: &str) -> Option<R> {
        let pos = self.records.iter().position(|r| r.id() == id)?;
        tracing::debug!(id, "record removed");
        Some(self.records.remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldValue;

    #[derive(Debug, Clone, PartialEq)]
    struct Item(&'static str);

    impl Record for Item {
        fn id(&self) -> &str {
            self.0
        }
        fn field(&self, _key: &str) -> Option<FieldValue> {
            None
        }
    }

    #[test]
    /// What: Duplicate ids are rejected; removal keeps order
    ///
    /// - Input: Load A, B, A; create B; remove A
    /// - Output: Second A dropped at load; create B fails; B remains
    fn duplicates_rejected() {
        let mut p = InMemoryProvider::new(vec![Item("A"), Item("B"), Item("A")]);
        assert_eq!(p.len(), 2);
        assert!(matches!(p.create(Item("B")), Err(DashError::DuplicateId(id)) if id == "B"));
        assert_eq!(p.remove("A"), Some(Item("A")));
        assert_eq!(p.remove("A"), None);
        assert_eq!(p.list(), &[Item("B")]);
        assert!(p.contains("B"));
    }
}
