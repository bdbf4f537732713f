use super::{filter_records, insert_record, remove_record, update_record, DataStore, Filters};
use crate::error::Result;
use crate::model::{Fields, Record};

/// In-memory record storage for testing.
///
/// Implements the full [`DataStore`] contract over a bare `Vec` with no
/// persistence, so logic tests don't need a filesystem. Not listed in the
/// backend registry: the registry is the menu of persistent backends.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Vec<Record>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with pre-built records, bypassing validation.
    pub fn with_records(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl DataStore for InMemoryStore {
    fn read(&self, filters: &Filters) -> Result<Vec<Record>> {
        filter_records(&self.records, filters)
    }

    fn create(&mut self, fields: &Fields) -> Result<()> {
        insert_record(&mut self.records, fields)
    }

    fn update(&mut self, name: &str, fields: &Fields) -> Result<()> {
        update_record(&mut self.records, name, fields)
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        remove_record(&mut self.records, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PhonebookError;
    use std::collections::HashSet;

    fn fields(entries: &[(&str, &str)]) -> Fields {
        entries
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn test_create_then_get() {
        let mut store = InMemoryStore::new();
        store
            .create(&fields(&[
                ("name", "Eric Idle"),
                ("phone", "123-456-7890"),
                ("address", "here"),
            ]))
            .unwrap();

        let record = store.get("Eric Idle").unwrap();
        assert_eq!(record, Record::new("Eric Idle", "123-456-7890", "here"));
    }

    #[test]
    fn test_get_missing_record() {
        let store = InMemoryStore::new();
        let err = store.get("Ghost").unwrap_err();
        assert!(matches!(err, PhonebookError::MissingRecord(name) if name == "Ghost"));
    }

    #[test]
    fn test_get_treats_name_as_glob_pattern() {
        // get() reuses glob read(): metacharacters in the name act as a
        // pattern, not a literal. Intentional, see the store module docs.
        let store = InMemoryStore::with_records(vec![
            Record::new("Eric Idle", "123-456-7890", "here"),
            Record::new("John Cleese", "111-222-3333", "there"),
        ]);

        let record = store.get("Eric*").unwrap();
        assert_eq!(record.name, "Eric Idle");
    }

    #[test]
    fn test_read_is_idempotent() {
        let store = InMemoryStore::with_records(vec![
            Record::new("Eric Idle", "123-456-7890", "here"),
            Record::new("John Cleese", "111-222-3333", "there"),
        ]);

        let first = store.read(&Filters::new()).unwrap();
        let second = store.read(&Filters::new()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_names_stay_unique_across_operation_sequences() {
        let mut store = InMemoryStore::new();
        store
            .create(&fields(&[
                ("name", "Eric Idle"),
                ("phone", "123-456-7890"),
                ("address", "here"),
            ]))
            .unwrap();
        store
            .create(&fields(&[
                ("name", "John Cleese"),
                ("phone", "111-222-3333"),
                ("address", "there"),
            ]))
            .unwrap();

        // duplicate create rejected
        assert!(store
            .create(&fields(&[
                ("name", "Eric Idle"),
                ("phone", "999-999-9999"),
                ("address", "not here"),
            ]))
            .is_err());

        // rename onto an existing name rejected
        assert!(store
            .update("Eric Idle", &fields(&[("name", "John Cleese")]))
            .is_err());

        // delete then re-create under the freed name
        store.delete("John Cleese").unwrap();
        store
            .create(&fields(&[
                ("name", "John Cleese"),
                ("phone", "444-555-6666"),
                ("address", "elsewhere"),
            ]))
            .unwrap();

        let names: Vec<String> = store
            .read(&Filters::new())
            .unwrap()
            .into_iter()
            .map(|record| record.name)
            .collect();
        let unique: HashSet<&String> = names.iter().collect();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn test_create_missing_required_field() {
        let mut store = InMemoryStore::new();
        let err = store
            .create(&fields(&[("name", "Eric Idle")]))
            .unwrap_err();
        assert!(matches!(err, PhonebookError::InvalidRecord(_)));
    }
}
