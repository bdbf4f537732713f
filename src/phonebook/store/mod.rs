//! # Storage Layer
//!
//! This module defines the storage abstraction for the phonebook. The
//! [`DataStore`] trait allows the application to work with different storage
//! backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with [`memory::InMemoryStore`] (no filesystem needed)
//! - Allow **future backends** (database, cloud, etc.) without changing core logic
//! - Keep record semantics **decoupled** from persistence details
//!
//! ## The contract
//!
//! Every backend provides five operations: `read`, `get`, `create`, `update`
//! and `delete`. `get` has a default implementation built on `read` (via
//! [`get_via_read`]); a backend with a cheaper point lookup may override it.
//!
//! The record invariants live in the shared helpers of this module, not in
//! the backends:
//! - `name` is unique across all records in a store
//! - `create` appends, so store order is insertion order
//! - `update` merges a patch over the original record in place
//! - a failed operation leaves the in-memory sequence untouched
//!
//! ## Filtering
//!
//! `read` takes a field → glob-pattern map. Matching is case-sensitive over
//! the full field value with `*`, `?` and `[seq]` wildcards; multiple filters
//! are AND-ed; an empty map returns every record in store order. Note that
//! `get` reuses this machinery, so a name containing glob metacharacters is
//! matched as a pattern, not a literal.
//!
//! ## Implementations
//!
//! - [`file::FileStore`]: production file-backed storage, generic over the
//!   serialization notation ([`json::JsonStore`], [`yaml::YamlStore`])
//! - [`memory::InMemoryStore`]: in-memory storage for testing
//!
//! ## Backend registry
//!
//! [`BACKENDS`] lists the persistent backends by stable name (`"json"`,
//! `"yaml"`); the first entry is the default. [`open`] resolves a name to a
//! boxed store, so callers (the CLI included) construct stores explicitly and
//! pass them around; there is no process-wide current store.

use crate::error::{PhonebookError, Result};
use crate::model::{Fields, Record};
use crate::validate;
use glob::Pattern;
use std::collections::BTreeMap;
use std::path::PathBuf;

pub mod file;
pub mod json;
pub mod memory;
pub mod yaml;

pub use file::{FileFormat, FileStore};
pub use json::JsonStore;
pub use memory::InMemoryStore;
pub use yaml::YamlStore;

/// Filters for [`DataStore::read`]: field name → glob pattern.
pub type Filters = BTreeMap<String, String>;

/// Abstract interface for record storage.
pub trait DataStore {
    /// Return all records matching every filter, in store order.
    /// An empty filter map returns every record.
    fn read(&self, filters: &Filters) -> Result<Vec<Record>>;

    /// Get a single record by name.
    ///
    /// The default implementation filters `read` by name, which means the
    /// name is matched as a glob pattern (see the module docs).
    fn get(&self, name: &str) -> Result<Record> {
        get_via_read(self, name)
    }

    /// Add a new record. The payload must carry all required fields.
    fn create(&mut self, fields: &Fields) -> Result<()>;

    /// Patch the record with the given name. Only supplied fields change.
    fn update(&mut self, name: &str, fields: &Fields) -> Result<()>;

    /// Remove the record with the given name.
    fn delete(&mut self, name: &str) -> Result<()>;
}

/// The default `get`: a `read` filtered by name, first match wins.
///
/// Shared as a free function so implementations that override
/// [`DataStore::get`] can still fall back to it.
pub fn get_via_read<S: DataStore + ?Sized>(store: &S, name: &str) -> Result<Record> {
    let filters = Filters::from([("name".to_string(), name.to_string())]);
    let mut matches = store.read(&filters)?;
    if matches.is_empty() {
        return Err(PhonebookError::MissingRecord(name.to_string()));
    }
    Ok(matches.remove(0))
}

/// Apply glob filters to a record sequence, preserving order.
///
/// A filter on a field name records don't have matches nothing.
pub(crate) fn filter_records(records: &[Record], filters: &Filters) -> Result<Vec<Record>> {
    let mut patterns = Vec::with_capacity(filters.len());
    for (field, pattern) in filters {
        patterns.push((field.as_str(), Pattern::new(pattern)?));
    }

    Ok(records
        .iter()
        .filter(|record| {
            patterns.iter().all(|(field, pattern)| {
                record
                    .field(field)
                    .is_some_and(|value| pattern.matches(value))
            })
        })
        .cloned()
        .collect())
}

/// Validate and append a new record, enforcing name uniqueness.
pub(crate) fn insert_record(records: &mut Vec<Record>, fields: &Fields) -> Result<()> {
    let (record, _dropped) = validate::validate(fields)?;

    if records.iter().any(|existing| existing.name == record.name) {
        return Err(PhonebookError::DuplicateRecord(record.name));
    }

    records.push(record);
    Ok(())
}

/// Validate a patch and merge it over the named record in place.
///
/// A rename is checked for collisions against every *other* record in a
/// single scan. The conflicting record may sit before or after the target
/// in the sequence, so the scan only stops early when the name is unchanged.
pub(crate) fn update_record(records: &mut [Record], name: &str, fields: &Fields) -> Result<()> {
    let (patch, _dropped) = validate::validate_patch(fields);
    let new_name = patch.name.as_deref().unwrap_or(name);
    let renaming = new_name != name;

    let mut target = None;
    for (index, existing) in records.iter().enumerate() {
        if existing.name == name {
            target = Some(index);
            if !renaming {
                break;
            }
        } else if renaming && existing.name == new_name {
            return Err(PhonebookError::DuplicateRecord(new_name.to_string()));
        }
    }

    let index = target.ok_or_else(|| PhonebookError::MissingRecord(name.to_string()))?;
    records[index] = patch.apply(&records[index]);
    Ok(())
}

/// Remove the record with the given name.
pub(crate) fn remove_record(records: &mut Vec<Record>, name: &str) -> Result<()> {
    let index = records
        .iter()
        .position(|existing| existing.name == name)
        .ok_or_else(|| PhonebookError::MissingRecord(name.to_string()))?;
    records.remove(index);
    Ok(())
}

/// A registered persistent backend.
pub struct Backend {
    name: &'static str,
    open: fn(Option<PathBuf>) -> Result<Box<dyn DataStore>>,
}

impl Backend {
    /// The stable name callers select this backend by.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Construct a store, using the backend's default path when `path` is `None`.
    pub fn open(&self, path: Option<PathBuf>) -> Result<Box<dyn DataStore>> {
        (self.open)(path)
    }
}

fn open_json(path: Option<PathBuf>) -> Result<Box<dyn DataStore>> {
    Ok(Box::new(JsonStore::open(path)?))
}

fn open_yaml(path: Option<PathBuf>) -> Result<Box<dyn DataStore>> {
    Ok(Box::new(YamlStore::open(path)?))
}

/// The available persistent backends. The first entry is the default.
pub const BACKENDS: &[Backend] = &[
    Backend {
        name: json::JsonFormat::NAME,
        open: open_json,
    },
    Backend {
        name: yaml::YamlFormat::NAME,
        open: open_yaml,
    },
];

/// Look up a backend by name.
pub fn backend(name: &str) -> Option<&'static Backend> {
    BACKENDS.iter().find(|backend| backend.name == name)
}

/// The backend used when no name is given.
pub fn default_backend() -> &'static Backend {
    &BACKENDS[0]
}

/// Open a store by backend name, falling back to the default backend when
/// `name` is `None` and to the backend's default path when `path` is `None`.
pub fn open(name: Option<&str>, path: Option<PathBuf>) -> Result<Box<dyn DataStore>> {
    let backend = match name {
        Some(name) => {
            backend(name).ok_or_else(|| PhonebookError::UnknownBackend(name.to_string()))?
        }
        None => default_backend(),
    };
    backend.open(path)
}
