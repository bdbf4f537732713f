use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A raw field mapping, as supplied by the CLI or a library caller.
///
/// Kept as a string map rather than a struct so that unknown keys are
/// representable and can be stripped (with a warning) by [`crate::validate`].
pub type Fields = BTreeMap<String, String>;

/// One phonebook entry. `name` is the unique identifier within a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub phone: String,
    pub address: String,
}

impl Record {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            address: address.into(),
        }
    }

    /// Look up a field value by its name. Returns `None` for unknown fields.
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "phone" => Some(&self.phone),
            "address" => Some(&self.address),
            _ => None,
        }
    }
}

/// A partial update for a [`Record`].
///
/// `None` means "not provided, keep the original value". `Some("")` is an
/// explicit empty value and is honored as such; the distinction is key
/// presence in the input mapping, never the emptiness of the string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl RecordPatch {
    /// Overlay this patch on `record`: supplied fields win, absent fields
    /// retain the original values.
    pub fn apply(&self, record: &Record) -> Record {
        Record {
            name: self.name.clone().unwrap_or_else(|| record.name.clone()),
            phone: self.phone.clone().unwrap_or_else(|| record.phone.clone()),
            address: self
                .address
                .clone()
                .unwrap_or_else(|| record.address.clone()),
        }
    }
}
