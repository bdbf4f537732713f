use super::file::{FileFormat, FileStore};
use crate::error::Result;
use crate::model::Record;

/// JSON notation: a top-level array of records, indented for hand-editing.
pub struct JsonFormat;

impl FileFormat for JsonFormat {
    const NAME: &'static str = "json";
    const FILE_NAME: &'static str = "phonebook.json";

    fn serialize(records: &[Record]) -> Result<String> {
        Ok(serde_json::to_string_pretty(records)?)
    }

    fn deserialize(text: &str) -> Result<Vec<Record>> {
        Ok(serde_json::from_str(text)?)
    }
}

/// File-backed store persisting to JSON, by default `~/phonebook.json`.
pub type JsonStore = FileStore<JsonFormat>;
