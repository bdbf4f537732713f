use super::file::{FileFormat, FileStore};
use crate::error::Result;
use crate::model::Record;

/// YAML notation: a top-level sequence of records.
pub struct YamlFormat;

impl FileFormat for YamlFormat {
    const NAME: &'static str = "yaml";
    const FILE_NAME: &'static str = "phonebook.yaml";

    fn serialize(records: &[Record]) -> Result<String> {
        Ok(serde_yaml::to_string(records)?)
    }

    fn deserialize(text: &str) -> Result<Vec<Record>> {
        Ok(serde_yaml::from_str(text)?)
    }
}

/// File-backed store persisting to YAML, by default `~/phonebook.yaml`.
pub type YamlStore = FileStore<YamlFormat>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_preserves_records() {
        let records = vec![
            Record::new("Eric Idle", "123-456-7890", "here"),
            Record::new("John Cleese", "111-222-3333", "there"),
        ];

        let text = YamlFormat::serialize(&records).unwrap();
        let parsed = YamlFormat::deserialize(&text).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_round_trip_preserves_values_yaml_would_otherwise_retype() {
        // values that look like YAML scalars must survive as strings
        let records = vec![Record::new("No One", "12345", "true")];

        let text = YamlFormat::serialize(&records).unwrap();
        let parsed = YamlFormat::deserialize(&text).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_empty_sequence_round_trips() {
        let text = YamlFormat::serialize(&[]).unwrap();
        assert_eq!(YamlFormat::deserialize(&text).unwrap(), Vec::<Record>::new());
    }
}
