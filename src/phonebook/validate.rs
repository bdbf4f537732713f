//! Record validation.
//!
//! Every payload headed for a store passes through here first: required
//! fields are enforced for full records, and unknown fields are stripped for
//! both full records and patches. Stripping is not an error: it emits a
//! warning through the `log` facade and the stripped names are also returned
//! to the caller, so tests can assert on the event without capturing output.

use crate::error::{PhonebookError, Result};
use crate::model::{Fields, Record, RecordPatch};
use log::warn;

/// The fields every record must carry.
pub const REQUIRED_FIELDS: [&str; 3] = ["name", "phone", "address"];

/// Validate a full-record payload, as used by `create`.
///
/// Fails with [`PhonebookError::InvalidRecord`] naming the missing field(s)
/// when any required field is absent. Unknown fields are dropped; the
/// returned list names them. The caller's mapping is never mutated.
pub fn validate(fields: &Fields) -> Result<(Record, Vec<String>)> {
    let (Some(name), Some(phone), Some(address)) = (
        fields.get("name"),
        fields.get("phone"),
        fields.get("address"),
    ) else {
        let missing = REQUIRED_FIELDS
            .iter()
            .filter(|field| !fields.contains_key(**field))
            .map(|field| field.to_string())
            .collect();
        return Err(PhonebookError::InvalidRecord(missing));
    };

    let dropped = discard_unknown(fields);
    let record = Record {
        name: name.clone(),
        phone: phone.clone(),
        address: address.clone(),
    };
    Ok((record, dropped))
}

/// Validate a partial-update payload, as used by `update`.
///
/// Required fields are not enforced: any subset of {name, phone, address} is
/// a valid patch, and a key's presence in the mapping is what marks the field
/// as supplied. Unknown fields are dropped as in [`validate`].
pub fn validate_patch(fields: &Fields) -> (RecordPatch, Vec<String>) {
    let dropped = discard_unknown(fields);
    let patch = RecordPatch {
        name: fields.get("name").cloned(),
        phone: fields.get("phone").cloned(),
        address: fields.get("address").cloned(),
    };
    (patch, dropped)
}

fn discard_unknown(fields: &Fields) -> Vec<String> {
    let dropped: Vec<String> = fields
        .keys()
        .filter(|key| !REQUIRED_FIELDS.contains(&key.as_str()))
        .cloned()
        .collect();
    if !dropped.is_empty() {
        warn!(
            "Unknown record field(s) given, discarding: {}",
            dropped.join(", ")
        );
    }
    dropped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Fields;

    fn full_fields() -> Fields {
        Fields::from([
            ("name".to_string(), "Eric Idle".to_string()),
            ("phone".to_string(), "123-456-7890".to_string()),
            ("address".to_string(), "here".to_string()),
        ])
    }

    #[test]
    fn test_validate_full_record() {
        let (record, dropped) = validate(&full_fields()).unwrap();
        assert_eq!(record.name, "Eric Idle");
        assert_eq!(record.phone, "123-456-7890");
        assert_eq!(record.address, "here");
        assert!(dropped.is_empty());
    }

    #[test]
    fn test_validate_missing_fields_are_named() {
        let fields = Fields::from([("name".to_string(), "Eric Idle".to_string())]);

        let err = validate(&fields).unwrap_err();
        match err {
            PhonebookError::InvalidRecord(missing) => {
                assert_eq!(missing, vec!["phone".to_string(), "address".to_string()]);
            }
            other => panic!("expected InvalidRecord, got: {other}"),
        }
    }

    #[test]
    fn test_validate_strips_unknown_fields() {
        let mut fields = full_fields();
        fields.insert("extra".to_string(), "z".to_string());

        let (record, dropped) = validate(&fields).unwrap();
        assert_eq!(dropped, vec!["extra".to_string()]);
        assert_eq!(record, Record::new("Eric Idle", "123-456-7890", "here"));
        // copy semantics: the caller's mapping keeps the unknown key
        assert!(fields.contains_key("extra"));
    }

    #[test]
    fn test_validate_patch_ignores_required_fields() {
        let fields = Fields::from([("phone".to_string(), "999-999-9999".to_string())]);

        let (patch, dropped) = validate_patch(&fields);
        assert!(dropped.is_empty());
        assert_eq!(patch.phone.as_deref(), Some("999-999-9999"));
        assert_eq!(patch.name, None);
        assert_eq!(patch.address, None);
    }

    #[test]
    fn test_validate_patch_strips_unknown_fields() {
        let fields = Fields::from([
            ("phone".to_string(), "999-999-9999".to_string()),
            ("foobar".to_string(), "baz".to_string()),
        ]);

        let (patch, dropped) = validate_patch(&fields);
        assert_eq!(dropped, vec!["foobar".to_string()]);
        assert_eq!(patch.phone.as_deref(), Some("999-999-9999"));
    }
}
