use crate::error::{Result, TraverseError};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Value
// ---------------------------------------------------------------------------

/// A field value: integer or text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(i64),
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(s) => f.write_str(s),
        }
    }
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub key: String,
    pub value: Value,
}

/// A fixed set of named fields. Field order is definition order and is
/// preserved through serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub fields: Vec<Field>,
}

impl Record {
    pub fn from_pairs<K, I>(pairs: I) -> Record
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Record {
            fields: pairs
                .into_iter()
                .map(|(key, value)| Field {
                    key: key.into(),
                    value,
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|field| field.key == key)
            .map(|field| &field.value)
    }

    /// Visit the fields as `(key, value)` pairs in definition order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields
            .iter()
            .map(|field| (field.key.as_str(), &field.value))
    }

    /// Reject duplicate field keys.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.key.as_str()) {
                return Err(TraverseError::DuplicateField(field.key.clone()));
            }
        }
        Ok(())
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for field in &self.fields {
            map.serialize_entry(&field.key, &field.value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = Record;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping of field names to text or integer values")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<Record, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut fields = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, Value>()? {
                    fields.push(Field { key, value });
                }
                Ok(Record { fields })
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person() -> Record {
        Record::from_pairs([
            ("name", Value::Text("John".to_string())),
            ("age", Value::Number(30)),
            ("occupation", Value::Text("Developer".to_string())),
        ])
    }

    #[test]
    fn entries_follow_definition_order() {
        let record = person();
        let keys: Vec<&str> = record.entries().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["name", "age", "occupation"]);
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn get_finds_fields_by_key() {
        let record = person();
        assert_eq!(record.get("age"), Some(&Value::Number(30)));
        assert_eq!(record.get("salary"), None);
    }

    #[test]
    fn validate_rejects_duplicate_keys() {
        let record = Record::from_pairs([
            ("name", Value::Text("John".to_string())),
            ("name", Value::Text("Jane".to_string())),
        ]);
        assert!(matches!(
            record.validate(),
            Err(TraverseError::DuplicateField(key)) if key == "name"
        ));
    }

    #[test]
    fn validate_accepts_distinct_keys() {
        assert!(person().validate().is_ok());
        assert!(Record::default().validate().is_ok());
    }

    #[test]
    fn yaml_round_trip_preserves_order() {
        let yaml = serde_yaml::to_string(&person()).unwrap();
        assert_eq!(yaml, "name: John\nage: 30\noccupation: Developer\n");

        let parsed: Record = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, person());
    }

    #[test]
    fn value_display_has_no_quoting() {
        assert_eq!(Value::Text("John".to_string()).to_string(), "John");
        assert_eq!(Value::Number(30).to_string(), "30");
    }
}
