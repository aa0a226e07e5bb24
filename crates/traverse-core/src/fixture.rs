use crate::error::Result;
use crate::record::{Record, Value};
use crate::sequence::Sequence;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The data the blocks run over: a sequence of integers and an ordered
/// record. Defaults to the builtin demo values; omitted keys in a fixture
/// file fall back field-by-field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    #[serde(default = "default_sequence")]
    pub sequence: Sequence,
    #[serde(default = "default_record")]
    pub record: Record,
}

fn default_sequence() -> Sequence {
    Sequence::new(vec![1, 2, 3])
}

fn default_record() -> Record {
    Record::from_pairs([
        ("name", Value::Text("John".to_string())),
        ("age", Value::Number(30)),
        ("occupation", Value::Text("Developer".to_string())),
    ])
}

impl Default for Fixture {
    fn default() -> Self {
        Self {
            sequence: default_sequence(),
            record: default_record(),
        }
    }
}

impl Fixture {
    /// Load a fixture from a YAML file.
    pub fn load(path: &Path) -> Result<Fixture> {
        let content = std::fs::read_to_string(path)?;
        let fixture: Fixture = serde_yaml::from_str(&content)?;
        fixture.record.validate()?;
        Ok(fixture)
    }
}
