use crate::fixture::Fixture;
use crate::record::Record;
use crate::sequence::Sequence;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Block
// ---------------------------------------------------------------------------

/// One of the three demonstration blocks, in canonical run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Block {
    Elements,
    Entries,
    Enumerate,
}

impl Block {
    pub fn all() -> &'static [Block] {
        &[Block::Elements, Block::Entries, Block::Enumerate]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Block::Elements => "elements",
            Block::Entries => "entries",
            Block::Enumerate => "enumerate",
        }
    }

    /// The exact lines this block prints for `fixture`.
    pub fn lines(self, fixture: &Fixture) -> Vec<String> {
        match self {
            Block::Elements => element_lines(&fixture.sequence),
            Block::Entries => {
                let mut lines = entry_lines(&fixture.record);
                lines.extend(index_lines(&fixture.sequence));
                lines
            }
            Block::Enumerate => enumerated_lines(&fixture.sequence),
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Block {
    type Err = crate::error::TraverseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "elements" => Ok(Block::Elements),
            "entries" => Ok(Block::Entries),
            "enumerate" => Ok(Block::Enumerate),
            _ => Err(crate::error::TraverseError::UnknownBlock(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Traversals
// ---------------------------------------------------------------------------

/// One line per element, in sequence order.
pub fn element_lines(sequence: &Sequence) -> Vec<String> {
    sequence.iter().map(|value| value.to_string()).collect()
}

/// `Key: <k>, Value: <v>` per record field, in definition order.
pub fn entry_lines(record: &Record) -> Vec<String> {
    record
        .entries()
        .map(|(key, value)| format!("Key: {key}, Value: {value}"))
        .collect()
}

/// One line per positional index of the sequence.
pub fn index_lines(sequence: &Sequence) -> Vec<String> {
    sequence.indices().map(|index| index.to_string()).collect()
}

/// One sentence per element, produced through the per-element callback.
pub fn enumerated_lines(sequence: &Sequence) -> Vec<String> {
    let mut lines = Vec::with_capacity(sequence.len());
    sequence.for_each_indexed(|index, element| {
        lines.push(format!("Element at index {index} is {element}"));
    });
    lines
}
