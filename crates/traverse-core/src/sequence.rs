use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered, indexable list of integers. Immutable for the run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence(Vec<i64>);

impl Sequence {
    pub fn new(values: Vec<i64>) -> Self {
        Sequence(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Visit the elements in order.
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.0.iter().copied()
    }

    /// Visit the positional indices `0..len`.
    pub fn indices(&self) -> impl Iterator<Item = usize> {
        0..self.0.len()
    }

    /// Invoke `visit` once per element with its position and value.
    pub fn for_each_indexed<F>(&self, mut visit: F)
    where
        F: FnMut(usize, i64),
    {
        for (index, value) in self.0.iter().copied().enumerate() {
            visit(index, value);
        }
    }
}

impl From<Vec<i64>> for Sequence {
    fn from(values: Vec<i64>) -> Self {
        Sequence(values)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iter_preserves_order() {
        let seq = Sequence::new(vec![1, 2, 3]);
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(seq.len(), 3);
    }

    #[test]
    fn indices_cover_positions() {
        let seq = Sequence::new(vec![10, 20, 30]);
        assert_eq!(seq.indices().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn for_each_indexed_visits_every_element_once() {
        let seq = Sequence::new(vec![1, 2, 3]);
        let mut visits = Vec::new();
        seq.for_each_indexed(|index, value| visits.push((index, value)));
        assert_eq!(visits, vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn empty_sequence_visits_nothing() {
        let seq = Sequence::default();
        assert!(seq.is_empty());
        assert_eq!(seq.indices().count(), 0);
        let mut visits = 0;
        seq.for_each_indexed(|_, _| visits += 1);
        assert_eq!(visits, 0);
    }

    #[test]
    fn display_is_bracketed() {
        assert_eq!(Sequence::new(vec![1, 2, 3]).to_string(), "[1, 2, 3]");
        assert_eq!(Sequence::default().to_string(), "[]");
    }

    #[test]
    fn serde_is_transparent() {
        let seq: Sequence = serde_yaml::from_str("[1, 2, 3]").unwrap();
        assert_eq!(seq, Sequence::new(vec![1, 2, 3]));
        assert_eq!(serde_json::to_string(&seq).unwrap(), "[1,2,3]");
    }
}
