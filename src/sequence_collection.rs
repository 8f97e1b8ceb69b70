use std::fmt;

use crate::errors::{AssemblyError, Result};
use crate::nucleotide_sequence::NucleotideSequence;

/// An ordered, immutable set of fragments addressed by index
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SequenceCollection {
    fragments: Vec<NucleotideSequence>
}

impl SequenceCollection {
    /// Encodes every raw string into a fragment, keeping the input order.
    /// # Arguments
    /// * `raw_fragments` - the strings to encode, case-insensitive over {a, c, g, t}
    /// # Errors
    /// * `InvalidSymbol` from the first string that fails to encode
    pub fn from_strings<S: AsRef<str>>(raw_fragments: &[S]) -> Result<SequenceCollection> {
        let fragments = raw_fragments.iter()
            .map(|s| NucleotideSequence::new(s.as_ref()))
            .collect::<Result<Vec<NucleotideSequence>>>()?;
        Ok(SequenceCollection { fragments })
    }

    /// Wraps already encoded fragments
    pub fn new(fragments: Vec<NucleotideSequence>) -> SequenceCollection {
        SequenceCollection { fragments }
    }

    /// Returns the fragment at `index`.
    /// # Errors
    /// * `IndexOutOfRange` if `index >= len()`
    pub fn get(&self, index: usize) -> Result<&NucleotideSequence> {
        self.fragments.get(index)
            .ok_or(AssemblyError::IndexOutOfRange { index, length: self.fragments.len() })
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NucleotideSequence> {
        self.fragments.iter()
    }

    /// Length of the longest fragment, 0 when empty
    pub fn max_fragment_len(&self) -> usize {
        self.fragments.iter().map(|f| f.len()).max().unwrap_or(0)
    }
}

impl fmt::Display for SequenceCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, fragment) in self.fragments.iter().enumerate() {
            writeln!(f, ">fragment {i}")?;
            writeln!(f, "{fragment}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_access() {
        let collection = SequenceCollection::from_strings(&["acgt", "GGA", "t"]).unwrap();
        assert_eq!(collection.len(), 3);
        assert_eq!(collection.get(1).unwrap().to_string(), "gga");
        assert_eq!(collection.max_fragment_len(), 4);

        // no silent fallback to fragment 0
        assert_eq!(collection.get(3), Err(AssemblyError::IndexOutOfRange { index: 3, length: 3 }));
    }

    #[test]
    fn test_collection_invalid() {
        let err = SequenceCollection::from_strings(&["acgt", "acnt"]).unwrap_err();
        assert_eq!(err, AssemblyError::InvalidSymbol { symbol: 'n', position: 2 });
    }

    #[test]
    fn test_collection_display() {
        let collection = SequenceCollection::from_strings(&["ac", "gt"]).unwrap();
        assert_eq!(collection.to_string(), ">fragment 0\nac\n>fragment 1\ngt\n");
    }
}
