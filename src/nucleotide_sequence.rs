/*!
Bit-packed nucleotide storage.
Each symbol occupies exactly two bits inside a `u64` word using the fixed code map A=0, C=1, G=2, T=3.

# Example usage
```rust
use overlap_con::nucleotide_sequence::NucleotideSequence;

let sequence = NucleotideSequence::new("ACgt").unwrap();
assert_eq!(sequence.len(), 4);
assert_eq!(sequence.symbol_at(2).unwrap(), 'g');
assert_eq!(sequence.to_string(), "acgt");
assert!(NucleotideSequence::new("acgtx").is_err());
```
*/

use std::fmt;

use crate::errors::{AssemblyError, Result};

/// Number of bits used for one symbol
const BITS_PER_SYMBOL: usize = 2;
/// Number of symbols that fit in one storage word
const SYMBOLS_PER_WORD: usize = u64::BITS as usize / BITS_PER_SYMBOL;
/// Mask for exactly one symbol
const SYMBOL_MASK: u64 = 0b11;
/// Decoding table, index is the 2-bit code
pub const CODE_TO_SYMBOL: [char; 4] = ['a', 'c', 'g', 't'];

/// Converts a single character into its 2-bit code, case-insensitive.
/// Returns None for anything outside of {a, c, g, t}.
/// # Arguments
/// * `symbol` - the character to encode
pub fn encode_symbol(symbol: char) -> Option<u8> {
    match symbol.to_ascii_lowercase() {
        'a' => Some(0),
        'c' => Some(1),
        'g' => Some(2),
        't' => Some(3),
        _ => None
    }
}

/// Converts a 2-bit code back into its lowercase character.
/// # Arguments
/// * `code` - the code to decode, only the lowest two bits are used
pub fn decode_symbol(code: u8) -> char {
    CODE_TO_SYMBOL[(code & SYMBOL_MASK as u8) as usize]
}

/// An immutable, 2-bit packed nucleotide sequence
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct NucleotideSequence {
    /// Number of symbols, not the number of words
    length: usize,
    /// Packed storage, symbol `i` lives in word `i / 32` at bit offset `2 * (i % 32)`
    words: Vec<u64>
}

impl NucleotideSequence {
    /// Encodes a string over {a, c, g, t} (any case) into packed form.
    /// # Arguments
    /// * `sequence` - the symbols to encode
    /// # Errors
    /// * `InvalidSymbol` if any character is outside of the alphabet, no partial sequence is returned
    pub fn new(sequence: &str) -> Result<NucleotideSequence> {
        let mut length = 0;
        let mut words: Vec<u64> = Vec::with_capacity(sequence.len().div_ceil(SYMBOLS_PER_WORD));
        for (position, symbol) in sequence.chars().enumerate() {
            let code = encode_symbol(symbol)
                .ok_or(AssemblyError::InvalidSymbol { symbol, position })?;
            let offset = position % SYMBOLS_PER_WORD;
            if offset == 0 {
                words.push(0);
            }
            // a word was pushed above whenever offset wraps to 0
            let last = words.len() - 1;
            words[last] |= (code as u64) << (offset * BITS_PER_SYMBOL);
            length += 1;
        }

        Ok(NucleotideSequence {
            length,
            words
        })
    }

    /// Builds a sequence directly from 2-bit codes.
    /// # Arguments
    /// * `codes` - the codes in order, each must be in 0..4
    /// # Errors
    /// * `InvalidSymbol` if a code is larger than 3
    pub fn from_codes(codes: &[u8]) -> Result<NucleotideSequence> {
        if let Some(position) = codes.iter().position(|&c| c > 3) {
            return Err(AssemblyError::InvalidSymbol { symbol: char::from(codes[position]), position });
        }
        Ok(Self::pack(codes))
    }

    /// Returns the number of symbols in the sequence
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the 2-bit code at a position.
    /// # Arguments
    /// * `index` - the position to look up
    /// # Errors
    /// * `IndexOutOfRange` if `index >= len()`
    pub fn code_at(&self, index: usize) -> Result<u8> {
        if index >= self.length {
            return Err(AssemblyError::IndexOutOfRange { index, length: self.length });
        }
        Ok(self.code_unchecked(index))
    }

    /// Returns the lowercase symbol at a position.
    /// # Arguments
    /// * `index` - the position to look up
    /// # Errors
    /// * `IndexOutOfRange` if `index >= len()`
    pub fn symbol_at(&self, index: usize) -> Result<char> {
        self.code_at(index).map(decode_symbol)
    }

    /// Iterates over all codes in order
    pub fn codes(&self) -> impl DoubleEndedIterator<Item = u8> + ExactSizeIterator + '_ {
        (0..self.length).map(|i| self.code_unchecked(i))
    }

    /// Unpacks the whole sequence into one code per byte, which is what the DP loops want
    pub fn to_codes(&self) -> Vec<u8> {
        self.codes().collect()
    }

    /// Returns the reverse complement (A<->T, C<->G, order reversed).
    /// With the fixed code map this is just `3 - code`.
    pub fn reverse_complement(&self) -> NucleotideSequence {
        let codes: Vec<u8> = self.codes().rev()
            .map(|c| 3 - c)
            .collect();
        Self::pack(&codes)
    }

    /// Packs already validated codes
    fn pack(codes: &[u8]) -> NucleotideSequence {
        let mut words = vec![0u64; codes.len().div_ceil(SYMBOLS_PER_WORD)];
        for (position, &code) in codes.iter().enumerate() {
            words[position / SYMBOLS_PER_WORD] |= (code as u64) << ((position % SYMBOLS_PER_WORD) * BITS_PER_SYMBOL);
        }
        NucleotideSequence {
            length: codes.len(),
            words
        }
    }

    /// Caller guarantees `index < self.length`
    fn code_unchecked(&self, index: usize) -> u8 {
        let word = self.words[index / SYMBOLS_PER_WORD];
        ((word >> ((index % SYMBOLS_PER_WORD) * BITS_PER_SYMBOL)) & SYMBOL_MASK) as u8
    }
}

impl fmt::Display for NucleotideSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decoded: String = self.codes().map(decode_symbol).collect();
        write!(f, "{decoded}")
    }
}

/// Reverse complements a plain string over {a, c, g, t}, returning lowercase output.
/// # Arguments
/// * `sequence` - the string to transform
/// # Errors
/// * `InvalidSymbol` if the string contains anything outside of the alphabet
pub fn reverse_complement_str(sequence: &str) -> Result<String> {
    Ok(NucleotideSequence::new(sequence)?.reverse_complement().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for s in ["", "a", "acgt", "ttttgggg", "acgtacgtacgtacgtacgtacgtacgtacgtacg"] {
            let sequence = NucleotideSequence::new(s).unwrap();
            assert_eq!(sequence.len(), s.len());
            assert_eq!(sequence.to_string(), s);
        }
    }

    #[test]
    fn test_case_insensitive() {
        let sequence = NucleotideSequence::new("AcGt").unwrap();
        assert_eq!(sequence.to_string(), "acgt");
        assert_eq!(sequence.to_codes(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_invalid_symbol() {
        let err = NucleotideSequence::new("acgtx").unwrap_err();
        assert_eq!(err, AssemblyError::InvalidSymbol { symbol: 'x', position: 4 });

        // N is not part of the alphabet either
        assert!(NucleotideSequence::new("nacg").is_err());
        assert!(NucleotideSequence::from_codes(&[0, 1, 4]).is_err());
    }

    #[test]
    fn test_word_boundaries() {
        // 70 symbols spans three words, check symbols on both sides of each boundary
        let s: String = "gattaca".repeat(10);
        let sequence = NucleotideSequence::new(&s).unwrap();
        for (i, c) in s.chars().enumerate() {
            assert_eq!(sequence.symbol_at(i).unwrap(), c);
        }
        assert_eq!(sequence.code_at(31).unwrap(), encode_symbol(s.as_bytes()[31] as char).unwrap());
        assert_eq!(sequence.code_at(32).unwrap(), encode_symbol(s.as_bytes()[32] as char).unwrap());
    }

    #[test]
    fn test_index_out_of_range() {
        let sequence = NucleotideSequence::new("acgt").unwrap();
        assert_eq!(sequence.code_at(3).unwrap(), 3);
        assert_eq!(sequence.symbol_at(4), Err(AssemblyError::IndexOutOfRange { index: 4, length: 4 }));
    }

    #[test]
    fn test_reverse_complement() {
        let sequence = NucleotideSequence::new("aacgtt").unwrap();
        assert_eq!(sequence.reverse_complement().to_string(), "aacgtt");
        assert_eq!(reverse_complement_str("acccg").unwrap(), "cgggt");
        assert_eq!(reverse_complement_str("").unwrap(), "");
    }

    #[test]
    fn test_from_codes() {
        let sequence = NucleotideSequence::from_codes(&[3, 2, 1, 0]).unwrap();
        assert_eq!(sequence.to_string(), "tgca");
        assert_eq!(sequence, NucleotideSequence::new("TGCA").unwrap());
    }
}
