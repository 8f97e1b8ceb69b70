/*!
This module provides access to the ConsensusAssembler, which folds fragments into a shared column structure following a layout path and reads the contig off by majority vote.

# Example usage
```rust
use overlap_con::consensus::ConsensusAssembler;
use overlap_con::pairwise_alignment::PairwiseAligner;
use overlap_con::sequence_collection::SequenceCollection;

let collection = SequenceCollection::from_strings(&["acgtacgt", "gtacgtac"]).unwrap();
let assembler = ConsensusAssembler::new(&collection, PairwiseAligner::default());

// fragment 1 continues where fragment 0 leaves off
let alignment = assembler.align_path(&[0, 1]).unwrap();
assert_eq!(alignment.consensus(), "acgtacgtac");
```
*/

use log::{debug, trace};
use rustc_hash::FxHashSet as HashSet;

use crate::alignment_list::{AlignmentList, HEAD};
use crate::errors::{AssemblyError, Result};
use crate::pairwise_alignment::PairwiseAligner;
use crate::sequence_collection::SequenceCollection;

/// Contains a final assembly result
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Contig {
    /// The consensus sequence in read order
    sequence: String,
    /// The layout order the fragments were merged in
    path: Vec<usize>,
    /// Number of votes behind each position of `sequence`
    depths: Vec<usize>
}

impl Contig {
    /// Constructor
    pub fn new(sequence: String, path: Vec<usize>, depths: Vec<usize>) -> Contig {
        assert_eq!(sequence.len(), depths.len());
        Contig {
            sequence,
            path,
            depths
        }
    }

    // Getters
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    pub fn path(&self) -> &[usize] {
        &self.path
    }

    pub fn depths(&self) -> &[usize] {
        &self.depths
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// Which neighbouring DP cell the traceback moves to
#[derive(Clone, Copy, Debug, PartialEq)]
enum TraceMove {
    /// consume one symbol from both fragments, voting into the shared column
    Diagonal,
    /// consume a symbol of the new fragment only, creating a new column
    Left,
    /// consume a symbol of the previous fragment only, a gap in the new fragment
    Up
}

/// Core utility that merges fragments along a layout path.
/// Every fragment is aligned against the fragment immediately before it in the path, not against the cumulative profile.
#[derive(Clone, Debug)]
pub struct ConsensusAssembler<'a> {
    /// The fragments being assembled
    collection: &'a SequenceCollection,
    /// Provides the full DP matrix for each merge
    aligner: PairwiseAligner
}

impl<'a> ConsensusAssembler<'a> {
    /// Creates a new assembler over a collection.
    /// # Arguments
    /// * `collection` - the fragments, addressed by the ids in the path
    /// * `aligner` - the pairwise aligner used for every merge step
    pub fn new(collection: &'a SequenceCollection, aligner: PairwiseAligner) -> ConsensusAssembler<'a> {
        ConsensusAssembler {
            collection,
            aligner
        }
    }

    /// Builds the column list for a layout path.
    /// Each call builds its own list, so one assembler can be reused across runs.
    /// # Arguments
    /// * `path` - fragment ids in layout order
    /// # Errors
    /// * `DegenerateInput` if the path has fewer than 2 fragments
    /// * `DuplicateFragment` if a fragment is visited twice
    /// * `IndexOutOfRange` if the path references a fragment that is not in the collection
    pub fn align_path(&self, path: &[usize]) -> Result<AlignmentList> {
        if path.len() < 2 {
            return Err(AssemblyError::DegenerateInput { count: path.len() });
        }
        let mut visited: HashSet<usize> = Default::default();
        for &fragment in path.iter() {
            self.collection.get(fragment)?;
            if !visited.insert(fragment) {
                return Err(AssemblyError::DuplicateFragment { fragment });
            }
        }

        let mut alignment = AlignmentList::new();
        self.seed(&mut alignment, path[0])?;
        for (&f_id, &g_id) in path.iter().zip(path.iter().skip(1)) {
            self.merge(&mut alignment, f_id, g_id)?;
        }

        debug!("Aligned {} fragments into {} columns", path.len(), alignment.len());
        Ok(alignment)
    }

    /// Runs `align_path` and reads off the contig
    /// # Errors
    /// * see `align_path`
    pub fn consensus(&self, path: &[usize]) -> Result<Contig> {
        let alignment = self.align_path(path)?;
        Ok(Contig::new(alignment.consensus(), path.to_vec(), alignment.depths()))
    }

    /// Threads the first fragment into the empty list, last symbol first
    fn seed(&self, alignment: &mut AlignmentList, f_id: usize) -> Result<()> {
        let f = self.collection.get(f_id)?;
        let mut cursor = HEAD;
        for code in f.codes().rev() {
            cursor = alignment.insert_after(cursor, code, f_id);
        }
        Ok(())
    }

    /// Folds fragment `g_id` into the list by aligning it against `f_id`, which must already be merged.
    /// # Arguments
    /// * `alignment` - the list being built
    /// * `f_id` - the previously merged fragment
    /// * `g_id` - the fragment to merge
    /// # Errors
    /// * `IndexOutOfRange` if either fragment is missing, or if `f_id` was never merged
    fn merge(&self, alignment: &mut AlignmentList, f_id: usize, g_id: usize) -> Result<()> {
        let f = self.collection.get(f_id)?;
        let g = self.collection.get(g_id)?;
        let g_codes = g.to_codes();
        let f_len = f.len();
        let g_len = g_codes.len();
        let matrix = self.aligner.full_matrix(f, g);

        // the anchor is where the best alignment consuming all of `f` ends in `g`; ties go to the largest j
        let last_row = matrix.last_row();
        let anchor = (0..last_row.len())
            .fold(0, |best, j| if last_row[j] >= last_row[best] { j } else { best });
        trace!("Merging {g_id} onto {f_id}: anchor = {anchor}, score = {}", last_row[anchor]);

        // the part of `g` past the end of `f` becomes new columns at the front of the list
        let mut cursor = HEAD;
        for j in (anchor..g_len).rev() {
            cursor = alignment.insert_after(cursor, g_codes[j], g_id);
        }

        let mut i = f_len;
        let mut j = anchor;
        while i > 0 && j > 0 {
            // row `i` of `f` lives in the (f_len - i)-th column that `f` owns
            let f_column = alignment.fragment_column(f_id, f_len - i)
                .ok_or_else(|| AssemblyError::IndexOutOfRange { index: f_len - i, length: alignment.fragment_columns(f_id).len() })?;

            match Self::trace_move(matrix.get(i - 1, j - 1), matrix.get(i, j - 1), matrix.get(i - 1, j)) {
                TraceMove::Diagonal => {
                    cursor = f_column;
                    alignment.add_vote(cursor, g_codes[j - 1], g_id);
                    i -= 1;
                    j -= 1;
                },
                TraceMove::Left => {
                    // lands between the cursor and the next column of `f`
                    cursor = alignment.insert_after(cursor, g_codes[j - 1], g_id);
                    j -= 1;
                },
                TraceMove::Up => {
                    cursor = f_column;
                    i -= 1;
                }
            }
        }

        // `f` is used up but `g` still has a prefix left, it always gets fresh columns
        while j > 0 {
            cursor = alignment.insert_after(cursor, g_codes[j - 1], g_id);
            j -= 1;
        }

        assert_eq!(alignment.fragment_columns(g_id).len(), g_len);
        Ok(())
    }

    /// Picks the best neighbouring cell, ties resolved diagonal, then left, then up
    fn trace_move(diagonal: i32, left: i32, up: i32) -> TraceMove {
        let best = diagonal.max(left).max(up);
        if best == diagonal {
            TraceMove::Diagonal
        } else if best == left {
            TraceMove::Left
        } else {
            TraceMove::Up
        }
    }
}
