/*!
Column structure for the incremental multiple alignment.
Columns live in an arena and are threaded into a doubly linked list between two boundary markers that hold no votes.
Alongside the list, every fragment keeps the ids of the columns it voted in, in list order, so "the k-th column of fragment f" is a constant time lookup.
*/

use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};
use std::fmt;

use crate::nucleotide_sequence::decode_symbol;

/// Arena index of a column
pub type ColumnId = usize;

/// Boundary marker before the first column
pub const HEAD: ColumnId = 0;
/// Boundary marker after the last column
pub const TAIL: ColumnId = 1;

/// Vote counts for one aligned position
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AlignmentColumn {
    /// Votes per symbol code (A, C, G, T)
    counts: [usize; 4],
    /// Fragments that have voted here, each at most once
    voters: HashSet<usize>
}

impl AlignmentColumn {
    /// Adds a vote for `code` on behalf of `fragment`.
    /// Returns false and leaves the counts untouched if that fragment already voted here.
    pub fn add_vote(&mut self, code: u8, fragment: usize) -> bool {
        if !self.voters.insert(fragment) {
            return false;
        }
        self.counts[code as usize] += 1;
        true
    }

    pub fn counts(&self) -> &[usize; 4] {
        &self.counts
    }

    pub fn has_voter(&self, fragment: usize) -> bool {
        self.voters.contains(&fragment)
    }

    pub fn voters(&self) -> &HashSet<usize> {
        &self.voters
    }

    /// Total votes in this column
    pub fn depth(&self) -> usize {
        self.counts.iter().sum()
    }

    /// The majority code; ties go to the lower code, so A > C > G > T
    pub fn majority_code(&self) -> u8 {
        let mut winner = 0;
        for code in 1..4 {
            if self.counts[code] > self.counts[winner] {
                winner = code;
            }
        }
        winner as u8
    }
}

/// One slot in the arena
#[derive(Clone, Debug)]
struct ColumnNode {
    column: AlignmentColumn,
    prev: ColumnId,
    next: ColumnId
}

/// The ordered list of alignment columns built during one assembly run.
/// Columns are stored in reverse read order: the first column after `HEAD` is the right-most position of the contig.
#[derive(Clone, Debug)]
pub struct AlignmentList {
    /// Arena, slots `HEAD` and `TAIL` are the boundary markers
    nodes: Vec<ColumnNode>,
    /// For each fragment, the columns it voted in, in list order
    fragment_columns: HashMap<usize, Vec<ColumnId>>
}

impl Default for AlignmentList {
    fn default() -> Self {
        Self::new()
    }
}

impl AlignmentList {
    /// Creates an empty list with just the two boundary markers
    pub fn new() -> AlignmentList {
        let head = ColumnNode {
            column: Default::default(),
            prev: HEAD,
            next: TAIL
        };
        let tail = ColumnNode {
            column: Default::default(),
            prev: HEAD,
            next: TAIL
        };
        AlignmentList {
            nodes: vec![head, tail],
            fragment_columns: Default::default()
        }
    }

    /// Returns true for the two markers that bound the list
    pub fn is_boundary(&self, id: ColumnId) -> bool {
        id == HEAD || id == TAIL
    }

    /// Creates a new column holding a single vote and splices it directly after `cursor`.
    /// The new column is appended to `fragment`'s ordered column list.
    /// # Arguments
    /// * `cursor` - the column (or `HEAD`) to insert after, cannot be `TAIL`
    /// * `code` - the symbol code being voted
    /// * `fragment` - the fragment that owns the new column
    pub fn insert_after(&mut self, cursor: ColumnId, code: u8, fragment: usize) -> ColumnId {
        assert!(cursor != TAIL, "cannot insert after the tail marker");
        let mut column = AlignmentColumn::default();
        column.add_vote(code, fragment);

        let id = self.nodes.len();
        let next = self.nodes[cursor].next;
        self.nodes.push(ColumnNode {
            column,
            prev: cursor,
            next
        });
        self.nodes[cursor].next = id;
        self.nodes[next].prev = id;

        self.fragment_columns.entry(fragment).or_default().push(id);
        id
    }

    /// Votes `code` for `fragment` in an existing column.
    /// Returns false if that fragment had already voted there, in which case nothing changes.
    pub fn add_vote(&mut self, id: ColumnId, code: u8, fragment: usize) -> bool {
        assert!(!self.is_boundary(id), "boundary markers do not hold votes");
        let added = self.nodes[id].column.add_vote(code, fragment);
        if added {
            self.fragment_columns.entry(fragment).or_default().push(id);
        }
        added
    }

    /// Returns the `rank`-th column (in list order) that `fragment` voted in
    pub fn fragment_column(&self, fragment: usize, rank: usize) -> Option<ColumnId> {
        self.fragment_columns.get(&fragment)
            .and_then(|columns| columns.get(rank))
            .copied()
    }

    /// Returns every column `fragment` voted in, in list order
    pub fn fragment_columns(&self, fragment: usize) -> &[ColumnId] {
        self.fragment_columns.get(&fragment)
            .map(|columns| columns.as_slice())
            .unwrap_or(&[])
    }

    pub fn next(&self, id: ColumnId) -> ColumnId {
        self.nodes[id].next
    }

    pub fn prev(&self, id: ColumnId) -> ColumnId {
        self.nodes[id].prev
    }

    pub fn column(&self, id: ColumnId) -> &AlignmentColumn {
        &self.nodes[id].column
    }

    /// Number of real columns, excluding the markers
    pub fn len(&self) -> usize {
        self.nodes.len() - 2
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over columns in list order (`HEAD` to `TAIL`), which is reverse read order
    pub fn iter(&self) -> impl Iterator<Item = &AlignmentColumn> + '_ {
        let mut current = self.next(HEAD);
        std::iter::from_fn(move || {
            if current == TAIL {
                return None;
            }
            let column = &self.nodes[current].column;
            current = self.nodes[current].next;
            Some(column)
        })
    }

    /// Iterates over columns in read order (`TAIL` back to `HEAD`)
    pub fn iter_read_order(&self) -> impl Iterator<Item = &AlignmentColumn> + '_ {
        let mut current = self.prev(TAIL);
        std::iter::from_fn(move || {
            if current == HEAD {
                return None;
            }
            let column = &self.nodes[current].column;
            current = self.nodes[current].prev;
            Some(column)
        })
    }

    /// Majority vote over every column.
    /// The list is walked in its internal order and the result reversed, giving the contig in read order.
    pub fn consensus(&self) -> String {
        let reversed: String = self.iter()
            .map(|column| decode_symbol(column.majority_code()))
            .collect();
        reversed.chars().rev().collect()
    }

    /// Column depths in read order
    pub fn depths(&self) -> Vec<usize> {
        self.iter_read_order().map(|column| column.depth()).collect()
    }
}

impl fmt::Display for AlignmentList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[HEAD]")?;
        for column in self.iter() {
            let counts = column.counts();
            let mut voters: Vec<usize> = column.voters().iter().copied().collect();
            voters.sort_unstable();
            writeln!(f, "[(A:{})(C:{})(G:{})(T:{})-voters:{:?}]", counts[0], counts[1], counts[2], counts[3], voters)?;
        }
        write!(f, "[TAIL]")
    }
}
