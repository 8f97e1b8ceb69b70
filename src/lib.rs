/*!
# overlap_con
This library reconstructs a single contig from overlapping short reads with the classic overlap-layout-consensus approach.

Pipeline:
* Overlap: every pair of fragments is scored with a semi-global DP in both directions, giving a directed overlap graph
* Layout: a greedy, Kruskal-style pass with union-find picks a near-maximum-weight Hamiltonian path through that graph
* Consensus: fragments are folded into a shared column list along the path and each column is resolved by majority vote

Performance notes:
* The overlap stage runs `O(n^2)` pairwise alignments, each `O(|a| * |b|)`, so this is meant for small in-memory collections
* There is no indexing or seeding; large genomes are out of scope

# Example usage
```rust
use overlap_con::assembler::ContigAssembler;
use overlap_con::nucleotide_sequence::reverse_complement_str;
use overlap_con::sequence_collection::SequenceCollection;

let fragments = [
    "gctaaagacaatta",
    "tacataacatacac",
    "gacaattacataac"
];
let collection = SequenceCollection::from_strings(&fragments).unwrap();

// run the whole pipeline
let assembler: ContigAssembler = Default::default();
let contig = assembler.assemble(&collection).unwrap();
assert_eq!(contig.path(), &[0, 2, 1]);
assert_eq!(contig.sequence(), "gctaaagacaattacataacatacac");
assert_eq!(reverse_complement_str(contig.sequence()).unwrap(), "gtgtatgttatgtaattgtctttagc");
```
*/

/// Column arena and ordered list used by the consensus step
pub mod alignment_list;
/// End-to-end overlap-layout-consensus pipeline
pub mod assembler;
/// Semi-global scoring and pipeline configuration
pub mod assembly_config;
/// Merges fragments along a layout path and extracts the majority-vote contig
pub mod consensus;
/// Union-find with per-node degree caps for path building
pub mod disjoint_set;
/// Error types for the assembly core
pub mod errors;
/// Utility for generating examples
pub mod example_gen;
/// FASTA input and output
pub mod fasta;
/// Greedy Hamiltonian path over the overlap graph
pub mod hamiltonian_path;
/// 2-bit packed nucleotide sequences
pub mod nucleotide_sequence;
/// Directed overlap graph between all fragments
pub mod overlap_graph;
/// Pairwise semi-global alignment
pub mod pairwise_alignment;
/// Ordered, index-addressable fragment collection
pub mod sequence_collection;
