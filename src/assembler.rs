/*!
End-to-end overlap-layout-consensus.
The overlap graph is built from every pair of fragments, a greedy Hamiltonian path gives the layout, and the consensus assembler folds the fragments along that path.

# Example usage
```rust
use overlap_con::assembler::ContigAssembler;
use overlap_con::sequence_collection::SequenceCollection;

let collection = SequenceCollection::from_strings(&["acgtacgt", "gtacgtac"]).unwrap();
let assembler: ContigAssembler = Default::default();
let contig = assembler.assemble(&collection).unwrap();
assert_eq!(contig.path(), &[0, 1]);
assert_eq!(contig.sequence(), "acgtacgtac");
```
*/

use log::debug;

use crate::assembly_config::AssemblyConfig;
use crate::consensus::{ConsensusAssembler, Contig};
use crate::errors::{AssemblyError, Result};
use crate::hamiltonian_path::greedy_hamiltonian_path;
use crate::overlap_graph::OverlapGraph;
use crate::pairwise_alignment::PairwiseAligner;
use crate::sequence_collection::SequenceCollection;

/// Runs the full pipeline with one configuration
#[derive(Clone, Debug, Default)]
pub struct ContigAssembler {
    /// The config for this assembler
    config: AssemblyConfig
}

impl ContigAssembler {
    /// Creates a new assembler with the given configuration
    pub fn with_config(config: AssemblyConfig) -> ContigAssembler {
        ContigAssembler { config }
    }

    /// Builds the directed overlap graph for a collection
    pub fn overlap_graph(&self, collection: &SequenceCollection) -> OverlapGraph {
        OverlapGraph::build(collection, &self.aligner())
    }

    /// Assembles every fragment in the collection into a single contig.
    /// # Arguments
    /// * `collection` - the fragments to assemble
    /// # Errors
    /// * `DegenerateInput` if there are fewer than 2 fragments
    pub fn assemble(&self, collection: &SequenceCollection) -> Result<Contig> {
        if collection.len() < 2 {
            return Err(AssemblyError::DegenerateInput { count: collection.len() });
        }

        debug!("Building overlap graph for {} fragments", collection.len());
        let graph = self.overlap_graph(collection);

        debug!("Finding layout path");
        let path = greedy_hamiltonian_path(&graph)?;
        let total_overlap = graph.path_weight(&path)?;
        debug!("Layout path: {path:?}, total overlap = {total_overlap}");

        debug!("Aligning fragments and building consensus");
        let consensus_assembler = ConsensusAssembler::new(collection, self.aligner());
        let contig = consensus_assembler.consensus(&path)?;
        debug!("Contig length: {}", contig.len());
        Ok(contig)
    }

    pub fn config(&self) -> &AssemblyConfig {
        &self.config
    }

    fn aligner(&self) -> PairwiseAligner {
        PairwiseAligner::new(self.config.scoring())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    use crate::assembly_config::AssemblyConfigBuilder;
    use crate::example_gen::generate_reads;

    #[derive(Debug, serde::Deserialize)]
    struct ScenarioRecord {
        kind: String,
        sequence: String
    }

    /// Loads a scenario from a csv file.
    /// Expected columns are "kind" ("read" or "contig") and "sequence" (String).
    /// Returns a tuple of (reads, expected contig).
    /// # Arguments
    /// * `filename` - the file path to load
    fn load_scenario_csv(filename: &std::path::Path) -> (Vec<String>, String) {
        let mut reads = vec![];
        let mut contig: Option<String> = None;

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(filename)
            .unwrap();
        for row in csv_reader.deserialize() {
            let record: ScenarioRecord = row.unwrap();
            match record.kind.as_str() {
                "read" => reads.push(record.sequence),
                "contig" => {
                    assert!(contig.is_none());
                    contig = Some(record.sequence);
                },
                other => panic!("unexpected kind {other}")
            }
        }
        (reads, contig.unwrap())
    }

    /// Entry point for file-based tests.
    /// # Arguments
    /// * `filename` - the test file to load, will be a csv
    fn run_test_file(filename: &str) {
        let (reads, expected_contig) = load_scenario_csv(&PathBuf::from(filename));
        let collection = SequenceCollection::from_strings(&reads).unwrap();
        let contig = ContigAssembler::default().assemble(&collection).unwrap();

        assert_eq!(contig.sequence(), expected_contig);
        assert!(contig.len() >= collection.max_fragment_len());
        let mut sorted_path = contig.path().to_vec();
        sorted_path.sort_unstable();
        assert_eq!(sorted_path, (0..reads.len()).collect::<Vec<usize>>());
    }

    #[test]
    fn test_csv_rotation_001() {
        run_test_file("./tests/rotation_001.csv");
    }

    #[test]
    fn test_csv_tiled_001() {
        run_test_file("./tests/tiled_001.csv");
    }

    #[test]
    fn test_csv_tiled_err_001() {
        run_test_file("./tests/tiled_err_001.csv");
    }

    #[test]
    fn test_identical_reads() {
        let collection = SequenceCollection::from_strings(&["aaaa", "aaaa", "aaaa"]).unwrap();
        let contig = ContigAssembler::default().assemble(&collection).unwrap();
        assert_eq!(contig.sequence(), "aaaa");
        assert_eq!(contig.depths(), &[3, 3, 3, 3]);
    }

    #[test]
    fn test_degenerate() {
        let assembler = ContigAssembler::default();
        let single = SequenceCollection::from_strings(&["acgt"]).unwrap();
        assert_eq!(assembler.assemble(&single), Err(AssemblyError::DegenerateInput { count: 1 }));
        let empty = SequenceCollection::default();
        assert_eq!(assembler.assemble(&empty), Err(AssemblyError::DegenerateInput { count: 0 }));
    }

    #[test_log::test]
    fn test_generated_error_free() {
        let (genome, reads) = generate_reads(120, 30, 10, 0.0, 0);
        let collection = SequenceCollection::from_strings(&reads).unwrap();
        let contig = ContigAssembler::default().assemble(&collection).unwrap();

        // error-free tiling with a 20 symbol overlap recovers the genome in read order
        assert_eq!(contig.path(), (0..reads.len()).collect::<Vec<usize>>());
        assert_eq!(contig.sequence(), genome);
    }

    #[test]
    fn test_custom_config() {
        let config = AssemblyConfigBuilder::default()
            .gap_score(-3)
            .build().unwrap();
        let assembler = ContigAssembler::with_config(config);
        assert_eq!(assembler.config().gap_score, -3);

        let collection = SequenceCollection::from_strings(&["ttacgat", "acgatcc"]).unwrap();
        let graph = assembler.overlap_graph(&collection);
        assert_eq!(graph.weight(0, 1).unwrap(), 5);
        let contig = assembler.assemble(&collection).unwrap();
        assert_eq!(contig.sequence(), "ttacgatcc");
    }
}
