/*!
The directed overlap graph between every pair of fragments.
Edge `(i, j)` scores how well the suffix of fragment `i` lines up with the prefix of fragment `j`.
The graph is asymmetric in general, so `weight(i, j)` and `weight(j, i)` are stored independently.
*/

use itertools::Itertools;
use log::{debug, trace};

use crate::errors::{AssemblyError, Result};
use crate::pairwise_alignment::PairwiseAligner;
use crate::sequence_collection::SequenceCollection;

/// Dense `n x n` matrix of directed overlap weights; the diagonal is always 0 and never consulted
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OverlapGraph {
    /// Number of nodes (fragments)
    num_nodes: usize,
    /// Row-major weights, `weights[i * num_nodes + j]` is the edge from `i` to `j`
    weights: Vec<i32>
}

impl OverlapGraph {
    /// Builds the graph by aligning every unordered pair once and writing both directed entries from that single call.
    /// # Arguments
    /// * `collection` - the fragments, node `i` is fragment `i`
    /// * `aligner` - provides the directional overlap scores
    pub fn build(collection: &SequenceCollection, aligner: &PairwiseAligner) -> OverlapGraph {
        let num_nodes = collection.len();
        let mut weights = vec![0; num_nodes * num_nodes];

        for ((i, f1), (j, f2)) in collection.iter().enumerate().tuple_combinations() {
            let (score_ij, score_ji) = aligner.overlap_scores(f1, f2);
            trace!("overlap {i} -> {j} = {score_ij}, {j} -> {i} = {score_ji}");
            weights[i * num_nodes + j] = score_ij;
            weights[j * num_nodes + i] = score_ji;
        }

        debug!("Built overlap graph with {num_nodes} nodes");
        OverlapGraph {
            num_nodes,
            weights
        }
    }

    /// Wraps an existing square matrix of weights, mostly useful for testing the path solver directly.
    /// Diagonal entries are reset to 0.
    /// # Errors
    /// * `MalformedGraph` if any row does not have exactly `rows.len()` entries
    pub fn from_matrix(rows: &[Vec<i32>]) -> Result<OverlapGraph> {
        let num_nodes = rows.len();
        let mut weights = Vec::with_capacity(num_nodes * num_nodes);
        for row in rows.iter() {
            if row.len() != num_nodes {
                return Err(AssemblyError::MalformedGraph { expected: num_nodes, found: row.len() });
            }
            weights.extend_from_slice(row);
        }
        for i in 0..num_nodes {
            weights[i * num_nodes + i] = 0;
        }
        Ok(OverlapGraph {
            num_nodes,
            weights
        })
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Returns the weight of the directed edge `from -> to`.
    /// # Errors
    /// * `IndexOutOfRange` if either node does not exist
    pub fn weight(&self, from: usize, to: usize) -> Result<i32> {
        for node in [from, to] {
            if node >= self.num_nodes {
                return Err(AssemblyError::IndexOutOfRange { index: node, length: self.num_nodes });
            }
        }
        Ok(self.weights[from * self.num_nodes + to])
    }

    /// Iterates over every directed edge `(from, to, weight)` with `from != to`, in row-major order
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, i32)> + '_ {
        (0..self.num_nodes)
            .cartesian_product(0..self.num_nodes)
            .filter(|(from, to)| from != to)
            .map(|(from, to)| (from, to, self.weights[from * self.num_nodes + to]))
    }

    /// Sums the weights along a path of nodes
    /// # Errors
    /// * `IndexOutOfRange` if the path references a missing node
    pub fn path_weight(&self, path: &[usize]) -> Result<i64> {
        path.iter()
            .tuple_windows()
            .map(|(&from, &to)| self.weight(from, to).map(i64::from))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_asymmetric() {
        let collection = SequenceCollection::from_strings(&["ttttacgg", "acggcccc", "gggg"]).unwrap();
        let graph = OverlapGraph::build(&collection, &PairwiseAligner::default());
        assert_eq!(graph.num_nodes(), 3);
        assert_eq!(graph.weight(0, 1).unwrap(), 4);
        assert_eq!(graph.weight(1, 0).unwrap(), 0);
        assert_eq!(graph.weight(1, 1).unwrap(), 0);

        // every entry should agree with a direct pairwise call
        let aligner = PairwiseAligner::default();
        for (i, j) in [(0, 2), (2, 0), (1, 2), (2, 1)] {
            let direct = aligner.overlap_scores(collection.get(i).unwrap(), collection.get(j).unwrap()).0;
            assert_eq!(graph.weight(i, j).unwrap(), direct);
        }
    }

    #[test]
    fn test_edges_and_bounds() {
        let graph = OverlapGraph::from_matrix(&[
            vec![9, 1, 2],
            vec![3, 9, 4],
            vec![5, 6, 9]
        ]).unwrap();
        let edges: Vec<(usize, usize, i32)> = graph.edges().collect();
        assert_eq!(edges, vec![(0, 1, 1), (0, 2, 2), (1, 0, 3), (1, 2, 4), (2, 0, 5), (2, 1, 6)]);
        assert_eq!(graph.weight(0, 0).unwrap(), 0);
        assert!(graph.weight(3, 0).is_err());
        assert_eq!(graph.path_weight(&[2, 1, 0]).unwrap(), 9);
    }

    #[test]
    fn test_malformed() {
        let err = OverlapGraph::from_matrix(&[vec![0, 1], vec![0]]).unwrap_err();
        assert_eq!(err, AssemblyError::MalformedGraph { expected: 2, found: 1 });
    }
}
