/*!
Greedy near-maximum-weight Hamiltonian path over the overlap graph.
Edges are consumed heaviest first (ties go to the earlier edge in row-major order), and an edge is kept only if its tail has no successor, its head has no predecessor, and the two ends are in different components.
On a complete graph this always ends with exactly `n - 1` edges forming one simple path.

# Example usage
```rust
use overlap_con::hamiltonian_path::greedy_hamiltonian_path;
use overlap_con::overlap_graph::OverlapGraph;

let graph = OverlapGraph::from_matrix(&[
    vec![0, 1, 8],
    vec![2, 0, 1],
    vec![1, 7, 0]
]).unwrap();
assert_eq!(greedy_hamiltonian_path(&graph).unwrap(), vec![0, 2, 1]);
```
*/

use log::{debug, trace};
use priority_queue::PriorityQueue;
use std::cmp::Reverse;

use crate::disjoint_set::DisjointPathSet;
use crate::errors::{AssemblyError, Result};
use crate::overlap_graph::OverlapGraph;

/// Heavier first, then lower enumeration index first
type EdgePriority = (i32, Reverse<usize>);

/// Finds a greedy Hamiltonian path through every node of the graph.
/// # Arguments
/// * `graph` - a complete directed overlap graph
/// # Errors
/// * `DegenerateInput` if the graph has fewer than 2 nodes
pub fn greedy_hamiltonian_path(graph: &OverlapGraph) -> Result<Vec<usize>> {
    let num_nodes = graph.num_nodes();
    if num_nodes < 2 {
        return Err(AssemblyError::DegenerateInput { count: num_nodes });
    }

    // every directed edge goes into the queue keyed by its enumeration index
    let edges: Vec<(usize, usize, i32)> = graph.edges().collect();
    let mut pqueue: PriorityQueue<usize, EdgePriority> = PriorityQueue::with_capacity(edges.len());
    for (edge_index, &(_from, _to, weight)) in edges.iter().enumerate() {
        pqueue.push(edge_index, (weight, Reverse(edge_index)));
    }

    let mut path_set = DisjointPathSet::new(num_nodes);
    let mut successors: Vec<Option<usize>> = vec![None; num_nodes];
    let mut accepted: usize = 0;
    let mut considered: usize = 0;

    while accepted < num_nodes - 1 {
        let Some((edge_index, _priority)) = pqueue.pop() else {
            break;
        };
        considered += 1;
        let (from, to, weight) = edges[edge_index];
        if path_set.can_link(from, to) {
            trace!("Accepted edge {from} -> {to} (weight {weight})");
            path_set.link(from, to);
            successors[from] = Some(to);
            accepted += 1;
        }
    }

    // a complete graph always gives a spanning path
    assert_eq!(accepted, num_nodes - 1);
    assert_eq!(path_set.num_components(), 1);
    debug!("Accepted {accepted} edges after considering {considered} of {}", edges.len());

    // the only node without a predecessor starts the path
    let starts: Vec<usize> = (0..num_nodes)
        .filter(|&node| !path_set.has_incoming(node))
        .collect();
    assert_eq!(starts.len(), 1);
    let start = starts[0];

    let mut path = Vec::with_capacity(num_nodes);
    let mut current = Some(start);
    while let Some(node) = current {
        path.push(node);
        current = successors[node];
    }
    assert_eq!(path.len(), num_nodes);
    Ok(path)
}
