/// Array-backed union-find with path compression and union-by-size.
/// It also tracks, for each node, whether a path edge already leaves or enters it.
/// Together these keep the accepted edges a set of simple, acyclic paths.
#[derive(Clone, Debug)]
pub struct DisjointPathSet {
    /// Parent pointer for each node, roots point at themselves
    parents: Vec<usize>,
    /// Component size, only meaningful at roots
    sizes: Vec<usize>,
    /// True if the node already has a successor
    has_outgoing: Vec<bool>,
    /// True if the node already has a predecessor
    has_incoming: Vec<bool>,
    /// Number of disjoint components remaining
    num_components: usize
}

impl DisjointPathSet {
    /// Creates a tracker where every node is its own component with no edges.
    /// # Arguments
    /// * `num_nodes` - the number of nodes to track
    pub fn new(num_nodes: usize) -> DisjointPathSet {
        DisjointPathSet {
            parents: (0..num_nodes).collect(),
            sizes: vec![1; num_nodes],
            has_outgoing: vec![false; num_nodes],
            has_incoming: vec![false; num_nodes],
            num_components: num_nodes
        }
    }

    /// Returns the root of the component containing `node`, compressing the path along the way
    pub fn find(&mut self, node: usize) -> usize {
        let mut root = node;
        while self.parents[root] != root {
            root = self.parents[root];
        }

        // second pass points everything we touched directly at the root
        let mut current = node;
        while self.parents[current] != root {
            let next = self.parents[current];
            self.parents[current] = root;
            current = next;
        }
        root
    }

    /// Merges the components of `n1` and `n2`, returns false if they were already joined
    pub fn union(&mut self, n1: usize, n2: usize) -> bool {
        let mut r1 = self.find(n1);
        let mut r2 = self.find(n2);
        if r1 == r2 {
            return false;
        }

        // attach the smaller tree under the larger
        if self.sizes[r1] < self.sizes[r2] {
            std::mem::swap(&mut r1, &mut r2);
        }
        self.parents[r2] = r1;
        self.sizes[r1] += self.sizes[r2];
        self.num_components -= 1;
        true
    }

    /// Returns true if the directed edge `from -> to` keeps everything a set of simple paths:
    /// `from` has no successor yet, `to` has no predecessor yet, and they are not already connected.
    pub fn can_link(&mut self, from: usize, to: usize) -> bool {
        !self.has_outgoing[from] && !self.has_incoming[to] && self.find(from) != self.find(to)
    }

    /// Records the directed edge `from -> to`; caller must have checked `can_link` first
    pub fn link(&mut self, from: usize, to: usize) {
        assert!(!self.has_outgoing[from] && !self.has_incoming[to]);
        self.has_outgoing[from] = true;
        self.has_incoming[to] = true;
        let merged = self.union(from, to);
        assert!(merged);
    }

    pub fn has_outgoing(&self, node: usize) -> bool {
        self.has_outgoing[node]
    }

    pub fn has_incoming(&self, node: usize) -> bool {
        self.has_incoming[node]
    }

    pub fn num_components(&self) -> usize {
        self.num_components
    }
}
