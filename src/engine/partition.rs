//! Vertex partitions for Kruskal's cycle check.

use crate::types::VertexInfo;

/// A partition of vertex indices into disjoint groups.
pub trait Partition {
    /// Group identifier of vertex `v`.
    fn find(&mut self, v: usize) -> usize;

    /// Merge the groups of `a` and `b`. Returns false if they were already one group.
    fn union(&mut self, a: usize, b: usize) -> bool;

    /// Number of vertices covered.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Group ids stored directly on the vertex metadata.
///
/// A merge rewrites every member of the smaller group, so `find` is O(1)
/// and `union` is O(V). An unvisited vertex is always alone in its group,
/// which makes "either endpoint unvisited" a special case of "different groups".
pub struct GroupTable {
    vertices: Vec<VertexInfo>,
}

impl GroupTable {
    /// Wrap metadata produced by `get_vexs`.
    pub fn new(vertices: Vec<VertexInfo>) -> Self {
        Self { vertices }
    }

    /// The current metadata, including `visited` flags and group ids.
    pub fn vertices(&self) -> &[VertexInfo] {
        &self.vertices
    }

    /// Give the metadata back.
    pub fn into_vertices(self) -> Vec<VertexInfo> {
        self.vertices
    }

    fn group_size(&self, group: usize) -> usize {
        self.vertices.iter().filter(|v| v.group == group).count()
    }
}

impl Partition for GroupTable {
    fn find(&mut self, v: usize) -> usize {
        self.vertices[v].group
    }

    fn union(&mut self, a: usize, b: usize) -> bool {
        let (group_a, group_b) = (self.vertices[a].group, self.vertices[b].group);
        if group_a == group_b {
            return false;
        }
        self.vertices[a].visited = true;
        self.vertices[b].visited = true;

        // Ties keep `a`'s group.
        let (keep, absorb) = if self.group_size(group_b) > self.group_size(group_a) {
            (group_b, group_a)
        } else {
            (group_a, group_b)
        };
        for vertex in self.vertices.iter_mut().filter(|v| v.group == absorb) {
            vertex.group = keep;
        }
        true
    }

    fn len(&self) -> usize {
        self.vertices.len()
    }
}

/// Disjoint-set forest with path compression and union by rank.
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    /// `size` singleton sets.
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }
}

impl Partition for DisjointSet {
    fn find(&mut self, v: usize) -> usize {
        let mut root = v;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut current = v;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    fn union(&mut self, a: usize, b: usize) -> bool {
        let (root_a, root_b) = (self.find(a), self.find(b));
        if root_a == root_b {
            return false;
        }
        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Less => self.parent[root_a] = root_b,
            std::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            std::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }
        true
    }

    fn len(&self) -> usize {
        self.parent.len()
    }
}
