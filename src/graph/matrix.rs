//! Growable square boolean adjacency matrix.
//!
//! Row = source node id, column = target node id. Capacity only ever
//! doubles; existing bits survive every resize and new cells start cleared.

pub const INITIAL_CAPACITY: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    capacity: usize,
    rows: Vec<Vec<bool>>,
}

impl Default for AdjacencyMatrix {
    fn default() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }
}

impl AdjacencyMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            rows: vec![vec![false; capacity]; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Double the capacity until it can index `count` nodes.
    pub fn ensure_capacity(&mut self, count: usize) {
        if count <= self.capacity {
            return;
        }
        let mut new_capacity = self.capacity;
        while new_capacity < count {
            new_capacity *= 2;
        }
        for row in &mut self.rows {
            row.resize(new_capacity, false);
        }
        self.rows.resize_with(new_capacity, || vec![false; new_capacity]);
        self.capacity = new_capacity;
    }

    pub fn get(&self, from: usize, to: usize) -> bool {
        self.rows
            .get(from)
            .and_then(|row| row.get(to))
            .copied()
            .unwrap_or(false)
    }

    /// Set a bit. Both indices must be below `capacity()`.
    pub fn set(&mut self, from: usize, to: usize) {
        self.rows[from][to] = true;
    }

    /// Set bits restricted to the first `n` rows/columns, row-major.
    pub fn edges(&self, n: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = n.min(self.capacity);
        self.rows.iter().take(n).enumerate().flat_map(move |(from, row)| {
            row.iter()
                .take(n)
                .enumerate()
                .filter(|(_, bit)| **bit)
                .map(move |(to, _)| (from, to))
        })
    }
}
