//! The [`NeighborMap`]: adjacency coupling cells for spatial integration.

use indexmap::IndexMap;

/// Mapping from a local cell index to its ordered neighbor indices.
///
/// Backed by an `IndexMap` so iteration order is insertion order,
/// deterministic across runs. The map is not required to be symmetric or
/// complete: a cell absent from the map simply has zero neighbors, and
/// neighbor indices at or past the grid length are skipped by the update
/// pass (a defined no-op, not an error). Indices are `usize`, so the
/// out-of-range check reduces to the upper bound.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NeighborMap {
    edges: IndexMap<usize, Vec<usize>>,
}

impl NeighborMap {
    /// An empty map: every cell has zero neighbors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the neighbor list for `cell`, replacing any previous list.
    pub fn insert(&mut self, cell: usize, neighbors: Vec<usize>) {
        self.edges.insert(cell, neighbors);
    }

    /// The neighbor list for `cell`; empty when `cell` is unmapped.
    pub fn neighbors_of(&self, cell: usize) -> &[usize] {
        self.edges.get(&cell).map_or(&[], Vec::as_slice)
    }

    /// Number of cells with an entry (including empty lists).
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// `true` when no cell has an entry.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> {
        self.edges.iter().map(|(&cell, nbs)| (cell, nbs.as_slice()))
    }

    /// Build the 4-connected adjacency of a `rows` × `cols` lattice.
    ///
    /// Cells are numbered row-major; each interior cell couples to its
    /// north, south, west, and east neighbors, edge cells to the subset
    /// that exists. The result is symmetric and covers every cell.
    pub fn lattice4(rows: usize, cols: usize) -> Self {
        let offsets: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        let mut map = Self::new();
        for r in 0..rows as isize {
            for c in 0..cols as isize {
                let mut nbs = Vec::with_capacity(4);
                for (dr, dc) in offsets {
                    let (nr, nc) = (r + dr, c + dc);
                    if nr >= 0 && nr < rows as isize && nc >= 0 && nc < cols as isize {
                        nbs.push(nr as usize * cols + nc as usize);
                    }
                }
                map.insert(r as usize * cols + c as usize, nbs);
            }
        }
        map
    }
}

impl FromIterator<(usize, Vec<usize>)> for NeighborMap {
    fn from_iter<T: IntoIterator<Item = (usize, Vec<usize>)>>(iter: T) -> Self {
        Self {
            edges: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmapped_cell_has_no_neighbors() {
        let map = NeighborMap::new();
        assert!(map.neighbors_of(0).is_empty());
        assert!(map.is_empty());
    }

    #[test]
    fn insert_replaces_previous_list() {
        let mut map = NeighborMap::new();
        map.insert(0, vec![1, 2]);
        map.insert(0, vec![3]);
        assert_eq!(map.neighbors_of(0), &[3]);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let map: NeighborMap = [(5, vec![0]), (1, vec![2]), (3, vec![4])]
            .into_iter()
            .collect();
        let keys: Vec<usize> = map.iter().map(|(cell, _)| cell).collect();
        assert_eq!(keys, vec![5, 1, 3]);
    }

    #[test]
    fn lattice4_corner_edge_interior_degrees() {
        let map = NeighborMap::lattice4(3, 3);
        assert_eq!(map.len(), 9);
        // Corner (0,0) = cell 0: south and east.
        assert_eq!(map.neighbors_of(0), &[3, 1]);
        // Edge (0,1) = cell 1: south, west, east.
        assert_eq!(map.neighbors_of(1), &[4, 0, 2]);
        // Interior (1,1) = cell 4: all four.
        assert_eq!(map.neighbors_of(4), &[1, 7, 3, 5]);
    }

    #[test]
    fn lattice4_is_symmetric() {
        let map = NeighborMap::lattice4(4, 5);
        for (cell, nbs) in map.iter() {
            for &nb in nbs {
                assert!(
                    map.neighbors_of(nb).contains(&cell),
                    "edge {cell} -> {nb} has no reverse"
                );
            }
        }
    }

    #[test]
    fn lattice4_single_row() {
        let map = NeighborMap::lattice4(1, 3);
        assert_eq!(map.neighbors_of(0), &[1]);
        assert_eq!(map.neighbors_of(1), &[0, 2]);
        assert_eq!(map.neighbors_of(2), &[1]);
    }
}
