//! The [`Grid`] store: an ordered sequence of cells owned by one process.

use epigrid_core::SirCell;

/// Arithmetic means of the three compartments across a grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompartmentMeans {
    /// Mean susceptible share.
    pub s: f64,
    /// Mean infected share.
    pub i: f64,
    /// Mean recovered share.
    pub r: f64,
}

/// Ordered store of the local process's cells, indexed `0..len()`.
///
/// Index identity is the join key used by the
/// [`NeighborMap`](crate::NeighborMap) and is stable across updates: the
/// update pass replaces the whole buffer in one swap, never mutating cells
/// in place relative to each other within a step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Grid {
    cells: Vec<SirCell>,
}

impl Grid {
    /// An empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from cells in index order.
    pub fn from_cells(cells: Vec<SirCell>) -> Self {
        Self { cells }
    }

    /// Number of local cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// `true` when the grid holds no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Read-only view of the cells in index order.
    pub fn cells(&self) -> &[SirCell] {
        &self.cells
    }

    /// Mutable view of the cells in index order.
    pub fn cells_mut(&mut self) -> &mut [SirCell] {
        &mut self.cells
    }

    /// The cell at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<SirCell> {
        self.cells.get(index).copied()
    }

    /// Swap the backing buffer with `staging`.
    ///
    /// This is the double-buffer publish: the staging buffer becomes the
    /// live grid and the old live buffer is handed back for reuse as the
    /// next staging buffer.
    pub(crate) fn swap_cells(&mut self, staging: &mut Vec<SirCell>) {
        std::mem::swap(&mut self.cells, staging);
    }

    /// Arithmetic mean of S, I, R across all cells.
    ///
    /// Returns `None` for an empty grid rather than dividing by zero;
    /// callers decide the failure policy.
    pub fn compartment_means(&self) -> Option<CompartmentMeans> {
        if self.cells.is_empty() {
            return None;
        }
        let mut sum_s = 0.0;
        let mut sum_i = 0.0;
        let mut sum_r = 0.0;
        for cell in &self.cells {
            sum_s += cell.susceptible();
            sum_i += cell.infected();
            sum_r += cell.recovered();
        }
        let n = self.cells.len() as f64;
        Some(CompartmentMeans {
            s: sum_s / n,
            i: sum_i / n,
            r: sum_r / n,
        })
    }
}

impl FromIterator<SirCell> for Grid {
    fn from_iter<T: IntoIterator<Item = SirCell>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_cells_preserves_order() {
        let cells = vec![
            SirCell::new(1.0, 0.0, 0.0),
            SirCell::new(0.0, 1.0, 0.0),
            SirCell::new(0.0, 0.0, 1.0),
        ];
        let grid = Grid::from_cells(cells.clone());
        assert_eq!(grid.len(), 3);
        assert_eq!(grid.cells(), cells.as_slice());
        assert_eq!(grid.get(1), Some(SirCell::new(0.0, 1.0, 0.0)));
        assert_eq!(grid.get(3), None);
    }

    #[test]
    fn means_of_two_cell_grid() {
        // [(1,0,0), (0,1,0)] -> means (0.5, 0.5, 0).
        let grid = Grid::from_cells(vec![
            SirCell::new(1.0, 0.0, 0.0),
            SirCell::new(0.0, 1.0, 0.0),
        ]);
        let means = grid.compartment_means().unwrap();
        assert_eq!(means.s, 0.5);
        assert_eq!(means.i, 0.5);
        assert_eq!(means.r, 0.0);
    }

    #[test]
    fn empty_grid_has_no_means() {
        assert!(Grid::new().compartment_means().is_none());
        assert!(Grid::new().is_empty());
    }

    #[test]
    fn cells_mut_allows_in_place_setup() {
        let mut grid = Grid::from_cells(vec![SirCell::default(); 2]);
        grid.cells_mut()[1].set_infected(0.25);
        assert_eq!(grid.get(1).unwrap().infected(), 0.25);
    }

    #[test]
    fn swap_cells_exchanges_buffers() {
        let mut grid = Grid::from_cells(vec![SirCell::new(1.0, 0.0, 0.0)]);
        let mut staging = vec![SirCell::new(0.0, 1.0, 0.0); 2];
        grid.swap_cells(&mut staging);
        assert_eq!(grid.len(), 2);
        assert_eq!(staging, vec![SirCell::new(1.0, 0.0, 0.0)]);
    }
}
