/*!

Precomputed neighbor lists for a square grid.

For radius `r`, the neighbors of `(i, j)` are the cells `(i + di, j + dj)` with `di, dj` in
`[-r, r]`, excluding `(i, j)` itself, clipped to the grid (no wraparound). Lists hold row-major
cell indices in row-major order. A `Neighborhood` is only valid for the grid generation it was
built alongside.

*/

use crate::log::trace;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Neighborhood {
    size: usize,
    radius: usize,
    neighbors: Vec<Vec<usize>>,
}

impl Neighborhood {
    #[must_use]
    pub fn new(size: usize, radius: usize) -> Self {
        trace!("building neighbor table for a {size}x{size} grid with radius {radius}");
        let mut neighbors = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                neighbors.push(Self::compute(size, radius, row, col));
            }
        }
        Neighborhood {
            size,
            radius,
            neighbors,
        }
    }

    fn compute(size: usize, radius: usize, row: usize, col: usize) -> Vec<usize> {
        let start_row = row.saturating_sub(radius);
        let start_col = col.saturating_sub(radius);
        let end_row = row.saturating_add(radius).min(size - 1);
        let end_col = col.saturating_add(radius).min(size - 1);

        let mut cells = Vec::with_capacity((end_row - start_row + 1) * (end_col - start_col + 1));
        for r in start_row..=end_row {
            for c in start_col..=end_col {
                if r == row && c == col {
                    continue;
                }
                cells.push(r * size + c);
            }
        }
        cells
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Neighbors of the cell with row-major index `index`.
    #[must_use]
    #[inline]
    pub fn neighbors_of(&self, index: usize) -> &[usize] {
        &self.neighbors[index]
    }

    /// Neighbors of the cell at `(row, col)`. Panics if either coordinate is outside the grid.
    #[must_use]
    #[inline]
    pub fn neighbors_at(&self, row: usize, col: usize) -> &[usize] {
        assert!(
            row < self.size && col < self.size,
            "cell ({row}, {col}) is outside a {0}x{0} grid",
            self.size
        );
        self.neighbors_of(row * self.size + col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_cell_radius_one() {
        let neighborhood = Neighborhood::new(3, 1);
        assert_eq!(neighborhood.neighbors_at(1, 1), &[0, 1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn corner_cells_are_clipped() {
        let neighborhood = Neighborhood::new(3, 1);
        assert_eq!(neighborhood.neighbors_at(0, 0), &[1, 3, 4]);
        assert_eq!(neighborhood.neighbors_at(2, 2), &[4, 5, 7]);
        assert_eq!(neighborhood.neighbors_at(0, 2), &[1, 4, 5]);
    }

    #[test]
    fn no_wraparound() {
        let neighborhood = Neighborhood::new(5, 1);
        assert!(!neighborhood.neighbors_at(0, 0).contains(&4));
        assert!(!neighborhood.neighbors_at(0, 0).contains(&20));
    }

    #[test]
    fn radius_zero_has_no_neighbors() {
        let neighborhood = Neighborhood::new(4, 0);
        for index in 0..16 {
            assert!(neighborhood.neighbors_of(index).is_empty());
        }
    }

    #[test]
    fn large_radius_covers_whole_grid() {
        let neighborhood = Neighborhood::new(4, 100);
        for index in 0..16 {
            let neighbors = neighborhood.neighbors_of(index);
            assert_eq!(neighbors.len(), 15);
            assert!(!neighbors.contains(&index));
        }
    }

    #[test]
    fn single_cell_grid() {
        let neighborhood = Neighborhood::new(1, 2);
        assert!(neighborhood.neighbors_at(0, 0).is_empty());
    }

    #[test]
    fn neighbor_counts_match_clipped_window() {
        let size = 6;
        let radius = 2;
        let neighborhood = Neighborhood::new(size, radius);
        for row in 0..size {
            for col in 0..size {
                let rows = row.min(radius) + (size - 1 - row).min(radius) + 1;
                let cols = col.min(radius) + (size - 1 - col).min(radius) + 1;
                assert_eq!(neighborhood.neighbors_at(row, col).len(), rows * cols - 1);
            }
        }
    }

    #[test]
    #[should_panic(expected = "outside a 4x4 grid")]
    fn column_past_the_edge_panics() {
        let neighborhood = Neighborhood::new(4, 1);
        // (1, 4) would otherwise read the table entry of (2, 0).
        let _ = neighborhood.neighbors_at(1, 4);
    }
}
