use std::ops::Range;

use crate::config::check_board_size;
use crate::error::{EngineError, Result};

/// Square board of `size * size` cells stored row-major, indexed `x + y * size`.
///
/// The side length is fixed at construction and `cells.len() == size * size`
/// holds for the lifetime of the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    size: usize,
    cells: Vec<bool>,
}

impl GridState {
    /// An all-dead board.
    pub fn new(size: usize) -> Result<Self> {
        check_board_size(size)?;
        Ok(Self {
            size,
            cells: vec![false; size * size],
        })
    }

    pub fn from_cells(size: usize, cells: Vec<bool>) -> Result<Self> {
        check_board_size(size)?;
        if cells.len() != size * size {
            return Err(EngineError::size_mismatch(size * size, cells.len()));
        }
        Ok(Self { size, cells })
    }

    /// Parse a square ASCII pattern, one string per row.
    /// `#` or `O` is alive, `.` is dead.
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (row_index, row) in rows.iter().enumerate() {
            if row.chars().count() != size {
                return Err(EngineError::pattern(format!(
                    "row {row_index} has {} cells, expected {size}",
                    row.chars().count()
                )));
            }
            for ch in row.chars() {
                cells.push(match ch {
                    '#' | 'O' => true,
                    '.' => false,
                    other => {
                        return Err(EngineError::pattern(format!(
                            "unexpected character {other:?} in row {row_index}"
                        )))
                    }
                });
            }
        }
        Self::from_cells(size, cells)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Full ordered view of the board.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn is_alive(&self, index: usize) -> bool {
        self.cells[index]
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[self.index_of(x, y)]
    }

    pub fn set(&mut self, index: usize, value: bool) {
        self.cells[index] = value;
    }

    /// Flip one cell and return its new value.
    pub fn toggle(&mut self, index: usize) -> bool {
        let cell = &mut self.cells[index];
        *cell = !*cell;
        *cell
    }

    pub fn replace_all(&mut self, values: &[bool]) -> Result<()> {
        self.replace_range(0..self.cells.len(), values)
    }

    /// Overwrite `range` with `values`. Nothing is written unless both the
    /// range and the value count check out.
    pub fn replace_range(&mut self, range: Range<usize>, values: &[bool]) -> Result<()> {
        let cell_count = self.cells.len();
        if range.start > range.end || range.end > cell_count {
            return Err(EngineError::RangeOutOfBounds {
                start: range.start,
                end: range.end,
                cell_count,
            });
        }
        if values.len() != range.len() {
            return Err(EngineError::size_mismatch(range.len(), values.len()));
        }
        self.cells[range].copy_from_slice(values);
        Ok(())
    }

    pub fn index_of(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.size && y < self.size);
        x + y * self.size
    }

    pub fn coordinates(&self, index: usize) -> (usize, usize) {
        (index % self.size, index / self.size)
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|alive| **alive).count()
    }

    /// Render as `#`/`.` rows, the inverse of [`GridState::from_rows`].
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|&alive| if alive { '#' } else { '.' }).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_dead() {
        let grid = GridState::new(5).unwrap();
        assert_eq!(grid.cell_count(), 25);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn from_cells_checks_length() {
        assert_eq!(
            GridState::from_cells(3, vec![true; 8]),
            Err(EngineError::SizeMismatch { expected: 9, actual: 8 })
        );
    }

    #[test]
    fn parses_rows_in_row_major_order() {
        let grid = GridState::from_rows(&["#..", ".O.", "..#"]).unwrap();
        assert_eq!(grid.size(), 3);
        assert!(grid.get(0, 0));
        assert!(grid.get(1, 1));
        assert!(grid.get(2, 2));
        assert!(!grid.get(1, 0));
        assert_eq!(grid.population(), 3);
        assert_eq!(grid.to_rows(), vec!["#..", ".#.", "..#"]);
    }

    #[test]
    fn rejects_ragged_and_unknown_patterns() {
        assert!(matches!(
            GridState::from_rows(&["##", "#"]),
            Err(EngineError::InvalidPattern(_))
        ));
        assert!(matches!(
            GridState::from_rows(&["#x", ".."]),
            Err(EngineError::InvalidPattern(_))
        ));
    }

    #[test]
    fn index_and_coordinates_agree() {
        let grid = GridState::new(7).unwrap();
        for index in 0..grid.cell_count() {
            let (x, y) = grid.coordinates(index);
            assert_eq!(grid.index_of(x, y), index);
        }
    }

    #[test]
    fn replace_range_leaves_board_alone_on_error() {
        let mut grid = GridState::new(3).unwrap();
        let before = grid.clone();

        assert_eq!(
            grid.replace_range(2..5, &[true, true]),
            Err(EngineError::SizeMismatch { expected: 3, actual: 2 })
        );
        assert_eq!(
            grid.replace_range(8..10, &[true, true]),
            Err(EngineError::RangeOutOfBounds { start: 8, end: 10, cell_count: 9 })
        );
        assert_eq!(grid, before);

        grid.replace_range(2..5, &[true, false, true]).unwrap();
        assert_eq!(&grid.cells()[1..6], &[false, true, false, true, false]);
    }

    #[test]
    fn toggle_returns_new_value() {
        let mut grid = GridState::new(2).unwrap();
        assert!(grid.toggle(3));
        assert!(!grid.toggle(3));
    }
}
