//! Eight-neighbor counting on the wrapped board.
//!
//! The flat index space is treated as a single ring of `size * size` cells:
//! neighbor `k` of cell `i` is `(i + offset_k) mod cell_count` for the
//! offsets `-size-1, -size, -size+1, -1, +1, size-1, size, size+1`. Moving off
//! the top of the board lands on the bottom row and moving off the first cell
//! lands on the last one.

/// The eight neighbor offsets for one board size, stored as forward distances
/// in `0..cell_count` so every lookup is a plain add-then-modulo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborOffsets {
    cell_count: usize,
    forward: [usize; 8],
}

impl NeighborOffsets {
    /// Requires `size >= 2`, so no offset magnitude exceeds `size * size`.
    pub fn new(size: usize) -> Self {
        debug_assert!(size >= 2);
        let cell_count = size * size;
        let signed: [isize; 8] = {
            let s = size as isize;
            [-s - 1, -s, -s + 1, -1, 1, s - 1, s, s + 1]
        };
        // add one full cell count before reducing so nothing goes negative
        let forward = signed.map(|offset| (offset + cell_count as isize) as usize % cell_count);
        Self { cell_count, forward }
    }

    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// Indices of the eight neighbors of `index`, in offset order. On small
    /// boards the same index can appear more than once.
    pub fn neighbors(&self, index: usize) -> [usize; 8] {
        self.forward.map(|delta| (index + delta) % self.cell_count)
    }

    /// Live neighbors of `index` in `cells`, always in `0..=8`.
    pub fn live_count(&self, cells: &[bool], index: usize) -> u8 {
        debug_assert_eq!(cells.len(), self.cell_count);
        self.neighbors(index)
            .iter()
            .filter(|&&neighbor| cells[neighbor])
            .count() as u8
    }
}

/// Live neighbor count of `index` on a `size × size` board.
pub fn live_neighbors(cells: &[bool], size: usize, index: usize) -> u8 {
    NeighborOffsets::new(size).live_count(cells, index)
}
