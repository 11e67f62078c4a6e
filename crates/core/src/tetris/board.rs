//! Board module - the accumulated Tetris stack
//!
//! The board is a 10x20 occupancy grid. Merged pieces lose their identity:
//! a cell is either empty or filled, which is why locked cells render in a
//! single neutral color. Uses a flat array for cache locality and
//! zero-allocation. Coordinates: (x, y) with x 0..9 left to right and
//! y 0..19 top to bottom.

use tui_arcade_types::{TETRIS_COLS, TETRIS_ROWS};

/// Total number of cells on the board
const BOARD_SIZE: usize = (TETRIS_COLS as usize) * (TETRIS_ROWS as usize);

/// The accumulated stack - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [bool; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [false; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= TETRIS_COLS as i8 || y < 0 || y >= TETRIS_ROWS as i8 {
            return None;
        }
        Some((y as usize) * (TETRIS_COLS as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        TETRIS_COLS
    }

    pub fn height(&self) -> u8 {
        TETRIS_ROWS
    }

    /// Get cell at position (x, y); `None` if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<bool> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y); returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, filled: bool) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = filled;
                true
            }
            None => false,
        }
    }

    /// Check if position is valid (within bounds and empty)
    ///
    /// Anything else - occupied or outside the grid on any side - is a
    /// collision for the falling piece.
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(false))
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(true))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= TETRIS_ROWS as usize {
            return false;
        }
        let start = y * TETRIS_COLS as usize;
        let end = start + TETRIS_COLS as usize;
        self.cells[start..end].iter().all(|cell| *cell)
    }

    /// Merge piece cells onto the board at the given origin
    ///
    /// Returns false (and merges nothing) if any cell fails validation;
    /// callers pre-validate via collision checks, so false indicates a
    /// caller bug rather than a game state.
    pub fn merge(&mut self, cells: &[(i8, i8)], x: i8, y: i8) -> bool {
        for &(dx, dy) in cells {
            if !self.is_valid(x + dx, y + dy) {
                return false;
            }
        }
        for &(dx, dy) in cells {
            self.set(x + dx, y + dy, true);
        }
        true
    }

    /// Sweep all full rows: remove them, shift rows above down, insert
    /// empty rows at index 0. Returns the number of rows removed.
    ///
    /// Two-pointer compaction over the flat array, zero-allocation.
    pub fn sweep(&mut self) -> u32 {
        let width = TETRIS_COLS as usize;
        let mut removed = 0u32;
        let mut write_y = TETRIS_ROWS as usize;

        // Scan from bottom to top, keeping non-full rows.
        for read_y in (0..TETRIS_ROWS as usize).rev() {
            if self.is_row_full(read_y) {
                removed += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Blank the freed rows at the top.
        for cell in &mut self.cells[..write_y * width] {
            *cell = false;
        }

        removed
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = false;
        }
    }

    /// Create from rows of 0/1 for testing
    #[cfg(test)]
    pub fn from_rows(rows: &[[u8; TETRIS_COLS as usize]]) -> Self {
        assert_eq!(rows.len(), TETRIS_ROWS as usize);
        let mut board = Self::new();
        for (y, row) in rows.iter().enumerate() {
            for (x, v) in row.iter().enumerate() {
                board.cells[y * TETRIS_COLS as usize + x] = *v != 0;
            }
        }
        board
    }

    /// Read one row back as 0/1 for testing
    #[cfg(test)]
    pub fn row(&self, y: usize) -> [u8; TETRIS_COLS as usize] {
        let mut out = [0u8; TETRIS_COLS as usize];
        let start = y * TETRIS_COLS as usize;
        for (x, slot) in out.iter_mut().enumerate() {
            *slot = self.cells[start + x] as u8;
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
