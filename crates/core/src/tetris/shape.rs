//! Shape module - tetromino matrices and rotation
//!
//! Each of the seven tetrominoes spawns as a fixed N×N matrix (I is 4×4,
//! O is 2×2, the rest 3×3). Rotation rewrites the matrix with the
//! 90°-clockwise transform `result[x][y] = source[N-1-y][x]`; there are no
//! wall kicks - a rotation that would collide is simply rejected by the
//! caller. The matrix never changes size, so a piece's footprint can shift
//! inside its bounding box exactly as the transform dictates.

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;

/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds, in the draw table's order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Draw a kind uniformly at random
    pub fn random(rng: &mut SimpleRng) -> Self {
        Self::ALL[rng.next_range(Self::ALL.len() as u32) as usize]
    }
}

/// Largest matrix edge among the seven shapes (the I piece)
const MAX_SIZE: usize = 4;

/// A tetromino's occupancy matrix
///
/// `rows` is padded to 4×4; only the top-left `size`×`size` block is
/// meaningful. Row index is y (downward), column index is x.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    size: u8,
    rows: [[bool; MAX_SIZE]; MAX_SIZE],
}

impl Shape {
    /// The spawn-orientation matrix for a piece kind
    pub fn spawn(kind: PieceKind) -> Self {
        let (size, rows): (u8, [[u8; MAX_SIZE]; MAX_SIZE]) = match kind {
            PieceKind::I => (
                4,
                [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]],
            ),
            PieceKind::J => (
                3,
                [[1, 0, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
            ),
            PieceKind::L => (
                3,
                [[0, 0, 1, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
            ),
            PieceKind::O => (
                2,
                [[1, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
            ),
            PieceKind::S => (
                3,
                [[0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
            ),
            PieceKind::T => (
                3,
                [[0, 1, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
            ),
            PieceKind::Z => (
                3,
                [[1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
            ),
        };

        let mut out = [[false; MAX_SIZE]; MAX_SIZE];
        for (y, row) in rows.iter().enumerate() {
            for (x, v) in row.iter().enumerate() {
                out[y][x] = *v != 0;
            }
        }
        Self { size, rows: out }
    }

    /// Matrix edge length (the spawn-centering width)
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Whether the matrix cell (x, y) is filled
    #[inline(always)]
    pub fn filled(&self, x: u8, y: u8) -> bool {
        self.rows[y as usize][x as usize]
    }

    /// Rotate 90° clockwise: `result[x][y] = source[N-1-y][x]`
    pub fn rotate_cw(&self) -> Self {
        let n = self.size as usize;
        let mut rows = [[false; MAX_SIZE]; MAX_SIZE];
        for x in 0..n {
            for y in 0..n {
                rows[x][y] = self.rows[n - 1 - y][x];
            }
        }
        Self {
            size: self.size,
            rows,
        }
    }

    /// Offsets of the four filled cells as (dx, dy) from the matrix origin
    pub fn cells(&self) -> ArrayVec<(i8, i8), 4> {
        let mut out = ArrayVec::new();
        let n = self.size as usize;
        for y in 0..n {
            for x in 0..n {
                if self.rows[y][x] {
                    out.push((x as i8, y as i8));
                }
            }
        }
        out
    }
}
