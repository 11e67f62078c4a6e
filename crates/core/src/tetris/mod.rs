//! Tetris simulation - falling piece over an accumulating stack
//!
//! Gravity moves the active tetromino one row per second of accumulated
//! frame time. Horizontal moves, rotation and manual drops arrive as
//! intents and are rejected outright when the transformed piece would
//! collide. A collision on the way down locks the piece: merge, sweep,
//! score, spawn. A spawn that collides immediately is the terminal state.

pub mod board;
pub mod shape;

pub use board::Board;
pub use shape::{PieceKind, Shape};

use tui_arcade_types::{Event, Intent, TETRIS_COLS, TETRIS_DROP_MS, TETRIS_LINE_SCORE};

use crate::intents::IntentQueue;
use crate::rng::SimpleRng;
use crate::sim::Events;

/// The active falling piece: a shape matrix plus its grid offset
#[derive(Debug, Clone, Copy)]
pub struct Tetromino {
    kind: PieceKind,
    shape: Shape,
    x: i8,
    y: i8,
}

impl Tetromino {
    /// Spawn at the top, horizontally centered by matrix width
    fn spawn(kind: PieceKind) -> Self {
        let shape = Shape::spawn(kind);
        Self {
            kind,
            shape,
            x: (TETRIS_COLS / 2) as i8 - (shape.size() / 2) as i8,
            y: 0,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn x(&self) -> i8 {
        self.x
    }

    pub fn y(&self) -> i8 {
        self.y
    }
}

/// Tetris game state
#[derive(Debug, Clone)]
pub struct TetrisSim {
    board: Board,
    piece: Tetromino,
    score: u32,
    drop_acc: f32,
    game_over: bool,
    rng: SimpleRng,
}

impl TetrisSim {
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let piece = Tetromino::spawn(PieceKind::random(&mut rng));
        Self {
            board: Board::new(),
            piece,
            score: 0,
            drop_acc: 0.0,
            game_over: false,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece(&self) -> &Tetromino {
        &self.piece
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Swap in a fresh spawn of `kind` as the active piece. Lets tests
    /// and benchmarks script exact piece sequences.
    pub fn force_piece(&mut self, kind: PieceKind) {
        self.piece = Tetromino::spawn(kind);
    }

    /// Whether `shape` placed at (x, y) hits the stack or leaves the grid
    fn collides(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape
            .cells()
            .iter()
            .any(|&(dx, dy)| !self.board.is_valid(x + dx, y + dy))
    }

    /// Advance one tick: drain intents, then apply gravity once the
    /// accumulated time exceeds the drop interval.
    pub fn tick(&mut self, elapsed_ms: f32, intents: &mut IntentQueue) -> Events {
        let mut events = Events::new();
        let score_before = self.score;
        let was_over = self.game_over;

        for intent in intents.take_all() {
            // Terminal state ignores input; reset is the driver's job.
            if self.game_over {
                break;
            }
            match intent {
                Intent::MoveLeft => self.try_shift(-1),
                Intent::MoveRight => self.try_shift(1),
                Intent::StepDown => self.drop_step(),
                Intent::Rotate => self.try_rotate(),
                _ => {}
            }
        }

        if !self.game_over {
            self.drop_acc += elapsed_ms;
            if self.drop_acc > TETRIS_DROP_MS {
                self.drop_step();
            }
        }

        if self.score != score_before {
            events.push(Event::Scored { total: self.score });
        }
        if self.game_over && !was_over {
            events.push(Event::GameOver { score: self.score });
        }
        events
    }

    /// Horizontal move, rejected on collision
    fn try_shift(&mut self, dx: i8) {
        let nx = self.piece.x + dx;
        if !self.collides(&self.piece.shape, nx, self.piece.y) {
            self.piece.x = nx;
        }
    }

    /// Clockwise rotation, rejected on collision; no kicks
    fn try_rotate(&mut self) {
        let rotated = self.piece.shape.rotate_cw();
        if !self.collides(&rotated, self.piece.x, self.piece.y) {
            self.piece.shape = rotated;
        }
    }

    /// One row down; a collision locks the piece instead
    fn drop_step(&mut self) {
        let ny = self.piece.y + 1;
        if self.collides(&self.piece.shape, self.piece.x, ny) {
            self.lock_piece();
        } else {
            self.piece.y = ny;
        }
        self.drop_acc = 0.0;
    }

    /// Merge at the current position, sweep, score, spawn the next piece
    fn lock_piece(&mut self) {
        let cells = self.piece.shape.cells();
        let merged = self.board.merge(&cells, self.piece.x, self.piece.y);
        debug_assert!(merged, "active piece rested on an invalid position");

        let lines = self.board.sweep();
        self.score += lines * TETRIS_LINE_SCORE;

        self.piece = Tetromino::spawn(PieceKind::random(&mut self.rng));
        if self.collides(&self.piece.shape, self.piece.x, self.piece.y) {
            self.game_over = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_arcade_types::TETRIS_ROWS;

    fn tick_ms(sim: &mut TetrisSim, ms: f32) -> Events {
        let mut intents = IntentQueue::new();
        sim.tick(ms, &mut intents)
    }

    fn tick_intents(sim: &mut TetrisSim, list: &[Intent]) -> Events {
        let mut intents = IntentQueue::new();
        for i in list {
            intents.push(*i);
        }
        sim.tick(0.0, &mut intents)
    }

    #[test]
    fn test_spawn_is_centered_by_matrix_width() {
        let sim = TetrisSim::new(1);
        let expected = 5 - (sim.piece().shape().size() / 2) as i8;
        assert_eq!(sim.piece().x(), expected);
        assert_eq!(sim.piece().y(), 0);
    }

    #[test]
    fn test_gravity_waits_for_full_interval() {
        let mut sim = TetrisSim::new(1);
        let y0 = sim.piece().y();

        // Exactly the interval is not enough: the counter must exceed it.
        tick_ms(&mut sim, 1000.0);
        assert_eq!(sim.piece().y(), y0);

        tick_ms(&mut sim, 0.1);
        assert_eq!(sim.piece().y(), y0 + 1);
    }

    #[test]
    fn test_gravity_accumulates_across_frames() {
        let mut sim = TetrisSim::new(1);
        let y0 = sim.piece().y();
        for _ in 0..63 {
            tick_ms(&mut sim, 16.0);
        }
        // 63 * 16 = 1008 ms, one drop.
        assert_eq!(sim.piece().y(), y0 + 1);
    }

    #[test]
    fn test_step_down_resets_gravity_counter() {
        let mut sim = TetrisSim::new(1);
        tick_ms(&mut sim, 999.0);
        let y_after_step = {
            tick_intents(&mut sim, &[Intent::StepDown]);
            sim.piece().y()
        };
        // The manual step consumed the accumulated 999 ms.
        tick_ms(&mut sim, 999.0);
        assert_eq!(sim.piece().y(), y_after_step);
    }

    #[test]
    fn test_move_rejected_at_wall() {
        let mut sim = TetrisSim::new(1);
        for _ in 0..12 {
            tick_intents(&mut sim, &[Intent::MoveLeft]);
        }
        let leftmost = sim.piece().x();
        tick_intents(&mut sim, &[Intent::MoveLeft]);
        assert_eq!(sim.piece().x(), leftmost);
        assert!(sim
            .piece()
            .shape()
            .cells()
            .iter()
            .all(|&(dx, _)| sim.piece().x() + dx >= 0));
    }

    #[test]
    fn test_rotation_rejected_when_blocked() {
        let mut sim = TetrisSim::new(1);
        // Surround the spawn area with filled cells below row 1 so any
        // rotation that reaches row 2 collides.
        let mut rows = [[1u8; 10]; 20];
        rows[0] = [0; 10];
        rows[1] = [0; 10];
        sim.board = Board::from_rows(&rows);
        sim.piece = Tetromino::spawn(PieceKind::I);

        let before = *sim.piece().shape();
        tick_intents(&mut sim, &[Intent::Rotate]);
        // A vertical I would occupy rows 0..4; rows 2+ are filled.
        assert_eq!(*sim.piece().shape(), before);
    }

    #[test]
    fn test_lock_merges_and_spawns() {
        let mut sim = TetrisSim::new(1);
        sim.piece = Tetromino::spawn(PieceKind::O);
        let drops = TETRIS_ROWS as usize + 2;
        for _ in 0..drops {
            tick_intents(&mut sim, &[Intent::StepDown]);
        }
        // The O piece rested on the floor at columns 4-5.
        assert!(sim.board().is_occupied(4, 19));
        assert!(sim.board().is_occupied(5, 19));
        assert!(sim.board().is_occupied(4, 18));
        assert!(sim.board().is_occupied(5, 18));
    }

    #[test]
    fn test_sweep_scores_ten_per_line() {
        let mut sim = TetrisSim::new(1);
        // Bottom row complete except the spawn columns of the O piece.
        let mut rows = [[0u8; 10]; 20];
        rows[19] = [1, 1, 1, 1, 0, 0, 1, 1, 1, 1];
        sim.board = Board::from_rows(&rows);
        sim.piece = Tetromino::spawn(PieceKind::O);

        let mut scored = None;
        for _ in 0..25 {
            let events = tick_intents(&mut sim, &[Intent::StepDown]);
            if let Some(Event::Scored { total }) = events.first() {
                scored = Some(*total);
                break;
            }
        }
        assert_eq!(scored, Some(10));
        assert_eq!(sim.score(), 10);
        // Only the top half of the O remains after the sweep.
        assert!(sim.board().is_occupied(4, 19));
        assert!(sim.board().is_occupied(5, 19));
        assert!(!sim.board().is_occupied(0, 19));
    }

    #[test]
    fn test_blocked_spawn_is_terminal() {
        let mut sim = TetrisSim::new(1);
        // Fill everything below the top two rows (leaving one column open
        // so no row is full and nothing sweeps), then fill the spawn rows
        // so the freshly spawned piece collides immediately after locking.
        let mut rows = [[1, 1, 1, 1, 1, 1, 1, 1, 1, 0u8]; 20];
        rows[0] = [0, 0, 0, 1, 1, 1, 1, 0, 0, 0];
        rows[1] = [0, 0, 0, 1, 1, 1, 1, 0, 0, 0];
        sim.board = Board::from_rows(&rows);
        sim.piece = Tetromino {
            kind: PieceKind::O,
            shape: Shape::spawn(PieceKind::O),
            x: 0,
            y: 0,
        };

        let events = tick_intents(&mut sim, &[Intent::StepDown]);
        assert!(sim.game_over());
        assert!(events
            .iter()
            .any(|e| matches!(e, Event::GameOver { .. })));
    }

    #[test]
    fn test_input_ignored_after_terminal() {
        let mut sim = TetrisSim::new(1);
        sim.game_over = true;
        let x0 = sim.piece().x();
        tick_intents(&mut sim, &[Intent::MoveLeft, Intent::Rotate]);
        tick_ms(&mut sim, 5000.0);
        assert_eq!(sim.piece().x(), x0);
        assert_eq!(sim.piece().y(), 0);
    }

    #[test]
    fn test_terminal_event_fires_once() {
        let mut sim = TetrisSim::new(1);
        let mut rows = [[1, 1, 1, 1, 1, 1, 1, 1, 1, 0u8]; 20];
        rows[0] = [0, 0, 0, 1, 1, 1, 1, 0, 0, 0];
        rows[1] = [0, 0, 0, 1, 1, 1, 1, 0, 0, 0];
        sim.board = Board::from_rows(&rows);
        sim.piece = Tetromino {
            kind: PieceKind::O,
            shape: Shape::spawn(PieceKind::O),
            x: 0,
            y: 0,
        };

        tick_intents(&mut sim, &[Intent::StepDown]);
        assert!(sim.game_over());
        let later = tick_ms(&mut sim, 2000.0);
        assert!(later.is_empty());
    }
}
