//! Shared types module - game kinds, intents, events and constants
//!
//! This module defines the fundamental vocabulary used throughout the arcade.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (simulation cores, views, the loop driver).
//!
//! # Canvas Dimensions
//!
//! Every game simulates in its own logical pixel space; views scale that
//! space into whatever terminal viewport is available:
//!
//! | Game | Canvas | Cell/actor size |
//! |------|--------|-----------------|
//! | Snake | 400×400 | 20 px grid |
//! | Tetris | 300×600 | 30 px blocks (10×20 board) |
//! | Flappy | 250×400 | 30 px bird, 50 px pipes |
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds of accumulated frame time:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Target frame pacing (~60 FPS) |
//! | `TETRIS_DROP_MS` | 1000 | Gravity interval per row |
//! | `SNAKE_STEP_MS` | 1000/15 | Snake advances 15 times per second |
//! | `MEMORY_REVEAL_MS` | 1000 | Mismatched pair stays face-up this long |
//!
//! Flappy has no interval gate: gravity integrates once per frame.
//!
//! # Examples
//!
//! ```
//! use tui_arcade_types::{Direction, GameKind, Intent};
//!
//! // Parse a game kind from its legacy page identifier
//! let kind = GameKind::from_str("flappyBird").unwrap();
//! assert_eq!(kind, GameKind::Flappy);
//! assert_eq!(kind.title(), "Flappy Bird");
//!
//! // Directions know their unit vector (screen-down positive y)
//! assert_eq!(Direction::Up.delta(), (0, -1));
//! assert_eq!(Direction::Left.opposite(), Direction::Right);
//!
//! // Intents are plain data
//! let intent = Intent::Turn(Direction::Up);
//! assert_eq!(intent, Intent::Turn(Direction::Up));
//! ```

/// Target frame pacing in milliseconds (~60 FPS)
pub const FRAME_MS: u64 = 16;

/// Tetris board width in cells (10 columns)
pub const TETRIS_COLS: u8 = 10;

/// Tetris board height in cells (20 rows)
pub const TETRIS_ROWS: u8 = 20;

/// Tetris block edge in logical pixels
pub const TETRIS_BLOCK_PX: u32 = 30;

/// Tetris logical canvas width (300 px)
pub const TETRIS_CANVAS_W: u32 = TETRIS_COLS as u32 * TETRIS_BLOCK_PX;

/// Tetris logical canvas height (600 px)
pub const TETRIS_CANVAS_H: u32 = TETRIS_ROWS as u32 * TETRIS_BLOCK_PX;

/// Gravity interval: the falling piece drops one row per second
pub const TETRIS_DROP_MS: f32 = 1000.0;

/// Points per swept row
pub const TETRIS_LINE_SCORE: u32 = 10;

/// Snake logical canvas width (400 px)
pub const SNAKE_CANVAS_W: i16 = 400;

/// Snake logical canvas height (400 px)
pub const SNAKE_CANVAS_H: i16 = 400;

/// Snake grid cell edge in logical pixels
pub const SNAKE_GRID_PX: i16 = 20;

/// Snake step gate: 15 steps per second
pub const SNAKE_STEP_MS: f32 = 1000.0 / 15.0;

/// Snake spawn position (canvas pixels, grid-aligned)
pub const SNAKE_START: (i16, i16) = (160, 160);

/// Initial body length in cells
pub const SNAKE_START_CELLS: usize = 4;

/// First apple position before any respawn
pub const SNAKE_APPLE_START: (i16, i16) = (300, 300);

/// Points per apple
pub const SNAKE_APPLE_SCORE: u32 = 10;

/// Flappy logical canvas width
pub const FLAPPY_CANVAS_W: f32 = 250.0;

/// Flappy logical canvas height
pub const FLAPPY_CANVAS_H: f32 = 400.0;

/// Downward acceleration added to bird velocity each frame
pub const FLAPPY_GRAVITY: f32 = 0.1;

/// Velocity assigned by a flap (upward, overrides prior velocity)
pub const FLAPPY_JUMP_VY: f32 = -3.0;

/// Bird square edge in logical pixels
pub const FLAPPY_BIRD_SIZE: f32 = 30.0;

/// Bird's fixed horizontal position
pub const FLAPPY_BIRD_X: f32 = 50.0;

/// Pipe width in logical pixels
pub const FLAPPY_PIPE_W: f32 = 50.0;

/// Vertical gap the bird must pass through
pub const FLAPPY_PIPE_GAP: f32 = 120.0;

/// Pipes scroll left this many pixels per frame
pub const FLAPPY_PIPE_SPEED: f32 = 1.0;

/// A new pipe spawns once the trailing pipe is this far inside the canvas
pub const FLAPPY_PIPE_SPAWN_MARGIN: f32 = 150.0;

/// Smallest gap top allowed when spawning a pipe
pub const FLAPPY_GAP_MIN_Y: f32 = 50.0;

/// Distance kept between the gap bottom and the canvas floor at spawn
pub const FLAPPY_GAP_FLOOR_MARGIN: f32 = 150.0;

/// Card labels; the deck holds each twice
pub const MEMORY_LABELS: [&str; 4] = ["JS", "HTML", "CSS", "PHP"];

/// Wrong guesses allowed before the run is lost
pub const MEMORY_ATTEMPTS: u8 = 5;

/// How long a mismatched pair stays face-up in milliseconds
pub const MEMORY_REVEAL_MS: f32 = 1000.0;

/// Sliding puzzle edge length (3×3 grid, tiles 1-8 plus the empty slot)
pub const PUZZLE_SIDE: u8 = 3;

/// The five games, in menu order
///
/// This is the closed set of simulations the arcade can run. The legacy
/// string identifiers (`"snake"`, `"flappyBird"`, …) survive only in
/// [`GameKind::from_str`] / [`GameKind::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKind {
    Snake,
    Memory,
    Puzzle,
    Tetris,
    Flappy,
}

/// All game kinds in menu order
pub const GAME_KINDS: [GameKind; 5] = [
    GameKind::Snake,
    GameKind::Memory,
    GameKind::Puzzle,
    GameKind::Tetris,
    GameKind::Flappy,
];

impl GameKind {
    /// Parse a game kind from its legacy page identifier
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_arcade_types::GameKind;
    ///
    /// assert_eq!(GameKind::from_str("snake"), Some(GameKind::Snake));
    /// assert_eq!(GameKind::from_str("flappyBird"), Some(GameKind::Flappy));
    /// assert_eq!(GameKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "snake" => Some(GameKind::Snake),
            "memory" => Some(GameKind::Memory),
            "puzzle" => Some(GameKind::Puzzle),
            "tetris" => Some(GameKind::Tetris),
            "flappyBird" => Some(GameKind::Flappy),
            _ => None,
        }
    }

    /// The legacy page identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            GameKind::Snake => "snake",
            GameKind::Memory => "memory",
            GameKind::Puzzle => "puzzle",
            GameKind::Tetris => "tetris",
            GameKind::Flappy => "flappyBird",
        }
    }

    /// Menu title
    pub fn title(&self) -> &'static str {
        match self {
            GameKind::Snake => "Snake Game",
            GameKind::Memory => "Memory Game",
            GameKind::Puzzle => "Sliding Puzzle",
            GameKind::Tetris => "Tetris",
            GameKind::Flappy => "Flappy Bird",
        }
    }

    /// Menu description line
    pub fn description(&self) -> &'static str {
        match self {
            GameKind::Snake => "Classic Snake game. Use arrow keys to eat apples!",
            GameKind::Memory => "Flip the cards, match the pairs, and put your memory to the test!",
            GameKind::Puzzle => "Slide the tiles to arrange them in the correct order.",
            GameKind::Tetris => "Rotate & drop tetrominoes to clear lines and score points!",
            GameKind::Flappy => "Press space/up arrow to keep the bird in the air and avoid pipes!",
        }
    }
}

/// A cardinal direction in screen coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Unit vector, screen-down positive y
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_arcade_types::Direction;
    ///
    /// assert_eq!(Direction::Left.delta(), (-1, 0));
    /// assert_eq!(Direction::Down.delta(), (0, 1));
    /// ```
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    /// The reverse direction
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// True for `Left`/`Right`
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// A normalized input request, decoupled from the physical key
///
/// The input adapter produces intents; simulations drain them once per
/// tick and reject the illegal ones as no-ops. Each variant belongs to one
/// game except [`Intent::Restart`], which every simulation honors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Snake: turn onto the given axis (reversals are rejected)
    Turn(Direction),
    /// Tetris: shift the falling piece one column left
    MoveLeft,
    /// Tetris: shift the falling piece one column right
    MoveRight,
    /// Tetris: drop the falling piece one row immediately
    StepDown,
    /// Tetris: rotate the falling piece 90° clockwise
    Rotate,
    /// Flappy: set bird velocity to the jump constant (starts the run)
    Flap,
    /// Memory: move the card cursor
    Cursor(Direction),
    /// Memory: flip the card under the cursor
    Flip,
    /// Puzzle: slide the tile next to the empty slot in this direction
    Slide(Direction),
    /// Any game: re-initialize the run
    Restart,
}

/// An observable simulation event emitted by a tick
///
/// Events carry the side effects out of the simulation: the driver stops
/// scheduling on [`Event::GameOver`], the binary persists
/// [`Event::HighScore`], and views/tests observe scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Score changed; carries the new total
    Scored { total: u32 },
    /// The run reached its terminal state
    GameOver { score: u32 },
    /// Snake finished a run with a new best score worth persisting
    HighScore { score: u32 },
}
