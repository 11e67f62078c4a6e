//! Snake simulation - wrap-around grid snake
//!
//! The snake lives on a 400x400 logical canvas in 20 px grid steps and
//! advances 15 times per second of accumulated frame time. Walls wrap;
//! the only way to die is to run into your own body. Turns are
//! perpendicular-only: a turn onto the axis currently in motion is
//! rejected, which is what makes an instant reversal impossible.

use std::collections::VecDeque;

use tui_arcade_types::{
    Direction, Event, Intent, SNAKE_APPLE_SCORE, SNAKE_APPLE_START, SNAKE_CANVAS_H, SNAKE_CANVAS_W,
    SNAKE_GRID_PX, SNAKE_START, SNAKE_START_CELLS, SNAKE_STEP_MS,
};

use crate::intents::IntentQueue;
use crate::rng::SimpleRng;
use crate::sim::Events;

/// Snake game state
///
/// The body is head-first: index 0 is the head, the tail is truncated
/// past `max_cells` after each step. The body starts empty and grows to
/// `max_cells` over the first steps, exactly like a fresh run re-entering
/// the canvas.
#[derive(Debug, Clone)]
pub struct SnakeSim {
    x: i16,
    y: i16,
    dx: i16,
    dy: i16,
    cells: VecDeque<(i16, i16)>,
    max_cells: usize,
    apple: (i16, i16),
    score: u32,
    high_score: u32,
    step_acc: f32,
    game_over: bool,
    rng: SimpleRng,
}

impl SnakeSim {
    pub fn new(seed: u32, high_score: u32) -> Self {
        Self {
            x: SNAKE_START.0,
            y: SNAKE_START.1,
            dx: SNAKE_GRID_PX,
            dy: 0,
            cells: VecDeque::new(),
            max_cells: SNAKE_START_CELLS,
            apple: SNAKE_APPLE_START,
            score: 0,
            high_score,
            step_acc: 0.0,
            game_over: false,
            rng: SimpleRng::new(seed),
        }
    }

    pub fn head(&self) -> (i16, i16) {
        (self.x, self.y)
    }

    /// Body cells, head-first
    pub fn cells(&self) -> &VecDeque<(i16, i16)> {
        &self.cells
    }

    pub fn apple(&self) -> (i16, i16) {
        self.apple
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Advance one tick; the step itself fires only when the 1000/15 ms
    /// gate is crossed. Returns the events plus whether a step fired.
    ///
    /// Turn intents apply immediately (between steps), matching the key
    /// handler of a per-keydown direction change: two quick perpendicular
    /// turns can legally reverse the snake across two steps.
    pub fn tick(&mut self, elapsed_ms: f32, intents: &mut IntentQueue) -> (Events, bool) {
        let mut events = Events::new();

        for intent in intents.take_all() {
            if self.game_over {
                break;
            }
            match intent {
                Intent::Turn(dir) => self.try_turn(dir),
                _ => {}
            }
        }

        if self.game_over {
            return (events, false);
        }

        self.step_acc += elapsed_ms;
        if self.step_acc < SNAKE_STEP_MS {
            return (events, false);
        }
        self.step_acc = 0.0;

        self.step(&mut events);
        (events, true)
    }

    /// Turns are only honored onto the perpendicular axis
    fn try_turn(&mut self, dir: Direction) {
        let legal = if dir.is_horizontal() {
            self.dx == 0
        } else {
            self.dy == 0
        };
        if legal {
            let (ux, uy) = dir.delta();
            self.dx = ux * SNAKE_GRID_PX;
            self.dy = uy * SNAKE_GRID_PX;
        }
    }

    /// One grid advance: move, wrap, grow/truncate, eat, collide
    fn step(&mut self, events: &mut Events) {
        self.x += self.dx;
        self.y += self.dy;

        // Wrap around the canvas edges.
        if self.x < 0 {
            self.x = SNAKE_CANVAS_W - SNAKE_GRID_PX;
        } else if self.x >= SNAKE_CANVAS_W {
            self.x = 0;
        }
        if self.y < 0 {
            self.y = SNAKE_CANVAS_H - SNAKE_GRID_PX;
        } else if self.y >= SNAKE_CANVAS_H {
            self.y = 0;
        }

        self.cells.push_front((self.x, self.y));
        if self.cells.len() > self.max_cells {
            self.cells.pop_back();
        }

        if (self.x, self.y) == self.apple {
            self.max_cells += 1;
            self.score += SNAKE_APPLE_SCORE;
            events.push(Event::Scored { total: self.score });
            self.apple = self.random_apple();
        }

        // Self collision: the new head against every trailing cell, in
        // the same step that produced the move.
        if self
            .cells
            .iter()
            .skip(1)
            .any(|&cell| cell == (self.x, self.y))
        {
            self.game_over = true;
            events.push(Event::GameOver { score: self.score });
            if self.score > self.high_score {
                self.high_score = self.score;
                events.push(Event::HighScore { score: self.score });
            }
        }
    }

    /// Best-effort apple placement: uniform over the grid minus the last
    /// row and column, with no occupancy guard. An apple can land on the
    /// body; the snake just eats it sooner.
    fn random_apple(&mut self) -> (i16, i16) {
        let max_x = (SNAKE_CANVAS_W / SNAKE_GRID_PX - 1) as u32;
        let max_y = (SNAKE_CANVAS_H / SNAKE_GRID_PX - 1) as u32;
        (
            self.rng.next_range(max_x) as i16 * SNAKE_GRID_PX,
            self.rng.next_range(max_y) as i16 * SNAKE_GRID_PX,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One gated step worth of time
    const STEP: f32 = SNAKE_STEP_MS + 0.1;

    fn step_n(sim: &mut SnakeSim, n: usize) {
        let mut intents = IntentQueue::new();
        for _ in 0..n {
            sim.tick(STEP, &mut intents);
        }
    }

    fn turn(sim: &mut SnakeSim, dir: Direction) {
        let mut intents = IntentQueue::new();
        intents.push(Intent::Turn(dir));
        sim.tick(0.0, &mut intents);
    }

    #[test]
    fn test_step_gate_accumulates() {
        let mut sim = SnakeSim::new(1, 0);
        let mut intents = IntentQueue::new();

        let (_, stepped) = sim.tick(30.0, &mut intents);
        assert!(!stepped);
        let (_, stepped) = sim.tick(40.0, &mut intents);
        assert!(stepped, "30 + 40 ms crosses the 1000/15 ms gate");
        assert_eq!(sim.head(), (180, 160));
    }

    #[test]
    fn test_eight_ticks_straight_ahead() {
        // The canonical run: start (160,160) moving +20 x, no input, no
        // apple on the path. After 8 steps the head is at (320,160) and
        // the body holds its full 4 cells.
        let mut sim = SnakeSim::new(1, 0);
        step_n(&mut sim, 8);
        assert_eq!(sim.head(), (320, 160));
        assert_eq!(sim.cells().len(), 4);
        assert!(!sim.game_over());
    }

    #[test]
    fn test_head_wraps_right_edge() {
        let mut sim = SnakeSim::new(1, 0);
        // 160 -> 380 is 11 steps; one more wraps to 0.
        step_n(&mut sim, 12);
        assert_eq!(sim.head(), (0, 160));
    }

    #[test]
    fn test_head_stays_in_bounds_under_random_play() {
        let mut sim = SnakeSim::new(42, 0);
        let mut dirs = SimpleRng::new(99);
        for _ in 0..500 {
            let dir = match dirs.next_range(4) {
                0 => Direction::Left,
                1 => Direction::Right,
                2 => Direction::Up,
                _ => Direction::Down,
            };
            turn(&mut sim, dir);
            step_n(&mut sim, 1);
            if sim.game_over() {
                break;
            }
            let (x, y) = sim.head();
            assert!((0..SNAKE_CANVAS_W).contains(&x));
            assert!((0..SNAKE_CANVAS_H).contains(&y));
        }
    }

    #[test]
    fn test_reversal_is_rejected() {
        let mut sim = SnakeSim::new(1, 0);
        // Moving right; a left turn shares the axis and must be ignored.
        turn(&mut sim, Direction::Left);
        step_n(&mut sim, 1);
        assert_eq!(sim.head(), (180, 160));

        // Perpendicular turns are honored.
        turn(&mut sim, Direction::Up);
        step_n(&mut sim, 1);
        assert_eq!(sim.head(), (180, 140));
    }

    #[test]
    fn test_apple_grows_and_scores() {
        let mut sim = SnakeSim::new(1, 0);
        // Plant the apple two steps ahead on the path.
        sim.apple = (200, 160);
        let before_max = sim.max_cells;
        let apple_before = sim.apple;

        let mut intents = IntentQueue::new();
        sim.tick(STEP, &mut intents);
        let (events, _) = sim.tick(STEP, &mut intents);

        assert_eq!(sim.max_cells, before_max + 1);
        assert_eq!(sim.score(), 10);
        assert!(events.contains(&Event::Scored { total: 10 }));
        // Recomputed, even if it could theoretically land on the same cell.
        assert_ne!(sim.apple(), apple_before);
    }

    #[test]
    fn test_self_collision_is_terminal_and_folds_high_score() {
        let mut sim = SnakeSim::new(1, 5);
        sim.score = 30;
        sim.max_cells = 8;
        // Grow a body long enough to turn into.
        step_n(&mut sim, 6);

        // A tight clockwise box runs the head into the body.
        turn(&mut sim, Direction::Up);
        step_n(&mut sim, 1);
        turn(&mut sim, Direction::Left);
        step_n(&mut sim, 1);
        turn(&mut sim, Direction::Down);
        let mut intents = IntentQueue::new();
        let (events, _) = sim.tick(STEP, &mut intents);

        assert!(sim.game_over());
        assert!(events.contains(&Event::GameOver { score: 30 }));
        assert!(events.contains(&Event::HighScore { score: 30 }));
        assert_eq!(sim.high_score(), 30);
    }

    #[test]
    fn test_no_high_score_event_below_previous_best() {
        let mut sim = SnakeSim::new(1, 100);
        sim.max_cells = 8;
        step_n(&mut sim, 6);

        turn(&mut sim, Direction::Up);
        step_n(&mut sim, 1);
        turn(&mut sim, Direction::Left);
        step_n(&mut sim, 1);
        turn(&mut sim, Direction::Down);
        let mut intents = IntentQueue::new();
        let (events, _) = sim.tick(STEP, &mut intents);

        assert!(sim.game_over());
        assert!(!events.iter().any(|e| matches!(e, Event::HighScore { .. })));
        assert_eq!(sim.high_score(), 100);
    }

    #[test]
    fn test_input_ignored_after_terminal() {
        let mut sim = SnakeSim::new(1, 0);
        sim.game_over = true;
        let head = sim.head();
        turn(&mut sim, Direction::Up);
        step_n(&mut sim, 3);
        assert_eq!(sim.head(), head);
    }

    #[test]
    fn test_apple_respawn_stays_on_grid() {
        let mut sim = SnakeSim::new(7, 0);
        for _ in 0..200 {
            let (x, y) = sim.random_apple();
            assert_eq!(x % SNAKE_GRID_PX, 0);
            assert_eq!(y % SNAKE_GRID_PX, 0);
            // The last row and column are never sampled.
            assert!((0..SNAKE_CANVAS_W - SNAKE_GRID_PX).contains(&x));
            assert!((0..SNAKE_CANVAS_H - SNAKE_GRID_PX).contains(&y));
        }
    }
}
