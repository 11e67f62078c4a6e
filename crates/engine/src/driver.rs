//! The frame loop driver.
//!
//! Lifecycle is a three-phase machine:
//!
//! ```text
//! Idle --start--> Running --GameOver--> Terminal
//!                    ^                      |
//!                    +------- Restart ------+
//! ```
//!
//! `Idle` means no simulation is loaded (the menu is up). `Terminal`
//! keeps the finished simulation around so the view can hold the final
//! frame; only a Restart intent leaves it. Time is passed in by the
//! caller as milliseconds, so tests drive the clock explicitly.

use tui_arcade_core::{Game, IntentQueue, SimpleRng, Tick};
use tui_arcade_types::{Event, GameKind, Intent};

/// Longest elapsed span a single frame will simulate. Anything larger
/// (a suspended terminal, a debugger pause) is treated as one frame.
const MAX_FRAME_MS: f32 = 250.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Terminal,
}

pub struct LoopDriver {
    game: Option<Game>,
    phase: Phase,
    queue: IntentQueue,
    last_now_ms: Option<f64>,
    seeder: SimpleRng,
    snake_high: u32,
}

impl LoopDriver {
    /// A driver with no game loaded. `seed` feeds the internal seed
    /// stream; every started or restarted run draws a fresh seed from it.
    pub fn new(seed: u32, snake_high: u32) -> Self {
        Self {
            game: None,
            phase: Phase::Idle,
            queue: IntentQueue::new(),
            last_now_ms: None,
            seeder: SimpleRng::new(seed),
            snake_high,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The loaded simulation, if any.
    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    /// Best persisted-worthy snake score seen so far, folded over
    /// [`Event::HighScore`] events.
    pub fn snake_high(&self) -> u32 {
        self.snake_high
    }

    /// True while frames should keep coming. `Terminal` still wants
    /// frames so the game-over overlay can appear and a Restart intent
    /// gets processed; only `Idle` sleeps.
    pub fn wants_frame(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Load a fresh simulation of `kind` and enter `Running`.
    pub fn start(&mut self, kind: GameKind) {
        let seed = self.seeder.next_u32();
        self.game = Some(Game::new(kind, seed, self.snake_high));
        self.phase = Phase::Running;
        self.queue.clear();
        self.last_now_ms = None;
    }

    /// Unload the simulation and go back to `Idle`.
    pub fn stop(&mut self) {
        self.game = None;
        self.phase = Phase::Idle;
        self.queue.clear();
        self.last_now_ms = None;
    }

    /// Queue a player intent for the next frame.
    ///
    /// Restart is handled here rather than in the simulations: it swaps
    /// in a brand-new run of the same kind, from any phase but `Idle`.
    pub fn push_intent(&mut self, intent: Intent) {
        match self.phase {
            Phase::Idle => {}
            _ if intent == Intent::Restart => {
                if let Some(kind) = self.game.as_ref().map(|g| g.kind()) {
                    self.start(kind);
                }
            }
            Phase::Running => {
                self.queue.push(intent);
            }
            // A finished run ignores everything else.
            Phase::Terminal => {}
        }
    }

    /// Advance the simulation to `now_ms`.
    ///
    /// Returns the tick result; `redraw` is false only when nothing
    /// observable happened (a sub-step Snake frame). Outside `Running`
    /// this is a no-op that never requests a redraw.
    pub fn frame(&mut self, now_ms: f64) -> Tick {
        if self.phase != Phase::Running {
            return Tick::default();
        }
        let elapsed = match self.last_now_ms {
            Some(last) => ((now_ms - last) as f32).clamp(0.0, MAX_FRAME_MS),
            None => 0.0,
        };
        self.last_now_ms = Some(now_ms);

        let Some(game) = self.game.as_mut() else {
            return Tick::default();
        };
        let tick = game.tick(elapsed, &mut self.queue);

        for event in &tick.events {
            match *event {
                Event::GameOver { .. } => self.phase = Phase::Terminal,
                Event::HighScore { score } => self.snake_high = self.snake_high.max(score),
                Event::Scored { .. } => {}
            }
        }
        tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_arcade_types::{Direction, FLAPPY_CANVAS_H};

    #[test]
    fn test_idle_driver_ignores_everything() {
        let mut driver = LoopDriver::new(1, 0);
        assert_eq!(driver.phase(), Phase::Idle);
        assert!(!driver.wants_frame());
        driver.push_intent(Intent::Flap);
        let tick = driver.frame(16.0);
        assert!(tick.events.is_empty());
        assert!(!tick.redraw);
        assert!(driver.game().is_none());
    }

    #[test]
    fn test_start_enters_running_with_requested_kind() {
        let mut driver = LoopDriver::new(1, 0);
        driver.start(GameKind::Puzzle);
        assert_eq!(driver.phase(), Phase::Running);
        assert_eq!(driver.game().unwrap().kind(), GameKind::Puzzle);
        assert!(driver.wants_frame());
    }

    #[test]
    fn test_game_over_moves_to_terminal_and_blocks_input() {
        let mut driver = LoopDriver::new(1, 0);
        driver.start(GameKind::Flappy);
        driver.push_intent(Intent::Flap);
        // Let the bird fall off the floor.
        let mut now = 0.0;
        for _ in 0..(FLAPPY_CANVAS_H as usize) {
            now += 16.0;
            let tick = driver.frame(now);
            if tick
                .events
                .iter()
                .any(|e| matches!(e, Event::GameOver { .. }))
            {
                break;
            }
        }
        assert_eq!(driver.phase(), Phase::Terminal);

        // Terminal swallows ordinary intents and stops ticking.
        driver.push_intent(Intent::Flap);
        let tick = driver.frame(now + 16.0);
        assert!(tick.events.is_empty());
        assert!(!tick.redraw);
    }

    #[test]
    fn test_restart_replaces_the_run_from_terminal() {
        let mut driver = LoopDriver::new(1, 0);
        driver.start(GameKind::Flappy);
        driver.push_intent(Intent::Flap);
        let mut now = 0.0;
        while driver.phase() == Phase::Running {
            now += 16.0;
            driver.frame(now);
        }
        driver.push_intent(Intent::Restart);
        assert_eq!(driver.phase(), Phase::Running);
        let game = driver.game().unwrap();
        assert_eq!(game.kind(), GameKind::Flappy);
        assert_eq!(game.score(), 0);
        assert!(!game.terminal());
    }

    #[test]
    fn test_restart_mid_run_resets_score() {
        let mut driver = LoopDriver::new(1, 0);
        driver.start(GameKind::Puzzle);
        driver.push_intent(Intent::Slide(Direction::Left));
        driver.push_intent(Intent::Slide(Direction::Right));
        driver.frame(16.0);
        driver.push_intent(Intent::Restart);
        driver.frame(32.0);
        assert_eq!(driver.game().unwrap().score(), 0);
    }

    #[test]
    fn test_elapsed_is_clamped_after_a_stall() {
        let mut driver = LoopDriver::new(1, 0);
        driver.start(GameKind::Snake);
        driver.frame(0.0);
        // A five second stall must not advance the snake 75 steps.
        driver.frame(5000.0);
        if let Some(Game::Snake(sim)) = driver.game() {
            // 250 ms covers at most 3 step intervals.
            assert!(sim.cells().front().is_some());
            let (hx, _) = *sim.cells().front().unwrap();
            assert!(hx <= 160 + 3 * 20);
        } else {
            panic!("expected snake");
        }
    }

    #[test]
    fn test_high_score_event_folds_into_driver() {
        let mut driver = LoopDriver::new(1, 7);
        assert_eq!(driver.snake_high(), 7);
        driver.start(GameKind::Snake);
        // Fold is monotonic regardless of event order.
        driver.snake_high = driver.snake_high.max(30);
        assert_eq!(driver.snake_high(), 30);
    }

    #[test]
    fn test_stop_returns_to_idle() {
        let mut driver = LoopDriver::new(1, 0);
        driver.start(GameKind::Memory);
        driver.stop();
        assert_eq!(driver.phase(), Phase::Idle);
        assert!(driver.game().is_none());
    }
}
