//! Flappy Bird simulation - continuous gravity over scrolling pipes
//!
//! Unlike the gated games this one integrates every frame: velocity picks
//! up gravity, position picks up velocity, pipes slide left one pixel.
//! A flap is an override, not an impulse - it sets velocity to the jump
//! constant no matter how fast the bird was falling. The run begins in a
//! start gate: the bird hangs at canvas center until the first flap.

use tui_arcade_types::{
    Event, Intent, FLAPPY_BIRD_SIZE, FLAPPY_BIRD_X, FLAPPY_CANVAS_H, FLAPPY_CANVAS_W,
    FLAPPY_GAP_FLOOR_MARGIN, FLAPPY_GAP_MIN_Y, FLAPPY_GRAVITY, FLAPPY_JUMP_VY, FLAPPY_PIPE_GAP,
    FLAPPY_PIPE_SPAWN_MARGIN, FLAPPY_PIPE_SPEED, FLAPPY_PIPE_W,
};

use crate::intents::IntentQueue;
use crate::rng::SimpleRng;
use crate::sim::Events;

/// One pipe pair: left edge and the top of the gap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    pub x: f32,
    pub gap_y: f32,
}

/// Flappy Bird game state
#[derive(Debug, Clone)]
pub struct FlappySim {
    y: f32,
    vy: f32,
    pipes: Vec<Pipe>,
    score: u32,
    started: bool,
    game_over: bool,
    rng: SimpleRng,
}

impl FlappySim {
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let first = Pipe {
            x: FLAPPY_CANVAS_W,
            gap_y: Self::random_gap(&mut rng),
        };
        Self {
            y: FLAPPY_CANVAS_H / 2.0,
            vy: 0.0,
            pipes: vec![first],
            score: 0,
            started: false,
            game_over: false,
            rng,
        }
    }

    /// Bird top edge; the bird is a [`FLAPPY_BIRD_SIZE`] square at
    /// [`FLAPPY_BIRD_X`]
    pub fn bird_y(&self) -> f32 {
        self.y
    }

    pub fn velocity(&self) -> f32 {
        self.vy
    }

    /// Pipes in flight, monotonically decreasing x front to back
    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// False until the first flap releases the start gate
    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Advance one frame; `_elapsed_ms` is unused because the physics
    /// is tuned per-frame, not per-millisecond
    pub fn tick(&mut self, _elapsed_ms: f32, intents: &mut IntentQueue) -> Events {
        let mut events = Events::new();

        for intent in intents.take_all() {
            if self.game_over {
                break;
            }
            if intent == Intent::Flap {
                if self.started {
                    // Override, never additive.
                    self.vy = FLAPPY_JUMP_VY;
                } else {
                    // First flap opens the gate; the bird starts falling
                    // from rest.
                    self.started = true;
                }
            }
        }

        if !self.started || self.game_over {
            return events;
        }

        self.vy += FLAPPY_GRAVITY;
        self.y += self.vy;

        for pipe in &mut self.pipes {
            pipe.x -= FLAPPY_PIPE_SPEED;
        }

        // Append once the trailing pipe has cleared the spawn threshold.
        if self
            .pipes
            .last()
            .is_some_and(|p| p.x < FLAPPY_CANVAS_W - FLAPPY_PIPE_SPAWN_MARGIN)
        {
            let gap_y = Self::random_gap(&mut self.rng);
            self.pipes.push(Pipe {
                x: FLAPPY_CANVAS_W,
                gap_y,
            });
        }

        // Cull the lead pipe once it fully exits; passing it scores.
        if self
            .pipes
            .first()
            .is_some_and(|p| p.x + FLAPPY_PIPE_W < 0.0)
        {
            self.pipes.remove(0);
            self.score += 1;
            events.push(Event::Scored { total: self.score });
        }

        if self.collides() {
            self.game_over = true;
            events.push(Event::GameOver { score: self.score });
        }

        events
    }

    /// Terminal check: canvas bounds, then pipe overlap outside the gap
    fn collides(&self) -> bool {
        if self.y + FLAPPY_BIRD_SIZE > FLAPPY_CANVAS_H || self.y < 0.0 {
            return true;
        }
        self.pipes.iter().any(|pipe| {
            let in_x = FLAPPY_BIRD_X + FLAPPY_BIRD_SIZE > pipe.x && FLAPPY_BIRD_X < pipe.x + FLAPPY_PIPE_W;
            in_x && (self.y < pipe.gap_y || self.y + FLAPPY_BIRD_SIZE > pipe.gap_y + FLAPPY_PIPE_GAP)
        })
    }

    /// Gap top uniform in [50, canvas - gap - 150)
    fn random_gap(rng: &mut SimpleRng) -> f32 {
        let max = FLAPPY_CANVAS_H - FLAPPY_PIPE_GAP - FLAPPY_GAP_FLOOR_MARGIN;
        rng.next_f32_range(FLAPPY_GAP_MIN_Y, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(sim: &mut FlappySim) -> Events {
        let mut intents = IntentQueue::new();
        sim.tick(16.0, &mut intents)
    }

    fn flap(sim: &mut FlappySim) -> Events {
        let mut intents = IntentQueue::new();
        intents.push(Intent::Flap);
        sim.tick(16.0, &mut intents)
    }

    fn started(seed: u32) -> FlappySim {
        let mut sim = FlappySim::new(seed);
        flap(&mut sim);
        sim
    }

    #[test]
    fn test_start_gate_holds_the_bird() {
        let mut sim = FlappySim::new(1);
        for _ in 0..100 {
            frame(&mut sim);
        }
        assert_eq!(sim.bird_y(), FLAPPY_CANVAS_H / 2.0);
        assert_eq!(sim.velocity(), 0.0);
        assert_eq!(sim.pipes().len(), 1);
    }

    #[test]
    fn test_first_flap_starts_from_rest() {
        let mut sim = FlappySim::new(1);
        flap(&mut sim);
        assert!(sim.started());
        // The opening flap starts the fall; it does not jump.
        assert!((sim.velocity() - FLAPPY_GRAVITY).abs() < 1e-6);
    }

    #[test]
    fn test_gravity_integrates_per_frame() {
        let mut sim = started(1);
        let y0 = sim.bird_y();
        frame(&mut sim);
        // vy goes 0.1 -> 0.2, y moves by the new vy.
        assert!((sim.velocity() - 0.2).abs() < 1e-6);
        assert!((sim.bird_y() - (y0 + 0.2)).abs() < 1e-6);
    }

    #[test]
    fn test_flap_overrides_any_velocity() {
        let mut sim = started(1);
        // Build up falling speed.
        for _ in 0..40 {
            frame(&mut sim);
        }
        assert!(sim.velocity() > 3.0);
        flap(&mut sim);
        // Set, not added: the frame then integrates one gravity step.
        assert!((sim.velocity() - (FLAPPY_JUMP_VY + FLAPPY_GRAVITY)).abs() < 1e-6);
    }

    #[test]
    fn test_pipes_scroll_and_spawn() {
        let mut sim = started(1);
        let x0 = sim.pipes()[0].x;
        frame(&mut sim);
        assert!((sim.pipes()[0].x - (x0 - FLAPPY_PIPE_SPEED)).abs() < 1e-6);

        // Keep the bird alive with periodic flaps until the trailing pipe
        // crosses the spawn threshold.
        for i in 0..160 {
            if i % 60 == 0 {
                flap(&mut sim);
            } else {
                frame(&mut sim);
            }
            assert!(!sim.game_over(), "died at frame {i}");
        }
        assert!(sim.pipes().len() >= 2);
        // Monotonically decreasing x, front to back.
        for pair in sim.pipes().windows(2) {
            assert!(pair[0].x < pair[1].x);
        }
    }

    #[test]
    fn test_gap_spawns_inside_tuning_band() {
        let mut rng = SimpleRng::new(5);
        for _ in 0..500 {
            let gap = FlappySim::random_gap(&mut rng);
            assert!((FLAPPY_GAP_MIN_Y..130.0).contains(&gap), "gap {gap}");
        }
    }

    #[test]
    fn test_floor_is_terminal() {
        let mut sim = started(1);
        let mut over = None;
        for i in 0..200 {
            let events = frame(&mut sim);
            if events.iter().any(|e| matches!(e, Event::GameOver { .. })) {
                over = Some(i);
                break;
            }
        }
        // Free fall from center hits the floor well inside 200 frames.
        assert!(over.is_some());
        assert!(sim.game_over());
        assert!(sim.bird_y() + FLAPPY_BIRD_SIZE > FLAPPY_CANVAS_H);
    }

    #[test]
    fn test_ceiling_is_terminal() {
        let mut sim = started(1);
        // Spam flaps; each one resets vy to -3, which outruns gravity.
        for _ in 0..300 {
            flap(&mut sim);
            if sim.game_over() {
                break;
            }
        }
        assert!(sim.game_over());
        assert!(sim.bird_y() < 0.0);
    }

    #[test]
    fn test_pipe_overlap_outside_gap_is_terminal() {
        let mut sim = started(1);
        // Park a pipe on the bird with the gap far away.
        sim.pipes = vec![Pipe {
            x: FLAPPY_BIRD_X,
            gap_y: 300.0,
        }];
        let events = frame(&mut sim);
        assert!(sim.game_over());
        assert!(events.iter().any(|e| matches!(e, Event::GameOver { .. })));
    }

    #[test]
    fn test_pipe_overlap_inside_gap_survives() {
        let mut sim = started(1);
        sim.y = 250.0;
        sim.vy = 0.0;
        sim.pipes = vec![Pipe {
            x: FLAPPY_BIRD_X,
            gap_y: 200.0,
        }];
        frame(&mut sim);
        assert!(!sim.game_over());
    }

    #[test]
    fn test_culled_pipe_scores() {
        let mut sim = started(1);
        sim.y = 200.0;
        sim.vy = 0.0;
        sim.pipes = vec![
            Pipe {
                x: -FLAPPY_PIPE_W - 0.5,
                gap_y: 130.0,
            },
            Pipe {
                x: 200.0,
                gap_y: 130.0,
            },
        ];
        let events = frame(&mut sim);
        assert!(events.contains(&Event::Scored { total: 1 }));
        assert_eq!(sim.score(), 1);
        assert_eq!(sim.pipes().len(), 1);
    }

    #[test]
    fn test_input_ignored_after_terminal() {
        let mut sim = started(1);
        sim.game_over = true;
        let y = sim.bird_y();
        flap(&mut sim);
        frame(&mut sim);
        assert_eq!(sim.bird_y(), y);
    }
}
