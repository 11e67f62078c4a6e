//! Terminal arcade runner (default binary).
//!
//! This is the gameplay entrypoint. It uses crossterm for input and a
//! custom framebuffer-based renderer (no ratatui widgets/layout). The
//! loop alternates between the game menu and whichever simulation the
//! player picked, at roughly 60 frames per second.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEventKind};

use tui_arcade::core::Game;
use tui_arcade::engine::{HighScoreStore, LoopDriver};
use tui_arcade::input::{handle_key_event, handle_menu_key, should_quit, MenuNav};
use tui_arcade::term::{
    selected_kind, Cell, FlappyView, FrameBuffer, MemoryView, MenuView, PixelSurface, PuzzleView,
    SnakeView, TerminalRenderer, TetrisView, Viewport,
};
use tui_arcade::types::{Event, FRAME_MS, GAME_KINDS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Menu,
    Playing,
}

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    // Score persistence is best effort; a read-only home directory must
    // never keep the arcade from running.
    let scores = HighScoreStore::open().ok();
    let snake_high = scores.as_ref().map(|s| s.load()).unwrap_or(0);

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32)
        .unwrap_or(1);
    let mut driver = LoopDriver::new(seed, snake_high);

    let mut screen = Screen::Menu;
    let mut selected = 0usize;
    let mut fb = FrameBuffer::new(0, 0);
    let mut surface = PixelSurface::new(0, 0);

    let start = Instant::now();
    let frame = Duration::from_millis(FRAME_MS);
    let mut next_frame = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        match screen {
            Screen::Menu => MenuView.render_into(selected, viewport, &mut fb),
            Screen::Playing => render_game(driver.game(), &mut surface, viewport, &mut fb),
        }
        term.draw_swap(&mut fb)?;

        // Input with timeout until the next frame.
        let timeout = next_frame.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match screen {
                        Screen::Menu => {
                            if key.code == KeyCode::Esc {
                                return Ok(());
                            }
                            match handle_menu_key(key) {
                                Some(MenuNav::Up) => {
                                    selected =
                                        selected.checked_sub(1).unwrap_or(GAME_KINDS.len() - 1);
                                }
                                Some(MenuNav::Down) => {
                                    selected = (selected + 1) % GAME_KINDS.len();
                                }
                                Some(MenuNav::Select) => {
                                    if let Some(kind) = selected_kind(selected) {
                                        driver.start(kind);
                                        screen = Screen::Playing;
                                    }
                                }
                                Some(MenuNav::Pick(i)) => {
                                    if let Some(kind) = selected_kind(i) {
                                        selected = i;
                                        driver.start(kind);
                                        screen = Screen::Playing;
                                    }
                                }
                                None => {}
                            }
                        }
                        Screen::Playing => {
                            if key.code == KeyCode::Esc {
                                driver.stop();
                                screen = Screen::Menu;
                            } else if let Some(game) = driver.game() {
                                if let Some(intent) = handle_key_event(game.kind(), key) {
                                    driver.push_intent(intent);
                                }
                            }
                        }
                    }
                }
                TermEvent::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let now = Instant::now();
        if now >= next_frame {
            next_frame = now + frame;
            let now_ms = start.elapsed().as_secs_f64() * 1000.0;
            let tick = driver.frame(now_ms);
            for ev in &tick.events {
                if let Event::HighScore { score } = *ev {
                    if let Some(store) = &scores {
                        let _ = store.save(score);
                    }
                }
            }
        }
    }
}

fn render_game(
    game: Option<&Game>,
    surface: &mut PixelSurface,
    viewport: Viewport,
    fb: &mut FrameBuffer,
) {
    match game {
        Some(Game::Snake(sim)) => SnakeView.render_into(sim, surface, viewport, fb),
        Some(Game::Tetris(sim)) => TetrisView.render_into(sim, surface, viewport, fb),
        Some(Game::Flappy(sim)) => FlappyView.render_into(sim, surface, viewport, fb),
        Some(Game::Memory(sim)) => MemoryView.render_into(sim, viewport, fb),
        Some(Game::Puzzle(sim)) => PuzzleView.render_into(sim, viewport, fb),
        None => {
            fb.resize(viewport.width, viewport.height);
            fb.clear(Cell::default());
        }
    }
}
