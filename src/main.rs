//! Bridge Runner entry point
//!
//! Sets up the terminal, wires the frontend collaborators together, and
//! runs the frame-clamped 60 Hz loop: drain input, tick the simulation,
//! route events to audio/highscores, draw.

use std::io::{self, stdout};
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{self, ClearType},
};

use bridge_runner::assets::Assets;
use bridge_runner::audio::AudioManager;
use bridge_runner::consts::TICK_RATE;
use bridge_runner::render::Renderer;
use bridge_runner::sim::{GameEvent, GameState, TickInput, tick};
use bridge_runner::{HighScores, Settings};

fn main() -> io::Result<()> {
    env_logger::init();

    let settings = Settings::load();
    let assets = Assets::load(Path::new("."));
    let audio = AudioManager::new(&assets, &settings);
    let renderer = Renderer::new(&assets.theme);
    let mut highscores = HighScores::load();

    let seed = seed_from_clock();
    log::info!("Bridge Runner starting with seed {}", seed);
    let mut state = GameState::new(seed);

    let mut out = stdout();
    terminal::enable_raw_mode()?;
    execute!(
        out,
        terminal::EnterAlternateScreen,
        terminal::Clear(ClearType::All),
        cursor::Hide
    )?;

    let result = run(
        &mut out,
        &mut state,
        &renderer,
        &audio,
        &settings,
        &mut highscores,
    );

    execute!(out, cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    log::info!("Bridge Runner exiting");
    result
}

fn run(
    out: &mut io::Stdout,
    state: &mut GameState,
    renderer: &Renderer,
    audio: &AudioManager,
    settings: &Settings,
    highscores: &mut HighScores,
) -> io::Result<()> {
    let frame = Duration::from_micros(1_000_000 / TICK_RATE as u64);

    loop {
        let frame_start = Instant::now();

        // Drain every pending input before mutating state so a jump or
        // restart registered this frame applies within this tick.
        let mut input = TickInput::default();
        let mut quit = false;
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => quit = true,
                    // One button, double duty: jump while running,
                    // restart while game over
                    KeyCode::Char(' ') => {
                        input.jump = true;
                        input.restart = true;
                    }
                    _ => {}
                }
            }
        }
        if quit {
            return Ok(());
        }

        tick(state, &input);

        let events: Vec<GameEvent> = state.events.drain(..).collect();
        for event in &events {
            audio.handle_event(*event);
            if *event == GameEvent::GameOver {
                let distance = state.distance_m();
                if let Some(rank) = highscores.add_distance(distance, state.seed) {
                    log::info!("run of {}m entered the leaderboard at #{}", distance, rank);
                    highscores.save();
                }
            }
        }

        let best = if settings.show_best {
            highscores.best()
        } else {
            None
        };
        renderer.draw(out, state, best, settings.show_distance)?;

        // Frame-rate clamp: one simulation step per rendered frame
        if let Some(remaining) = frame.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}

/// Seed a run from the wall clock; logged at startup so runs can be replayed
fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
