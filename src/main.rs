//! Paddle Pong entry point
//!
//! Sets up the terminal and runs the fixed-rate frame loop until quit.

use std::io;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use paddle_pong::platform::{FixedRateClock, FrameClock, Terminal, TerminalGuard};
use paddle_pong::{App, Flow, Tuning, render};

fn main() -> Result<()> {
    // Logs go to stderr; redirect it (2>pong.log) to keep the screen clean
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    log::info!("Paddle Pong starting...");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    let tuning = match std::env::var_os("PONG_TUNING") {
        Some(path) => load_tuning(Path::new(&path))?,
        None => Tuning::default(),
    };
    let mut clock = FixedRateClock::new(tuning.frame_rate);
    let mut app = App::new(seed, tuning);

    let mut out = io::stdout();
    let guard = TerminalGuard::enter(&mut out).context("failed to prepare terminal")?;
    let mut terminal = Terminal::new(out, &guard).context("failed to query terminal size")?;

    loop {
        let now = clock.now();
        let input = terminal.poll(now).context("failed to read terminal input")?;
        if app.update(&input) == Flow::Quit {
            break;
        }
        for event in app.last_events() {
            log::trace!("{:?}", event);
        }
        terminal
            .present(&render(&app, now))
            .context("failed to draw frame")?;
        clock.wait_for_next_tick();
    }

    drop(guard);
    log::info!("Paddle Pong exiting");
    Ok(())
}

fn load_tuning(path: &Path) -> Result<Tuning> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read tuning file {}", path.display()))?;
    let tuning = Tuning::from_json(&json)
        .with_context(|| format!("invalid tuning file {}", path.display()))?;
    log::info!("Loaded tuning overrides from {}", path.display());
    Ok(tuning)
}
