//! Terminal stand-in for the LCD and buttons.
//!
//! Keys (one per line): `n` next pit, `p` previous pit, `s` select,
//! `c` force turn switch, `q` quit. An optional first argument names a JSON
//! config file. Set `RUST_LOG=debug` to trace moves.

use std::io::{self, BufRead, Write};

use mancala_lcd::{
    BoardEngine, InputController, InputEvent, InputOutcome, MancalaConfig, Presenter, TextDisplay,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn parse_key(line: &str) -> Option<InputEvent> {
    match line.trim() {
        "n" => Some(InputEvent::Next),
        "p" => Some(InputEvent::Previous),
        "s" => Some(InputEvent::Confirm),
        "c" => Some(InputEvent::ForceSwitch),
        _ => None,
    }
}

fn load_config() -> Result<MancalaConfig, Box<dyn std::error::Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            info!(%path, "Loading config");
            Ok(MancalaConfig::from_json(&std::fs::read_to_string(path)?)?)
        }
        None => Ok(MancalaConfig::default()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = load_config()?;
    let presenter = Presenter::new(TextDisplay::from_config(&config.display), config.display);
    let mut engine = BoardEngine::new(config, presenter)?;
    let snapshot = engine.snapshot();
    engine.sink_mut().render_board(&snapshot);
    let mut controller = InputController::new(engine);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write!(out, "{}", controller.engine().sink().display())?;
    out.flush()?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim() == "q" {
            break;
        }
        let Some(event) = parse_key(&line) else {
            writeln!(out, "keys: n p s c q")?;
            continue;
        };
        match controller.handle(event) {
            InputOutcome::CursorMoved { index, cell } => {
                writeln!(out, "cursor pit {index} at {cell:?}")?;
            }
            InputOutcome::Rejected(err) => writeln!(out, "rejected: {err}")?,
            _ => {}
        }
        write!(out, "{}", controller.engine().sink().display())?;
        out.flush()?;
        if controller.engine().is_terminal() {
            break;
        }
    }
    Ok(())
}
