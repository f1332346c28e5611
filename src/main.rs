mod display;

use std::io::{self, stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};
use log::{info, warn};

use ascii_shooter::{Command, Game, GameConfig};

/// Rows kept free under the arena for the status line and the help text.
const FOOTER_ROWS: u16 = 2;

const SEED_VAR: &str = "ASCII_SHOOTER_SEED";

// ── Configuration ─────────────────────────────────────────────────────────────

fn build_config() -> io::Result<GameConfig> {
    let (width, height) = terminal::size()?;
    let mut config = GameConfig::with_size(
        i32::from(width),
        i32::from(height.saturating_sub(FOOTER_ROWS)),
    );
    if let Ok(raw) = std::env::var(SEED_VAR) {
        match raw.trim().parse() {
            Ok(seed) => config.seed = Some(seed),
            Err(_) => warn!("ignoring unparsable {}={:?}", SEED_VAR, raw),
        }
    }
    Ok(config)
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Drain pending key presses into commands, step once, draw, sleep out the
/// rest of the tick. Returns once the run has terminated.
fn game_loop<W: Write>(
    out: &mut W,
    game: &mut Game,
    rx: &mpsc::Receiver<Event>,
    frame: std::time::Duration,
) -> io::Result<()> {
    while game.is_running() {
        let frame_start = Instant::now();

        while let Ok(Event::Key(KeyEvent {
            code,
            kind,
            modifiers,
            ..
        })) = rx.try_recv()
        {
            if kind != KeyEventKind::Press {
                continue;
            }
            match code {
                KeyCode::Esc => game.apply(Command::Quit),
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    game.apply(Command::Quit)
                }
                KeyCode::Char(c) => {
                    if let Some(command) = Command::from_key(c.to_ascii_lowercase()) {
                        game.apply(command);
                    }
                }
                _ => {}
            }
        }

        game.step();
        display::render(out, &*game)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
    }
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> io::Result<()> {
    env_logger::init();

    let config = build_config()?;
    let frame = config.tick_duration;
    let mut game =
        Game::new(config).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = game_loop(&mut out, &mut game, &rx, frame);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result?;
    if let Some(message) = game.exit_message() {
        info!("run finished after {} ticks", game.tick());
        println!("{}", message);
    }
    Ok(())
}
