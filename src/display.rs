//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game. No game logic is performed; this module only translates the
//! drawable snapshot into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use rand::Rng;

use ascii_shooter::entities::{Drawable, Tint};
use ascii_shooter::Game;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_STATUS: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

fn color_for(tint: Tint) -> Color {
    match tint {
        Tint::Default => Color::Reset,
        Tint::Green => Color::Green,
        Tint::Red => Color::Red,
        Tint::Blue => Color::Blue,
        Tint::Yellow => Color::Yellow,
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame: the arena, then the status and help rows
/// directly below it.
pub fn render<W: Write, R: Rng>(out: &mut W, game: &Game<R>) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let world = game.world();
    for object in game.objects() {
        draw_object(out, &object, world.width, world.height)?;
    }

    draw_status(out, game, world.height as u16)?;
    draw_controls_hint(out, game, world.height as u16 + 1)?;

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_object<W: Write>(
    out: &mut W,
    object: &Drawable,
    width: i32,
    height: i32,
) -> std::io::Result<()> {
    let p = object.position;
    // Anything that wandered outside the arena is simply not drawn.
    if p.x < 0 || p.y < 0 || p.x >= width || p.y >= height {
        return Ok(());
    }
    out.queue(cursor::MoveTo(p.x as u16, p.y as u16))?;
    out.queue(style::SetForegroundColor(color_for(object.tint)))?;
    out.queue(Print(object.glyph))?;
    Ok(())
}

// ── Status & controls hint ────────────────────────────────────────────────────

fn draw_status<W: Write, R: Rng>(out: &mut W, game: &Game<R>, row: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(0, row))?;
    out.queue(style::SetForegroundColor(C_STATUS))?;
    out.queue(Print(format!(
        "Time: {:>6.2}s   Kills: {:>3}   Score: {:>7}",
        game.elapsed().as_secs_f64(),
        game.kills(),
        game.score()
    )))?;
    Ok(())
}

fn draw_controls_hint<W: Write, R: Rng>(
    out: &mut W,
    game: &Game<R>,
    row: u16,
) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(0, row))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(game.help_text()))?;
    Ok(())
}
