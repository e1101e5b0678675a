//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and the read-only snapshot of the
//! current frame. No game logic is performed; positions in the 640×480 play
//! area are projected onto whatever terminal grid is available.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use arcade_shooter::entities::{Position, Snapshot};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::Red;
const C_PLAYER: Color = Color::Green;
const C_ENEMY: Color = Color::Red;
const C_BULLET: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

/// Beyond this many lives the HUD prints a count instead of hearts.
const MAX_HEARTS: i32 = 5;

/// Terminal grid plus the play-area size it maps onto.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    pub area_width: f32,
    pub area_height: f32,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16, area_width: f32, area_height: f32) -> Self {
        Self {
            cols,
            rows,
            area_width,
            area_height,
        }
    }

    /// Map a play-area position to a cell inside the border, or `None` if it
    /// lies outside the play area.
    fn cell(&self, pos: Position) -> Option<(u16, u16)> {
        if !(0.0..self.area_width).contains(&pos.x) || !(0.0..self.area_height).contains(&pos.y)
        {
            return None;
        }
        let inner_cols = self.cols.saturating_sub(2) as f32;
        let inner_rows = self.rows.saturating_sub(4) as f32;
        let col = 1 + (pos.x / self.area_width * inner_cols) as u16;
        let row = 2 + (pos.y / self.area_height * inner_rows) as u16;
        Some((col, row))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    view: &Viewport,
    frame: &Snapshot,
    game_over: bool,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, view)?;
    draw_hud(out, view, frame)?;

    out.queue(style::SetForegroundColor(C_ENEMY))?;
    for &enemy in &frame.enemies {
        draw_glyph(out, view, enemy, "▼")?;
    }
    out.queue(style::SetForegroundColor(C_BULLET))?;
    for &bullet in &frame.bullets {
        draw_glyph(out, view, bullet, "│")?;
    }
    out.queue(style::SetForegroundColor(C_PLAYER))?;
    draw_glyph(out, view, frame.player, "▲")?;

    draw_controls_hint(out, view)?;

    if game_over {
        draw_game_over(out, view, frame)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let w = view.cols as usize;
    let h = view.rows;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1 — top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2 — bottom bar
    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(view.cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, view: &Viewport, frame: &Snapshot) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score:{:>6}", frame.score)))?;

    let lives_str = lives_label(frame.lives);
    let rx = view
        .cols
        .saturating_sub(lives_str.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives_str))?;

    Ok(())
}

fn lives_label(lives: i32) -> String {
    if (0..=MAX_HEARTS).contains(&lives) {
        format!("Lives:{}", "♥".repeat(lives as usize))
    } else {
        format!("Lives:{lives:>3}")
    }
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_glyph<W: Write>(
    out: &mut W,
    view: &Viewport,
    pos: Position,
    glyph: &str,
) -> std::io::Result<()> {
    if let Some((col, row)) = view.cell(pos) {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(Print(glyph))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Shoot   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    view: &Viewport,
    frame: &Snapshot,
) -> std::io::Result<()> {
    let score_line = format!("Final Score: {:>6}", frame.score);
    let lines: [(&str, Color); 5] = [
        ("╔════════════════════╗", Color::Red),
        ("║    GAME  OVER      ║", Color::Red),
        ("╚════════════════════╝", Color::Red),
        (&score_line, Color::Yellow),
        ("Q - Quit", Color::White),
    ];

    let cx = view.cols / 2;
    let start_row = (view.rows / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}
