//! Terminal renderer
//!
//! Projects the 800x600 world onto a fixed character grid and draws with
//! crossterm. Pure consumer of the simulation state; nothing here feeds
//! back into gameplay.

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{self, Color},
    terminal::{self, ClearType},
};

use crate::assets::Theme;
use crate::consts::*;
use crate::sim::{GamePhase, GameState};

/// Character grid dimensions the world is projected onto
pub const GRID_COLS: u16 = 80;
pub const GRID_ROWS: u16 = 30;

/// World pixels per character cell
const CELL_W: f32 = SCREEN_WIDTH / GRID_COLS as f32;
const CELL_H: f32 = SCREEN_HEIGHT / GRID_ROWS as f32;

/// Terminal renderer configured from a theme
pub struct Renderer {
    player_glyph: char,
    bridge_glyph: char,
    fire_glyph: char,
    player_color: Color,
    bridge_color: Color,
    fire_color: Color,
    text_color: Color,
}

impl Renderer {
    pub fn new(theme: &Theme) -> Self {
        Self {
            player_glyph: theme.player_glyph,
            bridge_glyph: theme.bridge_glyph,
            fire_glyph: theme.fire_glyph,
            player_color: parse_color(&theme.player_color),
            bridge_color: parse_color(&theme.bridge_color),
            fire_color: parse_color(&theme.fire_color),
            text_color: parse_color(&theme.text_color),
        }
    }

    /// Draw one frame and present it
    pub fn draw(
        &self,
        out: &mut impl Write,
        state: &GameState,
        best_m: Option<u32>,
        show_distance: bool,
    ) -> io::Result<()> {
        queue!(out, terminal::Clear(ClearType::All))?;

        for bridge in &state.bridges {
            self.fill_rect(
                out,
                bridge.pos.x,
                bridge.pos.y,
                BRIDGE_WIDTH,
                BRIDGE_HEIGHT,
                self.bridge_glyph,
                self.bridge_color,
            )?;
        }

        self.fill_rect(
            out,
            0.0,
            SCREEN_HEIGHT - FIRE_HEIGHT,
            SCREEN_WIDTH,
            FIRE_HEIGHT,
            self.fire_glyph,
            self.fire_color,
        )?;

        self.fill_rect(
            out,
            state.player.pos.x,
            state.player.pos.y,
            PLAYER_SIZE,
            PLAYER_SIZE,
            self.player_glyph,
            self.player_color,
        )?;

        if show_distance {
            self.print_at(
                out,
                1,
                0,
                &format!("Distance: {}m", state.distance_m()),
                self.text_color,
            )?;
        }

        if state.phase == GamePhase::GameOver {
            self.draw_game_over(out, state, best_m)?;
        }

        queue!(out, style::ResetColor)?;
        out.flush()
    }

    fn draw_game_over(
        &self,
        out: &mut impl Write,
        state: &GameState,
        best_m: Option<u32>,
    ) -> io::Result<()> {
        let mid = GRID_ROWS / 2;
        self.print_centered(out, mid - 2, "GAME OVER", Color::Red)?;
        self.print_centered(
            out,
            mid,
            &format!("Distance: {}m", state.distance_m()),
            self.text_color,
        )?;
        if let Some(best) = best_m {
            self.print_centered(out, mid + 1, &format!("Best: {}m", best), self.text_color)?;
        }
        self.print_centered(out, mid + 3, "Press SPACE to restart", self.text_color)
    }

    /// Fill a world-space rectangle with a glyph, clipped to the grid
    fn fill_rect(
        &self,
        out: &mut impl Write,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        glyph: char,
        color: Color,
    ) -> io::Result<()> {
        let Some((col0, col1)) = project_span(x, w, CELL_W, GRID_COLS) else {
            return Ok(());
        };
        let Some((row0, row1)) = project_span(y, h, CELL_H, GRID_ROWS) else {
            return Ok(());
        };

        let line: String = std::iter::repeat(glyph)
            .take((col1 - col0) as usize)
            .collect();
        queue!(out, style::SetForegroundColor(color))?;
        for row in row0..row1 {
            queue!(out, cursor::MoveTo(col0, row), style::Print(&line))?;
        }
        Ok(())
    }

    fn print_at(
        &self,
        out: &mut impl Write,
        col: u16,
        row: u16,
        text: &str,
        color: Color,
    ) -> io::Result<()> {
        queue!(
            out,
            style::SetForegroundColor(color),
            cursor::MoveTo(col, row),
            style::Print(text)
        )
    }

    fn print_centered(
        &self,
        out: &mut impl Write,
        row: u16,
        text: &str,
        color: Color,
    ) -> io::Result<()> {
        let col = (GRID_COLS.saturating_sub(text.len() as u16)) / 2;
        self.print_at(out, col, row, text, color)
    }
}

/// Project a world-space span onto cell indices, clipped to `[0, max_cells)`.
/// Returns a half-open cell range, or None when fully off-grid.
fn project_span(start: f32, len: f32, cell_size: f32, max_cells: u16) -> Option<(u16, u16)> {
    let end = start + len;
    if end <= 0.0 || start >= cell_size * max_cells as f32 {
        return None;
    }
    let first = (start / cell_size).floor().max(0.0) as u16;
    let last = ((end / cell_size).ceil() as u16).min(max_cells);
    (first < last).then_some((first, last))
}

/// Map a theme color name to a terminal color; unknown names fall back
/// to white with a diagnostic.
fn parse_color(name: &str) -> Color {
    match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "dark_red" => Color::DarkRed,
        "green" => Color::Green,
        "dark_green" => Color::DarkGreen,
        "yellow" => Color::Yellow,
        "dark_yellow" => Color::DarkYellow,
        "blue" => Color::Blue,
        "dark_blue" => Color::DarkBlue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "grey" | "gray" => Color::Grey,
        "dark_grey" | "dark_gray" => Color::DarkGrey,
        "white" => Color::White,
        other => {
            log::warn!("unknown theme color '{}', using white", other);
            Color::White
        }
    }
}
