//! Half-block pixel rendering of the game world.
//!
//! The world is scaled down into a pixel grid with one pixel per terminal
//! column and two per terminal row, packed with the `▀` (upper half block)
//! character using fg for the top pixel and bg for the bottom. Everything is
//! stamped back-to-front: sky, pipes, ground, bird, score.

use super::Viewport;
use crate::game::types::{Phase, PipeHalf, SkywardGame, Sprite, BIRD_FRAMES, GROUND_Y, SCREEN_W};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const HALF_TOP: char = '\u{2580}'; // ▀ fg fills the top half, bg the bottom

// ── Sky gradient ─────────────────────────────────────────────────────
const SKY_HIGH: (f64, f64, f64) = (46.0, 128.0, 188.0);
const SKY_LOW: (f64, f64, f64) = (120.0, 202.0, 224.0);

// ── Pipe colors ──────────────────────────────────────────────────────
const PIPE_BODY: Color = Color::Rgb(94, 184, 60);
const PIPE_LIT: Color = Color::Rgb(140, 220, 90);
const PIPE_DARK: Color = Color::Rgb(56, 120, 40);
const PIPE_LIP: Color = Color::Rgb(70, 150, 48);

// ── Ground colors ────────────────────────────────────────────────────
const GRASS: Color = Color::Rgb(112, 190, 70);
const GRASS_DARK: Color = Color::Rgb(86, 152, 56);
const DIRT: Color = Color::Rgb(222, 196, 128);
const DIRT_DARK: Color = Color::Rgb(198, 170, 104);

// ── Bird colors ──────────────────────────────────────────────────────
const BIRD_BODY: Color = Color::Rgb(255, 216, 64);
const BIRD_WING: Color = Color::Rgb(250, 250, 250);
const BIRD_BEAK: Color = Color::Rgb(255, 128, 32);
const BIRD_DEAD: Color = Color::Rgb(220, 80, 60);

const SCORE_COLOR: Color = Color::Rgb(252, 252, 252);

/// 3x5 bitmap font for the score readout. One byte per row, low 3 bits used,
/// most significant of the three on the left.
const DIGITS: [[u8; 5]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111], // 0
    [0b010, 0b110, 0b010, 0b010, 0b111], // 1
    [0b111, 0b001, 0b111, 0b100, 0b111], // 2
    [0b111, 0b001, 0b111, 0b001, 0b111], // 3
    [0b101, 0b101, 0b111, 0b001, 0b001], // 4
    [0b111, 0b100, 0b111, 0b001, 0b111], // 5
    [0b111, 0b100, 0b111, 0b101, 0b111], // 6
    [0b111, 0b001, 0b001, 0b001, 0b001], // 7
    [0b111, 0b101, 0b111, 0b101, 0b111], // 8
    [0b111, 0b101, 0b111, 0b001, 0b111], // 9
];

/// Render the game world into the play area.
pub fn render_scene(frame: &mut Frame, viewport: &Viewport, game: &SkywardGame) {
    let area = viewport.area();
    if area.width < 5 || area.height < 3 {
        return;
    }

    let mut grid = PixelGrid::new(viewport.px_cols(), viewport.px_rows());

    stamp_pipes(&mut grid, viewport, game);
    stamp_ground(&mut grid, viewport, game.ground_scroll);
    stamp_bird(&mut grid, viewport, game);
    stamp_score(&mut grid, game.score);

    flush(frame, area, &grid);
}

/// Pixel buffer covering the play area, pre-filled with the sky gradient.
struct PixelGrid {
    cols: usize,
    rows: usize,
    cells: Vec<Vec<Color>>,
}

impl PixelGrid {
    fn new(cols: usize, rows: usize) -> Self {
        let mut cells = vec![vec![Color::Reset; cols]; rows];
        for (py, row) in cells.iter_mut().enumerate() {
            let sky = sky_color(py, rows);
            for cell in row.iter_mut() {
                *cell = sky;
            }
        }
        Self { cols, rows, cells }
    }

    fn set(&mut self, px: i32, py: i32, color: Color) {
        if px >= 0 && (px as usize) < self.cols && py >= 0 && (py as usize) < self.rows {
            self.cells[py as usize][px as usize] = color;
        }
    }

    /// Fill the half-open pixel rect [x0, x1) x [y0, y1), clamped to the grid.
    fn fill(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        for py in y0.max(0)..y1.min(self.rows as i32) {
            for px in x0.max(0)..x1.min(self.cols as i32) {
                self.cells[py as usize][px as usize] = color;
            }
        }
    }
}

/// Interpolated sky color, darker at the top and paler at the horizon.
fn sky_color(py: usize, rows: usize) -> Color {
    let t = py as f64 / (rows - 1).max(1) as f64;
    let r = (SKY_HIGH.0 * (1.0 - t) + SKY_LOW.0 * t) as u8;
    let g = (SKY_HIGH.1 * (1.0 - t) + SKY_LOW.1 * t) as u8;
    let b = (SKY_HIGH.2 * (1.0 - t) + SKY_LOW.2 * t) as u8;
    Color::Rgb(r, g, b)
}

fn stamp_pipes(grid: &mut PixelGrid, viewport: &Viewport, game: &SkywardGame) {
    for piece in &game.pipes {
        let (x0, y0) = viewport.world_to_px(piece.rect.left(), piece.rect.top());
        let (x1, y1) = viewport.world_to_px(piece.rect.right(), piece.rect.bottom());

        grid.fill(x0, y0, x1, y1, PIPE_BODY);
        if x1 - x0 >= 3 {
            grid.fill(x0, y0, x0 + 1, y1, PIPE_LIT);
            grid.fill(x1 - 1, y0, x1, y1, PIPE_DARK);
        }

        // Cap band on the gap-facing end of each piece.
        match piece.half {
            PipeHalf::Top => grid.fill(x0, (y1 - 2).max(y0), x1, y1, PIPE_LIP),
            PipeHalf::Bottom => grid.fill(x0, y0, x1, (y0 + 2).min(y1), PIPE_LIP),
        }
    }
}

fn stamp_ground(grid: &mut PixelGrid, viewport: &Viewport, ground_scroll: i32) {
    let (_, gy) = viewport.world_to_px(0, GROUND_Y);
    let cols = grid.cols as i32;
    let rows = grid.rows as i32;
    if gy >= rows {
        return;
    }

    grid.fill(0, gy, cols, gy + 1, GRASS);
    grid.fill(0, gy + 1, cols, gy + 2, GRASS_DARK);

    // Dirt bands shifted by the scroll offset so the ground visibly moves.
    for py in (gy + 2).max(0)..rows {
        for px in 0..cols {
            let wx = ((px as f64 + 0.5) * SCREEN_W as f64 / cols as f64) as i32;
            let band = (wx - ground_scroll).div_euclid(18);
            let color = if band % 2 == 0 { DIRT } else { DIRT_DARK };
            grid.cells[py as usize][px as usize] = color;
        }
    }
}

fn stamp_bird(grid: &mut PixelGrid, viewport: &Viewport, game: &SkywardGame) {
    let rect = game.bird.rect();
    let (x0, y0) = viewport.world_to_px(rect.left(), rect.top());
    let (x1, y1) = viewport.world_to_px(rect.right(), rect.bottom());
    // At least one pixel even at tiny sizes.
    let x1 = x1.max(x0 + 1);
    let y1 = y1.max(y0 + 1);

    if game.phase == Phase::GameOver {
        grid.fill(x0, y0, x1, y1, BIRD_DEAD);
        // Nose down.
        grid.set((x0 + x1) / 2, y1 - 1, BIRD_BEAK);
        return;
    }

    grid.fill(x0, y0, x1, y1, BIRD_BODY);

    // Wing sweeps top/middle/bottom with the flap animation frame.
    if x1 - x0 >= 3 && y1 - y0 >= 2 {
        let frame = game.bird.frame_index.min(BIRD_FRAMES - 1) as i32;
        let wing_y = y0 + frame * (y1 - y0 - 1) / (BIRD_FRAMES as i32 - 1);
        grid.fill(x0, wing_y, x0 + (x1 - x0) / 2, wing_y + 1, BIRD_WING);
    }
    if x1 - x0 >= 3 {
        // Beak rides the pitch bucket: high when climbing, low when diving.
        let beak_y = if game.bird.pitch_deg > 5.0 {
            y0
        } else if game.bird.pitch_deg < -5.0 {
            y1 - 1
        } else {
            (y0 + y1) / 2
        };
        grid.set(x1 - 1, beak_y, BIRD_BEAK);
    }
}

/// Draw the score in 3x5 pixel digits, centered near the top.
fn stamp_score(grid: &mut PixelGrid, score: u32) {
    let text = score.to_string();
    let glyph_w = 4; // 3 pixels plus 1 spacing
    let total = text.len() as i32 * glyph_w - 1;
    let mut x = (grid.cols as i32 - total) / 2;
    let y = 2;

    for ch in text.chars() {
        let digit = ch.to_digit(10).unwrap_or(0) as usize;
        for (dy, bits) in DIGITS[digit].iter().enumerate() {
            for dx in 0..3 {
                if bits & (1 << (2 - dx)) != 0 {
                    grid.set(x + dx, y + dy as i32, SCORE_COLOR);
                }
            }
        }
        x += glyph_w;
    }
}

/// Flush the pixel grid to the terminal, two pixel rows per terminal row.
/// Consecutive cells with the same color pair are batched into one span.
fn flush(frame: &mut Frame, area: Rect, grid: &PixelGrid) {
    for term_row in 0..area.height as usize {
        let top = &grid.cells[term_row * 2];
        let bot = &grid.cells[term_row * 2 + 1];

        let mut spans: Vec<Span> = Vec::new();
        let mut cur_fg = Color::Reset;
        let mut cur_bg = Color::Reset;
        let mut cur_text = String::new();

        for (&fg, &bg) in top.iter().zip(bot.iter()) {
            if (fg != cur_fg || bg != cur_bg) && !cur_text.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut cur_text),
                    Style::default().fg(cur_fg).bg(cur_bg),
                ));
            }
            cur_fg = fg;
            cur_bg = bg;
            cur_text.push(HALF_TOP);
        }
        if !cur_text.is_empty() {
            spans.push(Span::styled(
                cur_text,
                Style::default().fg(cur_fg).bg(cur_bg),
            ));
        }

        let line = Paragraph::new(Line::from(spans));
        frame.render_widget(
            line,
            Rect::new(area.x, area.y + term_row as u16, area.width, 1),
        );
    }
}
