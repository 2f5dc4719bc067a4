pub mod hud;
pub mod scene;

use crate::game::types::{Phase, Rect as WorldRect, SkywardGame, SCREEN_H, SCREEN_W};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear},
    Frame,
};

/// Layout areas for the single game screen.
pub struct GameLayout {
    /// Play area (the scaled game world), inside the outer border.
    pub play: Rect,
    /// Status bar area (2 lines) at the bottom, inside the outer border.
    pub status: Rect,
}

fn outer_block() -> Block<'static> {
    Block::default()
        .title(" Skyward ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
}

/// Compute the screen layout for a given terminal area.
///
/// Pure so the input layer can derive the same play area the renderer
/// uses when mapping mouse clicks.
pub fn layout(area: Rect) -> GameLayout {
    let inner = outer_block().inner(area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(2)])
        .split(inner);

    GameLayout {
        play: chunks[0],
        status: chunks[1],
    }
}

/// Maps between world coordinates and the terminal cells of the play area.
///
/// The world is scaled to fill the play area. Vertically each terminal cell
/// holds two half-block pixels, so the pixel grid is `width` columns by
/// `height * 2` rows.
pub struct Viewport {
    area: Rect,
}

impl Viewport {
    pub fn new(area: Rect) -> Self {
        Self { area }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Number of pixel columns in the play area.
    pub fn px_cols(&self) -> usize {
        self.area.width as usize
    }

    /// Number of half-block pixel rows in the play area.
    pub fn px_rows(&self) -> usize {
        self.area.height as usize * 2
    }

    /// Map a world point to pixel coordinates (rounded, unclamped).
    ///
    /// Applied to both edges of a world rect this tiles adjacent rects
    /// without seams, so callers clamp when stamping.
    pub fn world_to_px(&self, wx: i32, wy: i32) -> (i32, i32) {
        let px = (wx as f64 * self.area.width as f64 / SCREEN_W as f64).round() as i32;
        let py = (wy as f64 * (self.area.height as f64 * 2.0) / SCREEN_H as f64).round() as i32;
        (px, py)
    }

    /// Map a terminal cell to the world point at its center.
    ///
    /// Cells outside the play area are clamped onto its edge, so every
    /// mouse click yields a world point.
    pub fn cell_to_world(&self, col: u16, row: u16) -> (i32, i32) {
        let w = self.area.width.max(1) as f64;
        let h = self.area.height.max(1) as f64;
        let dcol = col
            .saturating_sub(self.area.x)
            .min(self.area.width.saturating_sub(1)) as f64;
        let drow = row
            .saturating_sub(self.area.y)
            .min(self.area.height.saturating_sub(1)) as f64;
        let wx = ((dcol + 0.5) * SCREEN_W as f64 / w) as i32;
        let wy = ((drow + 0.5) * SCREEN_H as f64 / h) as i32;
        (wx, wy)
    }

    /// Map a world rect to the terminal cells whose centers lie inside it,
    /// clamped to the play area. Selecting by cell center makes this the
    /// exact inverse of `cell_to_world`: clicking any returned cell maps
    /// back inside the world rect whenever at least one center falls in it
    /// (a rect thinner than one cell still draws a single cell).
    pub fn world_rect_to_cells(&self, rect: WorldRect) -> Rect {
        let xs = self.area.width as f64 / SCREEN_W as f64;
        let ys = self.area.height as f64 / SCREEN_H as f64;

        // First cell whose center sits at or past the edge.
        let col_at = |wx: i32| (wx as f64 * xs - 0.5).ceil() as i32;
        let row_at = |wy: i32| (wy as f64 * ys - 0.5).ceil() as i32;

        let max_col = self.area.width.saturating_sub(1) as i32;
        let max_row = self.area.height.saturating_sub(1) as i32;
        let left = col_at(rect.left()).clamp(0, max_col) as u16;
        let top = row_at(rect.top()).clamp(0, max_row) as u16;
        let right = col_at(rect.right()).clamp(0, self.area.width as i32) as u16;
        let bottom = row_at(rect.bottom()).clamp(0, self.area.height as i32) as u16;

        let w = right
            .saturating_sub(left)
            .max(1)
            .min(self.area.width.saturating_sub(left));
        let h = bottom
            .saturating_sub(top)
            .max(1)
            .min(self.area.height.saturating_sub(top));

        Rect::new(self.area.x + left, self.area.y + top, w, h)
    }
}

/// Draw the full game screen: border, scene, phase overlays, status bar.
pub fn draw_ui(frame: &mut Frame, game: &SkywardGame) {
    let area = frame.size();
    frame.render_widget(Clear, area);
    frame.render_widget(outer_block(), area);

    let layout = layout(area);
    let viewport = Viewport::new(layout.play);

    scene::render_scene(frame, &viewport, game);

    match game.phase {
        Phase::Idle => {
            hud::render_start_prompt(frame, layout.play);
            let status = if game.best > 0 {
                format!("Ready  Best: {}", game.best)
            } else {
                "Ready".to_string()
            };
            hud::render_status_bar(
                frame,
                layout.status,
                &status,
                Color::Yellow,
                &[("[Space/Click]", "Flap"), ("[Q/Esc]", "Quit")],
            );
        }
        Phase::Flying => {
            hud::render_status_bar(
                frame,
                layout.status,
                &format!("Score: {}  Best: {}", game.score, game.best),
                Color::Green,
                &[("[Space/Click]", "Flap"), ("[Q/Esc]", "Quit")],
            );
        }
        Phase::GameOver => {
            hud::render_game_over(frame, &viewport, game);
            hud::render_status_bar(
                frame,
                layout.status,
                &format!("Crashed at {}!  Best: {}", game.score, game.best),
                Color::Red,
                &[("[Space/Click]", "Restart"), ("[Q/Esc]", "Quit")],
            );
        }
    }
}
