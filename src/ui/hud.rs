//! Status bar, start prompt, and the game-over overlay.

use super::Viewport;
use crate::game::types::{SkywardGame, RESTART_RECT};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

const BUTTON_BG: Color = Color::Rgb(112, 190, 70);

/// Render a 2-line status bar: status message on top, controls below.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Render the idle prompt over the play area, above the bird. Drawn over
/// the full-width row so narrow terminals clip the text instead of
/// overflowing the buffer.
pub fn render_start_prompt(frame: &mut Frame, area: Rect) {
    if area.height < 5 || area.width < 20 {
        return;
    }

    let prompt_y = area.y + area.height / 3;
    let line = Paragraph::new(Line::from(Span::styled(
        "[ Click or press Space to flap ]",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);

    frame.render_widget(
        line,
        Rect {
            y: prompt_y,
            height: 1,
            ..area
        },
    );
}

/// Render the game-over overlay: title, score, and the clickable restart
/// button. The button is drawn at the terminal cells its world rect covers,
/// so mouse hit-testing and the visible button always agree.
pub fn render_game_over(frame: &mut Frame, viewport: &Viewport, game: &SkywardGame) {
    let area = viewport.area();
    if area.height < 6 || area.width < 20 {
        return;
    }

    let button = viewport.world_rect_to_cells(RESTART_RECT);

    let text_h: u16 = 4;
    let text_y = button.y.saturating_sub(text_h).max(area.y);
    let lines = vec![
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                game.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled("Best: ", Style::default().fg(Color::DarkGray)),
            Span::styled(game.best.to_string(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(""),
    ];
    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(
        text,
        Rect::new(area.x, text_y, area.width, text_h.min(area.height)),
    );

    frame.render_widget(Clear, button);
    frame.render_widget(
        Block::default().style(Style::default().bg(BUTTON_BG)),
        button,
    );

    let label = if button.width >= 9 { "RESTART" } else { "GO" };
    let label_line = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Black)
                .bg(BUTTON_BG)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(
        label_line,
        Rect::new(button.x, button.y + button.height / 2, button.width, 1),
    );
}
