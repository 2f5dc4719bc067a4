//! Input handling: folds crossterm events into per-frame snapshots.
//!
//! Keeps terminal event plumbing out of the game logic, which only ever
//! sees an `InputFrame`. The mouse gives true held state; flap keys emit a
//! one-frame pulse because a terminal cannot report key release.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::game::types::InputFrame;
use crate::ui::Viewport;

/// Result of handling one terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep running.
    Continue,
    /// Player asked to leave.
    Quit,
}

/// Accumulates terminal events between frames and emits one `InputFrame`
/// per tick.
#[derive(Debug, Default)]
pub struct InputState {
    /// Primary mouse button currently held.
    mouse_held: bool,
    /// A flap key went down since the last frame.
    key_pulse: bool,
    /// Discrete press events collected since the last frame.
    presses: u8,
    /// Terminal cell of the last mouse press since the last frame.
    click_cell: Option<(u16, u16)>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one terminal event into the pending frame.
    pub fn apply(&mut self, event: &Event) -> InputResult {
        match event {
            Event::Key(key) => self.apply_key(*key),
            Event::Mouse(mouse) => {
                self.apply_mouse(*mouse);
                InputResult::Continue
            }
            _ => InputResult::Continue,
        }
    }

    fn apply_key(&mut self, key: KeyEvent) -> InputResult {
        match key.code {
            // 1. Quit keys take priority over everything
            KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                InputResult::Quit
            }
            // 2. Flap keys: a discrete press plus a one-frame hold pulse
            KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => {
                self.key_pulse = true;
                self.presses = self.presses.saturating_add(1);
                InputResult::Continue
            }
            _ => InputResult::Continue,
        }
    }

    fn apply_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.mouse_held = true;
                self.presses = self.presses.saturating_add(1);
                self.click_cell = Some((mouse.column, mouse.row));
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.mouse_held = false;
            }
            _ => {}
        }
    }

    /// Drain the pending events into a frame snapshot, mapping the click
    /// cell into world units through the active viewport. Held mouse state
    /// persists across frames; pulses and presses do not.
    pub fn take_frame(&mut self, viewport: &Viewport) -> InputFrame {
        let frame = InputFrame {
            held: self.mouse_held || self.key_pulse,
            presses: self.presses,
            click: self
                .click_cell
                .map(|(col, row)| viewport.cell_to_world(col, row)),
        };
        self.key_pulse = false;
        self.presses = 0;
        self.click_cell = None;
        frame
    }
}
