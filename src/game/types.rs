//! Core types and world constants for the skyward game.
//!
//! All gameplay happens in a fixed virtual world of `SCREEN_W x SCREEN_H`
//! units with the origin at the top-left and y growing downward. The
//! renderer scales this world to whatever terminal area is available, so
//! game logic never sees terminal cells.

use rand::Rng;

use crate::config::Tuning;

// World dimensions
pub const SCREEN_W: i32 = 864;
pub const SCREEN_H: i32 = 936;
/// Top edge of the ground strip; the playable sky is everything above it.
pub const GROUND_Y: i32 = 768;

// Actor geometry
pub const BIRD_X: i32 = 100;
pub const BIRD_Y: i32 = SCREEN_H / 2;
pub const BIRD_W: i32 = 34;
pub const BIRD_H: i32 = 24;
/// Number of wing animation frames.
pub const BIRD_FRAMES: usize = 3;

// Obstacle geometry
pub const PIPE_W: i32 = 78;
pub const PIPE_H: i32 = 527;

/// Restart control bounds in world units, matching where the game-over
/// overlay draws it.
pub const RESTART_RECT: Rect = Rect::new(SCREEN_W / 2 - 50, SCREEN_H / 2 - 100, 100, 40);

/// Axis-aligned rectangle in world units, anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect { x, y, w, h }
    }

    pub const fn from_center(cx: i32, cy: i32, w: i32, h: i32) -> Self {
        Rect {
            x: cx - w / 2,
            y: cy - h / 2,
            w,
            h,
        }
    }

    pub const fn left(&self) -> i32 {
        self.x
    }

    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    pub const fn top(&self) -> i32 {
        self.y
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// True when the rectangles overlap by a nonzero area. Touching edges
    /// do not count as an overlap.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// True when the point lies inside the rectangle (right/bottom edges
    /// exclusive).
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.left() && px < self.right() && py >= self.top() && py < self.bottom()
    }
}

/// Renderable geometry shared by everything the scene draws.
pub trait Sprite {
    /// Bounding rectangle in world units.
    fn rect(&self) -> Rect;
}

/// Game state machine mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Awaiting the first press; the actor hovers at its spawn point.
    Idle,
    /// Physics active, obstacles spawning and scrolling.
    Flying,
    /// A collision happened; only the actor's fall continues until restart.
    GameOver,
}

impl Phase {
    /// Phases in which gravity acts on the actor. The actor keeps falling
    /// after a mid-air collision, so GameOver counts as airborne.
    pub fn airborne(self) -> bool {
        matches!(self, Phase::Flying | Phase::GameOver)
    }
}

/// The player-controlled actor.
#[derive(Debug, Clone)]
pub struct Bird {
    /// Horizontal center, fixed after spawn.
    pub x: i32,
    /// Vertical center in world units.
    pub y: i32,
    /// Vertical velocity in units per frame; positive is downward.
    pub vel: f64,
    /// Index into the wing animation cycle.
    pub frame_index: usize,
    /// Frames elapsed since the last wing frame advance.
    pub anim_counter: u32,
    /// Press latch: set while the primary button stays held so a hold
    /// produces exactly one impulse.
    pub clicked: bool,
    /// Rendered pitch in degrees; positive is nose-up.
    pub pitch_deg: f64,
}

impl Bird {
    pub fn new() -> Self {
        Bird {
            x: BIRD_X,
            y: BIRD_Y,
            vel: 0.0,
            frame_index: 0,
            anim_counter: 0,
            clicked: false,
            pitch_deg: 0.0,
        }
    }
}

impl Default for Bird {
    fn default() -> Self {
        Bird::new()
    }
}

impl Sprite for Bird {
    fn rect(&self) -> Rect {
        Rect::from_center(self.x, self.y, BIRD_W, BIRD_H)
    }
}

/// Which half of an obstacle pair a piece is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipeHalf {
    Top,
    Bottom,
}

/// One obstacle piece (half of a spawned pair).
#[derive(Debug, Clone)]
pub struct PipePiece {
    pub rect: Rect,
    pub half: PipeHalf,
}

impl PipePiece {
    /// Move leftward with the world scroll.
    pub fn advance(&mut self, scroll_speed: i32) {
        self.rect.x -= scroll_speed;
    }

    /// Fully past the left screen edge.
    pub fn off_screen(&self) -> bool {
        self.rect.right() < 0
    }
}

impl Sprite for PipePiece {
    fn rect(&self) -> Rect {
        self.rect
    }
}

/// Per-frame snapshot of the player's input, assembled by the input layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputFrame {
    /// Primary button currently held.
    pub held: bool,
    /// Discrete press events since the previous frame (keyboard or mouse).
    pub presses: u8,
    /// World position of the last mouse press this frame; `None` for
    /// keyboard-only input.
    pub click: Option<(i32, i32)>,
}

/// Complete owned game state, passed explicitly to every update step.
#[derive(Debug, Clone)]
pub struct SkywardGame {
    // -- Phase & scoring --
    pub phase: Phase,
    pub score: u32,
    /// Best score this session; never persisted.
    pub best: u32,
    /// Set once the actor has entered the frontmost obstacle's column; the
    /// point lands when it exits on the far side.
    pub pass_pipe: bool,

    // -- Entities --
    pub bird: Bird,
    /// Obstacle pieces in spawn order; index 0 is nearest the actor.
    pub pipes: Vec<PipePiece>,

    // -- Scrolling & timing --
    /// Ground texture phase, wrapped to stay bounded.
    pub ground_scroll: i32,
    /// Game clock advanced by the fixed timestep, in milliseconds.
    pub clock_ms: u64,
    /// Clock reading at the last obstacle spawn; `None` means a spawn is
    /// due immediately.
    pub last_spawn_ms: Option<u64>,
    /// Wall-clock time not yet consumed by fixed steps.
    pub accumulated_ms: u64,
    /// Press events sampled but not yet applied to a stepped frame.
    pub pending_presses: u8,
    /// Click sampled but not yet applied, in world units.
    pub pending_click: Option<(i32, i32)>,

    // -- Tuning --
    pub tuning: Tuning,
}

impl SkywardGame {
    pub fn new(tuning: Tuning) -> Self {
        SkywardGame {
            phase: Phase::Idle,
            score: 0,
            best: 0,
            pass_pipe: false,
            bird: Bird::new(),
            pipes: Vec::new(),
            ground_scroll: 0,
            clock_ms: 0,
            last_spawn_ms: None,
            accumulated_ms: 0,
            pending_presses: 0,
            pending_click: None,
            tuning,
        }
    }

    /// Spawn one top+bottom obstacle pair at the right screen edge. The gap
    /// center lands at the actor's spawn height plus a uniform random
    /// offset; both pieces share the anchor x.
    pub fn spawn_pipe_pair<R: Rng>(&mut self, rng: &mut R) {
        let offset = rng.gen_range(-self.tuning.spawn_offset..=self.tuning.spawn_offset);
        let center = BIRD_Y + offset;
        let half_gap = self.tuning.pipe_gap / 2;
        // Bottom first, then top, so pairs stay contiguous in spawn order.
        self.pipes.push(PipePiece {
            rect: Rect::new(SCREEN_W, center + half_gap, PIPE_W, PIPE_H),
            half: PipeHalf::Bottom,
        });
        self.pipes.push(PipePiece {
            rect: Rect::new(SCREEN_W, center - half_gap - PIPE_H, PIPE_W, PIPE_H),
            half: PipeHalf::Top,
        });
        self.last_spawn_ms = Some(self.clock_ms);
    }

    /// The nearest remaining obstacle piece, if any.
    pub fn frontmost_pipe(&self) -> Option<&PipePiece> {
        self.pipes.first()
    }
}
