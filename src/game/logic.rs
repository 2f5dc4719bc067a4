//! Per-frame game logic: gravity, flapping, spawning, scoring, collision,
//! and the Idle → Flying → GameOver → Idle phase flow.

use rand::Rng;

use super::types::*;
use crate::config::Tuning;

/// Fixed physics step in milliseconds (~60 FPS).
pub const PHYSICS_TICK_MS: u64 = 16;

/// Advance the whole game by `dt_ms` of wall-clock time.
///
/// Simulation runs in fixed 16 ms frames behind an accumulator, so the
/// outcome of a flight does not depend on how the wall clock was sliced
/// into calls. Held input applies to every stepped frame; discrete press
/// events buffer until a frame steps and then apply to that frame only.
/// Returns true if any frame stepped.
pub fn tick_game<R: Rng>(
    game: &mut SkywardGame,
    dt_ms: u64,
    input: InputFrame,
    rng: &mut R,
) -> bool {
    // Clamp dt to 100ms max to absorb suspend/lag spikes
    let dt_ms = dt_ms.min(100);

    game.accumulated_ms += dt_ms;
    // Discrete events buffer like time does: a call too short to step a
    // frame must not swallow its press.
    game.pending_presses = game.pending_presses.saturating_add(input.presses);
    if input.click.is_some() {
        game.pending_click = input.click;
    }

    let mut changed = false;
    while game.accumulated_ms >= PHYSICS_TICK_MS {
        game.accumulated_ms -= PHYSICS_TICK_MS;
        // Presses are instantaneous events, not held state: the first
        // stepped frame takes them all.
        let frame_input = InputFrame {
            held: input.held,
            presses: std::mem::take(&mut game.pending_presses),
            click: game.pending_click.take(),
        };
        step_frame(game, frame_input, rng);
        changed = true;
    }

    changed
}

/// Single fixed frame, in the classic per-frame order: actor, scoring,
/// collision, world motion, restart control, then input events.
fn step_frame<R: Rng>(game: &mut SkywardGame, input: InputFrame, rng: &mut R) {
    game.clock_ms += PHYSICS_TICK_MS;

    // 1. Advance the actor
    game.bird.update(game.phase, &game.tuning, input.held);

    // 2. Scoring against the frontmost obstacle
    evaluate_pass(game);

    // 3. Collision check and phase update
    if game.phase == Phase::Flying && collision_hit(game) {
        enter_game_over(game);
    }

    // 4. World motion while flying: spawner, scroll phase, obstacle march
    if game.phase == Phase::Flying {
        maybe_spawn(game, rng);
        step_scroll(game);
        step_pipes(game);
    }

    // 5. Restart control while game over
    if game.phase == Phase::GameOver && restart_requested(input) {
        reset_game(game);
        // The activating press is consumed by the reset; it must not
        // double as the next flight-starting press.
        return;
    }

    // 6. A press while idle starts the flight
    if game.phase == Phase::Idle && input.presses > 0 {
        game.phase = Phase::Flying;
        tracing::debug!("flight started");
    }
}

impl Bird {
    /// Per-frame actor update: gravity integration, press-edge impulse,
    /// wing animation, and pitch.
    ///
    /// Gravity acts in any airborne phase, so the actor keeps falling
    /// after a mid-air collision. Displacement stops at the ground guard
    /// while velocity itself is left to saturate at the fall cap.
    pub fn update(&mut self, phase: Phase, tuning: &Tuning, pressed: bool) {
        if phase.airborne() {
            self.vel += tuning.gravity;
            if self.vel > tuning.max_fall_speed {
                self.vel = tuning.max_fall_speed;
            }
            if self.rect().bottom() < GROUND_Y {
                // Discrete integration: velocity truncated toward zero
                self.y += self.vel as i32;
            }
        }

        if phase != Phase::GameOver {
            // Press edge: one impulse per press, holding never re-triggers
            if pressed && !self.clicked {
                self.clicked = true;
                self.vel = tuning.jump_impulse;
            }
            if !pressed {
                self.clicked = false;
            }

            // Wing animation
            self.anim_counter += 1;
            if self.anim_counter > tuning.flap_cooldown {
                self.anim_counter = 0;
                self.frame_index = (self.frame_index + 1) % BIRD_FRAMES;
            }

            // Nose up when rising, nose down when falling
            self.pitch_deg = self.vel * -2.0;
        } else {
            // Nose-dive pose for the rest of the fall
            self.pitch_deg = -90.0;
        }
    }
}

/// Two-stage pass detection against the frontmost obstacle piece: note
/// entry into its column, then award the point once the actor's left edge
/// clears its right edge. Safe on an empty obstacle set.
fn evaluate_pass(game: &mut SkywardGame) {
    let front = match game.frontmost_pipe() {
        Some(piece) => piece.rect,
        None => return,
    };
    let bird = game.bird.rect();

    if !game.pass_pipe {
        if bird.left() > front.left() && bird.right() < front.right() {
            game.pass_pipe = true;
        }
    } else if bird.left() > front.right() {
        game.score += 1;
        game.pass_pipe = false;
        tracing::debug!(score = game.score, "obstacle cleared");
    }
}

/// Collision scan: ground line, ceiling, then precise rectangle overlap
/// with every obstacle piece.
fn collision_hit(game: &SkywardGame) -> bool {
    let bird = game.bird.rect();
    if bird.bottom() >= GROUND_Y {
        return true;
    }
    if bird.top() < 0 {
        return true;
    }
    game.pipes.iter().any(|piece| bird.intersects(&piece.rect))
}

fn enter_game_over(game: &mut SkywardGame) {
    game.phase = Phase::GameOver;
    if game.score > game.best {
        game.best = game.score;
    }
    tracing::debug!(score = game.score, best = game.best, "game over");
}

/// Spawn gate: a new pair is due when the clock has outrun the spawn
/// period, or immediately when nothing has spawned yet. The timer is
/// never reset outside of spawning, so the first pair of a flight (and of
/// a restarted flight) arrives without the full wait.
fn maybe_spawn<R: Rng>(game: &mut SkywardGame, rng: &mut R) {
    let due = match game.last_spawn_ms {
        Some(last) => game.clock_ms - last > game.tuning.pipe_frequency_ms,
        None => true,
    };
    if due {
        game.spawn_pipe_pair(rng);
    }
}

/// Ground texture phase: march left, wrap to 0 past the threshold.
fn step_scroll(game: &mut SkywardGame) {
    game.ground_scroll -= game.tuning.scroll_speed;
    if game.ground_scroll.abs() > game.tuning.scroll_wrap {
        game.ground_scroll = 0;
    }
}

/// March every piece left once, then drop the ones fully off-screen.
fn step_pipes(game: &mut SkywardGame) {
    let speed = game.tuning.scroll_speed;
    for piece in &mut game.pipes {
        piece.advance(speed);
    }
    game.pipes.retain(|piece| !piece.off_screen());
}

/// Restart activation: a mouse press inside the restart control, or a
/// keyboard press (no click location) while the game-over overlay is up.
fn restart_requested(input: InputFrame) -> bool {
    if input.presses == 0 {
        return false;
    }
    match input.click {
        Some((x, y)) => RESTART_RECT.contains(x, y),
        None => true,
    }
}

/// Restore the pre-flight state: obstacles cleared, actor at its spawn
/// point with zeroed motion and animation, score back to 0. The session
/// best, the game clock, and the spawn timer all survive; the ground
/// phase keeps its current alignment.
pub fn reset_game(game: &mut SkywardGame) {
    game.phase = Phase::Idle;
    game.score = 0;
    game.pass_pipe = false;
    game.bird = Bird::new();
    game.pipes.clear();
    tracing::debug!("game reset");
}
