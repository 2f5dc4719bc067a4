//! Gameplay tuning loaded from ~/.skyward/config.json.
//!
//! A missing file means defaults; a corrupt file means defaults plus a
//! logged warning. Partial files work because every field carries a serde
//! default. Loaded values are clamped into playable ranges so a wild edit
//! cannot produce an unwinnable game.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "config.json";

/// Gameplay constants, overridable from the config file. World geometry
/// (screen and sprite sizes) is fixed; only motion and pacing tune.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    /// Added to vertical velocity every frame, in units/frame².
    #[serde(default = "default_gravity")]
    pub gravity: f64,
    /// Falling velocity saturation, units/frame.
    #[serde(default = "default_max_fall_speed")]
    pub max_fall_speed: f64,
    /// Velocity set on a press edge, units/frame; negative is upward.
    #[serde(default = "default_jump_impulse")]
    pub jump_impulse: f64,
    /// Frames between wing animation advances.
    #[serde(default = "default_flap_cooldown")]
    pub flap_cooldown: u32,
    /// Vertical clearance between an obstacle pair's pieces, units.
    #[serde(default = "default_pipe_gap")]
    pub pipe_gap: i32,
    /// Milliseconds between obstacle spawns.
    #[serde(default = "default_pipe_frequency_ms")]
    pub pipe_frequency_ms: u64,
    /// Leftward world motion, units/frame.
    #[serde(default = "default_scroll_speed")]
    pub scroll_speed: i32,
    /// Ground texture phase wrap threshold, units.
    #[serde(default = "default_scroll_wrap")]
    pub scroll_wrap: i32,
    /// Maximum magnitude of the random gap-center offset, units.
    #[serde(default = "default_spawn_offset")]
    pub spawn_offset: i32,
}

fn default_gravity() -> f64 {
    0.5
}

fn default_max_fall_speed() -> f64 {
    8.0
}

fn default_jump_impulse() -> f64 {
    -10.0
}

fn default_flap_cooldown() -> u32 {
    5
}

fn default_pipe_gap() -> i32 {
    150
}

fn default_pipe_frequency_ms() -> u64 {
    1500
}

fn default_scroll_speed() -> i32 {
    4
}

fn default_scroll_wrap() -> i32 {
    35
}

fn default_spawn_offset() -> i32 {
    100
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning {
            gravity: default_gravity(),
            max_fall_speed: default_max_fall_speed(),
            jump_impulse: default_jump_impulse(),
            flap_cooldown: default_flap_cooldown(),
            pipe_gap: default_pipe_gap(),
            pipe_frequency_ms: default_pipe_frequency_ms(),
            scroll_speed: default_scroll_speed(),
            scroll_wrap: default_scroll_wrap(),
            spawn_offset: default_spawn_offset(),
        }
    }
}

impl Tuning {
    /// Clamp every field into a playable range. The spawn offset bound
    /// keeps the whole gap on screen for all random draws.
    pub fn sanitized(mut self) -> Self {
        self.gravity = self.gravity.clamp(0.05, 5.0);
        self.max_fall_speed = self.max_fall_speed.clamp(1.0, 40.0);
        self.jump_impulse = -self.jump_impulse.abs();
        if self.jump_impulse == 0.0 {
            self.jump_impulse = default_jump_impulse();
        }
        self.flap_cooldown = self.flap_cooldown.clamp(1, 60);
        self.pipe_gap = self.pipe_gap.clamp(60, 400);
        self.pipe_frequency_ms = self.pipe_frequency_ms.clamp(250, 10_000);
        self.scroll_speed = self.scroll_speed.clamp(1, 20);
        self.scroll_wrap = self.scroll_wrap.max(1);
        self.spawn_offset = self.spawn_offset.clamp(0, 250);
        self
    }
}

/// Get the ~/.skyward/ directory path, creating it if needed.
pub fn config_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(".skyward");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Full path of the config file in ~/.skyward/.
pub fn config_path() -> io::Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE))
}

/// Load tuning from the config file, falling back to defaults when the
/// file is missing or unreadable.
pub fn load_tuning() -> Tuning {
    let path = match config_path() {
        Ok(p) => p,
        Err(_) => return Tuning::default(),
    };
    match fs::read_to_string(&path) {
        Ok(json) => match serde_json::from_str::<Tuning>(&json) {
            Ok(tuning) => {
                tracing::info!(path = %path.display(), "loaded tuning from config file");
                tuning.sanitized()
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "config file unreadable, using defaults"
                );
                Tuning::default()
            }
        },
        Err(_) => {
            tracing::info!("no config file, using default tuning");
            Tuning::default()
        }
    }
}

/// Write the default tuning as pretty-printed JSON for hand editing.
pub fn write_default_config() -> io::Result<PathBuf> {
    let path = config_path()?;
    let json = serde_json::to_string_pretty(&Tuning::default())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(&path, json)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_values() {
        let t = Tuning::default();
        assert_eq!(t.gravity, 0.5);
        assert_eq!(t.max_fall_speed, 8.0);
        assert_eq!(t.jump_impulse, -10.0);
        assert_eq!(t.flap_cooldown, 5);
        assert_eq!(t.pipe_gap, 150);
        assert_eq!(t.pipe_frequency_ms, 1500);
        assert_eq!(t.scroll_speed, 4);
        assert_eq!(t.scroll_wrap, 35);
        assert_eq!(t.spawn_offset, 100);
    }

    #[test]
    fn test_defaults_survive_sanitize_unchanged() {
        let t = Tuning::default().sanitized();
        assert_eq!(t.gravity, Tuning::default().gravity);
        assert_eq!(t.jump_impulse, Tuning::default().jump_impulse);
        assert_eq!(t.pipe_gap, Tuning::default().pipe_gap);
    }

    #[test]
    fn test_sanitize_clamps_wild_values() {
        let t = Tuning {
            gravity: -3.0,
            max_fall_speed: 0.0,
            jump_impulse: 10.0,
            flap_cooldown: 0,
            pipe_gap: 5,
            pipe_frequency_ms: 1,
            scroll_speed: 0,
            scroll_wrap: -10,
            spawn_offset: 9999,
        }
        .sanitized();
        assert!(t.gravity > 0.0);
        assert!(t.max_fall_speed >= 1.0);
        assert!(t.jump_impulse < 0.0, "jump impulse must point upward");
        assert!(t.flap_cooldown >= 1);
        assert!(t.pipe_gap >= 60);
        assert!(t.pipe_frequency_ms >= 250);
        assert!(t.scroll_speed >= 1);
        assert!(t.scroll_wrap >= 1);
        assert!(t.spawn_offset <= 250);
    }

    #[test]
    fn test_partial_config_fills_missing_fields() {
        let t: Tuning = serde_json::from_str(r#"{"pipe_gap": 200}"#).unwrap();
        assert_eq!(t.pipe_gap, 200);
        assert_eq!(t.gravity, 0.5);
        assert_eq!(t.pipe_frequency_ms, 1500);
    }

    #[test]
    fn test_empty_config_is_all_defaults() {
        let t: Tuning = serde_json::from_str("{}").unwrap();
        assert_eq!(t.scroll_speed, Tuning::default().scroll_speed);
    }

    #[test]
    fn test_config_path_lands_in_skyward_dir() {
        let path = config_path().expect("config_path should succeed");
        assert!(path.to_string_lossy().ends_with(".skyward/config.json"));
    }
}
