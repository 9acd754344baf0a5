use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::input::InputState;
use crate::lifecycle::{HudState, Lifecycle};
use crate::render::Scene;

/// Core trait that all arcade mini-games implement.
///
/// The driver manages frame scheduling, the tick timer, and input capture;
/// the game only handles its own simulation rules and rendering.
pub trait ArcadeGame: Send {
    /// Game metadata for the hub catalog screen.
    fn metadata(&self) -> GameMetadata;

    /// Fully reinitialize all entity collections and counters.
    ///
    /// Called before every start/restart. A reset must be complete: stale
    /// hazards, projectiles, or timers surviving a reset are defects.
    fn reset(&mut self);

    /// Advance one display frame. Reads input, applies physics and
    /// collisions while Playing, and handles start/restart intents while
    /// Idle or Terminal.
    fn frame(&mut self, input: &InputState);

    /// Fixed-interval step for discrete-grid games. Frame-driven games
    /// leave this as a no-op.
    fn tick(&mut self) {}

    /// Current tick interval for discrete-grid games, or `None` for games
    /// that advance purely per frame. The driver re-reads this every frame
    /// and replaces its timer whenever the value changes.
    fn tick_interval(&self) -> Option<Duration> {
        None
    }

    /// Current lifecycle state.
    fn lifecycle(&self) -> Lifecycle;

    /// Slow UI-visible snapshot (score, lives, level, best).
    fn hud(&self) -> HudState;

    /// Full simulation-state snapshot for diagnostics and tests.
    fn state_json(&self) -> serde_json::Value;

    /// Emit draw primitives for the current state. Must be a pure function
    /// of state; rendering never mutates the simulation.
    fn render(&self, scene: &mut Scene);
}

/// Game metadata for the hub catalog screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMetadata {
    pub name: String,
    pub description: String,
    /// Logical canvas width in pixels.
    pub width: u32,
    /// Logical canvas height in pixels.
    pub height: u32,
    /// One-line control hint shown under the canvas.
    pub controls: String,
}

/// Generates the 3 boilerplate `ArcadeGame` methods that are identical
/// across all games: `lifecycle`, `hud`, `state_json`.
///
/// Requires the implementing struct to have `session: Session` and
/// `state: $StateType` fields, with `$StateType: serde::Serialize`.
#[macro_export]
macro_rules! arcade_game_boilerplate {
    (state_type: $StateType:ty) => {
        fn lifecycle(&self) -> $crate::lifecycle::Lifecycle {
            self.session.lifecycle()
        }

        fn hud(&self) -> $crate::lifecycle::HudState {
            self.session.hud()
        }

        fn state_json(&self) -> ::serde_json::Value {
            ::serde_json::to_value(&self.state).unwrap_or(::serde_json::Value::Null)
        }
    };
}
