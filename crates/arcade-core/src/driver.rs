use std::time::Duration;

use uuid::Uuid;

use crate::game_trait::ArcadeGame;
use crate::input::InputState;
use crate::lifecycle::{HudState, Lifecycle};
use crate::render::Scene;

/// Host input event, fed to the driver between frames.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    KeyDown(String),
    KeyUp(String),
    PointerMove { x: f32, y: f32 },
    Click { x: f32, y: f32 },
}

/// Owns one mounted game instance and drives it at the host's frame cadence.
///
/// The host calls `handle_event` as events arrive and `on_frame` once per
/// displayed frame; both run on the same logical thread, so the only
/// producer/consumer pair (input state written by events, read by the next
/// frame) needs no locking. Dropping the driver is the unmount: the game
/// and its timers go with it, so no callback can outlive the instance.
pub struct GameDriver {
    id: Uuid,
    game: Box<dyn ArcadeGame>,
    input: InputState,
    /// Interval the tick timer is currently armed with, if any.
    armed_interval: Option<Duration>,
    tick_accum: Duration,
    last_lifecycle: Lifecycle,
}

impl GameDriver {
    pub fn new(game: Box<dyn ArcadeGame>) -> Self {
        let id = Uuid::new_v4();
        tracing::debug!(instance = %id, game = %game.metadata().name, "Mounted game instance");
        let last_lifecycle = game.lifecycle();
        Self {
            id,
            game,
            input: InputState::new(),
            armed_interval: None,
            tick_accum: Duration::ZERO,
            last_lifecycle,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn game(&self) -> &dyn ArcadeGame {
        &*self.game
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(code) => self.input.on_key_down(code),
            InputEvent::KeyUp(code) => self.input.on_key_up(code),
            InputEvent::PointerMove { x, y } => self.input.on_pointer_move(x, y),
            InputEvent::Click { x, y } => self.input.on_click(x, y),
        }
    }

    /// Advance one display frame. Runs the game's frame step exactly once,
    /// then pumps the fixed tick timer for discrete games.
    ///
    /// When the game reports a different tick interval than the one armed
    /// (speed scaling with progress), the timer is replaced: the new
    /// interval takes over with a zeroed accumulator. Intervals are never
    /// stacked.
    pub fn on_frame(&mut self, dt: Duration) {
        self.game.frame(&self.input);

        if self.game.lifecycle().is_playing() {
            self.pump_ticks(dt);
        } else {
            // Frozen outside Playing; pending partial ticks are discarded
            // so a restart never inherits stale accumulated time.
            self.tick_accum = Duration::ZERO;
            self.armed_interval = None;
        }

        let lifecycle = self.game.lifecycle();
        if lifecycle != self.last_lifecycle {
            tracing::info!(
                instance = %self.id,
                from = ?self.last_lifecycle,
                to = ?lifecycle,
                score = self.game.hud().score,
                "Lifecycle transition"
            );
            self.last_lifecycle = lifecycle;
        }

        self.input.end_frame();
    }

    fn pump_ticks(&mut self, dt: Duration) {
        let Some(interval) = self.game.tick_interval() else {
            self.armed_interval = None;
            return;
        };

        if self.armed_interval != Some(interval) {
            self.armed_interval = Some(interval);
            self.tick_accum = Duration::ZERO;
        }

        self.tick_accum += dt;
        while self.tick_accum >= interval && self.game.lifecycle().is_playing() {
            self.tick_accum -= interval;
            self.game.tick();

            // A tick may change the reported interval (line clears speed
            // the fall up); re-arm immediately rather than draining the
            // remainder at the old cadence.
            match self.game.tick_interval() {
                Some(next) if next != interval => {
                    self.armed_interval = Some(next);
                    self.tick_accum = Duration::ZERO;
                    break;
                },
                Some(_) => {},
                None => {
                    self.armed_interval = None;
                    self.tick_accum = Duration::ZERO;
                    break;
                },
            }
        }
    }

    pub fn hud(&self) -> HudState {
        self.game.hud()
    }

    /// Build this frame's draw-command list.
    pub fn render(&self) -> Scene {
        let meta = self.game.metadata();
        let mut scene = Scene::new(meta.width, meta.height);
        self.game.render(&mut scene);
        scene
    }
}

impl Drop for GameDriver {
    fn drop(&mut self) {
        tracing::debug!(instance = %self.id, "Unmounted game instance");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arcade_game_boilerplate;
    use crate::game_trait::GameMetadata;
    use crate::lifecycle::Session;
    use serde::Serialize;

    /// Minimal tick-driven game: starts on Space, counts ticks, and speeds
    /// up its tick interval after 3 ticks.
    struct CountingGame {
        session: Session,
        state: CountingState,
    }

    #[derive(Debug, Default, Serialize)]
    struct CountingState {
        ticks: u32,
        frames: u32,
    }

    impl CountingGame {
        fn new() -> Self {
            Self {
                session: Session::new(1),
                state: CountingState::default(),
            }
        }
    }

    impl ArcadeGame for CountingGame {
        fn metadata(&self) -> GameMetadata {
            GameMetadata {
                name: "counting".into(),
                description: "test stub".into(),
                width: 100,
                height: 100,
                controls: "SPACE".into(),
            }
        }

        fn reset(&mut self) {
            self.state = CountingState::default();
            self.session.reset_counters(1);
        }

        fn frame(&mut self, input: &InputState) {
            if !self.session.is_playing() {
                if input.just_pressed("Space") {
                    self.reset();
                    self.session.start();
                }
                return;
            }
            self.session.advance_frame();
            self.state.frames += 1;
        }

        fn tick(&mut self) {
            self.state.ticks += 1;
        }

        fn tick_interval(&self) -> Option<Duration> {
            if self.state.ticks >= 3 {
                Some(Duration::from_millis(50))
            } else {
                Some(Duration::from_millis(100))
            }
        }

        arcade_game_boilerplate!(state_type: CountingState);

        fn render(&self, _scene: &mut Scene) {}
    }

    fn ticks(driver: &GameDriver) -> u64 {
        driver.game().state_json()["ticks"].as_u64().unwrap()
    }

    #[test]
    fn no_ticks_while_idle() {
        let mut driver = GameDriver::new(Box::new(CountingGame::new()));
        for _ in 0..20 {
            driver.on_frame(Duration::from_millis(100));
        }
        assert_eq!(ticks(&driver), 0, "Idle games must not tick");
    }

    #[test]
    fn ticks_fire_at_interval_while_playing() {
        let mut driver = GameDriver::new(Box::new(CountingGame::new()));
        driver.handle_event(InputEvent::KeyDown("Space".into()));
        driver.on_frame(Duration::from_millis(16));
        assert!(driver.game().lifecycle().is_playing());

        // 6 frames x 50ms = 300ms at a 100ms interval → 3 ticks.
        for _ in 0..6 {
            driver.on_frame(Duration::from_millis(50));
        }
        assert_eq!(ticks(&driver), 3);
    }

    #[test]
    fn interval_change_replaces_timer() {
        let mut driver = GameDriver::new(Box::new(CountingGame::new()));
        driver.handle_event(InputEvent::KeyDown("Space".into()));
        driver.on_frame(Duration::from_millis(16));

        // Reach the 3rd tick; the game then reports 50ms instead of 100ms.
        driver.on_frame(Duration::from_millis(300));
        assert_eq!(ticks(&driver), 3, "Re-arm must drop the leftover accumulator");

        // The replaced timer starts from zero: 49ms is not yet a tick...
        driver.on_frame(Duration::from_millis(49));
        assert_eq!(ticks(&driver), 3);
        // ...one more ms is.
        driver.on_frame(Duration::from_millis(1));
        assert_eq!(ticks(&driver), 4);
    }

    #[test]
    fn edge_input_visible_for_exactly_one_frame() {
        let mut driver = GameDriver::new(Box::new(CountingGame::new()));
        driver.handle_event(InputEvent::KeyDown("Space".into()));
        driver.on_frame(Duration::from_millis(16));
        assert!(driver.game().lifecycle().is_playing());

        // No release, no new press: a second start intent must not appear.
        let frames_before = driver.game().state_json()["frames"].as_u64().unwrap();
        driver.on_frame(Duration::from_millis(16));
        let frames_after = driver.game().state_json()["frames"].as_u64().unwrap();
        assert_eq!(frames_after, frames_before + 1);
    }

    #[test]
    fn render_uses_game_canvas_size() {
        let driver = GameDriver::new(Box::new(CountingGame::new()));
        let scene = driver.render();
        assert_eq!((scene.width(), scene.height()), (100, 100));
    }
}
