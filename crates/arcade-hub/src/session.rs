use std::time::Duration;

use arcade_core::driver::{GameDriver, InputEvent};
use arcade_core::game_trait::ArcadeGame;
use arcade_core::lifecycle::{HudState, Lifecycle};
use arcade_core::render::Scene;

use crate::prefs::PreferenceStore;

/// Coins earned per this many points of terminal session score.
pub const POINTS_PER_COIN: u32 = 10;

/// One mounted game plus its hub-side concerns: the frame driver and the
/// currency award when a session ends.
///
/// Dropping the session unmounts the game; the driver and any pending tick
/// state are discarded with it.
pub struct ArcadeSession {
    driver: GameDriver,
    store: Box<dyn PreferenceStore>,
    last_lifecycle: Lifecycle,
}

impl ArcadeSession {
    pub fn new(game: Box<dyn ArcadeGame>, store: Box<dyn PreferenceStore>) -> Self {
        let last_lifecycle = game.lifecycle();
        Self {
            driver: GameDriver::new(game),
            store,
            last_lifecycle,
        }
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        self.driver.handle_event(event);
    }

    /// Advance one display frame, paying out coins when a play session
    /// reaches its terminal state.
    pub fn on_frame(&mut self, dt: Duration) {
        self.driver.on_frame(dt);

        let lifecycle = self.driver.game().lifecycle();
        if lifecycle.is_terminal() && self.last_lifecycle == Lifecycle::Playing {
            let score = self.driver.hud().score;
            let coins = u64::from(score / POINTS_PER_COIN);
            if coins > 0 {
                self.store.add_currency(coins);
                tracing::info!(score, coins, balance = self.store.get_currency(), "Session payout");
            }
        }
        self.last_lifecycle = lifecycle;
    }

    pub fn hud(&self) -> HudState {
        self.driver.hud()
    }

    pub fn render(&self) -> Scene {
        self.driver.render()
    }

    pub fn store(&self) -> &dyn PreferenceStore {
        &*self.store
    }

    pub fn store_mut(&mut self) -> &mut dyn PreferenceStore {
        &mut *self.store
    }

    pub fn game(&self) -> &dyn ArcadeGame {
        self.driver.game()
    }
}
