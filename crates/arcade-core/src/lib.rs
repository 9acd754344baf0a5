pub mod driver;
pub mod game_trait;
pub mod geometry;
pub mod input;
pub mod lifecycle;
pub mod registry;
pub mod render;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::game_trait::ArcadeGame;
    use crate::input::InputState;
    use crate::lifecycle::Lifecycle;

    /// Run `n` frames with the given input, clearing edge state per frame.
    pub fn run_frames(game: &mut dyn ArcadeGame, input: &mut InputState, n: usize) {
        for _ in 0..n {
            game.frame(input);
            input.end_frame();
        }
    }

    /// Press a key for exactly one frame.
    pub fn press_key(game: &mut dyn ArcadeGame, input: &mut InputState, code: &str) {
        input.on_key_down(code.to_string());
        game.frame(input);
        input.end_frame();
        input.on_key_up(code.to_string());
        input.end_frame();
    }

    /// Fire `n` fixed ticks directly (discrete games only; no-op otherwise).
    pub fn run_ticks(game: &mut dyn ArcadeGame, n: usize) {
        if game.tick_interval().is_some() {
            for _ in 0..n {
                game.tick();
            }
        }
    }

    // ================================================================
    // Game Trait Contract Tests
    // ================================================================
    // These functions form a generic suite that every ArcadeGame
    // implementation must pass. Game crates call them from their own
    // #[cfg(test)] modules with a concrete game instance and the game's
    // start/restart key.

    /// A fresh game is Idle; the start input transitions it to Playing.
    pub fn contract_starts_from_idle(game: &mut dyn ArcadeGame, start_key: &str) {
        assert_eq!(
            game.lifecycle(),
            Lifecycle::Idle,
            "Fresh game must be Idle"
        );
        let mut input = InputState::new();
        press_key(game, &mut input, start_key);
        assert_eq!(
            game.lifecycle(),
            Lifecycle::Playing,
            "Start input must transition Idle → Playing"
        );
    }

    /// Reset after play yields exactly the state of a reset before play.
    /// A partial reset that leaves stale entities alive fails here.
    pub fn contract_reset_is_idempotent(game: &mut dyn ArcadeGame, start_key: &str) {
        game.reset();
        let pristine = game.state_json();

        let mut input = InputState::new();
        press_key(game, &mut input, start_key);
        run_frames(game, &mut input, 30);
        run_ticks(game, 10);

        game.reset();
        assert_eq!(
            pristine,
            game.state_json(),
            "Reset must fully reinitialize all entity collections and counters"
        );
    }

    /// Score never decreases across frames of a playing game.
    pub fn contract_score_monotonic(game: &mut dyn ArcadeGame, frames: usize) {
        assert!(
            game.lifecycle().is_playing(),
            "Caller must hand over a Playing game"
        );
        let mut input = InputState::new();
        let mut last = game.hud().score;
        for _ in 0..frames {
            game.frame(&input);
            input.end_frame();
            run_ticks(game, 1);
            let score = game.hud().score;
            assert!(
                score >= last,
                "Score must be monotonic while playing: {score} < {last}"
            );
            last = score;
        }
    }

    /// A Terminal game is frozen: frames and ticks without a restart input
    /// must not change the simulation state.
    pub fn contract_terminal_is_frozen(game: &mut dyn ArcadeGame) {
        assert!(
            game.lifecycle().is_terminal(),
            "Caller must hand over a Terminal game"
        );
        let snapshot = game.state_json();
        let mut input = InputState::new();
        run_frames(game, &mut input, 10);
        run_ticks(game, 10);
        assert_eq!(
            snapshot,
            game.state_json(),
            "Terminal state must be frozen until restart"
        );
    }

    /// Restart from Terminal yields a fresh Playing session with the best
    /// score preserved as max(previous best, terminal session score).
    pub fn contract_restart_after_terminal(game: &mut dyn ArcadeGame, start_key: &str) {
        assert!(
            game.lifecycle().is_terminal(),
            "Caller must hand over a Terminal game"
        );
        let hud = game.hud();
        assert!(
            hud.best_score >= hud.score,
            "Best score must have folded in the terminal session score"
        );

        let mut input = InputState::new();
        press_key(game, &mut input, start_key);
        let restarted = game.hud();
        assert_eq!(
            game.lifecycle(),
            Lifecycle::Playing,
            "Restart input must transition Terminal → Playing"
        );
        assert_eq!(restarted.score, 0, "Restart must zero the session score");
        assert_eq!(
            restarted.best_score, hud.best_score,
            "Restart must preserve the best score"
        );
    }
}
