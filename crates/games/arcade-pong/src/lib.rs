pub mod config;
pub mod physics;
mod render;

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use arcade_core::arcade_game_boilerplate;
use arcade_core::game_trait::{ArcadeGame, GameMetadata};
use arcade_core::geometry::Vec2;
use arcade_core::input::InputState;
use arcade_core::lifecycle::{Outcome, Session};
use arcade_core::render::Scene;

use config::PongConfig;
use physics::GoalEvent;

/// Simulation state: both paddles, the ball, and the CPU's points.
///
/// The player's points live in the session score (monotonic); the CPU's
/// are ordinary game state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PongState {
    pub player_y: f32,
    pub cpu_y: f32,
    pub ball: Vec2,
    pub ball_vel: Vec2,
    pub cpu_score: u32,
}

/// Player-versus-CPU pong, first to seven.
pub struct PongGame {
    session: Session,
    state: PongState,
    cfg: PongConfig,
    rng: StdRng,
    seed: u64,
}

impl PongGame {
    pub fn new() -> Self {
        Self::with_config(PongConfig::load())
    }

    pub fn with_config(cfg: PongConfig) -> Self {
        Self::build(cfg, rand::random())
    }

    /// Deterministic construction for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::build(PongConfig::default(), seed)
    }

    fn build(cfg: PongConfig, seed: u64) -> Self {
        let mut game = Self {
            session: Session::new(0),
            state: PongState {
                player_y: 0.0,
                cpu_y: 0.0,
                ball: Vec2::ZERO,
                ball_vel: Vec2::ZERO,
                cpu_score: 0,
            },
            cfg,
            rng: StdRng::seed_from_u64(seed),
            seed,
        };
        game.reset();
        game
    }

    pub fn state(&self) -> &PongState {
        &self.state
    }

    /// Serve from the center toward `dir` (+1 = at the CPU), with a small
    /// random vertical angle.
    fn serve(&mut self, dir: f32) {
        self.state.ball = Vec2::new(self.cfg.width / 2.0, self.cfg.height / 2.0);
        let spread = self.cfg.serve_spread;
        let angle = self.rng.random::<f32>() * spread - spread / 2.0;
        self.state.ball_vel = Vec2::new(
            self.cfg.ball_speed_init * dir,
            self.cfg.ball_speed_init * angle.sin(),
        );
    }

    fn start_intent(input: &InputState) -> bool {
        input.just_pressed("Space") || input.click().is_some()
    }
}

impl Default for PongGame {
    fn default() -> Self {
        Self::new()
    }
}

impl ArcadeGame for PongGame {
    fn metadata(&self) -> GameMetadata {
        GameMetadata {
            name: "Neon Pong".to_string(),
            description: "First to seven against the CPU.".to_string(),
            width: self.cfg.width as u32,
            height: self.cfg.height as u32,
            controls: "MOUSE / ARROW KEYS to move · First to 7 wins".to_string(),
        }
    }

    fn reset(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
        let mid = self.cfg.height / 2.0 - self.cfg.paddle_h / 2.0;
        self.state.player_y = mid;
        self.state.cpu_y = mid;
        self.state.cpu_score = 0;
        self.session.reset_counters(0);
        self.serve(1.0);
    }

    fn frame(&mut self, input: &InputState) {
        if !self.session.is_playing() {
            if Self::start_intent(input) {
                self.reset();
                self.session.start();
            }
            return;
        }

        self.session.advance_frame();

        physics::move_player_paddle(
            &mut self.state,
            &self.cfg,
            input.is_down("ArrowUp") || input.is_down("KeyW"),
            input.is_down("ArrowDown") || input.is_down("KeyS"),
            input.pointer_active().then(|| input.cursor().y),
        );
        physics::move_cpu_paddle(&mut self.state, &self.cfg);

        match physics::step_ball(&mut self.state, &self.cfg) {
            GoalEvent::PlayerPoint => {
                self.session.add_score(1);
                self.serve(-1.0);
            },
            GoalEvent::CpuPoint => {
                self.state.cpu_score += 1;
                self.serve(1.0);
            },
            GoalEvent::None => {},
        }

        if self.session.score() >= self.cfg.win_score {
            self.session.end(Outcome::Won);
        } else if self.state.cpu_score >= self.cfg.win_score {
            self.session.end(Outcome::Dead);
        }
    }

    arcade_game_boilerplate!(state_type: PongState);

    fn render(&self, scene: &mut Scene) {
        render::draw(
            &self.state,
            &self.cfg,
            self.session.lifecycle(),
            self.session.score(),
            scene,
        );
    }
}
