pub mod config;
mod render;

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use arcade_core::arcade_game_boilerplate;
use arcade_core::game_trait::{ArcadeGame, GameMetadata};
use arcade_core::input::InputState;
use arcade_core::lifecycle::{Outcome, Session};
use arcade_core::render::Scene;

use config::FlappyConfig;

/// A pipe pair; the gap opens between `top_height` and
/// `top_height + pipe_gap`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pipe {
    pub x: f32,
    pub top_height: f32,
    /// Whether this pipe has already been scored.
    pub passed: bool,
}

/// Simulation state: the bird's vertical motion and the pipe field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlappyState {
    pub bird_y: f32,
    pub bird_vel: f32,
    /// Display tilt derived from velocity.
    pub bird_rot: f32,
    pub pipes: Vec<Pipe>,
}

/// The gravity-and-flap pipe dodger, one physics step per display frame.
pub struct FlappyGame {
    session: Session,
    state: FlappyState,
    cfg: FlappyConfig,
    rng: StdRng,
    seed: u64,
}

impl FlappyGame {
    pub fn new() -> Self {
        Self::with_config(FlappyConfig::load())
    }

    pub fn with_config(cfg: FlappyConfig) -> Self {
        Self::build(cfg, rand::random())
    }

    /// Deterministic construction for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::build(FlappyConfig::default(), seed)
    }

    fn build(cfg: FlappyConfig, seed: u64) -> Self {
        let mut game = Self {
            session: Session::new(0),
            state: FlappyState {
                bird_y: 0.0,
                bird_vel: 0.0,
                bird_rot: 0.0,
                pipes: Vec::new(),
            },
            cfg,
            rng: StdRng::seed_from_u64(seed),
            seed,
        };
        game.reset();
        game
    }

    pub fn state(&self) -> &FlappyState {
        &self.state
    }

    fn flap_intent(input: &InputState) -> bool {
        input.just_pressed("Space") || input.just_pressed("ArrowUp") || input.click().is_some()
    }

    fn spawn_pipe(&mut self) {
        let min_h = self.cfg.pipe_margin;
        let max_h = self.cfg.height - self.cfg.pipe_gap - self.cfg.pipe_margin;
        self.state.pipes.push(Pipe {
            x: self.cfg.width + 10.0,
            top_height: min_h + self.rng.random::<f32>() * (max_h - min_h),
            passed: false,
        });
    }

    /// Bird vs floor, ceiling, and pipe rectangles.
    fn bird_collides(&self) -> bool {
        let r = self.cfg.bird_radius();
        let bx = self.cfg.bird_x;
        let by = self.state.bird_y;

        if by + r > self.cfg.height || by - r < 0.0 {
            return true;
        }
        self.state.pipes.iter().any(|p| {
            let in_x = bx + r > p.x && bx - r < p.x + self.cfg.pipe_width;
            let in_top = by - r < p.top_height;
            let in_bottom = by + r > p.top_height + self.cfg.pipe_gap;
            in_x && (in_top || in_bottom)
        })
    }
}

impl Default for FlappyGame {
    fn default() -> Self {
        Self::new()
    }
}

impl ArcadeGame for FlappyGame {
    fn metadata(&self) -> GameMetadata {
        GameMetadata {
            name: "Neon Flappy".to_string(),
            description: "Flap through the pipe gaps.".to_string(),
            width: self.cfg.width as u32,
            height: self.cfg.height as u32,
            controls: "SPACE / CLICK / TAP to flap".to_string(),
        }
    }

    fn reset(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.state = FlappyState {
            bird_y: self.cfg.height / 2.0,
            bird_vel: 0.0,
            bird_rot: 0.0,
            pipes: Vec::new(),
        };
        self.session.reset_counters(0);
    }

    fn frame(&mut self, input: &InputState) {
        let flap = Self::flap_intent(input);

        if !self.session.is_playing() {
            // The flap doubles as start and restart, and applies its
            // impulse immediately so the bird doesn't fall into the first
            // frame.
            if flap {
                self.reset();
                self.session.start();
                self.state.bird_vel = self.cfg.flap_force;
            }
            return;
        }

        self.session.advance_frame();
        if flap {
            self.state.bird_vel = self.cfg.flap_force;
        }

        self.state.bird_vel += self.cfg.gravity;
        self.state.bird_y += self.state.bird_vel;
        self.state.bird_rot = (self.state.bird_vel * 0.06).clamp(-0.5, 1.2);

        if self.session.frame_count() % self.cfg.pipe_interval == 0 {
            self.spawn_pipe();
        }

        let despawn_x = -self.cfg.pipe_width - 10.0;
        self.state.pipes.retain(|p| p.x > despawn_x);

        let mut passed = 0u32;
        for p in &mut self.state.pipes {
            p.x -= self.cfg.pipe_speed;
            if !p.passed && p.x + self.cfg.pipe_width < self.cfg.bird_x {
                p.passed = true;
                passed += 1;
            }
        }
        self.session.add_score(passed);

        if self.bird_collides() {
            self.session.end(Outcome::Dead);
        }
    }

    arcade_game_boilerplate!(state_type: FlappyState);

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
