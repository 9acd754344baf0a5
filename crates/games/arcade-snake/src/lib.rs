pub mod board;
pub mod config;
mod render;

use std::collections::VecDeque;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use arcade_core::arcade_game_boilerplate;
use arcade_core::game_trait::{ArcadeGame, GameMetadata};
use arcade_core::input::InputState;
use arcade_core::lifecycle::{Outcome, Session};
use arcade_core::render::Scene;

use board::{Cell, Direction};
use config::SnakeConfig;

/// Simulation state: the body (head first), the applied and queued
/// directions, and the food cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnakeState {
    pub body: VecDeque<Cell>,
    pub dir: Direction,
    /// Direction queued from input, applied at the start of the next tick.
    pub queued_dir: Direction,
    pub food: Cell,
}

/// The grid snake game: fixed 120 ms ticks, one cell per step.
pub struct SnakeGame {
    session: Session,
    state: SnakeState,
    cfg: SnakeConfig,
    rng: StdRng,
    seed: u64,
}

impl SnakeGame {
    pub fn new() -> Self {
        Self::with_config(SnakeConfig::load())
    }

    pub fn with_config(cfg: SnakeConfig) -> Self {
        Self::build(cfg, rand::random())
    }

    /// Deterministic construction for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::build(SnakeConfig::default(), seed)
    }

    fn build(cfg: SnakeConfig, seed: u64) -> Self {
        let mut game = Self {
            session: Session::new(0),
            state: SnakeState {
                body: VecDeque::new(),
                dir: Direction::Right,
                queued_dir: Direction::Right,
                food: Cell::new(0, 0),
            },
            cfg,
            rng: StdRng::seed_from_u64(seed),
            seed,
        };
        game.reset();
        game
    }

    pub fn state(&self) -> &SnakeState {
        &self.state
    }

    /// Translate this frame's edge-triggered arrow presses to a direction.
    fn direction_intent(input: &InputState) -> Option<Direction> {
        if input.just_pressed("ArrowUp") {
            Some(Direction::Up)
        } else if input.just_pressed("ArrowDown") {
            Some(Direction::Down)
        } else if input.just_pressed("ArrowLeft") {
            Some(Direction::Left)
        } else if input.just_pressed("ArrowRight") {
            Some(Direction::Right)
        } else {
            None
        }
    }

    /// Queue a direction change, rejecting a reversal into the snake's own
    /// neck (moving Right, queueing Left would self-collide immediately).
    fn queue_direction(&mut self, dir: Direction) {
        if dir == self.state.dir.opposite() {
            tracing::debug!(?dir, current = ?self.state.dir, "Discarded reversal input");
            return;
        }
        self.state.queued_dir = dir;
    }
}

impl Default for SnakeGame {
    fn default() -> Self {
        Self::new()
    }
}

impl ArcadeGame for SnakeGame {
    fn metadata(&self) -> GameMetadata {
        GameMetadata {
            name: "Neon Snake".to_string(),
            description: "Eat the glow, don't eat yourself.".to_string(),
            width: (self.cfg.cols as u32) * self.cfg.cell,
            height: (self.cfg.rows as u32) * self.cfg.cell,
            controls: "ARROW KEYS to move".to_string(),
        }
    }

    fn reset(&mut self) {
        // Reseed so a restart reproduces the instance's initial layout and
        // food sequence exactly (idempotent reset).
        self.rng = StdRng::seed_from_u64(self.seed);
        let start = Cell::new(self.cfg.cols / 2, self.cfg.rows / 2);
        self.state = SnakeState {
            body: VecDeque::from([start]),
            dir: Direction::Right,
            queued_dir: Direction::Right,
            food: Cell::new(self.cfg.cols * 3 / 4, self.cfg.rows / 2),
        };
        self.session.reset_counters(0);
    }

    fn frame(&mut self, input: &InputState) {
        let intent = Self::direction_intent(input);

        if !self.session.is_playing() {
            // Any arrow both starts (or restarts) and seeds the direction.
            if let Some(dir) = intent {
                self.reset();
                self.session.start();
                self.queue_direction(dir);
            }
            return;
        }

        self.session.advance_frame();
        if let Some(dir) = intent {
            self.queue_direction(dir);
        }
    }

    fn tick(&mut self) {
        if !self.session.is_playing() {
            return;
        }

        self.state.dir = self.state.queued_dir;
        let head = *self.state.body.front().expect("snake body is never empty");
        let next = head.step(self.state.dir);

        if !next.in_bounds(self.cfg.cols, self.cfg.rows) {
            self.session.end(Outcome::Dead);
            return;
        }
        if self.state.body.contains(&next) {
            self.session.end(Outcome::Dead);
            return;
        }

        self.state.body.push_front(next);
        if next == self.state.food {
            self.session.add_score(1);
            self.state.food =
                board::random_food(&mut self.rng, self.cfg.cols, self.cfg.rows, &self.state.body);
        } else {
            self.state.body.pop_back();
        }
    }

    fn tick_interval(&self) -> Option<Duration> {
        Some(Duration::from_millis(self.cfg.tick_ms))
    }

    arcade_game_boilerplate!(state_type: SnakeState);

    fn render(&self, scene: &mut Scene) {
        render::draw(
            &self.state,
            &self.cfg,
            self.session.lifecycle(),
            self.session.score(),
            self.session.frame_count(),
            scene,
        );
    }
}
