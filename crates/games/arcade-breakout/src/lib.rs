pub mod config;
pub mod physics;
mod render;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use arcade_core::arcade_game_boilerplate;
use arcade_core::game_trait::{ArcadeGame, GameMetadata};
use arcade_core::geometry::{Aabb, Vec2};
use arcade_core::input::InputState;
use arcade_core::lifecycle::{Outcome, Session};
use arcade_core::render::Scene;

use config::BreakoutConfig;
use physics::BallEvent;

/// One brick of the wall.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Aabb,
    pub alive: bool,
    /// Row index, used for the palette.
    pub row: usize,
}

/// Simulation state: paddle, ball, and the brick wall.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakoutState {
    pub paddle_x: f32,
    pub ball: Vec2,
    pub ball_vel: Vec2,
    /// Attached balls ride the paddle until launched.
    pub ball_attached: bool,
    pub bricks: Vec<Brick>,
}

/// The paddle-and-bricks game, one physics step per display frame.
pub struct BreakoutGame {
    session: Session,
    state: BreakoutState,
    cfg: BreakoutConfig,
    rng: StdRng,
    seed: u64,
}

fn make_bricks(cfg: &BreakoutConfig) -> Vec<Brick> {
    let pitch = cfg.brick_w();
    let mut bricks = Vec::with_capacity(cfg.brick_rows * cfg.brick_cols);
    for row in 0..cfg.brick_rows {
        for col in 0..cfg.brick_cols {
            bricks.push(Brick {
                rect: Aabb::new(
                    cfg.side_margin + col as f32 * pitch,
                    cfg.brick_top + row as f32 * (cfg.brick_h + cfg.brick_pad),
                    pitch - cfg.brick_pad,
                    cfg.brick_h,
                ),
                alive: true,
                row,
            });
        }
    }
    bricks
}

impl BreakoutGame {
    pub fn new() -> Self {
        Self::with_config(BreakoutConfig::load())
    }

    pub fn with_config(cfg: BreakoutConfig) -> Self {
        Self::build(cfg, rand::random())
    }

    /// Deterministic construction for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::build(BreakoutConfig::default(), seed)
    }

    fn build(cfg: BreakoutConfig, seed: u64) -> Self {
        let mut game = Self {
            session: Session::new(cfg.lives),
            state: BreakoutState {
                paddle_x: 0.0,
                ball: Vec2::ZERO,
                ball_vel: Vec2::ZERO,
                ball_attached: true,
                bricks: Vec::new(),
            },
            cfg,
            rng: StdRng::seed_from_u64(seed),
            seed,
        };
        game.reset();
        game
    }

    pub fn state(&self) -> &BreakoutState {
        &self.state
    }

    fn start_intent(input: &InputState) -> bool {
        input.just_pressed("Space") || input.click().is_some()
    }
}

impl Default for BreakoutGame {
    fn default() -> Self {
        Self::new()
    }
}

impl ArcadeGame for BreakoutGame {
    fn metadata(&self) -> GameMetadata {
        GameMetadata {
            name: "Neon Breakout".to_string(),
            description: "Clear the brick wall, keep the ball alive.".to_string(),
            width: self.cfg.width as u32,
            height: self.cfg.height as u32,
            controls: "MOUSE / ← → to move · SPACE / CLICK to launch".to_string(),
        }
    }

    fn reset(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.state.paddle_x = self.cfg.width / 2.0 - self.cfg.paddle_w / 2.0;
        self.state.bricks = make_bricks(&self.cfg);
        physics::attach_ball(&mut self.state, &self.cfg, &mut self.rng);
        self.session.reset_counters(self.cfg.lives);
    }

    fn frame(&mut self, input: &InputState) {
        if !self.session.is_playing() {
            if Self::start_intent(input) {
                if self.session.lifecycle().is_terminal() {
                    self.reset();
                }
                self.session.start();
            }
            return;
        }

        self.session.advance_frame();

        physics::move_paddle(
            &mut self.state,
            &self.cfg,
            input.pointer_active().then(|| input.cursor().x),
            input.is_down("ArrowLeft"),
            input.is_down("ArrowRight"),
        );

        if self.state.ball_attached {
            if Self::start_intent(input) {
                self.state.ball_attached = false;
            } else {
                self.state.ball = Vec2::new(
                    self.state.paddle_x + self.cfg.paddle_w / 2.0,
                    self.cfg.paddle_y() - self.cfg.ball_radius - 2.0,
                );
            }
            return;
        }

        match physics::step_ball(&mut self.state, &self.cfg) {
            BallEvent::BrickDestroyed(_) => {
                self.session.add_score(self.cfg.brick_points);
            },
            BallEvent::BallLost => {
                if self.session.lose_life() == 0 {
                    self.session.end(Outcome::Dead);
                } else {
                    physics::attach_ball(&mut self.state, &self.cfg, &mut self.rng);
                }
                return;
            },
            BallEvent::None => {},
        }

        if self.state.bricks.iter().all(|b| !b.alive) {
            self.session.end(Outcome::Won);
        }
    }

    arcade_game_boilerplate!(state_type: BreakoutState);

    fn render(&self, scene: &mut Scene) {
        render::draw(
            &self.state,
            &self.cfg,
            self.session.lifecycle(),
            self.session.score(),
            self.session.lives(),
            scene,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade_core::geometry::Axis;
    use arcade_core::lifecycle::Lifecycle;
    use arcade_core::test_helpers;

    fn playing_game(seed: u64) -> BreakoutGame {
        let mut game = BreakoutGame::with_seed(seed);
        let mut input = InputState::new();
        test_helpers::press_key(&mut game, &mut input, "Space");
        assert!(game.session.is_playing());
        game
    }

    /// Playing, ball launched with a known velocity, bricks cleared away so
    /// tests control exactly what the ball can hit.
    fn free_ball_game(pos: Vec2, vel: Vec2) -> BreakoutGame {
        let mut game = playing_game(1);
        game.state.ball_attached = false;
        game.state.ball = pos;
        game.state.ball_vel = vel;
        for brick in &mut game.state.bricks {
            brick.alive = false;
        }
        game
    }

    #[test]
    fn ball_rides_paddle_until_launch() {
        let mut game = playing_game(1);
        let input = InputState::new();
        let ball_before = game.state.ball;
        game.frame(&input);
        assert!(game.state.ball_attached);
        assert_eq!(game.state.ball, ball_before, "Attached ball holds its serve spot");

        let mut input = InputState::new();
        input.on_key_down("Space".into());
        game.frame(&input);
        assert!(!game.state.ball_attached, "Space launches the ball");
    }

    #[test]
    fn brick_hit_flips_vertical_velocity_and_scores() {
        // Ball at (240,200) moving (3.5,-4); brick spans x∈[240,260],
        // y∈[190,212]. The hit lands this frame: vy flips to +4, the brick
        // dies, and the per-brick points land.
        let mut game = free_ball_game(Vec2::new(240.0, 200.0), Vec2::new(3.5, -4.0));
        game.state.bricks = vec![Brick {
            rect: Aabb::new(240.0, 190.0, 20.0, 22.0),
            alive: true,
            row: 0,
        }];

        let input = InputState::new();
        game.frame(&input);

        assert!(!game.state.bricks[0].alive, "Brick must be destroyed");
        assert_eq!(game.session.score(), 10);
        assert_eq!(game.state.ball_vel.y, 4.0, "Vertical velocity sign flips");
        assert_eq!(game.state.ball_vel.x, 3.5, "Horizontal velocity unchanged");
    }

    #[test]
    fn shallow_side_hit_flips_horizontal() {
        let mut game = free_ball_game(Vec2::new(190.0, 111.0), Vec2::new(4.0, 0.0));
        game.state.bricks = vec![Brick {
            rect: Aabb::new(200.0, 100.0, 43.0, 22.0),
            alive: true,
            row: 0,
        }];

        let input = InputState::new();
        game.frame(&input);

        assert!(!game.state.bricks[0].alive);
        assert_eq!(game.state.ball_vel.x, -4.0, "Side hit reflects horizontally");
        assert_eq!(game.state.ball_vel.y, 0.0);
    }

    #[test]
    fn bounce_axis_tie_prefers_vertical() {
        let brick = Aabb::new(100.0, 100.0, 40.0, 22.0);
        // Center outside the brick, identical penetration on both axes.
        let axis = physics::brick_bounce_axis(Vec2::new(96.0, 96.0), 8.0, &brick);
        assert_eq!(axis, Axis::Vertical);
    }

    #[test]
    fn walls_reflect_ball_inward() {
        let mut game = free_ball_game(Vec2::new(10.0, 300.0), Vec2::new(-5.0, 1.0));
        let input = InputState::new();
        game.frame(&input);
        assert!(game.state.ball_vel.x > 0.0, "Left wall reflects rightward");
        assert!(game.state.ball.x >= game.cfg.ball_radius, "Ball pushed back in bounds");

        let mut game = free_ball_game(Vec2::new(240.0, 10.0), Vec2::new(1.0, -5.0));
        game.frame(&input);
        assert!(game.state.ball_vel.y > 0.0, "Ceiling reflects downward");
    }

    #[test]
    fn paddle_hit_reaims_by_contact_point() {
        let mut game = free_ball_game(Vec2::ZERO, Vec2::ZERO);
        game.state.paddle_x = 200.0;
        // Strike near the right edge of the paddle, coming down.
        game.state.ball = Vec2::new(270.0, game.cfg.paddle_y() - game.cfg.ball_radius - 1.0);
        game.state.ball_vel = Vec2::new(0.0, 4.0);

        let input = InputState::new();
        game.frame(&input);

        assert!(game.state.ball_vel.y < 0.0, "Paddle sends the ball back up");
        assert!(
            game.state.ball_vel.x > 0.0,
            "Right-of-center contact aims right, got {}",
            game.state.ball_vel.x
        );
    }

    #[test]
    fn lost_ball_costs_a_life_and_reattaches() {
        let mut game = free_ball_game(Vec2::new(240.0, 540.0), Vec2::new(0.0, 5.0));
        let input = InputState::new();
        game.frame(&input);

        assert_eq!(game.session.lives(), 2);
        assert!(game.state.ball_attached, "Ball re-serves after a lost life");
        assert!(game.session.is_playing());
    }

    #[test]
    fn last_life_ends_game_same_frame() {
        let mut game = free_ball_game(Vec2::new(240.0, 540.0), Vec2::new(0.0, 5.0));
        game.session = {
            let mut s = Session::new(1);
            s.start();
            s
        };
        let input = InputState::new();
        game.frame(&input);

        assert_eq!(game.session.lives(), 0);
        assert_eq!(game.session.lifecycle(), Lifecycle::Terminal(Outcome::Dead));
    }

    #[test]
    fn clearing_all_bricks_wins() {
        let mut game = playing_game(2);
        game.state.ball_attached = false;
        game.state.ball = Vec2::new(240.0, 300.0);
        game.state.ball_vel = Vec2::new(0.0, 1.0);
        for brick in &mut game.state.bricks {
            brick.alive = false;
        }
        // Leave a single brick directly in the ball's path.
        game.state.bricks[0] = Brick {
            rect: Aabb::new(232.0, 305.0, 16.0, 10.0),
            alive: true,
            row: 0,
        };

        let input = InputState::new();
        game.frame(&input);

        assert_eq!(game.session.lifecycle(), Lifecycle::Terminal(Outcome::Won));
        assert_eq!(game.session.score(), 10);
        assert_eq!(game.session.best_score(), 10, "Win folds best score");
    }

    #[test]
    fn paddle_clamps_to_playfield() {
        let mut game = playing_game(3);
        let mut input = InputState::new();
        input.on_key_down("ArrowLeft".into());
        for _ in 0..200 {
            game.frame(&input);
        }
        assert_eq!(game.state.paddle_x, 0.0);
    }

    #[test]
    fn brick_wall_has_expected_layout() {
        let game = BreakoutGame::with_seed(4);
        assert_eq!(game.state.bricks.len(), 60);
        let first = &game.state.bricks[0];
        assert_eq!(first.rect.x, 10.0);
        assert_eq!(first.rect.y, 60.0);
        assert_eq!(first.rect.w, 43.0);
    }

    // ================================================================
    // Game Trait Contract Tests
    // ================================================================

    #[test]
    fn contract_starts_from_idle() {
        let mut game = BreakoutGame::with_seed(10);
        test_helpers::contract_starts_from_idle(&mut game, "Space");
    }

    #[test]
    fn contract_reset_is_idempotent() {
        let mut game = BreakoutGame::with_seed(11);
        test_helpers::contract_reset_is_idempotent(&mut game, "Space");
    }

    #[test]
    fn contract_score_monotonic() {
        let mut game = playing_game(12);
        test_helpers::contract_score_monotonic(&mut game, 60);
    }

    #[test]
    fn contract_terminal_is_frozen() {
        let mut game = free_ball_game(Vec2::new(240.0, 540.0), Vec2::new(0.0, 5.0));
        game.session = {
            let mut s = Session::new(1);
            s.start();
            s
        };
        let input = InputState::new();
        game.frame(&input);
        assert!(game.session.lifecycle().is_terminal());
        test_helpers::contract_terminal_is_frozen(&mut game);
    }

    #[test]
    fn contract_restart_after_terminal() {
        let mut game = free_ball_game(Vec2::new(240.0, 540.0), Vec2::new(0.0, 5.0));
        game.session = {
            let mut s = Session::new(1);
            s.start();
            s
        };
        let input = InputState::new();
        game.frame(&input);
        assert!(game.session.lifecycle().is_terminal());
        test_helpers::contract_restart_after_terminal(&mut game, "Space");
    }
}
