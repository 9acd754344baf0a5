pub mod config;
pub mod traffic;
mod render;

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use arcade_core::arcade_game_boilerplate;
use arcade_core::game_trait::{ArcadeGame, GameMetadata};
use arcade_core::geometry::Aabb;
use arcade_core::input::{Cooldown, InputState};
use arcade_core::lifecycle::{Outcome, Session};
use arcade_core::render::Scene;

use config::RacerConfig;
use traffic::{OBSTACLE_COLOR_COUNT, Obstacle};

/// Simulation state: the player's lane (logical and eased), oncoming
/// traffic, and the current scroll speed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RacerState {
    pub player_lane: usize,
    /// Snap target x for the player sprite.
    pub player_x: f32,
    /// Eased x the sprite is rendered at; collisions use this, so a late
    /// lane change can still clip a bumper.
    pub player_anim_x: f32,
    pub obstacles: Vec<Obstacle>,
    pub speed: f32,
    pub lane_cooldown: Cooldown,
}

/// The lane-dodging traffic racer: distance is score, traffic thickens
/// and accelerates with progress.
pub struct RacerGame {
    session: Session,
    state: RacerState,
    cfg: RacerConfig,
    rng: StdRng,
    seed: u64,
}

impl RacerGame {
    pub fn new() -> Self {
        Self::with_config(RacerConfig::load())
    }

    pub fn with_config(cfg: RacerConfig) -> Self {
        Self::build(cfg, rand::random())
    }

    /// Deterministic construction for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::build(RacerConfig::default(), seed)
    }

    fn build(cfg: RacerConfig, seed: u64) -> Self {
        let mut game = Self {
            session: Session::new(0),
            state: RacerState {
                player_lane: 0,
                player_x: 0.0,
                player_anim_x: 0.0,
                obstacles: Vec::new(),
                speed: cfg.base_speed,
                lane_cooldown: Cooldown::default(),
            },
            cfg,
            rng: StdRng::seed_from_u64(seed),
            seed,
        };
        game.reset();
        game
    }

    pub fn state(&self) -> &RacerState {
        &self.state
    }

    fn snap_player_to_lane(&mut self) {
        self.state.player_x = self.cfg.lane_x(self.state.player_lane, self.cfg.player_w);
    }

    /// Debounced lane change; `None` direction means no intent this frame.
    fn change_lane(&mut self, left: bool) {
        if left && self.state.player_lane > 0 {
            self.state.player_lane -= 1;
        } else if !left && self.state.player_lane < self.cfg.lanes - 1 {
            self.state.player_lane += 1;
        } else {
            return;
        }
        self.snap_player_to_lane();
        self.state.lane_cooldown.arm(self.cfg.lane_debounce);
    }

    fn player_hits_traffic(&self) -> bool {
        let inset = self.cfg.collision_inset;
        let player = Aabb::new(
            self.state.player_anim_x + inset,
            self.cfg.player_y() + inset,
            self.cfg.player_w - inset * 2.0,
            self.cfg.player_h - inset * 2.0,
        );
        self.state.obstacles.iter().any(|o| {
            let car = Aabb::new(
                self.cfg.lane_x(o.lane, self.cfg.obstacle_w) + inset,
                o.y + inset,
                self.cfg.obstacle_w - inset * 2.0,
                self.cfg.obstacle_h - inset * 2.0,
            );
            player.intersects(&car)
        })
    }
}

impl Default for RacerGame {
    fn default() -> Self {
        Self::new()
    }
}

impl ArcadeGame for RacerGame {
    fn metadata(&self) -> GameMetadata {
        GameMetadata {
            name: "Neon Racer".to_string(),
            description: "Weave through oncoming traffic for distance.".to_string(),
            width: self.cfg.width as u32,
            height: self.cfg.height as u32,
            controls: "← → ARROW KEYS or CLICK LEFT/RIGHT to change lanes".to_string(),
        }
    }

    fn reset(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.state.player_lane = self.cfg.lanes / 2;
        self.snap_player_to_lane();
        self.state.player_anim_x = self.state.player_x;
        self.state.obstacles.clear();
        self.state.speed = self.cfg.base_speed;
        self.state.lane_cooldown.clear();
        self.session.reset_counters(0);
    }

    fn frame(&mut self, input: &InputState) {
        if !self.session.is_playing() {
            if input.any_just_pressed() || input.click().is_some() {
                self.reset();
                self.session.start();
            }
            return;
        }

        self.session.advance_frame();
        self.state.lane_cooldown.count_down();

        let left_intent = input.just_pressed("ArrowLeft") || input.just_pressed("KeyA");
        let right_intent = input.just_pressed("ArrowRight") || input.just_pressed("KeyD");
        if self.state.lane_cooldown.ready() && (left_intent || right_intent) {
            self.change_lane(left_intent);
        }
        // Click steering picks the canvas half; the pointer has no
        // debounce, matching the touch controls.
        if let Some(click) = input.click() {
            self.change_lane(click.x < self.cfg.width / 2.0);
        }

        // Ease the sprite toward its lane.
        let diff = self.state.player_x - self.state.player_anim_x;
        self.state.player_anim_x += diff * self.cfg.lane_ease;

        if self.session.frame_count() % self.cfg.score_every == 0 {
            self.session.add_score(1);
        }
        self.state.speed = traffic::speed_for(&self.cfg, self.session.score());

        let interval = traffic::spawn_interval_for(&self.cfg, self.session.score());
        if self.session.frame_count() % interval == 0
            && let Some(lane) = traffic::choose_spawn_lane(&mut self.rng, &self.cfg, &self.state.obstacles)
        {
            self.state.obstacles.push(Obstacle {
                lane,
                y: -self.cfg.obstacle_h,
                color: self.rng.random_range(0..OBSTACLE_COLOR_COUNT),
            });
        }

        let despawn_y = self.cfg.height + self.cfg.obstacle_h;
        self.state.obstacles.retain(|o| o.y < despawn_y);
        let speed = self.state.speed;
        for o in &mut self.state.obstacles {
            o.y += speed;
        }

        if self.player_hits_traffic() {
            self.session.end(Outcome::Dead);
        }
    }

    arcade_game_boilerplate!(state_type: RacerState);

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

#[cfg(test)]
mod tests {
    use super::*;
    use arcade_core::lifecycle::Lifecycle;
    use arcade_core::test_helpers;

    fn playing_game(seed: u64) -> RacerGame {
        let mut game = RacerGame::with_seed(seed);
        let mut input = InputState::new();
        test_helpers::press_key(&mut game, &mut input, "Space");
        assert!(game.session.is_playing());
        game
    }

    fn press_for_one_frame(game: &mut RacerGame, code: &str) {
        let mut input = InputState::new();
        input.on_key_down(code.to_string());
        game.frame(&input);
    }

    #[test]
    fn starts_in_the_middle_lane() {
        let game = RacerGame::with_seed(1);
        assert_eq!(game.state.player_lane, 2);
        assert_eq!(game.state.player_x, 2.0 * 96.0 + 48.0 - 18.0);
    }

    #[test]
    fn lane_change_is_debounced() {
        let mut game = playing_game(1);
        press_for_one_frame(&mut game, "ArrowLeft");
        assert_eq!(game.state.player_lane, 1);

        // A second press inside the 12-frame window is discarded.
        press_for_one_frame(&mut game, "ArrowLeft");
        assert_eq!(game.state.player_lane, 1, "Debounce must absorb the second press");

        let input = InputState::new();
        for _ in 0..12 {
            game.frame(&input);
        }
        press_for_one_frame(&mut game, "ArrowLeft");
        assert_eq!(game.state.player_lane, 0, "Cooldown expired, press lands");
    }

    #[test]
    fn lanes_clamp_at_the_road_edges() {
        let mut game = playing_game(2);
        let input = InputState::new();
        for _ in 0..5 {
            press_for_one_frame(&mut game, "ArrowRight");
            for _ in 0..12 {
                game.frame(&input);
            }
        }
        assert_eq!(game.state.player_lane, 4, "Rightmost lane is the limit");
    }

    #[test]
    fn distance_ticks_every_six_frames() {
        let mut game = playing_game(3);
        let input = InputState::new();
        for _ in 0..36 {
            game.frame(&input);
        }
        assert!(game.session.is_playing());
        assert_eq!(game.session.score(), 6);
    }

    #[test]
    fn eased_sprite_converges_on_the_lane() {
        let mut game = playing_game(4);
        press_for_one_frame(&mut game, "ArrowLeft");
        assert!(game.state.player_anim_x > game.state.player_x, "Ease lags the snap");

        let input = InputState::new();
        for _ in 0..60 {
            game.frame(&input);
        }
        assert!(
            (game.state.player_anim_x - game.state.player_x).abs() < 0.5,
            "Sprite settles on the lane position"
        );
    }

    #[test]
    fn collision_with_traffic_ends_the_run() {
        let mut game = playing_game(5);
        game.state.obstacles = vec![Obstacle {
            lane: 2,
            y: game.cfg.player_y() - 10.0,
            color: 0,
        }];
        let input = InputState::new();
        game.frame(&input);
        assert_eq!(game.session.lifecycle(), Lifecycle::Terminal(Outcome::Dead));
    }

    #[test]
    fn adjacent_lane_traffic_is_safe() {
        let mut game = playing_game(6);
        game.state.obstacles = vec![Obstacle {
            lane: 1,
            y: game.cfg.player_y(),
            color: 0,
        }];
        let input = InputState::new();
        game.frame(&input);
        assert!(game.session.is_playing(), "A car one lane over must not collide");
    }

    #[test]
    fn click_steering_picks_canvas_half() {
        let mut game = playing_game(7);
        let mut input = InputState::new();
        input.on_click(100.0, 300.0);
        game.frame(&input);
        assert_eq!(game.state.player_lane, 1, "Left-half click moves left");

        let mut input = InputState::new();
        input.on_click(400.0, 300.0);
        game.frame(&input);
        assert_eq!(game.state.player_lane, 2, "Right-half click moves right");
    }

    #[test]
    fn first_spawn_arrives_on_the_interval() {
        let mut game = playing_game(8);
        let input = InputState::new();
        for _ in 0..90 {
            game.frame(&input);
        }
        assert_eq!(game.state.obstacles.len(), 1, "First car spawns at frame 90");
        assert!(game.state.obstacles[0].lane < 5);
    }

    // ================================================================
    // Game Trait Contract Tests
    // ================================================================

    #[test]
    fn contract_starts_from_idle() {
        let mut game = RacerGame::with_seed(10);
        test_helpers::contract_starts_from_idle(&mut game, "Space");
    }

    #[test]
    fn contract_reset_is_idempotent() {
        let mut game = RacerGame::with_seed(11);
        test_helpers::contract_reset_is_idempotent(&mut game, "Space");
    }

    #[test]
    fn contract_score_monotonic() {
        let mut game = playing_game(12);
        test_helpers::contract_score_monotonic(&mut game, 80);
    }

    #[test]
    fn contract_terminal_is_frozen() {
        let mut game = playing_game(13);
        game.state.obstacles = vec![Obstacle {
            lane: 2,
            y: game.cfg.player_y() - 10.0,
            color: 0,
        }];
        let input = InputState::new();
        game.frame(&input);
        assert!(game.session.lifecycle().is_terminal());
        test_helpers::contract_terminal_is_frozen(&mut game);
    }

    #[test]
    fn contract_restart_after_terminal() {
        let mut game = playing_game(14);
        game.state.obstacles = vec![Obstacle {
            lane: 2,
            y: game.cfg.player_y() - 10.0,
            color: 0,
        }];
        let input = InputState::new();
        game.frame(&input);
        assert!(game.session.lifecycle().is_terminal());
        test_helpers::contract_restart_after_terminal(&mut game, "Space");
    }
}
