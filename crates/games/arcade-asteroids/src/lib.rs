pub mod config;
pub mod physics;
pub mod spawn;
mod render;

use std::f32::consts::FRAC_PI_2;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use arcade_core::arcade_game_boilerplate;
use arcade_core::game_trait::{ArcadeGame, GameMetadata};
use arcade_core::geometry::{Vec2, circles_overlap};
use arcade_core::input::{Cooldown, InputState};
use arcade_core::lifecycle::{Outcome, Session};
use arcade_core::render::Scene;

use config::AsteroidsConfig;

/// The player's ship.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Facing angle in radians; −π/2 is up.
    pub angle: f32,
    pub thrusting: bool,
}

/// A drifting rock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub angle: f32,
    pub rot_speed: f32,
    /// Irregular outline, relative to the center.
    pub vertices: Vec<Vec2>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Remaining lifetime in frames.
    pub life: u32,
}

/// Simulation state: ship, rocks, bullets, and the two frame timers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsteroidsState {
    pub ship: Ship,
    pub asteroids: Vec<Asteroid>,
    pub bullets: Vec<Bullet>,
    /// Remaining invincibility frames after (re)spawn.
    pub invincible: u32,
    pub shoot_cooldown: Cooldown,
}

/// The thrust-and-shoot asteroids game on a toroidal playfield.
pub struct AsteroidsGame {
    session: Session,
    state: AsteroidsState,
    cfg: AsteroidsConfig,
    rng: StdRng,
    seed: u64,
}

impl AsteroidsGame {
    pub fn new() -> Self {
        Self::with_config(AsteroidsConfig::load())
    }

    pub fn with_config(cfg: AsteroidsConfig) -> Self {
        Self::build(cfg, rand::random())
    }

    /// Deterministic construction for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::build(AsteroidsConfig::default(), seed)
    }

    fn build(cfg: AsteroidsConfig, seed: u64) -> Self {
        let mut game = Self {
            session: Session::new(cfg.lives),
            state: AsteroidsState {
                ship: Ship {
                    pos: Vec2::ZERO,
                    vel: Vec2::ZERO,
                    angle: -FRAC_PI_2,
                    thrusting: false,
                },
                asteroids: Vec::new(),
                bullets: Vec::new(),
                invincible: 0,
                shoot_cooldown: Cooldown::default(),
            },
            cfg,
            rng: StdRng::seed_from_u64(seed),
            seed,
        };
        game.reset();
        game
    }

    pub fn state(&self) -> &AsteroidsState {
        &self.state
    }

    fn fire_bullet(&mut self) {
        let ship = &self.state.ship;
        let (sin, cos) = ship.angle.sin_cos();
        self.state.bullets.push(Bullet {
            pos: Vec2::new(
                ship.pos.x + cos * self.cfg.muzzle_offset,
                ship.pos.y + sin * self.cfg.muzzle_offset,
            ),
            vel: Vec2::new(
                cos * self.cfg.bullet_speed + ship.vel.x,
                sin * self.cfg.bullet_speed + ship.vel.y,
            ),
            life: self.cfg.bullet_life,
        });
        self.state.shoot_cooldown.arm(self.cfg.shoot_cooldown);
    }

    /// Resolve bullet↔asteroid hits: each bullet consumes at most one
    /// asteroid, large rocks split, and the kill is scored by size.
    fn resolve_bullet_hits(&mut self) {
        let mut hit: Vec<usize> = Vec::new();
        let asteroids = &self.state.asteroids;
        self.state.bullets.retain(|b| {
            for (i, a) in asteroids.iter().enumerate() {
                if hit.contains(&i) {
                    continue;
                }
                if circles_overlap(b.pos, 0.0, a.pos, a.radius) {
                    hit.push(i);
                    return false;
                }
            }
            true
        });

        if hit.is_empty() {
            return;
        }

        let mut children = Vec::new();
        for &i in &hit {
            let parent = self.state.asteroids[i].clone();
            self.session.add_score(self.cfg.score_for_radius(parent.radius));
            if parent.radius > self.cfg.split_threshold {
                children.extend(spawn::fragments(&mut self.rng, &self.cfg, &parent));
            }
        }

        hit.sort_unstable_by(|a, b| b.cmp(a));
        for i in hit {
            self.state.asteroids.remove(i);
        }
        self.state.asteroids.append(&mut children);
    }

    /// Ship↔asteroid contact: costs a life, recenters the ship, and grants
    /// invincibility; the last life ends the session in the same frame.
    fn resolve_ship_hit(&mut self) {
        if self.state.invincible > 0 {
            return;
        }
        let ship_pos = self.state.ship.pos;
        let hit = self
            .state
            .asteroids
            .iter()
            .any(|a| circles_overlap(ship_pos, self.cfg.ship_radius, a.pos, a.radius));
        if !hit {
            return;
        }

        let remaining = self.session.lose_life();
        self.state.invincible = self.cfg.invincible_hit;
        self.state.ship.pos = Vec2::new(self.cfg.width / 2.0, self.cfg.height / 2.0);
        self.state.ship.vel = Vec2::ZERO;
        tracing::debug!(remaining, "Ship destroyed");
        if remaining == 0 {
            self.session.end(Outcome::Dead);
        }
    }
}

impl Default for AsteroidsGame {
    fn default() -> Self {
        Self::new()
    }
}

impl ArcadeGame for AsteroidsGame {
    fn metadata(&self) -> GameMetadata {
        GameMetadata {
            name: "Neon Asteroids".to_string(),
            description: "Thrust, drift, and shatter the rocks.".to_string(),
            width: self.cfg.width as u32,
            height: self.cfg.height as u32,
            controls: "← → ROTATE · ↑ THRUST · SPACE SHOOT".to_string(),
        }
    }

    fn reset(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.state.ship = Ship {
            pos: Vec2::new(self.cfg.width / 2.0, self.cfg.height / 2.0),
            vel: Vec2::ZERO,
            angle: -FRAC_PI_2,
            thrusting: false,
        };
        self.state.asteroids = (0..self.cfg.initial_wave)
            .map(|_| spawn::spawn_asteroid(&mut self.rng, &self.cfg, 1))
            .collect();
        self.state.bullets.clear();
        self.state.invincible = self.cfg.invincible_start;
        self.state.shoot_cooldown.clear();
        self.session.reset_counters(self.cfg.lives);
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
        if self.state.invincible > 0 {
            self.state.invincible -= 1;
        }
        self.state.shoot_cooldown.count_down();

        physics::step_ship(
            &mut self.state.ship,
            &self.cfg,
            input.is_down("ArrowLeft"),
            input.is_down("ArrowRight"),
            input.is_down("ArrowUp"),
        );

        // Held trigger with a cooldown window, not an edge trigger.
        if input.is_down("Space") && self.state.shoot_cooldown.ready() {
            self.fire_bullet();
        }

        physics::step_bullets(&mut self.state, &self.cfg);
        physics::step_asteroids(&mut self.state, &self.cfg);

        self.resolve_bullet_hits();

        // Wave cleared: next level, bigger field.
        if self.state.asteroids.is_empty() {
            self.session.advance_level(1);
            let level = self.session.level();
            let count = self.cfg.wave_base + level as usize;
            self.state.asteroids = (0..count)
                .map(|_| spawn::spawn_asteroid(&mut self.rng, &self.cfg, level))
                .collect();
            tracing::debug!(level, count, "Spawned new wave");
        }

        self.resolve_ship_hit();
    }

    arcade_game_boilerplate!(state_type: AsteroidsState);

    fn render(&self, scene: &mut Scene) {
        render::draw(
            &self.state,
            &self.cfg,
            self.session.lifecycle(),
            self.session.score(),
            self.session.lives(),
            self.session.frame_count(),
            scene,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade_core::lifecycle::Lifecycle;
    use arcade_core::test_helpers;

    fn playing_game(seed: u64) -> AsteroidsGame {
        let mut game = AsteroidsGame::with_seed(seed);
        let mut input = InputState::new();
        test_helpers::press_key(&mut game, &mut input, "Space");
        assert!(game.session.is_playing());
        game
    }

    fn rock(pos: Vec2, radius: f32) -> Asteroid {
        Asteroid {
            pos,
            vel: Vec2::ZERO,
            radius,
            angle: 0.0,
            rot_speed: 0.0,
            vertices: Vec::new(),
        }
    }

    #[test]
    fn initial_wave_has_four_rocks() {
        let game = AsteroidsGame::with_seed(1);
        assert_eq!(game.state.asteroids.len(), 4);
        assert_eq!(game.state.invincible, 120);
    }

    #[test]
    fn held_trigger_respects_cooldown() {
        let mut game = playing_game(1);
        game.state.asteroids = vec![rock(Vec2::new(50.0, 50.0), 25.0)]; // away from bullets
        let mut input = InputState::new();
        input.on_key_down("Space".into());
        input.end_frame(); // held, not just-pressed

        game.frame(&input);
        game.frame(&input);
        assert_eq!(game.state.bullets.len(), 1, "Second shot must wait out the cooldown");

        for _ in 0..12 {
            game.frame(&input);
        }
        assert_eq!(game.state.bullets.len(), 2);
    }

    #[test]
    fn large_rock_splits_into_two_smaller() {
        let mut game = playing_game(2);
        game.state.invincible = 10_000; // keep the ship out of the equation
        game.state.asteroids = vec![rock(Vec2::new(300.0, 300.0), 30.0)];
        game.state.bullets = vec![Bullet {
            pos: Vec2::new(300.0, 300.0),
            vel: Vec2::ZERO,
            life: 50,
        }];

        game.resolve_bullet_hits();

        assert_eq!(game.state.asteroids.len(), 2, "Radius 30 > 18 splits in two");
        for child in &game.state.asteroids {
            assert!((child.radius - 16.5).abs() < 1e-4, "Children are 0.55× the parent");
        }
        assert_eq!(game.session.score(), 50, "Radius 30 scores the medium tier");
        assert!(game.state.bullets.is_empty(), "The bullet is consumed");
    }

    #[test]
    fn small_rock_vanishes_without_children() {
        let mut game = playing_game(2);
        game.state.invincible = 10_000;
        game.state.asteroids = vec![rock(Vec2::new(300.0, 300.0), 15.0)];
        game.state.bullets = vec![Bullet {
            pos: Vec2::new(300.0, 300.0),
            vel: Vec2::ZERO,
            life: 50,
        }];

        game.resolve_bullet_hits();

        assert!(game.state.asteroids.is_empty(), "Radius 15 ≤ 18 leaves nothing");
        assert_eq!(game.session.score(), 100, "Small rocks score the most");
    }

    #[test]
    fn one_bullet_consumes_one_rock() {
        let mut game = playing_game(3);
        game.state.invincible = 10_000;
        game.state.asteroids = vec![
            rock(Vec2::new(300.0, 300.0), 15.0),
            rock(Vec2::new(300.0, 300.0), 15.0),
        ];
        game.state.bullets = vec![Bullet {
            pos: Vec2::new(300.0, 300.0),
            vel: Vec2::ZERO,
            life: 50,
        }];

        game.resolve_bullet_hits();

        assert_eq!(
            game.state.asteroids.len(),
            1,
            "A single bullet must not sweep coincident rocks"
        );
    }

    #[test]
    fn bullet_at_exact_radius_misses() {
        let mut game = playing_game(3);
        game.state.invincible = 10_000;
        game.state.asteroids = vec![rock(Vec2::new(300.0, 300.0), 20.0)];
        game.state.bullets = vec![Bullet {
            pos: Vec2::new(320.0, 300.0), // distance exactly r
            vel: Vec2::ZERO,
            life: 50,
        }];

        game.resolve_bullet_hits();

        assert_eq!(game.state.asteroids.len(), 1, "Strict threshold: touching is a miss");
        assert_eq!(game.state.bullets.len(), 1);
    }

    #[test]
    fn ship_hit_costs_life_and_recenters() {
        let mut game = playing_game(4);
        game.state.invincible = 0;
        game.state.ship.pos = Vec2::new(100.0, 100.0);
        game.state.ship.vel = Vec2::new(3.0, 0.0);
        game.state.asteroids = vec![rock(Vec2::new(110.0, 100.0), 25.0)];

        game.resolve_ship_hit();

        assert_eq!(game.session.lives(), 2);
        assert_eq!(game.state.ship.pos, Vec2::new(240.0, 260.0));
        assert_eq!(game.state.ship.vel, Vec2::ZERO);
        assert_eq!(game.state.invincible, 150);
        assert!(game.session.is_playing());
    }

    #[test]
    fn invincibility_blocks_the_hit() {
        let mut game = playing_game(4);
        game.state.ship.pos = Vec2::new(100.0, 100.0);
        game.state.asteroids = vec![rock(Vec2::new(100.0, 100.0), 25.0)];
        assert!(game.state.invincible > 0);

        game.resolve_ship_hit();

        assert_eq!(game.session.lives(), 3, "Invincible ships shrug off rocks");
    }

    #[test]
    fn last_life_ends_session_in_same_frame() {
        let mut game = playing_game(5);
        game.session.lose_life();
        game.session.lose_life();
        assert_eq!(game.session.lives(), 1);
        game.session.add_score(70);

        game.state.invincible = 0;
        game.state.ship.pos = Vec2::new(100.0, 100.0);
        game.state.asteroids = vec![rock(Vec2::new(100.0, 100.0), 25.0)];
        game.resolve_ship_hit();

        assert_eq!(game.session.lives(), 0);
        assert_eq!(game.session.lifecycle(), Lifecycle::Terminal(Outcome::Dead));
        assert_eq!(game.session.best_score(), 70, "Best updates on the fatal frame");
    }

    #[test]
    fn cleared_wave_spawns_level_plus_base() {
        let mut game = playing_game(6);
        game.state.invincible = 10_000;
        game.state.asteroids.clear();
        let input = InputState::new();
        game.frame(&input);

        assert_eq!(game.session.level(), 2);
        assert_eq!(game.state.asteroids.len(), 5, "Wave 2 spawns 3 + level rocks");
    }

    // ================================================================
    // Game Trait Contract Tests
    // ================================================================

    #[test]
    fn contract_starts_from_idle() {
        let mut game = AsteroidsGame::with_seed(10);
        test_helpers::contract_starts_from_idle(&mut game, "Space");
    }

    #[test]
    fn contract_reset_is_idempotent() {
        let mut game = AsteroidsGame::with_seed(11);
        test_helpers::contract_reset_is_idempotent(&mut game, "Space");
    }

    #[test]
    fn contract_score_monotonic() {
        let mut game = playing_game(12);
        test_helpers::contract_score_monotonic(&mut game, 60);
    }

    #[test]
    fn contract_terminal_is_frozen() {
        let mut game = playing_game(13);
        game.session.lose_life();
        game.session.lose_life();
        game.state.invincible = 0;
        game.state.ship.pos = Vec2::new(100.0, 100.0);
        game.state.asteroids = vec![rock(Vec2::new(100.0, 100.0), 25.0)];
        game.resolve_ship_hit();
        assert!(game.session.lifecycle().is_terminal());
        test_helpers::contract_terminal_is_frozen(&mut game);
    }

    #[test]
    fn contract_restart_after_terminal() {
        let mut game = playing_game(14);
        game.session.add_score(30);
        game.session.lose_life();
        game.session.lose_life();
        game.state.invincible = 0;
        game.state.ship.pos = Vec2::new(100.0, 100.0);
        game.state.asteroids = vec![rock(Vec2::new(100.0, 100.0), 25.0)];
        game.resolve_ship_hit();
        assert!(game.session.lifecycle().is_terminal());
        test_helpers::contract_restart_after_terminal(&mut game, "Space");
    }
}
