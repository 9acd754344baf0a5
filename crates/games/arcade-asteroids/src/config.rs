use serde::{Deserialize, Serialize};

/// Data-driven configuration for the asteroids game.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AsteroidsConfig {
    pub width: f32,
    pub height: f32,
    /// Ship turn rate (radians per frame, level-triggered).
    pub turn_rate: f32,
    /// Thrust acceleration per frame along the ship's facing.
    pub thrust: f32,
    /// Multiplicative drag applied to ship velocity each frame.
    pub friction: f32,
    /// Ship collision radius.
    pub ship_radius: f32,
    pub bullet_speed: f32,
    /// Bullet lifetime in frames.
    pub bullet_life: u32,
    /// Frames between shots while the trigger is held.
    pub shoot_cooldown: u32,
    /// Bullet spawn distance from the ship center.
    pub muzzle_offset: f32,
    /// Asteroids in the first wave.
    pub initial_wave: usize,
    /// Wave size is `wave_base + level`.
    pub wave_base: usize,
    /// Off-screen spawn distance beyond the playfield edge.
    pub spawn_margin: f32,
    pub asteroid_base_speed: f32,
    pub asteroid_rand_speed: f32,
    /// Extra speed per level.
    pub asteroid_level_speed: f32,
    pub asteroid_min_radius: f32,
    pub asteroid_rand_radius: f32,
    /// Radius above which a destroyed asteroid splits into fragments.
    pub split_threshold: f32,
    /// Fragments per split.
    pub split_count: usize,
    /// Fragment radius as a fraction of the parent's.
    pub split_scale: f32,
    /// Invincibility frames granted on spawn and respawn.
    pub invincible_start: u32,
    pub invincible_hit: u32,
    pub lives: u32,
    /// Points for radius > 35 / > 20 / the rest.
    pub score_large: u32,
    pub score_medium: u32,
    pub score_small: u32,
}

impl Default for AsteroidsConfig {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 520.0,
            turn_rate: 0.065,
            thrust: 0.18,
            friction: 0.985,
            ship_radius: 14.0,
            bullet_speed: 9.0,
            bullet_life: 55,
            shoot_cooldown: 12,
            muzzle_offset: 18.0,
            initial_wave: 4,
            wave_base: 3,
            spawn_margin: 40.0,
            asteroid_base_speed: 0.8,
            asteroid_rand_speed: 0.8,
            asteroid_level_speed: 0.15,
            asteroid_min_radius: 25.0,
            asteroid_rand_radius: 20.0,
            split_threshold: 18.0,
            split_count: 2,
            split_scale: 0.55,
            invincible_start: 120,
            invincible_hit: 150,
            lives: 3,
            score_large: 20,
            score_medium: 50,
            score_small: 100,
        }
    }
}

impl AsteroidsConfig {
    /// Points for destroying an asteroid of the given radius: the big slow
    /// ones are worth the least.
    pub fn score_for_radius(&self, radius: f32) -> u32 {
        if radius > 35.0 {
            self.score_large
        } else if radius > 20.0 {
            self.score_medium
        } else {
            self.score_small
        }
    }

    /// Load config from environment or TOML file, falling back to defaults.
    pub fn load() -> Self {
        let path = std::env::var("ARCADE_ASTEROIDS_CONFIG")
            .unwrap_or_else(|_| "config/asteroids.toml".to_string());
        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<AsteroidsConfig>(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!("Failed to parse {path}: {e}, using defaults");
                    AsteroidsConfig::default()
                },
            },
            Err(_) => AsteroidsConfig::default(),
        }
    }
}
