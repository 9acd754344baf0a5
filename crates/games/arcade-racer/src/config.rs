use serde::{Deserialize, Serialize};

/// Data-driven configuration for the traffic racer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RacerConfig {
    pub width: f32,
    pub height: f32,
    pub lanes: usize,
    pub player_w: f32,
    pub player_h: f32,
    pub obstacle_w: f32,
    pub obstacle_h: f32,
    /// Scroll speed at score zero.
    pub base_speed: f32,
    /// Extra speed per 100 points of distance.
    pub speed_step: f32,
    /// Spawn interval at score zero (frames).
    pub spawn_interval_base: u64,
    /// Spawn interval floor.
    pub spawn_interval_min: u64,
    /// Interval reduction per 50 points.
    pub spawn_interval_step: u64,
    /// Distance ticks up every this many frames.
    pub score_every: u64,
    /// Frames a lane change is debounced for.
    pub lane_debounce: u32,
    /// Fraction of the remaining distance the rendered car covers per
    /// frame while easing into its lane.
    pub lane_ease: f32,
    /// Player row distance from the bottom edge.
    pub bottom_offset: f32,
    /// AABB inset on every side for forgiving collisions.
    pub collision_inset: f32,
    /// Obstacles only block a lane for spawning while above this y.
    pub spawn_block_y: f32,
}

impl Default for RacerConfig {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 520.0,
            lanes: 5,
            player_w: 36.0,
            player_h: 60.0,
            obstacle_w: 36.0,
            obstacle_h: 60.0,
            base_speed: 4.0,
            speed_step: 0.5,
            spawn_interval_base: 90,
            spawn_interval_min: 40,
            spawn_interval_step: 5,
            score_every: 6,
            lane_debounce: 12,
            lane_ease: 0.25,
            bottom_offset: 20.0,
            collision_inset: 4.0,
            spawn_block_y: 80.0,
        }
    }
}

impl RacerConfig {
    pub fn lane_w(&self) -> f32 {
        self.width / self.lanes as f32
    }

    /// Center-of-lane x for the player/obstacle sprite's left edge.
    pub fn lane_x(&self, lane: usize, sprite_w: f32) -> f32 {
        lane as f32 * self.lane_w() + self.lane_w() / 2.0 - sprite_w / 2.0
    }

    /// Player sprite top edge y.
    pub fn player_y(&self) -> f32 {
        self.height - self.player_h - self.bottom_offset
    }

    /// Load config from environment or TOML file, falling back to defaults.
    pub fn load() -> Self {
        let path = std::env::var("ARCADE_RACER_CONFIG")
            .unwrap_or_else(|_| "config/racer.toml".to_string());
        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<RacerConfig>(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!("Failed to parse {path}: {e}, using defaults");
                    RacerConfig::default()
                },
            },
            Err(_) => RacerConfig::default(),
        }
    }
}
