use serde::{Deserialize, Serialize};

/// Data-driven configuration for the paddle-and-bricks game.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakoutConfig {
    /// Canvas width (logical pixels).
    pub width: f32,
    /// Canvas height.
    pub height: f32,
    pub paddle_w: f32,
    pub paddle_h: f32,
    /// Paddle distance from the bottom edge.
    pub paddle_bottom_offset: f32,
    pub ball_radius: f32,
    pub brick_cols: usize,
    pub brick_rows: usize,
    pub brick_h: f32,
    /// Gap between bricks.
    pub brick_pad: f32,
    /// Top offset of the brick wall.
    pub brick_top: f32,
    /// Side margin of the brick wall.
    pub side_margin: f32,
    /// Paddle speed per frame under arrow keys.
    pub paddle_key_speed: f32,
    /// Max paddle step per frame while chasing the pointer.
    pub paddle_pointer_step: f32,
    /// Launch velocity (vx sign is randomized).
    pub launch_vx: f32,
    pub launch_vy: f32,
    /// Horizontal re-aim factor on paddle hits.
    pub spin: f32,
    pub brick_points: u32,
    pub lives: u32,
}

impl Default for BreakoutConfig {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 520.0,
            paddle_w: 80.0,
            paddle_h: 12.0,
            paddle_bottom_offset: 40.0,
            ball_radius: 8.0,
            brick_cols: 10,
            brick_rows: 6,
            brick_h: 22.0,
            brick_pad: 3.0,
            brick_top: 60.0,
            side_margin: 10.0,
            paddle_key_speed: 7.0,
            paddle_pointer_step: 8.0,
            launch_vx: 3.5,
            launch_vy: -4.0,
            spin: 2.5,
            brick_points: 10,
            lives: 3,
        }
    }
}

impl BreakoutConfig {
    /// Brick column pitch; the visible/collidable brick is `brick_pad`
    /// narrower.
    pub fn brick_w(&self) -> f32 {
        (self.width - self.side_margin * 2.0) / self.brick_cols as f32
    }

    /// Paddle top edge y.
    pub fn paddle_y(&self) -> f32 {
        self.height - self.paddle_bottom_offset
    }

    /// Load config from environment or TOML file, falling back to defaults.
    pub fn load() -> Self {
        let path = std::env::var("ARCADE_BREAKOUT_CONFIG")
            .unwrap_or_else(|_| "config/breakout.toml".to_string());
        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<BreakoutConfig>(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!("Failed to parse {path}: {e}, using defaults");
                    BreakoutConfig::default()
                },
            },
            Err(_) => BreakoutConfig::default(),
        }
    }
}
