use serde::{Deserialize, Serialize};

/// Data-driven configuration for the pong game.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PongConfig {
    pub width: f32,
    pub height: f32,
    pub paddle_w: f32,
    pub paddle_h: f32,
    /// Ball radius.
    pub ball_size: f32,
    /// Player paddle left edge x.
    pub player_x: f32,
    /// Paddle speed per frame under keys.
    pub paddle_speed: f32,
    /// Serve speed.
    pub ball_speed_init: f32,
    /// CPU tracking speed per frame.
    pub cpu_speed: f32,
    /// CPU ignores ball offsets within this band.
    pub cpu_deadzone: f32,
    /// Contact-point angle factor on paddle hits.
    pub spin: f32,
    /// Speed added on each player / cpu return.
    pub speed_gain_player: f32,
    pub speed_gain_cpu: f32,
    /// Points to win the match.
    pub win_score: u32,
    /// Serve angle spread (radians, ± half of this).
    pub serve_spread: f32,
}

impl Default for PongConfig {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 520.0,
            paddle_w: 12.0,
            paddle_h: 80.0,
            ball_size: 10.0,
            player_x: 20.0,
            paddle_speed: 5.0,
            ball_speed_init: 4.0,
            cpu_speed: 3.2,
            cpu_deadzone: 5.0,
            spin: 1.2,
            speed_gain_player: 0.15,
            speed_gain_cpu: 0.1,
            win_score: 7,
            serve_spread: 0.6,
        }
    }
}

impl PongConfig {
    /// CPU paddle left edge x.
    pub fn cpu_x(&self) -> f32 {
        self.width - self.player_x - self.paddle_w
    }

    /// Max per-frame step while the paddle chases the pointer.
    pub fn pointer_step(&self) -> f32 {
        self.paddle_speed * 1.5
    }

    /// Load config from environment or TOML file, falling back to defaults.
    pub fn load() -> Self {
        let path = std::env::var("ARCADE_PONG_CONFIG")
            .unwrap_or_else(|_| "config/pong.toml".to_string());
        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<PongConfig>(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!("Failed to parse {path}: {e}, using defaults");
                    PongConfig::default()
                },
            },
            Err(_) => PongConfig::default(),
        }
    }
}
