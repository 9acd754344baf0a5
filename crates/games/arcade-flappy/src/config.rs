use serde::{Deserialize, Serialize};

/// Data-driven configuration for the flappy game.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlappyConfig {
    pub width: f32,
    pub height: f32,
    /// Fixed bird x position.
    pub bird_x: f32,
    /// Bird diameter; the collision radius is `bird_size/2 − 4` (forgiving).
    pub bird_size: f32,
    /// Downward acceleration per frame².
    pub gravity: f32,
    /// Upward impulse applied on flap (negative = up).
    pub flap_force: f32,
    pub pipe_width: f32,
    /// Vertical opening between the pipe halves.
    pub pipe_gap: f32,
    /// Leftward pipe speed per frame.
    pub pipe_speed: f32,
    /// Frames between pipe spawns.
    pub pipe_interval: u64,
    /// Minimum distance of the gap from the top and bottom edges.
    pub pipe_margin: f32,
}

impl Default for FlappyConfig {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 520.0,
            bird_x: 80.0,
            bird_size: 28.0,
            gravity: 0.45,
            flap_force: -8.5,
            pipe_width: 52.0,
            pipe_gap: 155.0,
            pipe_speed: 2.8,
            pipe_interval: 200,
            pipe_margin: 60.0,
        }
    }
}

impl FlappyConfig {
    pub fn bird_radius(&self) -> f32 {
        self.bird_size / 2.0 - 4.0
    }

    /// Load config from environment or TOML file, falling back to defaults.
    pub fn load() -> Self {
        let path = std::env::var("ARCADE_FLAPPY_CONFIG")
            .unwrap_or_else(|_| "config/flappy.toml".to_string());
        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<FlappyConfig>(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!("Failed to parse {path}: {e}, using defaults");
                    FlappyConfig::default()
                },
            },
            Err(_) => FlappyConfig::default(),
        }
    }
}
