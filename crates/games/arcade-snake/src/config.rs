use serde::{Deserialize, Serialize};

/// Data-driven configuration for the snake game.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeConfig {
    /// Grid width in cells.
    pub cols: i32,
    /// Grid height in cells.
    pub rows: i32,
    /// Cell size in logical pixels.
    pub cell: u32,
    /// Fixed step interval (ms). Snake speed does not scale with score.
    pub tick_ms: u64,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            cols: 24,
            rows: 22,
            cell: 20,
            tick_ms: 120,
        }
    }
}

impl SnakeConfig {
    /// Load config from environment or TOML file, falling back to defaults.
    pub fn load() -> Self {
        let path = std::env::var("ARCADE_SNAKE_CONFIG")
            .unwrap_or_else(|_| "config/snake.toml".to_string());
        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<SnakeConfig>(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!("Failed to parse {path}: {e}, using defaults");
                    SnakeConfig::default()
                },
            },
            Err(_) => SnakeConfig::default(),
        }
    }
}
