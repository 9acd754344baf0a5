use serde::{Deserialize, Serialize};

/// Data-driven configuration for the falling-blocks game.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TetrisConfig {
    /// Well width in cells.
    pub cols: i32,
    /// Well height in cells.
    pub rows: i32,
    /// Cell size in logical pixels.
    pub cell: u32,
    /// Fall interval at zero cleared lines (ms).
    pub base_tick_ms: u64,
    /// Fall interval floor (ms).
    pub min_tick_ms: u64,
    /// Interval reduction applied per 5 cleared lines (ms).
    pub speedup_step_ms: u64,
}

impl Default for TetrisConfig {
    fn default() -> Self {
        Self {
            cols: 10,
            rows: 20,
            cell: 26,
            base_tick_ms: 500,
            min_tick_ms: 100,
            speedup_step_ms: 40,
        }
    }
}

impl TetrisConfig {
    /// Fall interval for the given cleared-line count:
    /// `max(min, base − (lines/5)·step)`.
    pub fn tick_ms_for_lines(&self, lines: u32) -> u64 {
        let steps = (lines / 5) as u64;
        self.base_tick_ms
            .saturating_sub(steps * self.speedup_step_ms)
            .max(self.min_tick_ms)
    }

    /// Load config from environment or TOML file, falling back to defaults.
    pub fn load() -> Self {
        let path = std::env::var("ARCADE_TETRIS_CONFIG")
            .unwrap_or_else(|_| "config/tetris.toml".to_string());
        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<TetrisConfig>(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!("Failed to parse {path}: {e}, using defaults");
                    TetrisConfig::default()
                },
            },
            Err(_) => TetrisConfig::default(),
        }
    }
}
