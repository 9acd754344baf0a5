use serde::{Deserialize, Serialize};

use crate::game_trait::GameMetadata;

/// Unique identifier for a registered game type (e.g. "snake", "breakout").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(pub String);

impl GameId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered game entry in the hub catalog.
#[derive(Debug, Clone)]
pub struct GameEntry {
    pub id: GameId,
    pub metadata: GameMetadata,
}
