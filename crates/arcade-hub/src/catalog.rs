use std::collections::HashMap;

use arcade_core::game_trait::ArcadeGame;
use arcade_core::registry::{GameEntry, GameId};

/// Factory function type for creating game instances.
type GameFactory = fn() -> Box<dyn ArcadeGame>;

/// Registry mapping game IDs to factory functions.
///
/// Each `create` call produces a fresh, independent instance: games never
/// share simulation state.
pub struct GameCatalog {
    factories: HashMap<GameId, GameFactory>,
}

impl Default for GameCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl GameCatalog {
    pub fn new() -> Self {
        let mut catalog = Self {
            factories: HashMap::new(),
        };
        catalog.register_defaults();
        catalog
    }

    fn register_defaults(&mut self) {
        self.register("snake", || Box::new(arcade_snake::SnakeGame::new()));
        self.register("tetris", || Box::new(arcade_tetris::TetrisGame::new()));
        self.register("breakout", || Box::new(arcade_breakout::BreakoutGame::new()));
        self.register("asteroids", || Box::new(arcade_asteroids::AsteroidsGame::new()));
        self.register("flappy", || Box::new(arcade_flappy::FlappyGame::new()));
        self.register("pong", || Box::new(arcade_pong::PongGame::new()));
        self.register("racer", || Box::new(arcade_racer::RacerGame::new()));
    }

    pub fn register(&mut self, id: impl Into<String>, factory: GameFactory) {
        self.factories.insert(GameId::new(id), factory);
    }

    pub fn create(&self, id: &GameId) -> Option<Box<dyn ArcadeGame>> {
        self.factories.get(id).map(|f| f())
    }

    /// Catalog entries for the lobby screen, sorted by id for a stable
    /// listing.
    pub fn entries(&self) -> Vec<GameEntry> {
        let mut entries: Vec<GameEntry> = self
            .factories
            .iter()
            .map(|(id, f)| GameEntry {
                id: id.clone(),
                metadata: f().metadata(),
            })
            .collect();
        entries.sort_by(|a, b| a.id.0.cmp(&b.id.0));
        entries
    }

    /// Return the number of registered game types.
    pub fn available_games(&self) -> usize {
        self.factories.len()
    }
}
