use serde::{Deserialize, Serialize};

/// How a finished session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Dead,
    Won,
}

/// Lifecycle state of a game instance.
///
/// `Idle → Playing → Terminal`, with `Terminal → Playing` via explicit
/// restart. The simulation is frozen outside `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lifecycle {
    Idle,
    Playing,
    Terminal(Outcome),
}

impl Lifecycle {
    pub fn is_playing(self) -> bool {
        self == Lifecycle::Playing
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Lifecycle::Terminal(_))
    }
}

/// Slow UI-visible counters, decoupled from the per-frame entity state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HudState {
    pub lifecycle: Lifecycle,
    pub score: u32,
    pub lives: u32,
    pub level: u32,
    pub best_score: u32,
}

/// Score/lives/level state machine owned by exactly one game instance.
///
/// All counter mutations flow through these methods, which enforce the
/// session invariants: score is monotonically non-decreasing while Playing,
/// lives only fall through `lose_life`, level only rises through
/// `advance_level`, and the terminal transition folds the best score in the
/// same call. Counter mutations outside `Playing` are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    lifecycle: Lifecycle,
    score: u32,
    lives: u32,
    level: u32,
    frame_count: u64,
    best_score: u32,
}

impl Session {
    pub fn new(lives: u32) -> Self {
        Self {
            lifecycle: Lifecycle::Idle,
            score: 0,
            lives,
            level: 1,
            frame_count: 0,
            best_score: 0,
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_playing(&self) -> bool {
        self.lifecycle.is_playing()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn hud(&self) -> HudState {
        HudState {
            lifecycle: self.lifecycle,
            score: self.score,
            lives: self.lives,
            level: self.level,
            best_score: self.best_score,
        }
    }

    /// Zero score/level/frame counters and set starting lives.
    ///
    /// Preserves `best_score`: the best is instance-lifetime state, not
    /// session state. Called from `ArcadeGame::reset` implementations.
    pub fn reset_counters(&mut self, lives: u32) {
        self.score = 0;
        self.lives = lives;
        self.level = 1;
        self.frame_count = 0;
    }

    /// Transition Idle/Terminal → Playing. No-op while already Playing.
    pub fn start(&mut self) {
        if !self.is_playing() {
            self.lifecycle = Lifecycle::Playing;
        }
    }

    /// Count one simulation frame. No-op outside Playing.
    pub fn advance_frame(&mut self) {
        if self.is_playing() {
            self.frame_count += 1;
        }
    }

    /// Award points. Only valid while Playing; monotonic by construction.
    pub fn add_score(&mut self, points: u32) {
        if self.is_playing() {
            self.score = self.score.saturating_add(points);
        }
    }

    /// Lose one life, returning the remaining count. Only valid while
    /// Playing; the caller decides whether zero lives ends the session.
    pub fn lose_life(&mut self) -> u32 {
        if self.is_playing() {
            self.lives = self.lives.saturating_sub(1);
        }
        self.lives
    }

    /// Raise the level/progress counter by `by`. Only valid while Playing.
    pub fn advance_level(&mut self, by: u32) {
        if self.is_playing() {
            self.level = self.level.saturating_add(by);
        }
    }

    /// Transition Playing → Terminal synchronously, folding the best score.
    pub fn end(&mut self, outcome: Outcome) {
        if self.is_playing() {
            self.lifecycle = Lifecycle::Terminal(outcome);
            self.best_score = self.best_score.max(self.score);
        }
    }
}
