pub mod board;
pub mod config;
pub mod piece;
mod render;

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use arcade_core::arcade_game_boilerplate;
use arcade_core::game_trait::{ArcadeGame, GameMetadata};
use arcade_core::input::InputState;
use arcade_core::lifecycle::{Outcome, Session};
use arcade_core::render::Scene;

use board::Board;
use config::TetrisConfig;
use piece::{Piece, rotate_cw};

/// Points awarded for clearing 0–4 rows at once.
pub const LINE_POINTS: [u32; 5] = [0, 100, 300, 500, 800];

/// Simulation state: the well, the falling piece, the preview piece, and
/// the cleared-line count that drives the fall speed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TetrisState {
    pub board: Board,
    pub piece: Piece,
    pub next_piece: Piece,
    pub lines: u32,
}

/// The falling-blocks game: gravity on a fixed tick whose interval shrinks
/// as lines clear, with per-frame edge-triggered steering.
pub struct TetrisGame {
    session: Session,
    state: TetrisState,
    cfg: TetrisConfig,
    rng: StdRng,
    seed: u64,
}

impl TetrisGame {
    pub fn new() -> Self {
        Self::with_config(TetrisConfig::load())
    }

    pub fn with_config(cfg: TetrisConfig) -> Self {
        Self::build(cfg, rand::random())
    }

    /// Deterministic construction for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::build(TetrisConfig::default(), seed)
    }

    fn build(cfg: TetrisConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let piece = Piece::random(&mut rng, cfg.cols);
        let next_piece = Piece::random(&mut rng, cfg.cols);
        let mut game = Self {
            session: Session::new(0),
            state: TetrisState {
                board: Board::new(cfg.cols, cfg.rows),
                piece,
                next_piece,
                lines: 0,
            },
            cfg,
            rng,
            seed,
        };
        game.reset();
        game
    }

    pub fn state(&self) -> &TetrisState {
        &self.state
    }

    /// Rows the falling piece can still drop; used for the ghost piece and
    /// the hard drop.
    fn drop_distance(&self) -> i32 {
        let mut dy = 0;
        while !self.state.board.collides(&self.state.piece, 0, dy + 1, None) {
            dy += 1;
        }
        dy
    }

    /// Settle the falling piece: merge, clear rows, score, spawn the next.
    fn lock_piece(&mut self) {
        self.state.board.merge(&self.state.piece);

        let cleared = self.state.board.clear_full_rows();
        if cleared > 0 {
            let points = LINE_POINTS[(cleared as usize).min(LINE_POINTS.len() - 1)];
            self.session.add_score(points);
            self.state.lines += cleared;
            self.session.advance_level(cleared);
            tracing::debug!(cleared, total = self.state.lines, "Cleared lines");
        }

        self.state.piece = self.state.next_piece.clone();
        self.state.next_piece = Piece::random(&mut self.rng, self.cfg.cols);

        // Lock-out: the fresh piece has nowhere to spawn.
        if self.state.board.collides(&self.state.piece, 0, 0, None) {
            self.session.end(Outcome::Dead);
        }
    }

    /// Rotate clockwise, trying wall kicks at dx 0, +1, −1.
    fn try_rotate(&mut self) {
        let rotated = rotate_cw(&self.state.piece.shape);
        for dx in [0, 1, -1] {
            if !self.state.board.collides(&self.state.piece, dx, 0, Some(&rotated)) {
                self.state.piece.shape = rotated;
                self.state.piece.x += dx;
                return;
            }
        }
    }
}

impl Default for TetrisGame {
    fn default() -> Self {
        Self::new()
    }
}

impl ArcadeGame for TetrisGame {
    fn metadata(&self) -> GameMetadata {
        GameMetadata {
            name: "Neon Blocks".to_string(),
            description: "Stack falling tetrominoes, clear lines, speed up.".to_string(),
            width: (self.cfg.cols as u32) * self.cfg.cell,
            height: (self.cfg.rows as u32) * self.cfg.cell,
            controls: "← → MOVE · ↑/Z ROTATE · ↓ SOFT DROP · SPACE HARD DROP".to_string(),
        }
    }

    fn reset(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.state = TetrisState {
            board: Board::new(self.cfg.cols, self.cfg.rows),
            piece: Piece::random(&mut self.rng, self.cfg.cols),
            next_piece: Piece::random(&mut self.rng, self.cfg.cols),
            lines: 0,
        };
        self.session.reset_counters(0);
    }

    fn frame(&mut self, input: &InputState) {
        if !self.session.is_playing() {
            if input.any_just_pressed() {
                self.reset();
                self.session.start();
            }
            return;
        }

        self.session.advance_frame();

        if input.just_pressed("ArrowLeft")
            && !self.state.board.collides(&self.state.piece, -1, 0, None)
        {
            self.state.piece.x -= 1;
        }
        if input.just_pressed("ArrowRight")
            && !self.state.board.collides(&self.state.piece, 1, 0, None)
        {
            self.state.piece.x += 1;
        }
        if input.just_pressed("ArrowUp") || input.just_pressed("KeyZ") {
            self.try_rotate();
        }
        if input.just_pressed("ArrowDown") {
            if self.state.board.collides(&self.state.piece, 0, 1, None) {
                self.lock_piece();
            } else {
                self.state.piece.y += 1;
            }
        }
        if input.just_pressed("Space") {
            self.state.piece.y += self.drop_distance();
            self.lock_piece();
        }
    }

    fn tick(&mut self) {
        if !self.session.is_playing() {
            return;
        }
        if self.state.board.collides(&self.state.piece, 0, 1, None) {
            self.lock_piece();
        } else {
            self.state.piece.y += 1;
        }
    }

    fn tick_interval(&self) -> Option<Duration> {
        Some(Duration::from_millis(self.cfg.tick_ms_for_lines(self.state.lines)))
    }

    arcade_game_boilerplate!(state_type: TetrisState);

    fn render(&self, scene: &mut Scene) {
        let ghost = if self.session.is_playing() {
            self.drop_distance()
        } else {
            0
        };
        render::draw(&self.state, &self.cfg, self.session.lifecycle(), ghost, scene);
    }
}
