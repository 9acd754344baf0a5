use serde::{Deserialize, Serialize};

use crate::piece::{Piece, PieceKind};

/// The well: settled cells stored row-major (y * cols + x).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cols: i32,
    rows: i32,
    cells: Vec<Option<PieceKind>>,
}

impl Board {
    pub fn new(cols: i32, rows: i32) -> Self {
        Self {
            cols,
            rows,
            cells: vec![None; (cols * rows) as usize],
        }
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn get(&self, x: i32, y: i32) -> Option<PieceKind> {
        if x < 0 || y < 0 || x >= self.cols || y >= self.rows {
            return None;
        }
        self.cells[(y * self.cols + x) as usize]
    }

    pub fn set(&mut self, x: i32, y: i32, kind: PieceKind) {
        if x >= 0 && y >= 0 && x < self.cols && y < self.rows {
            self.cells[(y * self.cols + x) as usize] = Some(kind);
        }
    }

    /// Whether the piece, offset by (dx, dy) with an optional replacement
    /// shape, overlaps walls, the floor, or settled cells. Cells above the
    /// well top (y < 0) only collide with the side walls.
    pub fn collides(&self, piece: &Piece, dx: i32, dy: i32, shape: Option<&[Vec<u8>]>) -> bool {
        let shape = shape.unwrap_or(&piece.shape);
        for (r, row) in shape.iter().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                if cell == 0 {
                    continue;
                }
                let nx = piece.x + c as i32 + dx;
                let ny = piece.y + r as i32 + dy;
                if nx < 0 || nx >= self.cols || ny >= self.rows {
                    return true;
                }
                if ny >= 0 && self.cells[(ny * self.cols + nx) as usize].is_some() {
                    return true;
                }
            }
        }
        false
    }

    /// Merge a locked piece's cells into the well (rows above the top are
    /// dropped).
    pub fn merge(&mut self, piece: &Piece) {
        for (x, y) in piece.cells_at(0, 0) {
            if y >= 0 {
                self.set(x, y, piece.kind);
            }
        }
    }

    /// Remove every full row, shifting everything above down and refilling
    /// from the top. Returns the number of cleared rows.
    pub fn clear_full_rows(&mut self) -> u32 {
        let mut cleared = 0;
        let mut y = self.rows - 1;
        while y >= 0 {
            let full = (0..self.cols).all(|x| self.get(x, y).is_some());
            if full {
                let start = (y * self.cols) as usize;
                self.cells.drain(start..start + self.cols as usize);
                self.cells.splice(0..0, std::iter::repeat_n(None, self.cols as usize));
                cleared += 1;
                // Re-check the same row index: everything shifted down.
            } else {
                y -= 1;
            }
        }
        cleared
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}
