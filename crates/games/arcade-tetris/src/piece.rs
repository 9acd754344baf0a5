use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// The seven tetromino kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Spawn-orientation cell matrix.
    pub fn shape(self) -> Vec<Vec<u8>> {
        match self {
            PieceKind::I => vec![vec![1, 1, 1, 1]],
            PieceKind::O => vec![vec![1, 1], vec![1, 1]],
            PieceKind::T => vec![vec![0, 1, 0], vec![1, 1, 1]],
            PieceKind::L => vec![vec![1, 0, 0], vec![1, 1, 1]],
            PieceKind::J => vec![vec![0, 0, 1], vec![1, 1, 1]],
            PieceKind::S => vec![vec![0, 1, 1], vec![1, 1, 0]],
            PieceKind::Z => vec![vec![1, 1, 0], vec![0, 1, 1]],
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            PieceKind::I => "#00e5ff",
            PieceKind::O => "#ffcc00",
            PieceKind::T => "#aa00ff",
            PieceKind::L => "#ff8800",
            PieceKind::J => "#0055ff",
            PieceKind::S => "#00ff88",
            PieceKind::Z => "#ff0055",
        }
    }
}

/// The falling piece: kind, current rotation matrix, and well position of
/// the matrix's top-left cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Vec<Vec<u8>>,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// Spawn a random piece centered at the top of a `cols`-wide well.
    pub fn random(rng: &mut StdRng, cols: i32) -> Self {
        let kind = PieceKind::ALL[rng.random_range(0..PieceKind::ALL.len())];
        let shape = kind.shape();
        let width = shape[0].len() as i32;
        Piece {
            kind,
            shape,
            x: cols / 2 - width / 2,
            y: 0,
        }
    }

    /// Occupied well coordinates for this piece, offset by (dx, dy).
    pub fn cells_at(&self, dx: i32, dy: i32) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape.iter().enumerate().flat_map(move |(r, row)| {
            row.iter().enumerate().filter_map(move |(c, &cell)| {
                (cell != 0).then_some((self.x + c as i32 + dx, self.y + r as i32 + dy))
            })
        })
    }
}

/// Rotate a shape matrix 90° clockwise.
pub fn rotate_cw(shape: &[Vec<u8>]) -> Vec<Vec<u8>> {
    let rows = shape.len();
    let cols = shape[0].len();
    let mut out = vec![vec![0u8; rows]; cols];
    for (r, row) in shape.iter().enumerate() {
        for (c, &cell) in row.iter().enumerate() {
            out[c][rows - 1 - r] = cell;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn rotate_i_piece() {
        let i = PieceKind::I.shape();
        let rotated = rotate_cw(&i);
        assert_eq!(rotated, vec![vec![1], vec![1], vec![1], vec![1]]);
        let back = rotate_cw(&rotate_cw(&rotate_cw(&rotated)));
        assert_eq!(back, i, "Four rotations are the identity");
    }

    #[test]
    fn rotate_t_piece() {
        let t = PieceKind::T.shape();
        assert_eq!(rotate_cw(&t), vec![vec![1, 0], vec![1, 1], vec![1, 0]]);
    }

    #[test]
    fn spawn_is_centered() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let p = Piece::random(&mut rng, 10);
            let width = p.shape[0].len() as i32;
            assert_eq!(p.x, 5 - width / 2);
            assert_eq!(p.y, 0);
        }
    }

    #[test]
    fn cells_at_reports_solid_cells_only() {
        let p = Piece {
            kind: PieceKind::T,
            shape: PieceKind::T.shape(),
            x: 4,
            y: 0,
        };
        let cells: Vec<(i32, i32)> = p.cells_at(0, 0).collect();
        assert_eq!(cells, vec![(5, 0), (4, 1), (5, 1), (6, 1)]);
    }
}
