//! Falling-block game data structures.
//!
//! A fixed 20x10 board of settled cells plus the currently falling
//! tetromino. The board and the active piece are owned by [`TetrisGame`];
//! all mutation goes through the functions in [`super::logic`].

use rand::Rng;

/// Board height in rows.
pub const ROWS: usize = 20;

/// Board width in columns.
pub const COLS: usize = 10;

/// Gravity interval in milliseconds (one forced descent per second).
pub const GRAVITY_INTERVAL_MS: u64 = 1000;

/// A tetromino shape mask. Row-major, 1 = occupied.
///
/// Shapes are immutable values: rotation returns a new mask instead of
/// mutating in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceShape {
    pub cells: Vec<Vec<u8>>,
}

impl PieceShape {
    pub fn new(cells: Vec<Vec<u8>>) -> Self {
        Self { cells }
    }

    /// Mask height in rows.
    pub fn height(&self) -> usize {
        self.cells.len()
    }

    /// Mask width in columns.
    pub fn width(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// The 90-degree clockwise rotation: transpose, then reverse each
    /// resulting row. A HxW mask becomes WxH.
    pub fn rotated(&self) -> Self {
        let h = self.height();
        let w = self.width();
        let cells = (0..w)
            .map(|i| (0..h).map(|j| self.cells[h - 1 - j][i]).collect())
            .collect();
        Self { cells }
    }
}

/// The fixed 7-shape tetromino catalog (I, O, T, Z, S, J, L).
pub fn shape_catalog() -> [PieceShape; 7] {
    [
        PieceShape::new(vec![vec![1, 1, 1, 1]]),
        PieceShape::new(vec![vec![1, 1], vec![1, 1]]),
        PieceShape::new(vec![vec![1, 1, 1], vec![0, 1, 0]]),
        PieceShape::new(vec![vec![1, 1, 0], vec![0, 1, 1]]),
        PieceShape::new(vec![vec![0, 1, 1], vec![1, 1, 0]]),
        PieceShape::new(vec![vec![1, 1, 1], vec![1, 0, 0]]),
        PieceShape::new(vec![vec![1, 1, 1], vec![0, 0, 1]]),
    ]
}

/// The currently falling piece: a shape mask plus its top-left anchor in
/// board coordinates.
#[derive(Debug, Clone)]
pub struct ActivePiece {
    pub shape: PieceShape,
    pub x: i16,
    pub y: i16,
}

/// Draw a random catalog shape and place it horizontally centered at the
/// top of the board.
pub fn spawn_piece<R: Rng>(rng: &mut R) -> ActivePiece {
    let catalog = shape_catalog();
    let shape = catalog[rng.gen_range(0..catalog.len())].clone();
    ActivePiece {
        shape,
        x: COLS as i16 / 2 - 1,
        y: 0,
    }
}

/// The settled-cell grid. Dimensions are fixed for the life of the game;
/// only merging and row sweeps touch the cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Row-major cells, 0 = empty.
    pub cells: Vec<Vec<u8>>,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: vec![vec![0; COLS]; ROWS],
        }
    }

    /// Occupancy at board coordinates. Rows above the top edge count as
    /// empty; `x` and the lower bound must already be in range.
    pub fn cell(&self, x: i16, y: i16) -> u8 {
        if y < 0 {
            return 0;
        }
        self.cells[y as usize][x as usize]
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct TetrisGame {
    /// Settled cells.
    pub board: Board,
    /// The currently falling piece.
    pub piece: ActivePiece,
    /// Bumped once per row sweep, which runs on every lock. A lock counter,
    /// not a line counter.
    pub score: u32,
    /// Set when a freshly spawned piece overlaps settled cells. All inputs
    /// and ticks are no-ops afterwards.
    pub game_over: bool,
}

impl TetrisGame {
    /// Create a new game with an empty board and a random first piece.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self {
            board: Board::new(),
            piece: spawn_piece(rng),
            score: 0,
            game_over: false,
        }
    }

    /// The board with the active piece overlaid. The renderer reads only
    /// this; it never touches the live board or piece.
    pub fn snapshot(&self) -> Vec<Vec<u8>> {
        let mut cells = self.board.cells.clone();
        for (dy, row) in self.piece.shape.cells.iter().enumerate() {
            for (dx, &value) in row.iter().enumerate() {
                if value == 0 {
                    continue;
                }
                let x = self.piece.x + dx as i16;
                let y = self.piece.y + dy as i16;
                if (0..COLS as i16).contains(&x) && (0..ROWS as i16).contains(&y) {
                    cells[y as usize][x as usize] = value;
                }
            }
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_seven_shapes() {
        let catalog = shape_catalog();
        assert_eq!(catalog.len(), 7);
        for shape in &catalog {
            assert!(shape.height() > 0);
            assert!(shape.width() > 0);
            // Every row of a mask has the same width
            for row in &shape.cells {
                assert_eq!(row.len(), shape.width());
            }
        }
    }

    #[test]
    fn test_rotated_transposes_dimensions() {
        let shape = PieceShape::new(vec![vec![1, 1, 1, 1]]);
        let rotated = shape.rotated();
        assert_eq!(rotated.height(), 4);
        assert_eq!(rotated.width(), 1);
        assert_eq!(rotated.cells, vec![vec![1], vec![1], vec![1], vec![1]]);
    }

    #[test]
    fn test_rotated_l_shape() {
        // [1,1,1]      [1,1]
        // [1,0,0]  ->  [0,1]
        //              [0,1]
        let shape = PieceShape::new(vec![vec![1, 1, 1], vec![1, 0, 0]]);
        let rotated = shape.rotated();
        assert_eq!(
            rotated.cells,
            vec![vec![1, 1], vec![0, 1], vec![0, 1]]
        );
    }

    #[test]
    fn test_spawn_piece_centered_at_top() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let piece = spawn_piece(&mut rng);
            assert_eq!(piece.x, 4);
            assert_eq!(piece.y, 0);
        }
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.cells.len(), ROWS);
        for row in &board.cells {
            assert_eq!(row.len(), COLS);
            assert!(row.iter().all(|&cell| cell == 0));
        }
    }

    #[test]
    fn test_board_cell_above_top_is_empty() {
        let mut board = Board::new();
        board.cells[0][3] = 1;
        assert_eq!(board.cell(3, 0), 1);
        assert_eq!(board.cell(3, -1), 0);
    }

    #[test]
    fn test_new_game_defaults() {
        let mut rng = rand::thread_rng();
        let game = TetrisGame::new(&mut rng);
        assert_eq!(game.score, 0);
        assert!(!game.game_over);
        assert_eq!(game.piece.x, 4);
        assert_eq!(game.piece.y, 0);
    }

    #[test]
    fn test_snapshot_overlays_piece_on_board() {
        let mut rng = rand::thread_rng();
        let mut game = TetrisGame::new(&mut rng);
        game.board.cells[19][0] = 1;
        game.piece = ActivePiece {
            shape: PieceShape::new(vec![vec![1, 1]]),
            x: 4,
            y: 10,
        };

        let cells = game.snapshot();
        assert_eq!(cells.len(), ROWS);
        assert_eq!(cells[19][0], 1);
        assert_eq!(cells[10][4], 1);
        assert_eq!(cells[10][5], 1);
        assert_eq!(cells[10][6], 0);
        // The live board is untouched
        assert_eq!(game.board.cells[10][4], 0);
    }
}
