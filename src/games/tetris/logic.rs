//! Placement engine for the falling-block game.
//!
//! Collision testing, movement, rotation, merge, row sweeping, and the
//! spawn cycle. Illegal moves and rotations are silent no-ops that report
//! failure through their return value; there is no error path.

use super::types::{spawn_piece, TetrisGame, COLS, ROWS};
use rand::Rng;

/// Input actions for the falling-block game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TetrisInput {
    /// Shift one column left (Left arrow).
    Left,
    /// Shift one column right (Right arrow).
    Right,
    /// Force one descent step (Down arrow).
    Down,
    /// Rotate clockwise (Up arrow).
    Rotate,
}

/// Process player input. `Down` runs a full descent step and can lock the
/// piece, so it may spawn a successor.
pub fn process_input<R: Rng>(game: &mut TetrisGame, input: TetrisInput, rng: &mut R) {
    if game.game_over {
        return;
    }

    match input {
        TetrisInput::Left => {
            try_move(game, -1, 0);
        }
        TetrisInput::Right => {
            try_move(game, 1, 0);
        }
        TetrisInput::Down => move_down(game, rng),
        TetrisInput::Rotate => {
            try_rotate(game);
        }
    }
}

/// Process one gravity tick (called every `GRAVITY_INTERVAL_MS`).
pub fn process_tick<R: Rng>(game: &mut TetrisGame, rng: &mut R) {
    if game.game_over {
        return;
    }
    move_down(game, rng);
}

/// Whether the active piece can translate by `(dx, dy)`.
///
/// Pure predicate: every occupied mask cell must stay inside the side and
/// bottom walls and land on an empty board cell. Mask zeros are skipped.
/// There is no top bound; rows above the board count as empty.
pub fn can_move(game: &TetrisGame, dx: i16, dy: i16) -> bool {
    game.piece.shape.cells.iter().enumerate().all(|(y, row)| {
        row.iter().enumerate().all(|(x, &value)| {
            let new_x = game.piece.x + x as i16 + dx;
            let new_y = game.piece.y + y as i16 + dy;
            value == 0 || (is_inside(new_x, new_y) && game.board.cell(new_x, new_y) == 0)
        })
    })
}

/// Inside the side and bottom walls. Deliberately unbounded above.
fn is_inside(x: i16, y: i16) -> bool {
    x >= 0 && x < COLS as i16 && y < ROWS as i16
}

/// Translate the active piece by `(dx, dy)` if legal. Returns whether the
/// move happened.
pub fn try_move(game: &mut TetrisGame, dx: i16, dy: i16) -> bool {
    if can_move(game, dx, dy) {
        game.piece.x += dx;
        game.piece.y += dy;
        true
    } else {
        false
    }
}

/// One descent step. A piece that cannot fall locks: it merges into the
/// board, full rows are swept, and the next piece spawns. The lock is
/// atomic with the sweep and the spawn.
pub fn move_down<R: Rng>(game: &mut TetrisGame, rng: &mut R) {
    if can_move(game, 0, 1) {
        game.piece.y += 1;
    } else {
        merge(game);
        remove_full_rows(game);
        spawn(game, rng);
    }
}

/// Rotate the active piece clockwise if the rotated mask fits at the
/// current anchor. No wall kicks: a rotation that would clip a wall or a
/// settled cell is rejected and the previous shape restored.
pub fn try_rotate(game: &mut TetrisGame) -> bool {
    let rotated = game.piece.shape.rotated();
    let backup = std::mem::replace(&mut game.piece.shape, rotated);
    if can_move(game, 0, 0) {
        true
    } else {
        game.piece.shape = backup;
        false
    }
}

/// Write the active piece's occupied cells into the board.
fn merge(game: &mut TetrisGame) {
    for (y, row) in game.piece.shape.cells.iter().enumerate() {
        for (x, &value) in row.iter().enumerate() {
            if value != 0 {
                let board_x = (game.piece.x + x as i16) as usize;
                let board_y = (game.piece.y + y as i16) as usize;
                game.board.cells[board_y][board_x] = value;
            }
        }
    }
}

/// Sweep full rows: every row with no empty cell is dropped, the board is
/// refilled at the top, and surviving rows keep their relative order.
/// Returns the number of rows removed.
///
/// The score is bumped once per sweep regardless of the count. The sweep
/// runs on every lock, so the score counts locks, not cleared lines.
pub fn remove_full_rows(game: &mut TetrisGame) -> usize {
    game.board
        .cells
        .retain(|row| row.iter().any(|&cell| cell == 0));
    let removed = ROWS - game.board.cells.len();
    for _ in 0..removed {
        game.board.cells.insert(0, vec![0; COLS]);
    }
    game.score += 1;
    removed
}

/// Replace the active piece with a fresh random spawn. A spawn that
/// overlaps settled cells means the board has topped out and the game ends.
fn spawn<R: Rng>(game: &mut TetrisGame, rng: &mut R) {
    game.piece = spawn_piece(rng);
    if !can_move(game, 0, 0) {
        game.game_over = true;
    }
}
