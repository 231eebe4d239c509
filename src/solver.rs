use rayon::prelude::*;
use tracing::debug;

use crate::board::Board;
use crate::dictionary::Dictionary;
use crate::util::Position;

/// Shortest word the game accepts
pub const MIN_WORD_LEN: usize = 3;

/// Finds every dictionary word that can be traced on the board as a path of
/// adjacent, not-yet-used cells.
///
/// A word may start anywhere, so an independent backtracking search runs
/// from each cell; the searches share only the read-only board and
/// dictionary, so they are fanned out across worker threads. A word
/// reachable through several distinct paths is reported once. The result is
/// sorted, making the output stable for a given board and dictionary.
pub fn find_words(board: &Board, dict: &Dictionary) -> Vec<String> {
    let starts: Vec<Position> = board.positions().collect();
    let mut words: Vec<String> = starts
        .into_par_iter()
        .flat_map(|start| {
            let mut found = Vec::new();
            let mut path = Vec::with_capacity(board.tile_count());
            let mut word = String::new();
            extend_path(board, dict, start, &mut path, &mut word, &mut found);
            found
        })
        .collect();

    words.sort_unstable();
    words.dedup();
    debug!(words = words.len(), "board solved");
    words
}

/// Grows the current path by one cell, emitting the accumulated string when
/// it is a long-enough word, then recurses into unvisited neighbors. The
/// cell is taken back off the path before returning.
fn extend_path(
    board: &Board,
    dict: &Dictionary,
    pos: Position,
    path: &mut Vec<Position>,
    word: &mut String,
    found: &mut Vec<String>,
) {
    // A bonded tile such as QU contributes both letters in one step
    let tile = board.tile_at(pos);
    word.push_str(tile);
    path.push(pos);

    // Once the accumulated string is not a prefix of any dictionary word, no
    // extension can ever match; on a realistic dictionary almost every
    // branch dies within a few letters
    if dict.has_prefix(word) {
        if word.len() >= MIN_WORD_LEN && dict.is_word(word) {
            found.push(word.clone());
        }
        for &next in board.neighbors(pos) {
            if !path.contains(&next) {
                extend_path(board, dict, next, path, word, found);
            }
        }
    }

    path.pop();
    word.truncate(word.len() - tile.len());
}
