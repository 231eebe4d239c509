//! Word-finding engine for letter-grid puzzles. Load a word list once into
//! a [`Dictionary`], wrap each round's tiles in a [`Board`], and
//! [`find_words`] enumerates every word that can be traced over adjacent,
//! not-yet-used tiles.

pub mod board;
pub mod dictionary;
pub mod solver;
pub mod util;

pub use self::board::{Board, BoardError};
pub use self::dictionary::{Dictionary, DictionaryError};
pub use self::solver::{find_words, MIN_WORD_LEN};
