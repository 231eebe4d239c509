use std::fmt;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::util::Position;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("board has {0} tiles, which is not a perfect square")]
    NotSquare(usize),
    #[error("board has no tiles")]
    Empty,
    #[error("failed to read board file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse board file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A square grid of letter tiles for one puzzle round.
///
/// Tiles are stored row-major. Most tiles are single letters; a bonded pair
/// such as `QU` occupies one cell and is indivisible for path purposes.
/// Adjacency is the usual 8-neighborhood with no wraparound, precomputed per
/// cell at construction.
#[derive(Debug, Clone)]
pub struct Board {
    /// Tile contents in row-major order
    tiles: Vec<String>,
    /// Neighbors of the ith cell
    neighbors: Vec<Vec<Position>>,
    side: usize,
}

impl Board {
    /// Builds a board from a row-major sequence of tile strings. The tile
    /// count must be a perfect square. Tiles are normalized to uppercase and
    /// a lone `Q` is expanded to the bonded `QU` die.
    pub fn from_tiles<I, S>(tiles: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tiles: Vec<String> = tiles
            .into_iter()
            .map(|t| {
                let tile = t.as_ref().trim().to_uppercase();
                if tile == "Q" {
                    "QU".to_string()
                } else {
                    tile
                }
            })
            .collect();

        if tiles.is_empty() {
            return Err(BoardError::Empty);
        }
        let side = (tiles.len() as f64).sqrt() as usize;
        if side * side != tiles.len() {
            return Err(BoardError::NotSquare(tiles.len()));
        }

        let neighbors = (0..side)
            .flat_map(|row| (0..side).map(move |col| Position { row, col }))
            .map(|pos| pos.adjacent(side))
            .collect();

        Ok(Self {
            tiles,
            neighbors,
            side,
        })
    }

    /// Reads a board from a JSON file holding a grid of tile strings
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, BoardError> {
        let data = fs::read_to_string(path.as_ref())?;
        let raw_board: Vec<Vec<String>> = serde_json::from_str(&data)?;
        Self::from_tiles(raw_board.into_iter().flatten())
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Returns the tile occupying the given cell
    pub fn tile_at(&self, pos: Position) -> &str {
        &self.tiles[pos.as_index(self.side)]
    }

    /// Returns the up-to-8 cells adjacent to the given cell
    pub fn neighbors(&self, pos: Position) -> &[Position] {
        &self.neighbors[pos.as_index(self.side)]
    }

    /// Iterates over every cell position in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let side = self.side;
        (0..side).flat_map(move |row| (0..side).map(move |col| Position { row, col }))
    }

    /// Human-readable grid layout for diagnostics
    pub fn render(&self) -> String {
        let width = self.tiles.iter().map(|t| t.len()).max().unwrap_or(1);
        let mut out = String::new();
        for row in 0..self.side {
            for col in 0..self.side {
                if col > 0 {
                    out.push(' ');
                }
                let tile = &self.tiles[row * self.side + col];
                out.push_str(tile);
                for _ in tile.len()..width {
                    out.push(' ');
                }
            }
            while out.ends_with(' ') {
                out.pop();
            }
            out.push('\n');
        }
        out
    }
}

impl std::ops::Index<Position> for Board {
    type Output = str;

    fn index(&self, index: Position) -> &Self::Output {
        self.tile_at(index)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
