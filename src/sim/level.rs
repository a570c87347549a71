//! Tile grid levels
//!
//! A level is a row-major grid of [`TileKind`] cells, each `TILE_SIZE` units
//! square. Only the solid/non-solid distinction matters to physics.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::TILE_SIZE;

/// Tile types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TileKind {
    #[default]
    Empty,
    Ground,
    Brick,
    /// Item block, becomes `Used` once hit
    Question,
    Used,
    Pipe,
    /// Collectible, passable
    Coin,
    /// Background scenery, passable
    Decoration,
}

impl TileKind {
    /// Whether bodies are blocked by this tile
    pub fn is_solid(self) -> bool {
        matches!(
            self,
            TileKind::Ground | TileKind::Brick | TileKind::Question | TileKind::Used | TileKind::Pipe
        )
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' | ' ' => Some(TileKind::Empty),
            '#' => Some(TileKind::Ground),
            'B' => Some(TileKind::Brick),
            '?' => Some(TileKind::Question),
            'U' => Some(TileKind::Used),
            'P' => Some(TileKind::Pipe),
            'o' => Some(TileKind::Coin),
            '~' => Some(TileKind::Decoration),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            TileKind::Empty => '.',
            TileKind::Ground => '#',
            TileKind::Brick => 'B',
            TileKind::Question => '?',
            TileKind::Used => 'U',
            TileKind::Pipe => 'P',
            TileKind::Coin => 'o',
            TileKind::Decoration => '~',
        }
    }
}

/// Errors from building a level out of text rows or serialized data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("level has no rows")]
    Empty,
    #[error("row {row} has {found} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown tile {ch:?} at row {row}, column {col}")]
    UnknownTile { row: usize, col: usize, ch: char },
    #[error("grid is {width}x{height} but holds {found} tiles")]
    SizeMismatch {
        width: usize,
        height: usize,
        found: usize,
    },
}

/// Fixed-size tile grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTileGrid")]
pub struct TileGrid {
    width: usize,
    height: usize,
    tiles: Vec<TileKind>,
}

/// Unchecked serialized form of [`TileGrid`]
#[derive(Deserialize)]
struct RawTileGrid {
    width: usize,
    height: usize,
    tiles: Vec<TileKind>,
}

impl TryFrom<RawTileGrid> for TileGrid {
    type Error = LevelError;

    fn try_from(raw: RawTileGrid) -> Result<Self, Self::Error> {
        let expected = raw.width.checked_mul(raw.height);
        if expected != Some(raw.tiles.len()) {
            return Err(LevelError::SizeMismatch {
                width: raw.width,
                height: raw.height,
                found: raw.tiles.len(),
            });
        }
        Ok(Self {
            width: raw.width,
            height: raw.height,
            tiles: raw.tiles,
        })
    }
}

impl TileGrid {
    /// Empty grid of `width × height` tiles
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![TileKind::Empty; width * height],
        }
    }

    /// Parse a grid from ASCII rows, top row first
    pub fn from_rows(rows: &[&str]) -> Result<Self, LevelError> {
        let first = rows.first().ok_or(LevelError::Empty)?;
        let width = first.chars().count();
        if width == 0 {
            return Err(LevelError::Empty);
        }

        let mut tiles = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(LevelError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let kind = TileKind::from_char(ch).ok_or(LevelError::UnknownTile { row, col, ch })?;
                tiles.push(kind);
            }
        }

        log::debug!("Loaded level {}x{} tiles", width, rows.len());
        Ok(Self {
            width,
            height: rows.len(),
            tiles,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel_width(&self) -> f32 {
        self.width as f32 * TILE_SIZE
    }

    pub fn pixel_height(&self) -> f32 {
        self.height as f32 * TILE_SIZE
    }

    /// Tile at a grid cell, `None` outside the grid
    pub fn get(&self, col: i32, row: i32) -> Option<TileKind> {
        if col < 0 || row < 0 || col as usize >= self.width || row as usize >= self.height {
            return None;
        }
        self.tiles.get(row as usize * self.width + col as usize).copied()
    }

    /// Overwrite a cell. Returns false if the cell is outside the grid.
    pub fn set(&mut self, col: i32, row: i32, kind: TileKind) -> bool {
        if col < 0 || row < 0 || col as usize >= self.width || row as usize >= self.height {
            return false;
        }
        match self.tiles.get_mut(row as usize * self.width + col as usize) {
            Some(tile) => {
                *tile = kind;
                true
            }
            None => false,
        }
    }

    /// Grid cell containing a world-space point
    pub fn cell_at(p: Vec2) -> (i32, i32) {
        (
            (p.x / TILE_SIZE).floor() as i32,
            (p.y / TILE_SIZE).floor() as i32,
        )
    }

    pub fn tile_at_point(&self, p: Vec2) -> Option<TileKind> {
        let (col, row) = Self::cell_at(p);
        self.get(col, row)
    }

    /// Whether a cell blocks movement.
    ///
    /// Columns beyond either side wall are solid; rows above the top or below
    /// the bottom are open, so bodies can jump off-screen and fall into pits.
    pub fn is_solid_cell(&self, col: i32, row: i32) -> bool {
        if col < 0 || col as usize >= self.width {
            return true;
        }
        self.get(col, row).is_some_and(TileKind::is_solid)
    }

    /// Render back to ASCII rows
    pub fn to_rows(&self) -> Vec<String> {
        self.tiles
            .chunks(self.width.max(1))
            .map(|row| row.iter().map(|t| t.to_char()).collect())
            .collect()
    }
}
