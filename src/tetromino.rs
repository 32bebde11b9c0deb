//! Piece shape definitions
//!
//! The simulator only deals four shapes. Shape geometry is irrelevant here,
//! so a type is just a tag with a display character and a color.

use crossterm::style::Color;
use std::fmt;

/// The 4 piece types handed out by the factory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TetrominoType {
    I, // Cyan - long bar
    O, // Yellow - square
    T, // Purple - T-shape
    L, // Orange - L-shape
}

impl TetrominoType {
    /// Number of distinct piece types
    pub const COUNT: usize = 4;

    /// Get the color for this tetromino
    pub fn color(&self) -> Color {
        match self {
            TetrominoType::I => Color::Cyan,
            TetrominoType::O => Color::Yellow,
            TetrominoType::T => Color::Magenta,
            TetrominoType::L => Color::Rgb { r: 255, g: 165, b: 0 }, // Orange
        }
    }

    /// Get all tetromino types, in a fixed order
    pub fn all() -> [TetrominoType; Self::COUNT] {
        [
            TetrominoType::I,
            TetrominoType::O,
            TetrominoType::T,
            TetrominoType::L,
        ]
    }

    /// Single-character tag shown in the queue and stack listings
    pub fn symbol(&self) -> char {
        match self {
            TetrominoType::I => 'I',
            TetrominoType::O => 'O',
            TetrominoType::T => 'T',
            TetrominoType::L => 'L',
        }
    }
}

impl fmt::Display for TetrominoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
