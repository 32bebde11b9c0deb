//! Piece values moved between the queue and the reserve stack

use crate::tetromino::TetrominoType;
use std::fmt;

/// Unique piece identifier, assigned in creation order
pub type PieceId = u32;

/// A piece waiting in the queue or sitting in reserve.
///
/// Pieces never change after the factory creates them; containers copy
/// them around by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    /// The type of tetromino
    pub piece_type: TetrominoType,
    /// Sequential id handed out by the factory
    pub id: PieceId,
}

impl Piece {
    pub fn new(piece_type: TetrominoType, id: PieceId) -> Self {
        Self { piece_type, id }
    }
}

impl fmt::Display for Piece {
    /// Renders as `[T 7]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.piece_type, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let piece = Piece::new(TetrominoType::T, 7);
        assert_eq!(piece.to_string(), "[T 7]");
    }

    #[test]
    fn test_copy_semantics() {
        let a = Piece::new(TetrominoType::I, 0);
        let b = a;
        assert_eq!(a, b);
    }
}
