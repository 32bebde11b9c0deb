//! Fixed-capacity reserve stack

use crate::error::PieceError;
use crate::piece::Piece;

/// Number of pieces that can be held in reserve
pub const STACK_CAPACITY: usize = 3;

/// The reserve stack used by the game
pub type ReserveStack = BoundedStack<Piece, STACK_CAPACITY>;

/// LIFO buffer holding at most `N` items. Pushing onto a full stack is
/// rejected, nothing is ever evicted.
#[derive(Debug, Clone)]
pub struct BoundedStack<T, const N: usize> {
    slots: [Option<T>; N],
    /// Number of occupied slots; the top lives at `len - 1`
    len: usize,
}

impl<T, const N: usize> Default for BoundedStack<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> BoundedStack<T, N> {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
            len: 0,
        }
    }

    pub fn push(&mut self, item: T) -> Result<(), PieceError> {
        if self.is_full() {
            return Err(PieceError::StackFull);
        }
        self.slots[self.len] = Some(item);
        self.len += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Result<T, PieceError> {
        if self.is_empty() {
            return Err(PieceError::StackEmpty);
        }
        let item = self.slots[self.len - 1].take().ok_or(PieceError::StackEmpty)?;
        self.len -= 1;
        Ok(item)
    }

    pub fn peek(&self) -> Option<&T> {
        self.get_from_top(0)
    }

    /// Item `depth` places below the top (0 is the top itself)
    pub fn get_from_top(&self, depth: usize) -> Option<&T> {
        if depth >= self.len {
            return None;
        }
        self.slots[self.len - 1 - depth].as_ref()
    }

    pub fn get_from_top_mut(&mut self, depth: usize) -> Option<&mut T> {
        if depth >= self.len {
            return None;
        }
        self.slots[self.len - 1 - depth].as_mut()
    }

    /// Bottom-to-top iteration
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
        self.slots[..self.len].iter().filter_map(Option::as_ref)
    }

    /// Bottom-to-top mutable iteration
    pub fn iter_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut T> + '_ {
        self.slots[..self.len].iter_mut().filter_map(Option::as_mut)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == N
    }

    pub fn capacity(&self) -> usize {
        N
    }
}
