//! Fixed-capacity circular queue of upcoming pieces

use crate::bag::{KindSource, PieceFactory};
use crate::error::PieceError;
use crate::piece::Piece;

/// Number of upcoming pieces kept in the queue
pub const QUEUE_CAPACITY: usize = 5;

/// The upcoming-piece queue used by the game
pub type PieceQueue = BoundedQueue<Piece, QUEUE_CAPACITY>;

/// FIFO ring buffer holding at most `N` items.
///
/// `len` alone decides full/empty; `head` and `tail` are equal both when the
/// buffer is empty and when it is full.
#[derive(Debug, Clone)]
pub struct BoundedQueue<T, const N: usize> {
    slots: [Option<T>; N],
    /// Slot of the front element
    head: usize,
    /// Slot the next enqueue writes to
    tail: usize,
    len: usize,
}

impl<T, const N: usize> Default for BoundedQueue<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> BoundedQueue<T, N> {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    /// Append at the back. Rejected without change when full.
    pub fn enqueue(&mut self, item: T) -> Result<(), PieceError> {
        if self.is_full() {
            return Err(PieceError::QueueFull);
        }
        self.slots[self.tail] = Some(item);
        self.tail = (self.tail + 1) % N;
        self.len += 1;
        Ok(())
    }

    /// Remove and return the front item. Rejected without change when empty.
    pub fn dequeue(&mut self) -> Result<T, PieceError> {
        if self.is_empty() {
            return Err(PieceError::QueueEmpty);
        }
        let item = self.slots[self.head].take().ok_or(PieceError::QueueEmpty)?;
        self.head = (self.head + 1) % N;
        self.len -= 1;
        Ok(item)
    }

    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Item at logical position `index`, counted from the front
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.slots[(self.head + index) % N].as_ref()
    }

    /// Mutable access at logical position `index`, counted from the front
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        self.slots[(self.head + index) % N].as_mut()
    }

    /// Front-to-back iteration
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.len).filter_map(move |i| self.get(i))
    }

    /// Front-to-back mutable iteration. Free slots are always `None`, so
    /// walking the ring from `head` yields exactly the stored items in order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        let (wrapped, from_head) = self.slots.split_at_mut(self.head);
        from_head
            .iter_mut()
            .chain(wrapped.iter_mut())
            .filter_map(Option::as_mut)
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

impl<const N: usize> BoundedQueue<Piece, N> {
    /// Startup queue: filled to capacity straight from the factory
    pub fn filled<S: KindSource>(factory: &mut PieceFactory<S>) -> Self {
        let mut queue = Self::new();
        while !queue.is_full() {
            // Cannot fail, the loop guard checks for room
            let _ = queue.enqueue(factory.generate());
        }
        queue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bag::CycleKinds;
    use crate::tetromino::TetrominoType;

    fn factory() -> PieceFactory<CycleKinds> {
        PieceFactory::new(CycleKinds::new(&TetrominoType::all()))
    }

    #[test]
    fn test_fifo_order() {
        let mut queue: BoundedQueue<u32, 5> = BoundedQueue::new();
        for i in 0..3 {
            queue.enqueue(i).unwrap();
        }
        assert_eq!(queue.dequeue(), Ok(0));
        assert_eq!(queue.dequeue(), Ok(1));
        assert_eq!(queue.dequeue(), Ok(2));
        assert_eq!(queue.dequeue(), Err(PieceError::QueueEmpty));
    }

    #[test]
    fn test_enqueue_full_is_rejected() {
        let mut queue: BoundedQueue<u32, 5> = BoundedQueue::new();
        for i in 0..5 {
            queue.enqueue(i).unwrap();
        }
        assert_eq!(queue.enqueue(99), Err(PieceError::QueueFull));
        assert_eq!(queue.len(), 5);
        let contents: Vec<_> = queue.iter().copied().collect();
        assert_eq!(contents, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_dequeue_empty_leaves_indices_alone() {
        let mut queue: BoundedQueue<u32, 5> = BoundedQueue::new();
        queue.enqueue(1).unwrap();
        queue.dequeue().unwrap();
        let (head, tail) = (queue.head, queue.tail);
        assert_eq!(queue.dequeue(), Err(PieceError::QueueEmpty));
        assert_eq!((queue.head, queue.tail, queue.len()), (head, tail, 0));
    }

    #[test]
    fn test_wraps_around() {
        let mut queue: BoundedQueue<u32, 5> = BoundedQueue::new();
        let mut next = 0;
        let mut expected = 0;
        // Many laps around the ring with the queue kept near full
        for _ in 0..4 {
            while !queue.is_full() {
                queue.enqueue(next).unwrap();
                next += 1;
            }
            for _ in 0..3 {
                assert_eq!(queue.dequeue(), Ok(expected));
                expected += 1;
            }
        }
        let rest: Vec<_> = queue.iter().copied().collect();
        assert_eq!(rest, (expected..next).collect::<Vec<_>>());
    }

    #[test]
    fn test_count_stays_in_bounds() {
        let mut queue: BoundedQueue<u32, 5> = BoundedQueue::new();
        // Deterministic mixed workload
        for step in 0..200u32 {
            if step % 3 == 0 {
                let _ = queue.dequeue();
            } else {
                let _ = queue.enqueue(step);
            }
            assert!(queue.len() <= queue.capacity());
        }
        while queue.dequeue().is_ok() {}
        assert_eq!(queue.len(), 0);
        assert!(queue.dequeue().is_err());
    }

    #[test]
    fn test_positional_access() {
        let mut queue: BoundedQueue<u32, 5> = BoundedQueue::new();
        for i in 0..5 {
            queue.enqueue(i).unwrap();
        }
        queue.dequeue().unwrap();
        queue.enqueue(5).unwrap();
        assert_eq!(queue.front(), Some(&1));
        assert_eq!(queue.get(4), Some(&5));
        assert_eq!(queue.get(5), None);
        *queue.get_mut(0).unwrap() = 10;
        assert_eq!(queue.front(), Some(&10));
    }

    #[test]
    fn test_iter_mut_follows_ring_order() {
        let mut queue: BoundedQueue<u32, 5> = BoundedQueue::new();
        for i in 0..5 {
            queue.enqueue(i).unwrap();
        }
        for _ in 0..3 {
            queue.dequeue().unwrap();
        }
        queue.enqueue(5).unwrap();
        queue.enqueue(6).unwrap();
        // Stored in slots 3, 4, 0, 1
        for item in queue.iter_mut() {
            *item *= 10;
        }
        let contents: Vec<_> = queue.iter().copied().collect();
        assert_eq!(contents, vec![30, 40, 50, 60]);
        let visited = queue.iter_mut().count();
        assert_eq!(visited, queue.len());
    }

    #[test]
    fn test_filled_queue_has_increasing_ids() {
        let mut factory = factory();
        let queue = PieceQueue::filled(&mut factory);
        assert_eq!(queue.len(), QUEUE_CAPACITY);
        let ids: Vec<_> = queue.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
        assert_eq!(factory.next_id(), 5);
    }
}
