//! Core game state and the piece-management operations

use crate::bag::{KindSource, PieceFactory, RandomKinds};
use crate::error::PieceError;
use crate::piece::Piece;
use crate::queue::PieceQueue;
use crate::score::SessionStats;
use crate::stack::ReserveStack;
use std::fmt;

/// Pieces exchanged by a triple swap
const TRIPLE_SWAP_DEPTH: usize = 3;

/// Operations the player can request from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Play,
    Reserve,
    UseReserve,
    SwapTop,
    SwapTriple,
}

impl Action {
    /// Whether the loop tops the queue back up after this action.
    /// Swaps never remove a piece, so they never refill.
    pub fn refills(&self) -> bool {
        matches!(self, Action::Play | Action::Reserve | Action::UseReserve)
    }
}

/// What a successful operation did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Played(Piece),
    Reserved(Piece),
    Used(Piece),
    /// `to_queue` came off the reserve, `to_reserve` came off the queue
    Swapped { to_queue: Piece, to_reserve: Piece },
    TripleSwapped,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Played(piece) => write!(f, "Played piece {}", piece),
            Outcome::Reserved(piece) => write!(f, "Reserved piece {}", piece),
            Outcome::Used(piece) => write!(f, "Used reserved piece {}", piece),
            Outcome::Swapped { to_queue, to_reserve } => write!(
                f,
                "Swapped queue front {} with reserve top {}",
                to_reserve, to_queue
            ),
            Outcome::TripleSwapped => write!(f, "Swapped the front 3 queue pieces with the top 3 reserved"),
        }
    }
}

/// Result of one action plus whatever the refill policy added
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionReport {
    pub action: Action,
    pub outcome: Result<Outcome, PieceError>,
    /// Piece generated to top the queue back up, if any
    pub refilled: Option<Piece>,
}

/// The main game struct
pub struct Game<S = RandomKinds> {
    /// Upcoming pieces
    queue: PieceQueue,
    /// Reserved pieces
    reserve: ReserveStack,
    /// Piece generator
    factory: PieceFactory<S>,
    /// Session tracking
    pub stats: SessionStats,
}

impl Default for Game<RandomKinds> {
    fn default() -> Self {
        Self::new()
    }
}

impl Game<RandomKinds> {
    /// Create a new game seeded from the OS entropy source
    pub fn new() -> Self {
        Self::with_factory(PieceFactory::from_entropy())
    }

    /// Create a new game with a fixed seed (reproducible piece types)
    pub fn with_seed(seed: u64) -> Self {
        Self::with_factory(PieceFactory::with_seed(seed))
    }
}

impl<S: KindSource> Game<S> {
    /// Full queue, empty reserve
    pub fn with_factory(mut factory: PieceFactory<S>) -> Self {
        let queue = PieceQueue::filled(&mut factory);
        tracing::debug!(
            "New game, starting queue: {}",
            queue.iter().map(Piece::to_string).collect::<Vec<_>>().join(" ")
        );
        Self {
            queue,
            reserve: ReserveStack::new(),
            factory,
            stats: SessionStats::new(),
        }
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn reserve(&self) -> &ReserveStack {
        &self.reserve
    }

    /// Id the next generated piece will receive
    pub fn next_id(&self) -> u32 {
        self.factory.next_id()
    }

    /// Run one action, then the refill policy, and record it in the stats
    pub fn apply(&mut self, action: Action) -> ActionReport {
        let outcome = match action {
            Action::Play => self.play(),
            Action::Reserve => self.reserve_piece(),
            Action::UseReserve => self.use_reserve(),
            Action::SwapTop => self.swap_top(),
            Action::SwapTriple => self.swap_triple(),
        };

        match &outcome {
            Ok(outcome) => tracing::debug!("{:?}: {}", action, outcome),
            Err(e) => tracing::info!("{:?} rejected: {}", action, e),
        }

        let refilled = if action.refills() { self.refill() } else { None };

        let report = ActionReport {
            action,
            outcome,
            refilled,
        };
        self.stats.record(&report);
        report
    }

    /// Generate one fresh piece and try to queue it. The piece is always
    /// generated, so its id is used up even when the queue has no room.
    pub fn refill(&mut self) -> Option<Piece> {
        let piece = self.factory.generate();
        match self.queue.enqueue(piece) {
            Ok(()) => {
                tracing::trace!("Refilled queue with {}", piece);
                Some(piece)
            }
            Err(e) => {
                tracing::trace!("Discarded {}: {}", piece, e);
                None
            }
        }
    }

    /// Remove the front piece from the queue
    pub fn play(&mut self) -> Result<Outcome, PieceError> {
        let piece = self.queue.dequeue()?;
        Ok(Outcome::Played(piece))
    }

    /// Move the front piece of the queue onto the reserve
    pub fn reserve_piece(&mut self) -> Result<Outcome, PieceError> {
        if self.queue.is_empty() {
            return Err(PieceError::QueueEmpty);
        }
        if self.reserve.is_full() {
            return Err(PieceError::StackFull);
        }
        let piece = self.queue.dequeue()?;
        self.reserve.push(piece)?;
        Ok(Outcome::Reserved(piece))
    }

    /// Take the top piece off the reserve
    pub fn use_reserve(&mut self) -> Result<Outcome, PieceError> {
        let piece = self.reserve.pop()?;
        Ok(Outcome::Used(piece))
    }

    /// Exchange the queue front with the reserve top, in place
    pub fn swap_top(&mut self) -> Result<Outcome, PieceError> {
        let front = self.queue.get_mut(0).ok_or(PieceError::QueueEmpty)?;
        let top = self.reserve.get_from_top_mut(0).ok_or(PieceError::StackEmpty)?;
        std::mem::swap(front, top);
        Ok(Outcome::Swapped {
            to_queue: *front,
            to_reserve: *top,
        })
    }

    /// Exchange the front 3 queue pieces with the top 3 reserved pieces,
    /// pairing the n-th from the front with the n-th from the top
    pub fn swap_triple(&mut self) -> Result<Outcome, PieceError> {
        if self.queue.len() < TRIPLE_SWAP_DEPTH || self.reserve.len() < TRIPLE_SWAP_DEPTH {
            return Err(PieceError::NotEnoughForTripleSwap {
                queue: self.queue.len(),
                stack: self.reserve.len(),
            });
        }
        let queued = self.queue.iter_mut().take(TRIPLE_SWAP_DEPTH);
        let reserved = self.reserve.iter_mut().rev().take(TRIPLE_SWAP_DEPTH);
        for (q, r) in queued.zip(reserved) {
            std::mem::swap(q, r);
        }
        Ok(Outcome::TripleSwapped)
    }
}
