//! Piece factory
//!
//! Every new piece gets a uniformly random type and the next sequential id.
//! Where the types come from is pluggable so tests can deal a fixed sequence.

use crate::piece::{Piece, PieceId};
use crate::tetromino::TetrominoType;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Supplies the type of each newly generated piece
pub trait KindSource {
    fn next_kind(&mut self) -> TetrominoType;
}

/// Uniform random piece types
#[derive(Debug, Clone)]
pub struct RandomKinds<R = ChaCha8Rng> {
    rng: R,
}

impl RandomKinds<ChaCha8Rng> {
    /// Seeded from the OS entropy source
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }

    /// Reproducible stream for a given seed
    pub fn with_seed(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomKinds<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> KindSource for RandomKinds<R> {
    fn next_kind(&mut self) -> TetrominoType {
        let all = TetrominoType::all();
        all[self.rng.gen_range(0..all.len())]
    }
}

/// Deals a fixed sequence of types, starting over when it runs out
#[derive(Debug, Clone)]
pub struct CycleKinds {
    kinds: Vec<TetrominoType>,
    index: usize,
}

impl CycleKinds {
    /// Falls back to the full type list when `kinds` is empty
    pub fn new(kinds: &[TetrominoType]) -> Self {
        let kinds = if kinds.is_empty() {
            TetrominoType::all().to_vec()
        } else {
            kinds.to_vec()
        };
        Self { kinds, index: 0 }
    }
}

impl KindSource for CycleKinds {
    fn next_kind(&mut self) -> TetrominoType {
        let kind = self.kinds[self.index];
        self.index = (self.index + 1) % self.kinds.len();
        kind
    }
}

/// Creates pieces and owns the id counter
#[derive(Debug, Clone)]
pub struct PieceFactory<S = RandomKinds> {
    source: S,
    next_id: PieceId,
}

impl PieceFactory<RandomKinds> {
    /// Random factory seeded from the OS entropy source
    pub fn from_entropy() -> Self {
        Self::new(RandomKinds::from_entropy())
    }

    /// Random factory with a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self::new(RandomKinds::with_seed(seed))
    }
}

impl<S: KindSource> PieceFactory<S> {
    /// Ids start at 0
    pub fn new(source: S) -> Self {
        Self { source, next_id: 0 }
    }

    /// Produce the next piece and advance the id counter
    pub fn generate(&mut self) -> Piece {
        let piece = Piece::new(self.source.next_kind(), self.next_id);
        self.next_id += 1;
        tracing::trace!("Generated piece {}", piece);
        piece
    }

    /// Id the next generated piece will receive
    pub fn next_id(&self) -> PieceId {
        self.next_id
    }
}
