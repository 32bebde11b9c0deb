//! Session statistics shown when the player quits

use crate::game::{Action, ActionReport};

/// Running tally of what happened during a session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub played: u32,
    pub reserved: u32,
    pub used: u32,
    pub swaps: u32,
    pub triple_swaps: u32,
    /// Operations refused because a precondition failed
    pub rejected: u32,
    /// Menu inputs that were not a known command
    pub invalid_inputs: u32,
    /// Refill pieces that made it into the queue (startup fill excluded)
    pub refills: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the result of one applied action
    pub fn record(&mut self, report: &ActionReport) {
        if report.refilled.is_some() {
            self.refills += 1;
        }
        if report.outcome.is_err() {
            self.rejected += 1;
            return;
        }
        match report.action {
            Action::Play => self.played += 1,
            Action::Reserve => self.reserved += 1,
            Action::UseReserve => self.used += 1,
            Action::SwapTop => self.swaps += 1,
            Action::SwapTriple => self.triple_swaps += 1,
        }
    }

    pub fn record_invalid_input(&mut self) {
        self.invalid_inputs += 1;
    }

    /// Total successful operations
    pub fn total_moves(&self) -> u32 {
        self.played + self.reserved + self.used + self.swaps + self.triple_swaps
    }

    /// Multi-line summary for the farewell screen
    pub fn summary(&self) -> String {
        format!(
            "Pieces played: {} | Reserved: {} | Used from reserve: {}\n\
             Swaps: {} | Triple swaps: {} | New pieces queued: {}\n\
             Rejected: {} | Invalid inputs: {}",
            self.played,
            self.reserved,
            self.used,
            self.swaps,
            self.triple_swaps,
            self.refills,
            self.rejected,
            self.invalid_inputs,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PieceError;
    use crate::game::Outcome;
    use crate::piece::Piece;
    use crate::tetromino::TetrominoType;

    fn report(action: Action, outcome: Result<Outcome, PieceError>, refilled: bool) -> ActionReport {
        ActionReport {
            action,
            outcome,
            refilled: refilled.then(|| Piece::new(TetrominoType::I, 9)),
        }
    }

    #[test]
    fn test_counts_successes_per_action() {
        let mut stats = SessionStats::new();
        let piece = Piece::new(TetrominoType::O, 0);
        stats.record(&report(Action::Play, Ok(Outcome::Played(piece)), true));
        stats.record(&report(Action::Play, Ok(Outcome::Played(piece)), true));
        stats.record(&report(Action::SwapTriple, Ok(Outcome::TripleSwapped), false));
        assert_eq!(stats.played, 2);
        assert_eq!(stats.triple_swaps, 1);
        assert_eq!(stats.refills, 2);
        assert_eq!(stats.total_moves(), 3);
        assert!(stats.summary().contains("New pieces queued: 2"));
    }

    #[test]
    fn test_rejections_not_counted_as_moves() {
        let mut stats = SessionStats::new();
        stats.record(&report(Action::UseReserve, Err(PieceError::StackEmpty), false));
        stats.record_invalid_input();
        assert_eq!(stats.rejected, 1);
        assert_eq!(stats.invalid_inputs, 1);
        assert_eq!(stats.total_moves(), 0);
        assert!(stats.summary().contains("Rejected: 1"));
    }
}
