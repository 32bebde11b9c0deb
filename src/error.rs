//! Precondition failures reported by the containers and game operations.
//!
//! None of these are fatal: the main loop prints the message and asks for the
//! next command.

/// Errors that can occur while moving pieces around.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PieceError {
    #[error("the queue is empty")]
    QueueEmpty,

    #[error("the queue is full")]
    QueueFull,

    #[error("no piece in reserve")]
    StackEmpty,

    #[error("the reserve is full")]
    StackFull,

    #[error(
        "triple swap needs at least 3 pieces in both the queue and the reserve \
         (queue has {queue}, reserve has {stack})"
    )]
    NotEnoughForTripleSwap { queue: usize, stack: usize },

    #[error("invalid option {0:?}, try again")]
    InvalidMenuChoice(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triple_swap_message_reports_counts() {
        let err = PieceError::NotEnoughForTripleSwap { queue: 5, stack: 2 };
        let msg = err.to_string();
        assert!(msg.contains("queue has 5"));
        assert!(msg.contains("reserve has 2"));
    }

    #[test]
    fn test_invalid_choice_quotes_input() {
        let err = PieceError::InvalidMenuChoice("9".to_string());
        assert_eq!(err.to_string(), "invalid option \"9\", try again");
    }
}
