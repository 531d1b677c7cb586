use thiserror::Error;

/// Rejection reasons for game intents. Every rejection is synchronous and
/// leaves the round state untouched; the caller may simply resubmit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("wrong phase: {0}")]
    WrongPhase(String),

    #[error("not your turn")]
    NotYourTurn,

    #[error("invalid selection: {0}")]
    InvalidSelection(String),

    #[error("illegal play: {0}")]
    IllegalPlay(String),

    #[error("precondition failed: {0}")]
    PreconditionFailed(String),
}
