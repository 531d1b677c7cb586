// Public API
pub use cards::{Card, PlayedSet, Rank, Suit};
pub use error::GameError;
pub use repository::GameRepository;
pub use round::{ExchangeObligation, PhaseState, Round, Seat, StandingPlay};
pub use service::GameService;
pub use views::{
    ExchangeStatusView, GameStateView, RoundSummaryView, SeatView, StandingPlayView,
};

// Internal modules
pub mod cards;
mod error;
mod exchange;
mod lifecycle;
mod repository;
mod round;
mod service;
mod views;
