pub mod basic;
pub mod deck;
pub mod play;

pub use basic::{Card, Rank, Suit};
pub use play::PlayedSet;
