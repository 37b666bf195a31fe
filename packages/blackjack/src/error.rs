use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid action: {0} (expected 0 = stand or 1 = hit)")]
    InvalidAction(u32),
    #[error("Episode is finished, deal a new one before stepping")]
    EpisodeFinished,
    #[error("Hand has {0} cards, at least two are required")]
    IncompleteHand(usize),
    #[error("Invalid card rank: {0}")]
    InvalidRank(u8),
}
