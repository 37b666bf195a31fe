mod card;
mod error;
mod game_state;
mod hand;
pub mod rules;
pub mod strategy;

pub use card::{draw_card, draw_hand, Card, DECK};
pub use error::Error;
pub use game_state::{Action, Episode, GamePhase, Observation, Transition};
pub use hand::{
    compare, hand_total, has_usable_ace, is_bust, raw_sum, terminal_score, Hand, HandOutcome,
};
