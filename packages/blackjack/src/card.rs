use crate::{Error, Hand};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A card rank with face cards collapsed into `Ten`. Suits play no part in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Card {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
}

/// One suit's worth of ranks: Ace through Nine once, and Ten, Jack, Queen, King as four tens.
/// Every draw samples this with replacement.
pub const DECK: [Card; 13] = [
    Card::Ace,
    Card::Two,
    Card::Three,
    Card::Four,
    Card::Five,
    Card::Six,
    Card::Seven,
    Card::Eight,
    Card::Nine,
    Card::Ten,
    Card::Ten,
    Card::Ten,
    Card::Ten,
];

impl Card {
    pub fn to_display(&self) -> String {
        match self {
            Card::Ace => "A".to_string(),
            other => other.rank().to_string(),
        }
    }

    /// Rank in 1..=10, with the Ace counted as 1.
    pub fn rank(&self) -> u8 {
        match self {
            Card::Ace => 1,
            Card::Two => 2,
            Card::Three => 3,
            Card::Four => 4,
            Card::Five => 5,
            Card::Six => 6,
            Card::Seven => 7,
            Card::Eight => 8,
            Card::Nine => 9,
            Card::Ten => 10,
        }
    }

    pub fn is_ace(&self) -> bool {
        matches!(self, Card::Ace)
    }

    pub fn from_rank(rank: u8) -> Result<Self, Error> {
        match rank {
            1 => Ok(Card::Ace),
            2 => Ok(Card::Two),
            3 => Ok(Card::Three),
            4 => Ok(Card::Four),
            5 => Ok(Card::Five),
            6 => Ok(Card::Six),
            7 => Ok(Card::Seven),
            8 => Ok(Card::Eight),
            9 => Ok(Card::Nine),
            10 => Ok(Card::Ten),
            _ => Err(Error::InvalidRank(rank)),
        }
    }
}

impl TryFrom<u8> for Card {
    type Error = Error;

    fn try_from(rank: u8) -> Result<Self, Self::Error> {
        Card::from_rank(rank)
    }
}

/// Draw a single card uniformly from [`DECK`].
pub fn draw_card<R: Rng + ?Sized>(rng: &mut R) -> Card {
    let card = DECK[rng.gen_range(0..DECK.len())];
    log::trace!("Drew {}", card.to_display());
    card
}

/// Draw a fresh two-card hand.
pub fn draw_hand<R: Rng + ?Sized>(rng: &mut R) -> Hand {
    let first = draw_card(rng);
    let second = draw_card(rng);
    Hand::from_cards(vec![first, second])
}
