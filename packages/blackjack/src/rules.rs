//! Fixed table rules. The deck and dealer policy are not configurable.

/// Highest total that is not bust.
pub const BLACKJACK: u8 = 21;

/// Extra value an Ace is worth when counted as 11 instead of 1.
pub const ACE_BONUS: u8 = 10;

/// The dealer draws while below this total and stands on anything at or above it,
/// soft 17 included.
pub const DEALER_STANDS_ON: u8 = 17;

/// After the deal the player hand is topped up until it reaches this total.
pub const PLAYER_MIN_START: u8 = 12;

/// Dealer drawing rule: hit below [`DEALER_STANDS_ON`], soft or hard.
pub fn dealer_should_hit(total: u8) -> bool {
    total < DEALER_STANDS_ON
}

/// Deal top-up rule for the player hand.
pub fn player_needs_top_up(total: u8) -> bool {
    total < PLAYER_MIN_START
}
