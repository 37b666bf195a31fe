use crate::rules::{ACE_BONUS, BLACKJACK};
use crate::Card;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandOutcome {
    Win,
    Loss,
    Push,
}

impl HandOutcome {
    pub fn from_reward(reward: i8) -> Self {
        match reward.cmp(&0) {
            Ordering::Greater => HandOutcome::Win,
            Ordering::Less => HandOutcome::Loss,
            Ordering::Equal => HandOutcome::Push,
        }
    }

    pub fn reward(&self) -> i8 {
        match self {
            HandOutcome::Win => 1,
            HandOutcome::Loss => -1,
            HandOutcome::Push => 0,
        }
    }
}

/// Sum of the ranks with every Ace counted as 1.
pub fn raw_sum(cards: &[Card]) -> u8 {
    cards
        .iter()
        .fold(0u8, |total, card| total.saturating_add(card.rank()))
}

/// Check if the hand holds an Ace that can count as 11 without busting.
/// Only one Ace is ever promoted.
pub fn has_usable_ace(cards: &[Card]) -> bool {
    cards.iter().any(Card::is_ace) && raw_sum(cards).saturating_add(ACE_BONUS) <= BLACKJACK
}

/// Calculate the value of a hand, promoting one Ace when it is usable
pub fn hand_total(cards: &[Card]) -> u8 {
    if has_usable_ace(cards) {
        raw_sum(cards) + ACE_BONUS
    } else {
        raw_sum(cards)
    }
}

pub fn is_bust(cards: &[Card]) -> bool {
    hand_total(cards) > BLACKJACK
}

/// Score used at settlement: 0 for a bust hand, the total otherwise.
pub fn terminal_score(cards: &[Card]) -> u8 {
    if is_bust(cards) {
        0
    } else {
        hand_total(cards)
    }
}

/// +1 if `a` beats `b`, -1 if it loses, 0 on a tie.
pub fn compare(a: u8, b: u8) -> i8 {
    match a.cmp(&b) {
        Ordering::Greater => 1,
        Ordering::Less => -1,
        Ordering::Equal => 0,
    }
}

/// An append-only sequence of cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn first(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn raw_sum(&self) -> u8 {
        raw_sum(&self.cards)
    }

    pub fn total(&self) -> u8 {
        hand_total(&self.cards)
    }

    pub fn has_usable_ace(&self) -> bool {
        has_usable_ace(&self.cards)
    }

    pub fn is_bust(&self) -> bool {
        is_bust(&self.cards)
    }

    pub fn score(&self) -> u8 {
        terminal_score(&self.cards)
    }

    pub fn to_display(&self) -> String {
        self.cards
            .iter()
            .map(Card::to_display)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::DECK;

    fn cards(ranks: &[u8]) -> Vec<Card> {
        ranks.iter().map(|&r| Card::from_rank(r).unwrap()).collect()
    }

    #[test]
    fn test_raw_sum_counts_aces_as_one() {
        assert_eq!(raw_sum(&cards(&[1, 1, 9])), 11);
        assert_eq!(raw_sum(&cards(&[10, 10])), 20);
        assert_eq!(raw_sum(&[]), 0);
    }

    #[test]
    fn test_hand_total_simple() {
        assert_eq!(hand_total(&cards(&[2, 3])), 5);
        assert_eq!(hand_total(&cards(&[10, 10])), 20);
    }

    #[test]
    fn test_hand_total_soft_ace() {
        assert_eq!(hand_total(&cards(&[1, 6])), 17);
        assert!(has_usable_ace(&cards(&[1, 6])));
    }

    #[test]
    fn test_hand_total_hard_ace() {
        assert_eq!(hand_total(&cards(&[1, 6, 9])), 16);
        assert!(!has_usable_ace(&cards(&[1, 6, 9])));
    }

    #[test]
    fn test_hand_total_multiple_aces() {
        // One ace as 11, the other as 1
        assert_eq!(hand_total(&cards(&[1, 1, 9])), 21);
        // Promoting both would give 32; only one is ever promoted
        assert_eq!(hand_total(&cards(&[1, 1])), 12);
        assert_eq!(hand_total(&cards(&[1, 1, 1, 1])), 14);
    }

    #[test]
    fn test_natural_twenty_one() {
        let hand = cards(&[1, 10]);
        assert!(has_usable_ace(&hand));
        assert_eq!(hand_total(&hand), 21);
        assert!(!is_bust(&hand));
    }

    #[test]
    fn test_is_bust() {
        assert!(is_bust(&cards(&[10, 10, 5])));
        assert!(!is_bust(&cards(&[10, 10, 1])));
        assert!(is_bust(&cards(&[1, 10, 10, 10])));
    }

    #[test]
    fn test_terminal_score() {
        assert_eq!(terminal_score(&cards(&[10, 10, 5])), 0);
        assert_eq!(terminal_score(&cards(&[10, 9])), 19);
        assert_eq!(terminal_score(&cards(&[1, 5, 5])), 21);
    }

    #[test]
    fn test_compare() {
        assert_eq!(compare(20, 18), 1);
        assert_eq!(compare(0, 17), -1);
        assert_eq!(compare(20, 20), 0);
    }

    #[test]
    fn test_compare_is_antisymmetric() {
        for a in 0..=21u8 {
            for b in 0..=21u8 {
                assert_eq!(compare(a, b), -compare(b, a));
            }
        }
    }

    #[test]
    fn test_evaluator_properties_over_three_card_hands() {
        for a in DECK {
            for b in DECK {
                for c in DECK {
                    let hand = [a, b, c];
                    if has_usable_ace(&hand) {
                        assert!(hand.iter().any(Card::is_ace));
                    }
                    if !hand.iter().any(Card::is_ace) {
                        assert_eq!(hand_total(&hand), raw_sum(&hand));
                    }
                    let score = terminal_score(&hand);
                    assert!(score <= 21);
                    assert_eq!(score == 0, is_bust(&hand));
                }
            }
        }
    }

    #[test]
    fn test_hand_outcome_rewards() {
        assert_eq!(HandOutcome::from_reward(1), HandOutcome::Win);
        assert_eq!(HandOutcome::from_reward(-1), HandOutcome::Loss);
        assert_eq!(HandOutcome::from_reward(0), HandOutcome::Push);
        assert_eq!(HandOutcome::Loss.reward(), -1);
    }

    #[test]
    fn test_hand_struct_value() {
        let mut hand = Hand::new();
        hand.add_card(Card::Ten);
        hand.add_card(Card::Seven);
        assert_eq!(hand.total(), 17);
        assert_eq!(hand.score(), 17);
        assert_eq!(hand.first(), Some(Card::Ten));
        assert_eq!(hand.to_display(), "10 7");
    }

    #[test]
    fn test_hand_struct_appends_in_order() {
        let mut hand = Hand::from_cards(cards(&[1, 4]));
        assert!(hand.has_usable_ace());
        hand.add_card(Card::Nine);
        assert_eq!(hand.cards(), cards(&[1, 4, 9]).as_slice());
        assert!(!hand.has_usable_ace());
        assert_eq!(hand.total(), 14);
    }
}
