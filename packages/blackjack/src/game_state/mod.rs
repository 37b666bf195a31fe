use crate::card::{draw_card, draw_hand};
use crate::rules::{dealer_should_hit, player_needs_top_up};
use crate::{compare, Error, Hand, HandOutcome};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Discrete player actions. The wire encoding is 0 = stand, 1 = hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Stand,
    Hit,
}

impl Action {
    /// Size of the discrete action set.
    pub const COUNT: u32 = 2;

    pub fn index(&self) -> u32 {
        match self {
            Action::Stand => 0,
            Action::Hit => 1,
        }
    }
}

impl TryFrom<u32> for Action {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Action::Stand),
            1 => Ok(Action::Hit),
            other => Err(Error::InvalidAction(other)),
        }
    }
}

/// Current phase of the episode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    AwaitingAction,
    Done,
}

/// What the player gets to see: own total, the dealer's first card, and
/// whether an Ace is currently counted as 11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Observation {
    pub player_total: u8,
    pub dealer_upcard: u8,
    pub usable_ace: bool,
}

impl Observation {
    pub fn new(player_total: u8, dealer_upcard: u8, usable_ace: bool) -> Self {
        Self {
            player_total,
            dealer_upcard,
            usable_ace,
        }
    }

    pub fn as_tuple(&self) -> (u8, u8, bool) {
        (self.player_total, self.dealer_upcard, self.usable_ace)
    }
}

/// Result of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub observation: Observation,
    pub reward: i8,
    pub done: bool,
}

impl Transition {
    /// Settled outcome, only available on the terminal step.
    pub fn outcome(&self) -> Option<HandOutcome> {
        self.done.then(|| HandOutcome::from_reward(self.reward))
    }
}

/// One hand of single-player blackjack against a fixed dealer.
///
/// Both hands always hold at least two cards. The dealer's first card is the
/// only dealer information exposed through [`Episode::observation`].
#[derive(Debug, Clone, Serialize)]
pub struct Episode {
    player: Hand,
    dealer: Hand,
    phase: GamePhase,
}

impl Episode {
    /// Deal a new episode: dealer hand first, then the player hand, which is
    /// topped up until it reaches the minimum starting total.
    pub fn deal<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let dealer = draw_hand(rng);
        let mut player = draw_hand(rng);
        while player_needs_top_up(player.total()) {
            player.add_card(draw_card(rng));
        }
        log::debug!(
            "Dealt player [{}] ({}), dealer shows {}",
            player.to_display(),
            player.total(),
            dealer.cards()[0].to_display()
        );
        Self {
            player,
            dealer,
            phase: GamePhase::AwaitingAction,
        }
    }

    /// Start from fixed hands, skipping the deal. Each hand needs two cards.
    pub fn from_hands(player: Hand, dealer: Hand) -> Result<Self, Error> {
        for hand in [&player, &dealer] {
            if hand.len() < 2 {
                return Err(Error::IncompleteHand(hand.len()));
            }
        }
        Ok(Self {
            player,
            dealer,
            phase: GamePhase::AwaitingAction,
        })
    }

    /// Discard the current hands and deal again.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Observation {
        *self = Self::deal(rng);
        self.observation()
    }

    /// Apply a raw discrete action. Anything outside {0, 1} is rejected
    /// before the episode is touched.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        action: u32,
        rng: &mut R,
    ) -> Result<Transition, Error> {
        let action = Action::try_from(action)?;
        self.play(action, rng)
    }

    pub fn play<R: Rng + ?Sized>(
        &mut self,
        action: Action,
        rng: &mut R,
    ) -> Result<Transition, Error> {
        if self.phase == GamePhase::Done {
            return Err(Error::EpisodeFinished);
        }
        let (reward, done) = match action {
            Action::Hit => self.hit(rng),
            Action::Stand => self.stand(rng),
        };
        if done {
            self.phase = GamePhase::Done;
        }
        Ok(Transition {
            observation: self.observation(),
            reward,
            done,
        })
    }

    fn hit<R: Rng + ?Sized>(&mut self, rng: &mut R) -> (i8, bool) {
        let card = draw_card(rng);
        self.player.add_card(card);
        log::trace!("Player hits {} -> {}", card.to_display(), self.player.total());
        if self.player.is_bust() {
            log::debug!("Player busts with [{}]", self.player.to_display());
            (-1, true)
        } else {
            (0, false)
        }
    }

    fn stand<R: Rng + ?Sized>(&mut self, rng: &mut R) -> (i8, bool) {
        while dealer_should_hit(self.dealer.total()) {
            self.dealer.add_card(draw_card(rng));
        }
        let reward = compare(self.player.score(), self.dealer.score());
        log::debug!(
            "Player stands on {}, dealer finishes [{}] ({}), reward {}",
            self.player.total(),
            self.dealer.to_display(),
            self.dealer.total(),
            reward
        );
        (reward, true)
    }

    pub fn observation(&self) -> Observation {
        Observation {
            player_total: self.player.total(),
            dealer_upcard: self.dealer.cards()[0].rank(),
            usable_ace: self.player.has_usable_ace(),
        }
    }

    pub fn player(&self) -> &Hand {
        &self.player
    }

    pub fn dealer(&self) -> &Hand {
        &self.dealer
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == GamePhase::Done
    }
}
