use blackjack::Observation;
use rand::Rng;

/// A set of values an environment declares for its actions or observations.
pub trait Space {
    type Element;

    fn contains(&self, value: &Self::Element) -> bool;

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Element;
}

/// The integers `start..start + n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Discrete {
    pub n: u32,
    pub start: u32,
}

impl Discrete {
    pub fn new(n: u32) -> Self {
        Self { n, start: 0 }
    }

    pub fn with_start(n: u32, start: u32) -> Self {
        Self { n, start }
    }
}

impl Space for Discrete {
    type Element = u32;

    fn contains(&self, value: &u32) -> bool {
        *value >= self.start && *value - self.start < self.n
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        self.start + rng.gen_range(0..self.n)
    }
}

/// Player total in 0..=31, dealer upcard in 1..=10, usable ace flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlackjackObservationSpace {
    pub player_total: Discrete,
    pub dealer_upcard: Discrete,
    pub usable_ace: Discrete,
}

impl Default for BlackjackObservationSpace {
    fn default() -> Self {
        Self {
            player_total: Discrete::new(32),
            dealer_upcard: Discrete::with_start(10, 1),
            usable_ace: Discrete::new(2),
        }
    }
}

impl Space for BlackjackObservationSpace {
    type Element = Observation;

    fn contains(&self, value: &Observation) -> bool {
        self.player_total.contains(&u32::from(value.player_total))
            && self.dealer_upcard.contains(&u32::from(value.dealer_upcard))
            && self.usable_ace.contains(&u32::from(value.usable_ace))
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Observation {
        // Components are bounded well below u8::MAX by construction.
        Observation::new(
            self.player_total.sample(rng) as u8,
            self.dealer_upcard.sample(rng) as u8,
            self.usable_ace.sample(rng) == 1,
        )
    }
}
