use std::collections::HashMap;

use blackjack::{Action, Episode, Observation};
use rand_chacha::ChaCha8Rng;

use crate::error::EnvError;
use crate::seeding::seeded_rng;
use crate::spaces::{BlackjackObservationSpace, Discrete, Space};

/// Auxiliary step data. Blackjack never fills it.
pub type Info = HashMap<String, String>;

#[derive(Debug, Clone, PartialEq)]
pub struct Step<O> {
    pub observation: O,
    pub reward: f32,
    pub done: bool,
    pub info: Info,
}

/// Episodic environment interface: declared spaces, seeding, reset and step.
pub trait Env {
    type Observation;
    type Action;
    type ActionSpace: Space<Element = Self::Action>;
    type ObservationSpace: Space<Element = Self::Observation>;

    fn action_space(&self) -> &Self::ActionSpace;

    fn observation_space(&self) -> &Self::ObservationSpace;

    /// Reseed the generator and return the seed in effect.
    fn seed(&mut self, seed: Option<u64>) -> u64;

    fn reset(&mut self) -> Self::Observation;

    fn step(&mut self, action: Self::Action) -> Result<Step<Self::Observation>, EnvError>;
}

/// Single-player blackjack behind the [`Env`] interface.
///
/// The shell owns the generator and the current [`Episode`]; rules live in the
/// `blackjack` crate. A hand is already dealt when the environment is built.
#[derive(Debug, Clone)]
pub struct BlackjackEnv {
    rng: ChaCha8Rng,
    seed: u64,
    episode: Episode,
    action_space: Discrete,
    observation_space: BlackjackObservationSpace,
}

impl BlackjackEnv {
    /// Seeded from entropy.
    pub fn new() -> Self {
        Self::build(None)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::build(Some(seed))
    }

    fn build(seed: Option<u64>) -> Self {
        let (mut rng, seed) = seeded_rng(seed);
        let episode = Episode::deal(&mut rng);
        log::debug!("Blackjack environment seeded with {seed}");
        Self {
            rng,
            seed,
            episode,
            action_space: Discrete::new(Action::COUNT),
            observation_space: BlackjackObservationSpace::default(),
        }
    }

    pub fn current_seed(&self) -> u64 {
        self.seed
    }

    pub fn episode(&self) -> &Episode {
        &self.episode
    }

    pub fn observation(&self) -> Observation {
        self.episode.observation()
    }
}

impl Default for BlackjackEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl Env for BlackjackEnv {
    type Observation = Observation;
    type Action = u32;
    type ActionSpace = Discrete;
    type ObservationSpace = BlackjackObservationSpace;

    fn action_space(&self) -> &Discrete {
        &self.action_space
    }

    fn observation_space(&self) -> &BlackjackObservationSpace {
        &self.observation_space
    }

    fn seed(&mut self, seed: Option<u64>) -> u64 {
        let (rng, seed) = seeded_rng(seed);
        self.rng = rng;
        self.seed = seed;
        log::debug!("Blackjack environment reseeded with {seed}");
        seed
    }

    fn reset(&mut self) -> Observation {
        self.episode.reset(&mut self.rng)
    }

    fn step(&mut self, action: u32) -> Result<Step<Observation>, EnvError> {
        if !self.action_space.contains(&action) {
            log::warn!("Rejected action {action}");
            return Err(EnvError::ActionOutOfSpace {
                action,
                n: self.action_space.n,
            });
        }
        let transition = self.episode.step(action, &mut self.rng)?;
        Ok(Step {
            observation: transition.observation,
            reward: f32::from(transition.reward),
            done: transition.done,
            info: Info::new(),
        })
    }
}
