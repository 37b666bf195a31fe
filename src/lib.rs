//! Episodic reinforcement-learning shell around the `blackjack` rules engine.

pub mod env;
pub mod error;
pub mod rollout;
pub mod seeding;
pub mod spaces;

pub use crate::env::{BlackjackEnv, Env, Info, Step};
pub use crate::error::EnvError;
pub use crate::rollout::{run_episode, run_episodes, EpisodeRecord, EpisodeStats};
pub use crate::spaces::{BlackjackObservationSpace, Discrete, Space};
pub use blackjack::{Action, Observation};
