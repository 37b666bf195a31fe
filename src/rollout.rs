use blackjack::{Action, HandOutcome, Observation};
use serde::{Deserialize, Serialize};

use crate::env::{BlackjackEnv, Env};
use crate::error::EnvError;

/// How a finished episode ended.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpisodeRecord {
    pub initial: Observation,
    pub terminal: Observation,
    pub reward: f32,
    pub steps: usize,
}

impl EpisodeRecord {
    pub fn outcome(&self) -> HandOutcome {
        HandOutcome::from_reward(self.reward as i8)
    }
}

/// Reset `env` and play it to the end, asking `policy` for every action.
pub fn run_episode<P>(env: &mut BlackjackEnv, mut policy: P) -> Result<EpisodeRecord, EnvError>
where
    P: FnMut(&Observation) -> Action,
{
    let initial = env.reset();
    let mut observation = initial;
    let mut steps = 0;
    loop {
        let action = policy(&observation);
        let step = env.step(action.index())?;
        steps += 1;
        observation = step.observation;
        if step.done {
            return Ok(EpisodeRecord {
                initial,
                terminal: observation,
                reward: step.reward,
                steps,
            });
        }
    }
}

/// Running totals over many episodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EpisodeStats {
    pub episodes: u64,
    pub wins: u64,
    pub losses: u64,
    pub pushes: u64,
    pub total_reward: f64,
    pub total_steps: u64,
}

impl EpisodeStats {
    pub fn record(&mut self, record: &EpisodeRecord) {
        self.episodes += 1;
        match record.outcome() {
            HandOutcome::Win => self.wins += 1,
            HandOutcome::Loss => self.losses += 1,
            HandOutcome::Push => self.pushes += 1,
        }
        self.total_reward += f64::from(record.reward);
        self.total_steps += record.steps as u64;
    }

    pub fn mean_reward(&self) -> f64 {
        if self.episodes == 0 {
            return 0.0;
        }
        self.total_reward / self.episodes as f64
    }

    pub fn mean_length(&self) -> f64 {
        if self.episodes == 0 {
            return 0.0;
        }
        self.total_steps as f64 / self.episodes as f64
    }

    pub fn win_rate(&self) -> f64 {
        if self.episodes == 0 {
            return 0.0;
        }
        self.wins as f64 / self.episodes as f64
    }
}

/// Play `episodes` episodes with the same policy and aggregate the results.
pub fn run_episodes<P>(
    env: &mut BlackjackEnv,
    episodes: u64,
    mut policy: P,
) -> Result<EpisodeStats, EnvError>
where
    P: FnMut(&Observation) -> Action,
{
    let mut stats = EpisodeStats::default();
    for _ in 0..episodes {
        let record = run_episode(env, &mut policy)?;
        stats.record(&record);
    }
    Ok(stats)
}
