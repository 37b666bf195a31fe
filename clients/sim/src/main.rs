use blackjack::strategy::{basic_move, threshold_move};
use blackjack_gym::{
    run_episode, run_episodes, Action, BlackjackEnv, Discrete, Env, EpisodeStats, Observation,
    Space,
};
use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

type BoxErr = Box<dyn std::error::Error + Send + Sync>;

#[derive(Parser)]
#[command(
    name = "blackjack-sim",
    about = "Play single-player blackjack episodes with a fixed policy"
)]
struct Cli {
    /// Environment seed; drawn from entropy when omitted
    #[arg(long, env = "SIM_SEED")]
    seed: Option<u64>,

    /// Policy choosing hit or stand
    #[arg(long, env = "SIM_POLICY", value_enum, default_value_t = PolicyKind::Basic)]
    policy: PolicyKind,

    /// Total at which the threshold policy stands
    #[arg(long, env = "SIM_STICK_AT", default_value = "20")]
    stick_at: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run many episodes and print aggregate results
    Simulate {
        /// Number of episodes
        #[arg(long, env = "SIM_EPISODES", default_value = "100000")]
        episodes: u64,

        /// Print the summary as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Play a single episode, logging every step
    Episode,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
enum PolicyKind {
    /// Hit below --stick-at
    Threshold,
    /// Hit/stand basic strategy
    Basic,
    /// Uniform over the action space
    Random,
    /// Never draw
    Stand,
}

#[derive(Serialize)]
struct Summary {
    seed: u64,
    policy: PolicyKind,
    #[serde(flatten)]
    stats: EpisodeStats,
    mean_reward: f64,
    mean_length: f64,
    win_rate: f64,
}

struct Policy {
    kind: PolicyKind,
    stick_at: u8,
    rng: ChaCha8Rng,
}

impl Policy {
    fn new(kind: PolicyKind, stick_at: u8, seed: u64) -> Self {
        Self {
            kind,
            stick_at,
            rng: ChaCha8Rng::seed_from_u64(seed.wrapping_add(1)),
        }
    }

    fn act(&mut self, action_space: &Discrete, observation: &Observation) -> Action {
        match self.kind {
            PolicyKind::Threshold => threshold_move(observation, self.stick_at),
            PolicyKind::Basic => basic_move(observation),
            PolicyKind::Random => {
                Action::try_from(action_space.sample(&mut self.rng)).unwrap_or(Action::Stand)
            }
            PolicyKind::Stand => Action::Stand,
        }
    }
}

fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut env = match cli.seed {
        Some(seed) => BlackjackEnv::with_seed(seed),
        None => BlackjackEnv::new(),
    };
    let seed = env.current_seed();
    log::info!("Environment seed: {seed}");

    let mut policy = Policy::new(cli.policy, cli.stick_at, seed);

    let result = match cli.command {
        Command::Simulate { episodes, json } => cmd_simulate(&mut env, &mut policy, episodes, json),
        Command::Episode => cmd_episode(&mut env, &mut policy),
    };

    if let Err(e) = result {
        log::error!("Simulation failed: {e}");
        std::process::exit(1);
    }
}

fn cmd_simulate(
    env: &mut BlackjackEnv,
    policy: &mut Policy,
    episodes: u64,
    json: bool,
) -> Result<(), BoxErr> {
    log::info!("Running {episodes} episodes with the {:?} policy", policy.kind);
    let space = *env.action_space();
    let stats = run_episodes(env, episodes, |obs| policy.act(&space, obs))?;

    let summary = Summary {
        seed: env.current_seed(),
        policy: policy.kind,
        mean_reward: stats.mean_reward(),
        mean_length: stats.mean_length(),
        win_rate: stats.win_rate(),
        stats,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Episodes:     {}", summary.stats.episodes);
    println!(
        "Wins/Losses/Pushes: {}/{}/{}",
        summary.stats.wins, summary.stats.losses, summary.stats.pushes
    );
    println!("Win rate:     {:.4}", summary.win_rate);
    println!("Mean reward:  {:+.4}", summary.mean_reward);
    println!("Mean length:  {:.3}", summary.mean_length);
    Ok(())
}

fn cmd_episode(env: &mut BlackjackEnv, policy: &mut Policy) -> Result<(), BoxErr> {
    let space = *env.action_space();
    let record = run_episode(env, |obs| {
        let action = policy.act(&space, obs);
        log::info!(
            "Player {} (usable ace: {}), dealer shows {} -> {:?}",
            obs.player_total,
            obs.usable_ace,
            obs.dealer_upcard,
            action
        );
        action
    })?;

    let episode = env.episode();
    log::info!(
        "Player [{}] ({}), dealer [{}] ({})",
        episode.player().to_display(),
        episode.player().total(),
        episode.dealer().to_display(),
        episode.dealer().total()
    );
    println!(
        "{:?} after {} step(s), reward {:+}",
        record.outcome(),
        record.steps,
        record.reward
    );
    Ok(())
}
