use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvError {
    #[error("Action {action} is outside the action space Discrete({n})")]
    ActionOutOfSpace { action: u32, n: u32 },
    #[error(transparent)]
    Game(#[from] blackjack::Error),
}
