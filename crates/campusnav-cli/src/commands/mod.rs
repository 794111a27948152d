//! Subcommand handlers.

pub mod nearest;
pub mod plan;
pub mod route;

use clap::ValueEnum;

use campusnav_lib::SearchStrategy;

/// Search strategy selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StrategyArg {
    /// Linear scan over unvisited nodes.
    #[default]
    Linear,
    /// Binary heap frontier.
    Heap,
}

impl From<StrategyArg> for SearchStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Linear => SearchStrategy::Linear,
            StrategyArg::Heap => SearchStrategy::Heap,
        }
    }
}
