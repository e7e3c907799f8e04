//! Data module - CSV loading and player queries

mod loader;
mod processor;
mod record;

pub use loader::{DataLoader, LoadOptions, SampleOptions};
pub use processor::{DataProcessor, LEADERBOARD_SIZE};
pub use record::{PlayerRecord, PlayerTable, SkillSet, SKILL_NAMES};

#[cfg(test)]
pub(crate) use record::player;
