//! Runtime game configuration

use std::env;

/// Environment variable holding the randomizer seed
pub const SEED_ENV: &str = "MARATHON_SEED";

/// Per-session configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameConfig {
    /// Fixed seed for a reproducible piece sequence; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Read configuration from the environment
    ///
    /// An absent or unparsable `MARATHON_SEED` leaves the game unseeded.
    pub fn from_env() -> Self {
        Self {
            seed: env::var(SEED_ENV).ok().and_then(|v| parse_seed(&v)),
        }
    }
}

fn parse_seed(value: &str) -> Option<u64> {
    value.trim().parse().ok()
}
