//! Runtime settings taken from the environment.
//!
//! - `MATMUL_THREADS`: worker count, a positive integer (default: one per
//!   hardware thread)
//! - `MATMUL_LOG`: `off`, `error`, `warn`, `info`, `debug` or `trace`
//!   (default: `warn`)

use std::env;
use std::num::NonZeroUsize;

use log::LevelFilter;

use crate::error::{Error, Result};
use crate::threaded::ParallelMultiplier;

pub const THREADS_VAR: &str = "MATMUL_THREADS";
pub const LOG_VAR: &str = "MATMUL_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub threads: Option<NonZeroUsize>,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threads: None,
            log_level: LevelFilter::Warn,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(THREADS_VAR) {
            config.threads = Some(value.trim().parse().map_err(|_| Error::Config {
                key: THREADS_VAR,
                value: value.clone(),
            })?);
        }

        if let Some(value) = lookup(LOG_VAR) {
            config.log_level = value.trim().parse().map_err(|_| Error::Config {
                key: LOG_VAR,
                value: value.clone(),
            })?;
        }

        Ok(config)
    }

    pub fn multiplier(&self) -> ParallelMultiplier {
        match self.threads {
            Some(threads) => ParallelMultiplier::with_threads(threads),
            None => ParallelMultiplier::new(),
        }
    }
}
