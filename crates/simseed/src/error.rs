//! Error types for simseed.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimseedError {
    #[error("invalid seed {value}: outside the supported range 0..=4294967295")]
    InvalidSeed { value: u64 },

    #[error("invalid draw count: must be at least 1")]
    InvalidCount,
}

pub type Result<T> = std::result::Result<T, SimseedError>;
