//! simseed — explicit, reproducible random sequence generation.
//!
//! Provides:
//! - Caller-owned seeded generators for reproducible uniform sampling
//! - Entropy-seeded generators for non-reproducible streams
//! - A mutex-guarded shared handle for serialized multi-caller draws
//! - Statistical diagnostics (chi-square uniformity, autocorrelation)

pub mod diagnostics;
pub mod error;
pub mod generator;
pub mod shared;

pub use diagnostics::{autocorrelation, chi_square_uniformity, integrated_autocorr_time};
pub use error::{Result, SimseedError};
pub use generator::{MAX_SEED, SequenceGenerator};
pub use shared::SharedGenerator;
