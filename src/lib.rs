//! Monte Carlo estimation of final league positions.
//!
//! Given per-fixture outcome probabilities (home win / draw / away win),
//! the pipeline draws many synthetic season realizations, totals points
//! per team, ranks every trial's table with randomized tie-break, and
//! reports how often each team finishes in each position.

pub mod aggregate;
pub mod config;
pub mod dataset;
pub mod distribution;
pub mod error;
pub mod export;
pub mod fixtures;
pub mod matrix;
pub mod pipeline;
pub mod points;
pub mod rank;
pub mod sampler;
