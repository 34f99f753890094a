//! MineZero core library
//!
//! Coal-mine carbon accounting: converts activity quantities into CO₂,
//! checks intensity against targets and industry benchmarks, values carbon
//! credits and simulates offsets. Every calculation is a pure function over
//! value objects.

// Enforce panic-free code in production
#![cfg_attr(not(test), warn(clippy::unwrap_used))]
#![cfg_attr(not(test), warn(clippy::expect_used))]
#![cfg_attr(not(test), warn(clippy::panic))]
// Test-specific allows
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod environmental;
pub mod error;

pub use environmental::{
    calculate_emissions, calculate_offsets, generate_recommendations, EmissionInput,
    EmissionResult, MineType, OffsetMode,
};
pub use error::{CalculatorError, CalculatorResult};
