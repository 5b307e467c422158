//! Application layer: services and use cases
//!
//! This layer orchestrates domain logic and reads its limits from `Settings`.

pub mod error;
pub mod keys;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use keys::{key_rng, random_keys};
