//! Domain layer - Pure computational logic
//!
//! This module contains pure functions and algorithms without I/O dependencies.

pub mod bsearch;
pub mod factor;
pub mod modular;
pub mod prefix;
pub mod ranking;
pub mod sieve;
