//! Domain - Pure Widget State and Configuration
//!
//! These types don't depend on GPUI. Each widget's state is a small `Copy`
//! record and every trigger maps to a pure transition on it.

pub mod config;
pub mod counter;
pub mod toggle;
