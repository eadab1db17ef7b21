//! Counter - Bounded Step Counter
//!
//! The count moves by a fixed step inside `0..=max`. A move that would leave
//! the range is rejected whole rather than snapped to the bound, so the count
//! can stall short of `max` when `step` does not divide it.

use serde::{Deserialize, Serialize};
use snafu::ensure;

use crate::error::{Error, InvalidSnafu, Result};

/// Default amount adjusted per trigger
pub const DEFAULT_STEP: u32 = 5;
/// Default upper bound on the count
pub const DEFAULT_MAX: u32 = 100;

/// Step counter configuration, fixed for the lifetime of a widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawStepConfig")]
pub struct StepConfig {
    step: u32,
    max: u32,
}

impl StepConfig {
    /// Create a validated configuration
    ///
    /// `step` must be positive; `max` may be any non-negative value.
    pub fn new(step: u32, max: u32) -> Result<Self> {
        ensure!(
            step > 0,
            InvalidSnafu {
                message: "counter step must be a positive integer",
            }
        );
        Ok(Self { step, max })
    }

    /// Amount adjusted per trigger
    pub fn step(&self) -> u32 {
        self.step
    }

    /// Inclusive upper bound
    pub fn max(&self) -> u32 {
        self.max
    }
}

impl Default for StepConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            max: DEFAULT_MAX,
        }
    }
}

/// Unvalidated on-disk shape, defaults filled per field
#[derive(Deserialize)]
#[serde(default)]
struct RawStepConfig {
    step: u32,
    max: u32,
}

impl Default for RawStepConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            max: DEFAULT_MAX,
        }
    }
}

impl TryFrom<RawStepConfig> for StepConfig {
    type Error = Error;

    fn try_from(raw: RawStepConfig) -> Result<Self> {
        StepConfig::new(raw.step, raw.max)
    }
}

/// Current value of a step counter
///
/// Only reachable through `increment`/`decrement` from zero, so
/// `0 <= count <= max` always holds for the config it was driven with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CounterState {
    count: u32,
}

impl CounterState {
    /// Current count
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Text shown in the counter's display well
    pub fn display(&self) -> String {
        self.count.to_string()
    }

    /// Add one step if the result stays within `max`
    #[must_use]
    pub fn increment(self, config: &StepConfig) -> Self {
        match self.count.checked_add(config.step) {
            Some(candidate) if candidate <= config.max => self.commit(candidate),
            _ => self.reject("increment", config),
        }
    }

    /// Subtract one step if the result stays at or above zero
    #[must_use]
    pub fn decrement(self, config: &StepConfig) -> Self {
        match self.count.checked_sub(config.step) {
            Some(candidate) => self.commit(candidate),
            None => self.reject("decrement", config),
        }
    }

    fn commit(self, candidate: u32) -> Self {
        tracing::trace!(from = self.count, to = candidate, "counter moved");
        Self { count: candidate }
    }

    fn reject(self, op: &'static str, config: &StepConfig) -> Self {
        tracing::debug!(
            op,
            count = self.count,
            step = config.step,
            max = config.max,
            "counter move rejected at bound"
        );
        self
    }
}
