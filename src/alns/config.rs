//! Search configuration.

use serde::{Deserialize, Serialize};

use crate::error::RoutingError;
use crate::evaluation::DEFAULT_LATE_PENALTY;

/// Parameters of the destroy/repair annealing loop.
///
/// Deserializes from partial documents; missing fields take their defaults.
///
/// # Examples
///
/// ```
/// use u_dispatch::alns::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_iterations(500)
///     .with_seed(42);
/// assert_eq!(config.iterations, 500);
/// assert_eq!(config.cooling_rate, 0.995);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Fixed number of destroy/repair iterations.
    pub iterations: usize,
    /// Starting annealing temperature.
    pub initial_temperature: f64,
    /// Multiplier applied to the temperature after every iteration.
    pub cooling_rate: f64,
    /// Fraction of routed requests removed per iteration.
    pub destroy_fraction: f64,
    /// Distance penalty per late stop.
    pub late_penalty: f64,
    /// RNG seed; `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            iterations: 200,
            initial_temperature: 1000.0,
            cooling_rate: 0.995,
            destroy_fraction: 0.2,
            late_penalty: DEFAULT_LATE_PENALTY,
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Sets the iteration count.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the starting temperature.
    pub fn with_initial_temperature(mut self, temperature: f64) -> Self {
        self.initial_temperature = temperature;
        self
    }

    /// Sets the cooling rate.
    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    /// Sets the removal fraction.
    pub fn with_destroy_fraction(mut self, fraction: f64) -> Self {
        self.destroy_fraction = fraction;
        self
    }

    /// Sets the lateness penalty.
    pub fn with_late_penalty(mut self, penalty: f64) -> Self {
        self.late_penalty = penalty;
        self
    }

    /// Fixes the RNG seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks that every parameter is in range.
    pub fn validate(&self) -> Result<(), RoutingError> {
        if !(self.initial_temperature.is_finite() && self.initial_temperature > 0.0) {
            return Err(RoutingError::InvalidConfig(format!(
                "initial_temperature must be positive, got {}",
                self.initial_temperature
            )));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate <= 1.0) {
            return Err(RoutingError::InvalidConfig(format!(
                "cooling_rate must be in (0, 1], got {}",
                self.cooling_rate
            )));
        }
        if !(self.destroy_fraction > 0.0 && self.destroy_fraction <= 1.0) {
            return Err(RoutingError::InvalidConfig(format!(
                "destroy_fraction must be in (0, 1], got {}",
                self.destroy_fraction
            )));
        }
        if !(self.late_penalty.is_finite() && self.late_penalty >= 0.0) {
            return Err(RoutingError::InvalidConfig(format!(
                "late_penalty must be non-negative, got {}",
                self.late_penalty
            )));
        }
        Ok(())
    }
}
