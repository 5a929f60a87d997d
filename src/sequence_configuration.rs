//! Configuration types for bounded collection

use serde::{Deserialize, Serialize};

use crate::error::{SequenceError, SequenceResult};

/// Buffer configuration for collecting a sequence into a `Vec`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BufferConfig {
    pub initial_capacity: usize,
    pub max_capacity: Option<usize>,
    pub growth_strategy: GrowthStrategy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GrowthStrategy {
    Linear(usize),
    Exponential(f64),
    Fixed,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 64,
            max_capacity: Some(1024 * 1024),
            growth_strategy: GrowthStrategy::Exponential(2.0),
        }
    }
}

impl BufferConfig {
    /// Create a configuration with the default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration without an upper bound on the number of elements
    pub fn unbounded() -> Self {
        Self {
            max_capacity: None,
            ..Self::default()
        }
    }

    /// Set the capacity reserved before the first element is pulled
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Set the maximum number of elements that may be stored
    pub fn max_capacity(mut self, capacity: usize) -> Self {
        self.max_capacity = Some(capacity);
        self
    }

    /// Set how the buffer grows once the reserved capacity is used up
    pub fn growth_strategy(mut self, strategy: GrowthStrategy) -> Self {
        self.growth_strategy = strategy;
        self
    }

    /// Check the configuration for values that can never be satisfied
    pub fn validate(&self) -> SequenceResult<()> {
        if let Some(max) = self.max_capacity {
            if self.initial_capacity > max {
                return Err(SequenceError::InvalidConfig(format!(
                    "initial capacity {} is larger than the maximum capacity {}",
                    self.initial_capacity, max
                )));
            }
        }
        match self.growth_strategy {
            GrowthStrategy::Linear(0) => Err(SequenceError::InvalidConfig(
                "linear growth step must be greater than zero".to_string(),
            )),
            GrowthStrategy::Exponential(factor) if !(factor > 1.0) || !factor.is_finite() => {
                Err(SequenceError::InvalidConfig(format!(
                    "exponential growth factor must be finite and greater than 1.0, got {}",
                    factor
                )))
            }
            _ => Ok(()),
        }
    }

    /// The largest number of elements a buffer may hold, if bounded.
    ///
    /// A `Fixed` strategy never grows past the initial capacity.
    pub fn limit(&self) -> Option<usize> {
        match (&self.growth_strategy, self.max_capacity) {
            (GrowthStrategy::Fixed, Some(max)) => Some(self.initial_capacity.min(max)),
            (GrowthStrategy::Fixed, None) => Some(self.initial_capacity),
            (_, max) => max,
        }
    }

    /// Capacity to grow to once a buffer of `current` capacity is full
    pub fn next_capacity(&self, current: usize) -> usize {
        let grown = match self.growth_strategy {
            GrowthStrategy::Linear(step) => current.saturating_add(step),
            GrowthStrategy::Exponential(factor) => {
                let scaled = (current.max(1) as f64 * factor).ceil();
                if scaled >= usize::MAX as f64 {
                    usize::MAX
                } else {
                    (scaled as usize).max(current.saturating_add(1))
                }
            }
            GrowthStrategy::Fixed => current.max(self.initial_capacity),
        };
        match self.limit() {
            Some(limit) => grown.min(limit),
            None => grown,
        }
    }
}
