//! Engine configuration.

/// Options controlling how gestures are clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineOptions {
    /// Smallest width or height a component may be resized to (container units)
    pub min_dimension: f64,
    /// Slack used when comparing results against the current state
    pub tolerance: f64,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            min_dimension: 1.0,
            tolerance: 1e-9,
        }
    }
}

impl EngineOptions {
    /// Set the minimum dimension. Non-positive values are ignored.
    pub fn with_min_dimension(mut self, min_dimension: f64) -> Self {
        if min_dimension > 0.0 && min_dimension.is_finite() {
            self.min_dimension = min_dimension;
        }
        self
    }

    /// Set the comparison tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance.abs();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_dimension_stays_positive() {
        let options = EngineOptions::default().with_min_dimension(0.0);
        assert_eq!(options.min_dimension, 1.0);

        let options = EngineOptions::default().with_min_dimension(4.0);
        assert_eq!(options.min_dimension, 4.0);
    }
}
