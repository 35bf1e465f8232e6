//! Driver configuration
//!
//! `DemoConfig` gathers every input the driver uses. The default reproduces
//! the reference run; the builder methods exist so tests can push the driver
//! down its other paths.
//!
//! # Example
//!
//! ```rust
//! use experiment_core::DemoConfig;
//!
//! let config = DemoConfig::new()
//!     .with_values(vec![5, 5, 5])
//!     .with_fibonacci_input(12)
//!     .with_point(-1, 7);
//!
//! assert_eq!(config.size, 3);
//! ```

/// Inputs for one driver run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Sequence handed to the summer
    pub values: Vec<i64>,

    /// How many leading elements of `values` to sum
    ///
    /// Normally `values.len()`. A larger value is a caller error that the
    /// driver reports instead of reading past the end.
    pub size: usize,

    /// Index of the Fibonacci term to compute
    pub fibonacci_input: i64,

    /// Coordinates the point is moved to
    pub point: (i64, i64),
}

impl Default for DemoConfig {
    fn default() -> Self {
        let values: Vec<i64> = (1..=10).collect();
        DemoConfig {
            size: values.len(),
            values,
            fibonacci_input: 10,
            point: (42, 84),
        }
    }
}

impl DemoConfig {
    /// Create the reference configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the sequence; `size` follows the new length
    pub fn with_values(mut self, values: Vec<i64>) -> Self {
        self.size = values.len();
        self.values = values;
        self
    }

    /// Override how many elements are summed
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the Fibonacci index to compute
    pub fn with_fibonacci_input(mut self, n: i64) -> Self {
        self.fibonacci_input = n;
        self
    }

    /// Set the coordinates the point is moved to
    pub fn with_point(mut self, x: i64, y: i64) -> Self {
        self.point = (x, y);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_run() {
        let config = DemoConfig::default();
        assert_eq!(config.values, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        assert_eq!(config.size, 10);
        assert_eq!(config.fibonacci_input, 10);
        assert_eq!(config.point, (42, 84));
    }

    #[test]
    fn test_with_values_resets_size() {
        let config = DemoConfig::new().with_size(3).with_values(vec![1, 2]);
        assert_eq!(config.size, 2);
    }

    #[test]
    fn test_with_size_after_values() {
        let config = DemoConfig::new().with_values(vec![1, 2]).with_size(5);
        assert_eq!(config.values.len(), 2);
        assert_eq!(config.size, 5);
    }
}
