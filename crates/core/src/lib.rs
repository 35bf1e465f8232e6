//! Experiment Core: the operations behind the `experiment` binary
//!
//! Three leaf operations composed by a driver:
//! - Fibonacci: naive doubly-recursive F(n)
//! - Sum: linear accumulation over a prefix of an integer slice
//! - Point: a record whose label always tracks its coordinates
//!
//! # Modules
//!
//! - `config`: Inputs for a driver run (defaults reproduce the reference run)
//! - `driver`: Sequences the operations and writes the report lines
//! - `error`: Error type shared by every fallible operation
//! - `fibonacci`: Recursive Fibonacci
//! - `point`: `Point` record and its capacity-checked `Label`
//! - `sum`: Array summation
//!
//! # Example
//!
//! ```
//! use experiment_core::{DemoConfig, run};
//!
//! let mut out = Vec::new();
//! let summary = run(&mut out, &DemoConfig::default()).unwrap();
//! assert_eq!(summary.total, 55);
//! assert!(String::from_utf8(out).unwrap().starts_with("Sum of array: 55\n"));
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod fibonacci;
pub mod point;
pub mod sum;

pub use config::DemoConfig;
pub use driver::{Comparison, Summary, run};
pub use error::DemoError;
pub use fibonacci::fibonacci;
pub use point::{LABEL_CAPACITY, Label, Point};
pub use sum::sum_array;
