//! Driver: runs the operations in order and writes the report
//!
//! Output, one line per step:
//!
//! ```text
//! Sum of array: <total>
//! Fibonacci(<n>): <fib>
//! Point: <label> at (<x>, <y>)
//! Array sum is greater | Fibonacci is greater or equal
//! ```

use crate::config::DemoConfig;
use crate::error::DemoError;
use crate::fibonacci::fibonacci;
use crate::point::Point;
use crate::sum::sum_array;
use std::fmt;
use std::io::Write;
use tracing::{debug, info};

/// Outcome of comparing the array sum against the Fibonacci result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// `total > fibonacci`
    ArraySumGreater,
    /// `total <= fibonacci`
    FibonacciGreaterOrEqual,
}

impl Comparison {
    pub fn of(total: i64, fibonacci: i64) -> Self {
        if total > fibonacci {
            Comparison::ArraySumGreater
        } else {
            Comparison::FibonacciGreaterOrEqual
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Comparison::ArraySumGreater => "Array sum is greater",
            Comparison::FibonacciGreaterOrEqual => "Fibonacci is greater or equal",
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Values computed during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total: i64,
    pub fibonacci: i64,
    pub point: Point,
    pub comparison: Comparison,
}

/// Run the demonstration against `config`, writing the report to `out`
///
/// Lines are written as soon as each value is known, so a failure part way
/// through leaves the earlier lines in `out`.
pub fn run<W: Write>(out: &mut W, config: &DemoConfig) -> Result<Summary, DemoError> {
    info!(
        len = config.values.len(),
        size = config.size,
        n = config.fibonacci_input,
        "Starting run"
    );

    let total = sum_array(&config.values, config.size)?;
    writeln!(out, "Sum of array: {}", total)?;

    let fib_result = fibonacci(config.fibonacci_input);
    writeln!(out, "Fibonacci({}): {}", config.fibonacci_input, fib_result)?;

    let mut point = Point::default();
    let (x, y) = config.point;
    point.update(x, y)?;
    writeln!(
        out,
        "Point: {} at ({}, {})",
        point.label(),
        point.x(),
        point.y()
    )?;

    let comparison = Comparison::of(total, fib_result);
    debug!(total, fib_result, ?comparison, "Compared results");
    writeln!(out, "{}", comparison)?;

    out.flush()?;

    Ok(Summary {
        total,
        fibonacci: fib_result,
        point,
        comparison,
    })
}
