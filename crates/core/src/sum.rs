//! Array summation
//!
//! `sum_array` adds the first `size` elements of a slice, left to right,
//! starting from 0. Additions wrap on overflow, matching the rest of the
//! integer arithmetic in this crate.

use crate::error::DemoError;
use tracing::debug;

/// Sum the first `size` elements of `values`
///
/// # Errors
///
/// Returns `DemoError::SizeOutOfBounds` if `size` is larger than
/// `values.len()`. Nothing is read in that case.
pub fn sum_array(values: &[i64], size: usize) -> Result<i64, DemoError> {
    let Some(prefix) = values.get(..size) else {
        debug!(size, len = values.len(), "sum_array: size past end of sequence");
        return Err(DemoError::SizeOutOfBounds {
            size,
            len: values.len(),
        });
    };

    let mut total: i64 = 0;
    for value in prefix {
        total = total.wrapping_add(*value);
    }
    Ok(total)
}
