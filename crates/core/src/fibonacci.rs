//! Recursive Fibonacci
//!
//! F(0) = 0, F(1) = 1, F(n) = F(n-1) + F(n-2) for n > 1.
//!
//! The recursion is deliberately naive (exponential time, no memoization) so
//! the call tree matches the classic textbook shape when profiled.
//!
//! # Negative input
//!
//! Any `n <= 1` is returned unchanged, so `fibonacci(-3) == -3`. This keeps
//! the historical behavior rather than rejecting negative input.
//!
//! # Overflow
//!
//! Additions wrap. F(92) is the largest term that fits in an `i64`; the
//! naive recursion makes anything near that impractical anyway.

/// Compute the n-th Fibonacci number by direct double recursion
pub fn fibonacci(n: i64) -> i64 {
    if n <= 1 {
        return n;
    }
    fibonacci(n - 1).wrapping_add(fibonacci(n - 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_cases() {
        assert_eq!(fibonacci(0), 0);
        assert_eq!(fibonacci(1), 1);
    }

    #[test]
    fn test_fibonacci_10() {
        assert_eq!(fibonacci(10), 55);
    }

    #[test]
    fn test_known_terms() {
        let expected = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144];
        for (n, want) in expected.iter().enumerate() {
            assert_eq!(fibonacci(n as i64), *want, "F({})", n);
        }
        assert_eq!(fibonacci(20), 6765);
        assert_eq!(fibonacci(30), 832040);
    }

    #[test]
    fn test_recurrence() {
        for n in 2..=25 {
            assert_eq!(fibonacci(n), fibonacci(n - 1) + fibonacci(n - 2));
        }
    }

    #[test]
    fn test_negative_input_returned_unchanged() {
        assert_eq!(fibonacci(-1), -1);
        assert_eq!(fibonacci(-7), -7);
    }
}
