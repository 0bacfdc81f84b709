//! Small function factories and combinators.
//!
//! These are the stateless siblings of [`create_counter`](crate::factory::create_counter):
//! [`adder`] returns a closure that captures its fixed operand by value, and
//! [`apply`] takes the transformation to run as an argument.
//!
//! ```rust
//! use tallies::higher_order::{adder, apply, double, square};
//!
//! assert_eq!(apply(5, double), 10);
//! assert_eq!(apply(5, square), 25);
//! assert_eq!(apply(5, |n| n + 10), 15);
//!
//! let add5 = adder(5);
//! assert_eq!(add5(10), 15);
//! assert_eq!(add5(20), 25);
//! ```

use log::debug;

/// Returns a closure that adds `fixed` to its argument.
///
/// Each returned closure keeps its own copy of `fixed`; calling one never
/// affects another.
pub fn adder(fixed: i64) -> impl Fn(i64) -> i64 + Clone {
    move |n| n.wrapping_add(fixed)
}

/// Runs `f` on `num` and returns the result.
pub fn apply<F>(num: i64, f: F) -> i64
where
    F: FnOnce(i64) -> i64,
{
    debug!("applying transformation to {num}");
    f(num)
}

/// Doubles a number.
pub fn double(n: i64) -> i64 {
    n.wrapping_mul(2)
}

/// Squares a number.
pub fn square(n: i64) -> i64 {
    n.wrapping_mul(n)
}
