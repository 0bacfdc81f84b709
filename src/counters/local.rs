//! Single-threaded counter backed by a [`Cell`].
//!
//! This module provides [`Counter`], the cheapest counter in the crate. The
//! cell is only reachable through the counter's own methods, which gives each
//! instance a private, heap-or-stack lifetime integer without any locking.

use std::cell::Cell;
use std::fmt::Debug;

use log::warn;

use crate::counters::{Advance, CounterError, Observable, Result};

/// A single-threaded counter owning one private integer cell.
///
/// `Counter` is `Send` (it can be moved to another thread) but not `Sync`:
/// the compiler refuses to share one between threads. Use
/// [`SyncCounter`](super::shared::SyncCounter) when several threads need to
/// advance the same counter.
///
/// # Examples
///
/// ```rust
/// use tallies::counters::local::Counter;
///
/// let c1 = Counter::new();
/// assert_eq!(c1.advance(), 1);
/// assert_eq!(c1.advance(), 2);
/// assert_eq!(c1.advance(), 3);
///
/// let c2 = Counter::new();
/// assert_eq!(c2.advance(), 1);
/// assert_eq!(c1.advance(), 4);
/// ```
pub struct Counter {
    name: &'static str,
    value: Cell<i64>,
}

impl Counter {
    /// Creates a new counter initialized to zero, with no name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tallies::counters::local::Counter;
    ///
    /// let counter = Counter::new();
    /// assert_eq!(counter.value(), 0);
    /// ```
    pub const fn new() -> Self {
        Counter {
            name: "",
            value: Cell::new(0),
        }
    }

    /// Sets the name of this counter, returning `self` for method chaining.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tallies::counters::local::Counter;
    /// use tallies::counters::Observable;
    ///
    /// let counter = Counter::new().with_name("page_views");
    /// assert_eq!(Observable::name(&counter), "page_views");
    /// ```
    pub const fn with_name(self, name: &'static str) -> Self {
        Self { name, ..self }
    }

    /// Increments the counter by one and returns the new value.
    ///
    /// Successive results increase by exactly one only up to `i64::MAX`. The
    /// next call after that wraps to `i64::MIN`; use
    /// [`try_advance`](Self::try_advance) to get an error instead.
    #[inline]
    pub fn advance(&self) -> i64 {
        let next = self.value.get().wrapping_add(1);
        self.value.set(next);
        next
    }

    /// Increments the counter by one, failing if the value would overflow.
    ///
    /// On error the counter is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tallies::counters::local::Counter;
    ///
    /// let counter = Counter::new();
    /// assert_eq!(counter.try_advance(), Ok(1));
    /// ```
    pub fn try_advance(&self) -> Result<i64> {
        let current = self.value.get();
        match current.checked_add(1) {
            Some(next) => {
                self.value.set(next);
                Ok(next)
            }
            None => {
                warn!("counter '{}' cannot advance past {}", self.name, current);
                Err(CounterError::Overflow {
                    name: self.name,
                    value: current,
                })
            }
        }
    }

    /// Returns the current value without advancing.
    #[inline]
    pub fn value(&self) -> i64 {
        self.value.get()
    }

    #[cfg(test)]
    pub(crate) fn starting_at(value: i64) -> Self {
        Counter {
            name: "",
            value: Cell::new(value),
        }
    }
}

impl Advance for Counter {
    #[inline]
    fn advance(&self) -> i64 {
        Counter::advance(self)
    }
}

impl Observable for Counter {
    #[inline]
    fn name(&self) -> &str {
        self.name
    }

    #[inline]
    fn value(&self) -> i64 {
        self.value.get()
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for Counter {
    /// Output format: `name{ value }`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{{ {} }}", self.name, self.value.get())
    }
}
