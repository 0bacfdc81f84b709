//! Thread-safe counter backed by a single atomic integer.
//!
//! [`SyncCounter`] is the synchronized version of
//! [`Counter`](super::local::Counter). Each call to `advance` is one
//! `fetch_add`, so concurrent callers each receive a distinct value and no
//! increment is lost.
//!
//! The cell is wrapped in [`crossbeam_utils::CachePadded`] so that counters
//! stored next to each other (for example in a `Vec`) do not share a cache
//! line and slow each other down.

use std::fmt::Debug;
use std::sync::atomic::{AtomicI64, Ordering};

use crossbeam_utils::CachePadded;
use log::warn;

use crate::counters::{Advance, CounterError, Observable, Result};

/// A thread-safe counter owning one private atomic cell.
///
/// All operations use `Ordering::Relaxed`: a counter only needs atomicity of
/// its own cell, not ordering with respect to other memory.
///
/// # Examples
///
/// Multi-threaded usage:
///
/// ```rust
/// use tallies::counters::shared::SyncCounter;
/// use std::sync::Arc;
/// use std::thread;
///
/// let counter = Arc::new(SyncCounter::new());
/// let mut handles = vec![];
///
/// for _ in 0..4 {
///     let c = Arc::clone(&counter);
///     handles.push(thread::spawn(move || {
///         for _ in 0..1000 {
///             c.advance();
///         }
///     }));
/// }
///
/// for h in handles {
///     h.join().unwrap();
/// }
///
/// assert_eq!(counter.value(), 4000);
/// ```
pub struct SyncCounter {
    name: &'static str,
    value: CachePadded<AtomicI64>,
}

impl SyncCounter {
    /// Creates a new counter initialized to zero, with no name.
    ///
    /// Being `const`, it can back a `static`:
    ///
    /// ```rust
    /// use tallies::counters::shared::SyncCounter;
    ///
    /// static REQUESTS: SyncCounter = SyncCounter::new().with_name("requests");
    /// assert_eq!(REQUESTS.advance(), 1);
    /// ```
    pub const fn new() -> Self {
        SyncCounter {
            name: "",
            value: CachePadded::new(AtomicI64::new(0)),
        }
    }

    /// Sets the name of this counter, returning `self` for method chaining.
    pub const fn with_name(self, name: &'static str) -> Self {
        Self { name, ..self }
    }

    /// Increments the counter by one and returns the new value.
    ///
    /// Successive results increase by exactly one only up to `i64::MAX`.
    /// After that the value wraps to `i64::MIN`, as `fetch_add` does; use
    /// [`try_advance`](Self::try_advance) to get an error instead.
    #[inline]
    pub fn advance(&self) -> i64 {
        self.value.fetch_add(1, Ordering::Relaxed).wrapping_add(1)
    }

    /// Increments the counter by one, failing if the value would overflow.
    ///
    /// On error the counter is left unchanged, even under contention.
    pub fn try_advance(&self) -> Result<i64> {
        match self
            .value
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |v| v.checked_add(1))
        {
            Ok(previous) => Ok(previous + 1),
            Err(current) => {
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
        self.value.load(Ordering::Relaxed)
    }

    #[cfg(test)]
    pub(crate) fn starting_at(value: i64) -> Self {
        SyncCounter {
            name: "",
            value: CachePadded::new(AtomicI64::new(value)),
        }
    }
}

impl Advance for SyncCounter {
    #[inline]
    fn advance(&self) -> i64 {
        SyncCounter::advance(self)
    }
}

impl Observable for SyncCounter {
    #[inline]
    fn name(&self) -> &str {
        self.name
    }

    #[inline]
    fn value(&self) -> i64 {
        self.value.load(Ordering::Relaxed)
    }
}

impl Default for SyncCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for SyncCounter {
    /// Output format: `name{ value }`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{{ {} }}", self.name, self.value.load(Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::{Arc, Mutex};
    use std::thread;

    #[test]
    fn test_new() {
        let counter = SyncCounter::new();
        assert_eq!(counter.value(), 0);
    }

    #[test]
    fn test_advance_sequence() {
        let counter = SyncCounter::new();
        assert_eq!(counter.advance(), 1);
        assert_eq!(counter.advance(), 2);
        assert_eq!(counter.advance(), 3);
    }

    #[test]
    fn test_independent_counters() {
        let c1 = SyncCounter::new();
        let c2 = SyncCounter::new();
        for _ in 0..10 {
            c1.advance();
        }
        assert_eq!(c2.advance(), 1);
        assert_eq!(c1.advance(), 11);
    }

    #[test]
    fn test_multiple_threads() {
        let counter = Arc::new(SyncCounter::new());
        let mut handles = vec![];

        for _ in 0..4 {
            let counter_clone = Arc::clone(&counter);
            let handle = thread::spawn(move || {
                for _ in 0..100 {
                    counter_clone.advance();
                }
            });
            handles.push(handle);
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(counter.value(), 400);
    }

    #[test]
    fn test_concurrent_returns_are_distinct() {
        let counter = Arc::new(SyncCounter::new());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut handles = vec![];

        for _ in 0..8 {
            let counter = Arc::clone(&counter);
            let seen = Arc::clone(&seen);
            handles.push(thread::spawn(move || {
                let local: Vec<i64> = (0..250).map(|_| counter.advance()).collect();
                seen.lock().unwrap().extend(local);
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        let seen = seen.lock().unwrap();
        let unique: HashSet<i64> = seen.iter().copied().collect();
        assert_eq!(seen.len(), 2000);
        assert_eq!(unique.len(), 2000);
        assert_eq!(unique.iter().min(), Some(&1));
        assert_eq!(unique.iter().max(), Some(&2000));
    }

    #[test]
    fn test_try_advance_overflow_leaves_value() {
        let counter = SyncCounter::starting_at(i64::MAX).with_name("edge");
        assert_eq!(
            counter.try_advance(),
            Err(CounterError::Overflow {
                name: "edge",
                value: i64::MAX
            })
        );
        assert_eq!(counter.value(), i64::MAX);
    }

    #[test]
    fn test_monotone_up_to_max() {
        let counter = SyncCounter::starting_at(i64::MAX - 2);
        assert_eq!(counter.advance(), i64::MAX - 1);
        assert_eq!(counter.advance(), i64::MAX);
        assert_eq!(counter.try_advance().map_err(|_| ()), Err(()));
        assert_eq!(counter.advance(), i64::MIN);
    }

    #[test]
    fn test_advance_wraps_at_max() {
        let counter = SyncCounter::starting_at(i64::MAX);
        assert_eq!(counter.advance(), i64::MIN);
    }

    #[test]
    fn test_static_counter() {
        static HITS: SyncCounter = SyncCounter::new().with_name("hits");
        HITS.advance();
        assert!(HITS.value() >= 1);
        assert_eq!(Observable::name(&HITS), "hits");
    }

    #[test]
    fn test_debug() {
        let counter = SyncCounter::new().with_name("test_counter");
        counter.advance();
        assert_eq!(format!("{:?}", counter), "test_counter{ 1 }");
    }
}
