//! Factories that hand out independent counters.
//!
//! [`create_counter`] is the plain factory: every call allocates a fresh
//! cell, initialized to zero, and returns the only handle that can reach it.
//!
//! ```rust
//! use tallies::factory::create_counter;
//!
//! let c1 = create_counter();
//! assert_eq!(c1.advance(), 1);
//! assert_eq!(c1.advance(), 2);
//! assert_eq!(c1.advance(), 3);
//!
//! // c2 has its own cell, untouched by c1
//! let c2 = create_counter();
//! assert_eq!(c2.advance(), 1);
//! assert_eq!(c1.advance(), 4);
//! ```
//!
//! When a bare closure is more convenient, [`counter_fn`] returns one that
//! owns its cell:
//!
//! ```rust
//! use tallies::factory::counter_fn;
//!
//! let mut next = counter_fn();
//! assert_eq!(next(), 1);
//! assert_eq!(next(), 2);
//! ```

use std::fmt::{self, Debug};
use std::sync::Arc;

use log::trace;

use crate::counters::local::Counter;
use crate::counters::shared::SyncCounter;
use crate::counters::{Advance, Observable, Result};

/// Handle bound to one private counter cell.
///
/// The cell can only be read or advanced through this handle. Dropping the
/// handle drops the cell.
pub struct AdvanceFn {
    cell: Counter,
}

impl AdvanceFn {
    fn bound_to(cell: Counter) -> Self {
        Self { cell }
    }

    /// Increments the bound cell by one and returns the new value.
    #[inline]
    pub fn advance(&self) -> i64 {
        self.cell.advance()
    }

    /// Like [`advance`](Self::advance), but fails instead of wrapping at `i64::MAX`.
    pub fn try_advance(&self) -> Result<i64> {
        self.cell.try_advance()
    }

    /// Returns the current value of the bound cell without advancing.
    #[inline]
    pub fn value(&self) -> i64 {
        self.cell.value()
    }

    /// Converts the handle into a closure that owns the cell.
    ///
    /// ```rust
    /// use tallies::factory::create_counter;
    ///
    /// let handle = create_counter();
    /// handle.advance();
    ///
    /// let mut next = handle.into_fn();
    /// assert_eq!(next(), 2);
    /// ```
    pub fn into_fn(self) -> impl FnMut() -> i64 {
        move || self.cell.advance()
    }
}

impl Advance for AdvanceFn {
    #[inline]
    fn advance(&self) -> i64 {
        self.cell.advance()
    }
}

impl Observable for AdvanceFn {
    fn name(&self) -> &str {
        Observable::name(&self.cell)
    }

    fn value(&self) -> i64 {
        self.cell.value()
    }
}

impl Debug for AdvanceFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.cell, f)
    }
}

/// Creates a new counter handle bound to a fresh cell initialized to zero.
pub fn create_counter() -> AdvanceFn {
    trace!("creating counter");
    AdvanceFn::bound_to(Counter::new())
}

/// Creates a new counter and returns it as a closure.
pub fn counter_fn() -> impl FnMut() -> i64 {
    create_counter().into_fn()
}

/// A factory value that produces named counters and remembers how many it made.
///
/// # Examples
///
/// ```rust
/// use tallies::factory::CounterFactory;
/// use tallies::counters::Observable;
///
/// let factory = CounterFactory::new();
/// let logins = factory.create_named("logins");
/// let logouts = factory.create_named("logouts");
///
/// logins.advance();
/// assert_eq!(logins.value(), 1);
/// assert_eq!(logouts.value(), 0);
/// assert_eq!(logins.name(), "logins");
/// assert_eq!(factory.produced(), 2);
/// ```
#[derive(Debug)]
pub struct CounterFactory {
    produced: SyncCounter,
}

impl CounterFactory {
    /// Creates a factory that has produced nothing yet.
    pub const fn new() -> Self {
        Self {
            produced: SyncCounter::new().with_name("counters_produced"),
        }
    }

    /// Produces an unnamed single-threaded counter.
    pub fn create(&self) -> AdvanceFn {
        self.create_named("")
    }

    /// Produces a named single-threaded counter.
    pub fn create_named(&self, name: &'static str) -> AdvanceFn {
        let serial = self.produced.advance();
        trace!("factory produced counter #{serial} '{name}'");
        AdvanceFn::bound_to(Counter::new().with_name(name))
    }

    /// Produces a named thread-safe counter, ready to be cloned across threads.
    pub fn create_sync(&self, name: &'static str) -> Arc<SyncCounter> {
        let serial = self.produced.advance();
        trace!("factory produced sync counter #{serial} '{name}'");
        Arc::new(SyncCounter::new().with_name(name))
    }

    /// Returns the number of counters this factory has produced.
    pub fn produced(&self) -> i64 {
        self.produced.value()
    }
}

impl Default for CounterFactory {
    fn default() -> Self {
        Self::new()
    }
}
