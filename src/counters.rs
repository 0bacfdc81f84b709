//! Core module containing the counter types and the traits they share.
//!
//! Every counter owns exactly one integer cell, initialized to zero when the
//! counter is constructed. The only way to change the cell is
//! [`Advance::advance`], which adds one and returns the new value:
//!
//! ```text
//!   create ──► [ value: 0 ] ──advance()──► [ value: 1 ] ──advance()──► [ value: 2 ] ...
//!                                 │                           │
//!                                 ▼                           ▼
//!                              returns 1                   returns 2
//! ```
//!
//! Two flavours are available:
//!
//! | Type | Cell | Threads |
//! |------|------|---------|
//! | [`Counter`](local::Counter) | `Cell<i64>` | single owner, `Send` but not `Sync` |
//! | [`SyncCounter`](shared::SyncCounter) | cache-padded `AtomicI64` | `Send + Sync`, share through `Arc` |
//!
//! Counters never share storage. Two counters built by separate constructor
//! calls are fully independent: advancing one is never observable on the other.

pub mod local;
pub mod shared;

use std::fmt::{Debug, Display};
use std::rc::Rc;
use std::sync::Arc;

use thiserror::Error;

/// Errors reported by the checked counter operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CounterError {
    /// The counter already holds `i64::MAX` and cannot advance without wrapping.
    #[error("counter '{name}' overflowed at {value}")]
    Overflow {
        /// Name of the counter, empty when unnamed.
        name: &'static str,
        /// The value the counter was left at.
        value: i64,
    },
}

/// Name rendered for counters that were never given one.
pub const UNNAMED: &str = "(unnamed)";

/// Result type for checked counter operations.
pub type Result<T> = std::result::Result<T, CounterError>;

/// The "advance and read" operation shared by every counter.
///
/// # Examples
///
/// ```rust
/// use tallies::counters::Advance;
/// use tallies::counters::local::Counter;
///
/// fn tick_twice(c: &impl Advance) -> i64 {
///     c.advance();
///     c.advance()
/// }
///
/// let counter = Counter::new();
/// assert_eq!(tick_twice(&counter), 2);
/// ```
pub trait Advance {
    /// Increments the counter by one and returns the new value.
    fn advance(&self) -> i64;
}

impl<T: Advance + ?Sized> Advance for &T {
    #[inline]
    fn advance(&self) -> i64 {
        (**self).advance()
    }
}

impl<T: Advance + ?Sized> Advance for Rc<T> {
    #[inline]
    fn advance(&self) -> i64 {
        (**self).advance()
    }
}

impl<T: Advance + ?Sized> Advance for Arc<T> {
    #[inline]
    fn advance(&self) -> i64 {
        (**self).advance()
    }
}

/// A trait for types that can be observed to retrieve their current value.
///
/// Observers read counters exclusively through this trait, so any counter
/// type can be rendered alongside any other.
///
/// # Examples
///
/// ```rust
/// use tallies::counters::Observable;
/// use tallies::counters::local::Counter;
///
/// let counter = Counter::new().with_name("visits");
/// counter.advance();
///
/// let observed: &dyn Observable = &counter;
/// assert_eq!(observed.to_string(), "visits:1");
/// ```
pub trait Observable: Debug {
    /// Returns the name of this counter, or an empty string if unnamed.
    fn name(&self) -> &str;

    /// Returns the current value without advancing.
    fn value(&self) -> i64;

    /// Returns the name used when rendering, [`UNNAMED`] if the counter has none.
    fn display_name(&self) -> &str {
        match self.name() {
            "" => UNNAMED,
            name => name,
        }
    }
}

impl Display for dyn Observable + '_ {
    /// Formats the counter as `name:value` if named, or just `value` otherwise.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.name().is_empty() {
            write!(f, "{}:{}", self.name(), self.value())
        } else {
            write!(f, "{}", self.value())
        }
    }
}
