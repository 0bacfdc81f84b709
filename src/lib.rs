//! # Tallies - Independent Stateful Counters
//!
//! A small library built around one pattern: a **factory** that hands out
//! counters, each owning a private integer cell that only its own handle can
//! reach. Every handle exposes a single "advance and read" operation.
//!
//! ## The Pattern
//!
//! A counter factory allocates a fresh cell initialized to zero and binds it
//! to the handle it returns. Nothing else in the program can name the cell,
//! so each handle behaves like an object with one private field, and two
//! handles never observe each other:
//!
//! ```text
//!   create_counter() ──► c1 ──► [ 0 ] ──advance──► 1, 2, 3, ... 4
//!   create_counter() ──► c2 ──► [ 0 ] ──advance──► 1
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use tallies::factory::create_counter;
//!
//! let c1 = create_counter();
//! assert_eq!(c1.advance(), 1);
//! assert_eq!(c1.advance(), 2);
//! assert_eq!(c1.advance(), 3);
//!
//! let c2 = create_counter();
//! assert_eq!(c2.advance(), 1);
//! assert_eq!(c1.advance(), 4);
//! ```
//!
//! ## Available Counter Types
//!
//! | Type | Description | Use Case |
//! |------|-------------|----------|
//! | [`AdvanceFn`](factory::AdvanceFn) | Handle returned by the factory | Private per-owner counting |
//! | [`Counter`](counters::local::Counter) | `Cell`-backed counter | Single-threaded counting |
//! | [`SyncCounter`](counters::shared::SyncCounter) | Atomic counter | Counting shared across threads |
//!
//! ## Thread Safety
//!
//! [`Counter`](counters::local::Counter) and
//! [`AdvanceFn`](factory::AdvanceFn) can be moved between threads but not
//! shared; the compiler enforces this. For concurrent callers use
//! [`SyncCounter`](counters::shared::SyncCounter) behind an `Arc`, or ask a
//! [`CounterFactory`](factory::CounterFactory) for one with `create_sync`.
//!
//! ## Function Factories
//!
//! The [`higher_order`] module carries the stateless relatives of the
//! counter factory: [`adder`](higher_order::adder) returns a closure over a
//! fixed operand and [`apply`](higher_order::apply) runs a caller-supplied
//! transformation.
//!
//! ## Observers
//!
//! Optional observer modules render counters for the console. Each is gated
//! behind a feature flag:
//!
//! | Feature | Module | Description |
//! |---------|--------|-------------|
//! | `table` | [`observers::table`] | Pretty-print counters as tables |
//! | `json` | [`observers::json`] | Serialize counters to JSON |
//! | `serde` | [`snapshot`] | Serializable counter snapshots |
//! | `full` | All observers | Enables all observer modules |
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade and never installs a logger.
//! Counter creation is logged at `trace`, observer rendering at `debug`, and
//! checked-advance overflow at `warn`.

pub mod counters;
pub mod factory;
pub mod higher_order;
pub mod observers;

#[cfg(feature = "serde")]
pub mod snapshot;

pub use counters::{Advance, CounterError, Observable};
pub use factory::{counter_fn, create_counter, AdvanceFn, CounterFactory};
