//! Console renderers for counters.
//!
//! - [`table`] (`table` feature) draws a list or grid with `tabled`
//! - [`json`] (`json` feature) writes a [`MetricsSnapshot`](crate::snapshot::MetricsSnapshot)
//!   document with `serde_json`
//!
//! Renderers read counters through [`Observable`](crate::counters::Observable)
//! and never advance them.
//!
//! ```rust
//! use tallies::counters::Observable;
//! use tallies::factory::CounterFactory;
//!
//! let factory = CounterFactory::new();
//! let hits = factory.create_named("hits");
//! hits.advance();
//! let counters: Vec<&dyn Observable> = vec![&hits];
//!
//! #[cfg(feature = "table")]
//! {
//!     use tallies::observers::table::TableObserver;
//!     let table = TableObserver::new().render(counters.iter().copied());
//!     assert!(table.contains("hits"));
//! }
//!
//! #[cfg(feature = "json")]
//! {
//!     use tallies::observers::json::JsonObserver;
//!     let json = JsonObserver::new().to_json(counters.iter().copied()).unwrap();
//!     assert_eq!(json, r#"{"counters":[{"name":"hits","value":1}]}"#);
//! }
//! # let _ = counters;
//! ```

#[cfg(feature = "json")]
mod error;

#[cfg(feature = "json")]
pub use error::{ObserverError, Result};

#[cfg(feature = "table")]
pub mod table;

#[cfg(feature = "json")]
pub mod json;
