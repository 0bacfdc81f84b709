//! Serializable captures of counter values.
//!
//! Requires the `serde` feature. A snapshot only reads counters, it never
//! advances them.
//!
//! ```rust
//! use tallies::counters::Observable;
//! use tallies::factory::CounterFactory;
//! use tallies::snapshot::{CounterSnapshot, MetricsSnapshot};
//!
//! let factory = CounterFactory::new();
//! let c1 = factory.create_named("c1");
//! let c2 = factory.create();
//! c1.advance();
//! c1.advance();
//!
//! let counters: Vec<&dyn Observable> = vec![&c1, &c2];
//! let snapshot = MetricsSnapshot::collect(counters.into_iter());
//!
//! assert_eq!(
//!     snapshot.counters,
//!     vec![CounterSnapshot::new("c1", 2), CounterSnapshot::new("(unnamed)", 0)]
//! );
//! assert_eq!(snapshot.total(), 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::counters::Observable;

/// One counter's name and value at the time it was read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CounterSnapshot {
    pub name: String,
    pub value: i64,
}

impl CounterSnapshot {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Reads `counter`, recording its [`display_name`](Observable::display_name).
    pub fn from_observable(counter: &dyn Observable) -> Self {
        Self::new(counter.display_name(), counter.value())
    }
}

/// Snapshots of several counters, in the order they were read.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub counters: Vec<CounterSnapshot>,
}

impl MetricsSnapshot {
    pub fn collect<'a>(counters: impl Iterator<Item = &'a dyn Observable>) -> Self {
        Self {
            counters: counters.map(CounterSnapshot::from_observable).collect(),
        }
    }

    /// Finds a counter by name. With duplicate names the first one read wins.
    pub fn get(&self, name: &str) -> Option<&CounterSnapshot> {
        self.counters.iter().find(|c| c.name == name)
    }

    /// Sum of all captured values, wrapping on overflow.
    pub fn total(&self) -> i64 {
        self.counters
            .iter()
            .fold(0i64, |acc, c| acc.wrapping_add(c.value))
    }
}
