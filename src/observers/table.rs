//! Console tables of counters, drawn with `tabled`.
//!
//! Requires the `table` feature. Two layouts are available: a list with one
//! counter per row, and a grid of `name: value` cells.
//!
//! ```rust
//! use tallies::counters::Observable;
//! use tallies::factory::CounterFactory;
//! use tallies::observers::table::TableObserver;
//!
//! let factory = CounterFactory::new();
//! let c1 = factory.create_named("c1");
//! let c2 = factory.create_named("c2");
//! c1.advance();
//!
//! let counters: Vec<&dyn Observable> = vec![&c1, &c2];
//! let list = TableObserver::new().render(counters.iter().copied());
//! assert!(list.contains("│ c1   │ 1     │"));
//!
//! let grid = TableObserver::grid(2).render(counters.iter().copied());
//! assert!(grid.contains("│ c1: 1 │ c2: 0 │"));
//! ```

use log::debug;
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::counters::Observable;

/// How counters are arranged in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// A `Name | Value` header followed by one row per counter.
    List,
    /// `name: value` cells filling rows of the given width.
    Grid(usize),
}

#[derive(Debug, Clone, Copy)]
pub struct TableObserver {
    layout: Layout,
}

impl TableObserver {
    /// A list layout.
    pub fn new() -> Self {
        Self {
            layout: Layout::List,
        }
    }

    /// A grid layout with `columns` cells per row; zero is treated as one.
    pub fn grid(columns: usize) -> Self {
        Self {
            layout: Layout::Grid(columns.max(1)),
        }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Reads every counter once and draws the table. An empty grid renders
    /// as an empty string.
    pub fn render<'a>(&self, counters: impl Iterator<Item = &'a dyn Observable>) -> String {
        let mut builder = Builder::default();
        let mut rows = 0;

        match self.layout {
            Layout::List => {
                builder.push_record(["Name", "Value"]);
                for counter in counters {
                    builder.push_record([
                        counter.display_name().to_owned(),
                        counter.value().to_string(),
                    ]);
                    rows += 1;
                }
            }
            Layout::Grid(columns) => {
                let cells: Vec<String> = counters
                    .map(|c| format!("{}: {}", c.display_name(), c.value()))
                    .collect();
                if cells.is_empty() {
                    return String::new();
                }
                for chunk in cells.chunks(columns) {
                    let mut row = chunk.to_vec();
                    row.resize(columns, String::new());
                    builder.push_record(row);
                    rows += 1;
                }
            }
        }

        debug!("drawing {:?} table with {} rows", self.layout, rows);
        let mut table = builder.build();
        table.with(Style::rounded());
        table.to_string()
    }
}

impl Default for TableObserver {
    fn default() -> Self {
        Self::new()
    }
}
