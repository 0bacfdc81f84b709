//! JSON rendering of counters, built on [`MetricsSnapshot`].
//!
//! Requires the `json` feature.
//!
//! ```rust
//! use tallies::counters::Observable;
//! use tallies::factory::create_counter;
//! use tallies::observers::json::JsonObserver;
//!
//! let hits = create_counter();
//! hits.advance();
//!
//! let counters: Vec<&dyn Observable> = vec![&hits];
//! let json = JsonObserver::new().to_json(counters.into_iter()).unwrap();
//! assert_eq!(json, r#"{"counters":[{"name":"(unnamed)","value":1}]}"#);
//! ```

use log::debug;

use crate::counters::Observable;
use crate::observers::Result;
use crate::snapshot::MetricsSnapshot;

/// Serializes a set of counters as one `{"counters": [...]}` document.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonObserver {
    pretty: bool,
}

impl JsonObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indents the output over several lines.
    pub fn pretty(self, pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn to_json<'a>(&self, counters: impl Iterator<Item = &'a dyn Observable>) -> Result<String> {
        let snapshot = MetricsSnapshot::collect(counters);
        debug!("writing {} counters as json", snapshot.counters.len());
        let json = if self.pretty {
            serde_json::to_string_pretty(&snapshot)?
        } else {
            serde_json::to_string(&snapshot)?
        };
        Ok(json)
    }

    /// Parses a document produced by [`to_json`](Self::to_json).
    pub fn parse(json: &str) -> Result<MetricsSnapshot> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::CounterFactory;
    use crate::observers::ObserverError;
    use crate::snapshot::CounterSnapshot;

    #[test]
    fn test_empty() {
        let counters: Vec<&dyn Observable> = vec![];
        let json = JsonObserver::new().to_json(counters.into_iter()).unwrap();
        assert_eq!(json, r#"{"counters":[]}"#);
    }

    #[test]
    fn test_scenario_counters() {
        let factory = CounterFactory::new();
        let c1 = factory.create_named("c1");
        let c2 = factory.create_named("c2");
        let shared = factory.create_sync("shared");
        for _ in 0..3 {
            c1.advance();
        }
        c2.advance();
        c1.advance();
        shared.advance();

        let counters: Vec<&dyn Observable> = vec![&c1, &c2, &*shared];
        let json = JsonObserver::new().to_json(counters.into_iter()).unwrap();

        assert_eq!(
            json,
            r#"{"counters":[{"name":"c1","value":4},{"name":"c2","value":1},{"name":"shared","value":1}]}"#
        );
    }

    #[test]
    fn test_pretty_parses_back() {
        let factory = CounterFactory::new();
        let c = factory.create_named("c");
        c.advance();

        let counters: Vec<&dyn Observable> = vec![&c];
        let json = JsonObserver::new()
            .pretty(true)
            .to_json(counters.into_iter())
            .unwrap();

        assert!(json.contains('\n'));
        let parsed = JsonObserver::parse(&json).unwrap();
        assert_eq!(parsed.counters, vec![CounterSnapshot::new("c", 1)]);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = JsonObserver::parse("{not json").unwrap_err();
        assert!(matches!(err, ObserverError::Json(_)));
        assert!(err.to_string().starts_with("json error:"));
    }
}
