//! Named gauge/counter instruments and the registry that owns them.
//!
//! Instruments are keyed by name in a `DashMap`. Each one synchronises itself
//! with a single atomic, so updates and scrapes never take a lock owned by
//! this module. `gather` sorts by name to keep scrape output deterministic.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use watchtower_core::error::{Result, WatchtowerError};
use watchtower_core::exposition::{MetricKind, Sample};

/// Last-observation value. The f64 is kept as raw bits in an `AtomicU64`.
#[derive(Debug)]
pub struct Gauge {
    bits: AtomicU64,
}

impl Default for Gauge {
    fn default() -> Self {
        Self { bits: AtomicU64::new(0f64.to_bits()) }
    }
}

impl Gauge {
    /// Overwrite the current value.
    pub fn set(&self, v: f64) {
        self.bits.store(v.to_bits(), Ordering::Relaxed);
    }

    pub fn get(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Relaxed))
    }
}

/// Monotonic counter, reset only by process restart.
#[derive(Debug, Default)]
pub struct Counter {
    value: AtomicU64,
}

impl Counter {
    /// Increment by 1.
    pub fn inc(&self) {
        self.inc_by(1);
    }

    pub fn inc_by(&self, n: u64) {
        self.value.fetch_add(n, Ordering::Relaxed);
    }

    pub fn get(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }
}

#[derive(Clone)]
enum Instrument {
    Gauge(Arc<Gauge>),
    Counter(Arc<Counter>),
}

struct Registered {
    help: &'static str,
    instrument: Instrument,
}

/// Owns every instrument exposed by the process.
#[derive(Default)]
pub struct Registry {
    map: DashMap<&'static str, Registered>,
}

impl Registry {
    pub fn new() -> Self {
        Self { map: DashMap::new() }
    }

    /// Create and register a gauge starting at 0.
    pub fn register_gauge(&self, name: &'static str, help: &'static str) -> Result<Arc<Gauge>> {
        let g = Arc::new(Gauge::default());
        self.insert(name, help, Instrument::Gauge(Arc::clone(&g)))?;
        Ok(g)
    }

    /// Create and register a counter starting at 0.
    pub fn register_counter(
        &self,
        name: &'static str,
        help: &'static str,
    ) -> Result<Arc<Counter>> {
        let c = Arc::new(Counter::default());
        self.insert(name, help, Instrument::Counter(Arc::clone(&c)))?;
        Ok(c)
    }

    fn insert(&self, name: &'static str, help: &'static str, instrument: Instrument) -> Result<()> {
        if !is_valid_name(name) {
            return Err(WatchtowerError::InvalidMetric(format!("bad name: {name:?}")));
        }
        if help.trim().is_empty() {
            return Err(WatchtowerError::InvalidMetric(format!("empty help for {name}")));
        }

        match self.map.entry(name) {
            Entry::Occupied(_) => Err(WatchtowerError::DuplicateMetric(name.to_string())),
            Entry::Vacant(v) => {
                v.insert(Registered { help, instrument });
                tracing::debug!(metric = name, "instrument registered");
                Ok(())
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Snapshot of every instrument, sorted by name.
    pub fn gather(&self) -> Vec<Sample> {
        let mut out: Vec<Sample> = self
            .map
            .iter()
            .map(|r| {
                let (kind, value) = match &r.value().instrument {
                    Instrument::Gauge(g) => (MetricKind::Gauge, g.get()),
                    Instrument::Counter(c) => (MetricKind::Counter, c.get() as f64),
                };
                Sample { name: *r.key(), help: r.value().help, kind, value }
            })
            .collect();
        out.sort_by(|a, b| a.name.cmp(b.name));
        out
    }
}

/// Prometheus metric name grammar: `[a-zA-Z_:][a-zA-Z0-9_:]*`.
fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == ':' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':')
}
