//! Metrics domain: wire format, endpoint client, chart datasets, formatting.

pub mod client;
pub mod format;
pub mod series;
pub mod snapshot;

pub use client::{FetchError, HttpMetricsSource, MetricsSource};
pub use series::{PercentPair, TimeSeries, ValuePair};
pub use snapshot::{MetricsSnapshot, TEMP_PLACEHOLDER};
