//! Observability: metrics events and the sink boundary.
//!
//! Logging goes through `tracing` at the call sites; this module only
//! carries counters.
pub mod metrics;
pub mod sink;


pub use metrics::{CounterSink, MetricsSnapshot};
pub use sink::{ExecKind, MetricsEvent, MetricsSink};
