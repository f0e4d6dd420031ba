//! Metrics sink boundary.
//!
//! Core DB logic MUST NOT depend on a concrete counter store.
//! All instrumentation flows through MetricsEvent and MetricsSink.

///
/// ExecKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExecKind {
    Create,
    Get,
    FetchAll,
    FetchRelated,
    FetchByField,
}

impl ExecKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Get => "get",
            Self::FetchAll => "fetch_all",
            Self::FetchRelated => "fetch_related",
            Self::FetchByField => "fetch_by_field",
        }
    }

    #[must_use]
    pub const fn is_write(self) -> bool {
        matches!(self, Self::Create)
    }
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug)]
pub enum MetricsEvent {
    ExecStart {
        kind: ExecKind,
        type_name: &'static str,
    },
    ExecFinish {
        kind: ExecKind,
        type_name: &'static str,
        rows: u64,
    },
    IndexAdds {
        type_name: &'static str,
        adds: u64,
    },
    DanglingMembers {
        type_name: &'static str,
        count: u64,
    },
}

///
/// MetricsSink
///

pub trait MetricsSink: Sync {
    fn record(&self, event: MetricsEvent);
}

/// Forward one event to an optional sink.
pub(crate) fn record(sink: Option<&dyn MetricsSink>, event: MetricsEvent) {
    if let Some(sink) = sink {
        sink.record(event);
    }
}

///
/// Span
/// Records `ExecStart` on creation and `ExecFinish` on drop, so early
/// returns still close the operation.
///

pub(crate) struct Span<'a> {
    sink: Option<&'a dyn MetricsSink>,
    kind: ExecKind,
    type_name: &'static str,
    rows: u64,
}

impl<'a> Span<'a> {
    pub(crate) fn new(
        sink: Option<&'a dyn MetricsSink>,
        kind: ExecKind,
        type_name: &'static str,
    ) -> Self {
        record(sink, MetricsEvent::ExecStart { kind, type_name });

        Self {
            sink,
            kind,
            type_name,
            rows: 0,
        }
    }

    pub(crate) const fn set_rows(&mut self, rows: u64) {
        self.rows = rows;
    }
}

impl Drop for Span<'_> {
    fn drop(&mut self) {
        record(
            self.sink,
            MetricsEvent::ExecFinish {
                kind: self.kind,
                type_name: self.type_name,
                rows: self.rows,
            },
        );
    }
}
