//! Report configuration and sinks.
//!
//! A failed `run` without a failure callback hands its report to the
//! configured [`ReportSink`]. The process-wide [`ReportConfig`] is read once
//! per failed run; [`Runner::config`](crate::Runner::config) overrides it
//! for a single call.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;

use super::ValidationReport;

/// Destination for reports of failed runs.
pub trait ReportSink: Send + Sync {
    fn report(&self, report: &ValidationReport);
}

/// Writes the formatted line to standard error.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl StderrSink {
    /// Writes the report's formatted line to `out`.
    pub fn write_to(out: &mut impl Write, report: &ValidationReport) -> io::Result<()> {
        writeln!(out, "{}", report.formatted())
    }
}

impl ReportSink for StderrSink {
    fn report(&self, report: &ValidationReport) {
        // Nowhere left to report a failed write to stderr.
        let _ = Self::write_to(&mut io::stderr().lock(), report);
    }
}

/// Discards reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ReportSink for NullSink {
    fn report(&self, _report: &ValidationReport) {}
}

/// How failed runs are reported.
///
/// # Example
///
/// ```rust
/// use conform::{NullSink, ReportConfig};
///
/// let quiet = ReportConfig::new().with_sink(NullSink).with_locations(false);
/// assert!(!quiet.locations());
/// ```
#[derive(Clone)]
pub struct ReportConfig {
    locations: bool,
    sink: Arc<dyn ReportSink>,
}

impl ReportConfig {
    /// Locations on, reports to standard error.
    pub fn new() -> Self {
        Self {
            locations: true,
            sink: Arc::new(StderrSink),
        }
    }

    /// Whether reports carry the failing validator's construction site.
    /// Without it a report holds only the message.
    pub fn with_locations(mut self, enabled: bool) -> Self {
        self.locations = enabled;
        self
    }

    pub fn with_sink(mut self, sink: impl ReportSink + 'static) -> Self {
        self.sink = Arc::new(sink);
        self
    }

    pub fn locations(&self) -> bool {
        self.locations
    }

    pub fn sink(&self) -> &dyn ReportSink {
        &*self.sink
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ReportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReportConfig")
            .field("locations", &self.locations)
            .finish_non_exhaustive()
    }
}

static REPORT_CONFIG: LazyLock<RwLock<ReportConfig>> =
    LazyLock::new(|| RwLock::new(ReportConfig::new()));

/// Installs `config` for every later run that has no per-call config.
pub fn set_report_config(config: ReportConfig) {
    *REPORT_CONFIG.write() = config;
}

/// A snapshot of the process-wide report configuration.
pub fn report_config() -> ReportConfig {
    REPORT_CONFIG.read().clone()
}
