//! Operation monitor: wall-clock timing and memory deltas
//!
//! The session brackets each menu operation with [`Monitor::start`] and
//! [`Monitor::stop`], samples resident memory before and after, and records
//! the result. The log is append-only and is consumed by the summary and
//! the CSV export.

use crate::csv_output::{CsvOperation, CsvOutput};
use crate::error::Result;
use crate::memory;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

/// Default CSV export path
pub const DEFAULT_STATS_FILE: &str = "estadisticas.csv";

/// One recorded operation
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorEntry {
    pub operation: String,
    pub elapsed_ms: f64,
    /// Resident memory delta in KB; negative when memory was released
    pub memory_kb: i64,
}

/// Timer, memory sampler and operation log
#[derive(Debug, Default)]
pub struct Monitor {
    start_time: Option<Instant>,
    entries: Vec<MonitorEntry>,
    total_time_ms: f64,
    max_memory_kb: i64,
}

impl Monitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the timer
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Milliseconds since the last [`Monitor::start`]; 0 if never started
    pub fn stop(&self) -> f64 {
        self.start_time
            .map(|start| start.elapsed().as_secs_f64() * 1000.0)
            .unwrap_or_default()
    }

    /// Current resident memory in KB (best-effort)
    pub fn sample_memory(&self) -> i64 {
        memory::resident_kb()
    }

    /// Append an operation to the log and update the running totals
    pub fn record(&mut self, operation: impl Into<String>, elapsed_ms: f64, memory_kb: i64) {
        let entry = MonitorEntry {
            operation: operation.into(),
            elapsed_ms,
            memory_kb,
        };
        tracing::debug!(
            operation = %entry.operation,
            elapsed_ms,
            memory_kb,
            "recorded operation"
        );
        self.total_time_ms += elapsed_ms;
        self.max_memory_kb = self.max_memory_kb.max(memory_kb);
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[MonitorEntry] {
        &self.entries
    }

    /// Sum of all recorded elapsed times
    pub fn total_time_ms(&self) -> f64 {
        self.total_time_ms
    }

    /// Largest recorded memory delta (never below 0)
    pub fn max_memory_kb(&self) -> i64 {
        self.max_memory_kb
    }

    /// One-line statistic for a single operation
    pub fn write_entry<W: Write>(out: &mut W, entry: &MonitorEntry) -> std::io::Result<()> {
        writeln!(
            out,
            "{}: {:.3} ms, {} KB",
            entry.operation, entry.elapsed_ms, entry.memory_kb
        )
    }

    /// Print every recorded entry plus totals
    pub fn write_summary<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "\n=== ESTADÍSTICAS DE RENDIMIENTO ===")?;
        if self.entries.is_empty() {
            writeln!(out, "No hay operaciones registradas.")?;
            return Ok(());
        }
        for entry in &self.entries {
            write!(out, "  - ")?;
            Self::write_entry(out, entry)?;
        }
        writeln!(out, "-------------------------------------")?;
        writeln!(out, "Tiempo total: {:.3} ms", self.total_time_ms)?;
        writeln!(out, "Memoria máxima: {} KB", self.max_memory_kb)?;
        Ok(())
    }

    /// Render the log as CSV
    pub fn to_csv(&self) -> String {
        let mut csv = CsvOutput::new();
        for entry in &self.entries {
            csv.add_operation(CsvOperation {
                operation: entry.operation.clone(),
                elapsed_ms: entry.elapsed_ms,
                memory_kb: entry.memory_kb,
            });
        }
        csv.to_csv()
    }

    /// Write the log to `path`, replacing any existing file
    pub fn export_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_csv())?;
        tracing::info!(
            path = %path.display(),
            entries = self.entries.len(),
            "exported statistics"
        );
        Ok(())
    }
}
