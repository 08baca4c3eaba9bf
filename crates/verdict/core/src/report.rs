//! Console reporting.
//!
//! Two shapes are printed: one line per reported record and a summary block
//! per test case. [`RunReport`] aggregates the outcomes of a registry run for
//! whoever decides the process exit status.

use crate::record::LogRecord;
use std::time::Duration;

/// Format one report line for `record`.
///
/// `[TAG]: (file, line:column:<elapsed>ns) [function] -> message`
pub fn record_line(record: &LogRecord) -> String {
    let location = &record.location;
    format!(
        "[{}]: ({}, {}:{}:{}ns) [{}] -> {}",
        record.kind.tag(),
        location.file,
        location.line,
        location.column,
        record.elapsed_ns,
        location.function,
        record.message
    )
}

/// Format the summary block of a test case, leading blank line included.
pub fn summary_block(file: &str, errors: u32, elapsed_ns: u128) -> String {
    format!(
        "\n[SUMMARY]\nFile: {}\nError/s: {}\n{}ns\n",
        file, errors, elapsed_ns
    )
}

/// Final state of one finished test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseOutcome {
    pub name: String,
    pub file: String,
    pub errors: u32,
    pub duration: Duration,
}

impl CaseOutcome {
    pub fn passed(&self) -> bool {
        self.errors == 0
    }
}

/// Outcomes of a registry run, in execution order.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub outcomes: Vec<CaseOutcome>,
    pub duration: Duration,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, outcome: CaseOutcome) {
        self.outcomes.push(outcome);
    }

    /// Sum of the error counts of every case.
    pub fn total_errors(&self) -> u64 {
        self.outcomes.iter().map(|o| u64::from(o.errors)).sum()
    }

    /// Cases that reported at least one error.
    pub fn failed_cases(&self) -> Vec<&CaseOutcome> {
        self.outcomes.iter().filter(|o| !o.passed()).collect()
    }

    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn is_success(&self) -> bool {
        self.total_errors() == 0
    }
}
