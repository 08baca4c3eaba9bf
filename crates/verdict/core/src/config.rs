//! Harness configuration.

use serde::Deserialize;

/// Options for running test cases.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Skip printing SUCCESS lines. Records are still appended.
    pub quiet_success: bool,

    /// Only run registered cases whose name contains this substring.
    pub filter: Option<String>,

    /// Whether a run with recorded errors should fail the process.
    /// Consulted by the command-line runner, not by the core.
    pub fail_on_error: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            quiet_success: false,
            filter: None,
            fail_on_error: true,
        }
    }
}

impl HarnessConfig {
    /// Whether a case named `name` passes the filter.
    pub fn selects(&self, name: &str) -> bool {
        match &self.filter {
            Some(pattern) => name.contains(pattern.as_str()),
            None => true,
        }
    }
}
