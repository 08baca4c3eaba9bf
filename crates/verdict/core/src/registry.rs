//! Explicit test registry.
//!
//! Tests are registered by name with an explicit call at startup and run in
//! registration order by [`Registry::run`]. Each entry gets its own
//! [`TestCase`], finished before the next one starts.

use crate::case::TestCase;
use crate::config::HarnessConfig;
use crate::error::{HarnessError, HarnessResult};
use crate::location::Location;
use crate::record::TestBody;
use crate::report::RunReport;
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};
use std::time::Instant;
use tracing::info;

/// A registered test: its name, body and declaration site.
#[derive(Clone)]
pub struct RegisteredCase {
    pub name: String,
    pub body: TestBody,
    pub location: Location,
}

impl std::fmt::Debug for RegisteredCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredCase")
            .field("name", &self.name)
            .field("location", &self.location)
            .finish_non_exhaustive()
    }
}

/// Ordered list of registered tests.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    cases: Vec<RegisteredCase>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a test. Names are not required to be unique.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        body: TestBody,
        location: Location,
    ) -> &mut Self {
        self.cases.push(RegisteredCase {
            name: name.into(),
            body,
            location,
        });
        self
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn entries(&self) -> &[RegisteredCase] {
        &self.cases
    }

    pub fn names(&self) -> Vec<&str> {
        self.cases.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&RegisteredCase> {
        self.cases.iter().find(|c| c.name == name)
    }

    /// A registry holding only `names`, in the order given.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> HarnessResult<Registry> {
        let mut selected = Registry::new();
        for name in names {
            let name = name.as_ref();
            let case = self
                .get(name)
                .ok_or_else(|| HarnessError::UnknownCase(name.to_string()))?;
            selected.cases.push(case.clone());
        }
        Ok(selected)
    }

    /// Run every selected test with stdout reporting and aborting fatal path.
    pub fn run(&self, config: &HarnessConfig) -> RunReport {
        self.run_with(config, |case| case)
    }

    /// Run every selected test, letting `prepare` adjust each case (sink,
    /// fatal handler) before it runs.
    pub fn run_with<F>(&self, config: &HarnessConfig, mut prepare: F) -> RunReport
    where
        F: FnMut(TestCase) -> TestCase,
    {
        let start = Instant::now();
        let mut report = RunReport::new();

        for entry in self.cases.iter().filter(|c| config.selects(&c.name)) {
            let case = TestCase::new(entry.name.clone(), entry.body.clone(), entry.location)
                .with_config(config.clone());
            let mut case = prepare(case);
            case.run_all();
            report.push(case.finish());
        }

        report.duration = start.elapsed();
        info!(
            cases = report.outcomes.len(),
            errors = report.total_errors(),
            elapsed = ?report.duration,
            "run complete: {} passed, {} failed",
            report.passed_count(),
            report.failed_cases().len()
        );
        report
    }
}

static GLOBAL: LazyLock<Mutex<Registry>> = LazyLock::new(|| Mutex::new(Registry::new()));

/// The process-wide registry used by [`register!`](crate::register).
pub fn global() -> MutexGuard<'static, Registry> {
    GLOBAL.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Run the process-wide registry.
///
/// The registry is copied out first, so bodies may register further tests
/// without deadlocking; those run on the next call.
pub fn run_registered(config: &HarnessConfig) -> RunReport {
    let registry = global().clone();
    registry.run(config)
}
