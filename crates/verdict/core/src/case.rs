//! The test case aggregate.
//!
//! A [`TestCase`] owns everything one declared test produces: the log
//! sequence, the resource ledger, the error count and the callables it runs.
//! Construction registers the primary callable, [`TestCase::run_all`] runs
//! it, and finishing the case (explicitly or on drop) validates the resource
//! counter one last time and prints the summary.

use crate::assertion::{self, AssertionKind, SUCCESS_MESSAGE};
use crate::config::HarnessConfig;
use crate::error::{ResourceViolation, RESOURCE_VIOLATION_MESSAGE};
use crate::fatal::{AbortProcess, FatalHandler};
use crate::location::Location;
use crate::record::{LogRecord, ResultKind, TestBody};
use crate::report::{self, CaseOutcome};
use crate::resource::{ResourceLedger, ResourceRecord};
use crate::runner;
use chrono::{DateTime, Utc};
use std::io::{self, Write};
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// One test case and its harness state.
pub struct TestCase {
    name: String,
    location: Location,
    current_location: Location,
    resources: ResourceLedger,
    errors: u32,
    infos: Vec<LogRecord>,
    body: TestBody,
    created_at: Instant,
    started_at: DateTime<Utc>,
    config: HarnessConfig,
    sink: Box<dyn Write + Send>,
    fatal_handler: Box<dyn FatalHandler>,
    ran: bool,
    finished: bool,
}

impl TestCase {
    /// Bind `body` as the primary callable of a new case.
    ///
    /// Reports go to stdout and a fatal violation aborts the process until
    /// replaced with [`with_sink`](Self::with_sink) and
    /// [`with_fatal_handler`](Self::with_fatal_handler).
    pub fn new(name: impl Into<String>, body: TestBody, location: Location) -> Self {
        let name = name.into();
        let primary = LogRecord::callable(name.clone(), body.clone(), location);

        info!(case = %name, at = %location, "test case registered");

        Self {
            name,
            location,
            current_location: location,
            resources: ResourceLedger::new(),
            errors: 0,
            infos: vec![primary],
            body,
            created_at: Instant::now(),
            started_at: Utc::now(),
            config: HarnessConfig::default(),
            sink: Box::new(io::stdout()),
            fatal_handler: Box::new(AbortProcess),
            ran: false,
            finished: false,
        }
    }

    pub fn with_config(mut self, config: HarnessConfig) -> Self {
        self.config = config;
        self
    }

    /// Send report lines and summaries to `sink` instead of stdout.
    pub fn with_sink(mut self, sink: impl Write + Send + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    pub fn with_fatal_handler(mut self, handler: impl FatalHandler + 'static) -> Self {
        self.fatal_handler = Box::new(handler);
        self
    }

    // ------------------------------------------------------------------
    // Log sequence
    // ------------------------------------------------------------------

    /// Append an outcome record and return a copy of it.
    pub fn record_log(
        &mut self,
        kind: ResultKind,
        message: impl Into<String>,
        location: Location,
    ) -> LogRecord {
        self.append(LogRecord::outcome(kind, message, location))
    }

    fn append(&mut self, record: LogRecord) -> LogRecord {
        debug!(
            case = %self.name,
            kind = %record.kind,
            message = %record.message,
            "record appended"
        );
        self.infos.push(record.clone());
        record
    }

    /// Print the line for `record` and count it if it is not a success.
    ///
    /// The record itself is left untouched.
    pub fn report(&mut self, record: &LogRecord) {
        if record.kind.is_error() {
            self.errors += 1;
        }
        if record.kind == ResultKind::Success && self.config.quiet_success {
            return;
        }
        let line = report::record_line(record);
        self.emit(&line);
        self.emit("\n");
    }

    /// Print the summary block for this case.
    pub fn summary(&mut self) {
        let block = report::summary_block(
            self.current_location.file,
            self.errors,
            self.elapsed().as_nanos(),
        );
        self.emit(&block);
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = self.sink.write_all(text.as_bytes()) {
            warn!(case = %self.name, error = %e, "failed to write report output");
        }
    }

    fn flush(&mut self) {
        if let Err(e) = self.sink.flush() {
            warn!(case = %self.name, error = %e, "failed to flush report output");
        }
    }

    // ------------------------------------------------------------------
    // Assertions
    // ------------------------------------------------------------------

    /// Evaluate one comparison and record its outcome.
    pub fn assert<L, R>(&mut self, kind: AssertionKind, lhs: &L, rhs: &R, location: Location)
    where
        L: PartialOrd<R> + ?Sized,
        R: ?Sized,
    {
        self.current_location = location;
        let (held, elapsed) = runner::measure(|| kind.holds(lhs, rhs));
        self.conclude(kind, held, elapsed, location);
    }

    pub fn assert_equal<L, R>(&mut self, lhs: &L, rhs: &R, location: Location)
    where
        L: PartialEq<R> + ?Sized,
        R: ?Sized,
    {
        self.assert_equality(AssertionKind::Equal, lhs, rhs, location);
    }

    pub fn assert_not_equal<L, R>(&mut self, lhs: &L, rhs: &R, location: Location)
    where
        L: PartialEq<R> + ?Sized,
        R: ?Sized,
    {
        self.assert_equality(AssertionKind::NotEqual, lhs, rhs, location);
    }

    pub fn assert_greater<L, R>(&mut self, lhs: &L, rhs: &R, location: Location)
    where
        L: PartialOrd<R> + ?Sized,
        R: ?Sized,
    {
        self.assert(AssertionKind::GreaterThan, lhs, rhs, location);
    }

    pub fn assert_less<L, R>(&mut self, lhs: &L, rhs: &R, location: Location)
    where
        L: PartialOrd<R> + ?Sized,
        R: ?Sized,
    {
        self.assert(AssertionKind::LessThan, lhs, rhs, location);
    }

    pub fn assert_greater_or_equal<L, R>(&mut self, lhs: &L, rhs: &R, location: Location)
    where
        L: PartialOrd<R> + ?Sized,
        R: ?Sized,
    {
        self.assert(AssertionKind::GreaterOrEqual, lhs, rhs, location);
    }

    pub fn assert_less_or_equal<L, R>(&mut self, lhs: &L, rhs: &R, location: Location)
    where
        L: PartialOrd<R> + ?Sized,
        R: ?Sized,
    {
        self.assert(AssertionKind::LessOrEqual, lhs, rhs, location);
    }

    fn assert_equality<L, R>(&mut self, kind: AssertionKind, lhs: &L, rhs: &R, location: Location)
    where
        L: PartialEq<R> + ?Sized,
        R: ?Sized,
    {
        self.current_location = location;
        let equal = kind == AssertionKind::Equal;
        let (held, elapsed) = runner::measure(|| assertion::equality_holds(equal, lhs, rhs));
        self.conclude(kind, held, elapsed, location);
    }

    fn conclude(&mut self, kind: AssertionKind, held: bool, elapsed_ns: u64, location: Location) {
        let (result, message) = if held {
            (ResultKind::Success, SUCCESS_MESSAGE)
        } else {
            (ResultKind::Error, kind.failure_message())
        };
        let mut record = LogRecord::outcome(result, message, location);
        record.elapsed_ns = elapsed_ns;
        let record = self.append(record);
        self.report(&record);
    }

    // ------------------------------------------------------------------
    // Resource tracking
    // ------------------------------------------------------------------

    /// Count an allocation made at `location`.
    ///
    /// The counter is validated first; a violation ends the process through
    /// [`fatal`](Self::fatal).
    pub fn track_allocate(&mut self, label: impl Into<String>, location: Location) {
        if let Err(violation) = self.validate_resource_counter(location) {
            self.fatal(violation);
        }
        self.resources.allocate(label, location);
    }

    /// Validate the counter, count the allocation under `T`'s type name, then
    /// run `allocate`. A violation ends the process before anything is
    /// allocated.
    pub fn track_allocation<T>(&mut self, location: Location, allocate: impl FnOnce() -> T) -> T {
        self.track_allocate(std::any::type_name::<T>(), location);
        allocate()
    }

    /// Count a release made at `location`, then validate the counter.
    pub fn track_deallocate(&mut self, location: Location) {
        self.resources.deallocate();
        if let Err(violation) = self.validate_resource_counter(location) {
            self.fatal(violation);
        }
    }

    /// Check that the resource counter is not negative.
    ///
    /// On violation a Critical record is appended at `location` and reported
    /// before the violation is returned. Nothing is terminated here.
    pub fn validate_resource_counter(&mut self, location: Location) -> Result<(), ResourceViolation> {
        if !self.resources.is_violated() {
            return Ok(());
        }
        let record = self.record_log(ResultKind::Critical, RESOURCE_VIOLATION_MESSAGE, location);
        self.report(&record);
        Err(ResourceViolation {
            counter: self.resources.counter(),
            location,
        })
    }

    /// Unrecoverable end of the run: print the summary and hand `violation`
    /// to the fatal handler, which does not return.
    pub fn fatal(&mut self, violation: ResourceViolation) -> ! {
        error!(
            case = %self.name,
            counter = violation.counter,
            at = %violation.location,
            "resource counter went negative, terminating"
        );
        self.finished = true;
        self.summary();
        self.flush();
        self.fatal_handler.terminate(&violation)
    }

    // ------------------------------------------------------------------
    // Running
    // ------------------------------------------------------------------

    /// Register an additional callable, run after the primary one.
    pub fn register(&mut self, name: impl Into<String>, body: TestBody, location: Location) {
        self.infos.push(LogRecord::callable(name, body, location));
    }

    /// Run the primary callable, then every registered callable, once each
    /// and in order, storing each elapsed time in its own record.
    pub fn run_all(&mut self) {
        if self.ran {
            warn!(case = %self.name, "run_all called again, ignoring");
            return;
        }
        self.ran = true;

        let primary = self.body.clone();
        let elapsed = runner::time_body(&primary, self);
        if let Some(slot) = self.infos.first_mut() {
            slot.elapsed_ns = elapsed;
        }

        // Callables registered while running are picked up too.
        let mut index = 1;
        while index < self.infos.len() {
            if let Some(body) = self.infos[index].callable.clone() {
                let elapsed = runner::time_body(&body, self);
                self.infos[index].elapsed_ns = elapsed;
            }
            index += 1;
        }
    }

    // ------------------------------------------------------------------
    // Teardown
    // ------------------------------------------------------------------

    /// Validate the resource counter, print the summary and return the final
    /// state of the case.
    pub fn finish(mut self) -> CaseOutcome {
        self.close();
        self.outcome()
    }

    fn close(&mut self) {
        if self.finished {
            return;
        }
        if let Err(violation) = self.validate_resource_counter(self.location) {
            self.fatal(violation);
        }
        self.finished = true;
        self.summary();
        self.flush();

        info!(
            case = %self.name,
            errors = self.errors,
            elapsed_ns = %self.elapsed().as_nanos(),
            started_at = %self.started_at.to_rfc3339(),
            "test case finished"
        );
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Where the case was constructed.
    pub fn location(&self) -> Location {
        self.location
    }

    /// Location of the most recent assertion, or of construction.
    pub fn current_location(&self) -> Location {
        self.current_location
    }

    pub fn errors(&self) -> u32 {
        self.errors
    }

    pub fn resource_counter(&self) -> i64 {
        self.resources.counter()
    }

    /// The log sequence, oldest first. Index 0 is the primary callable.
    pub fn records(&self) -> &[LogRecord] {
        &self.infos
    }

    /// Every tracked allocation, including released ones.
    pub fn resource_records(&self) -> &[ResourceRecord] {
        self.resources.records()
    }

    pub fn elapsed(&self) -> Duration {
        self.created_at.elapsed()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn outcome(&self) -> CaseOutcome {
        CaseOutcome {
            name: self.name.clone(),
            file: self.current_location.file.to_string(),
            errors: self.errors,
            duration: self.elapsed(),
        }
    }
}

impl Drop for TestCase {
    fn drop(&mut self) {
        if std::thread::panicking() {
            // A body panicked. Running the fatal path now would panic twice.
            if !self.finished {
                self.finished = true;
                self.summary();
                self.flush();
            }
            return;
        }
        self.close();
    }
}

impl std::fmt::Debug for TestCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestCase")
            .field("name", &self.name)
            .field("location", &self.location)
            .field("errors", &self.errors)
            .field("resource_counter", &self.resources.counter())
            .field("records", &self.infos.len())
            .field("finished", &self.finished)
            .finish()
    }
}
