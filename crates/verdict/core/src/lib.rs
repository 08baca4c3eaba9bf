//! Verdict: a minimal in-process unit-testing harness.
//!
//! Each test is a [`TestCase`] bound to one callable. Checks made from the
//! callable are evaluated by the assertion engine and appended to the case's
//! log as [`LogRecord`]s, each printed as it is recorded. A manual resource
//! counter catches releases of things never allocated; a negative counter is
//! unrecoverable and ends the process. Finishing a case prints its summary.
//!
//! # Outcomes
//!
//! - **Success**: the comparison held.
//! - **Error**: the comparison failed; recorded, counted, execution continues.
//! - **Critical**: the resource counter went negative; recorded, summarized,
//!   then the process terminates.
//!
//! # Example
//!
//! ```rust,no_run
//! use verdict::{check_eq, register, HarnessConfig, TestCase};
//!
//! fn arithmetic(case: &mut TestCase) {
//!     check_eq!(case, 2 + 2, 4);
//! }
//!
//! register!(arithmetic);
//! let report = verdict::run_registered(&HarnessConfig::default());
//! std::process::exit(if report.is_success() { 0 } else { 1 });
//! ```

pub mod assertion;
pub mod case;
pub mod config;
pub mod error;
pub mod fatal;
pub mod location;
pub mod macros;
pub mod record;
pub mod registry;
pub mod report;
pub mod resource;
pub mod runner;
pub mod testing;

pub use assertion::AssertionKind;
pub use case::TestCase;
pub use config::HarnessConfig;
pub use error::{HarnessError, HarnessResult, ResourceViolation};
pub use fatal::{AbortProcess, FatalHandler, PanicOnFatal};
pub use location::Location;
pub use record::{body, LogRecord, ResultKind, TestBody};
pub use registry::{global, run_registered, RegisteredCase, Registry};
pub use report::{CaseOutcome, RunReport};
pub use resource::{ResourceLedger, ResourceRecord};
