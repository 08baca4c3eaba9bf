//! Termination path for unrecoverable outcomes.
//!
//! A negative resource counter ends the run. [`TestCase::fatal`] records,
//! reports and summarizes first, then hands the violation to the case's
//! [`FatalHandler`], which never returns.
//!
//! [`TestCase::fatal`]: crate::TestCase::fatal

use crate::error::ResourceViolation;

/// Decides how the process ends after a fatal violation.
pub trait FatalHandler: Send + Sync {
    fn terminate(&self, violation: &ResourceViolation) -> !;
}

/// Abort the process immediately. No unwinding, no destructors.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbortProcess;

impl FatalHandler for AbortProcess {
    fn terminate(&self, _violation: &ResourceViolation) -> ! {
        std::process::abort()
    }
}

/// Panic with the violation as payload.
///
/// Meant for in-process tests of the harness: the panic stops the test body
/// like an abort would, but `catch_unwind` or `#[should_panic]` can observe
/// it. The payload is the [`ResourceViolation`] itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanicOnFatal;

impl FatalHandler for PanicOnFatal {
    fn terminate(&self, violation: &ResourceViolation) -> ! {
        std::panic::panic_any(violation.clone())
    }
}
