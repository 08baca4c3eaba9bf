//! Log records: one entry per assertion outcome or bound callable.

use crate::case::TestCase;
use crate::location::Location;
use std::fmt;
use std::sync::Arc;

/// A callable run by a test case. It receives the case so its checks are
/// recorded on it.
pub type TestBody = Arc<dyn Fn(&mut TestCase) + Send + Sync>;

/// Wrap a function or closure as a [`TestBody`].
pub fn body<F>(f: F) -> TestBody
where
    F: Fn(&mut TestCase) + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Outcome classification of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultKind {
    /// A comparison did not hold. Recoverable.
    Error,
    /// A comparison held, or a callable slot.
    Success,
    /// The resource counter went negative. Unrecoverable.
    Critical,
}

impl ResultKind {
    /// Tag printed at the start of a report line.
    pub fn tag(&self) -> &'static str {
        match self {
            ResultKind::Critical => "CRITICAL",
            ResultKind::Success => "SUCCESS",
            ResultKind::Error => "FAILED",
        }
    }

    /// Whether a reported record of this kind counts as an error.
    pub fn is_error(&self) -> bool {
        !matches!(self, ResultKind::Success)
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A single entry of a test case's log sequence.
#[derive(Clone)]
pub struct LogRecord {
    pub elapsed_ns: u64,
    pub kind: ResultKind,
    pub message: String,
    pub callable: Option<TestBody>,
    pub location: Location,
}

impl LogRecord {
    /// Record an outcome; timing is filled in later, if at all.
    pub fn outcome(kind: ResultKind, message: impl Into<String>, location: Location) -> Self {
        Self {
            elapsed_ns: 0,
            kind,
            message: message.into(),
            callable: None,
            location,
        }
    }

    /// Slot for a callable that the run step will time.
    pub fn callable(name: impl Into<String>, body: TestBody, location: Location) -> Self {
        Self {
            elapsed_ns: 0,
            kind: ResultKind::Success,
            message: name.into(),
            callable: Some(body),
            location,
        }
    }

    pub fn has_callable(&self) -> bool {
        self.callable.is_some()
    }
}

impl fmt::Debug for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogRecord")
            .field("elapsed_ns", &self.elapsed_ns)
            .field("kind", &self.kind)
            .field("message", &self.message)
            .field("callable", &self.callable.as_ref().map(|_| "<fn>"))
            .field("location", &self.location)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_match_console_format() {
        assert_eq!(ResultKind::Success.tag(), "SUCCESS");
        assert_eq!(ResultKind::Error.tag(), "FAILED");
        assert_eq!(ResultKind::Critical.tag(), "CRITICAL");
    }

    #[test]
    fn only_success_is_not_an_error() {
        assert!(!ResultKind::Success.is_error());
        assert!(ResultKind::Error.is_error());
        assert!(ResultKind::Critical.is_error());
    }

    #[test]
    fn outcome_starts_untimed() {
        let record = LogRecord::outcome(ResultKind::Success, "OK", Location::unknown());
        assert_eq!(record.elapsed_ns, 0);
        assert!(!record.has_callable());
    }

    #[test]
    fn callable_slot_keeps_body() {
        let record = LogRecord::callable("aux", body(|_| {}), Location::unknown());
        assert!(record.has_callable());
        assert_eq!(record.message, "aux");
        assert!(format!("{:?}", record).contains("<fn>"));
    }
}
