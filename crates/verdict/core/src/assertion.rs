//! Assertion engine: the six comparison kinds and their failure messages.
//!
//! Evaluation is pure; recording and reporting the outcome is the job of
//! [`TestCase::assert`](crate::TestCase::assert).

use std::fmt;

/// Message recorded when a comparison holds.
pub const SUCCESS_MESSAGE: &str = "OK";

/// Relational comparison between a left and a right value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssertionKind {
    Equal,
    NotEqual,
    GreaterThan,
    LessThan,
    GreaterOrEqual,
    LessOrEqual,
}

impl AssertionKind {
    pub const ALL: [AssertionKind; 6] = [
        AssertionKind::Equal,
        AssertionKind::NotEqual,
        AssertionKind::GreaterThan,
        AssertionKind::LessThan,
        AssertionKind::GreaterOrEqual,
        AssertionKind::LessOrEqual,
    ];

    /// Evaluate the comparison for this kind.
    pub fn holds<L, R>(&self, lhs: &L, rhs: &R) -> bool
    where
        L: PartialOrd<R> + ?Sized,
        R: ?Sized,
    {
        match self {
            AssertionKind::Equal => lhs == rhs,
            AssertionKind::NotEqual => lhs != rhs,
            AssertionKind::GreaterThan => lhs > rhs,
            AssertionKind::LessThan => lhs < rhs,
            AssertionKind::GreaterOrEqual => lhs >= rhs,
            AssertionKind::LessOrEqual => lhs <= rhs,
        }
    }

    /// Human-readable message recorded when the comparison fails.
    pub fn failure_message(&self) -> &'static str {
        match self {
            AssertionKind::Equal => "Given values are not equal, expected equal",
            AssertionKind::NotEqual => "Given values are equal, expected not equal",
            AssertionKind::GreaterThan => "Given values are not greater, expected greater",
            AssertionKind::LessThan => "Given values are not less, expected less",
            AssertionKind::GreaterOrEqual => {
                "Given values are not greater or equal, expected greater or equal"
            }
            AssertionKind::LessOrEqual => "Given values are greater, expected less or equal",
        }
    }

    /// The kind that holds for `(rhs, lhs)` exactly when `self` holds for
    /// `(lhs, rhs)`.
    pub fn swapped(&self) -> AssertionKind {
        match self {
            AssertionKind::Equal => AssertionKind::Equal,
            AssertionKind::NotEqual => AssertionKind::NotEqual,
            AssertionKind::GreaterThan => AssertionKind::LessThan,
            AssertionKind::LessThan => AssertionKind::GreaterThan,
            AssertionKind::GreaterOrEqual => AssertionKind::LessOrEqual,
            AssertionKind::LessOrEqual => AssertionKind::GreaterOrEqual,
        }
    }
}

impl fmt::Display for AssertionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            AssertionKind::Equal => "==",
            AssertionKind::NotEqual => "!=",
            AssertionKind::GreaterThan => ">",
            AssertionKind::LessThan => "<",
            AssertionKind::GreaterOrEqual => ">=",
            AssertionKind::LessOrEqual => "<=",
        };
        f.write_str(symbol)
    }
}

/// Equality-only evaluation for types without an ordering.
pub(crate) fn equality_holds<L, R>(equal: bool, lhs: &L, rhs: &R) -> bool
where
    L: PartialEq<R> + ?Sized,
    R: ?Sized,
{
    if equal {
        lhs == rhs
    } else {
        lhs != rhs
    }
}
