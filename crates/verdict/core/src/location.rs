//! Call-site capture.
//!
//! A [`Location`] is taken where an assertion, registration or tracking macro
//! is written, never inside the harness itself. The macros in
//! [`crate::macros`] build it with [`location!`](crate::location) and pass it
//! to the matching [`TestCase`](crate::TestCase) method.

use std::fmt;

/// Immutable snapshot of a source position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
    pub function: &'static str,
}

impl Location {
    /// Build a location from its parts.
    ///
    /// `function` is trimmed of closure segments, so a check written inside
    /// `|case| { ... }` reports the function that declares the closure.
    pub fn new(file: &'static str, line: u32, column: u32, function: &'static str) -> Self {
        Self {
            file,
            line,
            column,
            function: trim_function_path(function),
        }
    }

    /// Location used when no call site is known.
    pub const fn unknown() -> Self {
        Self {
            file: "<unknown>",
            line: 0,
            column: 0,
            function: "<unknown>",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{} ({})",
            self.file, self.line, self.column, self.function
        )
    }
}

/// Strip the probe item and any closure frames from a `type_name` path.
#[doc(hidden)]
pub fn trim_function_path(path: &'static str) -> &'static str {
    let mut path = path.strip_suffix("::__verdict_here").unwrap_or(path);
    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }
    path
}

#[doc(hidden)]
pub fn type_name_of<T>(_: T) -> &'static str {
    std::any::type_name::<T>()
}

/// Capture the [`Location`] of the invoking statement.
#[macro_export]
macro_rules! location {
    () => {{
        fn __verdict_here() {}
        $crate::Location::new(
            file!(),
            line!(),
            column!(),
            $crate::location::type_name_of(__verdict_here),
        )
    }};
}
