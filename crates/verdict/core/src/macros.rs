//! Call-site macros.
//!
//! Each macro captures [`location!`](crate::location) where it is written and
//! forwards to the matching [`TestCase`](crate::TestCase) method.

/// Record that `lhs == rhs`.
#[macro_export]
macro_rules! check_eq {
    ($case:expr, $lhs:expr, $rhs:expr $(,)?) => {
        $case.assert_equal(&$lhs, &$rhs, $crate::location!())
    };
}

/// Record that `lhs != rhs`.
#[macro_export]
macro_rules! check_ne {
    ($case:expr, $lhs:expr, $rhs:expr $(,)?) => {
        $case.assert_not_equal(&$lhs, &$rhs, $crate::location!())
    };
}

/// Record that `lhs > rhs`.
#[macro_export]
macro_rules! check_gt {
    ($case:expr, $lhs:expr, $rhs:expr $(,)?) => {
        $case.assert_greater(&$lhs, &$rhs, $crate::location!())
    };
}

/// Record that `lhs < rhs`.
#[macro_export]
macro_rules! check_lt {
    ($case:expr, $lhs:expr, $rhs:expr $(,)?) => {
        $case.assert_less(&$lhs, &$rhs, $crate::location!())
    };
}

/// Record that `lhs >= rhs`.
#[macro_export]
macro_rules! check_ge {
    ($case:expr, $lhs:expr, $rhs:expr $(,)?) => {
        $case.assert_greater_or_equal(&$lhs, &$rhs, $crate::location!())
    };
}

/// Record that `lhs <= rhs`.
#[macro_export]
macro_rules! check_le {
    ($case:expr, $lhs:expr, $rhs:expr $(,)?) => {
        $case.assert_less_or_equal(&$lhs, &$rhs, $crate::location!())
    };
}

/// Count an allocation labelled with the type name of `value`, then evaluate
/// `value` and yield it. The counter is validated before `value` runs.
#[macro_export]
macro_rules! track_alloc {
    ($case:expr, $value:expr $(,)?) => {
        $case.track_allocation($crate::location!(), || $value)
    };
}

/// Count a release, then drop `value` if one is given.
#[macro_export]
macro_rules! track_dealloc {
    ($case:expr, $value:expr $(,)?) => {{
        $case.track_deallocate($crate::location!());
        ::std::mem::drop($value);
    }};
    ($case:expr $(,)?) => {
        $case.track_deallocate($crate::location!())
    };
}

/// Register a test function by name.
///
/// `register!(my_test)` adds it to the process-wide registry;
/// `register!(registry, my_test)` adds it to `registry`.
#[macro_export]
macro_rules! register {
    ($test:ident $(,)?) => {{
        $crate::registry::global().register(
            stringify!($test),
            $crate::body($test),
            $crate::location!(),
        );
    }};
    ($registry:expr, $test:ident $(,)?) => {{
        $registry.register(stringify!($test), $crate::body($test), $crate::location!());
    }};
}

#[cfg(test)]
mod tests {
    use crate::testing::SharedBuffer;
    use crate::{body, PanicOnFatal, Registry, ResultKind, TestCase};

    fn case() -> (TestCase, SharedBuffer) {
        let buffer = SharedBuffer::new();
        let case = TestCase::new("macros", body(|_| {}), crate::location!())
            .with_sink(buffer.clone())
            .with_fatal_handler(PanicOnFatal);
        (case, buffer)
    }

    #[test]
    fn check_macros_capture_their_own_line() {
        let (mut case, _) = case();
        let line = line!() + 1;
        check_eq!(case, 2 + 2, 4);

        let record = case.records().last().unwrap();
        assert_eq!(record.location.line, line);
        assert_eq!(record.location.file, file!());
        assert!(record
            .location
            .function
            .ends_with("check_macros_capture_their_own_line"));
    }

    #[test]
    fn every_check_macro_records_once() {
        let (mut case, _) = case();
        check_eq!(case, 1, 1);
        check_ne!(case, 1, 2);
        check_gt!(case, 2, 1);
        check_lt!(case, 1, 2);
        check_ge!(case, 2, 2);
        check_le!(case, 3, 2);

        assert_eq!(case.records().len(), 7);
        assert_eq!(case.errors(), 1);
        assert_eq!(case.records()[6].kind, ResultKind::Error);
    }

    #[test]
    fn tracking_macros_balance() {
        let (mut case, _) = case();
        let boxed = track_alloc!(case, Box::new(5_i32));
        assert_eq!(*boxed, 5);
        assert_eq!(case.resource_counter(), 1);
        assert!(case.resource_records()[0].label.contains("Box<i32>"));

        track_dealloc!(case, boxed);
        assert_eq!(case.resource_counter(), 0);
    }

    #[test]
    #[should_panic]
    fn dealloc_without_alloc_is_fatal() {
        let (mut case, _) = case();
        track_dealloc!(case);
    }

    fn sample_test(case: &mut TestCase) {
        check_eq!(case, "a", "a");
    }

    #[test]
    fn register_macro_uses_function_name() {
        let mut registry = Registry::new();
        register!(registry, sample_test);
        assert_eq!(registry.names(), vec!["sample_test"]);
    }
}
