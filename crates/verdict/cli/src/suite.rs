//! Built-in demonstration suite.

use std::thread;
use std::time::Duration;
use verdict::{
    body, check_eq, check_ge, check_gt, check_le, check_lt, check_ne, location, register,
    track_alloc, track_dealloc, Registry, TestCase,
};

fn arithmetic_holds(case: &mut TestCase) {
    check_eq!(case, 2 + 2, 4);
}

fn arithmetic_mismatch(case: &mut TestCase) {
    check_eq!(case, 2 + 2, 5);
}

fn ordering_checks(case: &mut TestCase) {
    check_ne!(case, "left", "right");
    check_gt!(case, 3.5, 1.25);
    check_lt!(case, 'a', 'b');
    check_ge!(case, u64::MAX, u64::MAX);
    check_le!(case, -1_i32, 0);
}

fn timed_callables(case: &mut TestCase) {
    let buffer = track_alloc!(case, vec![0_u8; 64]);
    check_eq!(case, buffer.len(), 64);
    track_dealloc!(case, buffer);

    for (name, millis) in [("warm_cache", 1_u64), ("cold_cache", 2)] {
        case.register(
            name,
            body(move |case| {
                thread::sleep(Duration::from_millis(millis));
                check_gt!(case, millis, 0);
            }),
            location!(),
        );
    }
}

fn double_release(case: &mut TestCase) {
    let value = track_alloc!(case, Box::new(42_u32));
    track_dealloc!(case, value);
    track_dealloc!(case);
    // Not reached: the second release ends the process.
    check_eq!(case, 1, 2);
}

/// Every built-in case, in run order. `double_release` is last since it
/// terminates the process.
pub fn registry() -> Registry {
    let mut registry = Registry::new();
    register!(registry, arithmetic_holds);
    register!(registry, arithmetic_mismatch);
    register!(registry, ordering_checks);
    register!(registry, timed_callables);
    register!(registry, double_release);
    registry
}

/// Cases that finish without terminating the process.
pub fn default_selection() -> Vec<String> {
    registry()
        .names()
        .into_iter()
        .filter(|name| *name != "double_release")
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdict::testing::SharedBuffer;
    use verdict::{HarnessConfig, PanicOnFatal};

    #[test]
    fn suite_lists_all_cases() {
        assert_eq!(
            registry().names(),
            vec![
                "arithmetic_holds",
                "arithmetic_mismatch",
                "ordering_checks",
                "timed_callables",
                "double_release"
            ]
        );
    }

    #[test]
    fn default_selection_skips_fatal_case() {
        let names = default_selection();
        assert_eq!(names.len(), 4);
        assert!(!names.iter().any(|n| n == "double_release"));
    }

    #[test]
    fn non_fatal_cases_report_one_error() {
        let selected = registry().select(&default_selection()).unwrap();
        let buffer = SharedBuffer::new();
        let report = selected.run_with(&HarnessConfig::default(), |case| {
            case.with_sink(buffer.clone()).with_fatal_handler(PanicOnFatal)
        });

        assert_eq!(report.outcomes.len(), 4);
        assert_eq!(report.total_errors(), 1);
        assert_eq!(report.failed_cases()[0].name, "arithmetic_mismatch");
    }
}
