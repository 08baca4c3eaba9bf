//! Manual allocation tracking.
//!
//! The ledger keeps a signed counter of allocations believed live and an
//! audit list of where each allocation happened. Releases only decrement the
//! counter; audit entries are never removed, and the counter alone carries
//! the "never negative" invariant.

use crate::location::Location;

/// One tracked allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub label: String,
    pub location: Location,
}

/// Counter plus append-only audit log.
#[derive(Debug, Clone, Default)]
pub struct ResourceLedger {
    counter: i64,
    records: Vec<ResourceRecord>,
}

impl ResourceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count an allocation and remember where it happened.
    pub fn allocate(&mut self, label: impl Into<String>, location: Location) {
        self.counter += 1;
        self.records.push(ResourceRecord {
            label: label.into(),
            location,
        });
    }

    /// Count a release.
    pub fn deallocate(&mut self) {
        self.counter -= 1;
    }

    pub fn counter(&self) -> i64 {
        self.counter
    }

    /// The counter went below zero: something was released twice or never
    /// allocated.
    pub fn is_violated(&self) -> bool {
        self.counter < 0
    }

    /// Every allocation ever tracked, in order.
    pub fn records(&self) -> &[ResourceRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocate_then_release() {
        let mut ledger = ResourceLedger::new();
        ledger.allocate("i32", Location::unknown());
        ledger.allocate("String", Location::unknown());
        ledger.deallocate();

        assert_eq!(ledger.counter(), 1);
        assert!(!ledger.is_violated());
    }

    #[test]
    fn audit_log_survives_release() {
        let mut ledger = ResourceLedger::new();
        ledger.allocate("Vec<u8>", Location::unknown());
        ledger.deallocate();

        assert_eq!(ledger.counter(), 0);
        assert_eq!(ledger.records().len(), 1);
        assert_eq!(ledger.records()[0].label, "Vec<u8>");
    }

    #[test]
    fn release_without_allocation_violates() {
        let mut ledger = ResourceLedger::new();
        ledger.deallocate();
        assert_eq!(ledger.counter(), -1);
        assert!(ledger.is_violated());
    }
}
