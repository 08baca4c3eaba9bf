//! Helpers for observing the harness from tests.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// In-memory report sink that can be cloned into a [`TestCase`] and read
/// back afterwards.
///
/// [`TestCase`]: crate::TestCase
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        let bytes = self.bytes.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Report lines written so far, without summary blocks.
    pub fn report_lines(&self) -> Vec<String> {
        self.contents()
            .lines()
            .filter(|line| line.starts_with('[') && !line.starts_with("[SUMMARY]"))
            .map(str::to_string)
            .collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut bytes = self.bytes.lock().unwrap_or_else(PoisonError::into_inner);
        bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
