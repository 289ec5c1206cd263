// ABOUTME: Per-action "request in flight" flag guarding against duplicate submissions
// ABOUTME: The flag is released when the RAII guard drops, including on early error returns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::atomic::{AtomicBool, Ordering};

/// Busy flag for one kind of remote action
#[derive(Debug, Default)]
pub struct InFlight {
    busy: AtomicBool,
}

impl InFlight {
    /// Create a cleared flag
    #[must_use]
    pub const fn new() -> Self {
        Self {
            busy: AtomicBool::new(false),
        }
    }

    /// Set the flag, or return `None` if it is already set
    #[must_use]
    pub fn try_acquire(&self) -> Option<InFlightGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard { flag: &self.busy })
    }

    /// Whether a request is currently in flight
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Clears the flag on drop
#[derive(Debug)]
pub struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_releases_on_drop() {
        let flag = InFlight::new();
        {
            let guard = flag.try_acquire();
            assert!(guard.is_some());
            assert!(flag.is_set());
            assert!(flag.try_acquire().is_none());
        }
        assert!(!flag.is_set());
        assert!(flag.try_acquire().is_some());
    }
}
