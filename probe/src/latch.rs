/*
Copyright 2026 Confidential Containers Contributors.

SPDX-License-Identifier: Apache-2.0
*/

use std::sync::atomic::{AtomicBool, Ordering};

/// One-way flag recording that every peer pod on this node has been seen
/// `Running`. It starts unset and, once set, stays set for the life of the
/// process.
#[derive(Debug, Default)]
pub struct ReadinessLatch {
    latched: AtomicBool,
}

impl ReadinessLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_latched(&self) -> bool {
        self.latched.load(Ordering::Acquire)
    }

    /// Sets the latch. Returns true only for the call that performed the
    /// transition.
    pub fn set_latched(&self) -> bool {
        !self.latched.swap(true, Ordering::AcqRel)
    }
}
