// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! How recovery reaches the views: right away, or when an animation runs.

use alloc::vec::Vec;

use crate::recover::RecoveryTrace;
use crate::tree::{RecoveryWork, ViewTree};

/// Carries recovery work to the tree.
///
/// Hosts that cross-fade from the skeleton to the content queue the work and
/// commit it from their animation callback; the tree discards work whose view
/// has gone stale in the meantime.
pub trait Transition {
    /// Accepts recovery of one view.
    fn run(&mut self, views: &mut ViewTree, work: RecoveryWork);
}

/// Commits recovery immediately, reporting writes to the wrapped trace.
#[derive(Debug, Default)]
pub struct ImmediateTransition<R = ()>(pub R);

impl<R: RecoveryTrace> Transition for ImmediateTransition<R> {
    fn run(&mut self, views: &mut ViewTree, work: RecoveryWork) {
        views.commit(work, &mut self.0);
    }
}

/// Queues recovery until [`flush`](Self::flush).
#[derive(Debug, Default)]
pub struct DeferredTransition {
    pending: Vec<RecoveryWork>,
}

impl DeferredTransition {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of queued recoveries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Commits everything queued, in order. Returns how many recoveries applied.
    pub fn flush(&mut self, views: &mut ViewTree, trace: &mut dyn RecoveryTrace) -> usize {
        self.pending
            .drain(..)
            .filter(|work| views.commit(*work, &mut *trace))
            .count()
    }
}

impl Transition for DeferredTransition {
    fn run(&mut self, _views: &mut ViewTree, work: RecoveryWork) {
        self.pending.push(work);
    }
}
