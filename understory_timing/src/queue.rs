// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deadline-ordered timer storage.

use alloc::vec::Vec;
use core::fmt;

/// Handle to a timer scheduled in a [`TimerQueue`].
///
/// Ids are allocated from a monotonically increasing counter and are never
/// reused by the same queue, so a stale id can only ever miss.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

impl TimerId {
    /// Returns the raw counter value (for diagnostics only).
    #[must_use]
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TimerId").field(&self.0).finish()
    }
}

#[derive(Debug)]
struct Entry<T> {
    deadline: u64,
    id: TimerId,
    payload: T,
}

/// A queue of pending payloads ordered by deadline.
///
/// Entries are kept in a vector sorted by `(deadline, id)`, so timers with the
/// same deadline fire in scheduling order. Typical UI workloads keep only a
/// handful of timers alive, which makes a sorted vector cheaper than a heap
/// with lazy deletion and lets [`cancel`](Self::cancel) remove eagerly.
#[derive(Debug)]
pub struct TimerQueue<T> {
    entries: Vec<Entry<T>>,
    next_id: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Returns the number of pending timers.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no timers are pending.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Schedules `payload` to become due at `deadline`.
    pub fn schedule(&mut self, deadline: u64, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let idx = self
            .entries
            .partition_point(|e| (e.deadline, e.id) <= (deadline, id));
        self.entries.insert(
            idx,
            Entry {
                deadline,
                id,
                payload,
            },
        );
        id
    }

    /// Schedules `payload` to become due `delay` ticks after `now`.
    ///
    /// The deadline saturates at `u64::MAX`.
    pub fn schedule_after(&mut self, now: u64, delay: u64, payload: T) -> TimerId {
        self.schedule(now.saturating_add(delay), payload)
    }

    /// Cancels a pending timer, returning its payload.
    ///
    /// Returns `None` if the timer already fired or was canceled before.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        let idx = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(idx).payload)
    }

    /// Returns `true` if `id` is still waiting to fire.
    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Returns the deadline of a pending timer.
    #[must_use]
    pub fn deadline(&self, id: TimerId) -> Option<u64> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.deadline)
    }

    /// Returns the earliest pending deadline.
    ///
    /// Hosts arm their platform timer for this instant.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.first().map(|e| e.deadline)
    }

    /// Removes and returns the earliest timer whose deadline is `<= now`.
    pub fn pop_due(&mut self, now: u64) -> Option<(TimerId, T)> {
        if self.entries.first()?.deadline > now {
            return None;
        }
        let entry = self.entries.remove(0);
        Some((entry.id, entry.payload))
    }

    /// Removes every timer whose deadline is `<= now`, in firing order.
    pub fn drain_due(&mut self, now: u64) -> Vec<(TimerId, T)> {
        let split = self.entries.partition_point(|e| e.deadline <= now);
        self.entries
            .drain(..split)
            .map(|e| (e.id, e.payload))
            .collect()
    }

    /// Drops every pending timer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
