// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Timing: host-agnostic timer queue primitives for UI runtimes.
//!
//! UI toolkits frequently need to post a small unit of work that should run
//! "later, on the UI thread": delayed reveal of a loading indicator, tooltip
//! hover delays, debounced relayout. This crate provides the bookkeeping for
//! that pattern without owning a clock or an event loop.
//!
//! - [`TimerQueue`]: deadline-ordered storage of pending payloads.
//! - [`TimerId`]: handle used to cancel a pending timer.
//!
//! Time is expressed in caller-defined `u64` ticks (milliseconds, nanoseconds,
//! display-link frames; the queue does not care). The host is expected to:
//!
//! - Schedule work with [`TimerQueue::schedule`] or [`TimerQueue::schedule_after`].
//! - Arm its platform timer for [`TimerQueue::next_deadline`].
//! - Drain fired payloads with [`TimerQueue::pop_due`] when the timer fires.
//!
//! Cancellation is synchronous: once [`TimerQueue::cancel`] returns, the
//! payload has been dropped from the queue and can never be yielded by
//! [`TimerQueue::pop_due`].
//!
//! ## Example
//!
//! ```rust
//! use understory_timing::TimerQueue;
//!
//! let mut timers = TimerQueue::new();
//! let tooltip = timers.schedule_after(0, 500, "tooltip");
//! let _reveal = timers.schedule_after(0, 200, "reveal");
//!
//! // The pointer left before the tooltip delay elapsed.
//! assert_eq!(timers.cancel(tooltip), Some("tooltip"));
//!
//! assert_eq!(timers.next_deadline(), Some(200));
//! assert_eq!(timers.pop_due(250).map(|(_, p)| p), Some("reveal"));
//! assert!(timers.pop_due(1_000).is_none());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod queue;

pub use queue::{TimerId, TimerQueue};
