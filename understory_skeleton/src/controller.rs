// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Activation and deactivation of skeletons over a view hierarchy.
//!
//! Only skeletonable views are visited. A skeletonable view whose children
//! include skeletonable views is a container: it switches status but shows no
//! placeholder of its own. A skeletonable view without skeletonable children
//! is a leaf: its state is saved, its content cleared and a placeholder
//! attached.

use alloc::vec::Vec;

use understory_timing::{TimerId, TimerQueue};

use crate::appearance::SkeletonAppearance;
use crate::config::SkeletonConfig;
use crate::placeholder::{PlaceholderLayer, placeholder_geometry};
use crate::recover::{Recoverable, prepare_view_for_skeleton};
use crate::transition::Transition;
use crate::tree::ViewTree;
use crate::types::{SkeletonFlags, SkeletonStatus, ViewId};
use crate::view::View;

#[derive(Debug)]
struct PendingShow {
    root: ViewId,
    config: SkeletonConfig,
}

/// Drives skeleton activation for the views of a [`ViewTree`].
///
/// The controller owns the global [`SkeletonAppearance`] and the queue of
/// delayed activations. It never owns views or placeholder layers; both are
/// passed in per call.
#[derive(Debug, Default)]
pub struct SkeletonController {
    appearance: SkeletonAppearance,
    timers: TimerQueue<PendingShow>,
}

impl SkeletonController {
    /// Creates a controller using `appearance` for unset per-view settings.
    #[must_use]
    pub fn new(appearance: SkeletonAppearance) -> Self {
        Self {
            appearance,
            timers: TimerQueue::new(),
        }
    }

    /// The appearance defaults in use.
    #[must_use]
    pub fn appearance(&self) -> &SkeletonAppearance {
        &self.appearance
    }

    /// Shows the skeleton of `root` and its skeletonable descendants.
    ///
    /// Cancels a delayed show pending on `root`. Returns the number of leaves
    /// activated; views already showing their skeleton are left alone.
    pub fn show_skeleton(
        &mut self,
        views: &mut ViewTree,
        root: ViewId,
        config: &SkeletonConfig,
        layer: &mut dyn PlaceholderLayer,
    ) -> usize {
        self.cancel_delayed_show(views, root);
        let activated = self.activate(views, root, config, layer);
        tracing::debug!(view = ?root, activated, "skeleton shown");
        activated
    }

    /// Shows the skeleton of `root` once `delay` ticks have passed after `now`.
    ///
    /// A delayed show already pending on `root` is replaced. Returns `None`
    /// if `root` is not alive.
    pub fn show_skeleton_after(
        &mut self,
        views: &mut ViewTree,
        root: ViewId,
        config: SkeletonConfig,
        now: u64,
        delay: u64,
    ) -> Option<TimerId> {
        let view = views.get_mut(root)?;
        if let Some(previous) = view.pending_show.take() {
            self.timers.cancel(previous);
        }
        let id = self
            .timers
            .schedule_after(now, delay, PendingShow { root, config });
        view.pending_show = Some(id);
        tracing::debug!(view = ?root, delay, timer = ?id, "delayed skeleton scheduled");
        Some(id)
    }

    /// Cancels the delayed show pending on `root`.
    ///
    /// Returns `true` if one was pending. Once this returns, the canceled
    /// show can never run.
    pub fn cancel_delayed_show(&mut self, views: &mut ViewTree, root: ViewId) -> bool {
        let Some(id) = views.get_mut(root).and_then(|v| v.pending_show.take()) else {
            return false;
        };
        let canceled = self.timers.cancel(id).is_some();
        if canceled {
            tracing::debug!(view = ?root, timer = ?id, "delayed skeleton canceled");
        }
        canceled
    }

    /// Deadline of the earliest pending delayed show.
    ///
    /// Hosts arm their platform timer for this and call
    /// [`advance`](Self::advance) when it fires.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    /// Runs every delayed show due at `now`.
    ///
    /// Shows whose root was removed are dropped. Returns the number of leaves
    /// activated.
    pub fn advance(
        &mut self,
        now: u64,
        views: &mut ViewTree,
        layer: &mut dyn PlaceholderLayer,
    ) -> usize {
        let mut activated = 0;
        while let Some((id, pending)) = self.timers.pop_due(now) {
            match views.get_mut(pending.root) {
                Some(view) if view.pending_show == Some(id) => {
                    view.pending_show = None;
                    let count = self.activate(views, pending.root, &pending.config, layer);
                    tracing::debug!(
                        view = ?pending.root,
                        timer = ?id,
                        activated = count,
                        "delayed skeleton fired"
                    );
                    activated += count;
                }
                _ => {
                    tracing::debug!(view = ?pending.root, timer = ?id, "delayed skeleton dropped");
                }
            }
        }
        activated
    }

    /// Hides the skeleton of `root` and its skeletonable descendants.
    ///
    /// A delayed show pending on `root` is canceled first. Each active leaf
    /// has its placeholder detached and its recovery handed to `transition`.
    /// `forced` restores saved values even where the host changed them.
    /// Returns the number of leaves deactivated.
    pub fn hide_skeleton(
        &mut self,
        views: &mut ViewTree,
        root: ViewId,
        forced: bool,
        layer: &mut dyn PlaceholderLayer,
        transition: &mut dyn Transition,
    ) -> usize {
        self.cancel_delayed_show(views, root);

        let mut deactivated = 0;
        let mut stack = alloc::vec![root];
        while let Some(id) = stack.pop() {
            let Some(children) = skeletonable_children(views, id) else {
                continue;
            };
            let Some(view) = views.get_mut(id) else {
                continue;
            };
            let was_active = view.status == SkeletonStatus::On;
            view.status = SkeletonStatus::Off;
            if !children.is_empty() {
                stack.extend(children.into_iter().rev());
                continue;
            }
            if !was_active {
                continue;
            }
            deactivated += 1;
            if view.flags.contains(SkeletonFlags::HIDDEN_WHEN_ACTIVE) {
                view.hidden = false;
                continue;
            }
            layer.detach(id);
            if let Some(work) = views.recover_view_state(id, forced) {
                transition.run(views, work);
            }
        }
        tracing::debug!(view = ?root, forced, deactivated, "skeleton hidden");
        deactivated
    }

    /// Recomputes placeholder geometry of the active leaves under `root`.
    ///
    /// Call after layout changed the bounds of skeleton views. Returns the
    /// number of placeholders updated.
    pub fn update_skeleton(
        &self,
        views: &ViewTree,
        root: ViewId,
        layer: &mut dyn PlaceholderLayer,
    ) -> usize {
        let mut updated = 0;
        let mut stack = alloc::vec![root];
        while let Some(id) = stack.pop() {
            let Some(children) = skeletonable_children(views, id) else {
                continue;
            };
            if !children.is_empty() {
                stack.extend(children.into_iter().rev());
                continue;
            }
            let Some(view) = views.get(id) else {
                continue;
            };
            if view.is_skeleton_active() && !view.flags.contains(SkeletonFlags::HIDDEN_WHEN_ACTIVE)
            {
                layer.update(id, &placeholder_geometry(view, &self.appearance));
                updated += 1;
            }
        }
        tracing::trace!(view = ?root, updated, "skeleton updated");
        updated
    }

    fn activate(
        &self,
        views: &mut ViewTree,
        root: ViewId,
        config: &SkeletonConfig,
        layer: &mut dyn PlaceholderLayer,
    ) -> usize {
        let mut activated = 0;
        let mut stack = alloc::vec![root];
        while let Some(id) = stack.pop() {
            let Some(children) = skeletonable_children(views, id) else {
                continue;
            };
            let Some(view) = views.get_mut(id) else {
                continue;
            };
            if !children.is_empty() {
                view.status = SkeletonStatus::On;
                stack.extend(children.into_iter().rev());
                continue;
            }
            if view.status == SkeletonStatus::On {
                continue;
            }
            view.status = SkeletonStatus::On;
            activated += 1;
            if view.flags.contains(SkeletonFlags::HIDDEN_WHEN_ACTIVE) {
                view.hidden = true;
                continue;
            }
            if view.saved.is_some() {
                // Recovery is still queued in a deferred transition: keep the
                // original snapshot and invalidate the queued work.
                view.state_epoch = view.state_epoch.wrapping_add(1);
            } else {
                view.save_view_state();
            }
            prepare_view_for_skeleton(view, &self.appearance);
            let geometry = placeholder_geometry(view, &self.appearance);
            layer.attach(id, &geometry, config);
            tracing::trace!(view = ?id, shapes = geometry.shapes.len(), "placeholder attached");
        }
        activated
    }
}

/// Skeletonable children of `id`, or `None` if `id` is gone or not
/// skeletonable itself.
fn skeletonable_children(views: &ViewTree, id: ViewId) -> Option<Vec<ViewId>> {
    if !views.get(id)?.is_skeletonable() {
        return None;
    }
    Some(
        views
            .children(id)
            .iter()
            .copied()
            .filter(|child| views.get(*child).is_some_and(View::is_skeletonable))
            .collect(),
    )
}
