// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arena of views with parent/child links and generational handles.

use alloc::vec::Vec;

use crate::recover::{Recoverable, RecoveryTrace};
use crate::types::ViewId;
use crate::view::View;

#[derive(Debug)]
struct Node {
    view: View,
    parent: Option<ViewId>,
    children: Vec<ViewId>,
}

#[derive(Debug, Default)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// Recovery of one view, deferred until the transition that carries it runs.
///
/// Created by [`ViewTree::recover_view_state`] and applied by
/// [`ViewTree::commit`]. The work remembers the view's state epoch: if the
/// view was removed, or activated again, before the transition runs, the
/// commit is abandoned instead of writing stale properties.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[must_use = "recovery work does nothing until committed"]
pub struct RecoveryWork {
    view: ViewId,
    epoch: u32,
    forced: bool,
}

impl RecoveryWork {
    /// The view to recover.
    #[must_use]
    pub fn view(&self) -> ViewId {
        self.view
    }

    /// Whether recovery overwrites values the host changed.
    #[must_use]
    pub fn forced(&self) -> bool {
        self.forced
    }
}

/// Views addressed by [`ViewId`].
///
/// Removed slots are recycled; their generation is bumped on removal so old
/// handles stop resolving.
#[derive(Debug, Default)]
pub struct ViewTree {
    slots: Vec<Slot>,
    free_list: Vec<u32>,
    len: usize,
}

impl ViewTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live views.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no views.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts a parentless view.
    pub fn insert_root(&mut self, view: View) -> ViewId {
        self.allocate(view, None)
    }

    /// Inserts `view` as the last child of `parent`.
    ///
    /// Returns `None` if `parent` is not alive.
    pub fn insert_child(&mut self, parent: ViewId, view: View) -> Option<ViewId> {
        if !self.is_alive(parent) {
            return None;
        }
        let id = self.allocate(view, Some(parent));
        self.node_mut(parent)?.children.push(id);
        Some(id)
    }

    /// Removes `id` and its whole subtree, returning the removed view.
    ///
    /// Handles to any removed view become stale.
    pub fn remove(&mut self, id: ViewId) -> Option<View> {
        let parent = self.node(id)?.parent;
        if let Some(parent) = parent.and_then(|p| self.node_mut(p)) {
            parent.children.retain(|c| *c != id);
        }

        let mut removed = None;
        let mut stack = alloc::vec![id];
        while let Some(current) = stack.pop() {
            let Some(node) = self.release(current) else {
                continue;
            };
            stack.extend(node.children.iter().copied());
            if current == id {
                removed = Some(node.view);
            }
        }
        removed
    }

    /// Returns `true` if `id` refers to a live view.
    #[must_use]
    pub fn is_alive(&self, id: ViewId) -> bool {
        self.node(id).is_some()
    }

    /// The view behind `id`.
    #[must_use]
    pub fn get(&self, id: ViewId) -> Option<&View> {
        self.node(id).map(|n| &n.view)
    }

    /// The view behind `id`, mutably.
    pub fn get_mut(&mut self, id: ViewId) -> Option<&mut View> {
        self.node_mut(id).map(|n| &mut n.view)
    }

    /// Parent of `id`.
    #[must_use]
    pub fn parent(&self, id: ViewId) -> Option<ViewId> {
        self.node(id)?.parent
    }

    /// Children of `id`, in insertion order. Empty for stale handles.
    #[must_use]
    pub fn children(&self, id: ViewId) -> &[ViewId] {
        match self.node(id) {
            Some(node) => &node.children,
            None => &[],
        }
    }

    /// Snapshots the view's state. Returns `false` for a stale handle.
    pub fn save_view_state(&mut self, id: ViewId) -> bool {
        match self.get_mut(id) {
            Some(view) => {
                view.save_view_state();
                true
            }
            None => false,
        }
    }

    /// Schedules recovery of `id`.
    ///
    /// Returns `None` if the view is gone or has nothing to recover.
    pub fn recover_view_state(&self, id: ViewId, forced: bool) -> Option<RecoveryWork> {
        let view = self.get(id)?;
        view.saved.as_ref()?;
        Some(RecoveryWork {
            view: id,
            epoch: view.state_epoch,
            forced,
        })
    }

    /// Applies scheduled recovery.
    ///
    /// Returns `false` without writing anything if the view was removed or
    /// its state was saved again since `work` was created.
    pub fn commit(&mut self, work: RecoveryWork, trace: &mut dyn RecoveryTrace) -> bool {
        let Some(view) = self.get_mut(work.view) else {
            tracing::debug!(view = ?work.view, "recovery abandoned: view removed");
            return false;
        };
        if view.state_epoch != work.epoch {
            tracing::debug!(
                view = ?work.view,
                scheduled = work.epoch,
                current = view.state_epoch,
                "recovery abandoned: state saved again"
            );
            return false;
        }
        view.recover_view_state(work.forced, trace);
        true
    }

    fn allocate(&mut self, view: View, parent: Option<ViewId>) -> ViewId {
        let node = Node {
            view,
            parent,
            children: Vec::new(),
        };
        self.len += 1;
        if let Some(idx) = self.free_list.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.node = Some(node);
            return ViewId::new(idx, slot.generation);
        }
        let idx = u32::try_from(self.slots.len()).unwrap_or(u32::MAX);
        self.slots.push(Slot {
            generation: 1,
            node: Some(node),
        });
        ViewId::new(idx, 1)
    }

    fn release(&mut self, id: ViewId) -> Option<Node> {
        let slot = self.slots.get_mut(id.idx())?;
        if slot.generation != id.generation() {
            return None;
        }
        let node = slot.node.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free_list.push(id.index());
        self.len -= 1;
        Some(node)
    }

    fn node(&self, id: ViewId) -> Option<&Node> {
        let slot = self.slots.get(id.idx())?;
        if slot.generation != id.generation() {
            return None;
        }
        slot.node.as_ref()
    }

    fn node_mut(&mut self, id: ViewId) -> Option<&mut Node> {
        let slot = self.slots.get_mut(id.idx())?;
        if slot.generation != id.generation() {
            return None;
        }
        slot.node.as_mut()
    }
}
