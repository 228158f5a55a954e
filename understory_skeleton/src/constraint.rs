// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Height constraints attached to a view.
//!
//! Hosts mirror the height constraints of their layout system here. While a
//! multiline label shows its skeleton, the engine may park the host
//! constraints and pin the label to the height its placeholder lines need;
//! recovery undoes exactly that.

use smallvec::SmallVec;

/// Who created a height constraint.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConstraintOwner {
    /// Added by the host layout.
    Host,
    /// Synthesized for the skeleton; removed on recovery.
    Skeleton,
}

/// A fixed-height layout constraint.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HeightConstraint {
    /// Height in logical pixels.
    pub constant: f64,
    /// Whether the layout system currently honors the constraint.
    pub active: bool,
    owner: ConstraintOwner,
    backed_up: bool,
}

impl HeightConstraint {
    /// Who created the constraint.
    #[must_use]
    pub fn owner(&self) -> ConstraintOwner {
        self.owner
    }

    /// Whether the constraint was parked by skeleton activation.
    #[must_use]
    pub fn is_backed_up(&self) -> bool {
        self.backed_up
    }
}

/// The height constraints of one view.
#[derive(Clone, Debug, Default)]
pub struct HeightConstraints {
    items: SmallVec<[HeightConstraint; 2]>,
}

impl HeightConstraints {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an active host constraint.
    pub fn push(&mut self, constant: f64) {
        self.items.push(HeightConstraint {
            constant,
            active: true,
            owner: ConstraintOwner::Host,
            backed_up: false,
        });
    }

    /// All constraints, active or not.
    #[must_use]
    pub fn all(&self) -> &[HeightConstraint] {
        &self.items
    }

    /// Active constraints, in insertion order.
    pub fn active(&self) -> impl Iterator<Item = &HeightConstraint> + '_ {
        self.items.iter().filter(|c| c.active)
    }

    /// Constant of the first active constraint.
    #[must_use]
    pub fn first_constant(&self) -> Option<f64> {
        self.active().next().map(|c| c.constant)
    }

    /// Largest active constant, or `0.0` when unconstrained.
    #[must_use]
    pub fn max_constant(&self) -> f64 {
        self.active().map(|c| c.constant).fold(0.0, f64::max)
    }

    /// Returns `true` if host constraints are parked.
    #[must_use]
    pub fn has_backup(&self) -> bool {
        self.items.iter().any(|c| c.backed_up)
    }

    /// Parks the active host constraints and pins the height to `constant`.
    pub(crate) fn pin_for_skeleton(&mut self, constant: f64) {
        for c in self
            .items
            .iter_mut()
            .filter(|c| c.active && c.owner == ConstraintOwner::Host)
        {
            c.active = false;
            c.backed_up = true;
        }
        self.items.push(HeightConstraint {
            constant,
            active: true,
            owner: ConstraintOwner::Skeleton,
            backed_up: false,
        });
    }

    /// Drops skeleton constraints. Returns `true` if any existed.
    pub(crate) fn remove_skeleton(&mut self) -> bool {
        let before = self.items.len();
        self.items.retain(|c| c.owner != ConstraintOwner::Skeleton);
        before != self.items.len()
    }

    /// Reactivates parked host constraints. Returns `true` if any existed.
    pub(crate) fn restore_backup(&mut self) -> bool {
        let mut restored = false;
        for c in self.items.iter_mut().filter(|c| c.backed_up) {
            c.active = true;
            c.backed_up = false;
            restored = true;
        }
        restored
    }
}
