// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types: view identifiers, skeleton status and flags, and the text
//! metric modes.

use core::fmt;

use peniko::Color;
use peniko::color::palette;

/// Identifier for a view in a [`ViewTree`](crate::ViewTree).
///
/// A small, copyable handle made of a slot index and a generation counter.
/// Removing a view bumps the generation of its slot, so handles held by
/// delayed work or deferred transitions stop resolving instead of aliasing
/// whatever view reuses the slot later.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct ViewId(pub(crate) u32, pub(crate) u32);

impl ViewId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    /// Returns the raw slot index (for diagnostics only).
    #[must_use]
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }

    /// Returns the generation counter.
    #[must_use]
    #[inline]
    pub const fn generation(self) -> u32 {
        self.1
    }
}

impl fmt::Debug for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ViewId({}@gen{})", self.0, self.1)
    }
}

/// Whether a view currently shows its skeleton.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SkeletonStatus {
    /// The skeleton is visible (or the view is a container of visible skeletons).
    On,
    /// The view shows its real content.
    #[default]
    Off,
}

bitflags::bitflags! {
    /// Per-view skeleton behaviour.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SkeletonFlags: u8 {
        /// The view takes part in skeleton activation.
        const SKELETONABLE              = 0b0000_0001;
        /// User interaction is disabled while the skeleton is active and
        /// restored afterwards.
        const USER_INTERACTION_DISABLED = 0b0000_0010;
        /// The view is hidden while the skeleton is active instead of
        /// receiving a placeholder.
        const HIDDEN_WHEN_ACTIVE        = 0b0000_0100;
    }
}

impl Default for SkeletonFlags {
    fn default() -> Self {
        Self::USER_INTERACTION_DISABLED
    }
}

/// How the estimated height of one placeholder line is derived.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TextLineHeight {
    /// A fixed height in logical pixels.
    Fixed(f64),
    /// The line height of the effective font.
    RelativeToFont,
    /// The height constraint of the view divided by its line count.
    RelativeToConstraints,
}

/// Line count that marks a text node as unbounded (it flows freely).
pub const UNBOUNDED_LINES: i32 = -1;

/// How many placeholder lines a text node asks for.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextNumberOfLines {
    /// Use the view's own configured line count.
    #[default]
    Inherited,
    /// Use an explicit count.
    ///
    /// Out-of-range values are clamped to 1 when estimated; see
    /// [`TextNode::estimated_number_of_lines`](crate::TextNode::estimated_number_of_lines).
    Custom(i32),
}

/// Horizontal alignment of text, used to place a shortened last line.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlignment {
    /// Leading edge for the writing direction (treated as left).
    #[default]
    Natural,
    /// Left aligned.
    Left,
    /// Centered.
    Center,
    /// Right aligned.
    Right,
    /// Justified (the last line is left aligned).
    Justified,
}

/// The marker color written over content while a skeleton is shown.
///
/// Recovery uses it to tell "still showing the skeleton" apart from a value
/// the host assigned after the skeleton went away.
pub const CLEAR: Color = palette::css::TRANSPARENT;

/// Returns `true` if `color` is exactly the [`CLEAR`] marker.
///
/// An unset color (`None`) is not the marker.
#[must_use]
pub fn is_clear(color: Option<Color>) -> bool {
    matches!(color, Some(c) if c.components == CLEAR.components)
}

/// Component-wise color comparison, treating two unset colors as equal.
#[must_use]
pub fn same_color(a: Option<Color>, b: Option<Color>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.components == b.components,
        (None, None) => true,
        _ => false,
    }
}
