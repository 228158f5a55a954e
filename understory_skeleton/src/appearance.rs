// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Global appearance defaults.
//!
//! [`SkeletonAppearance`] is the read-only record consulted whenever a view
//! leaves one of its placeholder settings unset. There is no process-wide
//! instance: callers own one (usually inside a
//! [`SkeletonController`](crate::SkeletonController)) and pass it explicitly.

use peniko::Color;

use crate::types::TextLineHeight;

/// Default placeholder tint (`#ECF0F1`).
pub const DEFAULT_TINT: Color = Color::from_rgba8(236, 240, 241, 255);

/// Global defaults for placeholder geometry and color.
///
/// # Example
///
/// ```rust
/// use understory_skeleton::{SkeletonAppearance, TextLineHeight};
///
/// let appearance = SkeletonAppearance::builder()
///     .multiline_height(18.0)
///     .multiline_spacing(6.0)
///     .text_line_height(TextLineHeight::RelativeToFont)
///     .build();
///
/// assert_eq!(appearance.multiline_height(), 18.0);
/// assert_eq!(appearance.last_line_fill_percent(), 70);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct SkeletonAppearance {
    tint: Color,
    multiline_height: f64,
    multiline_spacing: f64,
    last_line_fill_percent: u8,
    multiline_corner_radius: f64,
    skeleton_corner_radius: f64,
    text_line_height: TextLineHeight,
}

impl Default for SkeletonAppearance {
    fn default() -> Self {
        Self {
            tint: DEFAULT_TINT,
            multiline_height: 15.0,
            multiline_spacing: 10.0,
            last_line_fill_percent: 70,
            multiline_corner_radius: 0.0,
            skeleton_corner_radius: 0.0,
            text_line_height: TextLineHeight::Fixed(15.0),
        }
    }
}

impl SkeletonAppearance {
    /// Starts a builder from the default appearance.
    #[must_use]
    pub fn builder() -> SkeletonAppearanceBuilder {
        SkeletonAppearanceBuilder::new()
    }

    /// Base placeholder color.
    #[must_use]
    #[inline]
    pub fn tint(&self) -> Color {
        self.tint
    }

    /// Line height used when no better estimate exists.
    #[must_use]
    #[inline]
    pub fn multiline_height(&self) -> f64 {
        self.multiline_height
    }

    /// Vertical gap between placeholder lines.
    #[must_use]
    #[inline]
    pub fn multiline_spacing(&self) -> f64 {
        self.multiline_spacing
    }

    /// Width of the last of several lines, in percent of the full line.
    #[must_use]
    #[inline]
    pub fn last_line_fill_percent(&self) -> u8 {
        self.last_line_fill_percent
    }

    /// Corner radius of placeholder lines.
    #[must_use]
    #[inline]
    pub fn multiline_corner_radius(&self) -> f64 {
        self.multiline_corner_radius
    }

    /// Corner radius of single-shape placeholders.
    #[must_use]
    #[inline]
    pub fn skeleton_corner_radius(&self) -> f64 {
        self.skeleton_corner_radius
    }

    /// Line height mode for text nodes that do not set their own.
    #[must_use]
    #[inline]
    pub fn text_line_height(&self) -> TextLineHeight {
        self.text_line_height
    }
}

/// Builder for [`SkeletonAppearance`].
#[derive(Clone, Debug, Default)]
pub struct SkeletonAppearanceBuilder {
    appearance: SkeletonAppearance,
}

impl SkeletonAppearanceBuilder {
    /// Creates a builder holding the default appearance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base placeholder color.
    #[must_use]
    pub fn tint(mut self, tint: Color) -> Self {
        self.appearance.tint = tint;
        self
    }

    /// Sets the fallback line height.
    #[must_use]
    pub fn multiline_height(mut self, height: f64) -> Self {
        self.appearance.multiline_height = height;
        self
    }

    /// Sets the gap between lines.
    #[must_use]
    pub fn multiline_spacing(mut self, spacing: f64) -> Self {
        self.appearance.multiline_spacing = spacing;
        self
    }

    /// Sets the last line width in percent; values above 100 are clamped.
    #[must_use]
    pub fn last_line_fill_percent(mut self, percent: u8) -> Self {
        self.appearance.last_line_fill_percent = percent.min(100);
        self
    }

    /// Sets the corner radius of placeholder lines.
    #[must_use]
    pub fn multiline_corner_radius(mut self, radius: f64) -> Self {
        self.appearance.multiline_corner_radius = radius;
        self
    }

    /// Sets the corner radius of single-shape placeholders.
    #[must_use]
    pub fn skeleton_corner_radius(mut self, radius: f64) -> Self {
        self.appearance.skeleton_corner_radius = radius;
        self
    }

    /// Sets the default line height mode.
    #[must_use]
    pub fn text_line_height(mut self, mode: TextLineHeight) -> Self {
        self.appearance.text_line_height = mode;
        self
    }

    /// Finishes the builder.
    #[must_use]
    pub fn build(self) -> SkeletonAppearance {
        self.appearance
    }
}
