// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placeholder geometry and the placeholder layer seam.
//!
//! [`placeholder_geometry`] turns a view's bounds and [`TextNode`] metrics
//! into the shapes a [`PlaceholderLayer`] draws. Drawing, gradients and
//! shimmer animation are the layer's business.

use kurbo::{Rect, RoundedRect};
use smallvec::SmallVec;

use crate::appearance::SkeletonAppearance;
use crate::config::SkeletonConfig;
use crate::text_node::TextNode;
use crate::types::{TextAlignment, ViewId};
use crate::util::round_to_i64;
use crate::view::View;

/// Smallest line pitch (line height plus spacing) used to count lines.
const MIN_LINE_PITCH: f64 = 1.0;

/// Upper bound on the lines drawn for one text node.
const MAX_LINES: i64 = 512;

/// Shapes making up one view's placeholder, in the view's coordinate space.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlaceholderGeometry {
    /// Bounds of the view the placeholder covers.
    pub bounds: Rect,
    /// One shape for plain placeholders, one per line for text nodes.
    pub shapes: SmallVec<[RoundedRect; 4]>,
}

/// The visual collaborator that draws placeholders.
///
/// Implementations own the actual layer objects (gradient layers, shimmer
/// animations). The engine only tells them when to appear, change and go.
pub trait PlaceholderLayer {
    /// Attaches a placeholder to `view`.
    fn attach(&mut self, view: ViewId, geometry: &PlaceholderGeometry, config: &SkeletonConfig);

    /// Replaces the geometry of an attached placeholder.
    fn update(&mut self, view: ViewId, geometry: &PlaceholderGeometry);

    /// Removes the placeholder of `view`.
    fn detach(&mut self, view: ViewId);
}

/// Computes the placeholder shapes for `view`.
///
/// Text nodes get one rounded rect per estimated line; every other category
/// gets a single rounded rect over its bounds.
#[must_use]
pub fn placeholder_geometry(view: &View, appearance: &SkeletonAppearance) -> PlaceholderGeometry {
    let bounds = view.bounds;
    let mut shapes = SmallVec::new();
    match view.text_node() {
        Some(node) => push_lines(&mut shapes, bounds, &node, appearance),
        None => {
            let radius = view
                .skeleton_corner_radius
                .unwrap_or_else(|| appearance.skeleton_corner_radius());
            shapes.push(RoundedRect::from_rect(bounds, radius));
        }
    }
    PlaceholderGeometry { bounds, shapes }
}

/// Number of placeholder lines drawn for a text node of height `height`.
///
/// This is how many lines fit in the padded height, at least one, capped by
/// a positive estimated line count. A pitch below one point, or one that is
/// not finite, counts as a single line, and no node draws more than a few
/// hundred lines.
#[must_use]
pub fn number_of_lines(
    node: &impl TextNode,
    height: f64,
    appearance: &SkeletonAppearance,
) -> usize {
    let padding = node.padding_insets();
    let line_height = node.estimated_line_height(appearance);
    let spacing = node.multiline_spacing(appearance);
    let estimated = i64::from(node.estimated_number_of_lines());

    let per_line = line_height + spacing;
    let fitting = if per_line.is_finite() && per_line >= MIN_LINE_PITCH {
        let fit = (height - padding.y0 - padding.y1 + spacing) / per_line;
        round_to_i64(fit).clamp(1, MAX_LINES)
    } else {
        1
    };
    let lines = if estimated > 0 {
        estimated.min(fitting)
    } else {
        fitting
    };
    usize::try_from(lines).unwrap_or(1)
}

fn push_lines(
    shapes: &mut SmallVec<[RoundedRect; 4]>,
    bounds: Rect,
    node: &impl TextNode,
    appearance: &SkeletonAppearance,
) {
    let padding = node.padding_insets();
    let line_height = node.estimated_line_height(appearance).max(0.0);
    let spacing = node.multiline_spacing(appearance);
    let radius = node.multiline_corner_radius(appearance);
    let fill = f64::from(node.last_line_fill_percent(appearance).min(100)) / 100.0;
    let lines = number_of_lines(node, bounds.height(), appearance);

    let left = bounds.x0 + padding.x0;
    let full_width = (bounds.width() - padding.x0 - padding.x1).max(0.0);
    let available = bounds.height() - padding.y0 - padding.y1;
    let count = lines as f64;
    let total = line_height * count + spacing * (count - 1.0);

    let mut y = bounds.y0 + padding.y0;
    if node.should_center_text_vertically() && available > total {
        y += (available - total) / 2.0;
    }

    for index in 0..lines {
        let shortened = lines > 1 && index + 1 == lines;
        let width = if shortened { full_width * fill } else { full_width };
        let x = match node.text_alignment() {
            TextAlignment::Center => left + (full_width - width) / 2.0,
            TextAlignment::Right => left + full_width - width,
            TextAlignment::Natural | TextAlignment::Left | TextAlignment::Justified => left,
        };
        shapes.push(RoundedRect::new(x, y, x + width, y + line_height, radius));
        y += line_height + spacing;
    }
}
