// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text node metrics: the inputs placeholder line geometry is computed from.
//!
//! Every text-bearing category implements [`TextNode`] over a borrowed view.
//! All methods are pure functions of the view's current configuration and
//! content; nothing here mutates the view.

use kurbo::Insets;

use crate::appearance::SkeletonAppearance;
use crate::text::{AttributedText, Font};
use crate::types::{TextAlignment, TextLineHeight, TextNumberOfLines, UNBOUNDED_LINES};
use crate::view::{Label, TextNodeConfig, TextView, View, ViewKind};

/// Geometry inputs of a text-bearing view.
pub trait TextNode {
    /// The view's placeholder settings.
    fn config(&self) -> &TextNodeConfig;

    /// Estimated height of one placeholder line.
    fn estimated_line_height(&self, appearance: &SkeletonAppearance) -> f64;

    /// Estimated number of placeholder lines.
    ///
    /// [`UNBOUNDED_LINES`] means "as many as fit".
    fn estimated_number_of_lines(&self) -> i32;

    /// Alignment used to place a shortened last line.
    fn text_alignment(&self) -> TextAlignment;

    /// Whether synthesized lines are centered vertically in the bounds.
    fn should_center_text_vertically(&self) -> bool;

    /// Line height mode, falling back to the appearance.
    fn text_line_height(&self, appearance: &SkeletonAppearance) -> TextLineHeight {
        self.config()
            .line_height
            .unwrap_or_else(|| appearance.text_line_height())
    }

    /// Last line width in percent, falling back to the appearance.
    fn last_line_fill_percent(&self, appearance: &SkeletonAppearance) -> u8 {
        self.config()
            .last_line_fill_percent
            .unwrap_or_else(|| appearance.last_line_fill_percent())
    }

    /// Corner radius of each line, falling back to the appearance.
    fn multiline_corner_radius(&self, appearance: &SkeletonAppearance) -> f64 {
        self.config()
            .multiline_corner_radius
            .unwrap_or_else(|| appearance.multiline_corner_radius())
    }

    /// Gap between lines, falling back to the appearance.
    fn multiline_spacing(&self, appearance: &SkeletonAppearance) -> f64 {
        self.config()
            .multiline_spacing
            .unwrap_or_else(|| appearance.multiline_spacing())
    }

    /// Insets between the bounds and the lines.
    fn padding_insets(&self) -> Insets {
        self.config().padding
    }
}

/// Line height of the font at the first character, else the default font.
fn font_line_height(text: Option<&AttributedText>, font: Option<Font>) -> Option<f64> {
    text.filter(|t| !t.is_empty())
        .and_then(AttributedText::leading_font)
        .or(font)
        .map(|f| f.line_height)
}

/// [`TextNode`] view of a label.
#[derive(Copy, Clone, Debug)]
pub struct LabelNode<'a> {
    view: &'a View,
    label: &'a Label,
}

impl<'a> LabelNode<'a> {
    /// Returns the node for `view` if it is a label.
    #[must_use]
    pub fn new(view: &'a View) -> Option<Self> {
        view.as_label().map(|label| Self { view, label })
    }

    /// Whether the label itself spans other than one line (`0` is unlimited).
    ///
    /// Reads the label's own line count, not the skeleton override. Only
    /// such labels get their height pinned while the skeleton is active.
    #[must_use]
    pub fn is_multiline(&self) -> bool {
        self.label.number_of_lines != 1
    }

    /// Height the label needs to show its estimated lines.
    #[must_use]
    pub fn desired_height(&self, appearance: &SkeletonAppearance) -> f64 {
        let lines = f64::from(self.estimated_number_of_lines());
        let padding = self.padding_insets();
        self.estimated_line_height(appearance) * lines
            + self.multiline_spacing(appearance) * (lines - 1.0)
            + padding.y0
            + padding.y1
    }
}

impl TextNode for LabelNode<'_> {
    fn config(&self) -> &TextNodeConfig {
        &self.view.text
    }

    fn estimated_line_height(&self, appearance: &SkeletonAppearance) -> f64 {
        match self.text_line_height(appearance) {
            TextLineHeight::Fixed(height) => height,
            TextLineHeight::RelativeToFont => {
                font_line_height(self.label.text.as_ref(), self.label.font)
                    .unwrap_or_else(|| appearance.multiline_height())
            }
            TextLineHeight::RelativeToConstraints => {
                let lines = self.estimated_number_of_lines();
                match self.view.height_constraints.first_constant() {
                    Some(constant) if lines != 0 => constant / f64::from(lines),
                    _ => appearance.multiline_height(),
                }
            }
        }
    }

    fn estimated_number_of_lines(&self) -> i32 {
        match self.view.text.number_of_lines {
            TextNumberOfLines::Inherited => self.label.number_of_lines,
            TextNumberOfLines::Custom(lines) if lines >= 0 => lines,
            TextNumberOfLines::Custom(_) => 1,
        }
    }

    fn text_alignment(&self) -> TextAlignment {
        self.label.alignment
    }

    fn should_center_text_vertically(&self) -> bool {
        true
    }
}

/// [`TextNode`] view of a text view.
#[derive(Copy, Clone, Debug)]
pub struct TextViewNode<'a> {
    view: &'a View,
    text_view: &'a TextView,
}

impl<'a> TextViewNode<'a> {
    /// Returns the node for `view` if it is a text view.
    #[must_use]
    pub fn new(view: &'a View) -> Option<Self> {
        view.as_text_view()
            .map(|text_view| Self { view, text_view })
    }
}

impl TextNode for TextViewNode<'_> {
    fn config(&self) -> &TextNodeConfig {
        &self.view.text
    }

    fn estimated_line_height(&self, appearance: &SkeletonAppearance) -> f64 {
        match self.text_line_height(appearance) {
            TextLineHeight::Fixed(height) => height,
            TextLineHeight::RelativeToFont => {
                font_line_height(self.text_view.text.as_ref(), self.text_view.font)
                    .unwrap_or_else(|| appearance.multiline_height())
            }
            // Text views have no height constraint to derive from.
            TextLineHeight::RelativeToConstraints => appearance.multiline_height(),
        }
    }

    fn estimated_number_of_lines(&self) -> i32 {
        match self.view.text.number_of_lines {
            TextNumberOfLines::Inherited => UNBOUNDED_LINES,
            TextNumberOfLines::Custom(lines) if lines >= UNBOUNDED_LINES => lines,
            TextNumberOfLines::Custom(_) => 1,
        }
    }

    fn text_alignment(&self) -> TextAlignment {
        self.text_view.alignment
    }

    fn should_center_text_vertically(&self) -> bool {
        false
    }
}

/// Any text node, dispatching to the category implementation.
#[derive(Copy, Clone, Debug)]
pub enum TextNodeRef<'a> {
    /// A label.
    Label(LabelNode<'a>),
    /// A text view.
    TextView(TextViewNode<'a>),
}

impl TextNodeRef<'_> {
    fn node(&self) -> &dyn TextNode {
        match self {
            Self::Label(node) => node,
            Self::TextView(node) => node,
        }
    }
}

impl TextNode for TextNodeRef<'_> {
    fn config(&self) -> &TextNodeConfig {
        self.node().config()
    }

    fn estimated_line_height(&self, appearance: &SkeletonAppearance) -> f64 {
        self.node().estimated_line_height(appearance)
    }

    fn estimated_number_of_lines(&self) -> i32 {
        self.node().estimated_number_of_lines()
    }

    fn text_alignment(&self) -> TextAlignment {
        self.node().text_alignment()
    }

    fn should_center_text_vertically(&self) -> bool {
        self.node().should_center_text_vertically()
    }
}

impl View {
    /// The text node of this view, if its category has one.
    ///
    /// Labels and text views are text nodes. Text fields, buttons and the
    /// other categories get a single placeholder shape instead.
    #[must_use]
    pub fn text_node(&self) -> Option<TextNodeRef<'_>> {
        match &self.kind {
            ViewKind::Label(label) => Some(TextNodeRef::Label(LabelNode { view: self, label })),
            ViewKind::TextView(text_view) => {
                Some(TextNodeRef::TextView(TextViewNode { view: self, text_view }))
            }
            _ => None,
        }
    }
}
