// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The view record: visual properties, category payload, skeleton settings
//! and engine-owned skeleton state, all as explicit fields.

use alloc::string::String;

use kurbo::{Insets, Rect, Size};
use peniko::Color;
use understory_timing::TimerId;

use crate::constraint::HeightConstraints;
use crate::state::SavedState;
use crate::text::{AttributedText, Font};
use crate::types::{
    SkeletonFlags, SkeletonStatus, TextAlignment, TextLineHeight, TextNumberOfLines,
};

/// Label payload: fixed line count, attributed text.
#[derive(Clone, Debug)]
pub struct Label {
    /// Text content.
    pub text: Option<AttributedText>,
    /// Default font, used where the text carries none.
    pub font: Option<Font>,
    /// Text color.
    pub text_color: Option<Color>,
    /// Configured line count; `0` means "as many as needed".
    pub number_of_lines: i32,
    /// Horizontal alignment.
    pub alignment: TextAlignment,
}

impl Default for Label {
    fn default() -> Self {
        Self {
            text: None,
            font: None,
            text_color: None,
            number_of_lines: 1,
            alignment: TextAlignment::Natural,
        }
    }
}

/// Free-flowing, possibly scrolling, text payload.
#[derive(Clone, Debug, Default)]
pub struct TextView {
    /// Text content.
    pub text: Option<AttributedText>,
    /// Default font.
    pub font: Option<Font>,
    /// Text color.
    pub text_color: Option<Color>,
    /// Horizontal alignment.
    pub alignment: TextAlignment,
}

/// Single-line editable text payload.
#[derive(Clone, Debug, Default)]
pub struct TextField {
    /// Current text.
    pub text: Option<String>,
    /// Font.
    pub font: Option<Font>,
    /// Text color.
    pub text_color: Option<Color>,
    /// Placeholder shown while the field is empty.
    pub placeholder: Option<String>,
}

/// A shared reference to an image owned by the host's image cache.
///
/// The view never owns pixels; cloning a reference is cheap.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageRef {
    id: u64,
    size: Size,
}

impl ImageRef {
    /// Creates a reference to host image `id`.
    #[must_use]
    pub const fn new(id: u64, size: Size) -> Self {
        Self { id, size }
    }

    /// Host image identifier.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Intrinsic size of the image.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }
}

/// Image payload.
#[derive(Clone, Debug, Default)]
pub struct ImageView {
    /// Displayed image.
    pub image: Option<ImageRef>,
}

/// Button payload.
#[derive(Clone, Debug, Default)]
pub struct Button {
    /// Title in the normal control state.
    pub title: Option<String>,
}

/// The background view of a header/footer. Not owned by skeleton state.
#[derive(Clone, Debug, Default)]
pub struct BackgroundView {
    /// Fill color.
    pub background_color: Option<Color>,
}

/// Section header/footer payload.
#[derive(Clone, Debug, Default)]
pub struct HeaderFooter {
    /// Optional background view.
    pub background_view: Option<BackgroundView>,
}

/// The category of a view and its category-specific properties.
#[derive(Clone, Debug, Default)]
pub enum ViewKind {
    /// A plain view with only the common properties.
    #[default]
    Plain,
    /// A label.
    Label(Label),
    /// A text view.
    TextView(TextView),
    /// A text field.
    TextField(TextField),
    /// An image view.
    Image(ImageView),
    /// A button.
    Button(Button),
    /// A table section header or footer.
    HeaderFooter(HeaderFooter),
}

/// Placeholder settings of text-bearing views.
///
/// Unset values resolve against the [`SkeletonAppearance`](crate::SkeletonAppearance).
/// These persist across activation cycles and are never part of saved state.
#[derive(Copy, Clone, Debug)]
pub struct TextNodeConfig {
    /// Line height mode.
    pub line_height: Option<TextLineHeight>,
    /// Line count mode.
    pub number_of_lines: TextNumberOfLines,
    /// Last line width in percent.
    pub last_line_fill_percent: Option<u8>,
    /// Corner radius of each line.
    pub multiline_corner_radius: Option<f64>,
    /// Gap between lines.
    pub multiline_spacing: Option<f64>,
    /// Insets between the bounds and the placeholder lines.
    pub padding: Insets,
}

impl Default for TextNodeConfig {
    fn default() -> Self {
        Self {
            line_height: None,
            number_of_lines: TextNumberOfLines::Inherited,
            last_line_fill_percent: None,
            multiline_corner_radius: None,
            multiline_spacing: None,
            padding: Insets::ZERO,
        }
    }
}

/// A view record.
///
/// Host-visible properties are public fields. Skeleton bookkeeping (status,
/// saved state, pending delayed activation) is owned by the engine and only
/// readable from outside.
#[derive(Clone, Debug)]
pub struct View {
    /// Bounds in the view's own coordinate space.
    pub bounds: Rect,
    /// Layer corner radius.
    pub corner_radius: f64,
    /// Whether content is clipped to the bounds.
    pub clips_to_bounds: bool,
    /// Whether the view receives input.
    pub user_interaction_enabled: bool,
    /// Whether the view is hidden.
    pub hidden: bool,
    /// Background fill; `None` means no background.
    pub background_color: Option<Color>,
    /// Category payload.
    pub kind: ViewKind,
    /// Height constraints mirrored from the host layout.
    pub height_constraints: HeightConstraints,
    /// Skeleton behaviour.
    pub flags: SkeletonFlags,
    /// Corner radius of the single-shape placeholder.
    pub skeleton_corner_radius: Option<f64>,
    /// Text node placeholder settings.
    pub text: TextNodeConfig,
    pub(crate) status: SkeletonStatus,
    pub(crate) saved: Option<SavedState>,
    pub(crate) state_epoch: u32,
    pub(crate) pending_show: Option<TimerId>,
}

impl Default for View {
    fn default() -> Self {
        Self::new(ViewKind::Plain)
    }
}

impl View {
    /// Creates a visible, interactive view of the given kind.
    #[must_use]
    pub fn new(kind: ViewKind) -> Self {
        Self {
            bounds: Rect::ZERO,
            corner_radius: 0.0,
            clips_to_bounds: false,
            user_interaction_enabled: true,
            hidden: false,
            background_color: None,
            kind,
            height_constraints: HeightConstraints::new(),
            flags: SkeletonFlags::default(),
            skeleton_corner_radius: None,
            text: TextNodeConfig::default(),
            status: SkeletonStatus::Off,
            saved: None,
            state_epoch: 0,
            pending_show: None,
        }
    }

    /// Sets the bounds.
    #[must_use]
    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }

    /// Sets the background color.
    #[must_use]
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Marks the view as taking part in skeleton activation.
    #[must_use]
    pub fn skeletonable(mut self) -> Self {
        self.flags |= SkeletonFlags::SKELETONABLE;
        self
    }

    /// Returns `true` if the view takes part in skeleton activation.
    #[must_use]
    pub fn is_skeletonable(&self) -> bool {
        self.flags.contains(SkeletonFlags::SKELETONABLE)
    }

    /// Current skeleton status.
    #[must_use]
    pub fn status(&self) -> SkeletonStatus {
        self.status
    }

    /// Returns `true` while the skeleton is on.
    #[must_use]
    pub fn is_skeleton_active(&self) -> bool {
        self.status == SkeletonStatus::On
    }

    /// The snapshot taken at activation, until recovery consumes it.
    #[must_use]
    pub fn saved_state(&self) -> Option<&SavedState> {
        self.saved.as_ref()
    }

    /// The pending delayed activation rooted at this view, if any.
    #[must_use]
    pub fn pending_show(&self) -> Option<TimerId> {
        self.pending_show
    }

    /// Label payload, if this is a label.
    #[must_use]
    pub fn as_label(&self) -> Option<&Label> {
        match &self.kind {
            ViewKind::Label(label) => Some(label),
            _ => None,
        }
    }

    /// Text view payload, if this is a text view.
    #[must_use]
    pub fn as_text_view(&self) -> Option<&TextView> {
        match &self.kind {
            ViewKind::TextView(text_view) => Some(text_view),
            _ => None,
        }
    }

    /// Text field payload, if this is a text field.
    #[must_use]
    pub fn as_text_field(&self) -> Option<&TextField> {
        match &self.kind {
            ViewKind::TextField(field) => Some(field),
            _ => None,
        }
    }
}
