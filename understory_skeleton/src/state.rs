// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snapshots of view properties taken before a skeleton is shown.
//!
//! Each specialized snapshot embeds the more general one by value, and each
//! `capture` builds the general part first, so a specialized snapshot is
//! always a strict superset of the base one.

use alloc::string::String;

use peniko::Color;

use crate::view::{
    Button, HeaderFooter, ImageRef, ImageView, Label, TextField, TextView, View, ViewKind,
};

/// Properties every view recovers.
#[derive(Copy, Clone, Debug)]
pub struct ViewState {
    /// Layer corner radius.
    pub corner_radius: f64,
    /// Clip to bounds.
    pub clips_to_bounds: bool,
    /// User interaction enabled.
    pub user_interaction_enabled: bool,
    /// Background color.
    pub background_color: Option<Color>,
}

impl ViewState {
    /// Captures the common properties of `view`.
    #[must_use]
    pub fn capture(view: &View) -> Self {
        Self {
            corner_radius: view.corner_radius,
            clips_to_bounds: view.clips_to_bounds,
            user_interaction_enabled: view.user_interaction_enabled,
            background_color: view.background_color,
        }
    }
}

/// Snapshot of labels and text views.
#[derive(Copy, Clone, Debug)]
pub struct TextViewState {
    /// Common properties.
    pub base: ViewState,
    /// Text color.
    pub text_color: Option<Color>,
}

impl TextViewState {
    fn capture(view: &View, text_color: Option<Color>) -> Self {
        Self {
            base: ViewState::capture(view),
            text_color,
        }
    }
}

/// Snapshot of text fields.
#[derive(Clone, Debug)]
pub struct TextFieldState {
    /// Text properties.
    pub text: TextViewState,
    /// Placeholder string.
    pub placeholder: Option<String>,
}

/// Snapshot of image views.
#[derive(Clone, Debug)]
pub struct ImageViewState {
    /// Common properties.
    pub base: ViewState,
    /// Displayed image.
    pub image: Option<ImageRef>,
}

/// Snapshot of buttons.
#[derive(Clone, Debug)]
pub struct ButtonViewState {
    /// Common properties.
    pub base: ViewState,
    /// Normal-state title.
    pub title: Option<String>,
}

/// Snapshot of table headers/footers.
#[derive(Copy, Clone, Debug)]
pub struct HeaderFooterViewState {
    /// Common properties.
    pub base: ViewState,
    /// Color of the background view, if there was one.
    pub background_view_color: Option<Color>,
}

/// The snapshot stored on a view between activation and recovery.
#[derive(Clone, Debug)]
pub enum SavedState {
    /// Plain view.
    View(ViewState),
    /// Label.
    Label(TextViewState),
    /// Text view.
    TextView(TextViewState),
    /// Text field.
    TextField(TextFieldState),
    /// Image view.
    Image(ImageViewState),
    /// Button.
    Button(ButtonViewState),
    /// Header/footer.
    HeaderFooter(HeaderFooterViewState),
}

impl SavedState {
    /// Captures every property tracked for the category of `view`.
    #[must_use]
    pub fn capture(view: &View) -> Self {
        match &view.kind {
            ViewKind::Plain => Self::View(ViewState::capture(view)),
            ViewKind::Label(Label { text_color, .. }) => {
                Self::Label(TextViewState::capture(view, *text_color))
            }
            ViewKind::TextView(TextView { text_color, .. }) => {
                Self::TextView(TextViewState::capture(view, *text_color))
            }
            ViewKind::TextField(TextField {
                text_color,
                placeholder,
                ..
            }) => Self::TextField(TextFieldState {
                text: TextViewState::capture(view, *text_color),
                placeholder: placeholder.clone(),
            }),
            ViewKind::Image(ImageView { image }) => Self::Image(ImageViewState {
                base: ViewState::capture(view),
                image: image.clone(),
            }),
            ViewKind::Button(Button { title }) => Self::Button(ButtonViewState {
                base: ViewState::capture(view),
                title: title.clone(),
            }),
            ViewKind::HeaderFooter(HeaderFooter { background_view }) => {
                Self::HeaderFooter(HeaderFooterViewState {
                    base: ViewState::capture(view),
                    background_view_color: background_view
                        .as_ref()
                        .and_then(|b| b.background_color),
                })
            }
        }
    }

    /// The common part of the snapshot.
    #[must_use]
    pub fn base(&self) -> &ViewState {
        match self {
            Self::View(base) => base,
            Self::Label(text) | Self::TextView(text) => &text.base,
            Self::TextField(field) => &field.text.base,
            Self::Image(image) => &image.base,
            Self::Button(button) => &button.base,
            Self::HeaderFooter(header_footer) => &header_footer.base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::same_color;
    use alloc::string::ToString;

    #[test]
    fn text_field_capture_nests_base() {
        let red = Color::from_rgba8(255, 0, 0, 255);
        let mut view = View::new(ViewKind::TextField(TextField {
            text_color: Some(red),
            placeholder: Some("Name".to_string()),
            ..TextField::default()
        }));
        view.corner_radius = 4.0;
        view.clips_to_bounds = true;

        let SavedState::TextField(state) = SavedState::capture(&view) else {
            panic!("expected a text field snapshot");
        };
        assert_eq!(state.text.base.corner_radius, 4.0);
        assert!(state.text.base.clips_to_bounds);
        assert!(same_color(state.text.text_color, Some(red)));
        assert_eq!(state.placeholder.as_deref(), Some("Name"));
    }

    #[test]
    fn header_footer_without_background_view() {
        let view = View::new(ViewKind::HeaderFooter(HeaderFooter::default()));
        let SavedState::HeaderFooter(state) = SavedState::capture(&view) else {
            panic!("expected a header/footer snapshot");
        };
        assert!(state.background_view_color.is_none());
    }

    #[test]
    fn base_is_reachable_from_every_variant() {
        let mut view = View::new(ViewKind::Button(Button::default()));
        view.corner_radius = 9.0;
        assert_eq!(SavedState::capture(&view).base().corner_radius, 9.0);
    }
}
