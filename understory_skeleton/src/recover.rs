// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snapshot and restore of view properties around a skeleton.
//!
//! [`Recoverable`] is the contract every view category fulfils. Each category
//! restores through an explicit chain: the base step first (corner radius,
//! clipping, interaction, background), then text layout, then text color,
//! then the category's own content. Later steps rely on the earlier ones
//! having run.
//!
//! Natural recovery (`forced == false`) only overwrites a property that still
//! holds the skeleton's [`CLEAR`] marker (or, for optional content, is still
//! empty), so values the host assigned after the skeleton went away survive.
//! Forced recovery always writes the snapshot back. Two categories deviate on
//! purpose: a button title is restored whenever the button has no title,
//! regardless of `forced`, and a header/footer background view color is
//! always restored when the background view exists.

use crate::appearance::SkeletonAppearance;
use crate::state::{
    ButtonViewState, HeaderFooterViewState, ImageViewState, SavedState, TextFieldState,
    TextViewState, ViewState,
};
use crate::text_node::LabelNode;
use crate::types::{CLEAR, SkeletonFlags, is_clear};
use crate::view::{View, ViewKind};

/// A property written during recovery.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RestoredProperty {
    /// Layer corner radius.
    CornerRadius,
    /// Clip to bounds.
    ClipsToBounds,
    /// User interaction enabled.
    UserInteraction,
    /// Background color.
    BackgroundColor,
    /// Skeleton height constraints dropped and host constraints reactivated.
    HeightConstraints,
    /// Text color.
    TextColor,
    /// Text field placeholder.
    Placeholder,
    /// Image reference.
    Image,
    /// Button title.
    ButtonTitle,
    /// Header/footer background view color.
    BackgroundViewColor,
}

/// A sink observing recovery writes, in the order they happen.
///
/// The default method is a no-op. `()` ignores everything and a
/// `Vec<RestoredProperty>` records the sequence.
pub trait RecoveryTrace {
    /// Called after `property` was written.
    fn restored(&mut self, property: RestoredProperty) {
        let _ = property;
    }
}

impl RecoveryTrace for () {}

impl RecoveryTrace for alloc::vec::Vec<RestoredProperty> {
    fn restored(&mut self, property: RestoredProperty) {
        self.push(property);
    }
}

/// Save/restore contract of views that can show a skeleton.
pub trait Recoverable {
    /// Snapshots every property tracked for this view's category.
    ///
    /// Replaces any earlier snapshot.
    fn save_view_state(&mut self);

    /// Restores the snapshot and consumes it.
    ///
    /// This is the body of a visual transition: callers that animate wrap it
    /// (see [`Transition`](crate::Transition)). Without a snapshot this does
    /// nothing, so calling it speculatively is safe.
    fn recover_view_state(&mut self, forced: bool, trace: &mut dyn RecoveryTrace);
}

impl Recoverable for View {
    fn save_view_state(&mut self) {
        self.saved = Some(SavedState::capture(self));
        self.state_epoch = self.state_epoch.wrapping_add(1);
    }

    fn recover_view_state(&mut self, forced: bool, trace: &mut dyn RecoveryTrace) {
        let Some(saved) = self.saved.take() else {
            return;
        };
        match &saved {
            SavedState::View(state) => recover_view(self, state, forced, trace),
            SavedState::Label(state) => recover_label(self, state, forced, trace),
            SavedState::TextView(state) => recover_text_view(self, state, forced, trace),
            SavedState::TextField(state) => recover_text_field(self, state, forced, trace),
            SavedState::Image(state) => recover_image(self, state, forced, trace),
            SavedState::Button(state) => recover_button(self, state, forced, trace),
            SavedState::HeaderFooter(state) => recover_header_footer(self, state, forced, trace),
        }
    }
}

fn recover_view(view: &mut View, state: &ViewState, forced: bool, trace: &mut dyn RecoveryTrace) {
    view.corner_radius = state.corner_radius;
    trace.restored(RestoredProperty::CornerRadius);
    view.clips_to_bounds = state.clips_to_bounds;
    trace.restored(RestoredProperty::ClipsToBounds);

    if view.flags.contains(SkeletonFlags::USER_INTERACTION_DISABLED) {
        view.user_interaction_enabled = state.user_interaction_enabled;
        trace.restored(RestoredProperty::UserInteraction);
    }

    if forced || is_clear(view.background_color) {
        view.background_color = state.background_color;
        trace.restored(RestoredProperty::BackgroundColor);
    }
}

fn recover_label(
    view: &mut View,
    state: &TextViewState,
    forced: bool,
    trace: &mut dyn RecoveryTrace,
) {
    recover_view(view, &state.base, forced, trace);

    let removed = view.height_constraints.remove_skeleton();
    let restored = view.height_constraints.restore_backup();
    if removed || restored {
        trace.restored(RestoredProperty::HeightConstraints);
    }

    if let ViewKind::Label(label) = &mut view.kind {
        if forced || is_clear(label.text_color) {
            label.text_color = state.text_color;
            trace.restored(RestoredProperty::TextColor);
        }
    }
}

fn recover_text_view(
    view: &mut View,
    state: &TextViewState,
    forced: bool,
    trace: &mut dyn RecoveryTrace,
) {
    recover_view(view, &state.base, forced, trace);

    if let ViewKind::TextView(text_view) = &mut view.kind {
        if forced || is_clear(text_view.text_color) {
            text_view.text_color = state.text_color;
            trace.restored(RestoredProperty::TextColor);
        }
    }
}

fn recover_text_field(
    view: &mut View,
    state: &TextFieldState,
    forced: bool,
    trace: &mut dyn RecoveryTrace,
) {
    recover_view(view, &state.text.base, forced, trace);

    if let ViewKind::TextField(field) = &mut view.kind {
        if forced || is_clear(field.text_color) {
            field.text_color = state.text.text_color;
            trace.restored(RestoredProperty::TextColor);
        }
        if forced || field.placeholder.is_none() {
            field.placeholder.clone_from(&state.placeholder);
            trace.restored(RestoredProperty::Placeholder);
        }
    }
}

fn recover_image(
    view: &mut View,
    state: &ImageViewState,
    forced: bool,
    trace: &mut dyn RecoveryTrace,
) {
    recover_view(view, &state.base, forced, trace);

    if let ViewKind::Image(image_view) = &mut view.kind {
        if forced || image_view.image.is_none() {
            image_view.image.clone_from(&state.image);
            trace.restored(RestoredProperty::Image);
        }
    }
}

fn recover_button(
    view: &mut View,
    state: &ButtonViewState,
    forced: bool,
    trace: &mut dyn RecoveryTrace,
) {
    recover_view(view, &state.base, forced, trace);

    // Only an empty title is restored, even when forced.
    if let ViewKind::Button(button) = &mut view.kind {
        if button.title.is_none() {
            button.title.clone_from(&state.title);
            trace.restored(RestoredProperty::ButtonTitle);
        }
    }
}

fn recover_header_footer(
    view: &mut View,
    state: &HeaderFooterViewState,
    forced: bool,
    trace: &mut dyn RecoveryTrace,
) {
    recover_view(view, &state.base, forced, trace);

    if let ViewKind::HeaderFooter(header_footer) = &mut view.kind {
        if let Some(background_view) = &mut header_footer.background_view {
            background_view.background_color = state.background_view_color;
            trace.restored(RestoredProperty::BackgroundViewColor);
        }
    }
}

/// Replaces the view's content with the skeleton markers.
///
/// Runs after [`Recoverable::save_view_state`]: everything cleared here is
/// what recovery puts back.
pub(crate) fn prepare_view_for_skeleton(view: &mut View, appearance: &SkeletonAppearance) {
    if view.flags.contains(SkeletonFlags::USER_INTERACTION_DISABLED) {
        view.user_interaction_enabled = false;
    }
    view.background_color = Some(CLEAR);
    view.clips_to_bounds = true;

    let pinned_height = LabelNode::new(view)
        .filter(LabelNode::is_multiline)
        .map(|node| node.desired_height(appearance))
        .filter(|desired| *desired > view.height_constraints.max_constant());
    if let Some(height) = pinned_height {
        view.height_constraints.pin_for_skeleton(height);
    }

    match &mut view.kind {
        ViewKind::Plain => {}
        ViewKind::Label(label) => label.text_color = Some(CLEAR),
        ViewKind::TextView(text_view) => text_view.text_color = Some(CLEAR),
        ViewKind::TextField(field) => {
            field.text_color = Some(CLEAR);
            field.placeholder = None;
        }
        ViewKind::Image(image_view) => image_view.image = None,
        ViewKind::Button(button) => button.title = None,
        ViewKind::HeaderFooter(header_footer) => {
            if let Some(background_view) = &mut header_footer.background_view {
                background_view.background_color = Some(CLEAR);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{TextNumberOfLines, same_color};
    use crate::view::{BackgroundView, Button, HeaderFooter, ImageRef, ImageView, Label, TextField};
    use alloc::string::ToString;
    use alloc::vec::Vec;
    use kurbo::Size;
    use peniko::Color;

    const RED: Color = Color::from_rgba8(255, 0, 0, 255);
    const BLUE: Color = Color::from_rgba8(0, 0, 255, 255);
    const GREEN: Color = Color::from_rgba8(0, 255, 0, 255);

    fn activate(view: &mut View) {
        view.save_view_state();
        prepare_view_for_skeleton(view, &SkeletonAppearance::default());
    }

    #[test]
    fn recovery_without_state_is_noop() {
        let mut view = View::default().with_background(RED);
        view.corner_radius = 3.0;
        let mut writes: Vec<RestoredProperty> = Vec::new();
        view.recover_view_state(true, &mut writes);
        assert!(writes.is_empty());
        assert_eq!(view.corner_radius, 3.0);
        assert!(same_color(view.background_color, Some(RED)));
    }

    #[test]
    fn natural_recovery_restores_clear_background() {
        let mut view = View::default().with_background(RED);
        activate(&mut view);
        assert!(is_clear(view.background_color));
        assert!(!view.user_interaction_enabled);

        view.recover_view_state(false, &mut ());
        assert!(same_color(view.background_color, Some(RED)));
        assert!(view.user_interaction_enabled);
        assert!(view.saved_state().is_none());
    }

    #[test]
    fn natural_recovery_keeps_host_background() {
        let mut view = View::default().with_background(RED);
        activate(&mut view);
        view.background_color = Some(BLUE);

        let mut natural = view.clone();
        natural.recover_view_state(false, &mut ());
        assert!(same_color(natural.background_color, Some(BLUE)));

        view.recover_view_state(true, &mut ());
        assert!(same_color(view.background_color, Some(RED)));
    }

    #[test]
    fn interaction_untouched_without_flag() {
        let mut view = View::default();
        view.flags = SkeletonFlags::SKELETONABLE;
        view.user_interaction_enabled = false;
        view.save_view_state();
        view.user_interaction_enabled = true;

        let mut writes: Vec<RestoredProperty> = Vec::new();
        view.recover_view_state(true, &mut writes);
        assert!(view.user_interaction_enabled);
        assert!(!writes.contains(&RestoredProperty::UserInteraction));
    }

    #[test]
    fn text_field_chain_order() {
        let mut view = View::new(ViewKind::TextField(TextField {
            text_color: Some(GREEN),
            placeholder: Some("Email".to_string()),
            ..TextField::default()
        }))
        .with_background(RED);
        activate(&mut view);

        let mut writes: Vec<RestoredProperty> = Vec::new();
        view.recover_view_state(false, &mut writes);
        assert_eq!(
            writes,
            [
                RestoredProperty::CornerRadius,
                RestoredProperty::ClipsToBounds,
                RestoredProperty::UserInteraction,
                RestoredProperty::BackgroundColor,
                RestoredProperty::TextColor,
                RestoredProperty::Placeholder,
            ]
        );
        let field = view.as_text_field().unwrap();
        assert!(same_color(field.text_color, Some(GREEN)));
        assert_eq!(field.placeholder.as_deref(), Some("Email"));
    }

    #[test]
    fn text_field_keeps_host_placeholder_unless_forced() {
        let mut view = View::new(ViewKind::TextField(TextField {
            placeholder: Some("Email".to_string()),
            ..TextField::default()
        }));
        activate(&mut view);
        if let ViewKind::TextField(field) = &mut view.kind {
            field.placeholder = Some("Search".to_string());
        }
        let mut natural = view.clone();
        natural.recover_view_state(false, &mut ());
        assert_eq!(natural.as_text_field().unwrap().placeholder.as_deref(), Some("Search"));

        view.recover_view_state(true, &mut ());
        assert_eq!(view.as_text_field().unwrap().placeholder.as_deref(), Some("Email"));
    }

    #[test]
    fn label_restores_constraints_before_text_color() {
        let mut view = View::new(ViewKind::Label(Label {
            number_of_lines: 3,
            text_color: Some(GREEN),
            ..Label::default()
        }));
        view.height_constraints.push(20.0);
        activate(&mut view);
        assert!(view.height_constraints.has_backup());

        let mut writes: Vec<RestoredProperty> = Vec::new();
        view.recover_view_state(false, &mut writes);
        let constraints = writes
            .iter()
            .position(|p| *p == RestoredProperty::HeightConstraints)
            .unwrap();
        let color = writes
            .iter()
            .position(|p| *p == RestoredProperty::TextColor)
            .unwrap();
        let background = writes
            .iter()
            .position(|p| *p == RestoredProperty::BackgroundColor)
            .unwrap();
        assert!(background < constraints && constraints < color);
        assert!(!view.height_constraints.has_backup());
        assert_eq!(view.height_constraints.first_constant(), Some(20.0));
        assert!(same_color(view.as_label().unwrap().text_color, Some(GREEN)));
    }

    #[test]
    fn single_line_label_is_not_pinned() {
        let mut view = View::new(ViewKind::Label(Label::default()));
        view.height_constraints.push(5.0);
        activate(&mut view);
        assert!(!view.height_constraints.has_backup());
        assert_eq!(view.height_constraints.all().len(), 1);
    }

    #[test]
    fn pinning_follows_the_label_line_count_not_the_override() {
        // One line of its own, three placeholder lines.
        let mut single = View::new(ViewKind::Label(Label::default()));
        single.text.number_of_lines = TextNumberOfLines::Custom(3);
        single.height_constraints.push(20.0);
        activate(&mut single);
        assert!(!single.height_constraints.has_backup());
        assert_eq!(single.height_constraints.first_constant(), Some(20.0));

        // Unlimited lines of its own, three placeholder lines.
        let mut unlimited = View::new(ViewKind::Label(Label {
            number_of_lines: 0,
            ..Label::default()
        }));
        unlimited.text.number_of_lines = TextNumberOfLines::Custom(3);
        unlimited.height_constraints.push(20.0);
        activate(&mut unlimited);
        assert!(unlimited.height_constraints.has_backup());
        unlimited.recover_view_state(false, &mut ());
        assert!(!unlimited.height_constraints.has_backup());
        assert_eq!(unlimited.height_constraints.all().len(), 1);
        assert_eq!(unlimited.height_constraints.first_constant(), Some(20.0));
    }

    #[test]
    fn image_restored_when_empty_or_forced() {
        let original = ImageRef::new(7, Size::new(10.0, 10.0));
        let replacement = ImageRef::new(8, Size::new(10.0, 10.0));
        let mut view = View::new(ViewKind::Image(ImageView {
            image: Some(original.clone()),
        }));
        activate(&mut view);
        let ViewKind::Image(image_view) = &view.kind else {
            unreachable!()
        };
        assert!(image_view.image.is_none());

        let mut empty = view.clone();
        empty.recover_view_state(false, &mut ());
        let ViewKind::Image(image_view) = &empty.kind else {
            unreachable!()
        };
        assert_eq!(image_view.image, Some(original.clone()));

        if let ViewKind::Image(image_view) = &mut view.kind {
            image_view.image = Some(replacement.clone());
        }
        let mut natural = view.clone();
        natural.recover_view_state(false, &mut ());
        let ViewKind::Image(image_view) = &natural.kind else {
            unreachable!()
        };
        assert_eq!(image_view.image, Some(replacement));

        view.recover_view_state(true, &mut ());
        let ViewKind::Image(image_view) = &view.kind else {
            unreachable!()
        };
        assert_eq!(image_view.image, Some(original));
    }

    #[test]
    fn button_title_ignores_forced() {
        let mut view = View::new(ViewKind::Button(Button {
            title: Some("Buy".to_string()),
        }));
        activate(&mut view);
        if let ViewKind::Button(button) = &mut view.kind {
            button.title = Some("Sold out".to_string());
        }
        view.recover_view_state(true, &mut ());
        let ViewKind::Button(button) = &view.kind else {
            unreachable!()
        };
        assert_eq!(button.title.as_deref(), Some("Sold out"));

        let mut view = View::new(ViewKind::Button(Button {
            title: Some("Buy".to_string()),
        }));
        activate(&mut view);
        view.recover_view_state(false, &mut ());
        let ViewKind::Button(button) = &view.kind else {
            unreachable!()
        };
        assert_eq!(button.title.as_deref(), Some("Buy"));
    }

    #[test]
    fn header_footer_background_always_restored() {
        let mut view = View::new(ViewKind::HeaderFooter(HeaderFooter {
            background_view: Some(BackgroundView {
                background_color: Some(GREEN),
            }),
        }));
        activate(&mut view);
        if let ViewKind::HeaderFooter(hf) = &mut view.kind {
            hf.background_view = Some(BackgroundView {
                background_color: Some(BLUE),
            });
        }
        let mut writes: Vec<RestoredProperty> = Vec::new();
        view.recover_view_state(false, &mut writes);
        assert_eq!(writes.last(), Some(&RestoredProperty::BackgroundViewColor));
        let ViewKind::HeaderFooter(hf) = &view.kind else {
            unreachable!()
        };
        assert!(same_color(
            hf.background_view.as_ref().and_then(|b| b.background_color),
            Some(GREEN)
        ));
    }

    #[test]
    fn second_recovery_is_noop() {
        let mut view = View::default().with_background(RED);
        view.corner_radius = 8.0;
        activate(&mut view);
        view.recover_view_state(false, &mut ());
        let after_first = (view.corner_radius, view.clips_to_bounds, view.background_color);

        let mut writes: Vec<RestoredProperty> = Vec::new();
        view.recover_view_state(false, &mut writes);
        assert!(writes.is_empty());
        assert_eq!(view.corner_radius, after_first.0);
        assert_eq!(view.clips_to_bounds, after_first.1);
        assert!(same_color(view.background_color, after_first.2));
    }
}
