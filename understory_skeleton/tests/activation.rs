// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hierarchical activation, delayed show and deferred recovery.

use kurbo::{Rect, Size};
use peniko::Color;
use understory_skeleton::{
    CollectionDataSource, CollectionDelegate, CollectionLayout, DeferredTransition,
    ImmediateTransition, Label, PlaceholderGeometry, PlaceholderLayer, ReloadData,
    ScrollDirection, SkeletonCollection, SkeletonConfig, SkeletonController, SkeletonStatus, View,
    ViewId, ViewKind, ViewTree, same_color,
};

#[derive(Debug, PartialEq)]
enum Call {
    Attach(ViewId, usize),
    Update(ViewId, usize),
    Detach(ViewId),
}

#[derive(Default)]
struct RecordingLayer(Vec<Call>);

impl PlaceholderLayer for RecordingLayer {
    fn attach(&mut self, view: ViewId, geometry: &PlaceholderGeometry, _: &SkeletonConfig) {
        self.0.push(Call::Attach(view, geometry.shapes.len()));
    }

    fn update(&mut self, view: ViewId, geometry: &PlaceholderGeometry) {
        self.0.push(Call::Update(view, geometry.shapes.len()));
    }

    fn detach(&mut self, view: ViewId) {
        self.0.push(Call::Detach(view));
    }
}

const RED: Color = Color::from_rgba8(255, 0, 0, 255);

struct Card {
    views: ViewTree,
    root: ViewId,
    header: ViewId,
    title: ViewId,
    avatar: ViewId,
    footer: ViewId,
}

/// root
/// ├── header (container)
/// │   ├── title (2-line label)
/// │   └── avatar
/// ├── footer (not skeletonable)
fn card() -> Card {
    let mut views = ViewTree::new();
    let root = views.insert_root(View::default().skeletonable());
    let header = views
        .insert_child(root, View::default().with_background(RED).skeletonable())
        .unwrap();
    let title = views
        .insert_child(
            header,
            View::new(ViewKind::Label(Label {
                number_of_lines: 2,
                text_color: Some(RED),
                ..Label::default()
            }))
            .with_bounds(Rect::new(0.0, 0.0, 200.0, 40.0))
            .skeletonable(),
        )
        .unwrap();
    let avatar = views
        .insert_child(
            header,
            View::default()
                .with_bounds(Rect::new(0.0, 0.0, 32.0, 32.0))
                .with_background(RED)
                .skeletonable(),
        )
        .unwrap();
    let footer = views.insert_child(root, View::default().with_background(RED)).unwrap();
    Card {
        views,
        root,
        header,
        title,
        avatar,
        footer,
    }
}

fn config() -> SkeletonConfig {
    SkeletonConfig::solid(Color::from_rgba8(200, 200, 200, 255))
}

#[test]
fn show_visits_skeletonable_views_and_attaches_leaves() {
    let Card {
        mut views,
        root,
        header,
        title,
        avatar,
        footer,
    } = card();
    let mut controller = SkeletonController::default();
    let mut layer = RecordingLayer::default();

    assert_eq!(controller.show_skeleton(&mut views, root, &config(), &mut layer), 2);
    assert_eq!(layer.0, [Call::Attach(title, 2), Call::Attach(avatar, 1)]);

    for id in [root, header, title, avatar] {
        assert_eq!(views.get(id).unwrap().status(), SkeletonStatus::On);
    }
    assert_eq!(views.get(footer).unwrap().status(), SkeletonStatus::Off);
    // Containers keep their content; only leaves are cleared.
    assert!(views.get(header).unwrap().saved_state().is_none());
    assert!(same_color(views.get(header).unwrap().background_color, Some(RED)));
    assert!(views.get(avatar).unwrap().saved_state().is_some());
}

#[test]
fn hide_detaches_then_recovers() {
    let Card {
        mut views,
        root,
        title,
        avatar,
        ..
    } = card();
    let mut controller = SkeletonController::default();
    let mut layer = RecordingLayer::default();
    controller.show_skeleton(&mut views, root, &config(), &mut layer);
    layer.0.clear();

    let mut transition = ImmediateTransition(());
    assert_eq!(
        controller.hide_skeleton(&mut views, root, false, &mut layer, &mut transition),
        2
    );
    assert_eq!(layer.0, [Call::Detach(title), Call::Detach(avatar)]);
    let label = views.get(title).unwrap();
    assert_eq!(label.status(), SkeletonStatus::Off);
    assert!(same_color(label.as_label().unwrap().text_color, Some(RED)));
    assert!(same_color(views.get(avatar).unwrap().background_color, Some(RED)));

    // Nothing left to hide.
    assert_eq!(
        controller.hide_skeleton(&mut views, root, false, &mut layer, &mut transition),
        0
    );
}

#[test]
fn update_reports_new_geometry() {
    let Card {
        mut views,
        root,
        title,
        avatar,
        ..
    } = card();
    let mut controller = SkeletonController::default();
    let mut layer = RecordingLayer::default();
    controller.show_skeleton(&mut views, root, &config(), &mut layer);
    layer.0.clear();

    views.get_mut(title).unwrap().bounds = Rect::new(0.0, 0.0, 200.0, 15.0);
    assert_eq!(controller.update_skeleton(&views, root, &mut layer), 2);
    assert_eq!(layer.0, [Call::Update(title, 1), Call::Update(avatar, 1)]);
}

#[test]
fn canceled_delayed_show_never_touches_views() {
    let Card {
        mut views,
        root,
        title,
        avatar,
        ..
    } = card();
    let mut controller = SkeletonController::default();
    let mut layer = RecordingLayer::default();

    controller
        .show_skeleton_after(&mut views, root, config(), 0, 300)
        .unwrap();
    assert!(controller.cancel_delayed_show(&mut views, root));
    assert!(!controller.cancel_delayed_show(&mut views, root));

    assert_eq!(controller.advance(10_000, &mut views, &mut layer), 0);
    assert!(layer.0.is_empty());
    for id in [title, avatar] {
        let view = views.get(id).unwrap();
        assert!(view.saved_state().is_none());
        assert!(!view.is_skeleton_active());
    }
}

#[test]
fn hiding_before_the_delay_cancels_the_show() {
    let Card {
        mut views,
        root,
        avatar,
        ..
    } = card();
    let mut controller = SkeletonController::default();
    let mut layer = RecordingLayer::default();

    controller.show_skeleton_after(&mut views, root, config(), 0, 300);
    assert!(views.get(root).unwrap().pending_show().is_some());
    controller.hide_skeleton(
        &mut views,
        root,
        false,
        &mut layer,
        &mut ImmediateTransition(()),
    );
    assert!(views.get(root).unwrap().pending_show().is_none());
    assert_eq!(controller.next_deadline(), None);

    controller.advance(300, &mut views, &mut layer);
    assert!(layer.0.is_empty());
    assert!(views.get(avatar).unwrap().saved_state().is_none());
}

#[test]
fn delayed_show_for_removed_root_is_dropped() {
    let Card {
        mut views,
        root,
        header,
        ..
    } = card();
    let mut controller = SkeletonController::default();
    let mut layer = RecordingLayer::default();

    controller.show_skeleton_after(&mut views, header, config(), 0, 50);
    views.remove(header);
    assert_eq!(controller.advance(50, &mut views, &mut layer), 0);
    assert!(layer.0.is_empty());
    assert!(!views.get(root).unwrap().is_skeleton_active());
    assert!(controller.show_skeleton_after(&mut views, header, config(), 0, 50).is_none());
}

#[test]
fn deferred_recovery_abandons_removed_views() {
    let Card {
        mut views,
        root,
        header,
        title,
        avatar,
        ..
    } = card();
    let mut controller = SkeletonController::default();
    let mut layer = RecordingLayer::default();
    controller.show_skeleton(&mut views, root, &config(), &mut layer);

    let mut transition = DeferredTransition::new();
    controller.hide_skeleton(&mut views, root, false, &mut layer, &mut transition);
    assert_eq!(transition.len(), 2);
    // Still cleared until the transition runs.
    assert!(views.get(title).unwrap().saved_state().is_some());

    views.remove(avatar);
    assert_eq!(transition.flush(&mut views, &mut ()), 1);
    assert!(views.get(title).unwrap().saved_state().is_none());
    assert!(!views.is_alive(avatar));
    assert_eq!(views.children(header), &[title]);
}

#[test]
fn deferred_recovery_abandons_reactivated_views() {
    let Card {
        mut views,
        root,
        avatar,
        ..
    } = card();
    let mut controller = SkeletonController::default();
    let mut layer = RecordingLayer::default();
    controller.show_skeleton(&mut views, root, &config(), &mut layer);

    let mut transition = DeferredTransition::new();
    controller.hide_skeleton(&mut views, root, false, &mut layer, &mut transition);
    controller.show_skeleton(&mut views, root, &config(), &mut layer);
    assert_eq!(transition.flush(&mut views, &mut ()), 0);

    // The new activation is intact and recovers normally.
    let avatar_view = views.get(avatar).unwrap();
    assert!(avatar_view.is_skeleton_active());
    assert!(avatar_view.saved_state().is_some());
    controller.hide_skeleton(
        &mut views,
        root,
        true,
        &mut layer,
        &mut ImmediateTransition(()),
    );
    assert!(same_color(views.get(avatar).unwrap().background_color, Some(RED)));
}

#[derive(Default)]
struct Collection {
    reloads: usize,
}

#[derive(Debug, PartialEq)]
struct Selection;

impl ReloadData for Collection {
    fn reload_data(&mut self) {
        self.reloads += 1;
    }
}

#[test]
fn collection_swaps_data_source_around_loading() {
    let mut host = Collection::default();
    let layout = CollectionLayout::Flow {
        direction: ScrollDirection::Vertical,
        item_size: Size::new(320.0, 44.0),
    };
    let mut collection = SkeletonCollection::new(Size::new(320.0, 480.0), layout);
    collection.set_data_source(vec!["a", "b"]);
    collection.set_delegate(Selection);
    assert_eq!(collection.estimated_number_of_rows(), 11);

    collection.update_dummy_data_source(&mut host);
    assert_eq!(host.reloads, 1);
    let Some(CollectionDataSource::Dummy(dummy)) = collection.data_source() else {
        panic!("dummy data source should be installed");
    };
    assert_eq!(dummy.number_of_rows(), 11);
    assert_eq!(dummy.original(), &["a", "b"]);
    let Some(CollectionDelegate::Dummy(delegate)) = collection.delegate() else {
        panic!("dummy delegate should be installed");
    };
    assert!(!delegate.allows_selection());

    assert!(collection.remove_dummy_data_source(&mut host, true));
    assert_eq!(host.reloads, 2);
    assert!(matches!(
        collection.data_source(),
        Some(CollectionDataSource::Original(items)) if items.len() == 2
    ));
    assert!(matches!(
        collection.delegate(),
        Some(CollectionDelegate::Original(Selection))
    ));
}
