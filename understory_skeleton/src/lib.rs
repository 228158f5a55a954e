// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Skeleton: skeleton loading placeholders for UI views.
//!
//! While content loads, a UI can show grey shapes approximating the final
//! layout. This crate owns the bookkeeping behind that effect: what each
//! view looked like before, what to clear while the placeholder shows, what
//! shapes to draw, and how to put everything back without clobbering values
//! the app assigned in the meantime.
//!
//! - [`ViewTree`]: arena of [`View`] records addressed by generational [`ViewId`]s.
//! - [`Recoverable`]: per-category snapshot and restore of view properties.
//! - [`TextNode`]: line metrics of text-bearing views ([`LabelNode`], [`TextViewNode`]).
//! - [`placeholder_geometry`]: the rounded rects handed to a [`PlaceholderLayer`].
//! - [`SkeletonController`]: hierarchical show/hide/update and delayed show.
//! - [`Transition`]: how recovery reaches the tree, right away or deferred.
//! - [`SkeletonCollection`]: dummy data source and delegate swapping for collection containers.
//!
//! Drawing is not part of this crate. Hosts implement [`PlaceholderLayer`] on
//! top of their renderer and mirror their widgets into [`View`] records.
//!
//! ## Natural and forced recovery
//!
//! Activation replaces content with a [`CLEAR`] marker. Natural recovery only
//! restores properties still holding that marker, so an image or color the
//! app set while loading survives. Forced recovery writes every saved value
//! back.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Rect;
//! use peniko::Color;
//! use understory_skeleton::{
//!     ImmediateTransition, Label, PlaceholderGeometry, PlaceholderLayer, SkeletonConfig,
//!     SkeletonController, View, ViewId, ViewKind, ViewTree,
//! };
//!
//! #[derive(Default)]
//! struct Shapes(usize);
//!
//! impl PlaceholderLayer for Shapes {
//!     fn attach(&mut self, _: ViewId, geometry: &PlaceholderGeometry, _: &SkeletonConfig) {
//!         self.0 += geometry.shapes.len();
//!     }
//!     fn update(&mut self, _: ViewId, _: &PlaceholderGeometry) {}
//!     fn detach(&mut self, _: ViewId) {}
//! }
//!
//! let white = Color::from_rgba8(255, 255, 255, 255);
//! let mut views = ViewTree::new();
//! let card = views.insert_root(View::default().skeletonable());
//! let title = views
//!     .insert_child(
//!         card,
//!         View::new(ViewKind::Label(Label { number_of_lines: 2, ..Label::default() }))
//!             .with_bounds(Rect::new(0.0, 0.0, 200.0, 40.0))
//!             .with_background(white)
//!             .skeletonable(),
//!     )
//!     .unwrap();
//!
//! let mut controller = SkeletonController::default();
//! let config = SkeletonConfig::from_appearance(controller.appearance());
//! let mut layer = Shapes::default();
//! controller.show_skeleton(&mut views, card, &config, &mut layer);
//! assert!(views.get(title).unwrap().is_skeleton_active());
//! assert_eq!(layer.0, 2);
//!
//! controller.hide_skeleton(&mut views, card, false, &mut layer, &mut ImmediateTransition(()));
//! let background = views.get(title).unwrap().background_color.unwrap();
//! assert_eq!(background.components, white.components);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod appearance;
mod collection;
mod config;
mod constraint;
mod controller;
mod placeholder;
mod recover;
mod state;
mod text;
mod text_node;
mod transition;
mod tree;
mod types;
mod util;
mod view;

pub use appearance::{DEFAULT_TINT, SkeletonAppearance, SkeletonAppearanceBuilder};
pub use collection::{
    CollectionDataSource, CollectionDelegate, CollectionLayout, DummyDataSource, DummyDelegate,
    ReloadData, ScrollDirection, SkeletonCollection, estimated_number_of_rows,
};
pub use config::{SkeletonConfig, SkeletonStyle};
pub use constraint::{ConstraintOwner, HeightConstraint, HeightConstraints};
pub use controller::SkeletonController;
pub use placeholder::{
    PlaceholderGeometry, PlaceholderLayer, number_of_lines, placeholder_geometry,
};
pub use recover::{Recoverable, RecoveryTrace, RestoredProperty};
pub use state::{
    ButtonViewState, HeaderFooterViewState, ImageViewState, SavedState, TextFieldState,
    TextViewState, ViewState,
};
pub use text::{AttributedText, Font, TextAttributes};
pub use text_node::{LabelNode, TextNode, TextNodeRef, TextViewNode};
pub use transition::{DeferredTransition, ImmediateTransition, Transition};
pub use tree::{RecoveryWork, ViewTree};
pub use types::{
    CLEAR, SkeletonFlags, SkeletonStatus, TextAlignment, TextLineHeight, TextNumberOfLines,
    UNBOUNDED_LINES, ViewId, is_clear, same_color,
};
pub use understory_timing::TimerId;
pub use view::{
    BackgroundView, Button, HeaderFooter, ImageRef, ImageView, Label, TextField, TextNodeConfig,
    TextView, View, ViewKind,
};
