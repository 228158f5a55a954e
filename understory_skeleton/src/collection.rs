// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collection containers: swapping in a dummy data source while loading.
//!
//! While a collection shows skeleton cells, its real data source is parked
//! inside a [`DummyDataSource`] that reports placeholder rows, and its
//! delegate (if any) inside a [`DummyDelegate`]. The container decides when to
//! reload; this module only tracks what is installed.

use kurbo::Size;

use crate::util::ceil_to_i64;

/// Something that can re-query its data source.
pub trait ReloadData {
    /// Reloads every section and row.
    fn reload_data(&mut self);
}

/// Scroll axis of a flow layout.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    /// Items flow top to bottom.
    #[default]
    Vertical,
    /// Items flow leading to trailing.
    Horizontal,
}

/// The layout of a collection, as far as row estimation cares.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CollectionLayout {
    /// A flow layout with uniform items.
    Flow {
        /// Scroll axis.
        direction: ScrollDirection,
        /// Size of every item.
        item_size: Size,
    },
    /// Any other layout; no rows can be estimated.
    Other,
}

/// Number of placeholder rows needed to fill `frame` with `layout`.
///
/// For flow layouts this is the frame extent divided by the item extent along
/// the scroll axis, rounded up. Other layouts and empty items yield `0`.
#[must_use]
pub fn estimated_number_of_rows(frame: Size, layout: CollectionLayout) -> usize {
    let CollectionLayout::Flow {
        direction,
        item_size,
    } = layout
    else {
        return 0;
    };
    let (extent, item) = match direction {
        ScrollDirection::Vertical => (frame.height, item_size.height),
        ScrollDirection::Horizontal => (frame.width, item_size.width),
    };
    if item <= 0.0 {
        return 0;
    }
    usize::try_from(ceil_to_i64(extent / item)).unwrap_or(0)
}

/// Placeholder data source wrapping the host's original one.
#[derive(Clone, Debug)]
pub struct DummyDataSource<D> {
    original: D,
    rows: usize,
}

impl<D> DummyDataSource<D> {
    /// Wraps `original`, reporting `rows` placeholder rows.
    #[must_use]
    pub fn new(original: D, rows: usize) -> Self {
        Self { original, rows }
    }

    /// Placeholder rows per section.
    #[must_use]
    pub fn number_of_rows(&self) -> usize {
        self.rows
    }

    /// The wrapped data source.
    #[must_use]
    pub fn original(&self) -> &D {
        &self.original
    }

    /// Unwraps the original data source.
    #[must_use]
    pub fn into_original(self) -> D {
        self.original
    }
}

/// The data source installed on a collection.
#[derive(Clone, Debug)]
pub enum CollectionDataSource<D> {
    /// The host's own data source.
    Original(D),
    /// The placeholder source shown while the skeleton is active.
    Dummy(DummyDataSource<D>),
}

/// Placeholder delegate parking the host's original one.
///
/// Placeholder cells are not selectable; layout queries still go to the
/// original.
#[derive(Clone, Debug)]
pub struct DummyDelegate<G> {
    original: G,
}

impl<G> DummyDelegate<G> {
    /// Wraps `original`.
    #[must_use]
    pub fn new(original: G) -> Self {
        Self { original }
    }

    /// Placeholder cells never take selection.
    #[must_use]
    pub fn allows_selection(&self) -> bool {
        false
    }

    /// The wrapped delegate.
    #[must_use]
    pub fn original(&self) -> &G {
        &self.original
    }

    /// Unwraps the original delegate.
    #[must_use]
    pub fn into_original(self) -> G {
        self.original
    }
}

/// The delegate installed on a collection.
#[derive(Clone, Debug)]
pub enum CollectionDelegate<G> {
    /// The host's own delegate.
    Original(G),
    /// The placeholder delegate installed alongside the dummy data source.
    Dummy(DummyDelegate<G>),
}

/// Data source and delegate bookkeeping of one collection view.
///
/// `G` is the host's delegate type; collections without one use `()`.
#[derive(Clone, Debug)]
pub struct SkeletonCollection<D, G = ()> {
    data_source: Option<CollectionDataSource<D>>,
    delegate: Option<CollectionDelegate<G>>,
    frame: Size,
    layout: CollectionLayout,
}

impl<D, G> SkeletonCollection<D, G> {
    /// Creates a collection of the given frame size and layout, with no data
    /// source and no delegate.
    #[must_use]
    pub fn new(frame: Size, layout: CollectionLayout) -> Self {
        Self {
            data_source: None,
            delegate: None,
            frame,
            layout,
        }
    }

    /// Installs the host's data source, replacing whatever was installed.
    pub fn set_data_source(&mut self, data_source: D) {
        self.data_source = Some(CollectionDataSource::Original(data_source));
    }

    /// The installed data source.
    #[must_use]
    pub fn data_source(&self) -> Option<&CollectionDataSource<D>> {
        self.data_source.as_ref()
    }

    /// Installs the host's delegate, replacing whatever was installed.
    ///
    /// Set while the dummy data source is installed, the delegate is wrapped
    /// right away.
    pub fn set_delegate(&mut self, delegate: G) {
        self.delegate = Some(if self.is_dummy_installed() {
            CollectionDelegate::Dummy(DummyDelegate::new(delegate))
        } else {
            CollectionDelegate::Original(delegate)
        });
    }

    /// The installed delegate.
    #[must_use]
    pub fn delegate(&self) -> Option<&CollectionDelegate<G>> {
        self.delegate.as_ref()
    }

    /// Returns `true` while the dummy data source is installed.
    #[must_use]
    pub fn is_dummy_installed(&self) -> bool {
        matches!(self.data_source, Some(CollectionDataSource::Dummy(_)))
    }

    /// Sets the frame size used for row estimation.
    pub fn set_frame(&mut self, frame: Size) {
        self.frame = frame;
    }

    /// Placeholder rows for the current frame and layout.
    #[must_use]
    pub fn estimated_number_of_rows(&self) -> usize {
        estimated_number_of_rows(self.frame, self.layout)
    }

    /// Wraps the original data source (and delegate) in dummies and reloads.
    ///
    /// Does nothing (and returns `false`) without an original data source or
    /// when a dummy is already installed.
    pub fn add_dummy_data_source(&mut self, host: &mut dyn ReloadData) -> bool {
        let rows = self.estimated_number_of_rows();
        match self.data_source.take() {
            Some(CollectionDataSource::Original(original)) => {
                self.data_source = Some(CollectionDataSource::Dummy(DummyDataSource::new(
                    original, rows,
                )));
                self.delegate = self.delegate.take().map(|delegate| match delegate {
                    CollectionDelegate::Original(host_delegate) => {
                        CollectionDelegate::Dummy(DummyDelegate::new(host_delegate))
                    }
                    dummy @ CollectionDelegate::Dummy(_) => dummy,
                });
                tracing::debug!(rows, "dummy data source installed");
                host.reload_data();
                true
            }
            other => {
                self.data_source = other;
                false
            }
        }
    }

    /// Reloads when a dummy is installed; installs one otherwise.
    pub fn update_dummy_data_source(&mut self, host: &mut dyn ReloadData) {
        if self.is_dummy_installed() {
            host.reload_data();
        } else {
            self.add_dummy_data_source(host);
        }
    }

    /// Reinstalls the original data source and delegate, reloading if
    /// `reload_after`.
    ///
    /// Returns `false` if no dummy was installed.
    pub fn remove_dummy_data_source(
        &mut self,
        host: &mut dyn ReloadData,
        reload_after: bool,
    ) -> bool {
        match self.data_source.take() {
            Some(CollectionDataSource::Dummy(dummy)) => {
                self.data_source = Some(CollectionDataSource::Original(dummy.into_original()));
                self.delegate = self.delegate.take().map(|delegate| match delegate {
                    CollectionDelegate::Dummy(dummy) => {
                        CollectionDelegate::Original(dummy.into_original())
                    }
                    original @ CollectionDelegate::Original(_) => original,
                });
                tracing::debug!(reload_after, "dummy data source removed");
                if reload_after {
                    host.reload_data();
                }
                true
            }
            other => {
                self.data_source = other;
                false
            }
        }
    }
}
