// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-activation skeleton style.

use peniko::Color;
use smallvec::{SmallVec, smallvec};

use crate::appearance::SkeletonAppearance;

/// Colors handed to the placeholder layer.
#[derive(Clone, Debug)]
pub enum SkeletonStyle {
    /// A single flat color.
    Solid(Color),
    /// A gradient through the given colors, in order.
    Gradient(SmallVec<[Color; 4]>),
}

impl SkeletonStyle {
    /// A gradient that brightens `base` towards its middle stop.
    #[must_use]
    pub fn gradient_from(base: Color) -> Self {
        let [r, g, b, a] = base.components;
        let lighten = |c: f32| c + (1.0 - c) * 0.35;
        let light = Color::new([lighten(r), lighten(g), lighten(b), a]);
        Self::Gradient(smallvec![base, light, base])
    }

    /// The colors of this style, first to last.
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        match self {
            Self::Solid(color) => core::slice::from_ref(color),
            Self::Gradient(colors) => colors,
        }
    }
}

/// How a skeleton is shown.
#[derive(Clone, Debug)]
pub struct SkeletonConfig {
    /// Placeholder colors.
    pub style: SkeletonStyle,
    /// Whether the placeholder layer should run its sliding/pulse animation.
    pub animated: bool,
}

impl SkeletonConfig {
    /// A solid placeholder in `color`.
    #[must_use]
    pub fn solid(color: Color) -> Self {
        Self {
            style: SkeletonStyle::Solid(color),
            animated: false,
        }
    }

    /// An animated gradient placeholder based on `base`.
    #[must_use]
    pub fn animated_gradient(base: Color) -> Self {
        Self {
            style: SkeletonStyle::gradient_from(base),
            animated: true,
        }
    }

    /// A solid placeholder in the appearance tint.
    #[must_use]
    pub fn from_appearance(appearance: &SkeletonAppearance) -> Self {
        Self::solid(appearance.tint())
    }
}
