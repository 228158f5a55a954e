// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal text content model: fonts and attributed strings.
//!
//! Only what placeholder sizing needs is modeled. Shaping and layout belong
//! to the host's text stack.

use alloc::string::String;
use smallvec::SmallVec;

/// Font metrics relevant to placeholder sizing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Font {
    /// Point size.
    pub size: f64,
    /// Distance between consecutive baselines.
    pub line_height: f64,
}

impl Font {
    /// Creates a font description.
    #[must_use]
    pub const fn new(size: f64, line_height: f64) -> Self {
        Self { size, line_height }
    }
}

/// Attributes attached to a run of text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextAttributes {
    /// Font override for the run.
    pub font: Option<Font>,
}

impl TextAttributes {
    /// Attributes carrying only a font.
    #[must_use]
    pub const fn with_font(font: Font) -> Self {
        Self { font: Some(font) }
    }
}

/// A string with attribute runs.
///
/// Runs are stored by their exclusive end byte offset, in order, and always
/// cover the whole string.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttributedText {
    text: String,
    runs: SmallVec<[(usize, TextAttributes); 2]>,
}

impl AttributedText {
    /// Creates attributed text with no attributes.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_attributes(text, TextAttributes::default())
    }

    /// Creates attributed text with a single run of `attributes`.
    #[must_use]
    pub fn with_attributes(text: impl Into<String>, attributes: TextAttributes) -> Self {
        let text = text.into();
        let mut runs = SmallVec::new();
        if !text.is_empty() {
            runs.push((text.len(), attributes));
        }
        Self { text, runs }
    }

    /// Appends `text` as a new run with `attributes`.
    pub fn push(&mut self, text: &str, attributes: TextAttributes) {
        if text.is_empty() {
            return;
        }
        self.text.push_str(text);
        self.runs.push((self.text.len(), attributes));
    }

    /// The plain string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if there is no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Attributes of the run containing byte `index`.
    #[must_use]
    pub fn attributes_at(&self, index: usize) -> Option<&TextAttributes> {
        self.runs
            .iter()
            .find(|(end, _)| index < *end)
            .map(|(_, attributes)| attributes)
    }

    /// Font of the first character, if the text carries one.
    #[must_use]
    pub fn leading_font(&self) -> Option<Font> {
        self.attributes_at(0).and_then(|a| a.font)
    }
}
