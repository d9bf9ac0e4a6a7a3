// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Selections and UTF-16 offset conversion.
//!
//! Editors report positions in UTF-16 code units while Rust strings are
//! indexed by UTF-8 bytes. Everything that slices text goes through
//! [`byte_offset`] so that no operation can split a character or index past
//! the end of the text.

use std::ops::Range;

/// A selection in the markup-inclusive note text, in UTF-16 code units.
///
/// `start` may be greater than `end` (a backward selection);
/// [`Selection::sel_start`] and [`Selection::sel_end`] normalise it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A collapsed selection at `offset`.
    pub fn cursor(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    pub fn sel_start(&self) -> usize {
        self.start.min(self.end)
    }

    pub fn sel_end(&self) -> usize {
        self.start.max(self.end)
    }

    /// The byte range of `text` this selection covers.
    ///
    /// Offsets past the end are clamped to the end of `text`. An offset in
    /// the middle of a surrogate pair widens the range to cover the whole
    /// character.
    pub(crate) fn byte_range(&self, text: &str) -> Range<usize> {
        let start = byte_offset(text, self.sel_start(), Bias::Backward);
        let end = byte_offset(text, self.sel_end(), Bias::Forward);
        if end == text.len() && self.sel_end() > utf16_len(text) {
            log::warn!(
                "selection {}..{} extends past the end of the text, clamping",
                self.sel_start(),
                self.sel_end()
            );
        }
        start..end
    }
}

impl From<Range<usize>> for Selection {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

/// Which way to move an offset that lands inside a surrogate pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Bias {
    Backward,
    Forward,
}

/// Convert a UTF-16 offset into a byte offset on a char boundary of `text`.
pub(crate) fn byte_offset(text: &str, utf16_offset: usize, bias: Bias) -> usize {
    let mut units = 0;
    for (idx, ch) in text.char_indices() {
        if units == utf16_offset {
            return idx;
        }
        let next = units + ch.len_utf16();
        if utf16_offset < next {
            return match bias {
                Bias::Backward => idx,
                Bias::Forward => idx + ch.len_utf8(),
            };
        }
        units = next;
    }
    text.len()
}

pub(crate) fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}
