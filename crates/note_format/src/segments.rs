// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Parsing marked-up text into styled segments.
//!
//! The parser is a single left-to-right pass. Its only state is the current
//! [`TextFormat`]; every marker is a transition on that record (toggle a
//! flag, set or clear the color). Text between markers accumulates and is
//! flushed as a [`FormattedSegment`] whenever a marker is reached.

use crate::markers::Marker;
use crate::InlineFormatType;

/// The formatting of a run of text. Nested markers are flattened into this
/// struct.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextFormat {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strike_through: bool,
    /// The name inside the open `{name}` marker, passed through unchecked.
    pub color: Option<String>,
}

impl TextFormat {
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }

    pub fn has(&self, format: InlineFormatType) -> bool {
        match format {
            InlineFormatType::Bold => self.bold,
            InlineFormatType::Italic => self.italic,
            InlineFormatType::Underline => self.underline,
            InlineFormatType::StrikeThrough => self.strike_through,
        }
    }

    fn toggle(&mut self, format: InlineFormatType) {
        let flag = match format {
            InlineFormatType::Bold => &mut self.bold,
            InlineFormatType::Italic => &mut self.italic,
            InlineFormatType::Underline => &mut self.underline,
            InlineFormatType::StrikeThrough => &mut self.strike_through,
        };
        *flag = !*flag;
    }
}

/// A run of text sharing one format. Each marker ends a run, so two
/// neighbouring segments may carry equal formats (`**a****b**`).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormattedSegment {
    pub text: String,
    pub format: TextFormat,
}

impl FormattedSegment {
    pub fn new(text: impl Into<String>, format: TextFormat) -> Self {
        Self {
            text: text.into(),
            format,
        }
    }
}

/// Parse `text` into segments whose concatenated text is `text` with the
/// markers removed.
///
/// Unterminated markers leave their format on until the end of the text.
/// Closing color markers clear the color whatever name they carry, including
/// the nameless `{/}`.
pub fn parse_formatted_text(text: &str) -> Vec<FormattedSegment> {
    let mut parser = SegmentParser::default();
    let mut rest = text;

    while let Some(ch) = rest.chars().next() {
        let advance = match Marker::at(rest) {
            Some((marker, len)) => {
                parser.flush();
                match marker {
                    Marker::Toggle(format) => parser.format.toggle(format),
                    Marker::ColorOpen(name) => {
                        parser.format.color = Some(name.to_owned())
                    }
                    Marker::ColorClose(name) => {
                        if parser.format.color.as_deref() != Some(name) {
                            log::trace!(
                                "{{/{name}}} closes color {:?}",
                                parser.format.color
                            );
                        }
                        parser.format.color = None
                    }
                }
                len
            }
            None => {
                parser.current.push(ch);
                ch.len_utf8()
            }
        };
        rest = &rest[advance..];
    }

    let segments = parser.finish();
    log::trace!(
        "parsed {} bytes of markup into {} segments",
        text.len(),
        segments.len()
    );
    segments
}

#[derive(Default)]
struct SegmentParser {
    segments: Vec<FormattedSegment>,
    current: String,
    format: TextFormat,
}

impl SegmentParser {
    fn flush(&mut self) {
        if self.current.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.current);
        self.segments
            .push(FormattedSegment::new(text, self.format.clone()));
    }

    fn finish(mut self) -> Vec<FormattedSegment> {
        self.flush();
        #[cfg(feature = "assert-invariants")]
        assert_invariants(&self.segments);
        self.segments
    }
}

#[cfg(feature = "assert-invariants")]
fn assert_invariants(segments: &[FormattedSegment]) {
    for segment in segments {
        assert!(!segment.text.is_empty(), "empty segment in {segments:?}");
    }
}
