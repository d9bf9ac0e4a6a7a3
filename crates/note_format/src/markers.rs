// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Recognition of in-band markers.
//!
//! Markers are tried in a fixed order at every position:
//!
//! | Order | Marker    | Token                  |
//! |-------|-----------|------------------------|
//! | 1     | `**`      | toggle bold            |
//! | 2     | `~~`      | toggle strikethrough   |
//! | 3     | `__`      | toggle underline       |
//! | 4     | `{name}`  | open color `name`      |
//! | 5     | `{/name}` | close color (name may be empty) |
//! | 6     | `*`       | toggle italic          |
//!
//! `**` must win over `*`, otherwise bold would read as two italics. A color
//! name never starts with `/`, which keeps closing markers out of rule 4.

use crate::InlineFormatType;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Marker<'a> {
    Toggle(InlineFormatType),
    ColorOpen(&'a str),
    ColorClose(&'a str),
}

impl<'a> Marker<'a> {
    /// Recognise the marker at the start of `rest`, returning it together
    /// with its length in bytes.
    pub(crate) fn at(rest: &'a str) -> Option<(Self, usize)> {
        for format in [
            InlineFormatType::Bold,
            InlineFormatType::StrikeThrough,
            InlineFormatType::Underline,
        ] {
            let marker = format.marker();
            if rest.starts_with(marker) {
                return Some((Self::Toggle(format), marker.len()));
            }
        }

        if let Some((name, len)) = bracket_group(rest) {
            let marker = match name.strip_prefix('/') {
                None => Self::ColorOpen(name),
                Some(closed) => Self::ColorClose(closed),
            };
            return Some((marker, len));
        }

        if rest.starts_with('*') {
            return Some((Self::Toggle(InlineFormatType::Italic), 1));
        }

        None
    }
}

/// Whether `name` survives being written as `{name}` and parsed back as a
/// color.
pub(crate) fn is_color_name(name: &str) -> bool {
    !name.is_empty() && !name.contains('}') && !name.starts_with('/')
}

/// Match `{...}` with at least one character inside at the start of `rest`.
fn bracket_group(rest: &str) -> Option<(&str, usize)> {
    let inner = rest.strip_prefix('{')?;
    let close = inner.find('}')?;
    if close == 0 {
        return None;
    }
    Some((&inner[..close], close + 2))
}
