// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Applying and removing formats on a selected span.
//!
//! Only the selected text is rewritten; markers outside the selection are
//! never touched, even when they pair with markers inside it.

use crate::format_color::FormatColor;
use crate::markers::is_color_name;
use crate::state_query::get_active_formats;
use crate::strip::COLOR_MARKER;
use crate::{InlineFormatType, Selection};

/// A change to make to the selected span.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormatChange {
    /// Wrap the span in the format's markers.
    Apply(InlineFormatType),
    /// Delete every marker of the format inside the span.
    Remove(InlineFormatType),
    /// Wrap the span in `{name}` ... `{/name}`.
    Color(String),
    /// Delete every color marker inside the span.
    RemoveColor,
}

impl FormatChange {
    /// `Apply(format)` when `enabled`, otherwise `Remove(format)`.
    pub fn inline(format: InlineFormatType, enabled: bool) -> Self {
        if enabled {
            Self::Apply(format)
        } else {
            Self::Remove(format)
        }
    }
}

impl From<FormatColor> for FormatChange {
    fn from(color: FormatColor) -> Self {
        Self::Color(color.hex().to_owned())
    }
}

/// Apply `change` to the span of `text` covered by `selection` and return
/// the new text.
///
/// An empty selection returns `text` unchanged, as does a color name that
/// could not be parsed back (empty, containing `}`, or starting with `/`).
pub fn apply_format(
    text: &str,
    selection: Selection,
    change: &FormatChange,
) -> String {
    if selection.is_collapsed() {
        return text.to_owned();
    }

    let range = selection.byte_range(text);
    if range.is_empty() {
        return text.to_owned();
    }

    let before = &text[..range.start];
    let selected = &text[range.clone()];
    let after = &text[range.end..];

    let formatted = match change {
        FormatChange::Apply(format) => {
            let marker = format.marker();
            format!("{marker}{selected}{marker}")
        }
        FormatChange::Remove(format) => selected.replace(format.marker(), ""),
        FormatChange::Color(name) => {
            if !is_color_name(name) {
                log::warn!("ignoring unusable color name {name:?}");
                return text.to_owned();
            }
            format!("{{{name}}}{selected}{{/{name}}}")
        }
        FormatChange::RemoveColor => {
            COLOR_MARKER.replace_all(selected, "").into_owned()
        }
    };

    log::debug!(
        "applied {change:?} to {}..{} ({} -> {} bytes)",
        selection.sel_start(),
        selection.sel_end(),
        selected.len(),
        formatted.len()
    );

    [before, formatted.as_str(), after].concat()
}

/// Toggle `format` on the selection the way the toolbar does: remove it
/// when it is active at the start of the selection, apply it otherwise.
pub fn toggle_format(
    text: &str,
    selection: Selection,
    format: InlineFormatType,
) -> String {
    let active = get_active_formats(text, selection.sel_start());
    apply_format(
        text,
        selection,
        &FormatChange::inline(format, !active.contains(&format)),
    )
}
