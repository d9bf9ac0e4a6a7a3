// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! State queries: which formats are open at the cursor, and the toolbar
//! button states that follow from them.

use std::collections::{HashMap, HashSet};

use strum::IntoEnumIterator;

use crate::selection::{byte_offset, Bias};
use crate::{ActionState, InlineFormatType, Selection};

/// The toggle formats left open by the markup before `cursor` (a UTF-16
/// offset, clamped to the text).
///
/// A format is open when an odd number of its markers precede the cursor.
/// Italic counts only lone `*` characters, never the halves of `**`. Color
/// is not reported.
pub fn get_active_formats(
    text: &str,
    cursor: usize,
) -> HashSet<InlineFormatType> {
    let before = &text[..byte_offset(text, cursor, Bias::Backward)];
    InlineFormatType::iter()
        .filter(|format| marker_count(before, *format) % 2 == 1)
        .collect()
}

/// Toolbar state of every inline format button for `selection` in `text`.
pub fn action_states(
    text: &str,
    selection: Selection,
) -> HashMap<InlineFormatType, ActionState> {
    let active = get_active_formats(text, selection.sel_start());
    InlineFormatType::iter()
        .map(|format| {
            let state = if active.contains(&format) {
                ActionState::Reversed
            } else if selection.is_collapsed() {
                ActionState::Disabled
            } else {
                ActionState::Enabled
            };
            (format, state)
        })
        .collect()
}

fn marker_count(text: &str, format: InlineFormatType) -> usize {
    match format {
        InlineFormatType::Italic => lone_star_count(text),
        _ => text.matches(format.marker()).count(),
    }
}

fn lone_star_count(text: &str) -> usize {
    let bytes = text.as_bytes();
    (0..bytes.len())
        .filter(|&i| {
            bytes[i] == b'*'
                && (i == 0 || bytes[i - 1] != b'*')
                && bytes.get(i + 1) != Some(&b'*')
        })
        .count()
}
