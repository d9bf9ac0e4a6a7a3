// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Stripping all markup from a note body.

use once_cell::sync::Lazy;
use regex::Regex;

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*").unwrap());
static STRIKE_THROUGH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"~~(.*?)~~").unwrap());
static UNDERLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"__(.*?)__").unwrap());
static STAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*").unwrap());

/// Any `{...}` bracket group, which covers both `{name}` and `{/name}`.
pub(crate) static COLOR_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{[^}]+\}").unwrap());
static COLOR_CLOSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{/[^}]+\}").unwrap());

/// Remove every marker from `text`, keeping the content.
///
/// `**` and `*` are deleted wherever they occur. `~~` and `__` are only
/// removed in matched pairs on a single line, so an unpaired `~~` survives.
/// Bracket groups are deleted whole.
///
/// Deleting one kind of marker can join fragments into a new marker (`_*_`
/// becomes `__`), so passes repeat until nothing changes. The result is a
/// fixed point: stripping it again returns it unchanged.
pub fn remove_all_formatting(text: &str) -> String {
    let mut stripped = strip_once(text);
    loop {
        let again = strip_once(&stripped);
        if again == stripped {
            return stripped;
        }
        stripped = again;
    }
}

fn strip_once(text: &str) -> String {
    // Order matters: later patterns assume earlier markers are gone.
    let text = BOLD.replace_all(text, "");
    let text = STRIKE_THROUGH.replace_all(&text, "${1}");
    let text = UNDERLINE.replace_all(&text, "${1}");
    let text = COLOR_MARKER.replace_all(&text, "");
    let text = COLOR_CLOSE.replace_all(&text, "");
    STAR.replace_all(&text, "").into_owned()
}
