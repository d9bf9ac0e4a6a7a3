// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Inline rich-text markup for plain-text note bodies.
//!
//! Formatting lives inside the note text as paired in-band markers
//! (`**bold**`, `*italic*`, `__underline__`, `~~strike~~` and
//! `{color}text{/color}`). This crate applies and removes formats on a
//! selection, parses marked-up text into styled [`FormattedSegment`]s,
//! strips markup, and answers which formats are open at the cursor.
//!
//! Every operation is a pure function of its inputs. Positions are UTF-16
//! code unit offsets, matching platform text APIs.

mod apply;
mod error;
mod format_color;
mod format_type;
mod markers;
mod segments;
mod segments_html;
mod selection;
mod state_query;
mod strip;

pub use crate::apply::{apply_format, toggle_format, FormatChange};
pub use crate::error::FormatError;
pub use crate::format_color::FormatColor;
pub use crate::format_type::{ActionState, InlineFormatType};
pub use crate::segments::{parse_formatted_text, FormattedSegment, TextFormat};
pub use crate::segments_html::{markup_to_html, segments_to_html};
pub use crate::selection::Selection;
pub use crate::state_query::{action_states, get_active_formats};
pub use crate::strip::remove_all_formatting;
