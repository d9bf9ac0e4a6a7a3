// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! HTML preview of formatted segments.
//!
//! Each segment is rendered on its own, with its formats opened in a fixed
//! nesting order and closed in reverse:
//!
//! - bold          → `<strong>`
//! - italic        → `<em>`
//! - underline     → `<u>`
//! - strikethrough → `<del>`
//! - color         → `<span style="color: NAME;">`

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::{parse_formatted_text, FormattedSegment, InlineFormatType, TextFormat};

fn format_to_tag(format: InlineFormatType) -> &'static str {
    match format {
        InlineFormatType::Bold => "strong",
        InlineFormatType::Italic => "em",
        InlineFormatType::Underline => "u",
        InlineFormatType::StrikeThrough => "del",
    }
}

/// Render `segments` as an inline HTML fragment.
pub fn segments_to_html(segments: &[FormattedSegment]) -> String {
    let mut html = String::new();
    for segment in segments {
        emit_segment(&mut html, segment);
    }
    html
}

/// Parse `text` and render it as an inline HTML fragment.
pub fn markup_to_html(text: &str) -> String {
    segments_to_html(&parse_formatted_text(text))
}

fn emit_segment(html: &mut String, segment: &FormattedSegment) {
    let tags = open_tags(&segment.format);

    if let Some(color) = &segment.format.color {
        html.push_str("<span style=\"color: ");
        html.push_str(&encode_double_quoted_attribute(color));
        html.push_str(";\">");
    }
    for tag in &tags {
        html.push('<');
        html.push_str(tag);
        html.push('>');
    }

    html.push_str(&encode_text(&segment.text));

    for tag in tags.iter().rev() {
        html.push_str("</");
        html.push_str(tag);
        html.push('>');
    }
    if segment.format.color.is_some() {
        html.push_str("</span>");
    }
}

fn open_tags(format: &TextFormat) -> Vec<&'static str> {
    [
        InlineFormatType::Bold,
        InlineFormatType::Italic,
        InlineFormatType::Underline,
        InlineFormatType::StrikeThrough,
    ]
    .into_iter()
    .filter(|f| format.has(*f))
    .map(format_to_tag)
    .collect()
}
