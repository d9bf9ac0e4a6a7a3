// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use note_format::{FormatChange, FormatColor, InlineFormatType, Selection};
use strum::IntoEnumIterator;

use crate::ffi_format_error::FormatError;
use crate::ffi_formatted_segment::{
    FfiFormatActionState, FfiFormattedSegment, FfiPaletteColor,
};

fn offset(utf16_codeunit: u32) -> usize {
    usize::try_from(utf16_codeunit).unwrap_or(usize::MAX)
}

fn selection(start_utf16_codeunit: u32, end_utf16_codeunit: u32) -> Selection {
    Selection::new(offset(start_utf16_codeunit), offset(end_utf16_codeunit))
}

#[uniffi::export]
pub fn apply_format(
    text: String,
    start_utf16_codeunit: u32,
    end_utf16_codeunit: u32,
    format: String,
    enabled: bool,
) -> Result<String, FormatError> {
    let format = InlineFormatType::from_name(&format)?;
    Ok(note_format::apply_format(
        &text,
        selection(start_utf16_codeunit, end_utf16_codeunit),
        &FormatChange::inline(format, enabled),
    ))
}

#[uniffi::export]
pub fn apply_color(
    text: String,
    start_utf16_codeunit: u32,
    end_utf16_codeunit: u32,
    color: String,
) -> String {
    note_format::apply_format(
        &text,
        selection(start_utf16_codeunit, end_utf16_codeunit),
        &FormatChange::Color(color),
    )
}

#[uniffi::export]
pub fn remove_color(
    text: String,
    start_utf16_codeunit: u32,
    end_utf16_codeunit: u32,
) -> String {
    note_format::apply_format(
        &text,
        selection(start_utf16_codeunit, end_utf16_codeunit),
        &FormatChange::RemoveColor,
    )
}

#[uniffi::export]
pub fn toggle_format(
    text: String,
    start_utf16_codeunit: u32,
    end_utf16_codeunit: u32,
    format: String,
) -> Result<String, FormatError> {
    let format = InlineFormatType::from_name(&format)?;
    Ok(note_format::toggle_format(
        &text,
        selection(start_utf16_codeunit, end_utf16_codeunit),
        format,
    ))
}

#[uniffi::export]
pub fn parse_formatted_text(text: String) -> Vec<FfiFormattedSegment> {
    note_format::parse_formatted_text(&text)
        .into_iter()
        .map(FfiFormattedSegment::from)
        .collect()
}

#[uniffi::export]
pub fn remove_all_formatting(text: String) -> String {
    note_format::remove_all_formatting(&text)
}

/// Names of the toggle formats open at the cursor, in toolbar order.
#[uniffi::export]
pub fn get_active_formats(text: String, cursor_utf16_codeunit: u32) -> Vec<String> {
    let active = note_format::get_active_formats(&text, offset(cursor_utf16_codeunit));
    InlineFormatType::iter()
        .filter(|format| active.contains(format))
        .map(|format| format.to_string())
        .collect()
}

/// Toolbar button states, in toolbar order.
#[uniffi::export]
pub fn action_states(
    text: String,
    start_utf16_codeunit: u32,
    end_utf16_codeunit: u32,
) -> Vec<FfiFormatActionState> {
    let mut states: Vec<_> = note_format::action_states(
        &text,
        selection(start_utf16_codeunit, end_utf16_codeunit),
    )
    .into_iter()
    .collect();
    states.sort_by_key(|(format, _)| *format);
    states.into_iter().map(FfiFormatActionState::from).collect()
}

#[uniffi::export]
pub fn markup_to_html(text: String) -> String {
    note_format::markup_to_html(&text)
}

#[uniffi::export]
pub fn format_palette() -> Vec<FfiPaletteColor> {
    FormatColor::iter().map(FfiPaletteColor::from).collect()
}
