// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! JavaScript bindings for the note markup codec.
//!
//! JS string indices are UTF-16 code units, which is what every offset here
//! expects. Segments are returned as plain objects:
//! `{ text, format: { bold, italic, underline, strikethrough, color? } }`.

use js_sys::{Array, Object, Reflect};
use note_format::{
    FormatChange, FormattedSegment, InlineFormatType, Selection, TextFormat,
};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

#[wasm_bindgen(js_name = applyFormat)]
pub fn apply_format(
    text: &str,
    start: u32,
    end: u32,
    format: &str,
    enabled: bool,
) -> Result<String, JsError> {
    let format = InlineFormatType::from_name(format)?;
    Ok(note_format::apply_format(
        text,
        selection(start, end),
        &FormatChange::inline(format, enabled),
    ))
}

#[wasm_bindgen(js_name = applyColor)]
pub fn apply_color(text: &str, start: u32, end: u32, color: &str) -> String {
    note_format::apply_format(
        text,
        selection(start, end),
        &FormatChange::Color(color.to_owned()),
    )
}

#[wasm_bindgen(js_name = removeColor)]
pub fn remove_color(text: &str, start: u32, end: u32) -> String {
    note_format::apply_format(
        text,
        selection(start, end),
        &FormatChange::RemoveColor,
    )
}

#[wasm_bindgen(js_name = toggleFormat)]
pub fn toggle_format(
    text: &str,
    start: u32,
    end: u32,
    format: &str,
) -> Result<String, JsError> {
    let format = InlineFormatType::from_name(format)?;
    Ok(note_format::toggle_format(text, selection(start, end), format))
}

#[wasm_bindgen(js_name = parseFormattedText)]
pub fn parse_formatted_text(text: &str) -> Result<Array, JsValue> {
    note_format::parse_formatted_text(text)
        .iter()
        .map(segment_to_js)
        .collect()
}

#[wasm_bindgen(js_name = removeAllFormatting)]
pub fn remove_all_formatting(text: &str) -> String {
    note_format::remove_all_formatting(text)
}

/// Names of the toggle formats open at `cursor`.
#[wasm_bindgen(js_name = getActiveFormats)]
pub fn get_active_formats(text: &str, cursor: u32) -> Array {
    let active = note_format::get_active_formats(text, cursor as usize);
    [
        InlineFormatType::Bold,
        InlineFormatType::Italic,
        InlineFormatType::Underline,
        InlineFormatType::StrikeThrough,
    ]
    .into_iter()
    .filter(|format| active.contains(format))
    .map(|format| JsValue::from_str(format.as_ref()))
    .collect()
}

#[wasm_bindgen(js_name = markupToHtml)]
pub fn markup_to_html(text: &str) -> String {
    note_format::markup_to_html(text)
}

fn selection(start: u32, end: u32) -> Selection {
    Selection::new(start as usize, end as usize)
}

fn segment_to_js(segment: &FormattedSegment) -> Result<JsValue, JsValue> {
    let obj = Object::new();
    Reflect::set(&obj, &"text".into(), &segment.text.as_str().into())?;
    Reflect::set(&obj, &"format".into(), &format_to_js(&segment.format)?)?;
    Ok(obj.into())
}

fn format_to_js(format: &TextFormat) -> Result<JsValue, JsValue> {
    let obj = Object::new();
    Reflect::set(&obj, &"bold".into(), &format.bold.into())?;
    Reflect::set(&obj, &"italic".into(), &format.italic.into())?;
    Reflect::set(&obj, &"underline".into(), &format.underline.into())?;
    Reflect::set(&obj, &"strikethrough".into(), &format.strike_through.into())?;
    if let Some(color) = &format.color {
        Reflect::set(&obj, &"color".into(), &color.as_str().into())?;
    }
    Ok(obj.into())
}
