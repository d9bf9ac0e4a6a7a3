// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

#![cfg(not(target_arch = "wasm32"))]

use note_format::{
    action_states, apply_format, get_active_formats, markup_to_html,
    parse_formatted_text, remove_all_formatting, toggle_format, ActionState,
    FormatChange, FormatColor, FormattedSegment, InlineFormatType, Selection,
    TextFormat,
};
use proptest::prelude::*;
use speculoos::assert_that;
use speculoos::prelude::*;

use InlineFormatType::*;

// ===================================================================
// Worked examples
// ===================================================================

#[test]
fn bold_wrap_then_unwrap() {
    let bolded = apply_format(
        "hello world",
        Selection::new(0, 5),
        &FormatChange::Apply(Bold),
    );
    assert_that!(bolded.as_str()).is_equal_to("**hello** world");

    let unbolded =
        apply_format(&bolded, Selection::new(0, 9), &FormatChange::Remove(Bold));
    assert_that!(unbolded.as_str()).is_equal_to("hello world");
}

#[test]
fn parse_bold_and_italic() {
    let segments = parse_formatted_text("**bold** and *italic*");
    assert_that!(segments).is_equal_to(vec![
        FormattedSegment::new(
            "bold",
            TextFormat {
                bold: true,
                ..TextFormat::default()
            },
        ),
        FormattedSegment::new(" and ", TextFormat::default()),
        FormattedSegment::new(
            "italic",
            TextFormat {
                italic: true,
                ..TextFormat::default()
            },
        ),
    ]);
}

#[test]
fn unterminated_bold_is_active() {
    let active = get_active_formats("**bold", 6);
    assert_that!(active.contains(&Bold)).is_true();
    assert_that!(active.len()).is_equal_to(1);
}

#[test]
fn color_wrap_parses_to_one_colored_segment() {
    let colored = apply_format(
        "note",
        Selection::new(0, 4),
        &FormatChange::Color("#ff0000".to_owned()),
    );
    assert_that!(colored.as_str()).is_equal_to("{#ff0000}note{/#ff0000}");

    let segments = parse_formatted_text(&colored);
    assert_that!(segments).has_length(1);
    assert_that!(segments[0].text.as_str()).is_equal_to("note");
    assert_that!(segments[0].format.color.as_deref()).is_equal_to(Some("#ff0000"));
}

// ===================================================================
// Editing flow: select, toggle, recolor, preview
// ===================================================================

#[test]
fn toolbar_session() {
    let mut text = String::from("buy milk and eggs");

    // Select "milk" and press bold.
    let selection = Selection::new(4, 8);
    assert_that!(action_states(&text, selection).get(&Bold))
        .is_equal_to(Some(&ActionState::Enabled));
    text = toggle_format(&text, selection, Bold);
    assert_that!(text.as_str()).is_equal_to("buy **milk** and eggs");

    // The selection now sits inside the markers; bold is reversed there.
    let inside = Selection::new(6, 10);
    assert_that!(action_states(&text, inside).get(&Bold))
        .is_equal_to(Some(&ActionState::Reversed));

    // Color "eggs" with the palette's green.
    let eggs = Selection::new(17, 21);
    text = apply_format(&text, eggs, &FormatChange::from(FormatColor::Green));
    assert_that!(text.as_str())
        .is_equal_to("buy **milk** and {#10b981}eggs{/#10b981}");

    assert_that!(markup_to_html(&text).as_str()).is_equal_to(
        "buy <strong>milk</strong> and \
         <span style=\"color: #10b981;\">eggs</span>",
    );
    assert_that!(remove_all_formatting(&text).as_str())
        .is_equal_to("buy milk and eggs");
}

#[test]
fn removing_color_from_a_selection() {
    let text = "{#ef4444}alert{/#ef4444} done";
    let cleared = apply_format(
        text,
        Selection::new(0, 24),
        &FormatChange::RemoveColor,
    );
    assert_that!(cleared.as_str()).is_equal_to("alert done");
}

#[test]
fn format_names_from_hosts() {
    assert_that!(InlineFormatType::from_name("underline"))
        .is_equal_to(Ok(Underline));
    assert_that!(InlineFormatType::from_name("color").is_err()).is_true();
}

// ===================================================================
// Properties
// ===================================================================

fn markup_chars() -> impl Strategy<Value = String> {
    "[ab *_~{}/#\n\u{03A9}\u{1F4A9}]{0,40}"
}

fn format_change() -> impl Strategy<Value = FormatChange> {
    prop_oneof![
        prop::sample::select(vec![Bold, Italic, Underline, StrikeThrough])
            .prop_map(FormatChange::Apply),
        prop::sample::select(vec![Bold, Italic, Underline, StrikeThrough])
            .prop_map(FormatChange::Remove),
        "[a-z#0-9/}]{0,8}".prop_map(FormatChange::Color),
        Just(FormatChange::RemoveColor),
    ]
}

/// A run of words, each wrapped in balanced markers, separated by spaces.
fn well_formed_markup() -> impl Strategy<Value = String> {
    let word = (
        "[a-z]{1,6}",
        any::<[bool; 4]>(),
        prop::option::of(prop::sample::select(vec!["red", "#3b82f6"])),
    )
        .prop_map(|(word, flags, color)| {
            let markers: Vec<&str> = [Bold, Italic, Underline, StrikeThrough]
                .iter()
                .zip(flags)
                .filter(|(_, on)| *on)
                .map(|(format, _)| format.marker())
                .collect();
            let mut out = String::new();
            if let Some(color) = color {
                out.push_str(&format!("{{{color}}}"));
            }
            out.push_str(&markers.concat());
            out.push_str(&word);
            out.push_str(&markers.iter().rev().copied().collect::<String>());
            if let Some(color) = color {
                out.push_str(&format!("{{/{color}}}"));
            }
            out
        });
    prop::collection::vec(word, 0..6).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn stripping_is_idempotent(text in markup_chars()) {
        let once = remove_all_formatting(&text);
        prop_assert_eq!(remove_all_formatting(&once), once);
    }

    #[test]
    fn stripping_arbitrary_text_is_idempotent(text in any::<String>()) {
        let once = remove_all_formatting(&text);
        prop_assert_eq!(remove_all_formatting(&once), once);
    }

    #[test]
    fn parse_covers_stripped_well_formed_markup(text in well_formed_markup()) {
        let parsed: String = parse_formatted_text(&text)
            .into_iter()
            .map(|segment| segment.text)
            .collect();
        prop_assert_eq!(parsed, remove_all_formatting(&text));
    }

    #[test]
    fn segments_are_non_empty(text in markup_chars()) {
        let segments = parse_formatted_text(&text);
        for segment in &segments {
            prop_assert!(!segment.text.is_empty());
        }
    }

    #[test]
    fn empty_selection_is_a_no_op(
        text in markup_chars(),
        offset in 0usize..64,
        change in format_change(),
    ) {
        let result = apply_format(&text, Selection::cursor(offset), &change);
        prop_assert_eq!(result, text);
    }

    #[test]
    fn nothing_panics(
        text in prop_oneof![markup_chars(), any::<String>()],
        start in 0usize..128,
        end in 0usize..128,
        change in format_change(),
    ) {
        let selection = Selection::new(start, end);
        let _ = apply_format(&text, selection, &change);
        let _ = toggle_format(&text, selection, Bold);
        let _ = parse_formatted_text(&text);
        let _ = remove_all_formatting(&text);
        let _ = get_active_formats(&text, start);
        let _ = action_states(&text, selection);
        let _ = markup_to_html(&text);
    }

    #[test]
    fn applying_then_removing_restores_plain_text(
        text in "[a-z ]{1,20}",
        start in 0usize..20,
        len in 1usize..20,
        format in prop::sample::select(vec![Bold, Italic, Underline, StrikeThrough]),
    ) {
        let start = start.min(text.len() - 1);
        let end = (start + len).min(text.len());
        let wrapped = apply_format(
            &text,
            Selection::new(start, end),
            &FormatChange::Apply(format),
        );
        let marker_len = format.marker().len();
        let unwrapped = apply_format(
            &wrapped,
            Selection::new(start, end + 2 * marker_len),
            &FormatChange::Remove(format),
        );
        prop_assert_eq!(unwrapped, text);
    }
}
