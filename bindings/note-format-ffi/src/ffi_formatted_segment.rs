// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use note_format::{FormatColor, FormattedSegment, InlineFormatType, TextFormat};

#[derive(uniffi::Record, Clone, Debug, PartialEq)]
pub struct FfiTextFormat {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strike_through: bool,
    pub color: Option<String>,
}

#[derive(uniffi::Record, Clone, Debug, PartialEq)]
pub struct FfiFormattedSegment {
    pub text: String,
    pub format: FfiTextFormat,
}

#[derive(uniffi::Enum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionState {
    Enabled,
    Reversed,
    Disabled,
}

#[derive(uniffi::Record, Clone, Debug, PartialEq)]
pub struct FfiFormatActionState {
    /// Toolbar name of the format, e.g. "bold".
    pub format: String,
    pub state: ActionState,
}

#[derive(uniffi::Record, Clone, Debug, PartialEq)]
pub struct FfiPaletteColor {
    pub name: String,
    pub hex: String,
}

// ─── Conversions ─────────────────────────────────────────────────────────────

impl From<TextFormat> for FfiTextFormat {
    fn from(f: TextFormat) -> Self {
        Self {
            bold: f.bold,
            italic: f.italic,
            underline: f.underline,
            strike_through: f.strike_through,
            color: f.color,
        }
    }
}

impl From<FormattedSegment> for FfiFormattedSegment {
    fn from(s: FormattedSegment) -> Self {
        Self {
            text: s.text,
            format: s.format.into(),
        }
    }
}

impl From<note_format::ActionState> for ActionState {
    fn from(inner: note_format::ActionState) -> Self {
        match inner {
            note_format::ActionState::Enabled => Self::Enabled,
            note_format::ActionState::Reversed => Self::Reversed,
            note_format::ActionState::Disabled => Self::Disabled,
        }
    }
}

impl From<(InlineFormatType, note_format::ActionState)> for FfiFormatActionState {
    fn from((format, state): (InlineFormatType, note_format::ActionState)) -> Self {
        Self {
            format: format.to_string(),
            state: state.into(),
        }
    }
}

impl From<FormatColor> for FfiPaletteColor {
    fn from(c: FormatColor) -> Self {
        Self {
            name: c.name().to_owned(),
            hex: c.hex().to_owned(),
        }
    }
}
