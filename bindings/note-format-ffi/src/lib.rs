// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Swift and Kotlin bindings for the note markup codec.
//!
//! Offsets cross the boundary as `u32` UTF-16 code units. Format names cross
//! as strings (`bold`, `italic`, `underline`, `strikethrough`).

uniffi::setup_scaffolding!();

mod ffi_format_codec;
mod ffi_format_error;
mod ffi_formatted_segment;

pub use crate::ffi_format_codec::*;
pub use crate::ffi_format_error::FormatError;
pub use crate::ffi_formatted_segment::{
    ActionState, FfiFormatActionState, FfiFormattedSegment, FfiPaletteColor,
    FfiTextFormat,
};
