// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

/// Errors raised when a host hands the codec something it cannot name.
///
/// The codec itself never fails on text or offsets; malformed markup is
/// parsed best-effort and offsets are clamped.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("unknown format `{0}`, expected one of bold, italic, underline, strikethrough")]
    UnknownFormat(String),
}
