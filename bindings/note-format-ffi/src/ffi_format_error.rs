// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FormatError {
    #[error("Unknown format: {name}")]
    UnknownFormat { name: String },
}

impl From<note_format::FormatError> for FormatError {
    fn from(inner: note_format::FormatError) -> Self {
        match inner {
            note_format::FormatError::UnknownFormat(name) => {
                Self::UnknownFormat { name }
            }
        }
    }
}
