// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use std::str::FromStr;

use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::FormatError;

/// A toggle format: its state at a position is decided by how many of its
/// markers precede that position.
///
/// Names round-trip through `Display`/`FromStr` as `bold`, `italic`,
/// `underline` and `strikethrough`.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum InlineFormatType {
    Bold,
    Italic,
    Underline,
    StrikeThrough,
}

impl InlineFormatType {
    /// The in-band marker written on both sides of a formatted span.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Bold => "**",
            Self::Italic => "*",
            Self::Underline => "__",
            Self::StrikeThrough => "~~",
        }
    }

    /// Look up a format by its toolbar name.
    pub fn from_name(name: &str) -> Result<Self, FormatError> {
        Self::from_str(name)
            .map_err(|_| FormatError::UnknownFormat(name.to_owned()))
    }
}

/// Toolbar state of a single format button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionState {
    /// Pressing the button applies the format.
    Enabled,
    /// The format is active at the cursor; pressing removes it.
    Reversed,
    /// Pressing the button would not change the text.
    Disabled,
}
