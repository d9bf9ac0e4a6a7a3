// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! The toolbar color palette.
//!
//! Color markers accept any name (`{anything}text{/anything}`); these are
//! only the colors the toolbar offers. The palette writes hex values into
//! the markup so that any renderer can use them directly.

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum FormatColor {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
}

impl FormatColor {
    pub fn hex(&self) -> &'static str {
        match self {
            Self::Red => "#ef4444",
            Self::Blue => "#3b82f6",
            Self::Green => "#10b981",
            Self::Yellow => "#f59e0b",
            Self::Purple => "#a855f7",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Purple => "purple",
        }
    }

    /// Find the palette entry written as `hex`, ignoring ASCII case.
    pub fn from_hex(hex: &str) -> Option<Self> {
        Self::iter().find(|c| c.hex().eq_ignore_ascii_case(hex))
    }
}
