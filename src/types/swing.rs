// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Louver (air swing) positions.
//!
//! Each axis has a set of discrete positions plus `Auto`. The `Auto` member
//! carries code `-1`, which the cloud never sends in `airSwingLR` or
//! `airSwingUD`: automatic swing is reported and requested through the
//! combined `fanAutoMode` field instead, see [`AirSwingAutoMode`].

wire_enum! {
    /// Horizontal louver position, transmitted as `airSwingLR`.
    pub enum AirSwingHorizontal as "horizontal air swing" {
        /// Louver sweeps automatically.
        Auto = -1,
        Left = 0,
        Right = 1,
        Mid = 2,
        RightMid = 3,
        LeftMid = 4,
    }
}

wire_enum! {
    /// Vertical louver position, transmitted as `airSwingUD`.
    pub enum AirSwingVertical as "vertical air swing" {
        /// Louver sweeps automatically.
        Auto = -1,
        Up = 0,
        Down = 1,
        Mid = 2,
        UpMid = 3,
        DownMid = 4,
    }
}

wire_enum! {
    /// Combined automatic swing setting, transmitted as `fanAutoMode`.
    ///
    /// # Examples
    ///
    /// ```
    /// use comfortcloud_lib::types::AirSwingAutoMode;
    ///
    /// let mode = AirSwingAutoMode::from_axes(true, false);
    /// assert_eq!(mode, AirSwingAutoMode::HorizontalOnly);
    /// assert_eq!(mode.code(), 3);
    /// ```
    pub enum AirSwingAutoMode as "air swing auto mode" {
        /// Both axes sweep automatically.
        Both = 0,
        /// Neither axis sweeps.
        Disabled = 1,
        /// Only the vertical axis sweeps.
        VerticalOnly = 2,
        /// Only the horizontal axis sweeps.
        HorizontalOnly = 3,
    }
}

impl AirSwingHorizontal {
    /// Returns `true` for [`AirSwingHorizontal::Auto`].
    #[must_use]
    pub const fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }
}

impl AirSwingVertical {
    /// Returns `true` for [`AirSwingVertical::Auto`].
    #[must_use]
    pub const fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }
}

impl AirSwingAutoMode {
    /// Builds the combined mode from the per-axis auto flags.
    #[must_use]
    pub const fn from_axes(horizontal: bool, vertical: bool) -> Self {
        match (horizontal, vertical) {
            (true, true) => Self::Both,
            (true, false) => Self::HorizontalOnly,
            (false, true) => Self::VerticalOnly,
            (false, false) => Self::Disabled,
        }
    }

    /// Returns `true` if the horizontal axis sweeps automatically.
    #[must_use]
    pub const fn horizontal(self) -> bool {
        matches!(self, Self::Both | Self::HorizontalOnly)
    }

    /// Returns `true` if the vertical axis sweeps automatically.
    #[must_use]
    pub const fn vertical(self) -> bool {
        matches!(self, Self::Both | Self::VerticalOnly)
    }
}
