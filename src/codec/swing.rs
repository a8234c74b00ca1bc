// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Automatic swing bitmask.
//!
//! The cloud does not accept `Auto` in `airSwingLR` / `airSwingUD`. Instead a
//! request carries the discrete positions of the axes being fixed and a
//! single `fanAutoMode` for both axes. Changing one axis therefore has to
//! keep the other axis's current auto flag, which is why encoding needs the
//! device's current state.

use crate::state::{DeviceChanges, DeviceState};
use crate::types::{AirSwingAutoMode, AirSwingHorizontal, AirSwingVertical};

const HORIZONTAL: u8 = 0b01;
const VERTICAL: u8 = 0b10;

/// Two-bit accumulator: bit 0 is horizontal auto, bit 1 is vertical auto.
///
/// # Examples
///
/// ```
/// use comfortcloud_lib::codec::SwingAutoMask;
/// use comfortcloud_lib::types::{AirSwingAutoMode, AirSwingHorizontal, AirSwingVertical};
///
/// let mut mask = SwingAutoMask::default();
/// assert_eq!(mask.apply_horizontal(AirSwingHorizontal::Auto), None);
/// assert_eq!(mask.apply_vertical(AirSwingVertical::Down), Some(AirSwingVertical::Down));
/// assert_eq!(mask.to_auto_mode(), AirSwingAutoMode::HorizontalOnly);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwingAutoMask(u8);

impl SwingAutoMask {
    /// Creates a mask from raw bits, ignoring anything above bit 1.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & (HORIZONTAL | VERTICAL))
    }

    /// Seeds the mask from the current auto flags of the axes that are
    /// *not* part of `changes`.
    #[must_use]
    pub fn seed(changes: &DeviceChanges, current: Option<&DeviceState>) -> Self {
        let mut mask = Self::default();
        let Some(current) = current else {
            return mask;
        };

        if changes.air_swing_horizontal().is_none()
            && current
                .air_swing_horizontal()
                .is_some_and(AirSwingHorizontal::is_auto)
        {
            mask.0 |= HORIZONTAL;
        }
        if changes.air_swing_vertical().is_none()
            && current
                .air_swing_vertical()
                .is_some_and(AirSwingVertical::is_auto)
        {
            mask.0 |= VERTICAL;
        }
        mask
    }

    /// Returns the raw two-bit value.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns `true` if the horizontal axis is automatic.
    #[must_use]
    pub const fn horizontal(self) -> bool {
        self.0 & HORIZONTAL != 0
    }

    /// Returns `true` if the vertical axis is automatic.
    #[must_use]
    pub const fn vertical(self) -> bool {
        self.0 & VERTICAL != 0
    }

    /// Applies a requested horizontal position.
    ///
    /// Returns the discrete position to send, or `None` when the request
    /// is `Auto` (which is expressed through the mask only).
    pub fn apply_horizontal(&mut self, position: AirSwingHorizontal) -> Option<AirSwingHorizontal> {
        if position.is_auto() {
            self.0 |= HORIZONTAL;
            None
        } else {
            self.0 &= !HORIZONTAL;
            Some(position)
        }
    }

    /// Applies a requested vertical position.
    ///
    /// Returns the discrete position to send, or `None` for `Auto`.
    pub fn apply_vertical(&mut self, position: AirSwingVertical) -> Option<AirSwingVertical> {
        if position.is_auto() {
            self.0 |= VERTICAL;
            None
        } else {
            self.0 &= !VERTICAL;
            Some(position)
        }
    }

    /// Maps the mask to the combined `fanAutoMode` value.
    #[must_use]
    pub const fn to_auto_mode(self) -> AirSwingAutoMode {
        AirSwingAutoMode::from_axes(self.horizontal(), self.vertical())
    }
}
