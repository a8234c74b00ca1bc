// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Requested attribute changes.

use crate::types::{
    AirSwingHorizontal, AirSwingVertical, EcoMode, FanSpeed, NanoeMode, OperationMode, Power,
};

/// A set of attribute changes to push to a device.
///
/// Each settable attribute has one optional slot; unset slots are left
/// untouched on the device.
///
/// # Examples
///
/// ```
/// use comfortcloud_lib::state::DeviceChanges;
/// use comfortcloud_lib::types::{FanSpeed, Power};
///
/// let changes = DeviceChanges::new()
///     .with_power(Power::Off)
///     .with_fan_speed(FanSpeed::Low);
///
/// assert_eq!(changes.power(), Some(Power::Off));
/// assert!(!changes.touches_air_swing());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceChanges {
    power: Option<Power>,
    temperature: Option<f64>,
    mode: Option<OperationMode>,
    fan_speed: Option<FanSpeed>,
    air_swing_horizontal: Option<AirSwingHorizontal>,
    air_swing_vertical: Option<AirSwingVertical>,
    eco: Option<EcoMode>,
    nanoe: Option<NanoeMode>,
}

impl DeviceChanges {
    /// Creates an empty change set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the power state.
    #[must_use]
    pub fn with_power(mut self, power: Power) -> Self {
        self.power = Some(power);
        self
    }

    /// Sets the target temperature in degrees Celsius.
    #[must_use]
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Sets the operation mode.
    #[must_use]
    pub fn with_mode(mut self, mode: OperationMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Sets the fan speed.
    #[must_use]
    pub fn with_fan_speed(mut self, fan_speed: FanSpeed) -> Self {
        self.fan_speed = Some(fan_speed);
        self
    }

    /// Sets the horizontal louver position.
    #[must_use]
    pub fn with_air_swing_horizontal(mut self, position: AirSwingHorizontal) -> Self {
        self.air_swing_horizontal = Some(position);
        self
    }

    /// Sets the vertical louver position.
    #[must_use]
    pub fn with_air_swing_vertical(mut self, position: AirSwingVertical) -> Self {
        self.air_swing_vertical = Some(position);
        self
    }

    /// Sets the eco mode.
    #[must_use]
    pub fn with_eco(mut self, eco: EcoMode) -> Self {
        self.eco = Some(eco);
        self
    }

    /// Sets the nanoe mode.
    ///
    /// [`NanoeMode::Unavailable`] is accepted but never sent.
    #[must_use]
    pub fn with_nanoe(mut self, nanoe: NanoeMode) -> Self {
        self.nanoe = Some(nanoe);
        self
    }

    #[must_use]
    pub fn power(&self) -> Option<Power> {
        self.power
    }

    #[must_use]
    pub fn temperature(&self) -> Option<f64> {
        self.temperature
    }

    #[must_use]
    pub fn mode(&self) -> Option<OperationMode> {
        self.mode
    }

    #[must_use]
    pub fn fan_speed(&self) -> Option<FanSpeed> {
        self.fan_speed
    }

    #[must_use]
    pub fn air_swing_horizontal(&self) -> Option<AirSwingHorizontal> {
        self.air_swing_horizontal
    }

    #[must_use]
    pub fn air_swing_vertical(&self) -> Option<AirSwingVertical> {
        self.air_swing_vertical
    }

    #[must_use]
    pub fn eco(&self) -> Option<EcoMode> {
        self.eco
    }

    #[must_use]
    pub fn nanoe(&self) -> Option<NanoeMode> {
        self.nanoe
    }

    /// Returns `true` if either louver axis is part of this change set.
    ///
    /// Such changes need the current device state to compute `fanAutoMode`.
    #[must_use]
    pub fn touches_air_swing(&self) -> bool {
        self.air_swing_horizontal.is_some() || self.air_swing_vertical.is_some()
    }

    /// Returns `true` if no attribute is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
