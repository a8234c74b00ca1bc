// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoded device state.

use serde::{Deserialize, Serialize};

use crate::types::{
    AirSwingHorizontal, AirSwingVertical, EcoMode, FanSpeed, NanoeMode, OperationMode, Power,
};

/// State of an air conditioner as reported by the cloud.
///
/// All fields are optional: only attributes present in the wire response
/// are populated. Temperatures are in degrees Celsius.
///
/// # Examples
///
/// ```
/// use comfortcloud_lib::state::DeviceState;
/// use comfortcloud_lib::types::Power;
///
/// let mut state = DeviceState::new();
/// state.set_power(Power::On);
/// assert_eq!(state.power(), Some(Power::On));
/// assert_eq!(state.temperature(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceState {
    #[serde(skip_serializing_if = "Option::is_none")]
    power: Option<Power>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mode: Option<OperationMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fan_speed: Option<FanSpeed>,
    /// Target temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    air_swing_horizontal: Option<AirSwingHorizontal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    air_swing_vertical: Option<AirSwingVertical>,
    #[serde(skip_serializing_if = "Option::is_none")]
    eco: Option<EcoMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    nanoe: Option<NanoeMode>,
    /// Measured room temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature_inside: Option<f64>,
    /// Measured outdoor temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature_outside: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    currency_unit: Option<String>,
    /// Consumption in kWh over the queried period.
    #[serde(skip_serializing_if = "Option::is_none")]
    energy_consumption: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    estimated_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    history: Option<Vec<HistoryEntry>>,
}

/// One bucket of a history query.
///
/// The cloud reports `-255` for buckets without data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Index of the bucket within the queried period.
    #[serde(default)]
    pub data_number: Option<i64>,
    /// Consumption in kWh.
    #[serde(default)]
    pub consumption: Option<f64>,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub average_setting_temp: Option<f64>,
    #[serde(default)]
    pub average_inside_temp: Option<f64>,
    #[serde(default)]
    pub average_outside_temp: Option<f64>,
}

impl DeviceState {
    /// Creates a new empty device state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no attribute is known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    // ========== Controllable attributes ==========

    #[must_use]
    pub fn power(&self) -> Option<Power> {
        self.power
    }

    pub fn set_power(&mut self, power: Power) {
        self.power = Some(power);
    }

    #[must_use]
    pub fn mode(&self) -> Option<OperationMode> {
        self.mode
    }

    pub fn set_mode(&mut self, mode: OperationMode) {
        self.mode = Some(mode);
    }

    #[must_use]
    pub fn fan_speed(&self) -> Option<FanSpeed> {
        self.fan_speed
    }

    pub fn set_fan_speed(&mut self, fan_speed: FanSpeed) {
        self.fan_speed = Some(fan_speed);
    }

    /// Gets the target temperature.
    #[must_use]
    pub fn temperature(&self) -> Option<f64> {
        self.temperature
    }

    /// Sets the target temperature.
    pub fn set_temperature(&mut self, temperature: f64) {
        self.temperature = Some(temperature);
    }

    #[must_use]
    pub fn air_swing_horizontal(&self) -> Option<AirSwingHorizontal> {
        self.air_swing_horizontal
    }

    pub fn set_air_swing_horizontal(&mut self, position: AirSwingHorizontal) {
        self.air_swing_horizontal = Some(position);
    }

    #[must_use]
    pub fn air_swing_vertical(&self) -> Option<AirSwingVertical> {
        self.air_swing_vertical
    }

    pub fn set_air_swing_vertical(&mut self, position: AirSwingVertical) {
        self.air_swing_vertical = Some(position);
    }

    #[must_use]
    pub fn eco(&self) -> Option<EcoMode> {
        self.eco
    }

    pub fn set_eco(&mut self, eco: EcoMode) {
        self.eco = Some(eco);
    }

    #[must_use]
    pub fn nanoe(&self) -> Option<NanoeMode> {
        self.nanoe
    }

    pub fn set_nanoe(&mut self, nanoe: NanoeMode) {
        self.nanoe = Some(nanoe);
    }

    // ========== Telemetry ==========

    /// Gets the measured room temperature.
    #[must_use]
    pub fn temperature_inside(&self) -> Option<f64> {
        self.temperature_inside
    }

    pub fn set_temperature_inside(&mut self, temperature: f64) {
        self.temperature_inside = Some(temperature);
    }

    /// Gets the measured outdoor temperature.
    #[must_use]
    pub fn temperature_outside(&self) -> Option<f64> {
        self.temperature_outside
    }

    pub fn set_temperature_outside(&mut self, temperature: f64) {
        self.temperature_outside = Some(temperature);
    }

    #[must_use]
    pub fn currency_unit(&self) -> Option<&str> {
        self.currency_unit.as_deref()
    }

    pub fn set_currency_unit(&mut self, unit: impl Into<String>) {
        self.currency_unit = Some(unit.into());
    }

    #[must_use]
    pub fn energy_consumption(&self) -> Option<f64> {
        self.energy_consumption
    }

    pub fn set_energy_consumption(&mut self, kwh: f64) {
        self.energy_consumption = Some(kwh);
    }

    #[must_use]
    pub fn estimated_cost(&self) -> Option<f64> {
        self.estimated_cost
    }

    pub fn set_estimated_cost(&mut self, cost: f64) {
        self.estimated_cost = Some(cost);
    }

    /// Gets the history buckets, if this state came from a history query.
    #[must_use]
    pub fn history(&self) -> Option<&[HistoryEntry]> {
        self.history.as_deref()
    }

    pub fn set_history(&mut self, entries: Vec<HistoryEntry>) {
        self.history = Some(entries);
    }
}
