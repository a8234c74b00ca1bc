// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Translation between wire parameters and [`DeviceState`].
//!
//! The cloud exchanges device attributes as a flat JSON object of integer
//! codes and numbers. [`decode`] turns such an object into a
//! [`DeviceState`]; [`encode`] turns a [`DeviceChanges`] request into
//! [`ControlParameters`] ready to be posted.
//!
//! # Examples
//!
//! ```
//! use comfortcloud_lib::codec;
//! use comfortcloud_lib::types::{AirSwingHorizontal, OperationMode, Power};
//!
//! let wire = serde_json::json!({
//!     "operate": 1,
//!     "operationMode": 3,
//!     "temperatureSet": 21.5,
//!     "airSwingLR": 0,
//!     "fanAutoMode": 3
//! });
//!
//! let state = codec::decode(&wire).unwrap();
//! assert_eq!(state.power(), Some(Power::On));
//! assert_eq!(state.mode(), Some(OperationMode::Heat));
//! assert_eq!(state.air_swing_horizontal(), Some(AirSwingHorizontal::Auto));
//! ```

mod swing;

pub use swing::SwingAutoMask;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::state::{DeviceChanges, DeviceState, HistoryEntry};
use crate::types::{
    AirSwingAutoMode, AirSwingHorizontal, AirSwingVertical, EcoMode, FanSpeed, NanoeMode,
    OperationMode, Power,
};

/// Wire parameters as received from the status and history endpoints.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireParameters {
    operate: Option<i64>,
    operation_mode: Option<i64>,
    fan_speed: Option<i64>,
    #[serde(rename = "airSwingLR")]
    air_swing_lr: Option<i64>,
    #[serde(rename = "airSwingUD")]
    air_swing_ud: Option<i64>,
    eco_mode: Option<i64>,
    nanoe: Option<i64>,
    fan_auto_mode: Option<i64>,
    temperature_set: Option<f64>,
    inside_temperature: Option<f64>,
    out_temperature: Option<f64>,
    currency_unit: Option<serde_json::Value>,
    energy_consumption: Option<f64>,
    estimated_cost: Option<f64>,
    history_data_list: Option<Vec<HistoryEntry>>,
}

/// Parameters of a control request, in wire form.
///
/// Only populated fields are serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operate: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_set: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_mode: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fan_speed: Option<i64>,
    #[serde(rename = "airSwingLR", skip_serializing_if = "Option::is_none")]
    pub air_swing_lr: Option<i64>,
    #[serde(rename = "airSwingUD", skip_serializing_if = "Option::is_none")]
    pub air_swing_ud: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eco_mode: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nanoe: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fan_auto_mode: Option<i64>,
}

impl ControlParameters {
    /// Returns `true` if nothing would be sent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn lookup<T>(
    field: &'static str,
    code: Option<i64>,
    from_code: fn(i64) -> Option<T>,
) -> Result<Option<T>, ParseError> {
    code.map(|code| from_code(code).ok_or(ParseError::UnknownCode { field, code }))
        .transpose()
}

/// Decodes a wire parameter object into a [`DeviceState`].
///
/// Keys that are absent stay unset. A `fanAutoMode` value overrides the
/// louver axes it marks as automatic.
///
/// # Errors
///
/// Returns [`ParseError::UnknownCode`] if an enumerated field carries a code
/// with no matching member, or [`ParseError::Json`] if a field has the
/// wrong JSON type.
pub fn decode(parameters: &serde_json::Value) -> Result<DeviceState, ParseError> {
    let wire = WireParameters::deserialize(parameters)?;
    let mut state = DeviceState::new();

    if let Some(value) = wire.temperature_set {
        state.set_temperature(value);
    }
    if let Some(value) = wire.inside_temperature {
        state.set_temperature_inside(value);
    }
    if let Some(value) = wire.out_temperature {
        state.set_temperature_outside(value);
    }
    if let Some(value) = wire.energy_consumption {
        state.set_energy_consumption(value);
    }
    if let Some(value) = wire.estimated_cost {
        state.set_estimated_cost(value);
    }
    if let Some(value) = wire.currency_unit {
        match value {
            serde_json::Value::String(unit) => state.set_currency_unit(unit),
            other => state.set_currency_unit(other.to_string()),
        }
    }
    if let Some(entries) = wire.history_data_list {
        state.set_history(entries);
    }

    if let Some(power) = lookup("operate", wire.operate, Power::from_code)? {
        state.set_power(power);
    }
    if let Some(mode) = lookup("operationMode", wire.operation_mode, OperationMode::from_code)? {
        state.set_mode(mode);
    }
    if let Some(speed) = lookup("fanSpeed", wire.fan_speed, FanSpeed::from_code)? {
        state.set_fan_speed(speed);
    }
    if let Some(position) = lookup("airSwingLR", wire.air_swing_lr, AirSwingHorizontal::from_code)? {
        state.set_air_swing_horizontal(position);
    }
    if let Some(position) = lookup("airSwingUD", wire.air_swing_ud, AirSwingVertical::from_code)? {
        state.set_air_swing_vertical(position);
    }
    if let Some(eco) = lookup("ecoMode", wire.eco_mode, EcoMode::from_code)? {
        state.set_eco(eco);
    }
    if let Some(nanoe) = lookup("nanoe", wire.nanoe, NanoeMode::from_code)? {
        state.set_nanoe(nanoe);
    }

    if let Some(auto) = lookup("fanAutoMode", wire.fan_auto_mode, AirSwingAutoMode::from_code)? {
        if auto.horizontal() {
            state.set_air_swing_horizontal(AirSwingHorizontal::Auto);
        }
        if auto.vertical() {
            state.set_air_swing_vertical(AirSwingVertical::Auto);
        }
    }

    Ok(state)
}

/// Encodes requested changes into control parameters.
///
/// `current` is the device's present state. It is only consulted when a
/// louver axis is changed, to keep the auto flag of the other axis.
/// `fanAutoMode` is emitted whenever either axis is part of `changes`.
/// A nanoe value of [`NanoeMode::Unavailable`] is dropped.
#[must_use]
pub fn encode(changes: &DeviceChanges, current: Option<&DeviceState>) -> ControlParameters {
    let mut parameters = ControlParameters {
        operate: changes.power().map(Power::code),
        temperature_set: changes.temperature(),
        operation_mode: changes.mode().map(OperationMode::code),
        fan_speed: changes.fan_speed().map(FanSpeed::code),
        eco_mode: changes.eco().map(EcoMode::code),
        nanoe: changes
            .nanoe()
            .filter(|nanoe| nanoe.is_available())
            .map(NanoeMode::code),
        ..ControlParameters::default()
    };

    if changes.touches_air_swing() {
        let mut mask = SwingAutoMask::seed(changes, current);

        if let Some(requested) = changes.air_swing_horizontal() {
            parameters.air_swing_lr = mask.apply_horizontal(requested).map(AirSwingHorizontal::code);
        }
        if let Some(requested) = changes.air_swing_vertical() {
            parameters.air_swing_ud = mask.apply_vertical(requested).map(AirSwingVertical::code);
        }

        parameters.fan_auto_mode = Some(mask.to_auto_mode().code());
    }

    parameters
}
