// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state types.
//!
//! [`DeviceState`] is the decoded view of a device's wire parameters, while
//! [`DeviceChanges`] describes the attributes a caller wants to change.
//!
//! # Examples
//!
//! ```
//! use comfortcloud_lib::state::DeviceChanges;
//! use comfortcloud_lib::types::{AirSwingVertical, OperationMode, Power};
//!
//! let changes = DeviceChanges::new()
//!     .with_power(Power::On)
//!     .with_mode(OperationMode::Heat)
//!     .with_temperature(21.5)
//!     .with_air_swing_vertical(AirSwingVertical::Auto);
//!
//! assert!(changes.touches_air_swing());
//! ```

mod changes;
mod device_state;

pub use changes::DeviceChanges;
pub use device_state::{DeviceState, HistoryEntry};
