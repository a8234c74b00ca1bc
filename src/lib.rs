// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `ComfortCloud` Lib - A Rust client for the Panasonic Comfort Cloud API.
//!
//! This library provides an async API to read and control air conditioners
//! registered with the vendor cloud.
//!
//! # Supported Features
//!
//! - **Authentication**: Login with account credentials, token reuse via a
//!   cache file, transparent re-login when the token expires
//! - **Discovery**: Device summaries from the account's group listing
//! - **Status queries**: Power, mode, fan, louvers, eco, nanoe, temperatures
//! - **Control**: Partial updates of any writable attribute
//! - **Consumption history**: Per day, week, month or year
//!
//! # Quick Start
//!
//! ```no_run
//! use comfortcloud_lib::Session;
//! use comfortcloud_lib::state::DeviceChanges;
//! use comfortcloud_lib::types::{AirSwingVertical, FanSpeed, Power};
//!
//! #[tokio::main]
//! async fn main() -> comfortcloud_lib::Result<()> {
//!     let mut session = Session::builder("user@example.com", "secret").build()?;
//!     session.login().await?;
//!
//!     for device in session.get_devices().await? {
//!         println!("{} ({})", device.name(), device.id());
//!     }
//!
//!     let id = session.get_devices().await?[0].id().to_string();
//!     let changes = DeviceChanges::new()
//!         .with_power(Power::On)
//!         .with_fan_speed(FanSpeed::Mid)
//!         .with_air_swing_vertical(AirSwingVertical::Auto);
//!     session.set_device(&id, &changes).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Consumption History
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use comfortcloud_lib::Session;
//!
//! # async fn example(session: &mut Session) -> comfortcloud_lib::Result<()> {
//! let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default();
//! let history = session.history("f0e1d2", "Month", date).await?;
//! if let Some(entries) = history.parameters.history() {
//!     for entry in entries {
//!         println!("{:?}: {:?} kWh", entry.data_number, entry.consumption);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod codec;
pub mod error;
pub mod protocol;
pub mod session;
pub mod state;
pub mod types;

pub use cache::{CachingScope, CredentialCache};
pub use error::{CacheError, Error, LoginError, ParseError, ProtocolError, Result, ValueError};
pub use protocol::{CloudConfig, HttpClient, Transport};
pub use session::{DeviceStatus, DeviceSummary, Session, SessionBuilder, SessionPhase};
pub use state::{DeviceChanges, DeviceState, HistoryEntry};
pub use types::{
    AirSwingAutoMode, AirSwingHorizontal, AirSwingVertical, DataMode, EcoMode, FanSpeed,
    NanoeMode, OperationMode, Power,
};
