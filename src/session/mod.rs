// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cloud session.
//!
//! A [`Session`] owns the credential cache and the device catalog. It
//! moves through three phases:
//!
//! - **Unauthenticated**: no token.
//! - **Authenticated**: a token, but no group listing yet.
//! - **Ready**: token and group listing; devices can be resolved.
//!
//! Any authorized request answered with HTTP 401 triggers exactly one fresh
//! login followed by exactly one retry of that request. A second failure is
//! returned to the caller.
//!
//! # Examples
//!
//! ```no_run
//! use comfortcloud_lib::Session;
//! use comfortcloud_lib::state::DeviceChanges;
//! use comfortcloud_lib::types::{OperationMode, Power};
//!
//! # async fn example() -> comfortcloud_lib::Result<()> {
//! let mut session = Session::builder("user@example.com", "secret").build()?;
//! session.login().await?;
//!
//! let id = session.get_devices().await?[0].id().to_string();
//! let status = session.get_device(&id).await?;
//! println!("{:?}", status.parameters.temperature_inside());
//!
//! let changes = DeviceChanges::new()
//!     .with_power(Power::On)
//!     .with_mode(OperationMode::Cool)
//!     .with_temperature(24.0);
//! session.set_device(&id, &changes).await?;
//! # Ok(())
//! # }
//! ```

mod builder;
mod catalog;

pub use builder::{DEFAULT_TOKEN_FILE, SessionBuilder, default_token_file};
pub use catalog::{DeviceCatalog, DeviceSummary};

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::cache::CredentialCache;
use crate::codec;
use crate::error::{Error, LoginError, ParseError, ResponseBody};
use crate::protocol::{ApiRequest, ApiResponse, Endpoints, HttpClient, Transport};
use crate::state::{DeviceChanges, DeviceState};
use crate::types::DataMode;

use builder::Credentials;

/// Timezone sent with history queries unless another one is given.
pub const DEFAULT_TIMEZONE: &str = "+01:00";

/// Validity of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No token.
    Unauthenticated,
    /// Token present, group listing missing.
    Authenticated,
    /// Token and group listing present.
    Ready,
}

/// Decoded status or history of one device.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceStatus {
    /// Logical device id.
    pub id: String,
    /// Decoded attributes.
    pub parameters: DeviceState,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(rename = "uToken")]
    token: String,
}

/// A session with the cloud API.
///
/// Create one with [`Session::builder`]. All operations take `&mut self`:
/// the cache and catalog are mutated along the way and only one request is
/// in flight at any time.
#[derive(Debug)]
pub struct Session<T: Transport = HttpClient> {
    transport: T,
    endpoints: Endpoints,
    credentials: Credentials,
    token_file: PathBuf,
    cache: CredentialCache,
    catalog: DeviceCatalog,
}

impl Session<HttpClient> {
    /// Starts building a session for the given account.
    #[must_use]
    pub fn builder(username: impl Into<String>, password: impl Into<String>) -> SessionBuilder {
        SessionBuilder::new(username, password)
    }
}

impl<T: Transport> Session<T> {
    // ========== Accessors ==========

    /// Returns the credential cache.
    #[must_use]
    pub fn cache(&self) -> &CredentialCache {
        &self.cache
    }

    /// Returns the device catalog as currently built.
    #[must_use]
    pub fn catalog(&self) -> &DeviceCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Returns the credential cache file.
    #[must_use]
    pub fn token_file(&self) -> &Path {
        &self.token_file
    }

    /// Returns the underlying transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns `true` if a session token is held.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.cache.is_valid()
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if !self.cache.is_valid() {
            SessionPhase::Unauthenticated
        } else if self.cache.groups().is_none() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Ready
        }
    }

    // ========== Login ==========

    /// Logs in, reusing the credential cache file when possible.
    ///
    /// # Errors
    ///
    /// See [`login_with`](Self::login_with).
    pub async fn login(&mut self) -> Result<(), Error> {
        self.login_with(true).await
    }

    /// Logs in.
    ///
    /// With `use_cache` the token (and, depending on the caching scope, the
    /// group listing) are read from the cache file first. A token is only
    /// requested when none is cached, and the group listing only fetched
    /// when missing. The cache file is rewritten if anything changed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Login`] if authentication fails,
    /// [`Error::Request`] / [`Error::Response`] if the group listing cannot
    /// be fetched, and [`Error::Cache`] if the cache file cannot be written.
    pub async fn login_with(&mut self, use_cache: bool) -> Result<(), Error> {
        if use_cache {
            self.cache.load(&self.token_file);
        } else {
            self.cache.clear();
        }
        self.catalog.invalidate();

        if !self.cache.is_valid() {
            self.create_token().await?;
        }

        if self.cache.groups().is_none() {
            let response = self.request(&ApiRequest::get(self.endpoints.groups())).await?;
            self.store_groups(&response)?;
        }

        self.persist_if_dirty()
    }

    /// Authenticates with the account credentials and stores the new token.
    async fn create_token(&mut self) -> Result<(), Error> {
        tracing::info!(username = %self.credentials.username, "Creating session token");
        self.cache.clear();
        self.catalog.invalidate();

        let request = ApiRequest::post(
            self.endpoints.login(),
            json!({
                "language": "0",
                "loginId": self.credentials.username,
                "password": self.credentials.password,
            }),
        );

        let response = self
            .transport
            .send(&request, None)
            .await
            .map_err(LoginError::Transport)?;

        if !response.is_success() {
            return Err(LoginError::Rejected {
                status: response.status(),
                body: ResponseBody::from_text(response.body()),
            }
            .into());
        }

        let login: LoginResponse =
            serde_json::from_str(response.body()).map_err(LoginError::InvalidResponse)?;
        self.cache.set_token(Some(login.token));
        Ok(())
    }

    /// Fresh login used after the cloud rejected the token.
    ///
    /// Unlike [`login_with`](Self::login_with), the group listing request
    /// here is never retried.
    async fn reauthenticate(&mut self) -> Result<(), Error> {
        tracing::info!("Session token rejected, logging in again");
        self.create_token().await?;

        let response = self
            .execute(&ApiRequest::get(self.endpoints.groups()))
            .await?
            .error_for_status()?;
        self.store_groups(&response)?;

        self.persist_if_dirty()
    }

    fn store_groups(&mut self, response: &ApiResponse) -> Result<(), Error> {
        let groups: serde_json::Value = response.parse()?;
        self.cache.set_groups(groups);
        self.catalog.invalidate();
        Ok(())
    }

    fn persist_if_dirty(&mut self) -> Result<(), Error> {
        if self.cache.is_dirty() {
            self.cache.persist(&self.token_file)?;
        }
        Ok(())
    }

    // ========== Requests ==========

    /// Sends a request with the current token.
    async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, Error> {
        self.transport
            .send(request, self.cache.token())
            .await
            .map_err(Error::Request)
    }

    /// Sends a request, re-authenticating once if the token was rejected.
    async fn request(&mut self, request: &ApiRequest) -> Result<ApiResponse, Error> {
        let mut response = self.execute(request).await?;

        if response.is_unauthorized() {
            self.reauthenticate().await?;
            response = self.execute(request).await?;
        }

        response.error_for_status()
    }

    // ========== Devices ==========

    /// Returns the device summaries.
    ///
    /// Logs in first if no token is held. The summaries are built from the
    /// cached group listing on first access and reused afterwards.
    ///
    /// # Errors
    ///
    /// Returns login errors, or [`Error::Parse`] if the group listing is
    /// malformed.
    pub async fn get_devices(&mut self) -> Result<&[DeviceSummary], Error> {
        if !self.cache.is_valid() {
            self.login().await?;
        }
        self.ensure_catalog()?;
        Ok(self.catalog.devices())
    }

    /// Rebuilds the device summaries from the cached group listing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the group listing is malformed.
    pub fn refresh_devices(&mut self) -> Result<&[DeviceSummary], Error> {
        Ok(self.catalog.refresh(self.cache.groups())?)
    }

    fn ensure_catalog(&mut self) -> Result<(), ParseError> {
        if !self.catalog.is_built() {
            self.catalog.refresh(self.cache.groups())?;
        }
        Ok(())
    }

    fn resolve(&mut self, id: &str) -> Result<String, Error> {
        self.ensure_catalog()?;
        self.catalog
            .resolve(id)
            .map(str::to_string)
            .ok_or_else(|| Error::DeviceNotFound(id.to_string()))
    }

    /// Reads and decodes the status of a device.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] for an unknown id (without sending
    /// anything), request errors, or [`Error::Parse`] if the status cannot
    /// be decoded.
    pub async fn get_device(&mut self, id: &str) -> Result<DeviceStatus, Error> {
        let guid = self.resolve(id)?;
        let response = self
            .request(&ApiRequest::get(self.endpoints.status(&guid)))
            .await?;

        let body: serde_json::Value = response.parse()?;
        let parameters = body
            .get("parameters")
            .ok_or(ParseError::MissingField("parameters"))?;

        Ok(DeviceStatus {
            id: id.to_string(),
            parameters: codec::decode(parameters)?,
        })
    }

    /// Pushes attribute changes to a device.
    ///
    /// If a louver axis is changed, the current status is fetched first so
    /// the other axis keeps its automatic swing setting.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] for an unknown id (without sending
    /// anything), or request and parse errors.
    pub async fn set_device(&mut self, id: &str, changes: &DeviceChanges) -> Result<(), Error> {
        let guid = self.resolve(id)?;

        let current = if changes.touches_air_swing() {
            Some(self.get_device(id).await?.parameters)
        } else {
            None
        };

        let parameters = codec::encode(changes, current.as_ref());
        let payload = json!({
            "deviceGuid": guid,
            "parameters": parameters,
        });
        tracing::debug!(device = %id, payload = %payload, "Sending control request");

        let response = self
            .request(&ApiRequest::post(self.endpoints.control(), payload))
            .await?;
        let _: serde_json::Value = response.parse()?;
        Ok(())
    }

    /// Returns the raw status document of a device.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] for an unknown id, or request and
    /// parse errors.
    pub async fn dump(&mut self, id: &str) -> Result<serde_json::Value, Error> {
        let guid = self.resolve(id)?;
        let response = self
            .request(&ApiRequest::get(self.endpoints.status(&guid)))
            .await?;
        Ok(response.parse()?)
    }

    /// Reads consumption history in the default timezone.
    ///
    /// # Errors
    ///
    /// See [`history_with_timezone`](Self::history_with_timezone).
    pub async fn history(
        &mut self,
        id: &str,
        mode: &str,
        date: NaiveDate,
    ) -> Result<DeviceStatus, Error> {
        self.history_with_timezone(id, mode, date, DEFAULT_TIMEZONE)
            .await
    }

    /// Reads consumption history.
    ///
    /// `mode` is one of `Day`, `Week`, `Month` or `Year` and selects the
    /// period around `date`. `timezone` is an offset such as `+02:00`.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidHistoryMode`](crate::error::ValueError::InvalidHistoryMode)
    /// for an unknown mode and [`Error::DeviceNotFound`] for an unknown id,
    /// both before anything is sent; otherwise request and parse errors.
    pub async fn history_with_timezone(
        &mut self,
        id: &str,
        mode: &str,
        date: NaiveDate,
        timezone: &str,
    ) -> Result<DeviceStatus, Error> {
        let mode = DataMode::parse_mode(mode)?;
        let guid = self.resolve(id)?;

        let payload = json!({
            "deviceGuid": guid,
            "dataMode": mode.code(),
            "date": date.format("%Y%m%d").to_string(),
            "osTimezone": timezone,
        });

        let response = self
            .request(&ApiRequest::post(self.endpoints.history(), payload))
            .await?;
        let body: serde_json::Value = response.parse()?;

        Ok(DeviceStatus {
            id: id.to_string(),
            parameters: codec::decode(&body)?,
        })
    }
}
