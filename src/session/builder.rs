// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Session builder.

use std::fmt;
use std::path::PathBuf;

use crate::cache::{CachingScope, CredentialCache};
use crate::error::Error;
use crate::protocol::{CloudConfig, Endpoints, HttpClient, Transport};
use crate::session::Session;
use crate::session::catalog::DeviceCatalog;

/// File name of the credential cache in the home directory.
pub const DEFAULT_TOKEN_FILE: &str = ".comfortcloud-token.json";

/// Returns the default credential cache location.
#[must_use]
pub fn default_token_file() -> PathBuf {
    dirs::home_dir().map_or_else(
        || PathBuf::from(DEFAULT_TOKEN_FILE),
        |home| home.join(DEFAULT_TOKEN_FILE),
    )
}

/// Account credentials.
#[derive(Clone)]
pub(crate) struct Credentials {
    pub(crate) username: String,
    pub(crate) password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Builder for [`Session`].
///
/// # Examples
///
/// ```no_run
/// use comfortcloud_lib::Session;
/// use comfortcloud_lib::cache::CachingScope;
///
/// # async fn example() -> comfortcloud_lib::Result<()> {
/// let mut session = Session::builder("user@example.com", "secret")
///     .with_token_file("/tmp/comfortcloud-token.json")
///     .with_caching(CachingScope::All)
///     .build()?;
///
/// session.login().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SessionBuilder {
    credentials: Credentials,
    token_file: Option<PathBuf>,
    caching: CachingScope,
    config: CloudConfig,
}

impl SessionBuilder {
    pub(crate) fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            credentials: Credentials {
                username: username.into(),
                password: password.into(),
            },
            token_file: None,
            caching: CachingScope::default(),
            config: CloudConfig::default(),
        }
    }

    /// Sets the credential cache file.
    ///
    /// Defaults to [`default_token_file`].
    #[must_use]
    pub fn with_token_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_file = Some(path.into());
        self
    }

    /// Sets which cache fields are persisted.
    #[must_use]
    pub fn with_caching(mut self, caching: CachingScope) -> Self {
        self.caching = caching;
        self
    }

    /// Sets the HTTP configuration.
    #[must_use]
    pub fn with_config(mut self, config: CloudConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds a session over the reqwest transport.
    ///
    /// No request is sent; call [`Session::login`] next.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn build(self) -> Result<Session<HttpClient>, Error> {
        let client = self.config.clone().into_client()?;
        Ok(self.build_with_transport(client))
    }

    /// Builds a session over a custom transport.
    ///
    /// Endpoints are still derived from the configured base URL.
    #[must_use]
    pub fn build_with_transport<T: Transport>(self, transport: T) -> Session<T> {
        Session {
            transport,
            endpoints: Endpoints::new(self.config.base_url()),
            credentials: self.credentials,
            token_file: self.token_file.unwrap_or_else(default_token_file),
            cache: CredentialCache::new(self.caching),
            catalog: DeviceCatalog::default(),
        }
    }
}
