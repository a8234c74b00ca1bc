// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request targets.

/// Builds endpoint URLs from a base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    /// Creates endpoints rooted at `base_url`. A trailing slash is ignored.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn login(&self) -> String {
        format!("{}/auth/login", self.base_url)
    }

    #[must_use]
    pub fn groups(&self) -> String {
        format!("{}/device/group", self.base_url)
    }

    /// Status of one device. The raw device id is percent-encoded.
    #[must_use]
    pub fn status(&self, device_guid: &str) -> String {
        format!(
            "{}/deviceStatus/now/{}",
            self.base_url,
            urlencoding::encode(device_guid)
        )
    }

    #[must_use]
    pub fn control(&self) -> String {
        format!("{}/deviceStatus/control", self.base_url)
    }

    #[must_use]
    pub fn history(&self) -> String {
        format!("{}/deviceHistoryData", self.base_url)
    }
}
