// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device summaries and the logical-id index.

use std::collections::HashMap;

use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// A device as listed in the group listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceSummary {
    id: String,
    name: String,
    group: String,
    model: Option<String>,
}

impl DeviceSummary {
    /// Returns the logical device id used by the session API.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the name of the group holding this device.
    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Returns the model number, when the cloud reports one.
    #[must_use]
    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroupListing {
    #[serde(default)]
    group_list: Vec<Group>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Group {
    #[serde(default)]
    group_name: String,
    #[serde(default)]
    device_list: Option<Vec<Option<GroupDevice>>>,
    #[serde(default)]
    device_id_list: Option<Vec<Option<GroupDevice>>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroupDevice {
    #[serde(default)]
    device_guid: String,
    #[serde(default)]
    device_name: String,
    #[serde(default)]
    device_hash_guid: Option<String>,
    #[serde(default)]
    device_module_number: Option<String>,
}

/// Logical id for a raw device id that has no vendor hash.
fn hashed_id(device_guid: &str) -> String {
    hex::encode(Md5::digest(device_guid.as_bytes()))
}

/// Device summaries built from a group listing, plus the index from logical
/// id to raw device id.
///
/// The catalog is either built or absent. It is built on first use and
/// stays as is until [`invalidate`](Self::invalidate) or
/// [`refresh`](Self::refresh) is called.
#[derive(Debug, Clone, Default)]
pub struct DeviceCatalog {
    devices: Option<Vec<DeviceSummary>>,
    index: HashMap<String, String>,
}

impl DeviceCatalog {
    /// Returns `true` once the catalog has been built.
    #[must_use]
    pub fn is_built(&self) -> bool {
        self.devices.is_some()
    }

    /// Drops the summaries and the index.
    pub fn invalidate(&mut self) {
        self.devices = None;
        self.index.clear();
    }

    /// Rebuilds summaries and index from a group listing.
    ///
    /// A missing listing yields an empty catalog. Entries without a raw
    /// device id are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Json`] if the listing does not have the
    /// expected shape; the catalog is left unbuilt.
    pub fn refresh(
        &mut self,
        groups: Option<&serde_json::Value>,
    ) -> Result<&[DeviceSummary], ParseError> {
        self.invalidate();

        let listing = match groups {
            Some(groups) => GroupListing::deserialize(groups)?,
            None => GroupListing {
                group_list: Vec::new(),
            },
        };

        let mut devices = Vec::new();
        for group in listing.group_list {
            let entries = group
                .device_list
                .or(group.device_id_list)
                .unwrap_or_default();

            for device in entries.into_iter().flatten() {
                if device.device_guid.is_empty() {
                    continue;
                }

                let id = device
                    .device_hash_guid
                    .unwrap_or_else(|| hashed_id(&device.device_guid));

                self.index.insert(id.clone(), device.device_guid);
                devices.push(DeviceSummary {
                    id,
                    name: device.device_name,
                    group: group.group_name.clone(),
                    model: device.device_module_number.filter(|m| !m.is_empty()),
                });
            }
        }

        tracing::debug!(count = devices.len(), "Device catalog built");
        Ok(self.devices.insert(devices).as_slice())
    }

    /// Returns the summaries, or an empty slice if the catalog is not built.
    #[must_use]
    pub fn devices(&self) -> &[DeviceSummary] {
        self.devices.as_deref().unwrap_or_default()
    }

    /// Returns the raw device id for a logical id.
    #[must_use]
    pub fn resolve(&self, id: &str) -> Option<&str> {
        self.index.get(id).map(String::as_str)
    }
}
