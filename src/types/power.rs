// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power state of an air conditioner.

wire_enum! {
    /// Power state, transmitted as `operate`.
    ///
    /// # Examples
    ///
    /// ```
    /// use comfortcloud_lib::types::Power;
    ///
    /// assert_eq!(Power::On.code(), 1);
    /// assert_eq!(Power::from_code(0), Some(Power::Off));
    /// assert_eq!("on".parse::<Power>().unwrap(), Power::On);
    /// ```
    pub enum Power as "power state" {
        /// Unit is off.
        Off = 0,
        /// Unit is running.
        On = 1,
    }
}
