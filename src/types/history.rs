// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! History aggregation period.

use crate::error::ValueError;

wire_enum! {
    /// Aggregation period of a history query, transmitted as `dataMode`.
    pub enum DataMode as "history mode" {
        Day = 0,
        Week = 1,
        Month = 2,
        Year = 4,
    }
}

impl DataMode {
    /// Parses a history mode name.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidHistoryMode`] for anything other than
    /// `Day`, `Week`, `Month` or `Year`.
    pub fn parse_mode(mode: &str) -> Result<Self, ValueError> {
        mode.parse()
            .map_err(|_| ValueError::InvalidHistoryMode(mode.to_string()))
    }
}
