// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Nanoe air treatment.

wire_enum! {
    /// Nanoe mode, transmitted as `nanoe`.
    pub enum NanoeMode as "nanoe mode" {
        /// The unit has no nanoe module. Never sent in a control request.
        Unavailable = 0,
        Off = 1,
        On = 2,
        ModeG = 3,
        All = 4,
    }
}

impl NanoeMode {
    /// Returns `true` unless this is [`NanoeMode::Unavailable`].
    #[must_use]
    pub const fn is_available(self) -> bool {
        !matches!(self, Self::Unavailable)
    }
}
