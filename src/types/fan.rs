// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fan speed.

wire_enum! {
    /// Fan speed, transmitted as `fanSpeed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use comfortcloud_lib::types::FanSpeed;
    ///
    /// let speed: FanSpeed = "highmid".parse().unwrap();
    /// assert_eq!(speed, FanSpeed::HighMid);
    /// assert_eq!(speed.code(), 4);
    /// ```
    pub enum FanSpeed as "fan speed" {
        /// Unit chooses the speed.
        Auto = 0,
        Low = 1,
        LowMid = 2,
        Mid = 3,
        HighMid = 4,
        High = 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fan_speed_codes_are_ordered() {
        for (expected, speed) in (0..).zip(FanSpeed::ALL) {
            assert_eq!(speed.code(), expected);
        }
    }

    #[test]
    fn fan_speed_unknown_code() {
        assert_eq!(FanSpeed::from_code(6), None);
    }
}
