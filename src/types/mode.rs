// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operation and eco modes.

wire_enum! {
    /// Operation mode, transmitted as `operationMode`.
    pub enum OperationMode as "operation mode" {
        /// Unit picks heating or cooling on its own.
        Auto = 0,
        /// Dehumidify.
        Dry = 1,
        /// Cool.
        Cool = 2,
        /// Heat.
        Heat = 3,
        /// Fan only.
        Fan = 4,
    }
}

wire_enum! {
    /// Eco mode, transmitted as `ecoMode`.
    pub enum EcoMode as "eco mode" {
        /// Normal operation.
        Auto = 0,
        /// Maximum output.
        Powerful = 1,
        /// Reduced noise.
        Quiet = 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_mode_table() {
        let codes: Vec<i64> = OperationMode::ALL.iter().map(|m| m.code()).collect();
        assert_eq!(codes, vec![0, 1, 2, 3, 4]);
        assert_eq!(OperationMode::from_code(3), Some(OperationMode::Heat));
        assert_eq!(OperationMode::from_code(5), None);
    }

    #[test]
    fn eco_mode_table() {
        assert_eq!(EcoMode::from_code(1), Some(EcoMode::Powerful));
        assert_eq!(EcoMode::Quiet.code(), 2);
        assert_eq!(EcoMode::from_code(-1), None);
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(OperationMode::Cool.to_string(), "Cool");
        assert_eq!(EcoMode::Powerful.to_string(), "Powerful");
    }
}
