// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for air conditioner control.
//!
//! Every attribute the cloud transmits as an integer code is modelled as a
//! closed enumeration with an explicit code table. Decoding a code that is
//! not in the table is an error, never a silent default.
//!
//! # Types
//!
//! - [`Power`] - On/Off
//! - [`OperationMode`] - Auto, Dry, Cool, Heat, Fan
//! - [`FanSpeed`] - Auto and five discrete speeds
//! - [`AirSwingHorizontal`] / [`AirSwingVertical`] - Louver positions, including `Auto`
//! - [`AirSwingAutoMode`] - Combined auto flag for both louver axes
//! - [`EcoMode`] - Auto, Powerful, Quiet
//! - [`NanoeMode`] - Air treatment, including `Unavailable`
//! - [`DataMode`] - Aggregation period for history queries

/// Declares a closed enumeration backed by integer wire codes.
///
/// Generates `code()`, `from_code()`, `name()`, `ALL`, plus `Display`,
/// case-insensitive `FromStr` and serde impls that use the variant name.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident as $kind:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $code:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// All members in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the integer code used on the wire.
            #[must_use]
            pub const fn code(self) -> i64 {
                match self {
                    $(Self::$variant => $code,)+
                }
            }

            /// Looks up the member for a wire code.
            #[must_use]
            pub const fn from_code(code: i64) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Returns the member name.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::ValueError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|member| member.name().eq_ignore_ascii_case(s))
                    .ok_or_else(|| $crate::error::ValueError::UnknownName {
                        kind: $kind,
                        name: s.to_string(),
                    })
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.name())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let name = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                name.parse().map_err(::serde::de::Error::custom)
            }
        }
    };
}

mod fan;
mod history;
mod mode;
mod nanoe;
mod power;
mod swing;

pub use fan::FanSpeed;
pub use history::DataMode;
pub use mode::{EcoMode, OperationMode};
pub use nanoe::NanoeMode;
pub use power::Power;
pub use swing::{AirSwingAutoMode, AirSwingHorizontal, AirSwingVertical};
