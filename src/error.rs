// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `comfortcloud_lib` library.
//!
//! This module provides the error hierarchy for every failure the session
//! layer can surface: authentication, transport, unexpected HTTP statuses,
//! wire decoding, device lookup, value validation and cache persistence.

use std::fmt;

use thiserror::Error;

/// The main error type for this library.
///
/// Expired-token responses are handled internally by a single re-login and
/// retry; every other failure ends up here.
#[derive(Debug, Error)]
pub enum Error {
    /// Authentication against the cloud failed.
    #[error("login failed: {0}")]
    Login(#[from] LoginError),

    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Request(#[from] ProtocolError),

    /// The cloud answered with a non-success status code.
    #[error("invalid response, status code: {status} - data: {body}")]
    Response {
        /// HTTP status code.
        status: u16,
        /// Response body, parsed as JSON when possible.
        body: ResponseBody,
    },

    /// A response or wire value could not be decoded.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A caller-supplied value was rejected.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// The credential cache could not be written.
    #[error("cache error: {0}")]
    Cache(#[from] CacheError),

    /// No device with this logical id is known to the session.
    #[error("device not found: {0}")]
    DeviceNotFound(String),
}

/// Body of an unexpected HTTP response.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// The body was valid JSON.
    Json(serde_json::Value),
    /// The body could not be parsed and is kept verbatim.
    Text(String),
}

impl ResponseBody {
    /// Parses a raw body, falling back to plain text.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        serde_json::from_str(text).map_or_else(|_| Self::Text(text.to_string()), Self::Json)
    }

    /// Returns the JSON value when the body was parsed.
    #[must_use]
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Errors raised while creating a session token.
#[derive(Debug, Error)]
pub enum LoginError {
    /// The authentication request could not be sent.
    #[error("authentication request failed: {0}")]
    Transport(#[source] ProtocolError),

    /// The cloud refused the credentials.
    #[error("authentication rejected, status code: {status} - data: {body}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Response body.
        body: ResponseBody,
    },

    /// The authentication response did not contain a token.
    #[error("invalid authentication response: {0}")]
    InvalidResponse(#[source] serde_json::Error),
}

/// Errors related to HTTP transport.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A configured header value is not valid.
    #[error("invalid header value for {name}: {value}")]
    InvalidHeader {
        /// Header name.
        name: &'static str,
        /// The rejected value.
        value: String,
    },
}

/// Errors related to parsing cloud responses and wire parameters.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected field is missing from the response.
    #[error("missing field in response: {0}")]
    MissingField(&'static str),

    /// A wire code has no matching enumeration member.
    #[error("unknown code {code} for {field}")]
    UnknownCode {
        /// The wire key carrying the code.
        field: &'static str,
        /// The unrecognized code.
        code: i64,
    },
}

/// Errors related to value validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A name does not match any member of an enumeration.
    #[error("invalid {kind}: {name}")]
    UnknownName {
        /// The enumeration being parsed.
        kind: &'static str,
        /// The rejected name.
        name: String,
    },

    /// A history mode other than Day, Week, Month or Year was requested.
    #[error("wrong history mode: {0}")]
    InvalidHistoryMode(String),
}

/// Errors raised while persisting the credential cache.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The cache file could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The cache could not be serialized.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_body_parses_json() {
        let body = ResponseBody::from_text(r#"{"message":"Token expires","code":4100}"#);
        let json = body.as_json().unwrap();
        assert_eq!(json["code"], 4100);
    }

    #[test]
    fn response_body_keeps_plain_text() {
        let body = ResponseBody::from_text("Bad Gateway");
        assert_eq!(body, ResponseBody::Text("Bad Gateway".to_string()));
        assert!(body.as_json().is_none());
    }

    #[test]
    fn response_error_display() {
        let err = Error::Response {
            status: 500,
            body: ResponseBody::from_text("oops"),
        };
        assert_eq!(
            err.to_string(),
            "invalid response, status code: 500 - data: oops"
        );
    }

    #[test]
    fn parse_error_display() {
        let err = ParseError::UnknownCode {
            field: "operationMode",
            code: 9,
        };
        assert_eq!(err.to_string(), "unknown code 9 for operationMode");
    }

    #[test]
    fn error_from_value_error() {
        let err: Error = ValueError::InvalidHistoryMode("Hour".to_string()).into();
        assert!(matches!(err, Error::Value(ValueError::InvalidHistoryMode(m)) if m == "Hour"));
    }
}
