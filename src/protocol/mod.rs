// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP boundary to the cloud API.
//!
//! [`Transport`] is the single capability the session needs: send one
//! request, get back status and body. [`HttpClient`] implements it with
//! reqwest; [`Endpoints`] builds the request targets.

mod endpoints;
mod http;

pub use endpoints::Endpoints;
pub use http::{CloudConfig, HttpClient};

use reqwest::{Method, StatusCode};

use crate::error::{Error, ParseError, ProtocolError, ResponseBody};

/// A request to the cloud API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    method: Method,
    url: String,
    body: Option<serde_json::Value>,
}

impl ApiRequest {
    /// Creates a GET request.
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            body: None,
        }
    }

    /// Creates a POST request with a JSON body.
    #[must_use]
    pub fn post(url: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: Method::POST,
            url: url.into(),
            body: Some(body),
        }
    }

    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }
}

/// Status and raw body of a cloud response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    status: u16,
    body: String,
}

impl ApiResponse {
    /// Creates a response.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns the raw response body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns `true` for a 200 response.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == StatusCode::OK.as_u16()
    }

    /// Returns `true` if the token was rejected.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status == StatusCode::UNAUTHORIZED.as_u16()
    }

    /// Turns a non-success response into [`Error::Response`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Response`] carrying status and body unless the
    /// status is 200.
    pub fn error_for_status(self) -> Result<Self, Error> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(Error::Response {
                status: self.status,
                body: ResponseBody::from_text(&self.body),
            })
        }
    }

    /// Parses the body as a specific type.
    ///
    /// # Errors
    ///
    /// Returns error if the JSON cannot be parsed into the target type.
    pub fn parse<T: serde::de::DeserializeOwned>(&self) -> Result<T, ParseError> {
        serde_json::from_str(&self.body).map_err(Into::into)
    }
}

/// Capability to send a request to the cloud.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Sends `request`, authorized with `token` when present.
    ///
    /// Any HTTP status counts as a response; only failures to obtain one
    /// are errors.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request cannot be sent or the body
    /// cannot be read.
    async fn send(
        &self,
        request: &ApiRequest,
        token: Option<&str>,
    ) -> Result<ApiResponse, ProtocolError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_constructors() {
        let get = ApiRequest::get("https://host/device/group");
        assert_eq!(get.method(), &Method::GET);
        assert!(get.body().is_none());

        let post = ApiRequest::post("https://host/auth/login", serde_json::json!({ "a": 1 }));
        assert_eq!(post.method(), &Method::POST);
        assert_eq!(post.body().unwrap()["a"], 1);
    }

    #[test]
    fn response_status_helpers() {
        assert!(ApiResponse::new(200, "{}").is_success());
        assert!(ApiResponse::new(401, "").is_unauthorized());
        assert!(!ApiResponse::new(204, "").is_success());
    }

    #[test]
    fn error_for_status_carries_body() {
        let err = ApiResponse::new(403, r#"{"code":4102}"#)
            .error_for_status()
            .unwrap_err();
        match err {
            Error::Response { status, body } => {
                assert_eq!(status, 403);
                assert_eq!(body.as_json().unwrap()["code"], 4102);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parse_body() {
        let response = ApiResponse::new(200, r#"{"uToken":"t"}"#);
        let value: serde_json::Value = response.parse().unwrap();
        assert_eq!(value["uToken"], "t");
    }
}
