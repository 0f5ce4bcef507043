// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Per request options.
//!
//! Applications may need to customize the behavior of some calls. For example,
//! they may need to make an update conditional on the current entity tag of
//! the resource, or provide a retry token so the service can detect
//! duplicated create requests.

use crate::error::OPC_REQUEST_ID;
use http::{HeaderMap, HeaderName, HeaderValue};

/// The name of the header carrying the retry token.
pub const OPC_RETRY_TOKEN: &str = "opc-retry-token";

/// A set of options configuring a single request.
///
/// Applications only use this type directly in mocks, where they may want to
/// verify their application has configured all the right request parameters
/// and options. The composite operations forward these options to the
/// mutating request, the polling requests use the defaults.
///
/// # Example
/// ```
/// # use blockstorage_gax::options::RequestOptions;
/// let mut options = RequestOptions::default();
/// options.set_if_match("etag-123");
/// options.set_opc_retry_token("create-my-volume");
/// assert_eq!(options.if_match().as_deref(), Some("etag-123"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    opc_request_id: Option<String>,
    opc_retry_token: Option<String>,
    if_match: Option<String>,
    extra_headers: HeaderMap,
}

impl RequestOptions {
    /// Gets the client-provided request id.
    pub fn opc_request_id(&self) -> &Option<String> {
        &self.opc_request_id
    }

    /// Sets a unique identifier for the request.
    ///
    /// The service echoes this value in its responses. It simplifies
    /// troubleshooting when contacting support.
    pub fn set_opc_request_id<T: Into<String>>(&mut self, v: T) {
        self.opc_request_id = Some(v.into());
    }

    /// Gets the retry token.
    pub fn opc_retry_token(&self) -> &Option<String> {
        &self.opc_retry_token
    }

    /// Sets a token that uniquely identifies a request so it can be retried.
    ///
    /// If a create request times out, or fails with a transient error, it may
    /// be retried with the same token. The service guarantees the resource is
    /// created at most once.
    pub fn set_opc_retry_token<T: Into<String>>(&mut self, v: T) {
        self.opc_retry_token = Some(v.into());
    }

    /// Gets the entity tag precondition.
    pub fn if_match(&self) -> &Option<String> {
        &self.if_match
    }

    /// Makes the request conditional on the resource entity tag.
    ///
    /// For updates and deletes, the request only succeeds if the current
    /// entity tag of the resource matches this value.
    pub fn set_if_match<T: Into<String>>(&mut self, v: T) {
        self.if_match = Some(v.into());
    }

    /// Gets the additional headers.
    pub fn extra_headers(&self) -> &HeaderMap {
        &self.extra_headers
    }

    /// Adds a header to send with the request.
    pub fn insert_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.extra_headers.insert(name, value);
    }

    /// Returns all the headers implied by these options.
    ///
    /// Fails if any of the configured values is not a valid header value.
    ///
    /// # Example
    /// ```
    /// # use blockstorage_gax::options::RequestOptions;
    /// let mut options = RequestOptions::default();
    /// options.set_if_match("etag-123");
    /// let headers = options.headers()?;
    /// assert_eq!(headers.get("if-match").and_then(|v| v.to_str().ok()), Some("etag-123"));
    /// # Ok::<(), blockstorage_gax::error::Error>(())
    /// ```
    pub fn headers(&self) -> crate::Result<HeaderMap> {
        let mut headers = self.extra_headers.clone();
        let values = [
            (OPC_REQUEST_ID, &self.opc_request_id),
            (OPC_RETRY_TOKEN, &self.opc_retry_token),
            ("if-match", &self.if_match),
        ];
        for (name, value) in values {
            let Some(value) = value else {
                continue;
            };
            let value = HeaderValue::from_str(value).map_err(crate::error::Error::binding)?;
            headers.insert(HeaderName::from_static(name), value);
        }
        Ok(headers)
    }
}
