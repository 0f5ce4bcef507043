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

use super::rpc::Status;
use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The name of the header carrying the service-assigned request id.
pub const OPC_REQUEST_ID: &str = "opc-request-id";

/// The core error returned by all client libraries.
///
/// The client libraries report errors from multiple sources. For example, the
/// service may return an error, the transport may be unable to create the
/// necessary connection to make a request, a wait for some resource state may
/// run out of time, or the library may be unable to format the request due to
/// invalid or missing application inputs.
///
/// Most applications will just return the error or log it, without any further
/// action. However, some applications may need to interrogate the error
/// details. This type offers a series of predicates to determine the error
/// kind. The type also offers accessors to query the most common error details.
/// Applications can query the error [source][std::error::Error::source] for
/// deeper information.
///
/// # Example
/// ```
/// use blockstorage_gax::error::Error;
/// match example_function() {
///     Err(e) if e.is_not_found() => { println!("no such volume {e}"); },
///     Err(e) if e.is_timeout() => { println!("not enough time {e}"); },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success, how boring"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     // ... details omitted ...
///     # use blockstorage_gax::error::rpc::Status;
///     # Err(Error::service_with_http_metadata(Status::default().set_code("NotAuthorizedOrNotFound"), Some(404), None))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error with the information returned by the service.
    ///
    /// # Example
    /// ```
    /// use blockstorage_gax::error::Error;
    /// use blockstorage_gax::error::rpc::Status;
    /// let status = Status::default().set_code("IncorrectState").set_message("busy");
    /// let error = Error::service(status.clone());
    /// assert_eq!(error.status(), Some(&status));
    /// ```
    pub fn service(status: Status) -> Self {
        Self::service_with_http_metadata(status, None, None)
    }

    /// Creates a service error including the HTTP status code and headers.
    ///
    /// # Example
    /// ```
    /// use blockstorage_gax::error::Error;
    /// use blockstorage_gax::error::rpc::Status;
    /// let status = Status::default().set_code("NotAuthorizedOrNotFound");
    /// let error = Error::service_with_http_metadata(status, Some(404), None);
    /// assert!(error.is_not_found());
    /// ```
    pub fn service_with_http_metadata(
        status: Status,
        status_code: Option<u16>,
        headers: Option<HeaderMap>,
    ) -> Self {
        let details = ServiceDetails {
            status_code,
            headers,
            status,
        };
        let kind = ErrorKind::Service(Box::new(details));
        Self { kind, source: None }
    }

    /// Creates an error representing a timeout.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use blockstorage_gax::error::Error;
    /// let error = Error::timeout("simulated timeout");
    /// assert!(error.is_timeout());
    /// assert!(error.source().is_some());
    /// ```
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Timeout,
            source: Some(source.into()),
        }
    }

    /// The operation could not be completed before its deadline.
    ///
    /// This is always a client-side generated error. Most commonly the wait
    /// for a resource to reach a lifecycle state took longer than the
    /// configured maximum. The resource may still reach that state later.
    ///
    /// # Troubleshooting
    ///
    /// Some resources, notably large backups and copies across regions, take a
    /// long time to reach their final state. Consider increasing the maximum
    /// wait time, or polling the resource again later.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a deserialization problem.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use blockstorage_gax::error::Error;
    /// let error = Error::deser("simulated problem");
    /// assert!(error.is_deserialization());
    /// assert!(error.source().is_some());
    /// ```
    #[doc(hidden)]
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
        }
    }

    /// The response could not be deserialized, or it is missing required
    /// fields.
    ///
    /// This is always a client-side generated error. Note that the request may
    /// have completed in the service. If the request mutates any state in the
    /// service, it may or may not be safe to attempt the request again.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// The request is missing required parameters, or the parameters do not
    /// have a valid format.
    #[doc(hidden)]
    pub fn binding<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Binding,
            source: Some(source.into()),
        }
    }

    /// If true, the request was missing required parameters or the parameters
    /// did not have a valid format.
    ///
    /// These errors are detected locally, before any request is sent.
    ///
    /// # Troubleshooting
    ///
    /// Typically this indicates a problem in the application. A required id
    /// was empty, the set of target states contained a blank value, or the
    /// wait configuration was invalid. The error source describes which.
    pub fn is_binding(&self) -> bool {
        matches!(&self.kind, ErrorKind::Binding)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// A problem reported by the transport layer.
    #[doc(hidden)]
    pub fn http(status_code: u16, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        let details = TransportDetails {
            status_code: Some(status_code),
            headers: Some(headers),
            payload: Some(payload),
        };
        let kind = ErrorKind::Transport(Box::new(details));
        Self { kind, source: None }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// A problem in the transport layer without a full HTTP response.
    ///
    /// Examples include: a broken connection after the request is sent, or
    /// any HTTP error that did not include a status code or other headers.
    #[doc(hidden)]
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        let details = TransportDetails {
            status_code: None,
            headers: None,
            payload: None,
        };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: Some(source.into()),
        }
    }

    /// A problem in the transport layer without a full HTTP response.
    ///
    /// Examples include read or write problems, and broken connections.
    pub fn is_io(&self) -> bool {
        matches!(
        &self.kind,
        ErrorKind::Transport(d) if matches!(**d, TransportDetails {
            status_code: None,
            headers: None,
            payload: None,
        }))
    }

    /// A problem in the transport layer.
    ///
    /// Examples include errors in a proxy, load balancer, or other network
    /// element generated before the service is able to send a full response.
    pub fn is_transport(&self) -> bool {
        matches!(&self.kind, ErrorKind::Transport { .. })
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// A failure after a mutating request succeeded.
    ///
    /// The source is expected to carry the partial results obtained before the
    /// failure.
    #[doc(hidden)]
    pub fn composite<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Composite,
            source: Some(source.into()),
        }
    }

    /// The mutating request succeeded, but a follow-up step failed.
    ///
    /// Composite operations issue a mutating request and then wait for the
    /// affected resource to reach some lifecycle state. If the wait fails, the
    /// changes made by the mutating request remain in effect. The error
    /// [source][std::error::Error::source] contains the response of the
    /// mutating request, the last observed state of the resource, and the
    /// error that stopped the wait.
    pub fn is_composite(&self) -> bool {
        matches!(self.kind, ErrorKind::Composite)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// A problem that does not fit any other category, for example, calling
    /// an operation the stub does not implement.
    #[doc(hidden)]
    pub fn other<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Other,
            source: Some(source.into()),
        }
    }

    /// The requested resource does not exist, or the caller is not authorized
    /// to see it.
    ///
    /// # Example
    /// ```
    /// use blockstorage_gax::error::Error;
    /// let error = Error::http(404, http::HeaderMap::new(), bytes::Bytes::from_static(b"NOT FOUND"));
    /// assert!(error.is_not_found());
    /// ```
    ///
    /// The service does not distinguish between resources that do not exist
    /// and resources the caller cannot access. Both are reported with an HTTP
    /// `404` status code.
    pub fn is_not_found(&self) -> bool {
        self.http_status_code() == Some(404)
    }

    /// The [Status] payload associated with this error.
    ///
    /// # Examples
    /// ```
    /// use blockstorage_gax::error::{Error, rpc::Status};
    /// let error = Error::service(Status::default().set_code("IncorrectState"));
    /// if let Some(status) = error.status() {
    ///     if status.code == "IncorrectState" {
    ///         println!("the resource is busy, more details in {}", status.message);
    ///     }
    /// }
    /// ```
    pub fn status(&self) -> Option<&Status> {
        match &self.kind {
            ErrorKind::Service(d) => Some(&d.as_ref().status),
            _ => None,
        }
    }

    /// The HTTP status code, if any, associated with this error.
    ///
    /// Note that `http_status_code()`, `http_headers()`, `http_payload()`, and
    /// `status()` are represented as different fields, because they may be
    /// set in some errors but not others.
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Transport(d) => d.as_ref().status_code,
            ErrorKind::Service(d) => d.as_ref().status_code,
            _ => None,
        }
    }

    /// The headers, if any, associated with this error.
    ///
    /// Many errors do not have this information, e.g. errors detected before
    /// the request is sent, or timeouts.
    pub fn http_headers(&self) -> Option<&http::HeaderMap> {
        match &self.kind {
            ErrorKind::Transport(d) => d.as_ref().headers.as_ref(),
            ErrorKind::Service(d) => d.as_ref().headers.as_ref(),
            _ => None,
        }
    }

    /// The payload, if any, associated with this error.
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        match &self.kind {
            ErrorKind::Transport(d) => d.payload.as_ref(),
            _ => None,
        }
    }

    /// The request id assigned by the service, if any.
    ///
    /// # Example
    /// ```
    /// use blockstorage_gax::error::Error;
    /// let mut headers = http::HeaderMap::new();
    /// headers.insert("opc-request-id", http::HeaderValue::from_static("abc123"));
    /// let error = Error::http(500, headers, bytes::Bytes::from_static(b"oops"));
    /// assert_eq!(error.opc_request_id(), Some("abc123"));
    /// ```
    ///
    /// Include this value when contacting support about a failed request.
    pub fn opc_request_id(&self) -> Option<&str> {
        self.http_headers()
            .and_then(|h| h.get(OPC_REQUEST_ID))
            .and_then(|v| v.to_str().ok())
    }

    /// Returns the error source downcast to `T`, if it is of that type.
    ///
    /// # Example
    /// ```
    /// use blockstorage_gax::error::Error;
    /// let error = Error::io(std::io::Error::other("broken pipe"));
    /// assert!(error.as_inner::<std::io::Error>().is_some());
    /// ```
    pub fn as_inner<T: StdError + Send + Sync + 'static>(&self) -> Option<&T> {
        self.source.as_ref().and_then(|e| e.downcast_ref::<T>())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::Binding, Some(e)) => {
                write!(f, "cannot send a request with invalid parameters {e}")
            }
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot deserialize the response {e}")
            }
            (ErrorKind::Timeout, Some(e)) => {
                write!(f, "the operation exceeded its deadline {e}")
            }
            (ErrorKind::Composite, Some(e)) => write!(f, "{e}"),
            (ErrorKind::Transport(details), _) => details.display(self.source(), f),
            (ErrorKind::Service(d), _) => {
                write!(
                    f,
                    "the service reports an error with code {} described as: {}",
                    d.status.code, d.status.message
                )
            }
            (ErrorKind::Other, Some(e)) => {
                write!(f, "an unclassified problem making a request: {e}")
            }
            (_, None) => unreachable!("no constructor allows this"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &dyn std::error::Error)
    }
}

/// The type of error held by an [Error] instance.
#[derive(Debug)]
enum ErrorKind {
    Binding,
    Deserialization,
    Timeout,
    Composite,
    Transport(Box<TransportDetails>),
    Service(Box<ServiceDetails>),
    /// A uncategorized error.
    Other,
}

#[derive(Debug)]
struct TransportDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    payload: Option<bytes::Bytes>,
}

impl TransportDetails {
    fn display(
        &self,
        source: Option<&(dyn StdError + 'static)>,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match (source, &self) {
            (
                _,
                TransportDetails {
                    status_code: Some(code),
                    payload: Some(p),
                    ..
                },
            ) => {
                if let Ok(message) = std::str::from_utf8(p.as_ref()) {
                    write!(f, "the HTTP transport reports a [{code}] error: {message}")
                } else {
                    write!(f, "the HTTP transport reports a [{code}] error: {p:?}")
                }
            }
            (Some(source), _) => {
                write!(f, "the transport reports an error: {source}")
            }
            (None, _) => unreachable!("no Error constructor allows this"),
        }
    }
}

#[derive(Debug)]
struct ServiceDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    status: Status,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[derive(thiserror::Error, Debug, PartialEq)]
    #[error("test-only error {0}")]
    struct TestError(i32);

    fn headers() -> HeaderMap {
        let mut headers = http::HeaderMap::new();
        headers.insert(
            "content-type",
            http::HeaderValue::from_static("application/json"),
        );
        headers.insert(OPC_REQUEST_ID, http::HeaderValue::from_static("req-123"));
        headers
    }

    #[test]
    fn service() {
        let status = Status::default()
            .set_code("IncorrectState")
            .set_message("the volume is busy");
        let error = Error::service(status.clone());
        assert!(error.source().is_none(), "{error:?}");
        assert_eq!(error.status(), Some(&status));
        assert!(error.to_string().contains("IncorrectState"), "{error}");
        assert!(error.to_string().contains("the volume is busy"), "{error}");
        assert!(!error.is_not_found(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert!(error.opc_request_id().is_none(), "{error:?}");
    }

    #[test]
    fn service_with_http_metadata() {
        let status = Status::default()
            .set_code("NotAuthorizedOrNotFound")
            .set_message("NOT FOUND");
        let error =
            Error::service_with_http_metadata(status.clone(), Some(404_u16), Some(headers()));
        assert_eq!(error.status(), Some(&status));
        assert!(error.to_string().contains("NOT FOUND"), "{error}");
        assert_eq!(error.http_status_code(), Some(404));
        assert_eq!(error.http_headers(), Some(&headers()));
        assert!(error.http_payload().is_none(), "{error:?}");
        assert!(error.is_not_found(), "{error:?}");
        assert_eq!(error.opc_request_id(), Some("req-123"));
    }

    #[test]
    fn timeout() {
        let error = Error::timeout(TestError(42));
        assert!(error.is_timeout(), "{error:?}");
        assert_eq!(error.as_inner::<TestError>(), Some(&TestError(42)));
        assert!(error.to_string().contains("test-only error 42"), "{error}");
        assert!(!error.is_not_found(), "{error:?}");
        assert!(error.http_headers().is_none(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert!(error.http_payload().is_none(), "{error:?}");
        assert!(error.status().is_none(), "{error:?}");
    }

    #[test]
    fn deserialization() {
        let error = Error::deser(TestError(7));
        assert!(error.is_deserialization(), "{error:?}");
        assert_eq!(error.as_inner::<TestError>(), Some(&TestError(7)));
        assert!(error.to_string().contains("test-only error 7"), "{error}");
    }

    #[test]
    fn binding() {
        let error = Error::binding(TestError(3));
        assert!(error.is_binding(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        assert!(error.to_string().contains("test-only error 3"), "{error}");
        assert!(error.status().is_none(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
    }

    #[test]
    fn composite() {
        let error = Error::composite(TestError(5));
        assert!(error.is_composite(), "{error:?}");
        assert!(!error.is_timeout(), "{error:?}");
        assert_eq!(error.as_inner::<TestError>(), Some(&TestError(5)));
        assert_eq!(error.to_string(), "test-only error 5");
    }

    #[test]
    fn http() {
        let payload = bytes::Bytes::from_static(b"NOT FOUND");
        let error = Error::http(404_u16, headers(), payload.clone());
        assert!(error.is_transport(), "{error:?}");
        assert!(!error.is_io(), "{error:?}");
        assert!(error.source().is_none(), "{error:?}");
        assert!(error.status().is_none(), "{error:?}");
        assert!(error.to_string().contains("NOT FOUND"), "{error}");
        assert!(error.to_string().contains("404"), "{error}");
        assert_eq!(error.http_status_code(), Some(404));
        assert_eq!(error.http_headers(), Some(&headers()));
        assert_eq!(error.http_payload(), Some(&payload));
        assert!(error.is_not_found(), "{error:?}");
        assert_eq!(error.opc_request_id(), Some("req-123"));
    }

    #[test]
    fn http_binary() {
        let payload = bytes::Bytes::from_static(&[0xFF, 0xFF]);
        let error = Error::http(503_u16, headers(), payload.clone());
        assert!(
            error.to_string().contains(&format!("{payload:?}")),
            "{error}"
        );
        assert!(!error.is_not_found(), "{error:?}");
    }

    #[test]
    fn io() {
        let error = Error::io(TestError(9));
        assert!(error.is_transport(), "{error:?}");
        assert!(error.is_io(), "{error:?}");
        assert!(error.status().is_none(), "{error:?}");
        assert_eq!(error.as_inner::<TestError>(), Some(&TestError(9)));
        assert!(error.to_string().contains("test-only error 9"), "{error}");
        assert!(!error.is_not_found(), "{error:?}");
    }

    #[test]
    fn other() {
        let error = Error::other(TestError(11));
        assert!(error.to_string().contains("test-only error 11"), "{error}");
        assert!(!error.is_binding(), "{error:?}");
    }

    #[test]
    fn send_and_sync() {
        static_assertions::assert_impl_all!(Error: Send, Sync, StdError);
    }
}
