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

use blockstorage_gax::error::Error;
use blockstorage_gax::error::rpc::Status;

#[cfg(test)]
mod test {
    use super::*;
    use std::error::Error as _;

    #[derive(Debug)]
    struct WaitError {
        cause: Error,
    }

    impl std::fmt::Display for WaitError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "wait error")
        }
    }

    impl std::error::Error for WaitError {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.cause)
        }
    }

    #[test]
    fn composite_downcast() {
        let cause = Error::service_with_http_metadata(
            Status::default().set_code("NotAuthorizedOrNotFound"),
            Some(404),
            None,
        );
        let root = Error::composite(WaitError { cause });
        assert!(root.is_composite(), "{root:?}");
        assert!(!root.is_not_found(), "{root:?}");

        let inner = root.as_inner::<WaitError>();
        assert!(
            inner.is_some_and(|e| e.cause.is_not_found()),
            "{root:?}"
        );
        let source = root
            .source()
            .and_then(|e| e.source())
            .and_then(|e| e.downcast_ref::<Error>());
        assert!(source.is_some_and(|e| e.is_not_found()), "{root:?}");
    }

    #[test]
    fn downcast_wrong_type() {
        let root = Error::other(WaitError {
            cause: Error::io(std::io::Error::other("broken pipe")),
        });
        assert!(root.as_inner::<std::io::Error>().is_none(), "{root:?}");
    }

    #[test]
    fn transport_metadata() {
        let mut headers = http::HeaderMap::new();
        headers.insert("opc-request-id", http::HeaderValue::from_static("req-123"));
        let error = Error::http(503, headers, bytes::Bytes::from_static(b"try again"));
        assert!(error.is_transport(), "{error:?}");
        assert!(!error.is_io(), "{error:?}");
        assert_eq!(error.http_status_code(), Some(503));
        assert_eq!(error.opc_request_id(), Some("req-123"));
        assert_eq!(
            error.http_payload(),
            Some(&bytes::Bytes::from_static(b"try again"))
        );
        assert!(error.status().is_none(), "{error:?}");
    }
}
