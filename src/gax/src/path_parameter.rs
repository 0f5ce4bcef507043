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

#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("missing required parameter {0}")]
    MissingRequiredParameter(String),
}

/// Returns a binding error for a missing parameter.
pub fn missing(name: &str) -> crate::error::Error {
    crate::error::Error::binding(Error::MissingRequiredParameter(name.to_string()))
}

/// Verifies a required parameter is present and not blank.
///
/// # Example
/// ```
/// # use blockstorage_gax::path_parameter::required;
/// assert_eq!(required("volume_id", "ocid1.volume.abc").ok(), Some("ocid1.volume.abc"));
/// assert!(required("volume_id", "  ").is_err());
/// ```
pub fn required<'a>(name: &str, value: &'a str) -> crate::Result<&'a str> {
    if value.trim().is_empty() {
        return Err(missing(name));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn missing() {
        let e = super::missing("abc123");
        assert!(e.is_binding(), "{e:?}");
        let fmt = format!("{e}");
        assert!(fmt.contains("abc123"), "{e:?}");
        let inner = e.as_inner::<super::Error>();
        assert_eq!(
            inner,
            Some(&Error::MissingRequiredParameter("abc123".to_string()))
        );
    }

    #[test_case(""; "empty")]
    #[test_case("   "; "blank")]
    #[test_case("\t\n"; "whitespace")]
    fn required_rejects(value: &str) {
        let got = required("volume_id", value);
        assert!(matches!(got, Err(ref e) if e.is_binding()), "{got:?}");
    }

    #[test]
    fn required_accepts() {
        let got = required("volume_id", "ocid1.volume.oc1..abc");
        assert!(matches!(got, Ok("ocid1.volume.oc1..abc")), "{got:?}");
    }
}
