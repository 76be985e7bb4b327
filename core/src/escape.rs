// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Path escaping utils.

use std::str::FromStr;

use http::uri::{PathAndQuery, Scheme};
use http::Uri;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::Result;

/// Encoded comma, the sequence that triggers re-escaping of a raw path.
pub const ENCODED_COMMA: &str = "%2C";

/// Escape every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
const STRICT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Same as [`STRICT_ENCODE_SET`] but keeps `/`.
const STRICT_PATH_ENCODE_SET: &AsciiSet = &STRICT_ENCODE_SET.remove(b'/');

/// Escape the path in strict mode.
///
/// Every byte outside the unreserved set is percent-encoded, `%` included,
/// so an already encoded `%2C` turns into `%252C`. `/` is kept unless
/// `encode_sep` is set.
pub fn escape_path(path: &str, encode_sep: bool) -> String {
    let set = if encode_sep {
        STRICT_ENCODE_SET
    } else {
        STRICT_PATH_ENCODE_SET
    };

    utf8_percent_encode(path, set).to_string()
}

/// Force the uri scheme to https and re-escape the path if it carries [`ENCODED_COMMA`].
///
/// The query is kept verbatim. Applying this function to its own output
/// returns the same uri.
pub fn normalize_uri(uri: &Uri) -> Result<Uri> {
    let mut parts = uri.clone().into_parts();
    parts.scheme = Some(Scheme::HTTPS);

    if let Some(paq) = parts.path_and_query.as_ref() {
        if paq.path().contains(ENCODED_COMMA) {
            let mut s = escape_path(paq.path(), false);
            if let Some(query) = paq.query() {
                s.push('?');
                s.push_str(query);
            }
            parts.path_and_query = Some(PathAndQuery::from_str(&s)?);
        }
    }

    Ok(Uri::from_parts(parts)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("/foo/bar", false, "/foo/bar"; "plain path")]
    #[test_case("/%2Cfoo", false, "/%252Cfoo"; "encoded comma")]
    #[test_case("/a b/c,d", false, "/a%20b/c%2Cd"; "space and comma")]
    #[test_case("/a-b.c_d~e", false, "/a-b.c_d~e"; "unreserved")]
    #[test_case("/foo/bar", true, "%2Ffoo%2Fbar"; "encode separator")]
    #[test_case("/你好", false, "/%E4%BD%A0%E5%A5%BD"; "utf8")]
    fn test_escape_path(input: &str, encode_sep: bool, expected: &str) {
        assert_eq!(escape_path(input, encode_sep), expected);
    }

    #[test_case("http://example.com/%2Cfoo", "https://example.com/%252Cfoo"; "escape comma")]
    #[test_case("http://example.com/foo?a=%2C", "https://example.com/foo?a=%2C"; "query untouched")]
    #[test_case("https://example.com/a%2Cb?x=1", "https://example.com/a%252Cb?x=1"; "path with query")]
    #[test_case("http://example.com:9000/foo%20bar", "https://example.com:9000/foo%20bar"; "no comma")]
    fn test_normalize_uri(input: &str, expected: &str) {
        let uri: Uri = input.parse().unwrap();
        assert_eq!(normalize_uri(&uri).unwrap().to_string(), expected);
    }

    #[test]
    fn test_normalize_uri_is_idempotent() {
        for input in [
            "http://example.com/%2Cfoo",
            "http://example.com/%2C%2C/x?y=%2C",
            "https://example.com/plain",
        ] {
            let uri: Uri = input.parse().unwrap();
            let once = normalize_uri(&uri).unwrap();
            let twice = normalize_uri(&once).unwrap();
            assert_eq!(once, twice, "normalize twice must equal once: {input}");
        }
    }

    #[test]
    fn test_normalize_uri_without_authority() {
        let uri: Uri = "/%2Cfoo".parse().unwrap();
        let err = normalize_uri(&uri).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    }
}
