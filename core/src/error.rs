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

use std::fmt;
use thiserror::Error;

/// The error type for signclient operations
#[derive(Error, Debug)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No signing capability was provided when building a client.
    MissingSigner,

    /// No service name was provided when building a client.
    MissingService,

    /// No region name was provided when building a client.
    MissingRegion,

    /// The request body could not be read before signing.
    BodyRead,

    /// The signing capability failed to sign the request.
    SignFailed,

    /// The underlying transport failed to execute the request.
    Transport,

    /// Request cannot be handled (malformed uri, header value, etc.)
    RequestInvalid,

    /// Unexpected errors
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Check if this error was raised while building a client.
    ///
    /// Configuration errors mean the setup must be fixed; retrying the
    /// same call will never succeed.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::MissingSigner | ErrorKind::MissingService | ErrorKind::MissingRegion
        )
    }
}

// Convenience constructors
impl Error {
    /// Create a missing signer error
    pub fn missing_signer() -> Self {
        Self::new(
            ErrorKind::MissingSigner,
            "no signer was provided, cannot create client",
        )
    }

    /// Create a missing service error
    pub fn missing_service() -> Self {
        Self::new(
            ErrorKind::MissingService,
            "no service name was provided, cannot create client",
        )
    }

    /// Create a missing region error
    pub fn missing_region() -> Self {
        Self::new(
            ErrorKind::MissingRegion,
            "no region was provided, cannot create client",
        )
    }

    /// Create a body read error
    pub fn body_read(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BodyRead, message)
    }

    /// Create a sign failed error
    pub fn sign_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SignFailed, message)
    }

    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Transport, message)
    }

    /// Create a request invalid error
    pub fn request_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestInvalid, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::MissingSigner => write!(f, "missing signer"),
            ErrorKind::MissingService => write!(f, "missing service"),
            ErrorKind::MissingRegion => write!(f, "missing region"),
            ErrorKind::BodyRead => write!(f, "body read failed"),
            ErrorKind::SignFailed => write!(f, "signing failed"),
            ErrorKind::Transport => write!(f, "transport failed"),
            ErrorKind::RequestInvalid => write!(f, "invalid request"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

// Common From implementations
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(err)
    }
}

impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderName> for Error {
    fn from(err: http::header::InvalidHeaderName) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::ToStrError> for Error {
    fn from(err: http::header::ToStrError) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::uri::InvalidUri> for Error {
    fn from(err: http::uri::InvalidUri) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::uri::InvalidUriParts> for Error {
    fn from(err: http::uri::InvalidUriParts) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_config_errors() {
        assert!(Error::missing_signer().is_config_error());
        assert!(Error::missing_service().is_config_error());
        assert!(Error::missing_region().is_config_error());
        assert!(!Error::sign_failed("boom").is_config_error());
        assert!(!Error::body_read("boom").is_config_error());
        assert!(!Error::transport("boom").is_config_error());
    }

    #[test]
    fn test_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stream closed");
        let err = Error::body_read("failed to read request body").with_source(io);

        assert_eq!(err.kind(), ErrorKind::BodyRead);
        assert_eq!(err.to_string(), "failed to read request body");
        assert_eq!(
            err.source().map(|v| v.to_string()),
            Some("stream closed".to_string())
        );
    }

    #[test]
    fn test_from_invalid_uri() {
        let err: Error = "http://exa mple.com/".parse::<http::Uri>().unwrap_err().into();
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    }
}
