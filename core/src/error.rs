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

/// The error type for klevusign operations.
///
/// Validation errors keep every message collected by the validator that
/// raised them, in the order they were found.
#[derive(Error, Debug)]
#[error("{kind}: {}", .messages.join("; "))]
pub struct Error {
    kind: ErrorKind,
    messages: Vec<String>,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input is structurally the wrong kind of value.
    ///
    /// Always carries exactly one message.
    TypeInvalid,

    /// Input has the right shape but fails a semantic rule.
    DataInvalid,

    /// No usable credential could be found
    CredentialInvalid,

    /// Configuration error (missing fields, invalid values)
    ConfigInvalid,

    /// Unexpected errors (I/O, encoding, etc.)
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            messages: vec![message.into()],
            source: None,
        }
    }

    /// Create a new error carrying several messages.
    pub fn with_messages(kind: ErrorKind, messages: Vec<String>) -> Self {
        Self {
            kind,
            messages,
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

    /// Get all messages carried by this error.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Consume the error and return its messages.
    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }

    /// Check if this error was raised by a validator.
    pub fn is_validation_error(&self) -> bool {
        matches!(self.kind, ErrorKind::TypeInvalid | ErrorKind::DataInvalid)
    }

    /// Check if this is a credential error
    pub fn is_credential_error(&self) -> bool {
        self.kind == ErrorKind::CredentialInvalid
    }
}

// Convenience constructors
impl Error {
    /// Create a type invalid error
    pub fn type_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TypeInvalid, message)
    }

    /// Create a data invalid error
    pub fn data_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DataInvalid, message)
    }

    /// Create a data invalid error from every collected message.
    pub fn data_invalid_all(messages: Vec<String>) -> Self {
        Self::with_messages(ErrorKind::DataInvalid, messages)
    }

    /// Create a credential invalid error
    pub fn credential_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CredentialInvalid, message)
    }

    /// Create a config invalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::TypeInvalid => write!(f, "invalid type"),
            ErrorKind::DataInvalid => write!(f, "invalid data"),
            ErrorKind::CredentialInvalid => write!(f, "invalid credentials"),
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
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

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Self::data_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::data_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::ToStrError> for Error {
    fn from(err: http::header::ToStrError) -> Self {
        Self::type_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
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

    #[test]
    fn test_display_joins_messages() {
        let err = Error::data_invalid_all(vec![
            "first problem".to_string(),
            "second problem".to_string(),
        ]);

        assert_eq!(
            err.to_string(),
            "invalid data: first problem; second problem"
        );
        assert_eq!(err.messages().len(), 2);
    }

    #[test]
    fn test_validation_kinds() {
        assert!(Error::type_invalid("x").is_validation_error());
        assert!(Error::data_invalid("x").is_validation_error());
        assert!(!Error::unexpected("x").is_validation_error());
        assert!(Error::credential_invalid("x").is_credential_error());
    }
}
