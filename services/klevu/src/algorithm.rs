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

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use klevusign_core::hash::{hmac_sha256, hmac_sha384, hmac_sha512};
use klevusign_core::Error;

use crate::constants::AUTH_ALGORITHM_PREFIX;

/// HMAC algorithms accepted in the `X-KLEVU-AUTH-ALGO` header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AuthAlgorithm {
    /// `HmacSHA256`
    HmacSha256,
    /// `HmacSHA384`
    #[default]
    HmacSha384,
    /// `HmacSHA512`
    HmacSha512,
}

impl AuthAlgorithm {
    /// Every supported algorithm.
    pub const ALL: [AuthAlgorithm; 3] = [
        AuthAlgorithm::HmacSha256,
        AuthAlgorithm::HmacSha384,
        AuthAlgorithm::HmacSha512,
    ];

    /// The header value, e.g. `HmacSHA384`.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthAlgorithm::HmacSha256 => "HmacSHA256",
            AuthAlgorithm::HmacSha384 => "HmacSHA384",
            AuthAlgorithm::HmacSha512 => "HmacSHA512",
        }
    }

    /// The hash identifier, e.g. `sha384`.
    pub fn identifier(&self) -> &'static str {
        match self {
            AuthAlgorithm::HmacSha256 => "sha256",
            AuthAlgorithm::HmacSha384 => "sha384",
            AuthAlgorithm::HmacSha512 => "sha512",
        }
    }

    /// Find the algorithm for a hash identifier such as `sha384`.
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|v| v.identifier() == identifier)
    }

    /// Compute the raw HMAC digest of `content` keyed by `key`.
    pub fn hmac(&self, key: &[u8], content: &[u8]) -> Vec<u8> {
        match self {
            AuthAlgorithm::HmacSha256 => hmac_sha256(key, content),
            AuthAlgorithm::HmacSha384 => hmac_sha384(key, content),
            AuthAlgorithm::HmacSha512 => hmac_sha512(key, content),
        }
    }
}

/// Derive the hash identifier from an `X-KLEVU-AUTH-ALGO` header value.
///
/// A leading `Hmac` (case-sensitive) is stripped and the rest lower-cased:
/// `HmacSHA384` becomes `sha384`, `sha256` stays `sha256`.
pub fn derive_identifier(header_value: &str) -> String {
    header_value
        .strip_prefix(AUTH_ALGORITHM_PREFIX)
        .unwrap_or(header_value)
        .to_lowercase()
}

impl Display for AuthAlgorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthAlgorithm {
    type Err = Error;

    /// Parse a header value like `HmacSHA384`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_identifier(&derive_identifier(s)).ok_or_else(|| {
            Error::data_invalid(format!("Auth Algorithm {s} is not supported"))
        })
    }
}
