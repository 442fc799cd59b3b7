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

use std::io::{Read, Seek};

use klevusign_core::hash::base64_encode;
use klevusign_core::time::DateTime;
use klevusign_core::{Error, Result, Validate};
use log::debug;

use crate::algorithm::derive_identifier;
use crate::canonical::canonical_string;
use crate::constants::*;
use crate::validate::{AccountCredentialsValidator, RequestHeadersValidator};
use crate::{AccountCredentials, AuthAlgorithm, Config};

/// BearerTokenProvider computes the bearer token for a klevu request.
///
/// The token is `base64(HMAC(canonical_string, rest_auth_key))`, where the
/// HMAC hash comes from the `X-KLEVU-AUTH-ALGO` header. Credentials and
/// headers are validated first; nothing is hashed if either is invalid.
///
/// The provider holds no per-request state and can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct BearerTokenProvider {
    credentials_validator: AccountCredentialsValidator,
    headers_validator: RequestHeadersValidator,
}

impl BearerTokenProvider {
    /// Create a provider with the default validation rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider whose header rules come from config.
    pub fn from_config(config: &Config) -> Self {
        Self {
            credentials_validator: AccountCredentialsValidator::new(),
            headers_validator: RequestHeadersValidator::from_config(config),
        }
    }

    /// Specify the time request timestamps are compared against.
    ///
    /// # Note
    ///
    /// We should always take current time to validate requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.headers_validator = self.headers_validator.with_now(time);
        self
    }

    /// Compute the bearer token for a request.
    ///
    /// The body is read in full and left at position 0.
    pub fn get_for_request<B>(
        &self,
        credentials: &AccountCredentials,
        parts: &http::request::Parts,
        body: &mut B,
    ) -> Result<String>
    where
        B: Read + Seek + ?Sized,
    {
        self.credentials_validator.validate(credentials)?;
        self.headers_validator.validate(&parts.headers)?;

        // Both headers are known to hold one distinct string after validation.
        let api_key = parts
            .headers
            .get(X_KLEVU_APIKEY)
            .map(|v| v.to_str())
            .transpose()?
            .unwrap_or_default();
        if api_key != credentials.js_api_key() {
            return Err(Error::data_invalid(format!(
                "JS API Key {} in account credentials does not match {X_KLEVU_APIKEY} header value {api_key}",
                credentials.js_api_key()
            )));
        }

        let auth_algo = parts
            .headers
            .get(X_KLEVU_AUTH_ALGO)
            .map(|v| v.to_str())
            .transpose()?
            .unwrap_or_default();
        let identifier = derive_identifier(auth_algo);
        let algorithm = AuthAlgorithm::from_identifier(&identifier).ok_or_else(|| {
            Error::data_invalid(format!("Auth Algorithm {identifier} is not supported"))
        })?;

        let canonical = canonical_string(parts, body)?;
        let digest = algorithm.hmac(credentials.rest_auth_key().as_bytes(), &canonical);

        debug!("computed bearer token with {algorithm}");
        Ok(base64_encode(&digest))
    }
}
