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

use http::header::AUTHORIZATION;
use http::{HeaderName, HeaderValue};
use klevusign_core::time::{format_iso8601_millis, now, DateTime};
use klevusign_core::{Context, Error, Result, SignRequest, SigningBody};
use log::debug;

use crate::constants::*;
use crate::{AccountCredentials, AuthAlgorithm, BearerTokenProvider, Config};

/// RequestSigner that implements klevu bearer token authorization.
///
/// Signing headers the caller has not set are stamped first:
///
/// - `X-KLEVU-TIMESTAMP` with the current time
/// - `X-KLEVU-APIKEY` with the credential's JS API key
/// - `X-KLEVU-AUTH-ALGO` with the configured algorithm
/// - `Content-Type` with `application/json`
///
/// Headers already present are left untouched and validated as given. The
/// request then gets `Authorization: Bearer <token>`.
#[derive(Debug, Default)]
pub struct RequestSigner {
    provider: BearerTokenProvider,
    auth_algorithm: AuthAlgorithm,
    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a signer with the default rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a signer from config.
    pub fn from_config(config: &Config) -> Self {
        Self {
            provider: BearerTokenProvider::from_config(config),
            auth_algorithm: config.auth_algorithm,
            time: None,
        }
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.provider = self.provider.with_time(time);
        self.time = Some(time);
        self
    }

    fn stamp_headers(
        &self,
        parts: &mut http::request::Parts,
        cred: &AccountCredentials,
    ) -> Result<()> {
        let now = self.time.unwrap_or_else(now);
        let defaults = [
            (X_KLEVU_TIMESTAMP, format_iso8601_millis(now)),
            (X_KLEVU_APIKEY, cred.js_api_key().to_string()),
            (X_KLEVU_AUTH_ALGO, self.auth_algorithm.as_str().to_string()),
            (CONTENT_TYPE, CONTENT_TYPE_JSON.to_string()),
        ];

        for (name, value) in defaults {
            if parts.headers.contains_key(name) {
                continue;
            }
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| Error::unexpected(format!("invalid header name: {e}")))?;
            parts.headers.insert(name, value.parse()?);
        }

        Ok(())
    }
}

#[async_trait::async_trait]
impl SignRequest for RequestSigner {
    type Credential = AccountCredentials;

    async fn sign_request(
        &self,
        _ctx: &Context,
        parts: &mut http::request::Parts,
        body: &mut dyn SigningBody,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let k = credential.ok_or_else(|| Error::credential_invalid("missing credential"))?;

        self.stamp_headers(parts, k)?;
        let token = self.provider.get_for_request(k, parts, body)?;

        parts.headers.insert(AUTHORIZATION, {
            let mut value: HeaderValue = format!("{BEARER_SCHEME} {token}").parse()?;
            value.set_sensitive(true);

            value
        });
        debug!("signed {} {}", parts.method, parts.uri.path());

        Ok(())
    }
}
