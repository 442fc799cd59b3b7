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

use http::HeaderMap;
use klevusign_core::time::DateTime;
use klevusign_core::validate::HeaderValueSet;
use klevusign_core::{Error, Result, Validate};
use log::debug;

use super::{ApiKeyValidator, AuthAlgorithmValidator, ContentTypeValidator, TimestampValidator};
use crate::constants::*;
use crate::Config;

/// RequestHeadersValidator runs every signing header validator against a request.
///
/// All four headers are always checked. Failures are reported together, each
/// message prefixed by its header name:
///
/// ```text
/// X-KLEVU-TIMESTAMP: Timestamp header value is required
/// ```
///
/// Headers other than the four signing headers are ignored.
#[derive(Debug, Clone, Default)]
pub struct RequestHeadersValidator {
    timestamp: TimestampValidator,
    api_key: ApiKeyValidator,
    auth_algorithm: AuthAlgorithmValidator,
    content_type: ContentTypeValidator,
}

impl RequestHeadersValidator {
    /// Create a validator with the default rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the validators from config.
    pub fn from_config(config: &Config) -> Self {
        Self {
            timestamp: TimestampValidator::new()
                .with_future_tolerance(config.future_tolerance)
                .with_past_tolerance(config.past_tolerance),
            api_key: ApiKeyValidator::new(),
            auth_algorithm: AuthAlgorithmValidator::new(config.supported_algorithms.clone()),
            content_type: ContentTypeValidator::new(config.allowed_content_types.clone()),
        }
    }

    /// Specify the time timestamps are compared against.
    ///
    /// Only use this function for testing.
    pub fn with_now(mut self, now: DateTime) -> Self {
        self.timestamp = self.timestamp.with_now(now);
        self
    }

    fn registry(&self) -> [(&'static str, &dyn Validate<HeaderValueSet>); 4] {
        [
            (X_KLEVU_TIMESTAMP, &self.timestamp),
            (X_KLEVU_APIKEY, &self.api_key),
            (X_KLEVU_AUTH_ALGO, &self.auth_algorithm),
            (CONTENT_TYPE, &self.content_type),
        ]
    }
}

impl Validate<HeaderMap> for RequestHeadersValidator {
    fn validate(&self, headers: &HeaderMap) -> Result<()> {
        let mut errors = Vec::new();
        for (name, validator) in self.registry() {
            let value = HeaderValueSet::from_headers(headers, name);
            if let Err(err) = validator.validate(&value) {
                errors.extend(
                    err.into_messages()
                        .into_iter()
                        .map(|msg| format!("{name}: {msg}")),
                );
            }
        }

        if errors.is_empty() {
            return Ok(());
        }

        debug!("request headers are invalid: {errors:?}");
        Err(Error::data_invalid_all(errors))
    }
}
