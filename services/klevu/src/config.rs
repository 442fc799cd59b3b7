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

use std::fmt::{Debug, Formatter};
use std::time::Duration;

use klevusign_core::{utils::Redact, Context};

use crate::constants::*;
use crate::AuthAlgorithm;

/// Config carries all the configuration for klevu request signing.
#[derive(Clone)]
pub struct Config {
    /// `js_api_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`KLEVU_JS_API_KEY`]
    pub js_api_key: Option<String>,
    /// `rest_auth_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`KLEVU_REST_AUTH_KEY`]
    pub rest_auth_key: Option<String>,
    /// Algorithm stamped into `X-KLEVU-AUTH-ALGO` when the request has none.
    pub auth_algorithm: AuthAlgorithm,
    /// Algorithms accepted in `X-KLEVU-AUTH-ALGO`.
    pub supported_algorithms: Vec<AuthAlgorithm>,
    /// Values accepted in `Content-Type`.
    ///
    /// Only JSON requests can carry a bearer token; XML indexing stays on
    /// the legacy authentication.
    pub allowed_content_types: Vec<String>,
    /// How far in the future `X-KLEVU-TIMESTAMP` may be.
    pub future_tolerance: Duration,
    /// How far in the past `X-KLEVU-TIMESTAMP` may be.
    pub past_tolerance: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            js_api_key: None,
            rest_auth_key: None,
            auth_algorithm: AuthAlgorithm::default(),
            supported_algorithms: AuthAlgorithm::ALL.to_vec(),
            allowed_content_types: vec![CONTENT_TYPE_JSON.to_string()],
            future_tolerance: TIMESTAMP_FUTURE_TOLERANCE,
            past_tolerance: TIMESTAMP_PAST_TOLERANCE,
        }
    }
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set js_api_key
    pub fn with_js_api_key(mut self, js_api_key: impl Into<String>) -> Self {
        self.js_api_key = Some(js_api_key.into());
        self
    }

    /// Set rest_auth_key
    pub fn with_rest_auth_key(mut self, rest_auth_key: impl Into<String>) -> Self {
        self.rest_auth_key = Some(rest_auth_key.into());
        self
    }

    /// Set the algorithm used for newly signed requests.
    pub fn with_auth_algorithm(mut self, algorithm: AuthAlgorithm) -> Self {
        self.auth_algorithm = algorithm;
        self
    }

    /// Restrict the algorithms accepted in requests.
    pub fn with_supported_algorithms(mut self, algorithms: Vec<AuthAlgorithm>) -> Self {
        self.supported_algorithms = algorithms;
        self
    }

    /// Replace the accepted content types.
    pub fn with_allowed_content_types(mut self, content_types: Vec<String>) -> Self {
        self.allowed_content_types = content_types;
        self
    }

    /// Set the tolerated clock skew into the future.
    pub fn with_future_tolerance(mut self, tolerance: Duration) -> Self {
        self.future_tolerance = tolerance;
        self
    }

    /// Set the tolerated age of a timestamp.
    pub fn with_past_tolerance(mut self, tolerance: Duration) -> Self {
        self.past_tolerance = tolerance;
        self
    }

    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(KLEVU_JS_API_KEY) {
            self.js_api_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(KLEVU_REST_AUTH_KEY) {
            self.rest_auth_key.get_or_insert(v);
        }

        self
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("js_api_key", &self.js_api_key.as_ref().map(Redact::from))
            .field(
                "rest_auth_key",
                &self.rest_auth_key.as_ref().map(Redact::from),
            )
            .field("auth_algorithm", &self.auth_algorithm)
            .field("supported_algorithms", &self.supported_algorithms)
            .field("allowed_content_types", &self.allowed_content_types)
            .field("future_tolerance", &self.future_tolerance)
            .field("past_tolerance", &self.past_tolerance)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use klevusign_core::StaticEnv;
    use std::collections::HashMap;

    #[test]
    fn test_from_env_keeps_explicit_values() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([
                (KLEVU_JS_API_KEY.to_string(), "klevu-222".to_string()),
                (KLEVU_REST_AUTH_KEY.to_string(), "ENVSECRET123".to_string()),
            ]),
        });

        let cfg = Config::new().with_js_api_key("klevu-111").from_env(&ctx);
        assert_eq!(cfg.js_api_key.as_deref(), Some("klevu-111"));
        assert_eq!(cfg.rest_auth_key.as_deref(), Some("ENVSECRET123"));
    }

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.auth_algorithm, AuthAlgorithm::HmacSha384);
        assert_eq!(cfg.supported_algorithms.len(), 3);
        assert_eq!(cfg.allowed_content_types, vec!["application/json"]);
        assert_eq!(cfg.future_tolerance, Duration::from_secs(60));
        assert_eq!(cfg.past_tolerance, Duration::from_secs(600));
    }

    #[test]
    fn test_debug_is_redacted() {
        let cfg = Config::new().with_rest_auth_key("ABCDE1234567890");
        assert!(!format!("{cfg:?}").contains("ABCDE1234567890"));
    }
}
