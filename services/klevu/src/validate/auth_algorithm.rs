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

use klevusign_core::validate::{validate_single_or_list, HeaderValueSet};
use klevusign_core::{Error, Result, Validate};

use crate::algorithm::derive_identifier;
use crate::AuthAlgorithm;

/// AuthAlgorithmValidator checks `X-KLEVU-AUTH-ALGO` against the supported algorithms.
#[derive(Debug, Clone)]
pub struct AuthAlgorithmValidator {
    supported: Vec<AuthAlgorithm>,
}

impl Default for AuthAlgorithmValidator {
    fn default() -> Self {
        Self::new(AuthAlgorithm::ALL.to_vec())
    }
}

impl AuthAlgorithmValidator {
    /// Create a validator accepting only `supported`.
    pub fn new(supported: Vec<AuthAlgorithm>) -> Self {
        Self { supported }
    }

    fn check(&self, value: &str) -> Result<()> {
        let identifier = derive_identifier(value);
        if self.supported.iter().any(|v| v.identifier() == identifier) {
            return Ok(());
        }

        Err(Error::data_invalid(format!(
            "Auth Algorithm header value {value} is not supported. Supported values: {}",
            self.supported
                .iter()
                .map(AuthAlgorithm::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        )))
    }
}

impl Validate<HeaderValueSet> for AuthAlgorithmValidator {
    fn validate(&self, value: &HeaderValueSet) -> Result<()> {
        validate_single_or_list(value, "Auth Algorithm", |v| self.check(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("HmacSHA384", true; "prefixed sha384")]
    #[test_case("HmacSHA256", true; "prefixed sha256")]
    #[test_case("sha512", true; "bare identifier")]
    #[test_case("HmacMD5", false; "md5")]
    #[test_case("hmacSHA384", false; "lower case prefix")]
    fn test_default_supported(input: &'static str, valid: bool) {
        let result = AuthAlgorithmValidator::default()
            .validate(&HeaderValueSet::from(HeaderValue::from_static(input)));
        assert_eq!(result.is_ok(), valid);
    }

    #[test]
    fn test_restricted_supported() {
        let v = AuthAlgorithmValidator::new(vec![AuthAlgorithm::HmacSha384]);
        let err = v
            .validate(&HeaderValueSet::from(HeaderValue::from_static("HmacSHA256")))
            .expect_err("must fail");

        assert_eq!(
            err.messages(),
            ["Auth Algorithm header value HmacSHA256 is not supported. Supported values: HmacSHA384"]
        );
    }
}
