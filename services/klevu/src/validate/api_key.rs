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

use super::credentials::public_key_errors;

/// ApiKeyValidator checks `X-KLEVU-APIKEY` with the same rules as the public key.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiKeyValidator;

impl ApiKeyValidator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self
    }
}

impl Validate<HeaderValueSet> for ApiKeyValidator {
    fn validate(&self, value: &HeaderValueSet) -> Result<()> {
        validate_single_or_list(value, "API Key", |v| {
            let errors = public_key_errors(v);
            if errors.is_empty() {
                Ok(())
            } else {
                Err(Error::data_invalid_all(errors))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;
    use klevusign_core::ErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_api_key() {
        let v = ApiKeyValidator::new();
        assert!(v
            .validate(&HeaderValueSet::from(HeaderValue::from_static("klevu-123")))
            .is_ok());

        let err = v
            .validate(&HeaderValueSet::from(HeaderValue::from_static("klevu-abc")))
            .expect_err("must fail");
        assert_eq!(
            err.messages(),
            ["JS API Key klevu-abc is not valid: expected klevu- followed by 1 to 20 digits"]
        );
    }

    #[test]
    fn test_conflicting_values_before_format() {
        let err = ApiKeyValidator::new()
            .validate(&HeaderValueSet::List(vec![
                HeaderValue::from_static("klevu-111"),
                HeaderValue::from_static("klevu-222"),
            ]))
            .expect_err("must fail");

        assert_eq!(err.kind(), ErrorKind::DataInvalid);
        assert_eq!(
            err.messages(),
            ["API Key header contains conflicting values: klevu-111, klevu-222"]
        );
    }
}
