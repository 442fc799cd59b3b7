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

use klevusign_core::{Error, Result, Validate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::AccountCredentials;

static PUBLIC_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^klevu-[0-9]{1,20}$").expect("public key pattern must be valid"));

static SECRET_KEY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9+/=]{10,127}$").expect("secret key pattern must be valid")
});

/// Check the format of a public key, returning every problem found.
pub(crate) fn public_key_errors(value: &str) -> Vec<String> {
    if value.trim().is_empty() {
        return vec!["JS API Key is required".to_string()];
    }
    if !PUBLIC_KEY.is_match(value) {
        return vec![format!(
            "JS API Key {value} is not valid: expected klevu- followed by 1 to 20 digits"
        )];
    }

    vec![]
}

/// The secret never appears in messages.
fn secret_key_errors(value: &str) -> Vec<String> {
    if value.trim().is_empty() {
        return vec!["REST AUTH Key is required".to_string()];
    }
    if !SECRET_KEY.is_match(value) {
        return vec![
            "REST AUTH Key is not valid: expected 10 to 127 characters from A-Z, a-z, 0-9, +, / and ="
                .to_string(),
        ];
    }

    vec![]
}

/// AccountCredentialsValidator checks both keys of [`AccountCredentials`].
///
/// Both keys are always checked so the error lists every problem at once.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountCredentialsValidator;

impl AccountCredentialsValidator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self
    }
}

impl Validate<AccountCredentials> for AccountCredentialsValidator {
    fn validate(&self, value: &AccountCredentials) -> Result<()> {
        let mut errors = public_key_errors(value.js_api_key());
        errors.extend(secret_key_errors(value.rest_auth_key()));

        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::data_invalid_all(errors))
        }
    }
}
