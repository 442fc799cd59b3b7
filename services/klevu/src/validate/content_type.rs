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

use crate::constants::CONTENT_TYPE_JSON;

/// ContentTypeValidator checks `Content-Type` against an exact allow-list.
#[derive(Debug, Clone)]
pub struct ContentTypeValidator {
    allowed: Vec<String>,
}

impl Default for ContentTypeValidator {
    fn default() -> Self {
        Self::new(vec![CONTENT_TYPE_JSON.to_string()])
    }
}

impl ContentTypeValidator {
    /// Create a validator accepting only `allowed`.
    pub fn new(allowed: Vec<String>) -> Self {
        Self { allowed }
    }

    fn check(&self, value: &str) -> Result<()> {
        if self.allowed.iter().any(|v| v == value) {
            return Ok(());
        }

        Err(Error::data_invalid(format!(
            "Content-Type header value {value} is not supported. Supported values: {}",
            self.allowed.join(", ")
        )))
    }
}

impl Validate<HeaderValueSet> for ContentTypeValidator {
    fn validate(&self, value: &HeaderValueSet) -> Result<()> {
        validate_single_or_list(value, "Content-Type", |v| self.check(v))
    }
}
