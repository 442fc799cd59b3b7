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

//! Helpers for validating header values.

use http::header::AsHeaderName;
use http::HeaderMap;
use http::HeaderValue;

use crate::{Error, Result};

/// The value(s) a single header carries in a request.
///
/// A header sent several times shows up as [`HeaderValueSet::List`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum HeaderValueSet {
    /// The header is not present.
    #[default]
    Missing,
    /// The header is present once.
    Single(HeaderValue),
    /// The header is present several times, in wire order.
    List(Vec<HeaderValue>),
}

impl HeaderValueSet {
    /// Collect every value of `name` from `headers`.
    ///
    /// Header names are matched case-insensitively.
    pub fn from_headers<K: AsHeaderName>(headers: &HeaderMap, name: K) -> Self {
        let mut values: Vec<HeaderValue> = headers.get_all(name).iter().cloned().collect();
        match values.len() {
            0 => HeaderValueSet::Missing,
            1 => HeaderValueSet::Single(values.remove(0)),
            _ => HeaderValueSet::List(values),
        }
    }
}

impl From<HeaderValue> for HeaderValueSet {
    fn from(value: HeaderValue) -> Self {
        HeaderValueSet::Single(value)
    }
}

impl From<Vec<HeaderValue>> for HeaderValueSet {
    fn from(values: Vec<HeaderValue>) -> Self {
        HeaderValueSet::List(values)
    }
}

/// Validate a header that may be absent, sent once, or sent several times.
///
/// Lists are reduced to their sole distinct value before `check` runs:
///
/// - a list whose values are all blank fails as required,
/// - a list with more than one distinct value fails as conflicting.
///
/// A single value must be a visible string and non-blank after trimming,
/// then `check` decides the rest. `field` is the human readable label used in
/// messages, e.g. `Timestamp`.
pub fn validate_single_or_list<F>(value: &HeaderValueSet, field: &str, check: F) -> Result<()>
where
    F: Fn(&str) -> Result<()>,
{
    match value {
        HeaderValueSet::Missing => Err(required(field)),
        HeaderValueSet::Single(v) => validate_single(v, field, &check),
        HeaderValueSet::List(values) => {
            if values.iter().all(|v| v.to_str().is_ok_and(is_blank)) {
                return Err(required(field));
            }

            let mut distinct: Vec<&HeaderValue> = Vec::with_capacity(values.len());
            for v in values {
                if !distinct.contains(&v) {
                    distinct.push(v);
                }
            }

            match distinct.as_slice() {
                [v] => validate_single(v, field, &check),
                _ => Err(Error::data_invalid(format!(
                    "{field} header contains conflicting values: {}",
                    distinct
                        .iter()
                        .map(|v| String::from_utf8_lossy(v.as_bytes()))
                        .collect::<Vec<_>>()
                        .join(", ")
                ))),
            }
        }
    }
}

fn validate_single<F>(value: &HeaderValue, field: &str, check: &F) -> Result<()>
where
    F: Fn(&str) -> Result<()>,
{
    let v = value
        .to_str()
        .map_err(|_| Error::type_invalid(format!("{field} header value must be a string")))?;
    if is_blank(v) {
        return Err(required(field));
    }

    check(v)
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn required(field: &str) -> Error {
    Error::data_invalid(format!("{field} header value is required"))
}
