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

use std::io::{Read, Seek, SeekFrom};

use http::HeaderMap;
use klevusign_core::Result;
use log::debug;

use crate::constants::*;

/// Construct the canonical message that gets signed.
///
/// ## Format
///
/// ```text
/// METHOD + "\n" +
/// Path + "\n" +
/// ("?" + Query | "") + "\n" +
/// "X-KLEVU-TIMESTAMP=" + Timestamp + "\n" +
/// "X-KLEVU-APIKEY=" + ApiKey + "\n" +
/// "X-KLEVU-AUTH-ALGO=" + AuthAlgo + "\n" +
/// "Content-Type=" + ContentType + "\n" +
/// Body
/// ```
///
/// The path loses trailing `/` and spaces. The body is appended as raw bytes,
/// read from its start, and the stream is rewound to position 0 afterwards.
pub fn canonical_string<B>(parts: &http::request::Parts, body: &mut B) -> Result<Vec<u8>>
where
    B: Read + Seek + ?Sized,
{
    let mut s = Vec::new();
    push_line(&mut s, parts.method.as_str().to_uppercase().as_bytes());
    push_line(
        &mut s,
        parts.uri.path().trim_end_matches(['/', ' ']).as_bytes(),
    );
    match parts.uri.query().filter(|q| !q.is_empty()) {
        Some(query) => push_line(&mut s, format!("?{}", query.trim()).as_bytes()),
        None => s.push(b'\n'),
    }
    for name in [X_KLEVU_TIMESTAMP, X_KLEVU_APIKEY, X_KLEVU_AUTH_ALGO, CONTENT_TYPE] {
        s.extend_from_slice(name.as_bytes());
        s.push(b'=');
        push_line(&mut s, &header_line(&parts.headers, name));
    }
    s.extend_from_slice(&read_body(body)?);

    debug!("canonical string: {}", String::from_utf8_lossy(&s));
    Ok(s)
}

fn push_line(s: &mut Vec<u8>, line: &[u8]) {
    s.extend_from_slice(line);
    s.push(b'\n');
}

/// All values of a header joined by `", "`, or empty if the header is absent.
fn header_line(headers: &HeaderMap, name: &str) -> Vec<u8> {
    headers
        .get_all(name)
        .iter()
        .map(|v| v.as_bytes())
        .collect::<Vec<_>>()
        .join(&b", "[..])
}

fn read_body<B>(body: &mut B) -> Result<Vec<u8>>
where
    B: Read + Seek + ?Sized,
{
    body.seek(SeekFrom::Start(0))?;
    let mut content = Vec::new();
    let read = body.read_to_end(&mut content);
    body.seek(SeekFrom::Start(0))?;
    read?;

    Ok(content)
}
