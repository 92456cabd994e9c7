/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::errors::FlickrError;
use serde::Deserialize;
use std::collections::HashMap;

// Parses strings that may be "" and sets to None
pub fn from_empty_str_to_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    if s.is_empty() { Ok(None) } else { Ok(Some(s)) }
}

// Parses numeric attributes Flickr sometimes sends empty
pub fn from_lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    Ok(s.trim().parse().unwrap_or_default())
}

// Parses "1"/"0" and "true"/"false" flags
pub fn from_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    Ok(parse_bool(&s))
}

/// Lenient boolean parsing, anything unknown is false
pub fn parse_bool(s: &str) -> bool {
    matches!(s.trim(), "1" | "t" | "T" | "true" | "TRUE" | "True")
}

/// Parses a form encoded body such as `oauth_token=abc&oauth_token_secret=def`.
///
/// The first value wins when a key is repeated. Broken percent escapes are errors.
pub fn parse_query(query: &str) -> Result<HashMap<String, String>, FlickrError> {
    let mut values = HashMap::new();
    for pair in query.trim().split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = unescape(key)?;
        let value = unescape(value)?;
        values.entry(key).or_insert(value);
    }
    Ok(values)
}

fn unescape(s: &str) -> Result<String, FlickrError> {
    let bytes = s.as_bytes();
    let mut idx = 0;
    while idx < bytes.len() {
        if bytes[idx] == b'%' {
            let valid = bytes.len() > idx + 2
                && bytes[idx + 1].is_ascii_hexdigit()
                && bytes[idx + 2].is_ascii_hexdigit();
            if !valid {
                return Err(FlickrError::QueryParse(s.into()));
            }
            idx += 3;
        } else {
            idx += 1;
        }
    }
    let plus_as_space = s.replace('+', " ");
    urlencoding::decode(&plus_as_space)
        .map(|v| v.into_owned())
        .map_err(|_| FlickrError::QueryParse(s.into()))
}
