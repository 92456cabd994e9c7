/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Request signing.
//!
//! Flickr accepts two signing schemes:
//!
//! - OAuth 1.0a HMAC-SHA1 for calls made on behalf of a user
//! - The legacy MD5 `api_sig` for calls that only need the application key
//!
//! Both operate on an [`ApiParams`] map and write the signature back into it.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use std::collections::BTreeMap;

type HmacSha1 = Hmac<Sha1>;

/// Request parameters. Keys are kept sorted byte-wise which is the order both
/// signing schemes expect.
pub type ApiParams = BTreeMap<String, String>;

/// Parameter holding the OAuth signature
pub const OAUTH_SIGNATURE_KEY: &str = "oauth_signature";

/// Parameter holding the legacy API signature
pub const API_SIGNATURE_KEY: &str = "api_sig";

// None of these need percent-encoding
const NONCE_ALPHABET: &[u8] = b"123456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ";
const NONCE_LEN: usize = 8;

/// Generates a fresh 8 character nonce for an OAuth request
pub fn generate_nonce() -> String {
    (0..NONCE_LEN)
        .map(|_| NONCE_ALPHABET[rand::random_range(0..NONCE_ALPHABET.len())] as char)
        .collect()
}

/// Current Unix time in seconds, as sent in `oauth_timestamp`
pub fn timestamp() -> String {
    chrono::Utc::now().timestamp().to_string()
}

/// RFC 3986 percent-encoding. Only ALPHA, DIGIT and `-._~` are left as is.
pub fn percent_encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Serializes the parameters as `key=value` pairs joined with `&`, skipping `exclude`.
///
/// Both sides of each pair are percent-encoded, so spaces come out as `%20`.
/// Flickr rejects `+` encoded spaces in the signing base string.
pub fn normalized_query(params: &ApiParams, exclude: &str) -> String {
    params
        .iter()
        .filter(|(k, _)| k.as_str() != exclude)
        .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Builds the OAuth signature base string `VERB&enc(url)&enc(query)`.
pub fn signing_base_string(verb: &str, url: &str, params: &ApiParams) -> String {
    format!(
        "{}&{}&{}",
        verb,
        percent_encode(url),
        percent_encode(&normalized_query(params, OAUTH_SIGNATURE_KEY))
    )
}

/// HMAC-SHA1 of `base_string` keyed with `enc(consumer_secret)&enc(token_secret)`, base64 encoded.
pub fn oauth_signature(base_string: &str, consumer_secret: &str, token_secret: &str) -> String {
    let key = format!(
        "{}&{}",
        percent_encode(consumer_secret),
        percent_encode(token_secret)
    );
    // Keys longer than the SHA-1 block are hashed and shorter ones padded, so
    // Hmac never reports InvalidLength here
    let mut mac = HmacSha1::new_from_slice(key.as_bytes()).expect("HMAC accepts any key length");
    mac.update(base_string.as_bytes());
    STANDARD.encode(mac.finalize().into_bytes())
}

/// Computes the OAuth signature of the request and stores it under `oauth_signature`.
///
/// Any signature already present is ignored, so signing twice yields the same value.
pub fn sign_oauth(
    verb: &str,
    url: &str,
    params: &mut ApiParams,
    consumer_secret: &str,
    token_secret: &str,
) {
    params.remove(OAUTH_SIGNATURE_KEY);
    let base_string = signing_base_string(verb, url, params);
    let signature = oauth_signature(&base_string, consumer_secret, token_secret);
    params.insert(OAUTH_SIGNATURE_KEY.into(), signature);
}

/// Legacy signature: `md5(secret + k1 + v1 + k2 + v2 ...)` over the sorted keys, lowercase hex.
pub fn api_signature(secret: &str, params: &ApiParams) -> String {
    let mut base = String::from(secret);
    for (k, v) in params.iter().filter(|(k, _)| k.as_str() != API_SIGNATURE_KEY) {
        base.push_str(k);
        base.push_str(v);
    }
    format!("{:x}", md5::compute(base.as_bytes()))
}

/// Computes the legacy signature and stores it under `api_sig`.
pub fn sign_api(secret: &str, params: &mut ApiParams) {
    params.remove(API_SIGNATURE_KEY);
    let signature = api_signature(secret, params);
    params.insert(API_SIGNATURE_KEY.into(), signature);
}

#[cfg(test)]
mod tests {
    use super::*;

    // Sample keys published at http://www.wackylabs.net/2011/12/oauth-and-flickr-part-2/
    const SAMPLE_URL: &str = "http://www.flickr.com/services/oauth/request_token";
    const SAMPLE_SECRET: &str = "1a3c208e172d3edc";

    fn sample_params() -> ApiParams {
        [
            ("oauth_nonce", "C2F26CD5C075BA9050AD8EE90644CF29"),
            ("oauth_timestamp", "1316657628"),
            ("oauth_consumer_key", "768fe946d252b119746fda82e1599980"),
            ("oauth_signature_method", "HMAC-SHA1"),
            ("oauth_version", "1.0"),
            ("oauth_callback", "http://www.wackylabs.net/oauth/test"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn base_string_matches_reference() {
        let expected = "GET&http%3A%2F%2Fwww.flickr.com%2Fservices%2Foauth%2Frequest_token&\
            oauth_callback%3Dhttp%253A%252F%252Fwww.wackylabs.net%252F\
            oauth%252Ftest%26oauth_consumer_key%3D768fe946d252b119746fda82e1599980%26\
            oauth_nonce%3DC2F26CD5C075BA9050AD8EE90644CF29%26\
            oauth_signature_method%3DHMAC-SHA1%26oauth_timestamp%3D1316657628%26\
            oauth_version%3D1.0";
        assert_eq!(signing_base_string("GET", SAMPLE_URL, &sample_params()), expected);
    }

    #[test]
    fn oauth_signature_matches_reference() {
        let mut params = sample_params();
        sign_oauth("GET", SAMPLE_URL, &mut params, SAMPLE_SECRET, "token12345secret");
        assert_eq!(params[OAUTH_SIGNATURE_KEY], "dXyfrCetFSTpzD3djSrkFhj0MIQ=");

        // Re-signing must not feed the previous signature into the base string
        sign_oauth("GET", SAMPLE_URL, &mut params, SAMPLE_SECRET, "");
        assert_eq!(params[OAUTH_SIGNATURE_KEY], "0fhNGlzpFNAsTme/hDfUb5HPB5U=");
    }

    #[test]
    fn oauth_signature_accepts_any_key_length() {
        let long_secret = "s".repeat(200);
        let long = oauth_signature("GET&a&b", &long_secret, &long_secret);
        let empty = oauth_signature("GET&a&b", "", "");
        assert_eq!(long.len(), 28);
        assert_eq!(empty.len(), 28);
        assert_ne!(long, empty);
        assert_eq!(long, oauth_signature("GET&a&b", &long_secret, &long_secret));
    }

    #[test]
    fn oauth_signing_is_idempotent() {
        let mut params = sample_params();
        sign_oauth("GET", SAMPLE_URL, &mut params, SAMPLE_SECRET, "abc");
        let first = params[OAUTH_SIGNATURE_KEY].clone();
        sign_oauth("GET", SAMPLE_URL, &mut params, SAMPLE_SECRET, "abc");
        assert_eq!(params[OAUTH_SIGNATURE_KEY], first);

        let base = signing_base_string("GET", SAMPLE_URL, &params);
        assert_eq!(oauth_signature(&base, SAMPLE_SECRET, "abc"), first);
    }

    #[test]
    fn spaces_are_encoded_as_percent_20() {
        let mut params = ApiParams::new();
        params.insert("title".into(), "foo bar+baz".into());
        assert_eq!(normalized_query(&params, OAUTH_SIGNATURE_KEY), "title=foo%20bar%2Bbaz");
        let base = signing_base_string("POST", "https://api.flickr.com/services/rest", &params);
        assert_eq!(
            base,
            "POST&https%3A%2F%2Fapi.flickr.com%2Fservices%2Frest&title%3Dfoo%2520bar%252Bbaz"
        );
    }

    #[test]
    fn api_signature_matches_reference() {
        let mut params = ApiParams::new();
        params.insert("foo".into(), "1".into());
        params.insert("bar".into(), "2".into());
        params.insert("baz".into(), "3".into());
        params.insert("api_key".into(), "1234567890".into());
        sign_api("SECRET", &mut params);
        assert_eq!(params[API_SIGNATURE_KEY], "0a55ae496d1db08f39deb5d894ae3849");
    }

    #[test]
    fn api_signature_ignores_insertion_order_and_previous_signature() {
        let mut a = ApiParams::new();
        a.insert("baz".into(), "3".into());
        a.insert("api_key".into(), "1234567890".into());
        a.insert("foo".into(), "1".into());
        a.insert("bar".into(), "2".into());
        a.insert(API_SIGNATURE_KEY.into(), "stale".into());

        let mut b = ApiParams::new();
        b.insert("bar".into(), "2".into());
        b.insert("foo".into(), "1".into());
        b.insert("api_key".into(), "1234567890".into());
        b.insert("baz".into(), "3".into());

        assert_eq!(api_signature("SECRET", &a), api_signature("SECRET", &b));
        assert_eq!(api_signature("SECRET", &b), "0a55ae496d1db08f39deb5d894ae3849");
    }

    #[test]
    fn nonce_is_eight_escape_free_chars() {
        for _ in 0..100 {
            let nonce = generate_nonce();
            assert_eq!(nonce.len(), 8);
            assert!(nonce.bytes().all(|b| NONCE_ALPHABET.contains(&b)));
            assert_eq!(percent_encode(&nonce), nonce);
        }
    }

    #[test]
    fn timestamp_is_unix_seconds() {
        let ts: i64 = timestamp().parse().unwrap();
        assert!(ts > 1_600_000_000);
    }
}
