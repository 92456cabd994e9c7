/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::api::ApiErrorCode;
use num_enum::TryFromPrimitiveError;
use std::io;
use thiserror::Error;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum FlickrError {
    #[error("I/O error")]
    Io(#[from] io::Error),

    #[error("Request network error")]
    Request(#[from] reqwest::Error),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),

    #[error("Deserialization error: {0}")]
    Deserialization(#[from] quick_xml::DeError),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Expected response missing")]
    ResponseMissing(),

    /// Flickr answered with a failure envelope. Holds the code and message Flickr returned.
    #[error("API Response was error: {0}, msg: {1}")]
    ApiResponse(i32, String),

    /// The body was not a Flickr envelope at all. Holds the raw body text.
    #[error("API Response is malformed: {0}")]
    ApiResponseMalformed(String),

    #[error("API Response error code is unknown")]
    ApiResponseCode(#[from] TryFromPrimitiveError<ApiErrorCode>),

    #[error("An error occurred during token request: {0}")]
    RequestToken(String),

    #[error("An error occurred while getting the OAuth token: {0}")]
    OAuthToken(String),

    #[error("Query string is malformed: {0}")]
    QueryParse(String),
}

impl FlickrError {
    /// Returns the Flickr error code when this error came from a response envelope.
    ///
    /// Malformed responses report the `-1` sentinel.
    pub fn api_code(&self) -> Option<i32> {
        match self {
            FlickrError::ApiResponse(code, _) => Some(*code),
            FlickrError::ApiResponseMalformed(_) => Some(crate::api::MALFORMED_RESPONSE_CODE),
            _ => None,
        }
    }
}
