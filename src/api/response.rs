/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::errors::FlickrError;
use crate::api::ApiErrorCode;
use log::warn;
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Value of the `stat` attribute on success
pub const STATUS_OK: &str = "ok";

/// Value of the `stat` attribute on failure
pub const STATUS_FAIL: &str = "fail";

/// Error code assigned to bodies which are not a Flickr envelope
pub const MALFORMED_RESPONSE_CODE: i32 = -1;

/// Error details carried by a failing response (`<err code="..." msg="..."/>`)
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct ApiError {
    #[serde(default, rename = "@code")]
    pub code: i32,

    #[serde(default, rename = "@msg")]
    pub message: String,
}

/// Payload for calls that return nothing but the status
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct NoPayload {}

/// Envelope for calls with no payload
pub type BasicResponse = Response<NoPayload>;

/// Envelope wrapping every XML response returned by the Flickr API.
///
/// ```xml
/// <rsp stat="fail">
///   <err code="99" msg="Insufficient permissions." />
/// </rsp>
/// ```
///
/// The payload type is decoded from the children of the root element, so a
/// payload struct maps the elements found under `<rsp>`.
#[derive(Debug, Clone)]
pub struct Response<T> {
    /// The `stat` attribute, verbatim
    pub status: String,

    /// Error details, zeroed on success
    pub error: ApiError,

    /// The decoded payload. Always present on success.
    pub payload: Option<T>,

    /// Raw XML found inside the root element
    pub extra: String,

    malformed: bool,
}

impl<T> Default for Response<T> {
    fn default() -> Self {
        Self {
            status: String::new(),
            error: ApiError::default(),
            payload: None,
            extra: String::new(),
            malformed: false,
        }
    }
}

// Only the part of the envelope common to all responses
#[derive(Deserialize, Debug)]
struct EnvelopeHead {
    #[serde(rename = "@stat")]
    status: String,

    #[serde(default, rename = "err")]
    error: Option<ApiError>,
}

impl<T: DeserializeOwned> Response<T> {
    /// Decodes a response body.
    ///
    /// This never fails. A body that is not a Flickr envelope, or a successful
    /// envelope whose content does not match `T`, is turned into a failing
    /// response with code [`MALFORMED_RESPONSE_CODE`] and the raw body as message.
    /// Flickr answers with plain text for OAuth level failures.
    pub fn decode(body: &str) -> Self {
        match Self::try_decode(body) {
            Ok(resp) => resp,
            Err(err) => {
                warn!("Response is not a Flickr envelope: {}", err);
                Self::malformed(body)
            }
        }
    }

    fn try_decode(body: &str) -> Result<Self, FlickrError> {
        let head: EnvelopeHead = quick_xml::de::from_str(body)?;
        let payload = if head.status == STATUS_OK {
            Some(quick_xml::de::from_str::<T>(body)?)
        } else {
            // Failures usually lack the payload elements
            quick_xml::de::from_str::<T>(body).ok()
        };
        Ok(Self {
            status: head.status,
            error: head.error.unwrap_or_default(),
            payload,
            extra: inner_xml(body)?,
            malformed: false,
        })
    }
}

impl<T> Response<T> {
    /// Builds the failing response used for bodies that could not be decoded
    pub fn malformed(body: &str) -> Self {
        let mut resp = Self::default();
        resp.set_error_status(true);
        resp.set_error_code(MALFORMED_RESPONSE_CODE);
        resp.set_error_msg(body);
        resp.malformed = true;
        resp
    }

    /// Whether the response reports a failure
    pub fn has_errors(&self) -> bool {
        self.status != STATUS_OK
    }

    /// Whether the body could not be decoded at all
    pub fn is_malformed(&self) -> bool {
        self.malformed
    }

    /// Returns the error code (0 if no errors)
    pub fn error_code(&self) -> i32 {
        self.error.code
    }

    /// Returns the error message (empty if no errors)
    pub fn error_msg(&self) -> &str {
        &self.error.message
    }

    /// Maps the error code to a well-known Flickr error
    pub fn known_error(&self) -> Result<ApiErrorCode, FlickrError> {
        Ok(ApiErrorCode::try_from(self.error.code)?)
    }

    pub fn set_error_status(&mut self, has_errors: bool) {
        self.status = if has_errors { STATUS_FAIL } else { STATUS_OK }.into();
    }

    pub fn set_error_code(&mut self, code: i32) {
        self.error.code = code;
    }

    pub fn set_error_msg(&mut self, msg: &str) {
        self.error.message = msg.into();
    }

    /// Turns a failing response into the matching error
    pub fn into_result(self) -> Result<Self, FlickrError> {
        if !self.has_errors() {
            return Ok(self);
        }
        if self.malformed {
            Err(FlickrError::ApiResponseMalformed(self.error.message))
        } else {
            Err(FlickrError::ApiResponse(self.error.code, self.error.message))
        }
    }

    /// Returns the payload of a successful response
    pub fn into_payload(self) -> Result<T, FlickrError> {
        self.into_result()?
            .payload
            .ok_or(FlickrError::ResponseMissing())
    }
}

// Raw content between the root start and end tags
fn inner_xml(body: &str) -> Result<String, FlickrError> {
    let mut reader = Reader::from_str(body);
    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                let end = start.to_end().into_owned();
                return Ok(reader.read_text(end.name())?.into_owned());
            }
            Event::Empty(_) | Event::Eof => return Ok(String::new()),
            _ => {}
        }
    }
}
