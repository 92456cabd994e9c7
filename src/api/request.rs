/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::errors::FlickrError;
use crate::api::signer::{self, ApiParams};
use crate::api::{Creds, HttpVerb};
use url::Url;

/// A fully prepared request: endpoint, verb and (signed) parameters.
///
/// Requests are built fresh for every call with a [`RequestBuilder`] and are
/// not modified afterwards, so a [`crate::api::Client`] can be shared between tasks.
#[derive(Debug, Clone)]
pub struct Request {
    endpoint: String,
    verb: HttpVerb,
    params: ApiParams,
}

impl Request {
    pub fn builder(endpoint: &str) -> RequestBuilder {
        RequestBuilder::new(endpoint)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn verb(&self) -> HttpVerb {
        self.verb
    }

    pub fn params(&self) -> &ApiParams {
        &self.params
    }

    /// Endpoint with the parameters appended as query string
    pub fn url(&self) -> Result<Url, FlickrError> {
        if self.params.is_empty() {
            return Ok(Url::parse(&self.endpoint)?);
        }
        Ok(Url::parse_with_params(&self.endpoint, &self.params)?)
    }

    /// The OAuth base string this request is (or would be) signed with
    pub fn signing_base_string(&self) -> String {
        signer::signing_base_string(self.verb.into(), &self.endpoint, &self.params)
    }
}

/// Collects the pieces of a [`Request`] and signs it.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    endpoint: String,
    verb: HttpVerb,
    params: ApiParams,
}

impl RequestBuilder {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.into(),
            verb: HttpVerb::Get,
            params: ApiParams::new(),
        }
    }

    pub fn verb(mut self, verb: HttpVerb) -> Self {
        self.verb = verb;
        self
    }

    /// Sets the Flickr method to call, e.g. `flickr.photos.delete`
    pub fn method(self, name: &str) -> Self {
        self.param("method", name)
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Sets the parameter only when a value is given
    pub fn opt_param(self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.param(key, v),
            None => self,
        }
    }

    // Parameters mandatory in every OAuth request. Values already set are kept.
    fn oauth_defaults(mut self, creds: &Creds) -> Self {
        self.params
            .entry("oauth_version".into())
            .or_insert_with(|| "1.0".into());
        self.params
            .entry("oauth_signature_method".into())
            .or_insert_with(|| "HMAC-SHA1".into());
        self.params
            .entry("oauth_nonce".into())
            .or_insert_with(signer::generate_nonce);
        self.params
            .entry("oauth_timestamp".into())
            .or_insert_with(signer::timestamp);
        self.param("oauth_consumer_key", creds.consumer_key())
    }

    fn sign(mut self, consumer_secret: &str, token_secret: &str) -> Request {
        signer::sign_oauth(
            self.verb.into(),
            &self.endpoint,
            &mut self.params,
            consumer_secret,
            token_secret,
        );
        self.build()
    }

    /// Signs with OAuth using an explicit token secret.
    ///
    /// Used during the token exchange when the user token is not known yet.
    pub fn sign_with(self, creds: &Creds, token_secret: &str) -> Request {
        self.oauth_defaults(creds)
            .sign(creds.consumer_secret(), token_secret)
    }

    /// Signs with OAuth on behalf of the user held in `creds`
    pub fn oauth_sign(self, creds: &Creds) -> Request {
        self.oauth_defaults(creds)
            .opt_param("oauth_token", creds.token())
            .param("api_key", creds.consumer_key())
            .sign(creds.consumer_secret(), creds.token_secret().unwrap_or_default())
    }

    /// Signs with the legacy `api_sig` scheme, for calls that need no user context
    pub fn api_sign(mut self, creds: &Creds) -> Request {
        self.params.insert("api_key".into(), creds.consumer_key().into());
        signer::sign_api(creds.consumer_secret(), &mut self.params);
        self.build()
    }

    /// Builds the request without signing it
    pub fn build(self) -> Request {
        Request {
            endpoint: self.endpoint,
            verb: self.verb,
            params: self.params,
        }
    }
}
