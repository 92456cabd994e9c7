/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! OAuth 1.0a token exchange.
//!
//! 1. [`Client::get_request_token`] asks Flickr for a temporary token
//! 2. The user visits [`Client::authorize_url`] and grants access
//! 3. [`Client::get_access_token`] trades the request token and the verifier for
//!    the access token, usable with [`Client::with_token`]

use crate::api::errors::FlickrError;
use crate::api::parsers::{parse_bool, parse_query};
use crate::api::{Client, Perms, RequestBuilder};
use log::debug;
use serde::Deserialize;
use std::collections::HashMap;

/// Temporary token obtained at the start of the exchange
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestToken {
    /// Whether the callback url matches the one configured for the application
    pub oauth_callback_confirmed: bool,
    pub oauth_token: String,
    pub oauth_token_secret: String,
}

/// Access token along with its owner's data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OAuthToken {
    pub oauth_token: String,
    pub oauth_token_secret: String,
    /// Flickr ID of the token's owner
    pub user_nsid: String,
    pub username: String,
    pub fullname: String,
}

fn take(values: &mut HashMap<String, String>, key: &str) -> String {
    values.remove(key).unwrap_or_default()
}

/// Extracts a [`RequestToken`] from the response body
pub fn parse_request_token(body: &str) -> Result<RequestToken, FlickrError> {
    let mut values = parse_query(body)?;
    if let Some(problem) = values.remove("oauth_problem").filter(|p| !p.is_empty()) {
        return Err(FlickrError::RequestToken(problem));
    }
    Ok(RequestToken {
        oauth_callback_confirmed: parse_bool(&take(&mut values, "oauth_callback_confirmed")),
        oauth_token: take(&mut values, "oauth_token"),
        oauth_token_secret: take(&mut values, "oauth_token_secret"),
    })
}

/// Extracts an [`OAuthToken`] from the response body
pub fn parse_oauth_token(body: &str) -> Result<OAuthToken, FlickrError> {
    let mut values = parse_query(body)?;
    if let Some(problem) = values.remove("oauth_problem").filter(|p| !p.is_empty()) {
        return Err(FlickrError::OAuthToken(problem));
    }
    Ok(OAuthToken {
        oauth_token: take(&mut values, "oauth_token"),
        oauth_token_secret: take(&mut values, "oauth_token_secret"),
        user_nsid: take(&mut values, "user_nsid"),
        username: take(&mut values, "username"),
        fullname: take(&mut values, "fullname"),
    })
}

impl Client {
    /// Retrieves a request token, the first step to get an access token.
    ///
    /// `callback` defaults to `oob` (out of band) when not given.
    pub async fn get_request_token(&self, callback: Option<&str>) -> Result<RequestToken, FlickrError> {
        // No token secret exists at this stage
        let req = RequestBuilder::new(&self.endpoints().request_token)
            .param("oauth_callback", callback.unwrap_or("oob"))
            .sign_with(self.creds(), "");
        let body = self.api().get_text(&req).await?;
        parse_request_token(&body)
    }

    /// URL users need to visit to grant permission to the application
    pub fn authorize_url(&self, token: &RequestToken, perms: Perms) -> Result<String, FlickrError> {
        let req = RequestBuilder::new(&self.endpoints().authorize)
            .param("oauth_token", token.oauth_token.as_str())
            .param("perms", <&str>::from(perms))
            .build();
        Ok(req.url()?.to_string())
    }

    /// Trades the request token and the verifier Flickr gave the user for an access token
    pub async fn get_access_token(
        &self,
        token: &RequestToken,
        oauth_verifier: &str,
    ) -> Result<OAuthToken, FlickrError> {
        // Signed with the request token secret
        let req = RequestBuilder::new(&self.endpoints().access_token)
            .param("oauth_verifier", oauth_verifier)
            .param("oauth_token", token.oauth_token.as_str())
            .sign_with(self.creds(), &token.oauth_token_secret);
        let body = self.api().get_text(&req).await?;
        let access = parse_oauth_token(&body)?;
        debug!("Access token granted to {}", access.user_nsid);
        Ok(access)
    }

    /// Returns the permissions and owner of an access token
    pub async fn check_token(&self, oauth_token: &str) -> Result<TokenInfo, FlickrError> {
        let req = self
            .rest_request()
            .method("flickr.auth.oauth.checkToken")
            .param("oauth_token", oauth_token)
            .api_sign(self.creds());
        Ok(self
            .api()
            .get::<CheckTokenResponse>(&req)
            .await?
            .into_payload()?
            .oauth)
    }
}

/// Result of `flickr.auth.oauth.checkToken`
#[derive(Deserialize, Debug, Clone)]
pub struct TokenInfo {
    pub token: String,
    pub perms: String,
    pub user: TokenUser,
}

#[derive(Deserialize, Debug, Clone)]
pub struct TokenUser {
    /// Flickr ID
    #[serde(rename = "@nsid")]
    pub id: String,

    #[serde(default, rename = "@username")]
    pub username: String,

    #[serde(default, rename = "@fullname")]
    pub fullname: String,
}

#[derive(Deserialize, Debug)]
struct CheckTokenResponse {
    oauth: TokenInfo,
}
