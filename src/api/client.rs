/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::errors::FlickrError;
use crate::api::{ApiClient, Creds, Endpoints, NoPayload, RequestBuilder};
use serde::Deserialize;
use std::sync::Arc;

/// Handle to the Flickr API.
///
/// Cheap to clone. Every call builds and signs its own request so clones may be
/// used from several tasks at once.
///
/// ```rust,no_run
/// use flickr::api::{Client, Creds};
///
/// # async fn run() -> Result<(), flickr::api::FlickrError> {
/// let client = Client::new(Creds::from_tokens(
///     "api_key",
///     "api_secret",
///     Some("oauth_token"),
///     Some("oauth_token_secret"),
/// ));
/// let user = client.login().await?;
/// println!("Logged in as {}", user.username);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    api_client: Arc<ApiClient>,
}

impl Client {
    pub fn new(creds: Creds) -> Self {
        Self::from_api_client(ApiClient::new(creds))
    }

    pub fn with_endpoints(creds: Creds, endpoints: Endpoints) -> Self {
        Self::from_api_client(ApiClient::with_endpoints(creds, endpoints))
    }

    pub fn from_api_client(api_client: ApiClient) -> Self {
        Self {
            api_client: Arc::new(api_client),
        }
    }

    /// New client acting on behalf of the user owning the given token
    pub fn with_token(&self, token: &str, token_secret: &str) -> Self {
        Self::from_api_client(
            self.api_client
                .with_creds(self.creds().with_token(token, token_secret)),
        )
    }

    /// Lower level interface for sending raw requests
    pub fn api(&self) -> &ApiClient {
        &self.api_client
    }

    pub fn creds(&self) -> &Creds {
        self.api_client.creds()
    }

    pub fn endpoints(&self) -> &Endpoints {
        self.api_client.endpoints()
    }

    /// Starts a request to the REST endpoint
    pub fn rest_request(&self) -> RequestBuilder {
        RequestBuilder::new(&self.endpoints().rest)
    }

    /// Checks the caller is logged in and returns their identity.
    ///
    /// This method requires authentication with 'read' permission.
    pub async fn login(&self) -> Result<LoginUser, FlickrError> {
        let req = self
            .rest_request()
            .method("flickr.test.login")
            .oauth_sign(self.creds());
        Ok(self.api().get::<LoginResponse>(&req).await?.into_payload()?.user)
    }

    /// Noop method, useful to validate the user credentials.
    ///
    /// This method requires authentication with 'read' permission.
    pub async fn null(&self) -> Result<(), FlickrError> {
        let req = self
            .rest_request()
            .method("flickr.test.null")
            .oauth_sign(self.creds());
        self.api().get::<NoPayload>(&req).await?.into_result()?;
        Ok(())
    }

    /// Echoes the parameters back. Does not require authentication.
    pub async fn echo(&self, params: &[(&str, &str)]) -> Result<Echo, FlickrError> {
        let req = params
            .iter()
            .fold(self.rest_request(), |req, (k, v)| req.param(*k, *v))
            .method("flickr.test.echo")
            .api_sign(self.creds());
        self.api().get::<Echo>(&req).await?.into_payload()
    }
}

/// User returned by `flickr.test.login`
#[derive(Deserialize, Debug, Clone)]
pub struct LoginUser {
    /// Flickr ID
    #[serde(rename = "@id")]
    pub id: String,

    #[serde(rename = "username")]
    pub username: String,
}

/// Parameters echoed back by `flickr.test.echo`
#[derive(Deserialize, Debug, Clone)]
pub struct Echo {
    #[serde(default)]
    pub method: String,

    #[serde(default)]
    pub api_key: String,

    #[serde(default)]
    pub format: String,
}

// Expected response from a flickr.test.login request
#[derive(Deserialize, Debug)]
struct LoginResponse {
    user: LoginUser,
}
