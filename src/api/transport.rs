/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::errors::FlickrError;
use crate::api::{HttpVerb, Request, Response};
use log::debug;
use num_enum::TryFromPrimitive;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::Form;
use serde::de::DeserializeOwned;

/// Root of the Flickr REST API
pub const API_ENDPOINT: &str = "https://api.flickr.com/services/rest";
pub const UPLOAD_ENDPOINT: &str = "https://up.flickr.com/services/upload/";
pub const AUTHORIZE_URL: &str = "https://www.flickr.com/services/oauth/authorize";
pub const REQUEST_TOKEN_URL: &str = "https://www.flickr.com/services/oauth/request_token";
pub const ACCESS_TOKEN_URL: &str = "https://www.flickr.com/services/oauth/access_token";

/// Directly communicates with the API.
///
/// Sends prepared [`Request`]s and decodes the bodies into [`Response`] envelopes.
/// Failing envelopes are returned as is; use [`Response::into_result`] to turn them
/// into errors.
#[derive(Clone)]
pub struct ApiClient {
    creds: Creds,
    endpoints: Endpoints,
    https_client: reqwest::Client,
    upload_client: reqwest::Client,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(Creds::default())
    }
}

impl ApiClient {
    /// Creates a new API client talking to the Flickr production endpoints
    pub fn new(creds: Creds) -> Self {
        Self::with_endpoints(creds, Endpoints::default())
    }

    pub fn with_endpoints(creds: Creds, endpoints: Endpoints) -> Self {
        // Uploads stream their body with chunked encoding. Flickr answers 411 to
        // those over HTTP/2 so uploads go through a HTTP/1.1 only client.
        let upload_client = reqwest::Client::builder()
            .http1_only()
            .build()
            .unwrap_or_default();
        Self::with_http_clients(creds, endpoints, reqwest::Client::new(), upload_client)
    }

    /// Uses a caller configured HTTP client (timeouts, proxies, ...) for every call,
    /// uploads included. Configure it with `http1_only()` when uploading to Flickr.
    pub fn with_http_client(creds: Creds, endpoints: Endpoints, https_client: reqwest::Client) -> Self {
        Self::with_http_clients(creds, endpoints, https_client.clone(), https_client)
    }

    /// Uses caller configured HTTP clients, `upload_client` being used for uploads only
    pub fn with_http_clients(
        creds: Creds,
        endpoints: Endpoints,
        https_client: reqwest::Client,
        upload_client: reqwest::Client,
    ) -> Self {
        Self {
            creds,
            endpoints,
            https_client,
            upload_client,
        }
    }

    /// Same endpoints and HTTP clients, different credentials
    pub fn with_creds(&self, creds: Creds) -> Self {
        Self {
            creds,
            ..self.clone()
        }
    }

    pub fn creds(&self) -> &Creds {
        &self.creds
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Sends the request with the verb it was signed for.
    ///
    /// `Ok` only means a body was received: check [`Response::has_errors`] or call
    /// [`Response::into_result`] before using the payload.
    pub async fn send<T: DeserializeOwned>(&self, req: &Request) -> Result<Response<T>, FlickrError> {
        match req.verb() {
            HttpVerb::Get => self.get(req).await,
            HttpVerb::Post => self.post(req).await,
        }
    }

    /// Performs a get request, parameters are passed in the query string.
    ///
    /// A failing envelope is still returned as `Ok`, see [`ApiClient::send`].
    pub async fn get<T: DeserializeOwned>(&self, req: &Request) -> Result<Response<T>, FlickrError> {
        debug!("GET {} ({} params)", req.endpoint(), req.params().len());
        self.dispatch(self.https_client.get(req.url()?)).await
    }

    /// Performs a post request, each parameter becomes a multipart form field.
    ///
    /// A failing envelope is still returned as `Ok`, see [`ApiClient::send`].
    pub async fn post<T: DeserializeOwned>(&self, req: &Request) -> Result<Response<T>, FlickrError> {
        let form = req
            .params()
            .iter()
            .fold(Form::new(), |form, (k, v)| form.text(k.clone(), v.clone()));
        self.post_form(req.endpoint(), form).await
    }

    /// Posts a multipart form
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        form: Form,
    ) -> Result<Response<T>, FlickrError> {
        debug!("POST {} (multipart {})", endpoint, form.boundary());
        self.dispatch(self.https_client.post(endpoint).multipart(form))
            .await
    }

    /// Posts a pre-built body with the given content type.
    ///
    /// Lowest level POST, for bodies the caller encodes itself.
    pub async fn post_body<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: impl Into<reqwest::Body>,
        content_type: &str,
    ) -> Result<Response<T>, FlickrError> {
        debug!("POST {} ({})", endpoint, content_type);
        self.dispatch(
            self.https_client
                .post(endpoint)
                .header(CONTENT_TYPE, content_type)
                .body(body),
        )
        .await
    }

    pub(crate) async fn upload_form<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        form: Form,
    ) -> Result<Response<T>, FlickrError> {
        debug!("POST {} (streamed upload {})", endpoint, form.boundary());
        self.dispatch(self.upload_client.post(endpoint).multipart(form))
            .await
    }

    /// Performs the request and returns the raw body text.
    ///
    /// The OAuth token endpoints answer with form encoded strings rather than XML.
    pub async fn get_text(&self, req: &Request) -> Result<String, FlickrError> {
        debug!("GET {}", req.endpoint());
        Ok(self
            .https_client
            .get(req.url()?)
            .send()
            .await?
            .text()
            .await?)
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<Response<T>, FlickrError> {
        let resp = req.send().await?;
        debug!("Response status {}", resp.status());
        let body = resp.text().await?;
        Ok(Response::decode(&body))
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("creds", &self.creds)
            .field("endpoints", &self.endpoints)
            .finish()
    }
}

/// Well-known error codes shared by every Flickr API method
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(i32)]
pub enum ApiErrorCode {
    /// Body was not a Flickr response at all
    Malformed = -1,
    SslRequired = 95,
    InvalidSignature = 96,
    MissingSignature = 97,
    LoginFailed = 98,
    InsufficientPermissions = 99,
    InvalidApiKey = 100,
    ServiceUnavailable = 105,
    WriteOperationFailed = 106,
    FormatNotFound = 111,
    MethodNotFound = 112,
    InvalidSoapEnvelope = 114,
    InvalidXmlRpcCall = 115,
    BadUrlFound = 116,
}

/// Application and user credentials
#[derive(Default, Clone)]
pub struct Creds {
    consumer_key: String,
    consumer_secret: String,
    token: Option<String>,
    token_secret: Option<String>,
}

impl Creds {
    /// Application credentials only, enough for the OAuth exchange and public calls
    pub fn new(consumer_key: &str, consumer_secret: &str) -> Self {
        Self::from_tokens(consumer_key, consumer_secret, None, None)
    }

    pub fn from_tokens(
        consumer_key: &str,
        consumer_secret: &str,
        token: Option<&str>,
        token_secret: Option<&str>,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            token: token.map(Into::into),
            token_secret: token_secret.map(Into::into),
        }
    }

    /// Same application credentials with the given user token
    pub fn with_token(&self, token: &str, token_secret: &str) -> Self {
        Self::from_tokens(
            &self.consumer_key,
            &self.consumer_secret,
            Some(token),
            Some(token_secret),
        )
    }

    pub fn consumer_key(&self) -> &str {
        &self.consumer_key
    }

    pub fn consumer_secret(&self) -> &str {
        &self.consumer_secret
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn token_secret(&self) -> Option<&str> {
        self.token_secret.as_deref()
    }
}

impl std::fmt::Debug for Creds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Creds")
            .field("consumer_key", &"xxx")
            .field("consumer_secret", &"xxx")
            .field("token", &self.token.as_ref().map(|_| "xxx"))
            .field("token_secret", &self.token_secret.as_ref().map(|_| "xxx"))
            .finish()
    }
}

/// URLs the client talks to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub rest: String,
    pub upload: String,
    pub request_token: String,
    pub authorize: String,
    pub access_token: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            rest: API_ENDPOINT.into(),
            upload: UPLOAD_ENDPOINT.into(),
            request_token: REQUEST_TOKEN_URL.into(),
            authorize: AUTHORIZE_URL.into(),
            access_token: ACCESS_TOKEN_URL.into(),
        }
    }
}

impl Endpoints {
    /// Every endpoint under a single origin, keeping Flickr's paths. Handy for proxies and mocks.
    pub fn with_origin(origin: &str) -> Self {
        let origin = origin.trim_end_matches('/');
        Self {
            rest: format!("{}/services/rest", origin),
            upload: format!("{}/services/upload/", origin),
            request_token: format!("{}/services/oauth/request_token", origin),
            authorize: format!("{}/services/oauth/authorize", origin),
            access_token: format!("{}/services/oauth/access_token", origin),
        }
    }
}
