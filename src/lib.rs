/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Flickr
//!
//! This library was created for working with the Flickr REST API.
//!
//! For further details on the API refer to the [Flickr API Docs](https://www.flickr.com/services/api/)
//!
//! ## Features
//!
//! - OAuth1 request signing and the legacy `api_sig` signing
//! - OAuth1 token exchange (request token, authorization URL, access token)
//! - Test methods (login, null, echo)
//! - Photosets
//!     - List, get info and photos
//!     - Create, edit, reorder and delete
//! - Groups
//!     - Get info and check upload throttle
//!     - Add photos to a pool
//! - People photostreams
//! - Photo delete
//! - Streamed photo uploads
//! - Lower level interface for handling the raw communication
//!
//! *If you want to use this library for more that is currently implemented, the
//! [`api::ApiClient`] and [`api::RequestBuilder`] are a way to make request/responses
//! in a more direct way*
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! flickr = "0.3.0"
//! ```
//!
//! ## Usage
//!
//! **You will need to acquire an API key/secret from Flickr prior to using the API**
//!
//! ```rust,no_run
//! use flickr::api::{Client, Creds, FlickrError, Perms, Photoset, UploadParams};
//!
//! async fn upload_to_set(
//!     api_key: &str,
//!     api_secret: &str,
//!     verifier: impl Fn(&str) -> String,
//! ) -> Result<(), FlickrError> {
//!     let client = Client::new(Creds::new(api_key, api_secret));
//!
//!     // Have the user grant access to the application
//!     let request_token = client.get_request_token(None).await?;
//!     let url = client.authorize_url(&request_token, Perms::Write)?;
//!     let access = client
//!         .get_access_token(&request_token, &verifier(&url))
//!         .await?;
//!
//!     // Act on behalf of the user from now on
//!     let client = client.with_token(&access.oauth_token, &access.oauth_token_secret);
//!
//!     let params = UploadParams {
//!         title: "Holidays".into(),
//!         tags: vec!["beach".into(), "sea".into()],
//!         ..Default::default()
//!     };
//!     let photo_id = client.upload_file("holidays.jpg", Some(&params)).await?;
//!     Photoset::create(&client, "Holidays", "Summer 2025", &photo_id).await?;
//!     Ok(())
//! }
//! ```
//!
pub mod api;
