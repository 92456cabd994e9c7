/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Photo uploads.
//!
//! The file is streamed to Flickr in chunks while the request is sent, so large
//! videos are never held in memory.

use crate::api::errors::FlickrError;
use crate::api::{Client, HttpVerb, RequestBuilder};
use async_stream::try_stream;
use bytes::{Bytes, BytesMut};
use futures::Stream;
use log::debug;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::path::Path;
use tokio::io::{AsyncRead, AsyncReadExt};

// Size of the chunks read from the upload source
const CHUNK_SIZE: usize = 64 * 1024;

/// Optional upload settings.
///
/// Passing `None` to the upload calls leaves every setting to the user's Flickr preferences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadParams {
    pub title: String,
    pub description: String,
    /// Sent space separated
    pub tags: Vec<String>,
    pub is_public: bool,
    pub is_family: bool,
    pub is_friend: bool,
    /// 1 photo, 2 screenshot, 3 other
    pub content_type: i32,
    /// 1 shown in global search results, 2 hidden
    pub hidden: i32,
    /// 1 safe, 2 moderate, 3 restricted
    pub safety_level: i32,
}

impl Default for UploadParams {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            tags: Vec::new(),
            is_public: false,
            is_family: false,
            is_friend: false,
            content_type: 1,
            hidden: 2,
            safety_level: 1,
        }
    }
}

impl UploadParams {
    // Out of range values are dropped so Flickr applies the user's default
    fn fill(&self, req: RequestBuilder) -> RequestBuilder {
        let flag = |b: bool| if b { "1" } else { "0" };
        let in_range = |v: i32, max: i32| (1..=max).contains(&v).then(|| v.to_string());
        req.opt_param("title", Some(self.title.as_str()).filter(|s| !s.is_empty()))
            .opt_param(
                "description",
                Some(self.description.as_str()).filter(|s| !s.is_empty()),
            )
            .opt_param("tags", (!self.tags.is_empty()).then(|| self.tags.join(" ")))
            .param("is_public", flag(self.is_public))
            .param("is_friend", flag(self.is_friend))
            .param("is_family", flag(self.is_family))
            .opt_param("content_type", in_range(self.content_type, 3))
            .opt_param("hidden", in_range(self.hidden, 2))
            .opt_param("safety_level", in_range(self.safety_level, 3))
    }
}

impl Client {
    /// Uploads the file at `path` and returns the new photo id.
    ///
    /// This method requires authentication with 'write' permission.
    pub async fn upload_file(
        &self,
        path: impl AsRef<Path>,
        params: Option<&UploadParams>,
    ) -> Result<String, FlickrError> {
        let path = path.as_ref();
        let file = tokio::fs::File::open(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.upload_reader(file, &name, params).await
    }

    /// Uploads the content of `reader` under the file name `name` and returns the new photo id.
    ///
    /// This method requires authentication with 'write' permission.
    pub async fn upload_reader<R>(
        &self,
        reader: R,
        name: &str,
        params: Option<&UploadParams>,
    ) -> Result<String, FlickrError>
    where
        R: AsyncRead + Send + Unpin + 'static,
    {
        let mut req = RequestBuilder::new(&self.endpoints().upload).verb(HttpVerb::Post);
        if let Some(params) = params {
            req = params.fill(req);
        }
        let req = req.oauth_sign(self.creds());

        let photo = Part::stream(reqwest::Body::wrap_stream(chunks(reader)))
            .file_name(name.to_string())
            .mime_str("application/octet-stream")?;
        let form = req
            .params()
            .iter()
            .fold(Form::new(), |form, (k, v)| form.text(k.clone(), v.clone()))
            .part("photo", photo);

        debug!("Uploading {}", name);
        let resp = self
            .api()
            .upload_form::<UploadResponse>(req.endpoint(), form)
            .await?;
        Ok(resp.into_payload()?.photo_id)
    }
}

// Pulls the reader in chunks as the body is sent
fn chunks<R>(mut reader: R) -> impl Stream<Item = Result<Bytes, std::io::Error>> + Send + 'static
where
    R: AsyncRead + Send + Unpin + 'static,
{
    try_stream! {
        loop {
            let mut buf = BytesMut::with_capacity(CHUNK_SIZE);
            if reader.read_buf(&mut buf).await? == 0 {
                break;
            }
            yield buf.freeze();
        }
    }
}

// Expected response for an upload
#[derive(Deserialize, Debug)]
struct UploadResponse {
    #[serde(rename = "photoid")]
    photo_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiParams, Response};
    use futures::TryStreamExt;

    fn filled(params: &UploadParams) -> ApiParams {
        params
            .fill(RequestBuilder::new("https://up.flickr.com/services/upload/"))
            .build()
            .params()
            .clone()
    }

    #[test]
    fn defaults() {
        let params = UploadParams::default();
        assert_eq!(params.content_type, 1);
        assert_eq!(params.hidden, 2);
        assert_eq!(params.safety_level, 1);

        let args = filled(&params);
        assert!(!args.contains_key("title"));
        assert!(!args.contains_key("description"));
        assert!(!args.contains_key("tags"));
        assert_eq!(args["is_public"], "0");
        assert_eq!(args["is_friend"], "0");
        assert_eq!(args["is_family"], "0");
        assert_eq!(args["content_type"], "1");
        assert_eq!(args["hidden"], "2");
        assert_eq!(args["safety_level"], "1");
    }

    #[test]
    fn fills_every_field() {
        let params = UploadParams {
            title: "Foo".into(),
            description: "Foo is better than bar".into(),
            tags: vec!["foo".into(), "bar".into(), "baz".into()],
            is_public: true,
            is_family: true,
            is_friend: false,
            content_type: 3,
            hidden: 1,
            safety_level: 3,
        };
        let args = filled(&params);
        assert_eq!(args["title"], "Foo");
        assert_eq!(args["description"], "Foo is better than bar");
        assert_eq!(args["tags"], "foo bar baz");
        assert_eq!(args["is_public"], "1");
        assert_eq!(args["is_family"], "1");
        assert_eq!(args["is_friend"], "0");
        assert_eq!(args["content_type"], "3");
        assert_eq!(args["hidden"], "1");
        assert_eq!(args["safety_level"], "3");
    }

    #[test]
    fn out_of_range_values_are_omitted() {
        let params = UploadParams {
            content_type: 4,
            hidden: 0,
            safety_level: -1,
            ..Default::default()
        };
        let args = filled(&params);
        assert!(!args.contains_key("content_type"));
        assert!(!args.contains_key("hidden"));
        assert!(!args.contains_key("safety_level"));
        assert_eq!(args["is_public"], "0");
    }

    #[test]
    fn decode_upload_response() {
        let body = r#"<?xml version="1.0" encoding="utf-8" ?>
<rsp stat="ok">
  <photoid>1234</photoid>
</rsp>"#;
        let resp = Response::<UploadResponse>::decode(body);
        assert_eq!(resp.into_payload().unwrap().photo_id, "1234");
    }

    #[tokio::test]
    async fn chunks_yield_the_whole_content() {
        let data: Vec<u8> = (0..CHUNK_SIZE * 2 + 10).map(|i| (i % 251) as u8).collect();
        let collected: Vec<Bytes> = chunks(std::io::Cursor::new(data.clone()))
            .try_collect()
            .await
            .unwrap();
        assert!(collected.len() >= 3);
        assert_eq!(collected.concat(), data);
    }
}
