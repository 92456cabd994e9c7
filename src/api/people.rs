/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::errors::FlickrError;
use crate::api::macros::signed_get;
use crate::api::{Client, ContentType, PhotoList, PrivacyFilter, RequestBuilder, SafetyLevel};
use serde::Deserialize;

/// Optional filters for [`get_photos`]. Unset fields are not sent.
///
/// Dates are either unix timestamps or MySQL datetimes.
#[derive(Debug, Clone, Default)]
pub struct GetPhotosOptions {
    pub safe_search: Option<SafetyLevel>,
    pub min_upload_date: Option<String>,
    pub max_upload_date: Option<String>,
    pub min_taken_date: Option<String>,
    pub max_taken_date: Option<String>,
    pub content_type: Option<ContentType>,
    pub privacy_filter: Option<PrivacyFilter>,
    /// Comma separated list of extra fields, e.g. `url_o,tags`
    pub extras: Option<String>,
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

impl GetPhotosOptions {
    fn fill(&self, req: RequestBuilder) -> RequestBuilder {
        req.opt_param("safe_search", self.safe_search.map(SafetyLevel::param_value))
            .opt_param("min_upload_date", self.min_upload_date.as_deref())
            .opt_param("max_upload_date", self.max_upload_date.as_deref())
            .opt_param("min_taken_date", self.min_taken_date.as_deref())
            .opt_param("max_taken_date", self.max_taken_date.as_deref())
            .opt_param("content_type", self.content_type.map(ContentType::param_value))
            .opt_param("privacy_filter", self.privacy_filter.map(PrivacyFilter::param_value))
            .opt_param("extras", self.extras.as_deref())
            .opt_param("per_page", self.per_page.map(|v| v.to_string()))
            .opt_param("page", self.page.map(|v| v.to_string()))
    }
}

/// Returns photos from the given user's photostream.
///
/// Only public photos are returned unless the caller has permission to see the others.
/// Use `me` as `user_id` for the caller's own photostream.
pub async fn get_photos(
    client: &Client,
    user_id: &str,
    opts: &GetPhotosOptions,
) -> Result<PhotoList, FlickrError> {
    let req = opts.fill(
        client
            .rest_request()
            .method("flickr.people.getPhotos")
            .param("user_id", user_id),
    );
    Ok(signed_get!(client, true, req, PhotosResponse)?.photos)
}

#[derive(Deserialize, Debug)]
struct PhotosResponse {
    photos: PhotoList,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_options_are_not_sent() {
        let req = GetPhotosOptions::default()
            .fill(RequestBuilder::new("https://api.flickr.com/services/rest"))
            .build();
        assert!(req.params().is_empty());
    }

    #[test]
    fn options_are_sent_under_their_own_keys() {
        let opts = GetPhotosOptions {
            safe_search: Some(SafetyLevel::Moderate),
            min_upload_date: Some("1000".into()),
            max_upload_date: Some("2000".into()),
            min_taken_date: Some("2010-01-01 00:00:00".into()),
            max_taken_date: Some("2011-01-01 00:00:00".into()),
            content_type: Some(ContentType::PhotosOnly),
            privacy_filter: Some(PrivacyFilter::Private),
            extras: Some("url_o,tags".into()),
            per_page: Some(50),
            page: Some(3),
        };
        let req = opts
            .fill(RequestBuilder::new("https://api.flickr.com/services/rest"))
            .build();
        let params = req.params();
        assert_eq!(params["safe_search"], "2");
        assert_eq!(params["min_upload_date"], "1000");
        assert_eq!(params["max_upload_date"], "2000");
        assert_eq!(params["min_taken_date"], "2010-01-01 00:00:00");
        assert_eq!(params["max_taken_date"], "2011-01-01 00:00:00");
        assert_eq!(params["content_type"], "1");
        assert_eq!(params["privacy_filter"], "5");
        assert_eq!(params["extras"], "url_o,tags");
        assert_eq!(params["per_page"], "50");
        assert_eq!(params["page"], "3");
    }
}
