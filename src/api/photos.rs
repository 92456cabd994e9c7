/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::errors::FlickrError;
use crate::api::macros::oauth_post_status;
use crate::api::parsers::{from_empty_str_to_none, from_flag, from_lenient_u64};
use crate::api::{Client, HttpVerb, NoPayload};
use serde::Deserialize;

/// A photo as listed by the people and photosets methods.
///
/// Most attributes are only sent when requested through `extras`.
/// See [Flickr API Docs](https://www.flickr.com/services/api/flickr.people.getPhotos.html).
#[derive(Deserialize, Debug, Clone, Default)]
pub struct Photo {
    #[serde(rename = "@id")]
    pub id: String,

    #[serde(default, rename = "@owner")]
    pub owner: String,

    #[serde(default, rename = "@secret")]
    pub secret: String,

    #[serde(default, rename = "@server")]
    pub server: String,

    #[serde(default, rename = "@farm")]
    pub farm: String,

    #[serde(default, rename = "@title")]
    pub title: String,

    #[serde(default, rename = "@ispublic", deserialize_with = "from_flag")]
    pub is_public: bool,

    #[serde(default, rename = "@isfriend", deserialize_with = "from_flag")]
    pub is_friend: bool,

    #[serde(default, rename = "@isfamily", deserialize_with = "from_flag")]
    pub is_family: bool,

    // Photoset listings only
    #[serde(default, rename = "@isprimary", deserialize_with = "from_flag")]
    pub is_primary: bool,

    #[serde(default, rename = "@license")]
    pub license: String,

    #[serde(default, rename = "@dateupload")]
    pub date_upload: String,

    #[serde(default, rename = "@datetaken")]
    pub date_taken: String,

    #[serde(default, rename = "@lastupdate")]
    pub last_update: String,

    #[serde(default, rename = "@ownername")]
    pub owner_name: String,

    #[serde(default, rename = "@iconserver")]
    pub icon_server: String,

    #[serde(default, rename = "@originalformat")]
    pub original_format: String,

    // Geo, when extras contains "geo"
    #[serde(default, rename = "@latitude")]
    pub latitude: String,

    #[serde(default, rename = "@longitude")]
    pub longitude: String,

    #[serde(default, rename = "@accuracy")]
    pub accuracy: String,

    // Space separated lists
    #[serde(default, rename = "@tags")]
    pub tags: String,

    #[serde(default, rename = "@machine_tags")]
    pub machine_tags: String,

    #[serde(default, rename = "@o_width", deserialize_with = "from_lenient_u64")]
    pub original_width: u64,

    #[serde(default, rename = "@o_height", deserialize_with = "from_lenient_u64")]
    pub original_height: u64,

    #[serde(default, rename = "@views", deserialize_with = "from_lenient_u64")]
    pub views: u64,

    #[serde(default, rename = "@media")]
    pub media: String,

    #[serde(default, rename = "@pathalias")]
    pub path_alias: String,

    #[serde(default, rename = "@url_sq", deserialize_with = "from_empty_str_to_none")]
    pub url_square: Option<String>,

    #[serde(default, rename = "@url_t", deserialize_with = "from_empty_str_to_none")]
    pub url_thumbnail: Option<String>,

    #[serde(default, rename = "@url_s", deserialize_with = "from_empty_str_to_none")]
    pub url_small: Option<String>,

    #[serde(default, rename = "@url_m", deserialize_with = "from_empty_str_to_none")]
    pub url_medium: Option<String>,

    #[serde(default, rename = "@url_z", deserialize_with = "from_empty_str_to_none")]
    pub url_medium_640: Option<String>,

    #[serde(default, rename = "@url_l", deserialize_with = "from_empty_str_to_none")]
    pub url_large: Option<String>,

    #[serde(default, rename = "@url_o", deserialize_with = "from_empty_str_to_none")]
    pub url_original: Option<String>,
}

/// A page of photos
#[derive(Deserialize, Debug, Clone, Default)]
pub struct PhotoList {
    #[serde(default, rename = "@page", deserialize_with = "from_lenient_u64")]
    pub page: u64,

    #[serde(default, rename = "@pages", deserialize_with = "from_lenient_u64")]
    pub pages: u64,

    #[serde(default, rename = "@perpage", deserialize_with = "from_lenient_u64")]
    pub per_page: u64,

    #[serde(default, rename = "@total", deserialize_with = "from_lenient_u64")]
    pub total: u64,

    #[serde(default, rename = "photo")]
    pub photos: Vec<Photo>,
}

impl Photo {
    /// Deletes a photo.
    ///
    /// This method requires authentication with 'delete' permission.
    pub async fn delete(client: &Client, photo_id: &str) -> Result<(), FlickrError> {
        oauth_post_status!(
            client,
            client
                .rest_request()
                .method("flickr.photos.delete")
                .param("photo_id", photo_id)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Response;

    #[derive(Deserialize, Debug)]
    struct PhotosResponse {
        photos: PhotoList,
    }

    #[test]
    fn decode_photo_list() {
        let body = r#"<?xml version="1.0" encoding="utf-8" ?>
<rsp stat="ok">
  <photos page="2" pages="89" perpage="10" total="881">
    <photo id="2636" owner="47058503995@N01" secret="a123456" server="2" farm="1"
      title="test_04" ispublic="1" isfriend="0" isfamily="0"
      url_o="https://live.staticflickr.com/2/2636_a123456_o.jpg" o_width="1024" o_height="" />
    <photo id="2635" owner="47058503995@N01" secret="b123456" server="2" farm="1"
      title="test_03" ispublic="0" isfriend="1" isfamily="1" />
  </photos>
</rsp>"#;
        let list = Response::<PhotosResponse>::decode(body)
            .into_payload()
            .unwrap()
            .photos;
        assert_eq!(list.page, 2);
        assert_eq!(list.total, 881);
        assert_eq!(list.per_page, 10);
        assert_eq!(list.photos.len(), 2);

        let first = &list.photos[0];
        assert_eq!(first.id, "2636");
        assert!(first.is_public);
        assert!(!first.is_friend);
        assert_eq!(first.original_width, 1024);
        assert_eq!(first.original_height, 0);
        assert_eq!(
            first.url_original.as_deref(),
            Some("https://live.staticflickr.com/2/2636_a123456_o.jpg")
        );
        assert!(first.url_small.is_none());

        let second = &list.photos[1];
        assert!(!second.is_public);
        assert!(second.is_family);
    }
}
