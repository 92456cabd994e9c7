/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::errors::FlickrError;
use crate::api::macros::{oauth_post, oauth_post_status, signed_get};
use crate::api::parsers::{from_flag, from_lenient_u64};
use crate::api::{Client, HttpVerb, NoPayload, PhotoList};
use serde::Deserialize;

/// Holds information returned from the photosets API.
///
/// See [Flickr API Docs](https://www.flickr.com/services/api/flickr.photosets.getInfo.html) for more
/// details on the individual fields.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct Photoset {
    #[serde(rename = "@id")]
    pub id: String,

    #[serde(default, rename = "@owner")]
    pub owner: String,

    #[serde(default, rename = "@primary")]
    pub primary: String,

    #[serde(default, rename = "@secret")]
    pub secret: String,

    #[serde(default, rename = "@server")]
    pub server: String,

    #[serde(default, rename = "@farm")]
    pub farm: String,

    #[serde(default, rename = "@url")]
    pub url: String,

    #[serde(default, rename = "@photos", deserialize_with = "from_lenient_u64")]
    pub photos: u64,

    #[serde(default, rename = "@videos", deserialize_with = "from_lenient_u64")]
    pub videos: u64,

    #[serde(default, rename = "@needs_interstitial", deserialize_with = "from_flag")]
    pub needs_interstitial: bool,

    #[serde(default, rename = "@visibility_can_see_set", deserialize_with = "from_flag")]
    pub visibility_can_see_set: bool,

    #[serde(default, rename = "@count_views", deserialize_with = "from_lenient_u64")]
    pub count_views: u64,

    #[serde(default, rename = "@count_comments", deserialize_with = "from_lenient_u64")]
    pub count_comments: u64,

    #[serde(default, rename = "@can_comment", deserialize_with = "from_flag")]
    pub can_comment: bool,

    #[serde(default, rename = "@date_create", deserialize_with = "from_lenient_u64")]
    pub date_create: u64,

    #[serde(default, rename = "@date_update", deserialize_with = "from_lenient_u64")]
    pub date_update: u64,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,
}

/// A page of photosets
#[derive(Deserialize, Debug, Clone, Default)]
pub struct PhotosetList {
    #[serde(default, rename = "@page", deserialize_with = "from_lenient_u64")]
    pub page: u64,

    #[serde(default, rename = "@pages", deserialize_with = "from_lenient_u64")]
    pub pages: u64,

    #[serde(default, rename = "@perpage", deserialize_with = "from_lenient_u64")]
    pub per_page: u64,

    #[serde(default, rename = "@total", deserialize_with = "from_lenient_u64")]
    pub total: u64,

    #[serde(default, rename = "photoset")]
    pub items: Vec<Photoset>,
}

impl Photoset {
    /// Returns the sets belonging to `user_id`, or to the caller when not given.
    ///
    /// Private sets are only listed for authenticated calls.
    pub async fn get_list(
        client: &Client,
        authenticate: bool,
        user_id: Option<&str>,
        page: u32,
    ) -> Result<PhotosetList, FlickrError> {
        // Flickr defaults the page to 1
        let req = client
            .rest_request()
            .method("flickr.photosets.getList")
            .opt_param("user_id", user_id)
            .opt_param("page", (page > 1).then(|| page.to_string()));
        Ok(signed_get!(client, authenticate, req, PhotosetsListResponse)?.photosets)
    }

    /// Returns information about a photoset.
    ///
    /// Private sets need an authenticated call. `owner_id` is optional but speeds up the query.
    pub async fn get_info(
        client: &Client,
        authenticate: bool,
        photoset_id: &str,
        owner_id: Option<&str>,
    ) -> Result<Photoset, FlickrError> {
        let req = client
            .rest_request()
            .method("flickr.photosets.getInfo")
            .param("photoset_id", photoset_id)
            .opt_param("user_id", owner_id);
        Ok(signed_get!(client, authenticate, req, PhotosetResponse)?.photoset)
    }

    /// Returns a page of the photos in a set
    pub async fn get_photos(
        client: &Client,
        authenticate: bool,
        photoset_id: &str,
        owner_id: Option<&str>,
        page: u32,
    ) -> Result<PhotoList, FlickrError> {
        let req = client
            .rest_request()
            .method("flickr.photosets.getPhotos")
            .param("photoset_id", photoset_id)
            .opt_param("user_id", owner_id)
            .opt_param("page", (page > 1).then(|| page.to_string()));
        Ok(signed_get!(client, authenticate, req, PhotosetPhotosResponse)?.photoset)
    }

    /// Creates a photoset with the given primary photo.
    ///
    /// This method requires authentication with 'write' permission.
    pub async fn create(
        client: &Client,
        title: &str,
        description: &str,
        primary_photo_id: &str,
    ) -> Result<Photoset, FlickrError> {
        let req = client
            .rest_request()
            .method("flickr.photosets.create")
            .param("title", title)
            .param("description", description)
            .param("primary_photo_id", primary_photo_id);
        Ok(oauth_post!(client, req, PhotosetResponse)?.photoset)
    }

    /// Deletes a photoset.
    ///
    /// This method requires authentication with 'write' permission.
    pub async fn delete(client: &Client, photoset_id: &str) -> Result<(), FlickrError> {
        oauth_post_status!(
            client,
            client
                .rest_request()
                .method("flickr.photosets.delete")
                .param("photoset_id", photoset_id)
        )
    }

    /// Adds a photo to a photoset.
    ///
    /// This method requires authentication with 'write' permission.
    pub async fn add_photo(client: &Client, photoset_id: &str, photo_id: &str) -> Result<(), FlickrError> {
        oauth_post_status!(
            client,
            client
                .rest_request()
                .method("flickr.photosets.addPhoto")
                .param("photoset_id", photoset_id)
                .param("photo_id", photo_id)
        )
    }

    /// Removes a photo from a photoset.
    ///
    /// This method requires authentication with 'write' permission.
    pub async fn remove_photo(
        client: &Client,
        photoset_id: &str,
        photo_id: &str,
    ) -> Result<(), FlickrError> {
        oauth_post_status!(
            client,
            client
                .rest_request()
                .method("flickr.photosets.removePhoto")
                .param("photoset_id", photoset_id)
                .param("photo_id", photo_id)
        )
    }

    /// Removes several photos from a photoset.
    ///
    /// This method requires authentication with 'write' permission.
    pub async fn remove_photos(
        client: &Client,
        photoset_id: &str,
        photo_ids: &[&str],
    ) -> Result<(), FlickrError> {
        oauth_post_status!(
            client,
            client
                .rest_request()
                .method("flickr.photosets.removePhotos")
                .param("photoset_id", photoset_id)
                .param("photo_ids", photo_ids.join(","))
        )
    }

    /// Edits the set title and, when given, its description.
    ///
    /// This method requires authentication with 'write' permission.
    pub async fn edit_meta(
        client: &Client,
        photoset_id: &str,
        title: &str,
        description: Option<&str>,
    ) -> Result<(), FlickrError> {
        oauth_post_status!(
            client,
            client
                .rest_request()
                .method("flickr.photosets.editMeta")
                .param("photoset_id", photoset_id)
                .param("title", title)
                .opt_param("description", description.filter(|d| !d.is_empty()))
        )
    }

    /// Replaces the photos of a set. Use it to add, remove and re-order photos.
    ///
    /// This method requires authentication with 'write' permission.
    pub async fn edit_photos(
        client: &Client,
        photoset_id: &str,
        primary_photo_id: &str,
        photo_ids: &[&str],
    ) -> Result<(), FlickrError> {
        oauth_post_status!(
            client,
            client
                .rest_request()
                .method("flickr.photosets.editPhotos")
                .param("photoset_id", photoset_id)
                .param("primary_photo_id", primary_photo_id)
                .param("photo_ids", photo_ids.join(","))
        )
    }

    /// Same as [`Photoset::edit_photos`]
    pub async fn reorder_photos(
        client: &Client,
        photoset_id: &str,
        primary_photo_id: &str,
        photo_ids: &[&str],
    ) -> Result<(), FlickrError> {
        Self::edit_photos(client, photoset_id, primary_photo_id, photo_ids).await
    }

    /// Sets the primary photo of a set.
    ///
    /// This method requires authentication with 'write' permission.
    pub async fn set_primary_photo(
        client: &Client,
        photoset_id: &str,
        photo_id: &str,
    ) -> Result<(), FlickrError> {
        oauth_post_status!(
            client,
            client
                .rest_request()
                .method("flickr.photosets.setPrimaryPhoto")
                .param("photoset_id", photoset_id)
                .param("photo_id", photo_id)
        )
    }

    /// Sets the order of the caller's photosets.
    ///
    /// Sets not listed go to the end, ordered by id.
    /// This method requires authentication with 'write' permission.
    pub async fn order_sets(client: &Client, photoset_ids: &[&str]) -> Result<(), FlickrError> {
        oauth_post_status!(
            client,
            client
                .rest_request()
                .method("flickr.photosets.orderSets")
                .param("photoset_ids", photoset_ids.join(","))
        )
    }
}

// Expected response for a photosets.getList request
#[derive(Deserialize, Debug)]
struct PhotosetsListResponse {
    photosets: PhotosetList,
}

// Expected response for a request returning a single photoset
#[derive(Deserialize, Debug)]
struct PhotosetResponse {
    photoset: Photoset,
}

// Expected response for a photosets.getPhotos request
#[derive(Deserialize, Debug)]
struct PhotosetPhotosResponse {
    photoset: PhotoList,
}
