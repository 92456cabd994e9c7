/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::errors::FlickrError;
use crate::api::macros::{oauth_post, oauth_post_status};
use crate::api::parsers::{from_flag, from_lenient_u64};
use crate::api::{Client, HttpVerb, NoPayload};
use serde::Deserialize;

/// How many photos a member may add to the group pool
#[derive(Deserialize, Debug, Clone, Default)]
pub struct Throttle {
    #[serde(default, rename = "@count")]
    pub count: String,

    /// `day`, `week`, `month`, `ever`, `none` or `disabled`
    #[serde(default, rename = "@mode")]
    pub mode: String,

    #[serde(default, rename = "@remaining")]
    pub remaining: String,

    #[serde(default, rename = "$text")]
    pub text: String,
}

/// Content accepted in the group pool
#[derive(Deserialize, Debug, Clone, Default)]
pub struct Restrictions {
    #[serde(default, rename = "@photos_ok", deserialize_with = "from_flag")]
    pub photos_ok: bool,

    #[serde(default, rename = "@videos_ok", deserialize_with = "from_flag")]
    pub videos_ok: bool,

    #[serde(default, rename = "@images_ok", deserialize_with = "from_flag")]
    pub images_ok: bool,

    #[serde(default, rename = "@screens_ok", deserialize_with = "from_flag")]
    pub screens_ok: bool,

    #[serde(default, rename = "@art_ok", deserialize_with = "from_flag")]
    pub art_ok: bool,

    #[serde(default, rename = "@virtual_ok", deserialize_with = "from_flag")]
    pub virtual_ok: bool,

    #[serde(default, rename = "@safe_ok", deserialize_with = "from_flag")]
    pub safe_ok: bool,

    #[serde(default, rename = "@moderate_ok", deserialize_with = "from_flag")]
    pub moderate_ok: bool,

    #[serde(default, rename = "@restricted_ok", deserialize_with = "from_flag")]
    pub restricted_ok: bool,

    #[serde(default, rename = "@has_geo", deserialize_with = "from_flag")]
    pub has_geo: bool,
}

/// A group the caller can add photos to, as listed by `flickr.groups.pools.getGroups`
#[derive(Deserialize, Debug, Clone, Default)]
pub struct Group {
    #[serde(default, rename = "@nsid")]
    pub nsid: String,

    #[serde(rename = "@id")]
    pub id: String,

    #[serde(default, rename = "@name")]
    pub name: String,

    #[serde(default, rename = "@member", deserialize_with = "from_flag")]
    pub member: bool,

    #[serde(default, rename = "@moderator", deserialize_with = "from_flag")]
    pub moderator: bool,

    #[serde(default, rename = "@admin", deserialize_with = "from_flag")]
    pub admin: bool,

    /// 1 private, 2 invite only public, 3 public
    #[serde(default, rename = "@privacy")]
    pub privacy: String,

    #[serde(default, rename = "@photos", deserialize_with = "from_lenient_u64")]
    pub photos: u64,

    #[serde(default, rename = "@iconserver")]
    pub icon_server: String,

    #[serde(default, rename = "@iconfarm")]
    pub icon_farm: String,

    #[serde(default, rename = "@member_count", deserialize_with = "from_lenient_u64")]
    pub member_count: u64,

    #[serde(default, rename = "@topic_count", deserialize_with = "from_lenient_u64")]
    pub topic_count: u64,

    #[serde(default, rename = "@pool_count", deserialize_with = "from_lenient_u64")]
    pub pool_count: u64,

    #[serde(default)]
    pub restrictions: Restrictions,

    #[serde(default)]
    pub throttle: Throttle,
}

/// Group details returned by `flickr.groups.getInfo`
#[derive(Deserialize, Debug, Clone, Default)]
pub struct GroupInfo {
    #[serde(rename = "@id")]
    pub id: String,

    #[serde(default, rename = "@path_alias")]
    pub path_alias: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub rules: String,

    #[serde(default, deserialize_with = "from_lenient_u64")]
    pub members: u64,

    #[serde(default, deserialize_with = "from_lenient_u64")]
    pub pool_count: u64,

    #[serde(default)]
    pub throttle: Throttle,

    #[serde(default)]
    pub restrictions: Restrictions,
}

impl GroupInfo {
    /// True when the throttle still allows the caller to add photos
    pub fn can_add_photos(&self) -> bool {
        self.throttle
            .remaining
            .trim()
            .parse::<i64>()
            .is_ok_and(|remaining| remaining > 0)
    }
}

impl Group {
    /// Returns information about a group.
    ///
    /// Throttle and restrictions are only reported for authenticated calls.
    pub async fn get_info(client: &Client, group_id: &str) -> Result<GroupInfo, FlickrError> {
        let req = client
            .rest_request()
            .method("flickr.groups.getInfo")
            .param("group_id", group_id);
        Ok(oauth_post!(client, req, GroupInfoResponse)?.group)
    }

    /// Returns the groups the caller may add photos to.
    ///
    /// `page` and `per_page` are ignored when 0.
    /// This method requires authentication with 'read' permission.
    pub async fn get_groups(client: &Client, page: u32, per_page: u32) -> Result<Vec<Group>, FlickrError> {
        let req = client
            .rest_request()
            .method("flickr.groups.pools.getGroups")
            .opt_param("page", (page > 0).then(|| page.to_string()))
            .opt_param("per_page", (per_page > 0).then(|| per_page.to_string()));
        Ok(oauth_post!(client, req, GroupsResponse)?.groups.items)
    }

    /// Adds a photo to the group pool.
    ///
    /// This method requires authentication with 'write' permission.
    pub async fn add_photo(client: &Client, group_id: &str, photo_id: &str) -> Result<(), FlickrError> {
        oauth_post_status!(
            client,
            client
                .rest_request()
                .method("flickr.groups.pools.add")
                .param("group_id", group_id)
                .param("photo_id", photo_id)
        )
    }
}

#[derive(Deserialize, Debug)]
struct GroupInfoResponse {
    group: GroupInfo,
}

#[derive(Deserialize, Debug, Default)]
struct GroupList {
    #[serde(default, rename = "group")]
    items: Vec<Group>,
}

#[derive(Deserialize, Debug)]
struct GroupsResponse {
    #[serde(default)]
    groups: GroupList,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Response;

    #[test]
    fn decode_group_info() {
        let body = r#"<?xml version="1.0" encoding="utf-8" ?>
<rsp stat="ok">
  <group id="14743297@N22" nsid="14743297@N22" path_alias="_we_need_beauty_and_poetry" iconserver="65535" iconfarm="66">
    <name>we need poetry and beauty</name>
    <description>Portraits only</description>
    <rules>Only submit FOUR PICTURES PER DAY.</rules>
    <members>1104</members>
    <pool_count>26047</pool_count>
    <topic_count>6</topic_count>
    <privacy>3</privacy>
    <roles member="membri" moderator="mod" admin="amministratore" />
    <throttle count="4" mode="day" remaining="4" />
    <restrictions photos_ok="1" videos_ok="0" images_ok="1" screens_ok="0" art_ok="0" virtual_ok="0" safe_ok="1" moderate_ok="1" restricted_ok="1" has_geo="0" />
  </group>
</rsp>"#;
        let info = Response::<GroupInfoResponse>::decode(body)
            .into_payload()
            .unwrap()
            .group;
        assert_eq!(info.id, "14743297@N22");
        assert_eq!(info.name, "we need poetry and beauty");
        assert_eq!(info.members, 1104);
        assert_eq!(info.throttle.count, "4");
        assert_eq!(info.throttle.mode, "day");
        assert!(info.restrictions.safe_ok);
        assert!(!info.restrictions.videos_ok);
        assert!(info.can_add_photos());
    }

    #[test]
    fn can_add_photos_needs_remaining_slots() {
        let mut info = GroupInfo::default();
        info.throttle.remaining = "4".into();
        assert!(info.can_add_photos());
        info.throttle.remaining = "0".into();
        assert!(!info.can_add_photos());
        info.throttle.remaining = "".into();
        assert!(!info.can_add_photos());
        info.throttle.remaining = "-1".into();
        assert!(!info.can_add_photos());
    }

    #[test]
    fn decode_groups() {
        let body = r#"<rsp stat="ok">
  <groups page="1" pages="1" per_page="400" total="2">
    <group nsid="58107094@N00" id="58107094@N00" name="ART" member="1" moderator="0" admin="0" privacy="3" photos="2573832" iconserver="105" iconfarm="1" member_count="34486" topic_count="103" pool_count="2573832" />
    <group nsid="342582@N20" id="342582@N20" name="100 Strangers" member="1" moderator="0" admin="1" privacy="3" photos="50993" iconserver="7426" iconfarm="8" member_count="14228" topic_count="991" pool_count="50993" />
  </groups>
</rsp>"#;
        let groups = Response::<GroupsResponse>::decode(body)
            .into_payload()
            .unwrap()
            .groups
            .items;
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "ART");
        assert_eq!(groups[0].member_count, 34486);
        assert!(groups[0].member);
        assert!(!groups[0].admin);
        assert!(groups[1].admin);
    }
}
