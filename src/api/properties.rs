/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use strum_macros::{Display, EnumString, IntoStaticStr};

/// HTTP verb a request is signed and sent with
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr, Display)]
pub enum HttpVerb {
    #[default]
    #[strum(serialize = "GET")]
    Get,
    #[strum(serialize = "POST")]
    Post,
}

/// Permission level requested when authorizing an application
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Perms {
    Read,
    Write,
    #[default]
    Delete,
}

/// Safe search filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SafetyLevel {
    Safe = 1,
    Moderate = 2,
    Restricted = 3,
}

/// Content type filter used when searching photos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ContentType {
    PhotosOnly = 1,
    ScreenShotsOnly = 2,
    OtherOnly = 3,
    PhotosAndScreenshots = 4,
    ScreenShotsAndOther = 5,
    PhotosAndOther = 6,
    All = 7,
}

/// Privacy filter used when listing a user's photos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PrivacyFilter {
    Public = 1,
    Friends = 2,
    Family = 3,
    FriendsAndFamily = 4,
    Private = 5,
}

macro_rules! impl_param_value {
    ($($t:ty),*) => {
        $(impl $t {
            /// Value sent to the API
            pub fn param_value(self) -> String {
                (self as u8).to_string()
            }
        })*
    };
}

impl_param_value!(SafetyLevel, ContentType, PrivacyFilter);
