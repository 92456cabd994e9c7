/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

// Signs the request on behalf of the user, or with the api key only, then GETs the payload
macro_rules! signed_get {
    ( $c:expr, $authenticate:expr, $req:expr, $rt:ty) => {{
        let req = if $authenticate {
            $req.oauth_sign($c.creds())
        } else {
            $req.api_sign($c.creds())
        };
        $c.api().get::<$rt>(&req).await?.into_payload()
    }};
}

// Write call on behalf of the user, returns the payload
macro_rules! oauth_post {
    ( $c:expr, $req:expr, $rt:ty) => {{
        let req = $req.verb(HttpVerb::Post).oauth_sign($c.creds());
        $c.api().post::<$rt>(&req).await?.into_payload()
    }};
}

// Write call on behalf of the user that only reports success
macro_rules! oauth_post_status {
    ( $c:expr, $req:expr) => {{
        let req = $req.verb(HttpVerb::Post).oauth_sign($c.creds());
        $c.api().post::<NoPayload>(&req).await?.into_result().map(|_| ())
    }};
}

pub(crate) use {oauth_post, oauth_post_status, signed_get};
