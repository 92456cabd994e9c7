/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

extern crate flickr;

use anyhow::{Result, bail};
use dotenvy::dotenv;
use flickr::api::{Client, Creds, Photoset, UploadParams};
use std::path::PathBuf;

// Uploads the files given on the command line into a new photoset:
//   cargo run --example upload -- "Set title" a.jpg b.jpg
#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();
    let api_key = std::env::var("FLICKR_API_KEY")?;
    let api_secret = std::env::var("FLICKR_API_SECRET")?;
    let token = std::env::var("FLICKR_OAUTH_TOKEN")?;
    let token_secret = std::env::var("FLICKR_OAUTH_TOKEN_SECRET")?;

    let mut args = std::env::args().skip(1);
    let Some(set_title) = args.next() else {
        bail!("usage: upload <set title> <files...>");
    };
    let files: Vec<PathBuf> = args.map(PathBuf::from).collect();
    if files.is_empty() {
        bail!("no files to upload");
    }

    let client = Client::new(Creds::from_tokens(
        &api_key,
        &api_secret,
        Some(&token),
        Some(&token_secret),
    ));

    let mut photoset_id: Option<String> = None;
    for path in files {
        let params = UploadParams {
            title: path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default(),
            tags: vec!["uploaded".into()],
            ..Default::default()
        };
        let photo_id = client.upload_file(&path, Some(&params)).await?;
        println!("Uploaded {} as {}", path.display(), photo_id);

        if let Some(set_id) = photoset_id.as_deref() {
            Photoset::add_photo(&client, set_id, &photo_id).await?;
            continue;
        }

        // The first photo becomes the cover of the set
        let set = Photoset::create(&client, &set_title, "", &photo_id).await?;
        println!("Created photoset {}", set.id);
        photoset_id = Some(set.id);
    }
    Ok(())
}
