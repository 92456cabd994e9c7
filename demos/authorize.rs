/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

extern crate flickr;

use anyhow::Result;
use dotenvy::dotenv;
use flickr::api::{Client, Creds, Perms};
use std::io::{BufRead, Write};

// Walks through the OAuth1 exchange and prints the access token to put in .env
#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();
    let api_key = std::env::var("FLICKR_API_KEY")?;
    let api_secret = std::env::var("FLICKR_API_SECRET")?;

    let client = Client::new(Creds::new(&api_key, &api_secret));

    // Out of band, Flickr shows the verifier code to the user
    let request_token = client.get_request_token(None).await?;
    println!(
        "Open this URL and grant access:\n{}",
        client.authorize_url(&request_token, Perms::Write)?
    );

    print!("Verifier code: ");
    std::io::stdout().flush()?;
    let mut verifier = String::new();
    std::io::stdin().lock().read_line(&mut verifier)?;

    let access = client
        .get_access_token(&request_token, verifier.trim())
        .await?;

    // Check the token works before handing it out
    let user_client = client.with_token(&access.oauth_token, &access.oauth_token_secret);
    let user = user_client.login().await?;
    println!("Authorized as {} ({})", user.username, user.id);
    println!("FLICKR_OAUTH_TOKEN={}", access.oauth_token);
    println!("FLICKR_OAUTH_TOKEN_SECRET={}", access.oauth_token_secret);
    Ok(())
}
