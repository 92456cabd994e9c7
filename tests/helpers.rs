/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use flickr::api::{Client, Creds, Endpoints};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

#[allow(dead_code)]
pub(crate) fn get_full_auth_tokens() -> anyhow::Result<Creds> {
    let api_key = std::env::var("FLICKR_API_KEY")?;
    let api_secret = std::env::var("FLICKR_API_SECRET")?;
    let token = std::env::var("FLICKR_OAUTH_TOKEN")?;
    let token_secret = std::env::var("FLICKR_OAUTH_TOKEN_SECRET")?;

    Ok(Creds::from_tokens(
        &api_key,
        &api_secret,
        Some(&token),
        Some(&token_secret),
    ))
}

#[allow(dead_code)]
pub(crate) fn get_app_tokens() -> anyhow::Result<Creds> {
    let api_key = std::env::var("FLICKR_API_KEY")?;
    let api_secret = std::env::var("FLICKR_API_SECRET")?;

    Ok(Creds::new(&api_key, &api_secret))
}

/// Client acting for a fake user, talking to `origin`
#[allow(dead_code)]
pub(crate) fn mock_client(origin: &str) -> Client {
    Client::with_endpoints(
        Creds::from_tokens("key", "secret", Some("token"), Some("token_secret")),
        Endpoints::with_origin(origin),
    )
}

/// Serves a single request with `body` and hands back the raw request received.
///
/// Returns the server origin, e.g. `http://127.0.0.1:40000`.
#[allow(dead_code)]
pub(crate) async fn serve_once(
    body: &str,
) -> anyhow::Result<(String, JoinHandle<anyhow::Result<String>>)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let origin = format!("http://{}", listener.local_addr()?);
    let body = body.to_string();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await?;
        let request = read_request(&mut socket).await?;
        let response = format!(
            "HTTP/1.1 200 OK\r\n\
             Content-Type: text/xml; charset=utf-8\r\n\
             Content-Length: {}\r\n\
             Connection: close\r\n\r\n{}",
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await?;
        socket.shutdown().await?;
        Ok(request)
    });
    Ok((origin, handle))
}

async fn read_request(socket: &mut TcpStream) -> anyhow::Result<String> {
    let mut data = Vec::new();
    let mut buf = [0u8; 8192];
    while !request_complete(&data) {
        let n = socket.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        data.extend_from_slice(&buf[..n]);
    }
    Ok(String::from_utf8_lossy(&dechunk(data)).into_owned())
}

// Strips the chunked transfer framing so bodies can be inspected as sent
fn dechunk(data: Vec<u8>) -> Vec<u8> {
    let Some(header_end) = data.windows(4).position(|w| w == b"\r\n\r\n") else {
        return data;
    };
    let headers = String::from_utf8_lossy(&data[..header_end]).to_ascii_lowercase();
    if !headers.contains("transfer-encoding: chunked") {
        return data;
    }

    let mut out = data[..header_end + 4].to_vec();
    let mut rest = &data[header_end + 4..];
    while let Some(line_end) = rest.windows(2).position(|w| w == b"\r\n") {
        let size = String::from_utf8_lossy(&rest[..line_end]);
        let Ok(size) = usize::from_str_radix(size.trim(), 16) else {
            break;
        };
        let start = line_end + 2;
        if size == 0 || rest.len() < start + size {
            break;
        }
        out.extend_from_slice(&rest[start..start + size]);
        rest = &rest[(start + size + 2).min(rest.len())..];
    }
    out
}

fn request_complete(data: &[u8]) -> bool {
    let Some(header_end) = data.windows(4).position(|w| w == b"\r\n\r\n") else {
        return false;
    };
    let headers = String::from_utf8_lossy(&data[..header_end]).to_ascii_lowercase();
    let body = &data[header_end + 4..];

    if headers.contains("transfer-encoding: chunked") {
        return body.ends_with(b"0\r\n\r\n");
    }
    let content_length = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|len| len.trim().parse::<usize>().ok())
        .unwrap_or(0);
    body.len() >= content_length
}
