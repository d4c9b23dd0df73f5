// src/core/net.rs

// Blocking HTTPS client shared by all specs. One client per scrape run:
// the eResearch wizard rides on the cookie session.

use std::error::Error;
use std::time::Duration;

use reqwest::blocking::{Client, Response};

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};

pub fn client() -> Result<Client, Box<dyn Error>> {
    let c = Client::builder()
        .user_agent(USER_AGENT)
        .cookie_store(true)
        .gzip(true)
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .build()?;
    Ok(c)
}

fn checked(resp: Response, url: &str) -> Result<Response, Box<dyn Error>> {
    let status = resp.status();
    if !status.is_success() {
        return Err(format!("HTTP error: {} {}", status, url).into());
    }
    Ok(resp)
}

pub fn http_get(client: &Client, url: &str) -> Result<String, Box<dyn Error>> {
    let resp = checked(client.get(url).send()?, url)?;
    Ok(resp.text()?)
}

pub fn http_get_bytes(client: &Client, url: &str) -> Result<Vec<u8>, Box<dyn Error>> {
    let resp = checked(client.get(url).send()?, url)?;
    Ok(resp.bytes()?.to_vec())
}

/// POST an urlencoded form (WebForms postback) and return the body text.
pub fn http_post_form(
    client: &Client,
    url: &str,
    fields: &[(String, String)],
) -> Result<String, Box<dyn Error>> {
    let resp = checked(client.post(url).form(fields).send()?, url)?;
    Ok(resp.text()?)
}
