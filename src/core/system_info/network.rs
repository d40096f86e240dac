//! Private and public IP address lookup.

use crate::error::{FetchError, Result};
use serde::Deserialize;
use std::net::{IpAddr, UdpSocket};
use std::time::Duration;

/// Address "connected" to when probing the outbound route; nothing is sent
pub const ROUTE_PROBE_ADDR: &str = "8.8.8.8:80";
/// Public address lookup service
pub const PUBLIC_IP_ENDPOINT: &str = "https://api.ipify.org?format=json";
pub const PUBLIC_IP_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Deserialize)]
struct LookupResponse {
    ip: String,
}

/// Local address the OS would use to reach the internet
pub fn private_ip() -> Result<IpAddr> {
    let socket = UdpSocket::bind("0.0.0.0:0")?;
    socket.connect(ROUTE_PROBE_ADDR)?;
    let addr = socket.local_addr()?;

    if addr.ip().is_unspecified() {
        return Err(FetchError::network("no route to the internet"));
    }
    Ok(addr.ip())
}

/// Address the lookup service at `endpoint` sees us connecting from
pub fn public_ip(endpoint: &str, timeout: Duration) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(concat!("richfetch/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()?;

    let response = client.get(endpoint).send()?;

    if !response.status().is_success() {
        return Err(FetchError::network(format!(
            "lookup service returned status {}",
            response.status()
        )));
    }

    let body = response.text()?;
    parse_lookup_response(&body)
}

fn parse_lookup_response(body: &str) -> Result<String> {
    let parsed: LookupResponse = serde_json::from_str(body)
        .map_err(|e| FetchError::network(format!("unexpected lookup response: {}", e)))?;

    let ip = parsed.ip.trim();
    if ip.is_empty() {
        return Err(FetchError::network("lookup service returned an empty address"));
    }
    Ok(ip.to_string())
}
