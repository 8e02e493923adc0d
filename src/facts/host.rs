//! Host name helpers

use crate::facts::error::ServiceError;
use std::borrow::Cow;
use url::Url;

/// Extract the host name from a user-supplied URL
///
/// Bare hosts such as `acme.xyz/app` are treated as `https://` URLs. The host
/// is returned as written, without case folding or IDNA conversion, and with
/// userinfo, port and IPv6 brackets removed. Returns `None` for empty input or
/// when the URL does not parse to a host.
pub fn get_host(url: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }

    let url = if url.starts_with("http://") || url.starts_with("https://") {
        Cow::Borrowed(url)
    } else {
        Cow::Owned(format!("https://{url}"))
    };

    // `Url` normalizes the host, so it only vouches for the URL being well formed
    Url::parse(&url).ok()?.host()?;

    raw_hostname(&url).map(str::to_string)
}

fn raw_hostname(url: &str) -> Option<&str> {
    let (_, rest) = url.split_once("://")?;
    let authority = rest.split(['/', '?', '#']).next().unwrap_or(rest);
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, host)| host);

    let host = match host_port.strip_prefix('[') {
        Some(bracketed) => bracketed.split_once(']')?.0,
        None => host_port.split_once(':').map_or(host_port, |(host, _)| host),
    };

    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}

/// Reduce a host to its last two labels (`app.acme.xyz` -> `acme.xyz`)
///
/// This is the name WHOIS lookups are made for.
pub fn tld_plus_one(host: &str) -> Result<String, ServiceError> {
    let labels: Vec<&str> = host.split('.').collect();

    match labels.len() {
        0 | 1 => Err(ServiceError::WhoIsLookup),
        2 => Ok(host.to_string()),
        n => Ok(format!("{}.{}", labels[n - 2], labels[n - 1])),
    }
}
