use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::{HeaderMap, header, request::Parts};
use std::convert::Infallible;
use std::fmt;
use std::net::SocketAddr;

pub const SEARCH_ENGINE: &str = "search-engine";
pub const UNKNOWN_CLIENT: &str = "unknown";

const FORWARDED_FOR: &str = "x-forwarded-for";

// Google / Bing / Yahoo
const CRAWLER_TOKENS: [&str; 3] = ["googlebot", "bingbot", "slurp"];

// Who a request is rate limited as. Crawlers collapse into one sentinel that
// bypasses the limiter and the daily counter, everyone else is keyed by address.
// Only a crawler user agent yields the sentinel: an address that happens to read
// "search-engine" is still an ordinary, limited client.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClientIdentity {
    SearchEngine,
    Address(String),
}

impl ClientIdentity {
    pub fn is_search_engine(&self) -> bool {
        matches!(self, ClientIdentity::SearchEngine)
    }

    pub fn as_str(&self) -> &str {
        match self {
            ClientIdentity::SearchEngine => SEARCH_ENGINE,
            ClientIdentity::Address(addr) => addr,
        }
    }
}

impl fmt::Display for ClientIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: impl header::AsHeaderName) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Resolve the identity for a request.
///
/// Order: crawler user agent, first `X-Forwarded-For` entry, connection
/// address, then `"unknown"`. Nothing here is authenticated.
pub fn resolve_identity(headers: &HeaderMap, connection: Option<&str>) -> ClientIdentity {
    let ua = header_str(headers, header::USER_AGENT)
        .unwrap_or_default()
        .to_lowercase();
    if CRAWLER_TOKENS.iter().any(|token| ua.contains(token)) {
        return ClientIdentity::SearchEngine;
    }

    if let Some(xff) = header_str(headers, FORWARDED_FOR).filter(|v| !v.is_empty()) {
        let first = xff.split(',').next().unwrap_or(xff);
        return ClientIdentity::Address(first.trim().to_string());
    }

    let addr = connection.filter(|a| !a.is_empty()).unwrap_or(UNKNOWN_CLIENT);
    ClientIdentity::Address(addr.to_string())
}

// Extractor yielding the resolved identity, peer address from ConnectInfo if present
pub struct ResolvedClient(pub ClientIdentity);

impl<S> FromRequestParts<S> for ResolvedClient
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string());
        Ok(ResolvedClient(resolve_identity(&parts.headers, peer.as_deref())))
    }
}
