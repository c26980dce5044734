//! Trusted host filtering

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

/// Host patterns accepted by the server
///
/// `*` accepts any host; `*.example.com` accepts any subdomain of
/// `example.com`; anything else must match exactly (case-insensitive).
#[derive(Debug, Clone)]
pub struct AllowedHosts {
    patterns: Vec<String>,
    allow_any: bool,
}

impl AllowedHosts {
    pub fn new(patterns: &[String]) -> Self {
        Self {
            allow_any: patterns.iter().any(|p| p == "*"),
            patterns: patterns.iter().map(|p| p.to_ascii_lowercase()).collect(),
        }
    }

    pub fn allows_any(&self) -> bool {
        self.allow_any
    }

    /// Check a `Host` header value (port is ignored)
    pub fn is_allowed(&self, host: &str) -> bool {
        if self.allow_any {
            return true;
        }

        let host = strip_port(host).to_ascii_lowercase();
        self.patterns.iter().any(|pattern| match pattern.strip_prefix("*.") {
            Some(domain) => host
                .strip_suffix(domain)
                .is_some_and(|sub| sub.ends_with('.') && sub.len() > 1),
            None => *pattern == host,
        })
    }
}

fn strip_port(host: &str) -> &str {
    // Bracketed IPv6 literal, e.g. [::1]:8000
    if let Some(rest) = host.strip_prefix('[') {
        return rest.split(']').next().unwrap_or(rest);
    }
    host.split(':').next().unwrap_or(host)
}

/// Middleware rejecting requests whose host is not allowed
pub async fn check_host(
    State(allowed): State<Arc<AllowedHosts>>,
    request: Request,
    next: Next,
) -> Response {
    if allowed.allows_any() {
        return next.run(request).await;
    }

    let host = request
        .headers()
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .map(str::to_string)
        .or_else(|| request.uri().host().map(str::to_string));

    match host {
        Some(host) if allowed.is_allowed(&host) => next.run(request).await,
        _ => {
            tracing::debug!("Rejected request for host {:?}", host);
            (StatusCode::BAD_REQUEST, "Invalid host header").into_response()
        }
    }
}
