use std::time::Duration;

use axum::body::{Body, to_bytes};
use axum::extract::Request;
use axum::http::HeaderMap;
use axum::response::Response;
use thiserror::Error;
use tracing::{debug, warn};

/// Заголовки, которые относятся к конкретному соединению и не передаются
/// дальше. `content-length` пересчитывается по фактическому телу.
const HOP_BY_HOP_HEADERS: [&str; 10] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "host",
    "content-length",
];

/// Префикс путей, которые уходят на backend.
pub(crate) const API_PREFIX: &str = "/api";

#[derive(Debug, Error)]
pub(crate) enum ProxyError {
    #[error("path is not proxied: {0}")]
    NotMatched(String),

    #[error("request body rejected: {0}")]
    RequestBody(axum::Error),

    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

/// Правило перезаписи: всё под `prefix` уходит на `upstream` с тем же путём
/// и query-строкой.
#[derive(Debug, Clone)]
pub(crate) struct ProxyRule {
    prefix: String,
    upstream: String,
}

impl ProxyRule {
    pub(crate) fn new(prefix: impl Into<String>, upstream: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into().trim_end_matches('/').to_string(),
            upstream: upstream.into().trim_end_matches('/').to_string(),
        }
    }

    pub(crate) fn api(upstream: impl Into<String>) -> Self {
        Self::new(API_PREFIX, upstream)
    }

    pub(crate) fn prefix(&self) -> &str {
        &self.prefix
    }

    pub(crate) fn matches(&self, path: &str) -> bool {
        is_under_prefix(&self.prefix, path)
    }

    /// Возвращает адрес на upstream или `None`, если путь не под префиксом.
    pub(crate) fn rewrite(&self, path_and_query: &str) -> Option<String> {
        let path = path_and_query.split('?').next().unwrap_or_default();
        self.matches(path)
            .then(|| format!("{}{}", self.upstream, path_and_query))
    }
}

/// Пересылает запросы на backend. Метод, тело и сквозные заголовки
/// передаются как есть; ответ backend возвращается без изменений.
#[derive(Debug, Clone)]
pub(crate) struct ProxyService {
    rule: ProxyRule,
    client: reqwest::Client,
    body_limit: usize,
}

impl ProxyService {
    pub(crate) fn new(rule: ProxyRule, timeout: Duration, body_limit: usize) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            rule,
            client,
            body_limit,
        })
    }

    pub(crate) fn rule(&self) -> &ProxyRule {
        &self.rule
    }

    pub(crate) async fn forward(&self, request: Request) -> Result<Response, ProxyError> {
        let (parts, body) = request.into_parts();
        let path_and_query = parts
            .uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or_else(|| parts.uri.path());
        let url = self
            .rule
            .rewrite(path_and_query)
            .ok_or_else(|| ProxyError::NotMatched(parts.uri.path().to_string()))?;

        let body = to_bytes(body, self.body_limit)
            .await
            .map_err(ProxyError::RequestBody)?;

        debug!(method = %parts.method, %url, bytes = body.len(), "forwarding request");

        let upstream = self
            .client
            .request(parts.method.clone(), &url)
            .headers(end_to_end_headers(&parts.headers))
            .body(body)
            .send()
            .await
            .inspect_err(|err| warn!(method = %parts.method, %url, "upstream unavailable: {err}"))?;

        let status = upstream.status();
        let headers = end_to_end_headers(upstream.headers());
        let bytes = upstream.bytes().await?;

        let mut response = Response::new(Body::from(bytes));
        *response.status_mut() = status;
        *response.headers_mut() = headers;
        Ok(response)
    }
}

/// `true` для самого префикса и путей под ним: `/api`, `/api/...`, но не `/apiary`.
pub(crate) fn is_under_prefix(prefix: &str, path: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

fn end_to_end_headers(headers: &HeaderMap) -> HeaderMap {
    headers
        .iter()
        .filter(|(name, _)| !HOP_BY_HOP_HEADERS.contains(&name.as_str()))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderMap, HeaderValue, header};

    use super::{ProxyRule, end_to_end_headers};

    #[test]
    fn api_paths_are_rewritten_to_upstream() {
        let rule = ProxyRule::api("http://localhost:8000");

        assert_eq!(
            rule.rewrite("/api/users/42").as_deref(),
            Some("http://localhost:8000/api/users/42")
        );
        assert_eq!(
            rule.rewrite("/api/chat?limit=10&offset=0").as_deref(),
            Some("http://localhost:8000/api/chat?limit=10&offset=0")
        );
        assert_eq!(rule.rewrite("/api").as_deref(), Some("http://localhost:8000/api"));
        assert_eq!(rule.rewrite("/api/").as_deref(), Some("http://localhost:8000/api/"));
    }

    #[test]
    fn non_api_paths_are_not_rewritten() {
        let rule = ProxyRule::api("http://localhost:8000");

        assert_eq!(rule.rewrite("/static/logo.png"), None);
        assert_eq!(rule.rewrite("/"), None);
        assert_eq!(rule.rewrite("/apiary"), None);
        assert_eq!(rule.rewrite("/login?next=/api/users"), None);
    }

    #[test]
    fn trailing_slashes_in_rule_are_ignored() {
        let rule = ProxyRule::new("/api/", "http://backend:8000/");

        assert_eq!(rule.prefix(), "/api");
        assert_eq!(
            rule.rewrite("/api/images").as_deref(),
            Some("http://backend:8000/api/images")
        );
    }

    #[test]
    fn hop_by_hop_headers_are_dropped() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("localhost:3000"));
        headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
        headers.insert(header::CONTENT_LENGTH, HeaderValue::from_static("5"));
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer token"));
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let forwarded = end_to_end_headers(&headers);

        assert_eq!(forwarded.len(), 2);
        assert!(forwarded.contains_key(header::AUTHORIZATION));
        assert!(forwarded.contains_key(header::CONTENT_TYPE));
    }
}
