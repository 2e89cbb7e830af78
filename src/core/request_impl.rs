// Файл: core/request_impl.rs
// Выполнение запроса: NetworkRequest -> BufferedResponse -> EitherResponse.

use super::binder::EitherResponse;
use super::error::CoreError;
use super::response::BufferedResponse;
use log::debug;
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Client, Method,
};
use serde::de::DeserializeOwned;
use std::str::FromStr;
use url::Url;

/// Описание запроса до валидации.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkRequest {
    pub url: String,
    pub method: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl NetworkRequest {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: method.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new("GET", url)
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

fn build_header_map(headers: &[(String, String)]) -> Result<HeaderMap, CoreError> {
    let mut header_map = HeaderMap::new();

    for (k, v) in headers {
        let name = HeaderName::from_str(k)
            .map_err(|e| CoreError::InvalidHeader(format!("Invalid header name ({}): {}", k, e)))?;
        let value = HeaderValue::from_str(v)
            .map_err(|e| CoreError::InvalidHeader(format!("Invalid header value for {}: {}", k, e)))?;
        header_map.append(name, value);
    }

    Ok(header_map)
}

/// Выполняет сырой HTTP-запрос.
///
/// 4xx/5xx не считаются ошибкой и возвращаются как есть.
/// `CoreError` означает проблему URL, метода, заголовков или сети.
pub async fn fetch_raw(client: &Client, request: NetworkRequest) -> Result<BufferedResponse, CoreError> {
    debug!("Executing fetch_raw for [{}]: {}", request.method, request.url);

    let url = Url::parse(&request.url)?;
    let method = Method::from_str(&request.method)
        .map_err(|_| CoreError::InvalidMethod(request.method.clone()))?;
    let headers = build_header_map(&request.headers)?;

    let mut req_builder = client.request(method, url).headers(headers);
    if let Some(body) = request.body {
        req_builder = req_builder.body(body);
    }

    // .error_for_status() не используется: статус решает биндер.
    let response = req_builder.send().await?;

    let status = response.status();
    let status_text = status.canonical_reason().unwrap_or_default().to_string();
    let response_headers = response.headers().clone();
    let body = response.bytes().await?;

    debug!("fetch_raw got status {} ({} bytes)", status.as_u16(), body.len());

    Ok(BufferedResponse::new(status.as_u16(), body.to_vec())
        .with_status_text(status_text)
        .with_headers(response_headers))
}

/// Запрос с разбором тела в `S` (статус < 400) или `F` (статус >= 400).
/// Ошибки разбора поглощаются в `Failure(None)`, транспортные возвращаются как есть.
pub async fn fetch_either<S, F>(
    client: &Client,
    request: NetworkRequest,
) -> Result<EitherResponse<S, F>, CoreError>
where
    S: DeserializeOwned,
    F: DeserializeOwned,
{
    let raw = fetch_raw(client, request).await?;
    Ok(EitherResponse::from_raw(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::http::HTTP_CLIENT;
    use serde::Deserialize;

    #[derive(Deserialize, Debug)]
    struct Foo {
        #[allow(dead_code)]
        bar: String,
    }

    #[test]
    fn test_request_builder() {
        let request = NetworkRequest::get("https://example.com")
            .header("foo", "bar")
            .body("{}");
        assert_eq!(request.method, "GET");
        assert_eq!(request.headers, vec![("foo".to_string(), "bar".to_string())]);
        assert_eq!(request.body.as_deref(), Some("{}"));
    }

    #[test]
    fn test_build_header_map_appends_duplicates() {
        let headers = vec![
            ("accept".to_string(), "text/plain".to_string()),
            ("accept".to_string(), "application/json".to_string()),
        ];
        let map = build_header_map(&headers).unwrap();
        assert_eq!(map.get_all("accept").iter().count(), 2);
    }

    #[tokio::test]
    async fn test_fetch_raw_invalid_url() {
        let request = NetworkRequest::get("not a valid url");
        let result = fetch_raw(&HTTP_CLIENT, request).await;
        assert!(matches!(result, Err(CoreError::UrlParse(_))));
    }

    #[tokio::test]
    async fn test_fetch_raw_invalid_method() {
        let request = NetworkRequest::new("BAD METHOD", "https://example.com");
        let result = fetch_raw(&HTTP_CLIENT, request).await;
        match result {
            Err(CoreError::InvalidMethod(m)) => assert_eq!(m, "BAD METHOD"),
            other => panic!("Wrong result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_raw_invalid_header_value() {
        let request = NetworkRequest::get("https://example.com").header("Valid-Name", "invalid\nvalue");
        let result = fetch_raw(&HTTP_CLIENT, request).await;
        match result {
            Err(CoreError::InvalidHeader(s)) => assert!(s.contains("Invalid header value")),
            other => panic!("Wrong result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_either_surfaces_transport_errors() {
        let request = NetworkRequest::get("https://example.com").header("bad name", "x");
        let result = fetch_either::<Foo, Foo>(&HTTP_CLIENT, request).await;
        assert!(matches!(result, Err(CoreError::InvalidHeader(_))));
    }

    #[tokio::test]
    #[ignore = "network test"]
    async fn test_fetch_either_real_error_status() {
        let _ = env_logger::builder().is_test(true).try_init();
        let request = NetworkRequest::get("https://httpbin.org/status/500");
        let response = fetch_either::<Foo, Foo>(&HTTP_CLIENT, request).await.unwrap();
        assert_eq!(response.status(), 500);
        assert!(response.body().is_failure());
    }
}
