// Файл: core/http.rs
// HTTP-клиент и его конфигурация.

use super::error::CoreError;
use once_cell::sync::Lazy;
use reqwest::{header, Client};
use std::time::Duration;

pub const APP_USER_AGENT: &str = "either-response/0.1";
pub const DEFAULT_TIMEOUT_SEC: u64 = 30;

/// Настройки клиента. Ретраи, редиректы и пул соединений остаются
/// на усмотрение reqwest.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub user_agent: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub default_headers: header::HeaderMap,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: APP_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SEC),
            connect_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SEC),
            default_headers: header::HeaderMap::new(),
        }
    }
}

pub fn create_http_client(config: &ClientConfig) -> Result<Client, CoreError> {
    let mut headers = config.default_headers.clone();
    let user_agent = header::HeaderValue::from_str(&config.user_agent)
        .map_err(|e| CoreError::InvalidHeader(format!("Invalid User-Agent: {}", e)))?;
    headers.insert(header::USER_AGENT, user_agent);

    let client = Client::builder()
        .default_headers(headers)
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .build()?;
    Ok(client)
}

// Глобальный лениво создаваемый клиент. reqwest::Client держит Arc внутри.
pub static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    create_http_client(&ClientConfig::default()).expect("Failed to build core HTTP_CLIENT")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.user_agent, APP_USER_AGENT);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.default_headers.is_empty());
    }

    #[test]
    fn test_create_client_rejects_bad_user_agent() {
        let config = ClientConfig {
            user_agent: "bad\nagent".to_string(),
            ..ClientConfig::default()
        };
        assert!(matches!(
            create_http_client(&config),
            Err(CoreError::InvalidHeader(_))
        ));
    }

    #[test]
    fn test_create_client_with_custom_headers() {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));
        let config = ClientConfig {
            default_headers: headers,
            timeout: Duration::from_secs(5),
            ..ClientConfig::default()
        };
        assert!(create_http_client(&config).is_ok());
    }
}
