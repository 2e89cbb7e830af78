// Файл: core/response.rs
// Сырые факты ответа: статус и тело. Живут только до связывания в Either.

use super::error::CoreError;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::borrow::Cow;

/// Граница между успешными и ошибочными статусами.
pub const FAILURE_STATUS_THRESHOLD: u16 = 400;

pub fn is_error_status(status_code: u16) -> bool {
    status_code >= FAILURE_STATUS_THRESHOLD
}

/// Read-only взгляд на полученный ответ.
pub trait RawResponse {
    fn status_code(&self) -> u16;

    /// Тело как строка. Может упасть (например, не UTF-8).
    fn body_as_string(&self) -> Result<Cow<'_, str>, CoreError>;

    fn status_text(&self) -> &str {
        ""
    }

    fn headers(&self) -> Option<&HeaderMap> {
        None
    }
}

/// Полностью вычитанный ответ.
#[derive(Debug, Clone, Default)]
pub struct BufferedResponse {
    status_code: u16,
    status_text: String,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl BufferedResponse {
    pub fn new(status_code: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status_code,
            body: body.into(),
            ..Self::default()
        }
    }

    pub fn with_status_text(mut self, status_text: impl Into<String>) -> Self {
        self.status_text = status_text.into();
        self
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

impl RawResponse for BufferedResponse {
    fn status_code(&self) -> u16 {
        self.status_code
    }

    fn body_as_string(&self) -> Result<Cow<'_, str>, CoreError> {
        Ok(Cow::Borrowed(std::str::from_utf8(&self.body)?))
    }

    fn status_text(&self) -> &str {
        &self.status_text
    }

    fn headers(&self) -> Option<&HeaderMap> {
        Some(&self.headers)
    }
}
