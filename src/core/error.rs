// Файл: core/error.rs
// Единые типы ошибок крейта.

use thiserror::Error;

// --- 1. Внутренняя ошибка (CoreError) ---
// Транспорт, декодирование тела и парсинг.

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to parse URL: {0}")]
    UrlParse(#[from] url::ParseError),

    // ParseError от десериализатора
    #[error("Failed to parse JSON response or payload: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Response body is not valid UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),

    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    #[error("Invalid headers: {0}")]
    InvalidHeader(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;

// --- 2. Ошибка доступа к Either ---
// Вызывающий запросил не ту сторону, не проверив is_success()/is_failure().

pub(crate) const NO_SUCCESS_VALUE: &str = "no successful value on failure state";
pub(crate) const NO_FAILURE_VALUE: &str = "no failure value on success state";

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EitherError {
    #[error("{0}")]
    EmptyValue(&'static str),
}
