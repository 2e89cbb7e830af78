// Файл: core/binder.rs
// Связывание сырого ответа с одной из двух форм по статусу.

use super::error::CoreError;
use super::json::{Deserializer, JsonDeserializer};
use super::response::{is_error_status, RawResponse};
use crate::either::Either;
use log::{debug, warn};
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;

/// Фабрика без состояния: ответ + две формы -> ровно один Either.
///
/// Форма выбирается один раз по статусу (< 400 -> `S`, >= 400 -> `F`).
/// Любая ошибка чтения или разбора тела поглощается и превращается в
/// `Failure(None)`; повторной попытки с другой формой нет.
#[derive(Debug, Default, Clone)]
pub struct ResponseBinder<D = JsonDeserializer> {
    deserializer: D,
}

impl ResponseBinder<JsonDeserializer> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: Deserializer> ResponseBinder<D> {
    pub fn with_deserializer(deserializer: D) -> Self {
        Self { deserializer }
    }

    pub fn bind<S, F, R>(&self, raw: &R) -> Either<S, Option<F>>
    where
        S: DeserializeOwned,
        F: DeserializeOwned,
        R: RawResponse + ?Sized,
    {
        let status = raw.status_code();
        match self.try_bind::<S, F, R>(raw) {
            Ok(either) => either,
            Err(e) => {
                warn!(
                    "Response body (status {}) could not be bound, degrading to empty failure: {}",
                    status, e
                );
                Either::Failure(None)
            }
        }
    }

    fn try_bind<S, F, R>(&self, raw: &R) -> Result<Either<S, Option<F>>, CoreError>
    where
        S: DeserializeOwned,
        F: DeserializeOwned,
        R: RawResponse + ?Sized,
    {
        let status = raw.status_code();
        let body = raw.body_as_string()?;

        if is_error_status(status) {
            debug!("Binding status {} to failure shape", status);
            let value = self.deserializer.parse::<F>(&body, "failure body")?;
            Ok(Either::Failure(Some(value)))
        } else {
            debug!("Binding status {} to success shape", status);
            let value = self.deserializer.parse::<S>(&body, "success body")?;
            Ok(Either::Success(value))
        }
    }
}

/// `ResponseBinder` с JSON по умолчанию.
pub fn bind<S, F, R>(raw: &R) -> Either<S, Option<F>>
where
    S: DeserializeOwned,
    F: DeserializeOwned,
    R: RawResponse + ?Sized,
{
    ResponseBinder::new().bind(raw)
}

/// Ответ "as either": метаданные ответа плюс связанное тело.
/// Сырое тело не сохраняется.
#[derive(Debug, Clone)]
pub struct EitherResponse<S, F> {
    status: u16,
    status_text: String,
    headers: HeaderMap,
    body: Either<S, Option<F>>,
}

impl<S, F> EitherResponse<S, F>
where
    S: DeserializeOwned,
    F: DeserializeOwned,
{
    pub fn from_raw<R: RawResponse + ?Sized>(raw: &R) -> Self {
        Self::from_raw_with(&ResponseBinder::new(), raw)
    }

    pub fn from_raw_with<D, R>(binder: &ResponseBinder<D>, raw: &R) -> Self
    where
        D: Deserializer,
        R: RawResponse + ?Sized,
    {
        Self {
            status: raw.status_code(),
            status_text: raw.status_text().to_string(),
            headers: raw.headers().cloned().unwrap_or_default(),
            body: binder.bind(raw),
        }
    }
}

impl<S, F> EitherResponse<S, F> {
    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// true для статусов 200..300, как у остальных ответов клиента.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn body(&self) -> &Either<S, Option<F>> {
        &self.body
    }

    pub fn into_body(self) -> Either<S, Option<F>> {
        self.body
    }
}
