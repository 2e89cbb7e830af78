// Файл: lib.rs
// Двухтиповый результат HTTP-ответа и его связывание по статусу.

pub mod core;
pub mod either;

pub use crate::core::binder::{bind, EitherResponse, ResponseBinder};
pub use crate::core::error::{CoreError, EitherError, Result};
pub use crate::core::http::{create_http_client, ClientConfig, HTTP_CLIENT};
pub use crate::core::json::{Deserializer, JsonDeserializer};
pub use crate::core::request_impl::{fetch_either, fetch_raw, NetworkRequest};
pub use crate::core::response::{BufferedResponse, RawResponse, FAILURE_STATUS_THRESHOLD};
pub use crate::either::Either;

/// Подключает env_logger. Повторный вызов ничего не делает.
pub fn init_logger() {
    let _ = env_logger::try_init();
}
