// Файл: core/mod.rs
// Ошибки, ответ, десериализатор, биндер и транспорт.

pub mod binder;
pub mod error;
pub mod http;
pub mod json;
pub mod request_impl;
pub mod response;

pub use binder::{bind, EitherResponse, ResponseBinder};
pub use error::{CoreError, EitherError};
pub use json::{Deserializer, JsonDeserializer};
pub use response::{BufferedResponse, RawResponse};
