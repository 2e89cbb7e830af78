// Файл: core/json.rs
// Десериализатор тела ответа: строка -> типизированный объект.

use super::error::CoreError;
use serde::de::DeserializeOwned;

/// Внешняя способность "строка -> T". Биндер только выбирает целевой тип,
/// сам алгоритм разбора живёт здесь.
pub trait Deserializer {
    /// @param body Сырая строка ответа.
    /// @param context Контекст для логирования (например, "success body").
    fn parse<T: DeserializeOwned>(&self, body: &str, context: &str) -> Result<T, CoreError>;
}

/// Десериализатор по умолчанию на serde_json.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonDeserializer;

impl Deserializer for JsonDeserializer {
    fn parse<T: DeserializeOwned>(&self, body: &str, context: &str) -> Result<T, CoreError> {
        parse_json_from_text(body, context)
    }
}

/// Унифицированная функция парсинга JSON.
pub fn parse_json_from_text<T: DeserializeOwned>(
    response_text: &str,
    context: &str,
) -> Result<T, CoreError> {
    serde_json::from_str(response_text).map_err(|e| {
        // Ошибка serde не содержит само тело, логировать безопасно.
        log::warn!("Failed to parse JSON for {}: {}", context, e);
        CoreError::from(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize, Debug, PartialEq)]
    struct TestStruct {
        id: i32,
        name: String,
    }

    #[test]
    fn test_parse_json_success() {
        let json = r#"{"id": 1, "name": "Test"}"#;
        let result = parse_json_from_text::<TestStruct>(json, "test_success");
        assert_eq!(
            result.unwrap(),
            TestStruct {
                id: 1,
                name: "Test".to_string()
            }
        );
    }

    #[test]
    fn test_parse_json_error() {
        let json = r#"{id: 1, name: "Test"}"#; // невалидный JSON
        let result = parse_json_from_text::<TestStruct>(json, "test_error");
        assert!(matches!(result, Err(CoreError::Parse(_))));
    }

    #[test]
    fn test_deserializer_shape_mismatch() {
        // Валидный JSON, но не та форма.
        let result = JsonDeserializer.parse::<TestStruct>(r#"{"bar": "x"}"#, "mismatch");
        assert!(matches!(result, Err(CoreError::Parse(_))));
    }
}
