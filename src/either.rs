// Файл: either.rs
// Ровно один из двух типизированных исходов: Success(S) или Failure(F).

use crate::core::error::{EitherError, NO_FAILURE_VALUE, NO_SUCCESS_VALUE};

/// Закрытый двухвариантный результат. Неизменяем после создания:
/// все методы либо берут `&self`, либо потребляют значение целиком.
///
/// Равенство учитывает тег: `Success(42) != Failure(42)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<S, F> {
    Success(S),
    Failure(F),
}

impl<S, F> Either<S, F> {
    pub fn success(value: S) -> Self {
        Either::Success(value)
    }

    pub fn failure(value: F) -> Self {
        Either::Failure(value)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Either::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Either::Failure(_))
    }

    /// Значение успеха, либо `EmptyValue` на failure-состоянии.
    pub fn get(&self) -> Result<&S, EitherError> {
        match self {
            Either::Success(value) => Ok(value),
            Either::Failure(_) => Err(EitherError::EmptyValue(NO_SUCCESS_VALUE)),
        }
    }

    /// Значение ошибки, либо `EmptyValue` на success-состоянии.
    pub fn get_fail_value(&self) -> Result<&F, EitherError> {
        match self {
            Either::Success(_) => Err(EitherError::EmptyValue(NO_FAILURE_VALUE)),
            Either::Failure(value) => Ok(value),
        }
    }

    /// Преобразует успех; failure-значение переносится как есть,
    /// меняется только параметр типа успеха.
    pub fn map<V, M>(self, mapper: M) -> Either<V, F>
    where
        M: FnOnce(S) -> V,
    {
        match self {
            Either::Success(value) => Either::Success(mapper(value)),
            Either::Failure(value) => Either::Failure(value),
        }
    }

    pub fn get_or_else(self, alternative: S) -> S {
        match self {
            Either::Success(value) => value,
            Either::Failure(_) => alternative,
        }
    }

    /// `supplier` вызывается только на failure-ветке.
    pub fn get_or_else_get<G>(self, supplier: G) -> S
    where
        G: FnOnce() -> S,
    {
        match self {
            Either::Success(value) => value,
            Either::Failure(_) => supplier(),
        }
    }

    /// Успех, либо ошибка от `error_supplier` для проброса через `?`.
    pub fn get_or_else_throw<E, G>(self, error_supplier: G) -> Result<S, E>
    where
        G: FnOnce() -> E,
    {
        match self {
            Either::Success(value) => Ok(value),
            Either::Failure(_) => Err(error_supplier()),
        }
    }

    pub fn as_ref(&self) -> Either<&S, &F> {
        match self {
            Either::Success(value) => Either::Success(value),
            Either::Failure(value) => Either::Failure(value),
        }
    }

    pub fn into_result(self) -> Result<S, F> {
        self.into()
    }
}

impl<S, F> From<Either<S, F>> for Result<S, F> {
    fn from(value: Either<S, F>) -> Self {
        match value {
            Either::Success(value) => Ok(value),
            Either::Failure(value) => Err(value),
        }
    }
}

impl<S, F> From<Result<S, F>> for Either<S, F> {
    fn from(value: Result<S, F>) -> Self {
        match value {
            Ok(value) => Either::Success(value),
            Err(value) => Either::Failure(value),
        }
    }
}
