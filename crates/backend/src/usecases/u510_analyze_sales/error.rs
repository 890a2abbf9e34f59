use contracts::usecases::common::{UseCaseError, UseCaseResult};
use thiserror::Error;

/// Ошибки анализа продаж. Все фатальные: частичный результат не возвращается
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SalesError {
    #[error("Неправильные входные данные: {0}")]
    InvalidDataset(String),

    #[error("Некорректные опции: {0}")]
    InvalidOptions(String),

    #[error("В опциях отсутствует требуемая функция {0}")]
    MissingPolicy(String),
}

impl From<SalesError> for UseCaseError {
    fn from(err: SalesError) -> Self {
        match &err {
            SalesError::InvalidDataset(details) => {
                UseCaseError::validation("Неправильные входные данные").with_details(details.clone())
            }
            SalesError::InvalidOptions(_) | SalesError::MissingPolicy(_) => {
                UseCaseError::configuration(err.to_string())
            }
        }
    }
}

/// Перевести результат внешнего слоя в `UseCaseResult`.
///
/// `SalesError` сохраняет свой код, остальные ошибки становятся `INTERNAL_ERROR`.
pub fn into_usecase_result<T>(result: anyhow::Result<T>) -> UseCaseResult<T> {
    result.map_err(|err| match err.downcast_ref::<SalesError>() {
        Some(sales_error) => UseCaseError::from(sales_error.clone()),
        None => UseCaseError::from(err),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_into_usecase_result() {
        let ok: anyhow::Result<u32> = Ok(7);
        assert_eq!(into_usecase_result(ok), Ok(7));

        let sales: anyhow::Result<()> =
            Err(SalesError::InvalidOptions("секция [policies] не задана".into()).into());
        let err = into_usecase_result(sales).unwrap_err();
        assert_eq!(err.code, "CONFIGURATION_ERROR");

        let io: anyhow::Result<()> = std::fs::read_to_string("/nonexistent/dataset.json")
            .map(|_| ())
            .context("failed to read dataset");
        let err = into_usecase_result(io).unwrap_err();
        assert_eq!(err.code, "INTERNAL_ERROR");
        assert!(err.message.starts_with("failed to read dataset"));
    }

    #[test]
    fn test_into_usecase_error() {
        let err: UseCaseError = SalesError::InvalidDataset("sellers is empty".into()).into();
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert_eq!(err.details.as_deref(), Some("sellers is empty"));

        let err: UseCaseError = SalesError::MissingPolicy("calculate_bonus".into()).into();
        assert_eq!(err.code, "CONFIGURATION_ERROR");
        assert!(err.message.contains("calculate_bonus"));
    }
}
