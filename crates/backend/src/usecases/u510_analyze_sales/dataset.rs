//! Разбор набора данных из JSON с проверкой структуры верхнего уровня

use contracts::usecases::u510_analyze_sales::SalesDataset;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::SalesError;

/// Построить `SalesDataset` из произвольного JSON.
///
/// Корень должен быть объектом, а `products`, `sellers` и `purchase_records`
/// массивами. Пустоту массивов проверяет уже сам анализ.
pub fn parse_dataset(value: &Value) -> Result<SalesDataset, SalesError> {
    let object = value.as_object().ok_or_else(|| {
        SalesError::InvalidDataset("набор данных должен быть JSON-объектом".to_string())
    })?;

    Ok(SalesDataset {
        products: parse_array(object.get("products"), "products")?,
        sellers: parse_array(object.get("sellers"), "sellers")?,
        purchase_records: parse_array(object.get("purchase_records"), "purchase_records")?,
    })
}

fn parse_array<T: DeserializeOwned>(value: Option<&Value>, field: &str) -> Result<Vec<T>, SalesError> {
    let array = match value {
        Some(array @ Value::Array(_)) => array,
        Some(_) => {
            return Err(SalesError::InvalidDataset(format!("{} должен быть массивом", field)));
        }
        None => {
            return Err(SalesError::InvalidDataset(format!("отсутствует поле {}", field)));
        }
    };

    serde_json::from_value(array.clone())
        .map_err(|e| SalesError::InvalidDataset(format!("{}: {}", field, e)))
}
