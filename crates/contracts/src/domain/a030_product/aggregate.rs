use serde::{Deserialize, Serialize};

/// Карточка товара из каталога
///
/// Справочные данные: ядро расчёта использует только `sku` и `purchase_price`,
/// остальные поля нужны для отображения и в расчётах не участвуют.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Артикул (уникальный идентификатор товара)
    pub sku: String,

    /// Закупочная цена за единицу
    pub purchase_price: f64,

    /// Наименование
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Категория
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Product {
    pub fn new(sku: impl Into<String>, purchase_price: f64) -> Self {
        Self {
            sku: sku.into(),
            purchase_price,
            name: None,
            category: None,
        }
    }

    /// Себестоимость `quantity` единиц товара
    pub fn cost_of(&self, quantity: u32) -> f64 {
        self.purchase_price * quantity as f64
    }
}
