use serde::{Deserialize, Deserializer, Serialize};

/// Чек продавца (одна продажа)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    /// Ссылка на продавца (Seller.id)
    pub seller_id: String,

    /// Итоговая сумма чека, скидки уже учтены
    pub total_amount: f64,

    /// Позиции чека. Если в источнике поле не массив, считаем что позиций нет
    #[serde(
        default,
        deserialize_with = "items_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub items: Option<Vec<LineItem>>,
}

/// Позиция чека
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Ссылка на товар (Product.sku)
    pub sku: String,

    /// Цена продажи за единицу
    pub sale_price: f64,

    /// Количество
    pub quantity: u32,

    /// Скидка в процентах (0..100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
}

impl LineItem {
    pub fn new(sku: impl Into<String>, sale_price: f64, quantity: u32) -> Self {
        Self {
            sku: sku.into(),
            sale_price,
            quantity,
            discount: None,
        }
    }

    pub fn with_discount(mut self, discount: f64) -> Self {
        self.discount = Some(discount);
        self
    }

    pub fn discount_or_default(&self) -> f64 {
        self.discount.unwrap_or(0.0)
    }
}

impl PurchaseRecord {
    pub fn new(seller_id: impl Into<String>, total_amount: f64, items: Vec<LineItem>) -> Self {
        Self {
            seller_id: seller_id.into(),
            total_amount,
            items: Some(items),
        }
    }

    /// Позиции чека (пустой срез, если позиций нет)
    pub fn line_items(&self) -> &[LineItem] {
        self.items.as_deref().unwrap_or(&[])
    }
}

fn items_or_none<'de, D>(deserializer: D) -> Result<Option<Vec<LineItem>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Array(_) => serde_json::from_value(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}
