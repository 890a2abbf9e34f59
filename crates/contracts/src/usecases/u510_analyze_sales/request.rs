use serde::{Deserialize, Serialize};

use crate::domain::a030_product::Product;
use crate::domain::a031_seller::Seller;
use crate::domain::a032_purchase_record::PurchaseRecord;

/// Набор данных для анализа: каталог, продавцы и чеки
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesDataset {
    pub products: Vec<Product>,
    pub sellers: Vec<Seller>,
    pub purchase_records: Vec<PurchaseRecord>,
}

impl SalesDataset {
    pub fn new(
        products: Vec<Product>,
        sellers: Vec<Seller>,
        purchase_records: Vec<PurchaseRecord>,
    ) -> Self {
        Self {
            products,
            sellers,
            purchase_records,
        }
    }
}
