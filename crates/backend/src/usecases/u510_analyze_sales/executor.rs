use contracts::domain::a030_product::Product;
use contracts::usecases::u510_analyze_sales::{SalesDataset, SellerReport, TopProduct};
use std::collections::HashMap;

use super::error::SalesError;
use super::options::AnalyzeOptions;
use super::policies;
use crate::shared::config::PoliciesConfig;
use crate::shared::format::round2;

/// Сколько товаров попадает в топ продавца
pub const TOP_PRODUCTS_LIMIT: usize = 10;

/// Промежуточная статистика продавца, которая накапливается за один запуск
#[derive(Debug, Clone, PartialEq)]
pub struct SellerSummary {
    pub id: String,
    pub name: String,
    pub revenue: f64,
    pub profit: f64,
    pub sales_count: u64,
    /// Артикул -> суммарное проданное количество
    pub products_sold: HashMap<String, u64>,
    pub bonus: f64,
    pub top_products: Vec<TopProduct>,
}

impl SellerSummary {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            revenue: 0.0,
            profit: 0.0,
            sales_count: 0,
            products_sold: HashMap::new(),
            bonus: 0.0,
            top_products: Vec::new(),
        }
    }

    /// Топ товаров: количество по убыванию, при равенстве артикул по возрастанию
    pub fn rank_products(&self, limit: usize) -> Vec<TopProduct> {
        let mut products: Vec<TopProduct> = self
            .products_sold
            .iter()
            .map(|(sku, quantity)| TopProduct {
                sku: sku.clone(),
                quantity: *quantity,
            })
            .collect();
        products.sort_by(|a, b| {
            b.quantity
                .cmp(&a.quantity)
                .then_with(|| a.sku.cmp(&b.sku))
        });
        products.truncate(limit);
        products
    }

    fn into_report(self) -> SellerReport {
        SellerReport {
            seller_id: self.id,
            name: self.name,
            revenue: round2(self.revenue),
            profit: round2(self.profit),
            sales_count: self.sales_count,
            top_products: self.top_products,
            bonus: round2(self.bonus),
        }
    }
}

/// Вариант `analyze_sales_data`, в который набор данных и опции могут не прийти вовсе
pub fn analyze_sales_data_with(
    dataset: Option<&SalesDataset>,
    options: Option<&AnalyzeOptions>,
) -> Result<Vec<SellerReport>, SalesError> {
    let dataset = dataset
        .ok_or_else(|| SalesError::InvalidDataset("набор данных не передан".to_string()))?;
    let options =
        options.ok_or_else(|| SalesError::InvalidOptions("опции не переданы".to_string()))?;
    analyze_sales_data(dataset, options)
}

/// Анализ продаж: статистика по каждому продавцу, отсортированная по прибыли
pub fn analyze_sales_data(
    dataset: &SalesDataset,
    options: &AnalyzeOptions,
) -> Result<Vec<SellerReport>, SalesError> {
    validate_dataset(dataset)?;

    let calculate_revenue = options
        .calculate_revenue
        .as_ref()
        .ok_or_else(|| SalesError::MissingPolicy("calculate_revenue".to_string()))?;
    let calculate_bonus = options
        .calculate_bonus
        .as_ref()
        .ok_or_else(|| SalesError::MissingPolicy("calculate_bonus".to_string()))?;

    // Индексация
    let mut summaries: Vec<SellerSummary> = Vec::with_capacity(dataset.sellers.len());
    let mut seller_index: HashMap<&str, usize> = HashMap::with_capacity(dataset.sellers.len());
    for seller in &dataset.sellers {
        if seller_index.contains_key(seller.id.as_str()) {
            tracing::warn!("Duplicate seller id '{}' ignored", seller.id);
            continue;
        }
        seller_index.insert(seller.id.as_str(), summaries.len());
        summaries.push(SellerSummary::new(seller.id.clone(), seller.display_name()));
    }

    // При повторе артикула действует последняя карточка
    let mut product_index: HashMap<&str, &Product> = HashMap::with_capacity(dataset.products.len());
    for product in &dataset.products {
        if product_index.insert(product.sku.as_str(), product).is_some() {
            tracing::warn!("Duplicate product sku '{}': last card wins", product.sku);
        }
    }

    let mut skipped_records = 0usize;
    let mut skipped_items = 0usize;

    for record in &dataset.purchase_records {
        let Some(&position) = seller_index.get(record.seller_id.as_str()) else {
            tracing::debug!("Record for unknown seller '{}' skipped", record.seller_id);
            skipped_records += 1;
            continue;
        };
        let summary = &mut summaries[position];
        summary.sales_count += 1;
        summary.revenue += record.total_amount;

        for item in record.line_items() {
            let Some(&product) = product_index.get(item.sku.as_str()) else {
                tracing::debug!(
                    "Item with unknown sku '{}' skipped (seller '{}')",
                    item.sku,
                    record.seller_id
                );
                skipped_items += 1;
                continue;
            };

            let item_revenue = calculate_revenue(item, product);
            summary.profit += item_revenue - product.cost_of(item.quantity);
            *summary.products_sold.entry(item.sku.clone()).or_insert(0) += item.quantity as u64;
        }
    }

    // Стабильная сортировка: при равной прибыли сохраняется порядок из входных данных.
    // total_cmp даёт полный порядок и для NaN
    summaries.sort_by(|a, b| b.profit.total_cmp(&a.profit));

    let total = summaries.len();
    for (index, summary) in summaries.iter_mut().enumerate() {
        let bonus = calculate_bonus(index, total, &*summary);
        summary.bonus = bonus;
        summary.top_products = summary.rank_products(TOP_PRODUCTS_LIMIT);
    }

    tracing::info!(
        "Analyzed {} records for {} sellers (skipped: {} records, {} items)",
        dataset.purchase_records.len(),
        total,
        skipped_records,
        skipped_items
    );

    Ok(summaries.into_iter().map(SellerSummary::into_report).collect())
}

/// Анализ с политиками из секции `[policies]` конфигурации.
///
/// Набор данных проверяется раньше политик, так же как в `analyze_sales_data`.
pub fn analyze_with_config(
    dataset: &SalesDataset,
    policies_config: Option<&PoliciesConfig>,
) -> Result<Vec<SellerReport>, SalesError> {
    validate_dataset(dataset)?;
    let options = policies::resolve(policies_config)?;
    analyze_sales_data(dataset, &options)
}

pub fn validate_dataset(dataset: &SalesDataset) -> Result<(), SalesError> {
    let empty = [
        ("products", dataset.products.is_empty()),
        ("sellers", dataset.sellers.is_empty()),
        ("purchase_records", dataset.purchase_records.is_empty()),
    ];
    for (field, is_empty) in empty {
        if is_empty {
            return Err(SalesError::InvalidDataset(format!("{} пуст", field)));
        }
    }
    Ok(())
}
