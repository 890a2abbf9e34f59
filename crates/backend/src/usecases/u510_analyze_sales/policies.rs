//! Политики расчёта по умолчанию и их реестр по именам из конфигурации

use contracts::domain::a030_product::Product;
use contracts::domain::a032_purchase_record::LineItem;

use super::error::SalesError;
use super::executor::SellerSummary;
use super::options::{AnalyzeOptions, BonusPolicy, RevenuePolicy};
use crate::shared::config::PoliciesConfig;
use std::sync::Arc;

pub const SIMPLE_REVENUE: &str = "simple";
pub const BONUS_BY_PROFIT: &str = "by_profit";

/// Выручка по позиции: цена * количество * (1 - скидка/100)
pub fn calculate_simple_revenue(item: &LineItem, _product: &Product) -> f64 {
    item.sale_price * item.quantity as f64 * (1.0 - item.discount_or_default() / 100.0)
}

/// Бонус по месту в рейтинге прибыли.
///
/// Порядок проверок важен: при единственном продавце index 0 одновременно
/// последнее место, и он получает 15%.
pub fn calculate_bonus_by_profit(index: usize, total: usize, seller: &SellerSummary) -> f64 {
    let profit = seller.profit;
    if index == 0 {
        profit * 0.15
    } else if index == 1 || index == 2 {
        profit * 0.10
    } else if index + 1 == total {
        0.0
    } else {
        profit * 0.05
    }
}

pub fn revenue_policy_by_name(name: &str) -> Result<RevenuePolicy, SalesError> {
    match name.trim() {
        SIMPLE_REVENUE => Ok(Arc::new(calculate_simple_revenue)),
        other => Err(SalesError::MissingPolicy(format!(
            "calculate_revenue (неизвестная политика '{}')",
            other
        ))),
    }
}

pub fn bonus_policy_by_name(name: &str) -> Result<BonusPolicy, SalesError> {
    match name.trim() {
        BONUS_BY_PROFIT => Ok(Arc::new(calculate_bonus_by_profit)),
        other => Err(SalesError::MissingPolicy(format!(
            "calculate_bonus (неизвестная политика '{}')",
            other
        ))),
    }
}

/// Собрать опции анализа по секции `[policies]` конфигурации.
///
/// Отсутствие секции это `InvalidOptions`, неизвестное имя политики это `MissingPolicy`.
pub fn resolve(config: Option<&PoliciesConfig>) -> Result<AnalyzeOptions, SalesError> {
    let config = config
        .ok_or_else(|| SalesError::InvalidOptions("секция [policies] не задана".to_string()))?;

    if config.revenue.trim().is_empty() || config.bonus.trim().is_empty() {
        return Err(SalesError::InvalidOptions(
            "имена политик revenue и bonus не должны быть пустыми".to_string(),
        ));
    }

    Ok(AnalyzeOptions::new()
        .with_revenue(revenue_policy_by_name(&config.revenue)?)
        .with_bonus(bonus_policy_by_name(&config.bonus)?))
}
