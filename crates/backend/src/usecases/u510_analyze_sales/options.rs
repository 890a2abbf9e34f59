use contracts::domain::a030_product::Product;
use contracts::domain::a032_purchase_record::LineItem;
use std::fmt;
use std::sync::Arc;

use super::executor::SellerSummary;
use super::policies::{calculate_bonus_by_profit, calculate_simple_revenue};

/// revenue(позиция, товар) -> выручка по позиции
pub type RevenuePolicy = Arc<dyn Fn(&LineItem, &Product) -> f64 + Send + Sync>;

/// bonus(место, всего продавцов, сводка продавца) -> бонус
pub type BonusPolicy = Arc<dyn Fn(usize, usize, &SellerSummary) -> f64 + Send + Sync>;

/// Подключаемые политики расчёта. Обе обязательны, значения по умолчанию
/// анализатор не подставляет сам.
#[derive(Clone, Default)]
pub struct AnalyzeOptions {
    pub calculate_revenue: Option<RevenuePolicy>,
    pub calculate_bonus: Option<BonusPolicy>,
}

impl AnalyzeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Опции со стандартными политиками
    pub fn defaults() -> Self {
        Self::new()
            .with_revenue(Arc::new(calculate_simple_revenue))
            .with_bonus(Arc::new(calculate_bonus_by_profit))
    }

    pub fn with_revenue(mut self, policy: RevenuePolicy) -> Self {
        self.calculate_revenue = Some(policy);
        self
    }

    pub fn with_bonus(mut self, policy: BonusPolicy) -> Self {
        self.calculate_bonus = Some(policy);
        self
    }
}

impl fmt::Debug for AnalyzeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalyzeOptions")
            .field("calculate_revenue", &self.calculate_revenue.is_some())
            .field("calculate_bonus", &self.calculate_bonus.is_some())
            .finish()
    }
}
