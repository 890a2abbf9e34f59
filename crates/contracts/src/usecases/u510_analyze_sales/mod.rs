pub mod request;
pub mod response;

pub use request::SalesDataset;
pub use response::{SellerReport, TopProduct};

use crate::usecases::common::UseCaseMetadata;

pub struct AnalyzeSales;

impl UseCaseMetadata for AnalyzeSales {
    fn usecase_index() -> &'static str {
        "u510"
    }

    fn usecase_name() -> &'static str {
        "analyze_sales"
    }

    fn display_name() -> &'static str {
        "Анализ продаж по продавцам"
    }

    fn description() -> &'static str {
        "Выручка, прибыль, бонусы и топ товаров по каждому продавцу"
    }
}
