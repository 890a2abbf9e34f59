pub mod shared;
pub mod usecases;

pub use usecases::u510_analyze_sales::{
    analyze_sales_data, calculate_bonus_by_profit, calculate_simple_revenue, AnalyzeOptions,
    SalesError,
};
