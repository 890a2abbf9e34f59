pub mod dataset;
pub mod error;
pub mod executor;
pub mod options;
pub mod policies;
pub mod table;

pub use dataset::parse_dataset;
pub use error::SalesError;
pub use error::into_usecase_result;
pub use executor::{
    analyze_sales_data, analyze_sales_data_with, analyze_with_config, validate_dataset,
    SellerSummary, TOP_PRODUCTS_LIMIT,
};
pub use options::{AnalyzeOptions, BonusPolicy, RevenuePolicy};
pub use policies::{calculate_bonus_by_profit, calculate_simple_revenue};
pub use table::render_table;
