pub mod common;
pub mod u510_analyze_sales;
