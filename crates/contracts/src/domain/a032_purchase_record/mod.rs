pub mod aggregate;

pub use aggregate::{LineItem, PurchaseRecord};
