pub mod aggregate;

pub use aggregate::Seller;
