pub mod a030_product;
pub mod a031_seller;
pub mod a032_purchase_record;
