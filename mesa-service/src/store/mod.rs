//! The consistency operations over the relational store. Every
//! multi-statement cascade runs inside a single transaction so a failure
//! can never leave a partial cascade behind (products detached but their
//! type still present, order lines surviving their product, and so on).

pub mod order_items;
pub mod product_types;
pub mod products;
pub mod tables;
