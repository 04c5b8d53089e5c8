mod customer;
mod product;

pub use customer::{CreateCustomer, Customer, ProductRef, UpdateCustomer};
pub use product::{CreateProduct, Product, UpdateProduct};
