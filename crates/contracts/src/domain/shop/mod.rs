pub mod aggregate;

pub use aggregate::{Shop, ShopProduct, ShopProductBinding};
