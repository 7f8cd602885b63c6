//! 产品资源：模型、内存存储与 HTTP 处理器

pub mod handler;
pub mod model;
pub mod store;

pub use model::{Product, ProductFields};
pub use store::{ProductStore, StoreError};
