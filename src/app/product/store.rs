//! 产品内存存储
//!
//! 进程内唯一的产品集合，负责生成标识符并实现增删改查。
//! 所有读改写操作都在同一把读写锁内完成，并发请求不会交错出不一致的状态。

use std::{collections::HashMap, sync::Arc};

use parking_lot::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use super::model::{Product, ProductFields};

/// 存储层错误
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("输入无效: {0}")]
    InvalidInput(String),
    #[error("产品 {0} 不存在")]
    NotFound(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Clone, Default)]
pub struct ProductStore {
    products: Arc<RwLock<HashMap<String, Product>>>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取所有产品，同一存储状态下顺序保持稳定
    pub fn list(&self) -> Vec<Product> {
        self.products.read().values().cloned().collect()
    }

    pub fn get(&self, id: &str) -> StoreResult<Product> {
        match self.products.read().get(id) {
            Some(product) => Ok(product.clone()),
            None => {
                debug!(product_id = id, "产品不存在");
                Err(StoreError::NotFound(id.to_string()))
            }
        }
    }

    pub fn create(&self, mut fields: ProductFields) -> StoreResult<Product> {
        let name = required_name(&mut fields)?;

        let product = Product::new(Uuid::new_v4().to_string(), name, fields);

        self.products
            .write()
            .insert(product.id.clone(), product.clone());

        info!(product_id = %product.id, "产品已创建");
        Ok(product)
    }

    /// 整体替换除 `id` 以外的字段
    pub fn update(&self, id: &str, mut fields: ProductFields) -> StoreResult<Product> {
        let mut products = self.products.write();

        let product = products
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let name = required_name(&mut fields)?;
        product.apply(name, fields);

        info!(product_id = id, "产品已更新");
        Ok(product.clone())
    }

    pub fn delete(&self, id: &str) -> StoreResult<()> {
        match self.products.write().remove(id) {
            Some(_) => {
                info!(product_id = id, "产品已删除");
                Ok(())
            }
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    pub fn len(&self) -> usize {
        self.products.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.read().is_empty()
    }
}

fn required_name(fields: &mut ProductFields) -> StoreResult<String> {
    // 仅用于判空，保存的是客户端提交的原始名称
    match fields.name.take() {
        Some(name) if !name.trim().is_empty() => Ok(name),
        _ => Err(StoreError::InvalidInput("name 为必填项且不能为空".to_string())),
    }
}
