//! 产品数据模型

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// 未提供分类时使用的默认分类
pub const DEFAULT_CATEGORY: &str = "General";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    /// 原样保留客户端提交的数值形式，整数不会变成浮点数
    pub price: Number,
    pub category: String,
}

/// 创建/更新产品时客户端提交的字段
///
/// `id` 不在其中：标识符只由服务端生成。值为 `null` 的字段视同未提供。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductFields {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Number>,
    pub category: Option<String>,
}

impl ProductFields {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_price(mut self, price: impl Into<Number>) -> Self {
        self.price = Some(price.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

impl Product {
    pub(crate) fn new(id: String, name: String, fields: ProductFields) -> Self {
        let mut product = Self {
            id,
            name: String::new(),
            description: String::new(),
            price: Number::from(0),
            category: String::new(),
        };
        product.apply(name, fields);
        product
    }

    /// 用提交的字段整体替换可变字段，缺省字段回到默认值而不是保留旧值
    pub(crate) fn apply(&mut self, name: String, fields: ProductFields) {
        self.name = name;
        self.description = fields.description.unwrap_or_default();
        self.price = fields.price.unwrap_or_else(|| Number::from(0));
        self.category = fields
            .category
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
    }
}
