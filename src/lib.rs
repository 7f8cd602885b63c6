//! # 产品目录服务
//!
//! 基于 Axum 的内存产品 CRUD API，附带邮箱与密码强度校验工具：
//! - `app`: 路由表、产品存储与处理器、反馈提交、健康检查
//! - `core`: 统一错误处理与请求日志中间件
//! - `infrastructure`: 配置加载与日志初始化
//! - `validators`: 邮箱格式与密码强度校验

pub mod app;
pub mod core;
pub mod infrastructure;
pub mod validators;

pub use app::{router, AppState};
pub use app::product::{Product, ProductFields, ProductStore, StoreError};
pub use crate::core::error::CoreError;
