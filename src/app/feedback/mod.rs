//! 反馈提交

pub mod handler;
pub mod model;
