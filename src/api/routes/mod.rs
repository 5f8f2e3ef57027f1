//! Routes 模块
//!
//! 定义 API 路由。

pub mod assistant_routes;
pub mod catalogue_routes;
