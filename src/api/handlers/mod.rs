//! Handlers 模块
//!
//! HTTP 请求处理程序。

pub mod analysis_handler;
pub mod catalogue_handler;
pub mod chat_handler;
pub mod generation_handler;
pub mod quiz_handler;

pub use analysis_handler::*;
pub use catalogue_handler::*;
pub use chat_handler::*;
pub use generation_handler::*;
pub use quiz_handler::*;
