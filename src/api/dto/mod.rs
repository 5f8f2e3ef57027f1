//! DTO 模块
//!
//! 数据传输对象，用于 API 请求和响应的序列化。

pub mod analysis_dto;
pub mod catalogue_dto;
pub mod chat_dto;
pub mod generation_dto;

pub use analysis_dto::*;
pub use catalogue_dto::*;
pub use chat_dto::*;
pub use generation_dto::*;
