//! Political Navigator - 21 世纪政治知识导航服务
//!
//! 提供国家、政治事件与历史人物目录的只读 API，并通过语言模型网关
//! 完成对话、文本实体识别、测验出题与国家资料生成。

pub mod api;
pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod observability;
pub mod parser;
pub mod prompts;
pub mod services;
pub mod storage;
pub mod websocket;
