//! 存储层模块
//!
//! 进程内的目录存储，启动时从静态 JSON 文件加载。

pub mod catalogue;
pub mod loader;
pub mod merge;

pub use catalogue::CatalogueStore;
pub use loader::{LoadOutcome, load_catalogue, parse_catalogue};
