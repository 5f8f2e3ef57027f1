//! 核心数据模型模块
//!
//! 定义国家、事件、人物等目录数据，以及对话、实体分析、测验等请求期内的临时模型。

pub mod analysis;
pub mod chat;
pub mod country;
pub mod figure;
pub mod quiz;

pub use analysis::{EntityKind, HighlightedEntity};
pub use chat::{ChatContext, ChatExchange, ChatRole};
pub use country::{Country, Event, EventCategory, EventDevelopment, Severity};
pub use figure::Figure;
pub use quiz::{GeneratedQuizQuestion, QUIZ_OPTION_COUNT};
