//! Database Models
//!
//! SurrealDB 表对应的数据模型：
//!
//! - [`Category`] - 分类 (name + 唯一 slug)
//! - [`Keyword`] - 关键词 (popularity 计数器 + 相关词)
//! - [`PromptTemplate`] - 提示词模板 (含 `{topic}` 标记)

pub mod category;
pub mod keyword;
pub mod prompt_template;

pub use category::{Category, CategoryId};
pub use keyword::{Keyword, KeywordId};
pub use prompt_template::{PromptTemplate, PromptTemplateId, TOPIC_MARKER};
