//! Suggestion Engine Module
//!
//! - [`matcher`] - 纯函数的三层匹配和排序
//! - [`engine`] - 存储编排 (分类查找、未命中自存)

pub mod engine;
pub mod matcher;

pub use engine::{Suggestion, SuggestionEngine};
pub use matcher::{MAX_SUGGESTIONS, MIN_QUERY_CHARS};
