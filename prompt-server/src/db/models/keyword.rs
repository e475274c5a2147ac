//! Keyword Model

use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

pub type KeywordId = Thing;

/// Keyword model
///
/// 用户活动驱动的搜索词记录：首次使用时 popularity = 1，
/// 重复使用时递增。text 不唯一，同一分类内的重复由
/// get-or-create 语义避免，但不做硬性约束。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Keyword {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<KeywordId>,
    pub text: String,
    /// 所属分类 (record link, 随分类级联删除)
    pub category: Thing,
    /// 使用频次计数器，驱动排序
    #[serde(default)]
    pub popularity: i64,
    /// 逗号分隔的同义词/相关词
    #[serde(default)]
    pub related_keywords: String,
}

impl Keyword {
    pub fn new(text: impl Into<String>, category: Thing) -> Self {
        Self {
            id: None,
            text: text.into(),
            category,
            popularity: 1,
            related_keywords: String::new(),
        }
    }

    /// Parse the comma-separated related keywords into trimmed terms
    ///
    /// 空字符串返回空序列
    pub fn related_terms(&self) -> Vec<String> {
        if self.related_keywords.is_empty() {
            return Vec::new();
        }
        self.related_keywords
            .split(',')
            .map(|term| term.trim().to_string())
            .collect()
    }
}
