//! Prompt Template Model

use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

pub type PromptTemplateId = Thing;

/// 替换标记：模板正文中的占位符，生成时替换为用户主题
pub const TOPIC_MARKER: &str = "{topic}";

/// Prompt template model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptTemplate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PromptTemplateId>,
    /// 短标签 (如 "Step-by-Step Guide")
    pub name: String,
    /// 模板正文，包含 `{topic}` 标记
    pub template: String,
    /// 所属分类 (record link)
    pub category: Thing,
}

impl PromptTemplate {
    pub fn new(name: impl Into<String>, template: impl Into<String>, category: Thing) -> Self {
        Self {
            id: None,
            name: name.into(),
            template: template.into(),
            category,
        }
    }

    /// Substitute every occurrence of the topic marker with the given topic
    ///
    /// 原样替换，不转义、不递归
    pub fn render(&self, topic: &str) -> String {
        self.template.replace(TOPIC_MARKER, topic)
    }
}
