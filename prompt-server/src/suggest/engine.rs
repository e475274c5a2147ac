//! Suggestion Engine
//!
//! 编排层：按分类 + 查询串返回排序后的关键词建议。
//! 完全未命中时以首字母大写的查询创建新关键词
//! (建议库从用户查询自我填充，这是有意的设计)。

use serde::{Deserialize, Serialize};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::models::Keyword;
use crate::db::repository::{CategoryRepository, KeywordRepository};
use crate::suggest::matcher;
use crate::utils::{AppError, AppResult};

/// 单条关键词建议
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub text: String,
    pub popularity: i64,
}

impl From<&Keyword> for Suggestion {
    fn from(keyword: &Keyword) -> Self {
        Self {
            text: keyword.text.clone(),
            popularity: keyword.popularity,
        }
    }
}

pub struct SuggestionEngine {
    categories: CategoryRepository,
    keywords: KeywordRepository,
}

impl SuggestionEngine {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            categories: CategoryRepository::new(db.clone()),
            keywords: KeywordRepository::new(db),
        }
    }

    /// Suggest keywords for a category and a raw user query
    ///
    /// - 查询规范化 (trim + lowercase) 后不足 3 个字符：直接返回
    ///   分类热度榜前 10，无任何写入
    /// - 否则做三层匹配 (见 [`matcher`])
    /// - 匹配为空且查询非空：get-or-create 一个新关键词并作为
    ///   唯一建议返回
    pub async fn suggest(&self, category_slug: &str, raw_query: &str) -> AppResult<Vec<Suggestion>> {
        let category = self
            .categories
            .find_by_slug(category_slug)
            .await
            .map_err(|e| AppError::database(e.to_string()))?
            .ok_or_else(|| AppError::not_found("Category not found"))?;
        let category_id = category
            .id
            .ok_or_else(|| AppError::internal("Category record has no id"))?;

        let query = matcher::normalize_query(raw_query);

        if matcher::is_short_query(&query) {
            let top = self
                .keywords
                .top_by_category(&category_id, matcher::MAX_SUGGESTIONS)
                .await
                .map_err(|e| AppError::database(e.to_string()))?;
            return Ok(top.iter().map(Suggestion::from).collect());
        }

        let keywords = self
            .keywords
            .list_by_category(&category_id)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;
        let ranked = matcher::rank(&keywords, &query);

        if !ranked.is_empty() {
            return Ok(ranked.into_iter().map(Suggestion::from).collect());
        }

        // 未命中：把查询本身存为关键词，供后续建议使用
        let created = self
            .keywords
            .create_or_increment(&matcher::capitalize(&query), &category_id)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;
        tracing::debug!(text = %created.text, category = %category_slug, "Stored keyword from query miss");
        Ok(vec![Suggestion::from(&created)])
    }
}
