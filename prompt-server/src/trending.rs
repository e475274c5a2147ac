//! Trending Reporter
//!
//! 按热度返回 Top-N 关键词：指定分类时取前 8 条，
//! 全局时取前 12 条。只读，无副作用。

use serde::{Deserialize, Serialize};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::repository::{CategoryRepository, KeywordRepository};
use crate::utils::{AppError, AppResult};

/// 分类内热度榜条数
pub const CATEGORY_LIMIT: usize = 8;

/// 全局热度榜条数
pub const GLOBAL_LIMIT: usize = 12;

/// 一条热门话题
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingTopic {
    pub text: String,
    /// 分类显示名称
    pub category: String,
    pub category_slug: String,
    pub popularity: i64,
}

pub struct TrendingReporter {
    categories: CategoryRepository,
    keywords: KeywordRepository,
}

impl TrendingReporter {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            categories: CategoryRepository::new(db.clone()),
            keywords: KeywordRepository::new(db),
        }
    }

    /// Top keywords by popularity, per category or across all categories
    pub async fn trending(&self, category_slug: Option<&str>) -> AppResult<Vec<TrendingTopic>> {
        match category_slug {
            Some(slug) => {
                let category = self
                    .categories
                    .find_by_slug(slug)
                    .await
                    .map_err(|e| AppError::database(e.to_string()))?
                    .ok_or_else(|| AppError::not_found("Category not found"))?;
                let category_id = category
                    .id
                    .clone()
                    .ok_or_else(|| AppError::internal("Category record has no id"))?;

                let keywords = self
                    .keywords
                    .top_by_category(&category_id, CATEGORY_LIMIT)
                    .await
                    .map_err(|e| AppError::database(e.to_string()))?;
                Ok(keywords
                    .into_iter()
                    .map(|kw| TrendingTopic {
                        text: kw.text,
                        category: category.name.clone(),
                        category_slug: category.slug.clone(),
                        popularity: kw.popularity,
                    })
                    .collect())
            }
            None => {
                let rows = self
                    .keywords
                    .top_all(GLOBAL_LIMIT)
                    .await
                    .map_err(|e| AppError::database(e.to_string()))?;
                Ok(rows
                    .into_iter()
                    .map(|row| TrendingTopic {
                        text: row.text,
                        category: row.category,
                        category_slug: row.category_slug,
                        popularity: row.popularity,
                    })
                    .collect())
            }
        }
    }
}
