//! Keyword Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::Keyword;
use serde::Deserialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use surrealdb::sql::Thing;

const TABLE: &str = "keyword";

/// Keyword row joined with its category name and slug (trending view)
#[derive(Debug, Clone, Deserialize)]
pub struct KeywordWithCategory {
    pub text: String,
    pub popularity: i64,
    pub category: String,
    pub category_slug: String,
}

#[derive(Clone)]
pub struct KeywordRepository {
    base: BaseRepository,
}

impl KeywordRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all keywords of a category ordered by popularity descending
    ///
    /// 同分的排序不保证稳定 (implementation-defined)
    pub async fn list_by_category(&self, category: &Thing) -> RepoResult<Vec<Keyword>> {
        let keywords: Vec<Keyword> = self
            .base
            .db()
            .query("SELECT * FROM keyword WHERE category = $category ORDER BY popularity DESC")
            .bind(("category", category.clone()))
            .await?
            .take(0)?;
        Ok(keywords)
    }

    /// Top N keywords of a category by popularity descending
    pub async fn top_by_category(&self, category: &Thing, limit: usize) -> RepoResult<Vec<Keyword>> {
        let keywords: Vec<Keyword> = self
            .base
            .db()
            .query(
                "SELECT * FROM keyword WHERE category = $category ORDER BY popularity DESC LIMIT $limit",
            )
            .bind(("category", category.clone()))
            .bind(("limit", limit as i64))
            .await?
            .take(0)?;
        Ok(keywords)
    }

    /// Top N keywords across all categories, joined with category name/slug
    pub async fn top_all(&self, limit: usize) -> RepoResult<Vec<KeywordWithCategory>> {
        let rows: Vec<KeywordWithCategory> = self
            .base
            .db()
            .query(
                "SELECT text, popularity, category.name AS category, category.slug AS category_slug \
                 FROM keyword ORDER BY popularity DESC LIMIT $limit",
            )
            .bind(("limit", limit as i64))
            .await?
            .take(0)?;
        Ok(rows)
    }

    /// Get-or-create a keyword keyed on (text, category)
    ///
    /// 已存在则 popularity += 1，否则以 popularity = 1 创建。
    /// 增量是单行 read-modify-write；并发的首次未命中可能各自创建
    /// 一行 (接受的弱一致行为，见 DESIGN.md)。
    pub async fn create_or_increment(&self, text: &str, category: &Thing) -> RepoResult<Keyword> {
        let mut result = self
            .base
            .db()
            .query(
                "UPDATE keyword SET popularity += 1 \
                 WHERE text = $text AND category = $category RETURN AFTER",
            )
            .bind(("text", text.to_string()))
            .bind(("category", category.clone()))
            .await?;
        let updated: Vec<Keyword> = result.take(0)?;
        if let Some(keyword) = updated.into_iter().next() {
            return Ok(keyword);
        }

        let created: Option<Keyword> = self
            .base
            .db()
            .create(TABLE)
            .content(Keyword::new(text, category.clone()))
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create keyword".to_string()))
    }

    /// Insert a keyword with explicit popularity and related terms (seeding)
    pub async fn insert(&self, keyword: Keyword) -> RepoResult<Keyword> {
        let created: Option<Keyword> = self.base.db().create(TABLE).content(keyword).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create keyword".to_string()))
    }

    /// Count keywords of a category (used by tests and the seeding step)
    pub async fn count_by_category(&self, category: &Thing) -> RepoResult<i64> {
        let mut result = self
            .base
            .db()
            .query("SELECT count() FROM keyword WHERE category = $category GROUP ALL")
            .bind(("category", category.clone()))
            .await?;
        let count: Option<i64> = result.take((0, "count"))?;
        Ok(count.unwrap_or(0))
    }
}
