//! Prompt Template Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::PromptTemplate;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use surrealdb::sql::Thing;

const TABLE: &str = "prompt_template";

#[derive(Clone)]
pub struct PromptTemplateRepository {
    base: BaseRepository,
}

impl PromptTemplateRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all templates of a category ordered by name
    pub async fn list_by_category(&self, category: &Thing) -> RepoResult<Vec<PromptTemplate>> {
        let templates: Vec<PromptTemplate> = self
            .base
            .db()
            .query("SELECT * FROM prompt_template WHERE category = $category ORDER BY name")
            .bind(("category", category.clone()))
            .await?
            .take(0)?;
        Ok(templates)
    }

    /// Create a new template (seeding)
    pub async fn create(&self, template: PromptTemplate) -> RepoResult<PromptTemplate> {
        let created: Option<PromptTemplate> =
            self.base.db().create(TABLE).content(template).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create prompt template".to_string()))
    }
}
