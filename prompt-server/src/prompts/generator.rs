//! Prompt Generator
//!
//! 按分类随机挑选 2-3 个模板，把用户主题替换进 `{topic}` 标记，
//! 并把主题本身计入关键词热度 (无论建议是否被使用过)。

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::repository::{CategoryRepository, KeywordRepository, PromptTemplateRepository};
use crate::utils::{AppError, AppResult};

/// 一条生成结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPrompt {
    /// 模板 record id
    pub id: String,
    /// 模板名称
    pub name: String,
    /// 替换后的正文
    #[serde(rename = "generatedContent")]
    pub generated_content: String,
}

pub struct PromptGenerator {
    categories: CategoryRepository,
    keywords: KeywordRepository,
    templates: PromptTemplateRepository,
}

impl PromptGenerator {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            categories: CategoryRepository::new(db.clone()),
            keywords: KeywordRepository::new(db.clone()),
            templates: PromptTemplateRepository::new(db),
        }
    }

    /// Generate prompts for a topic within a category
    ///
    /// - 主题原样 (不做大小写处理) get-or-create 为关键词
    /// - 均匀随机选 2 或 3 个不重复的模板 (不足时全选)
    /// - 选择顺序随机，每次调用可能不同
    pub async fn generate(&self, category_slug: &str, topic: &str) -> AppResult<Vec<GeneratedPrompt>> {
        let category = self
            .categories
            .find_by_slug(category_slug)
            .await
            .map_err(|e| AppError::database(e.to_string()))?
            .ok_or_else(|| AppError::not_found("Category not found"))?;
        let category_id = category
            .id
            .ok_or_else(|| AppError::internal("Category record has no id"))?;

        // 主题计入热度，独立于模板选择结果
        self.keywords
            .create_or_increment(topic, &category_id)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        let templates = self
            .templates
            .list_by_category(&category_id)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;
        if templates.is_empty() {
            return Err(AppError::not_found("No templates found for this category"));
        }

        let mut rng = rand::thread_rng();
        let count = rng.gen_range(2..=3usize);
        let selected = templates.choose_multiple(&mut rng, count);

        Ok(selected
            .map(|template| GeneratedPrompt {
                id: template
                    .id
                    .as_ref()
                    .map(|t| t.to_string())
                    .unwrap_or_default(),
                name: template.name.clone(),
                generated_content: template.render(topic),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::db::models::{Category, PromptTemplate, TOPIC_MARKER};
    use surrealdb::sql::Thing;

    async fn setup(template_count: usize) -> (Surreal<Db>, Thing) {
        let service = DbService::memory().await.unwrap();
        let db = service.db;
        crate::db::schema::define(&db).await.unwrap();

        let categories = CategoryRepository::new(db.clone());
        let coding = categories
            .create(Category::new("Coding", "coding"))
            .await
            .unwrap();
        let coding_id = coding.id.unwrap();

        let templates = PromptTemplateRepository::new(db.clone());
        for i in 0..template_count {
            templates
                .create(PromptTemplate::new(
                    format!("Template {i}"),
                    format!("Prompt {i} about {{topic}}. More on {{topic}}."),
                    coding_id.clone(),
                ))
                .await
                .unwrap();
        }

        (db, coding_id)
    }

    #[tokio::test]
    async fn test_generate_returns_two_or_three_rendered_prompts() {
        let (db, _) = setup(4).await;
        let generator = PromptGenerator::new(db);

        for _ in 0..10 {
            let prompts = generator.generate("coding", "sorting").await.unwrap();
            assert!(prompts.len() == 2 || prompts.len() == 3);
            for prompt in &prompts {
                assert!(!prompt.generated_content.contains(TOPIC_MARKER));
                assert!(prompt.generated_content.contains("sorting"));
            }
        }
    }

    #[tokio::test]
    async fn test_generate_with_fewer_templates_returns_all() {
        let (db, _) = setup(1).await;
        let generator = PromptGenerator::new(db);
        let prompts = generator.generate("coding", "sorting").await.unwrap();
        assert_eq!(prompts.len(), 1);
    }

    #[tokio::test]
    async fn test_generate_tracks_topic_as_keyword() {
        let (db, coding_id) = setup(3).await;
        let generator = PromptGenerator::new(db.clone());
        let keywords = KeywordRepository::new(db);

        generator.generate("coding", "sorting").await.unwrap();
        assert_eq!(keywords.count_by_category(&coding_id).await.unwrap(), 1);

        // 重复生成递增同一条关键词，而不是新建
        generator.generate("coding", "sorting").await.unwrap();
        assert_eq!(keywords.count_by_category(&coding_id).await.unwrap(), 1);
        let top = keywords.top_by_category(&coding_id, 1).await.unwrap();
        assert_eq!(top[0].popularity, 2);
    }

    #[tokio::test]
    async fn test_generate_without_templates_is_not_found() {
        let (db, _) = setup(0).await;
        let generator = PromptGenerator::new(db);
        let result = generator.generate("coding", "sorting").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_generate_unknown_category_is_not_found() {
        let (db, _) = setup(2).await;
        let generator = PromptGenerator::new(db);
        let result = generator.generate("nope", "sorting").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
