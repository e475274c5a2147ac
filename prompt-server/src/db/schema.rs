//! Schema Definition
//!
//! 幂等的表和索引定义。随服务启动执行一次，
//! 绝不在请求处理路径中建表。

use crate::utils::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

/// Define tables and indexes (idempotent)
pub async fn define(db: &Surreal<Db>) -> Result<(), AppError> {
    db.query(
        "DEFINE TABLE IF NOT EXISTS category SCHEMALESS;
         DEFINE INDEX IF NOT EXISTS idx_category_slug ON TABLE category COLUMNS slug UNIQUE;
         DEFINE TABLE IF NOT EXISTS keyword SCHEMALESS;
         DEFINE INDEX IF NOT EXISTS idx_keyword_category ON TABLE keyword COLUMNS category;
         DEFINE TABLE IF NOT EXISTS prompt_template SCHEMALESS;
         DEFINE INDEX IF NOT EXISTS idx_template_category ON TABLE prompt_template COLUMNS category;",
    )
    .await
    .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?;

    tracing::info!("Database schema defined");
    Ok(())
}
