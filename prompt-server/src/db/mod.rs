//! Database Module
//!
//! 嵌入式 SurrealDB 存储：
//!
//! - [`DbService`] - 数据库连接 (RocksDB 文件引擎 / 测试用内存引擎)
//! - [`schema`] - 幂等的表和索引定义
//! - [`seed`] - 初始数据加载 (服务启动前的显式步骤)

pub mod models;
pub mod repository;
pub mod schema;
pub mod seed;

use crate::utils::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

const NAMESPACE: &str = "prompts";
const DATABASE: &str = "prompts";

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open a file-backed database (RocksDB engine)
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
        Self::select_ns(&db).await?;

        tracing::info!("Database connection established ({db_path})");
        Ok(Self { db })
    }

    /// Open an in-memory database (used by tests)
    pub async fn memory() -> Result<Self, AppError> {
        let db = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open in-memory database: {e}")))?;
        Self::select_ns(&db).await?;
        Ok(Self { db })
    }

    async fn select_ns(db: &Surreal<Db>) -> Result<(), AppError> {
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))
    }
}
