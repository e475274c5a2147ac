use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db::{DbService, schema};
use crate::utils::{AppError, AppResult};

/// 服务器状态 - 持有配置和数据库句柄
///
/// Surreal<Db> 内部是共享引用，Clone 成本极低，
/// handler 之间直接克隆传递。
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
}

impl ServerState {
    pub fn new(config: Config, db: Surreal<Db>) -> Self {
        Self { config, db }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构 (确保目录存在)
    /// 2. 数据库 (work_dir/database/prompts.db)
    /// 3. 表结构定义 (幂等)
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        config
            .ensure_work_dir_structure()
            .map_err(|e| AppError::internal(format!("Failed to create work directory: {e}")))?;

        let db_path = config.database_dir().join("prompts.db");
        let db_service = DbService::new(&db_path.to_string_lossy()).await?;
        let db = db_service.db;

        schema::define(&db).await?;

        Ok(Self::new(config.clone(), db))
    }

    /// 初始化内存态 (集成测试用，无文件系统副作用)
    pub async fn initialize_in_memory(config: &Config) -> AppResult<Self> {
        let db_service = DbService::memory().await?;
        let db = db_service.db;
        schema::define(&db).await?;
        Ok(Self::new(config.clone(), db))
    }

    /// 获取数据库实例
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }
}
