//! Prompt Server - 分类化提示词模板与关键词建议服务
//!
//! # 架构概述
//!
//! 提供以下核心功能：
//!
//! - **关键词建议** (`suggest`): 三层匹配 (exact/related/partial) + 热度排序，
//!   未命中时从用户查询自我填充关键词库
//! - **提示词生成** (`prompts`): 随机选取分类模板，替换 `{topic}` 占位符
//! - **热门话题** (`trending`): 按热度计数的 Top-N 榜单
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储 + 显式 schema/seed 步骤
//! - **HTTP API** (`api`): JSON 接口
//!
//! # 模块结构
//!
//! ```text
//! prompt-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层 (models, repository, schema, seed)
//! ├── suggest/       # 关键词建议引擎
//! ├── prompts/       # 提示词生成
//! ├── trending.rs    # 热门话题
//! └── utils/         # 错误类型、日志
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod prompts;
pub mod suggest;
pub mod trending;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};
pub use prompts::PromptGenerator;
pub use suggest::SuggestionEngine;
pub use trending::TrendingReporter;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
    ____                             __
   / __ \_________  ____ ___  ____  / /_
  / /_/ / ___/ __ \/ __ `__ \/ __ \/ __/
 / ____/ /  / /_/ / / / / / / /_/ / /_
/_/   /_/   \____/_/ /_/ /_/ .___/\__/
                          /_/ server
    "#
    );
}
