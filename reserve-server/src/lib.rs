//! Mesa Reserve Server - 餐厅预订服务后端
//!
//! # 架构概述
//!
//! 本模块是 Reserve Server 的主入口，提供以下核心功能：
//!
//! - **座位建议** (`seating`): 可用性过滤、拼桌组合求解与确定性排序
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储 (桌台库存、预订台账)
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! reserve-server/src/
//! ├── core/          # 配置、状态、服务器、后台任务
//! ├── seating/       # 座位建议核心算法
//! ├── api/           # HTTP 路由和处理器
//! ├── utils/         # 错误、日志、时间工具
//! └── db/            # 数据库层 (models + repositories)
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod seating;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState};
pub use seating::{Solution, SuggestionService, UsageCategory};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境 (dotenv, 日志)
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    utils::logger::init_logger();
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    __  ___
   /  |/  /__  _________ _
  / /|_/ / _ \/ ___/ __ `/
 / /  / /  __(__  ) /_/ /
/_/  /_/\___/____/\__,_/
    "#
    );
}
