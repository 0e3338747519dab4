//! 服务器级错误定义

use thiserror::Error;

/// 服务器启动/运行阶段的错误
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(String),
}

/// Server-level Result type
pub type Result<T> = std::result::Result<T, ServerError>;
