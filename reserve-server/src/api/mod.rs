//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查接口
//! - [`suggestions`] - 座位建议查询接口
//! - [`tables`] - 桌台管理接口
//! - [`reservations`] - 预订管理接口

pub mod health;
pub mod reservations;
pub mod suggestions;
pub mod tables;

use axum::Router;

use crate::core::ServerState;

/// Compose all resource routers
pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(suggestions::router())
        .merge(tables::router())
        .merge(reservations::router())
}
