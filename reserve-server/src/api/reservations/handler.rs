//! Reservation API Handlers
//!
//! 预订写路径。建议与落座之间没有持锁：创建时 repository 会在提交前
//! 重新校验占用，任何桌台冲突整单 409。

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::{Reservation, ReservationCreate};
use crate::db::repository::{DiningTableRepository, ReservationRepository};
use crate::utils::time;
use crate::utils::{AppError, AppResult};

/// Query params for listing reservations
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub date: Option<String>,
}

/// GET /api/reservations - 获取预订列表 (可按日期过滤)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Reservation>>> {
    let repo = ReservationRepository::new(state.db.clone());
    let reservations = match query.date {
        Some(raw) => {
            let date = time::parse_date(&raw)?;
            repo.find_by_date(date).await?
        }
        None => repo.find_all().await?,
    };
    Ok(Json(reservations))
}

/// GET /api/reservations/:id - 获取单个预订
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Reservation>> {
    let repo = ReservationRepository::new(state.db.clone());
    let reservation = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Reservation {} not found", id)))?;
    Ok(Json(reservation))
}

/// POST /api/reservations - 创建预订
///
/// 引用不存在桌号的请求直接 400，防止脏引用进入台账。
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ReservationCreate>,
) -> AppResult<Json<Reservation>> {
    let tables_repo = DiningTableRepository::new(state.db.clone());
    for code in &payload.tables {
        if tables_repo.find_by_code(code).await?.is_none() {
            return Err(AppError::validation(format!(
                "Unknown table code: {}",
                code
            )));
        }
    }

    let repo = ReservationRepository::new(state.db.clone());
    let reservation = repo.create(payload).await?;

    Ok(Json(reservation))
}

/// POST /api/reservations/:id/cancel - 取消预订
pub async fn cancel(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Reservation>> {
    let repo = ReservationRepository::new(state.db.clone());
    let reservation = repo.cancel(&id).await?;
    Ok(Json(reservation))
}
