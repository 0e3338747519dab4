//! Seating Suggestion API Handlers
//!
//! 查询接口的参数逐个手工校验：缺失或无法解析的必填参数一律 400；
//! 无方案返回空数组 (200)；快照不可读返回 500。

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::models::Shift;
use crate::seating::{Solution, UsageCategory};
use crate::utils::time;
use crate::utils::{AppError, AppResult};

/// Query params for the suggestion lookup
///
/// 所有字段先收字符串再手工解析，保证 400 响应格式统一。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestQuery {
    pub date: Option<String>,
    pub shift: Option<String>,
    pub party_size: Option<String>,
    pub usage_category: Option<String>,
}

/// 对外的方案视图: { tables, totalCapacity, waste }
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionView {
    pub tables: Vec<String>,
    pub total_capacity: i32,
    pub waste: i32,
}

impl From<Solution> for SuggestionView {
    fn from(solution: Solution) -> Self {
        Self {
            tables: solution.tables,
            total_capacity: solution.total_capacity,
            waste: solution.waste,
        }
    }
}

fn required<'a>(value: &'a Option<String>, name: &str) -> AppResult<&'a str> {
    value
        .as_deref()
        .ok_or_else(|| AppError::validation(format!("Missing required parameter: {}", name)))
}

/// GET /api/suggestions - 查询座位方案
///
/// 参数: date (YYYY-MM-DD), shift (lunch|dinner), partySize (>= 1),
/// usageCategory (personal|corporate|event, 默认 personal)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<SuggestQuery>,
) -> AppResult<Json<Vec<SuggestionView>>> {
    let date = time::parse_date(required(&query.date, "date")?)?;

    let shift: Shift = required(&query.shift, "shift")?
        .parse()
        .map_err(AppError::validation)?;

    let party_size: i32 = required(&query.party_size, "partySize")?
        .parse()
        .map_err(|_| AppError::validation("partySize must be a positive integer"))?;
    if party_size < 1 {
        return Err(AppError::validation(format!(
            "partySize must be positive, got {}",
            party_size
        )));
    }

    let category = match query.usage_category.as_deref() {
        None | Some("") => UsageCategory::default(),
        Some(raw) => raw.parse().map_err(AppError::validation)?,
    };

    let solutions = state
        .suggestions
        .suggest(date, shift, party_size, category)
        .await?;

    Ok(Json(solutions.into_iter().map(SuggestionView::from).collect()))
}
