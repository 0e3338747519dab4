//! Dining Table Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Dining table entity (桌台)
///
/// `code` 是全局唯一的物理桌号 (如 "M12")。
/// `join_partner` 指向允许拼桌的另一张桌台的桌号；
/// 指向不存在桌号的引用视为脏数据，在建议计算中跳过而非报错。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTable {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    /// 桌号 (全局唯一)
    pub code: String,
    /// 环境/楼层 (如 "terraza", "salon")
    pub zone: String,
    #[serde(default = "default_capacity")]
    pub capacity: i32,
    /// 是否结构性可用 (false = 桌台停用)
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub available: bool,
    /// 是否允许拼桌
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub can_join: bool,
    /// 拼桌搭档桌号
    #[serde(default)]
    pub join_partner: Option<String>,
    /// 可用于私人活动
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub personal_events: bool,
    /// 可用于企业活动
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub corporate_events: bool,
    /// 仅限活动预订 (永不用于普通请求)
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub events_only: bool,
}

fn default_true() -> bool {
    true
}

fn default_capacity() -> i32 {
    4
}

/// Create dining table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTableCreate {
    pub code: String,
    pub zone: String,
    pub capacity: Option<i32>,
    #[serde(default)]
    pub can_join: bool,
    #[serde(default)]
    pub join_partner: Option<String>,
    #[serde(default)]
    pub personal_events: bool,
    #[serde(default)]
    pub corporate_events: bool,
    #[serde(default)]
    pub events_only: bool,
}

/// Update dining table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTableUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_join: Option<bool>,
    /// `Some(None)` 清除搭档引用，`None` 保持不变
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_partner: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_events: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corporate_events: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events_only: Option<bool>,
}
