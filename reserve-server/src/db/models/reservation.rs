//! Reservation Model
//!
//! 预订台账记录。历史原因：`tables` 字段以分隔符拼接的桌号字符串落库
//! (如 "M2;M3")，解析只发生在 repository 边界，算法层只消费结构化列表。

use super::serde_helpers;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use surrealdb::RecordId;

/// 时段 (turno) — 占用的分区键之一
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shift {
    Lunch,
    Dinner,
}

impl Shift {
    pub fn as_str(&self) -> &'static str {
        match self {
            Shift::Lunch => "lunch",
            Shift::Dinner => "dinner",
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Shift {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lunch" => Ok(Shift::Lunch),
            "dinner" => Ok(Shift::Dinner),
            other => Err(format!("Unknown shift: {}", other)),
        }
    }
}

/// 预订阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStage {
    Confirmed,
    Pending,
    Cancelled,
}

impl ReservationStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStage::Confirmed => "confirmed",
            ReservationStage::Pending => "pending",
            ReservationStage::Cancelled => "cancelled",
        }
    }
}

/// Reservation entity (预订记录)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub date: NaiveDate,
    pub shift: Shift,
    pub party_size: i32,
    /// 分隔符拼接的桌号列表 (legacy 编码，";" 规范分隔符)
    pub tables: String,
    pub stage: ReservationStage,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

/// Create reservation payload — API 边界使用结构化桌号列表
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationCreate {
    pub date: NaiveDate,
    pub shift: Shift,
    pub party_size: i32,
    pub tables: Vec<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

/// 已确认预订的占用视图 — repository 边界解析后的结构化形态
///
/// 建议计算只消费这个类型，永远不接触 legacy `tables` 字符串。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmedReservation {
    pub id: String,
    pub party_size: i32,
    pub table_codes: Vec<String>,
}
