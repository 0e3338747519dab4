//! Availability Filter
//!
//! 从桌台快照和已确认预订快照计算指定日期/时段下
//! 物理空闲且符合用途类别的候选桌台集合。纯函数，无副作用。

use crate::db::models::{ConfirmedReservation, DiningTable};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// 用途类别 — 约束哪些桌台可被选中
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageCategory {
    #[default]
    Personal,
    Corporate,
    Event,
}

impl UsageCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            UsageCategory::Personal => "personal",
            UsageCategory::Corporate => "corporate",
            UsageCategory::Event => "event",
        }
    }
}

impl fmt::Display for UsageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UsageCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "personal" => Ok(UsageCategory::Personal),
            "corporate" => Ok(UsageCategory::Corporate),
            "event" => Ok(UsageCategory::Event),
            other => Err(format!("Unknown usage category: {}", other)),
        }
    }
}

/// Check if a table is eligible for the requested usage category
///
/// - `event`: 任一活动标记为 true 即可
/// - `corporate`: 排除 events_only；排除仅限私人 (personal 且非 corporate)
/// - `personal`: 排除 events_only
pub fn matches_usage(table: &DiningTable, category: UsageCategory) -> bool {
    match category {
        UsageCategory::Event => {
            table.personal_events || table.corporate_events || table.events_only
        }
        UsageCategory::Corporate => {
            !table.events_only && !(table.personal_events && !table.corporate_events)
        }
        UsageCategory::Personal => !table.events_only,
    }
}

/// 计算空闲且类别合格的候选桌台
///
/// 预订中引用了快照之外桌号的记录只记 warning 并跳过该桌号，
/// 绝不中断整个计算。输出保持输入顺序，保证确定性。
pub fn filter_available(
    tables: Vec<DiningTable>,
    reservations: &[ConfirmedReservation],
    category: UsageCategory,
) -> Vec<DiningTable> {
    let known: HashSet<&str> = tables.iter().map(|t| t.code.as_str()).collect();

    let mut occupied: HashSet<String> = HashSet::new();
    for reservation in reservations {
        for code in &reservation.table_codes {
            if !known.contains(code.as_str()) {
                tracing::warn!(
                    reservation = %reservation.id,
                    table = %code,
                    "Reservation references unknown table code, skipping"
                );
                continue;
            }
            occupied.insert(code.clone());
        }
    }

    tables
        .into_iter()
        .filter(|t| t.available)
        .filter(|t| !occupied.contains(&t.code))
        .filter(|t| matches_usage(t, category))
        .collect()
}
