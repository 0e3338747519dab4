//! Reservation Repository
//!
//! 预订台账的读写边界。legacy 的分隔符拼接桌号编码 ("M2;M3")
//! 只在这里做一次解析/编码，算法层永远只见结构化列表。

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{
    ConfirmedReservation, Reservation, ReservationCreate, ReservationStage, Shift,
};
use chrono::NaiveDate;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "reservation";

/// 规范分隔符 (兼容旧数据中的 ",")
const CODE_SEPARATOR: char = ';';

/// 解析 legacy 桌号字符串为结构化列表
///
/// 空片段 (如 "M2;;M3" 或结尾分隔符) 直接丢弃。
pub fn parse_table_codes(raw: &str) -> Vec<String> {
    raw.split([CODE_SEPARATOR, ','])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// 编码结构化列表为 legacy 桌号字符串
pub fn encode_table_codes(codes: &[String]) -> String {
    codes.join(";")
}

#[derive(Clone)]
pub struct ReservationRepository {
    base: BaseRepository,
}

impl ReservationRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all reservations, newest date first
    pub async fn find_all(&self) -> RepoResult<Vec<Reservation>> {
        let reservations: Vec<Reservation> = self
            .base
            .db()
            .query("SELECT * FROM reservation ORDER BY date DESC")
            .await?
            .take(0)?;
        Ok(reservations)
    }

    /// Find all reservations for a calendar date
    pub async fn find_by_date(&self, date: NaiveDate) -> RepoResult<Vec<Reservation>> {
        let reservations: Vec<Reservation> = self
            .base
            .db()
            .query("SELECT * FROM reservation WHERE date = $date ORDER BY shift")
            .bind(("date", date))
            .await?
            .take(0)?;
        Ok(reservations)
    }

    /// Find reservation by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Reservation>> {
        let thing = RecordId::from_table_key(TABLE, id);
        let reservation: Option<Reservation> = self.base.db().select(thing).await?;
        Ok(reservation)
    }

    /// Find confirmed reservations for a date/shift (raw records)
    pub async fn find_confirmed(
        &self,
        date: NaiveDate,
        shift: Shift,
    ) -> RepoResult<Vec<Reservation>> {
        let reservations: Vec<Reservation> = self
            .base
            .db()
            .query(
                "SELECT * FROM reservation \
                 WHERE date = $date AND shift = $shift AND stage = 'confirmed'",
            )
            .bind(("date", date))
            .bind(("shift", shift.as_str()))
            .await?
            .take(0)?;
        Ok(reservations)
    }

    /// 日期/时段的已确认占用快照 — legacy 编码在此解析为结构化列表
    pub async fn find_confirmed_tables(
        &self,
        date: NaiveDate,
        shift: Shift,
    ) -> RepoResult<Vec<ConfirmedReservation>> {
        let reservations = self.find_confirmed(date, shift).await?;
        Ok(reservations
            .into_iter()
            .map(|r| {
                let id = r
                    .id
                    .as_ref()
                    .map(|t| t.key().to_string())
                    .unwrap_or_default();
                let table_codes = parse_table_codes(&r.tables);
                if table_codes.is_empty() {
                    tracing::warn!(
                        reservation = %id,
                        raw = %r.tables,
                        "Confirmed reservation carries no parseable table codes"
                    );
                }
                ConfirmedReservation {
                    id,
                    party_size: r.party_size,
                    table_codes,
                }
            })
            .collect())
    }

    /// Create a reservation (confirmed)
    ///
    /// 提交前重新校验占用：请求的任一桌台已被同日期/时段的已确认预订
    /// 持有时整单拒绝。建议与落座之间没有锁，这一步是唯一的冲突闸门。
    pub async fn create(&self, data: ReservationCreate) -> RepoResult<Reservation> {
        if data.party_size < 1 {
            return Err(RepoError::Validation(format!(
                "Party size must be positive, got {}",
                data.party_size
            )));
        }
        if data.tables.is_empty() {
            return Err(RepoError::Validation(
                "Reservation must reference at least one table".into(),
            ));
        }

        // Commit-time conflict re-check
        let occupied = self.find_confirmed_tables(data.date, data.shift).await?;
        for code in &data.tables {
            if occupied.iter().any(|r| r.table_codes.contains(code)) {
                return Err(RepoError::Duplicate(format!(
                    "Table '{}' is already reserved for {} {}",
                    code, data.date, data.shift
                )));
            }
        }

        let reservation = Reservation {
            id: None,
            date: data.date,
            shift: data.shift,
            party_size: data.party_size,
            tables: encode_table_codes(&data.tables),
            stage: ReservationStage::Confirmed,
            customer_name: data.customer_name,
            note: data.note,
        };

        let created: Option<Reservation> = self
            .base
            .db()
            .create(TABLE)
            .content(reservation)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create reservation".to_string()))
    }

    /// Cancel a reservation — 桌台立即释放回建议池
    pub async fn cancel(&self, id: &str) -> RepoResult<Reservation> {
        if self.find_by_id(id).await?.is_none() {
            return Err(RepoError::NotFound(format!("Reservation {} not found", id)));
        }

        let thing = RecordId::from_table_key(TABLE, id);
        self.base
            .db()
            .query("UPDATE $thing SET stage = $stage")
            .bind(("thing", thing))
            .bind(("stage", ReservationStage::Cancelled.as_str()))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Reservation {} not found", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_table_codes_canonical() {
        assert_eq!(parse_table_codes("M2;M3"), vec!["M2", "M3"]);
    }

    #[test]
    fn test_parse_table_codes_legacy_comma() {
        assert_eq!(parse_table_codes("M2, M3"), vec!["M2", "M3"]);
    }

    #[test]
    fn test_parse_table_codes_drops_empty_fragments() {
        assert_eq!(parse_table_codes("M2;;M3;"), vec!["M2", "M3"]);
        assert_eq!(parse_table_codes("  "), Vec::<String>::new());
    }

    #[test]
    fn test_encode_round_trip() {
        let codes = vec!["M2".to_string(), "M3".to_string()];
        assert_eq!(parse_table_codes(&encode_table_codes(&codes)), codes);
    }
}
