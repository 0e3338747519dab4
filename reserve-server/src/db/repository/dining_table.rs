//! Dining Table Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{DiningTable, DiningTableCreate, DiningTableUpdate};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "dining_table";

#[derive(Clone)]
pub struct DiningTableRepository {
    base: BaseRepository,
}

impl DiningTableRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all dining tables (including structurally disabled ones)
    pub async fn find_all(&self) -> RepoResult<Vec<DiningTable>> {
        let tables: Vec<DiningTable> = self
            .base
            .db()
            .query("SELECT * FROM dining_table ORDER BY code")
            .await?
            .take(0)?;
        Ok(tables)
    }

    /// Find all structurally available tables — 建议计算的库存快照
    pub async fn find_available(&self) -> RepoResult<Vec<DiningTable>> {
        let tables: Vec<DiningTable> = self
            .base
            .db()
            .query("SELECT * FROM dining_table WHERE available = true ORDER BY code")
            .await?
            .take(0)?;
        Ok(tables)
    }

    /// Find table by its unique code
    pub async fn find_by_code(&self, code: &str) -> RepoResult<Option<DiningTable>> {
        let id = RecordId::from_table_key(TABLE, code);
        let table: Option<DiningTable> = self.base.db().select(id).await?;
        Ok(table)
    }

    /// Create a new dining table
    ///
    /// 桌号作为记录 key，重复桌号直接拒绝。
    /// 指向不存在桌台的 `join_partner` 只记 warning，不拒绝 —
    /// 管理端常先建一半再建另一半。
    pub async fn create(&self, data: DiningTableCreate) -> RepoResult<DiningTable> {
        if data.code.trim().is_empty() {
            return Err(RepoError::Validation("Table code must not be empty".into()));
        }
        let capacity = data.capacity.unwrap_or(4);
        if capacity < 1 {
            return Err(RepoError::Validation(format!(
                "Capacity must be positive, got {}",
                capacity
            )));
        }
        if data.join_partner.as_deref() == Some(data.code.as_str()) {
            return Err(RepoError::Validation(format!(
                "Table '{}' cannot declare itself as join partner",
                data.code
            )));
        }

        if self.find_by_code(&data.code).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Table '{}' already exists",
                data.code
            )));
        }

        if let Some(partner) = &data.join_partner
            && self.find_by_code(partner).await?.is_none()
        {
            tracing::warn!(
                table = %data.code,
                partner = %partner,
                "Join partner does not exist yet"
            );
        }

        let table = DiningTable {
            id: None,
            code: data.code.clone(),
            zone: data.zone,
            capacity,
            available: true,
            can_join: data.can_join,
            join_partner: data.join_partner,
            personal_events: data.personal_events,
            corporate_events: data.corporate_events,
            events_only: data.events_only,
        };

        let id = RecordId::from_table_key(TABLE, data.code.as_str());
        let created: Option<DiningTable> = self.base.db().create(id).content(table).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create dining table".to_string()))
    }

    /// Update a dining table
    pub async fn update(&self, code: &str, data: DiningTableUpdate) -> RepoResult<DiningTable> {
        let existing = self
            .find_by_code(code)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Table '{}' not found", code)))?;

        let capacity = data.capacity.unwrap_or(existing.capacity);
        if capacity < 1 {
            return Err(RepoError::Validation(format!(
                "Capacity must be positive, got {}",
                capacity
            )));
        }

        let join_partner = match data.join_partner {
            Some(partner) => partner,
            None => existing.join_partner,
        };
        if join_partner.as_deref() == Some(code) {
            return Err(RepoError::Validation(format!(
                "Table '{}' cannot declare itself as join partner",
                code
            )));
        }

        // 手动构建 UPDATE 语句，避免 id 被重新序列化进记录
        let zone = data.zone.unwrap_or(existing.zone);
        let available = data.available.unwrap_or(existing.available);
        let can_join = data.can_join.unwrap_or(existing.can_join);
        let personal_events = data.personal_events.unwrap_or(existing.personal_events);
        let corporate_events = data.corporate_events.unwrap_or(existing.corporate_events);
        let events_only = data.events_only.unwrap_or(existing.events_only);

        let id = RecordId::from_table_key(TABLE, code);
        self.base
            .db()
            .query(
                "UPDATE $thing SET zone = $zone, capacity = $capacity, available = $available, \
                 can_join = $can_join, join_partner = $join_partner, \
                 personal_events = $personal_events, corporate_events = $corporate_events, \
                 events_only = $events_only",
            )
            .bind(("thing", id))
            .bind(("zone", zone))
            .bind(("capacity", capacity))
            .bind(("available", available))
            .bind(("can_join", can_join))
            .bind(("join_partner", join_partner))
            .bind(("personal_events", personal_events))
            .bind(("corporate_events", corporate_events))
            .bind(("events_only", events_only))
            .await?;

        self.find_by_code(code)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Table '{}' not found", code)))
    }

    /// Hard delete a dining table
    pub async fn delete(&self, code: &str) -> RepoResult<bool> {
        let id = RecordId::from_table_key(TABLE, code);
        let deleted: Option<DiningTable> = self.base.db().delete(id).await?;
        Ok(deleted.is_some())
    }
}
