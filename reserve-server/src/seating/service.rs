//! Suggestion Service
//!
//! 把两个快照读取 (桌台库存、已确认预订) 和纯函数管线
//! (过滤 → 组合 → 排序) 粘合成一次请求级计算。
//!
//! 每次调用都在自己的快照上工作，无共享可变状态；两个读取用
//! `try_join!` 并发发出，任一失败整个请求失败 —
//! 绝不在不完整的候选集上做排序。

use crate::core::Config;
use crate::db::models::{DiningTable, Shift};
use crate::db::repository::{DiningTableRepository, RepoResult, ReservationRepository};
use crate::seating::availability::{UsageCategory, filter_available};
use crate::seating::cache::{Clock, SystemClock, TtlCache};
use crate::seating::resolver::{self, Solution};
use crate::utils::{AppError, AppResult};
use chrono::NaiveDate;
use std::sync::Arc;
use std::time::Duration;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

/// 库存快照在缓存里的唯一键
const INVENTORY_KEY: &str = "inventory";

/// Table suggestion service
pub struct SuggestionService {
    tables: DiningTableRepository,
    reservations: ReservationRepository,
    /// 库存快照缓存。预订快照永不缓存：占用正确性优先于查询延迟。
    inventory_cache: TtlCache<&'static str, Vec<DiningTable>>,
    max_suggestions: usize,
}

impl SuggestionService {
    pub fn new(db: Surreal<Db>, config: &Config) -> Self {
        Self::with_clock(db, config, Arc::new(SystemClock))
    }

    /// Create the service with an injected clock (测试用)
    pub fn with_clock(db: Surreal<Db>, config: &Config, clock: Arc<dyn Clock>) -> Self {
        Self {
            tables: DiningTableRepository::new(db.clone()),
            reservations: ReservationRepository::new(db),
            inventory_cache: TtlCache::with_clock(
                Duration::from_millis(config.inventory_cache_ttl_ms),
                clock,
            ),
            max_suggestions: config.max_suggestions,
        }
    }

    /// 计算指定日期/时段/人数/用途下的座位方案
    ///
    /// 空列表是正常的"无空位"结果；只有底层快照不可读才报错。
    pub async fn suggest(
        &self,
        date: NaiveDate,
        shift: Shift,
        party_size: i32,
        category: UsageCategory,
    ) -> AppResult<Vec<Solution>> {
        if party_size < 1 {
            return Err(AppError::validation(format!(
                "Party size must be positive, got {}",
                party_size
            )));
        }

        let (inventory, confirmed) = tokio::try_join!(
            self.load_inventory(),
            self.reservations.find_confirmed_tables(date, shift),
        )
        .map_err(AppError::from)?;

        let eligible = filter_available(inventory, &confirmed, category);
        let solutions = resolver::suggest(&eligible, party_size, self.max_suggestions);

        tracing::debug!(
            %date,
            %shift,
            party_size,
            category = %category,
            solutions = solutions.len(),
            "Suggestion computed"
        );

        Ok(solutions)
    }

    /// 读取库存快照，优先走缓存
    async fn load_inventory(&self) -> RepoResult<Vec<DiningTable>> {
        if let Some(tables) = self.inventory_cache.get(&INVENTORY_KEY) {
            return Ok(tables);
        }
        let tables = self.tables.find_available().await?;
        self.inventory_cache.insert(INVENTORY_KEY, tables.clone());
        Ok(tables)
    }

    /// 桌台 CRUD 之后使库存快照失效
    pub fn invalidate_inventory(&self) {
        self.inventory_cache.invalidate(&INVENTORY_KEY);
    }

    /// 清除所有过期缓存条目 (后台 sweep 任务调用)
    pub fn sweep_cache(&self) -> usize {
        self.inventory_cache.sweep()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::db::models::DiningTableCreate;
    use crate::seating::cache::ManualClock;

    fn make_create(code: &str, capacity: i32) -> DiningTableCreate {
        DiningTableCreate {
            code: code.to_string(),
            zone: "salon".to_string(),
            capacity: Some(capacity),
            can_join: false,
            join_partner: None,
            personal_events: false,
            corporate_events: false,
            events_only: false,
        }
    }

    fn test_config() -> Config {
        Config {
            work_dir: "/tmp/mesa-test".to_string(),
            http_port: 0,
            environment: "development".to_string(),
            inventory_cache_ttl_ms: 5000,
            max_suggestions: 5,
        }
    }

    #[tokio::test]
    async fn test_inventory_snapshot_expires_with_injected_clock() {
        let db = DbService::memory().await.unwrap().db;
        let clock = Arc::new(ManualClock::new());
        let service = SuggestionService::with_clock(db.clone(), &test_config(), clock.clone());

        let repo = DiningTableRepository::new(db);
        repo.create(make_create("M1", 4)).await.unwrap();

        let date = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        let first = service
            .suggest(date, Shift::Dinner, 2, UsageCategory::Personal)
            .await
            .unwrap();
        assert_eq!(first.len(), 1);

        // 缓存未过期：绕过缓存失效直接加桌，快照不变
        repo.create(make_create("M2", 4)).await.unwrap();
        let cached = service
            .suggest(date, Shift::Dinner, 2, UsageCategory::Personal)
            .await
            .unwrap();
        assert_eq!(cached.len(), 1);

        // TTL 过后重新读库
        clock.advance(Duration::from_millis(5000));
        let refreshed = service
            .suggest(date, Shift::Dinner, 2, UsageCategory::Personal)
            .await
            .unwrap();
        assert_eq!(refreshed.len(), 2);
    }

    #[tokio::test]
    async fn test_invalidate_inventory_forces_fresh_snapshot() {
        let db = DbService::memory().await.unwrap().db;
        let service = SuggestionService::new(db.clone(), &test_config());

        let repo = DiningTableRepository::new(db);
        repo.create(make_create("M1", 4)).await.unwrap();

        let date = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        service
            .suggest(date, Shift::Dinner, 2, UsageCategory::Personal)
            .await
            .unwrap();

        repo.create(make_create("M2", 4)).await.unwrap();
        service.invalidate_inventory();

        let refreshed = service
            .suggest(date, Shift::Dinner, 2, UsageCategory::Personal)
            .await
            .unwrap();
        assert_eq!(refreshed.len(), 2);
    }

    #[tokio::test]
    async fn test_rejects_non_positive_party_size() {
        let db = DbService::memory().await.unwrap().db;
        let service = SuggestionService::new(db, &test_config());

        let date = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        let err = service
            .suggest(date, Shift::Dinner, 0, UsageCategory::Personal)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
