//! 快照缓存
//!
//! 显式构造的 TTL 缓存组件，替代进程级可变单例。
//! TTL 与时钟都由调用方注入，核心算法保持纯函数、测试不依赖真实时间。

use dashmap::DashMap;
use std::hash::Hash;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// 可注入时钟 — 生产用 [`SystemClock`]，测试用 [`ManualClock`]
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// 系统时钟
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// 手动推进的时钟 (测试用)
#[derive(Debug)]
pub struct ManualClock {
    now: std::sync::Mutex<Instant>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: std::sync::Mutex::new(Instant::now()),
        }
    }

    /// 将时钟向前推进
    pub fn advance(&self, delta: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += delta;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap()
    }
}

struct CacheEntry<V> {
    value: V,
    inserted_at: Instant,
}

/// 无锁并发 TTL 缓存
///
/// 条目在 `get` 时惰性失效；后台 sweep 任务定期调用 [`sweep`](TtlCache::sweep)
/// 清除过期但未再被访问的条目。
pub struct TtlCache<K, V> {
    entries: DashMap<K, CacheEntry<V>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Create a cache with the given TTL and the system clock
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    /// Create a cache with an injected clock
    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
            clock,
        }
    }

    /// Get a value if present and not expired
    pub fn get(&self, key: &K) -> Option<V> {
        let now = self.clock.now();
        let hit = self.entries.get(key).and_then(|entry| {
            if now.duration_since(entry.inserted_at) < self.ttl {
                Some(entry.value.clone())
            } else {
                None
            }
        });
        if hit.is_none() {
            // 惰性淘汰过期条目
            self.entries
                .remove_if(key, |_, entry| now.duration_since(entry.inserted_at) >= self.ttl);
        }
        hit
    }

    /// Insert or replace a value
    pub fn insert(&self, key: K, value: V) {
        self.entries.insert(
            key,
            CacheEntry {
                value,
                inserted_at: self.clock.now(),
            },
        );
    }

    /// Drop a single entry
    pub fn invalidate(&self, key: &K) {
        self.entries.remove(key);
    }

    /// Drop everything
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Remove all expired entries, returning how many were dropped
    pub fn sweep(&self) -> usize {
        let now = self.clock.now();
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| now.duration_since(entry.inserted_at) < self.ttl);
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
