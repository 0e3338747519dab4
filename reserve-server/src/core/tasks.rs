//! 后台任务
//!
//! 目前只有一个定时任务：缓存清扫器，定期清除过期但未再被访问的
//! 快照缓存条目。通过 `CancellationToken` 响应关机信号。

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::core::ServerState;

/// 清扫间隔
const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// 启动缓存清扫定时任务
pub fn spawn_cache_sweeper(state: ServerState, shutdown: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        tracing::info!("Cache sweeper started");

        loop {
            tokio::select! {
                _ = tokio::time::sleep(SWEEP_INTERVAL) => {
                    let removed = state.suggestions.sweep_cache();
                    if removed > 0 {
                        tracing::debug!(removed, "Swept expired cache entries");
                    }
                }
                // 关机信号
                _ = shutdown.cancelled() => {
                    tracing::info!("Cache sweeper received shutdown signal");
                    return;
                }
            }
        }
    })
}
