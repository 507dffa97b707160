use std::sync::Arc;

use chrono::{TimeZone, Utc};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::StorageConfig;
use crate::error::{AppError, AppResult};
use crate::models::{Feedback, LotteryConfig, LotteryRecord, Prize};
use crate::utils::validate_config;

pub const DEFAULT_SYSTEM_CONFIG_ID: &str = "default";

/// 内存中的全部数据
#[derive(Debug, Clone, Default)]
pub struct StoreState {
    pub configs: Vec<LotteryConfig>,
    pub records: Vec<LotteryRecord>,
    pub feedback: Vec<Feedback>,
}

impl StoreState {
    pub fn config(&self, id: &str) -> Option<&LotteryConfig> {
        self.configs.iter().find(|c| c.id == id)
    }

    pub fn config_position(&self, id: &str) -> Option<usize> {
        self.configs.iter().position(|c| c.id == id)
    }

    pub fn has_record(&self, id: &str) -> bool {
        self.records.iter().any(|r| r.id == id)
    }

    pub fn has_feedback(&self, id: u64) -> bool {
        self.feedback.iter().any(|f| f.id == id)
    }

    /// 下一个反馈ID（当前最大值 + 1，从 1 开始）
    pub fn next_feedback_id(&self) -> AppResult<u64> {
        self.feedback
            .iter()
            .map(|f| f.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| AppError::Conflict("Feedback id space exhausted".to_string()))
    }
}

/// 各服务共享的存储句柄
#[derive(Debug, Clone, Default)]
pub struct LotteryStore {
    state: Arc<RwLock<StoreState>>,
}

impl LotteryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: StoreState) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().await
    }

    /// 当前数据的完整副本
    pub async fn snapshot(&self) -> StoreState {
        self.state.read().await.clone()
    }
}

pub async fn create_store(config: &StorageConfig) -> AppResult<LotteryStore> {
    let store = LotteryStore::new();
    if config.seed_system_configs {
        let inserted = seed_system_configs(&store).await?;
        log::info!("Seeded {inserted} system lottery config(s)");
    }
    Ok(store)
}

/// 写入内置配置，已存在的 id 不覆盖
pub async fn seed_system_configs(store: &LotteryStore) -> AppResult<usize> {
    let mut state = store.write().await;
    let mut inserted = 0;
    for config in system_configs() {
        validate_config(&config)?;
        if state.config(&config.id).is_none() {
            state.configs.push(config);
            inserted += 1;
        }
    }
    Ok(inserted)
}

/// 是否为内置配置的 id
pub fn is_builtin_config_id(id: &str) -> bool {
    system_configs().iter().any(|c| c.id == id)
}

pub fn system_configs() -> Vec<LotteryConfig> {
    let created_at = Utc
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);

    vec![LotteryConfig {
        id: DEFAULT_SYSTEM_CONFIG_ID.to_string(),
        title: "Default Draw".to_string(),
        prizes: vec![
            Prize::new("P1", "First Prize", 0.05),
            Prize::new("P2", "Second Prize", 0.15),
            Prize::new("P3", "Third Prize", 0.3),
            Prize::new("P4", "Thank You", 0.5),
        ],
        created_at,
        is_system: Some(true),
    }]
}
