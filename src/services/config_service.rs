use chrono::Utc;

use crate::database::LotteryStore;
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::utils::{generate_config_id, validate_config, validate_prizes, validate_title};

#[derive(Clone)]
pub struct ConfigService {
    store: LotteryStore,
}

impl ConfigService {
    pub fn new(store: LotteryStore) -> Self {
        Self { store }
    }

    /// 获取全部配置（系统配置在前，其余按创建时间）
    pub async fn list_configs(&self) -> AppResult<Vec<LotteryConfig>> {
        let mut list = self.store.read().await.configs.clone();
        list.sort_by(|a, b| {
            b.is_system()
                .cmp(&a.is_system())
                .then(a.created_at.cmp(&b.created_at))
        });
        Ok(list)
    }

    pub async fn get_config(&self, id: &str) -> AppResult<LotteryConfig> {
        self.store
            .read()
            .await
            .config(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Lottery config {id} not found")))
    }

    /// 创建用户配置（isSystem 缺省）
    pub async fn create_config(&self, request: CreateConfigRequest) -> AppResult<LotteryConfig> {
        let config = LotteryConfig {
            id: generate_config_id(),
            title: request.title.trim().to_string(),
            prizes: request.prizes,
            created_at: Utc::now(),
            is_system: None,
        };
        validate_config(&config)?;

        let mut state = self.store.write().await;
        if state.config(&config.id).is_some() {
            return Err(AppError::Conflict(format!(
                "Lottery config {} already exists",
                config.id
            )));
        }
        state.configs.push(config.clone());
        log::info!(
            "Created lottery config {} ({} prizes)",
            config.id,
            config.prizes.len()
        );
        Ok(config)
    }

    /// 用新值整体替换配置的标题与奖品
    pub async fn replace_config(
        &self,
        id: &str,
        request: UpdateConfigRequest,
    ) -> AppResult<LotteryConfig> {
        validate_title(&request.title)?;
        validate_prizes(&request.prizes)?;

        let mut state = self.store.write().await;
        let pos = state
            .config_position(id)
            .ok_or_else(|| AppError::NotFound(format!("Lottery config {id} not found")))?;

        let current = &state.configs[pos];
        if current.is_system() {
            return Err(AppError::Forbidden(format!(
                "System config {id} cannot be modified"
            )));
        }

        let replacement = LotteryConfig {
            id: current.id.clone(),
            title: request.title.trim().to_string(),
            prizes: request.prizes,
            created_at: current.created_at,
            is_system: current.is_system,
        };
        state.configs[pos] = replacement.clone();
        log::info!("Replaced lottery config {id}");
        Ok(replacement)
    }

    /// 删除配置。系统配置不可删除；已有抽奖记录保留。
    pub async fn delete_config(&self, id: &str) -> AppResult<()> {
        let mut state = self.store.write().await;
        let pos = state
            .config_position(id)
            .ok_or_else(|| AppError::NotFound(format!("Lottery config {id} not found")))?;

        if state.configs[pos].is_system() {
            return Err(AppError::Forbidden(format!(
                "System config {id} cannot be deleted"
            )));
        }
        state.configs.remove(pos);
        log::info!("Deleted lottery config {id}");
        Ok(())
    }

    /// 按指定顺序返回展示用奖品列表（带 originalIndex）
    pub async fn display_prizes(&self, id: &str, order: PrizeOrder) -> AppResult<Vec<Prize>> {
        let config = self.get_config(id).await?;
        let prizes = match order {
            PrizeOrder::Configured => config.indexed_prizes(),
            PrizeOrder::Probability => config.sorted_by_probability(),
            PrizeOrder::Shuffled => config.shuffled_prizes(&mut rand::thread_rng()),
        };
        Ok(prizes)
    }
}
