use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{LotteryConfig, Prize};
use crate::utils::generate_record_id;

/// 抽奖记录实体
/// 说明:
/// - 每次抽奖产生一条记录
/// - prize 为抽奖时的奖品快照（值拷贝），配置后续修改或删除后记录仍可回溯
/// - config_id 仅引用配置，不拥有配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LotteryRecord {
    pub id: String,
    pub config_id: String,
    pub prize: Prize,
    pub timestamp: DateTime<Utc>,
}

impl LotteryRecord {
    pub fn from_draw(config: &LotteryConfig, prize: &Prize) -> Self {
        Self {
            id: generate_record_id(),
            config_id: config.id.clone(),
            prize: prize.clone(),
            timestamp: Utc::now(),
        }
    }
}

/// 抽奖记录查询参数
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct RecordQuery {
    /// 仅查询某个配置的记录
    pub config_id: Option<String>,
    /// 页码 (默认 1)
    pub page: Option<u32>,
    /// 每页数量 (默认 20)
    pub per_page: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct ClearRecordsQuery {
    pub config_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClearRecordsResponse {
    pub removed: usize,
}
