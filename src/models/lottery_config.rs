use chrono::{DateTime, Utc};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Prize;

/// 抽奖配置：一组有序奖品
/// 约束: prizes 中的 code 唯一（由创建/修改配置的一方保证）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LotteryConfig {
    pub id: String,
    #[schema(example = "Spring Draw")]
    pub title: String,
    /// 顺序即展示/编辑顺序
    pub prizes: Vec<Prize>,
    pub created_at: DateTime<Utc>,
    /// 内置配置（不可删除）；缺省等同于 false
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_system: Option<bool>,
}

impl LotteryConfig {
    pub fn new(id: impl Into<String>, title: impl Into<String>, prizes: Vec<Prize>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            prizes,
            created_at: Utc::now(),
            is_system: None,
        }
    }

    pub fn is_system(&self) -> bool {
        self.is_system.unwrap_or(false)
    }

    /// 奖品副本，original_index 设为当前位置
    pub fn indexed_prizes(&self) -> Vec<Prize> {
        self.prizes
            .iter()
            .enumerate()
            .map(|(i, p)| p.clone().with_original_index(i as u32))
            .collect()
    }

    /// 按概率从高到低排序（稳定排序）
    pub fn sorted_by_probability(&self) -> Vec<Prize> {
        let mut prizes = self.indexed_prizes();
        prizes.sort_by(|a, b| b.probability.total_cmp(&a.probability));
        prizes
    }

    pub fn shuffled_prizes<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Prize> {
        let mut prizes = self.indexed_prizes();
        prizes.shuffle(rng);
        prizes
    }
}

/// 奖品展示顺序
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PrizeOrder {
    #[default]
    Configured,
    Probability,
    Shuffled,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PrizeOrderQuery {
    pub order: Option<PrizeOrder>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateConfigRequest {
    #[schema(example = "Spring Draw")]
    pub title: String,
    #[serde(default)]
    pub prizes: Vec<Prize>,
}

/// 替换配置的标题与奖品（id / createdAt / isSystem 保持不变）
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateConfigRequest {
    pub title: String,
    #[serde(default)]
    pub prizes: Vec<Prize>,
}
