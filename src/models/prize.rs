use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 奖品（一次抽奖可能的结果）
/// - probability: 非负权重，同一配置下的权重之和不要求为 1
/// - original_index: 排序/打乱展示前的位置，无意义时缺省
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Prize {
    /// 奖品代码（同一配置内唯一）
    #[schema(example = "P1")]
    pub code: String,
    #[schema(example = "Gift Card")]
    pub name: String,
    pub probability: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_index: Option<u32>,
}

impl Prize {
    pub fn new(code: impl Into<String>, name: impl Into<String>, probability: f64) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            probability,
            original_index: None,
        }
    }

    pub fn with_original_index(mut self, index: u32) -> Self {
        self.original_index = Some(index);
        self
    }

    /// 权重为 0 的奖品永远不会被抽中
    pub fn is_drawable(&self) -> bool {
        self.probability.is_finite() && self.probability > 0.0
    }
}

/// 把展示用的奖品列表恢复为原始顺序，并清除 original_index。
/// 没有 original_index 的奖品保持相对顺序排在末尾。
pub fn restore_original_order(prizes: &mut [Prize]) {
    prizes.sort_by_key(|p| match p.original_index {
        Some(i) => (0u8, i),
        None => (1u8, 0),
    });
    for p in prizes.iter_mut() {
        p.original_index = None;
    }
}
