use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Feedback, LotteryConfig, LotteryRecord, StartIn};

pub const EXPORT_BUNDLE_VERSION: u32 = 1;

/// 导出文件内容
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExportBundle {
    pub version: u32,
    pub exported_at: DateTime<Utc>,
    #[serde(default)]
    pub configs: Vec<LotteryConfig>,
    #[serde(default)]
    pub records: Vec<LotteryRecord>,
    #[serde(default)]
    pub feedback: Vec<Feedback>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub start_in: Option<StartIn>,
    /// 缺省为 lottery-export-<时间>.json
    pub file_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImportRequest {
    pub start_in: Option<StartIn>,
    pub file_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImportFilesQuery {
    pub start_in: Option<StartIn>,
}

/// 可导入的 .json 文件
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ImportFileList {
    pub directory: String,
    pub files: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExportSummary {
    pub directory: String,
    pub file_name: String,
    pub configs: usize,
    pub records: usize,
    pub feedback: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub configs_added: usize,
    pub configs_replaced: usize,
    /// 与系统配置 id 冲突而跳过的数量
    pub configs_skipped: usize,
    pub records_added: usize,
    pub records_skipped: usize,
    pub feedback_added: usize,
    pub feedback_skipped: usize,
}
