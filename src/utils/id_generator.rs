use chrono::{DateTime, Utc};
use uuid::Uuid;

/// 生成抽奖配置ID
pub fn generate_config_id() -> String {
    Uuid::new_v4().to_string()
}

/// 生成抽奖记录ID
pub fn generate_record_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// 默认导出文件名: lottery-export-YYYYMMDDHHMMSS.json
pub fn export_file_name(at: DateTime<Utc>) -> String {
    format!("lottery-export-{}.json", at.format("%Y%m%d%H%M%S"))
}
