use chrono::Utc;

use crate::config::FeedbackConfig;
use crate::database::{LotteryStore, is_builtin_config_id};
use crate::error::{AppError, AppResult};
use crate::external::DirectoryCapability;
use crate::models::*;
use crate::utils::{
    export_file_name, validate_config, validate_feedback_content, validate_feedback_ids,
    validate_file_name, validate_record,
};

/// 通过目录选择能力导出/导入全部数据（JSON）
#[derive(Clone)]
pub struct ExportService {
    store: LotteryStore,
    capability: DirectoryCapability,
    max_feedback_length: usize,
}

impl ExportService {
    pub fn new(
        store: LotteryStore,
        capability: DirectoryCapability,
        feedback: &FeedbackConfig,
    ) -> Self {
        Self {
            store,
            capability,
            max_feedback_length: feedback.max_content_length,
        }
    }

    pub fn is_available(&self) -> bool {
        self.capability.is_available()
    }

    /// 导出: 先生成快照，再选择目录并写文件（选择期间不持有锁）
    pub async fn export(&self, request: ExportRequest) -> AppResult<ExportSummary> {
        let now = Utc::now();
        let file_name = match request.file_name {
            Some(name) => {
                validate_file_name(&name)?;
                name.trim().to_string()
            }
            None => export_file_name(now),
        };

        let snapshot = self.store.snapshot().await;
        let bundle = ExportBundle {
            version: EXPORT_BUNDLE_VERSION,
            exported_at: now,
            configs: snapshot.configs,
            records: snapshot.records,
            feedback: snapshot.feedback,
        };
        let bytes = serde_json::to_vec_pretty(&bundle)?;

        let handle = self
            .capability
            .pick(DirectoryPickerOptions::new(
                AccessMode::ReadWrite,
                request.start_in,
            ))
            .await?;
        handle.write_file(&file_name, &bytes).await?;

        log::info!(
            "Exported {} configs, {} records, {} feedback to {}/{}",
            bundle.configs.len(),
            bundle.records.len(),
            bundle.feedback.len(),
            handle.name,
            file_name
        );

        Ok(ExportSummary {
            directory: handle.path.display().to_string(),
            file_name,
            configs: bundle.configs.len(),
            records: bundle.records.len(),
            feedback: bundle.feedback.len(),
        })
    }

    /// 列出所选目录中可导入的文件
    pub async fn list_import_files(&self, query: ImportFilesQuery) -> AppResult<ImportFileList> {
        let handle = self
            .capability
            .pick(DirectoryPickerOptions::new(AccessMode::Read, query.start_in))
            .await?;
        let files = handle
            .list_files()
            .await?
            .into_iter()
            .filter(|name| name.ends_with(".json"))
            .collect();

        Ok(ImportFileList {
            directory: handle.path.display().to_string(),
            files,
        })
    }

    /// 导入并合并:
    /// - 新配置直接加入；同 id 的用户配置被替换；同 id 的系统配置跳过
    /// - 已存在 id 的记录和反馈跳过
    pub async fn import(&self, request: ImportRequest) -> AppResult<ImportSummary> {
        validate_file_name(&request.file_name)?;

        let handle = self
            .capability
            .pick(DirectoryPickerOptions::new(AccessMode::Read, request.start_in))
            .await?;
        let bytes = handle.read_file(&request.file_name).await?;
        let bundle: ExportBundle = serde_json::from_slice(&bytes).map_err(|e| {
            AppError::ValidationError(format!(
                "Invalid export file {}: {e}",
                request.file_name
            ))
        })?;

        validate_bundle(&bundle, self.max_feedback_length)?;
        let summary = self.merge(bundle).await;

        log::info!(
            "Imported {} from {}: {:?}",
            request.file_name,
            handle.name,
            summary
        );
        Ok(summary)
    }

    async fn merge(&self, bundle: ExportBundle) -> ImportSummary {
        let mut summary = ImportSummary::default();
        let mut state = self.store.write().await;

        for mut config in bundle.configs {
            // 系统标记只保留给内置配置
            if !is_builtin_config_id(&config.id) {
                config.is_system = None;
            }
            match state.config_position(&config.id) {
                None => {
                    state.configs.push(config);
                    summary.configs_added += 1;
                }
                Some(pos) if state.configs[pos].is_system() => {
                    summary.configs_skipped += 1;
                }
                Some(pos) => {
                    state.configs[pos] = config;
                    summary.configs_replaced += 1;
                }
            }
        }

        for record in bundle.records {
            if state.has_record(&record.id) {
                summary.records_skipped += 1;
            } else {
                state.records.push(record);
                summary.records_added += 1;
            }
        }

        for feedback in bundle.feedback {
            if state.has_feedback(feedback.id) {
                summary.feedback_skipped += 1;
            } else {
                state.feedback.push(feedback);
                summary.feedback_added += 1;
            }
        }

        summary
    }
}

/// 导入前整体校验，任何一条不合法则整个文件拒绝
fn validate_bundle(bundle: &ExportBundle, max_feedback_length: usize) -> AppResult<()> {
    if bundle.version != EXPORT_BUNDLE_VERSION {
        return Err(AppError::ValidationError(format!(
            "Unsupported export version {}",
            bundle.version
        )));
    }

    let mut config_ids = std::collections::HashSet::new();
    for config in &bundle.configs {
        validate_config(config)?;
        if !config_ids.insert(config.id.as_str()) {
            return Err(AppError::Conflict(format!(
                "Duplicate config id in import: {}",
                config.id
            )));
        }
    }

    let mut record_ids = std::collections::HashSet::new();
    for record in &bundle.records {
        validate_record(record)?;
        if !record_ids.insert(record.id.as_str()) {
            return Err(AppError::Conflict(format!(
                "Duplicate record id in import: {}",
                record.id
            )));
        }
    }

    for feedback in &bundle.feedback {
        validate_feedback_content(&feedback.content, max_feedback_length)?;
    }
    validate_feedback_ids(&bundle.feedback)
}
