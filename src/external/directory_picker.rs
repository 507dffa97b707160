use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;

use crate::config::DirectoryConfig;
use crate::error::{AppError, AppResult};
use crate::models::{AccessMode, DirectoryPickerOptions, StartIn};
use crate::utils::validate_file_name;

/// 已选择目录的句柄，用于导出/导入文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryHandle {
    pub name: String,
    pub path: PathBuf,
    pub mode: AccessMode,
}

impl DirectoryHandle {
    pub fn new(path: impl Into<PathBuf>, mode: AccessMode) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { name, path, mode }
    }

    pub fn is_writable(&self) -> bool {
        self.mode == AccessMode::ReadWrite
    }

    fn file_path(&self, file_name: &str) -> AppResult<PathBuf> {
        validate_file_name(file_name)?;
        Ok(self.path.join(file_name.trim()))
    }

    pub async fn read_file(&self, file_name: &str) -> AppResult<Vec<u8>> {
        let path = self.file_path(file_name)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(AppError::NotFound(
                format!("File {file_name} not found in {}", self.name),
            )),
            Err(e) => Err(e.into()),
        }
    }

    /// 写文件需要 readwrite 权限
    pub async fn write_file(&self, file_name: &str, contents: &[u8]) -> AppResult<()> {
        if !self.is_writable() {
            return Err(AppError::PermissionDenied);
        }
        let path = self.file_path(file_name)?;
        tokio::fs::write(&path, contents).await?;
        log::debug!("Wrote {} bytes to {}", contents.len(), path.display());
        Ok(())
    }

    /// 目录内的普通文件名（排序后）
    pub async fn list_files(&self) -> AppResult<Vec<String>> {
        let mut entries = tokio::fs::read_dir(&self.path).await?;
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }
}

/// 目录选择能力。调用可能挂起直到用户完成选择，也可能失败或被取消。
#[async_trait]
pub trait DirectoryPicker: Send + Sync {
    async fn show_directory_picker(
        &self,
        options: DirectoryPickerOptions,
    ) -> AppResult<DirectoryHandle>;
}

/// 运行环境是否提供目录选择
#[derive(Clone)]
pub enum DirectoryCapability {
    Available(Arc<dyn DirectoryPicker>),
    Unavailable,
}

impl DirectoryCapability {
    pub fn from_config(config: &DirectoryConfig) -> Self {
        if config.enabled {
            DirectoryCapability::Available(Arc::new(LocalDirectoryPicker::new(
                &config.root,
                config.default_start_in,
            )))
        } else {
            DirectoryCapability::Unavailable
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, DirectoryCapability::Available(_))
    }

    pub async fn pick(&self, options: DirectoryPickerOptions) -> AppResult<DirectoryHandle> {
        match self {
            DirectoryCapability::Available(picker) => picker.show_directory_picker(options).await,
            DirectoryCapability::Unavailable => Err(AppError::CapabilityUnavailable(
                "Directory picker is not available in this environment".to_string(),
            )),
        }
    }
}

impl std::fmt::Debug for DirectoryCapability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DirectoryCapability::Available(_) => write!(f, "DirectoryCapability::Available"),
            DirectoryCapability::Unavailable => write!(f, "DirectoryCapability::Unavailable"),
        }
    }
}

/// 基于本地文件系统的目录选择：
/// 常用位置映射为 `<root>/<Desktop|Documents|...>`，不需要交互。
#[derive(Debug, Clone)]
pub struct LocalDirectoryPicker {
    root: PathBuf,
    default_start_in: StartIn,
}

impl LocalDirectoryPicker {
    pub fn new(root: impl AsRef<Path>, default_start_in: StartIn) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            default_start_in,
        }
    }

    pub fn location(&self, start_in: StartIn) -> PathBuf {
        self.root.join(start_in.folder_name())
    }
}

#[async_trait]
impl DirectoryPicker for LocalDirectoryPicker {
    async fn show_directory_picker(
        &self,
        options: DirectoryPickerOptions,
    ) -> AppResult<DirectoryHandle> {
        let mode = options.access_mode();
        let start_in = options.start_in.unwrap_or(self.default_start_in);
        let path = self.location(start_in);

        match mode {
            AccessMode::ReadWrite => {
                tokio::fs::create_dir_all(&path).await?;
            }
            AccessMode::Read => match tokio::fs::metadata(&path).await {
                Ok(meta) if meta.is_dir() => {}
                Ok(_) => {
                    return Err(AppError::Cancelled(format!(
                        "{} is not a directory",
                        path.display()
                    )));
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    // 没有可选目录，等同于用户取消
                    return Err(AppError::Cancelled(format!(
                        "No {start_in} directory to pick"
                    )));
                }
                Err(e) => return Err(e.into()),
            },
        }

        log::info!("Picked directory {} ({mode})", path.display());
        Ok(DirectoryHandle::new(path, mode))
    }
}
