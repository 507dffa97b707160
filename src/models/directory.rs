use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

/// 目录访问模式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AccessMode {
    #[default]
    Read,
    ReadWrite,
}

impl std::fmt::Display for AccessMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccessMode::Read => write!(f, "read"),
            AccessMode::ReadWrite => write!(f, "readwrite"),
        }
    }
}

/// 目录选择的建议起始位置（六个常用位置）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StartIn {
    Desktop,
    #[default]
    Documents,
    Downloads,
    Music,
    Pictures,
    Videos,
}

impl StartIn {
    /// 对应的目录名
    pub fn folder_name(&self) -> &'static str {
        match self {
            StartIn::Desktop => "Desktop",
            StartIn::Documents => "Documents",
            StartIn::Downloads => "Downloads",
            StartIn::Music => "Music",
            StartIn::Pictures => "Pictures",
            StartIn::Videos => "Videos",
        }
    }
}

impl std::fmt::Display for StartIn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartIn::Desktop => write!(f, "desktop"),
            StartIn::Documents => write!(f, "documents"),
            StartIn::Downloads => write!(f, "downloads"),
            StartIn::Music => write!(f, "music"),
            StartIn::Pictures => write!(f, "pictures"),
            StartIn::Videos => write!(f, "videos"),
        }
    }
}

impl FromStr for StartIn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "desktop" => Ok(StartIn::Desktop),
            "documents" => Ok(StartIn::Documents),
            "downloads" => Ok(StartIn::Downloads),
            "music" => Ok(StartIn::Music),
            "pictures" => Ok(StartIn::Pictures),
            "videos" => Ok(StartIn::Videos),
            other => Err(format!("unknown start location: {other}")),
        }
    }
}

/// 目录选择参数，两个字段均可缺省
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryPickerOptions {
    pub mode: Option<AccessMode>,
    pub start_in: Option<StartIn>,
}

impl DirectoryPickerOptions {
    pub fn new(mode: AccessMode, start_in: Option<StartIn>) -> Self {
        Self {
            mode: Some(mode),
            start_in,
        }
    }

    pub fn access_mode(&self) -> AccessMode {
        self.mode.unwrap_or_default()
    }
}
