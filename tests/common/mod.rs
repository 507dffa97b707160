use std::path::Path;
use std::sync::Arc;

use lottery_backend::config::Config;
use lottery_backend::database::{LotteryStore, seed_system_configs};
use lottery_backend::external::{DirectoryCapability, LocalDirectoryPicker};
use lottery_backend::models::StartIn;
use lottery_backend::AppState;

/// 带内置配置的测试状态，目录能力指向给定根目录（None 表示不可用）
pub async fn test_state(directory_root: Option<&Path>) -> AppState {
    let store = LotteryStore::new();
    seed_system_configs(&store).await.unwrap();

    let capability = match directory_root {
        Some(root) => DirectoryCapability::Available(Arc::new(LocalDirectoryPicker::new(
            root,
            StartIn::Documents,
        ))),
        None => DirectoryCapability::Unavailable,
    };

    AppState::new(store, &Config::default(), capability)
}
