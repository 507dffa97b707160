use actix_web::web;

use crate::config::Config;
use crate::database::LotteryStore;
use crate::external::DirectoryCapability;
use crate::handlers;
use crate::services::*;

/// 所有服务共享同一个存储，可廉价克隆
#[derive(Clone)]
pub struct AppState {
    pub config_service: ConfigService,
    pub draw_service: DrawService,
    pub feedback_service: FeedbackService,
    pub export_service: ExportService,
}

impl AppState {
    pub fn new(store: LotteryStore, config: &Config, capability: DirectoryCapability) -> Self {
        Self {
            config_service: ConfigService::new(store.clone()),
            draw_service: DrawService::new(store.clone()),
            feedback_service: FeedbackService::new(store.clone(), &config.feedback),
            export_service: ExportService::new(store, capability, &config.feedback),
        }
    }

    /// 注册服务与 /api/v1 路由
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.config_service.clone()))
            .app_data(web::Data::new(self.draw_service.clone()))
            .app_data(web::Data::new(self.feedback_service.clone()))
            .app_data(web::Data::new(self.export_service.clone()))
            .service(
                web::scope("/api/v1")
                    .configure(handlers::lottery_config_config)
                    .configure(handlers::draw_config)
                    .configure(handlers::feedback_config)
                    .configure(handlers::export_config),
            );
    }
}
