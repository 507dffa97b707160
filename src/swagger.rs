use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::lottery_config::list_configs,
        handlers::lottery_config::create_config,
        handlers::lottery_config::get_config,
        handlers::lottery_config::replace_config,
        handlers::lottery_config::delete_config,
        handlers::lottery_config::get_display_prizes,
        handlers::draw::draw,
        handlers::draw::get_records,
        handlers::draw::clear_records,
        handlers::feedback::list_feedback,
        handlers::feedback::submit_feedback,
        handlers::feedback::delete_feedback,
        handlers::export::export_data,
        handlers::export::import_data,
        handlers::export::list_import_files,
    ),
    components(
        schemas(
            Prize,
            PrizeOrder,
            LotteryConfig,
            CreateConfigRequest,
            UpdateConfigRequest,
            LotteryRecord,
            ClearRecordsResponse,
            Feedback,
            SubmitFeedbackRequest,
            AccessMode,
            StartIn,
            DirectoryPickerOptions,
            ExportRequest,
            ImportRequest,
            ExportSummary,
            ImportSummary,
            ImportFilesQuery,
            ImportFileList,
            ApiError,
        )
    ),
    tags(
        (name = "config", description = "Lottery config API"),
        (name = "draw", description = "Draw and draw history API"),
        (name = "feedback", description = "Feedback API"),
        (name = "export", description = "Export / import API"),
    ),
    info(
        title = "Lottery Backend API",
        version = "1.0.0",
        description = "Lottery draw backend REST API documentation"
    ),
    servers(
        (url = "/api/v1", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}
