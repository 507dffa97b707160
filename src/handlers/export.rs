use crate::models::*;
use crate::services::ExportService;
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    post,
    path = "/export",
    tag = "export",
    request_body = ExportRequest,
    responses(
        (status = 200, description = "导出成功", body = ExportSummary),
        (status = 400, description = "文件名非法或用户取消"),
        (status = 503, description = "当前环境不支持目录选择")
    )
)]
/// 导出全部配置、抽奖记录与反馈到所选目录
pub async fn export_data(
    service: web::Data<ExportService>,
    request: web::Json<ExportRequest>,
) -> Result<HttpResponse> {
    match service.export(request.into_inner()).await {
        Ok(summary) => Ok(HttpResponse::Ok().json(ApiResponse::success(summary))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/import",
    tag = "export",
    request_body = ImportRequest,
    responses(
        (status = 200, description = "导入成功", body = ImportSummary),
        (status = 400, description = "文件内容不合法或用户取消"),
        (status = 404, description = "文件不存在"),
        (status = 503, description = "当前环境不支持目录选择")
    )
)]
/// 从所选目录导入数据并合并（已存在的记录/反馈跳过，系统配置不覆盖）
pub async fn import_data(
    service: web::Data<ExportService>,
    request: web::Json<ImportRequest>,
) -> Result<HttpResponse> {
    match service.import(request.into_inner()).await {
        Ok(summary) => Ok(HttpResponse::Ok().json(ApiResponse::success(summary))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/import/files",
    tag = "export",
    params(
        ("startIn" = Option<StartIn>, Query, description = "常用位置，缺省使用配置的默认位置")
    ),
    responses(
        (status = 200, description = "获取可导入文件成功", body = ImportFileList),
        (status = 400, description = "用户取消"),
        (status = 503, description = "当前环境不支持目录选择")
    )
)]
pub async fn list_import_files(
    service: web::Data<ExportService>,
    query: web::Query<ImportFilesQuery>,
) -> Result<HttpResponse> {
    match service.list_import_files(query.into_inner()).await {
        Ok(listing) => Ok(HttpResponse::Ok().json(ApiResponse::success(listing))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn export_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/export", web::post().to(export_data))
        .route("/import", web::post().to(import_data))
        .route("/import/files", web::get().to(list_import_files));
}
