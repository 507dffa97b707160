use crate::models::*;
use crate::services::DrawService;
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    post,
    path = "/configs/{id}/draw",
    tag = "draw",
    params(
        ("id" = String, Path, description = "配置ID")
    ),
    responses(
        (status = 200, description = "抽奖成功", body = LotteryRecord),
        (status = 400, description = "配置没有可抽奖品"),
        (status = 404, description = "配置不存在")
    )
)]
/// 进行一次抽奖:
/// 1. 按奖品权重随机选择（权重不要求归一化）
/// 2. 保存奖品快照作为抽奖记录并返回
pub async fn draw(service: web::Data<DrawService>, path: web::Path<String>) -> Result<HttpResponse> {
    match service.draw(&path.into_inner()).await {
        Ok(record) => Ok(HttpResponse::Ok().json(ApiResponse::success(record))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/records",
    tag = "draw",
    params(
        ("config_id" = Option<String>, Query, description = "仅查询某个配置的记录"),
        ("page" = Option<u32>, Query, description = "页码 (默认1)"),
        ("per_page" = Option<u32>, Query, description = "每页数量 (默认20)")
    ),
    responses(
        (status = 200, description = "获取抽奖记录成功", body = PaginatedResponse<LotteryRecord>)
    )
)]
/// 分页获取抽奖记录（倒序）
pub async fn get_records(
    service: web::Data<DrawService>,
    query: web::Query<RecordQuery>,
) -> Result<HttpResponse> {
    match service.list_records(&query.into_inner()).await {
        Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::success(page))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/records",
    tag = "draw",
    params(
        ("config_id" = Option<String>, Query, description = "仅清空某个配置的记录，缺省清空全部")
    ),
    responses(
        (status = 200, description = "清空成功", body = ClearRecordsResponse)
    )
)]
pub async fn clear_records(
    service: web::Data<DrawService>,
    query: web::Query<ClearRecordsQuery>,
) -> Result<HttpResponse> {
    match service.clear_records(query.config_id.as_deref()).await {
        Ok(removed) => Ok(HttpResponse::Ok().json(ApiResponse::success(ClearRecordsResponse {
            removed,
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

/// 路由配置
pub fn draw_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/records")
            .route(web::get().to(get_records))
            .route(web::delete().to(clear_records)),
    );
}
