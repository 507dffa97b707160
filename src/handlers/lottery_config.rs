use crate::models::*;
use crate::services::ConfigService;
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    get,
    path = "/configs",
    tag = "config",
    responses(
        (status = 200, description = "获取抽奖配置列表成功", body = [LotteryConfig])
    )
)]
/// 获取全部抽奖配置（系统配置在前）
pub async fn list_configs(service: web::Data<ConfigService>) -> Result<HttpResponse> {
    match service.list_configs().await {
        Ok(list) => Ok(HttpResponse::Ok().json(ApiResponse::success(list))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/configs",
    tag = "config",
    request_body = CreateConfigRequest,
    responses(
        (status = 201, description = "创建成功", body = LotteryConfig),
        (status = 400, description = "参数错误（标题为空、奖品代码重复、概率非法）")
    )
)]
pub async fn create_config(
    service: web::Data<ConfigService>,
    request: web::Json<CreateConfigRequest>,
) -> Result<HttpResponse> {
    match service.create_config(request.into_inner()).await {
        Ok(config) => Ok(HttpResponse::Created().json(ApiResponse::success(config))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/configs/{id}",
    tag = "config",
    params(
        ("id" = String, Path, description = "配置ID")
    ),
    responses(
        (status = 200, description = "获取成功", body = LotteryConfig),
        (status = 404, description = "配置不存在")
    )
)]
pub async fn get_config(
    service: web::Data<ConfigService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match service.get_config(&path.into_inner()).await {
        Ok(config) => Ok(HttpResponse::Ok().json(ApiResponse::success(config))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/configs/{id}",
    tag = "config",
    params(
        ("id" = String, Path, description = "配置ID")
    ),
    request_body = UpdateConfigRequest,
    responses(
        (status = 200, description = "替换成功", body = LotteryConfig),
        (status = 400, description = "参数错误"),
        (status = 403, description = "系统配置不可修改"),
        (status = 404, description = "配置不存在")
    )
)]
/// 用新标题和奖品替换配置（id / createdAt 不变）
pub async fn replace_config(
    service: web::Data<ConfigService>,
    path: web::Path<String>,
    request: web::Json<UpdateConfigRequest>,
) -> Result<HttpResponse> {
    match service
        .replace_config(&path.into_inner(), request.into_inner())
        .await
    {
        Ok(config) => Ok(HttpResponse::Ok().json(ApiResponse::success(config))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/configs/{id}",
    tag = "config",
    params(
        ("id" = String, Path, description = "配置ID")
    ),
    responses(
        (status = 200, description = "删除成功"),
        (status = 403, description = "系统配置不可删除"),
        (status = 404, description = "配置不存在")
    )
)]
pub async fn delete_config(
    service: web::Data<ConfigService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    match service.delete_config(&id).await {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(
            id,
            "Lottery config deleted",
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/configs/{id}/prizes",
    tag = "config",
    params(
        ("id" = String, Path, description = "配置ID"),
        ("order" = Option<PrizeOrder>, Query, description = "configured / probability / shuffled (默认 configured)")
    ),
    responses(
        (status = 200, description = "获取展示用奖品列表成功", body = [Prize]),
        (status = 404, description = "配置不存在")
    )
)]
/// 展示用奖品列表，originalIndex 为配置中的原始位置
pub async fn get_display_prizes(
    service: web::Data<ConfigService>,
    path: web::Path<String>,
    query: web::Query<PrizeOrderQuery>,
) -> Result<HttpResponse> {
    let order = query.order.unwrap_or_default();
    match service.display_prizes(&path.into_inner(), order).await {
        Ok(prizes) => Ok(HttpResponse::Ok().json(ApiResponse::success(prizes))),
        Err(e) => Ok(e.error_response()),
    }
}

/// 路由配置（抽奖入口挂在配置下）
pub fn lottery_config_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/configs")
            .route("", web::get().to(list_configs))
            .route("", web::post().to(create_config))
            .route("/{id}", web::get().to(get_config))
            .route("/{id}", web::put().to(replace_config))
            .route("/{id}", web::delete().to(delete_config))
            .route("/{id}/prizes", web::get().to(get_display_prizes))
            .route("/{id}/draw", web::post().to(super::draw::draw)),
    );
}
