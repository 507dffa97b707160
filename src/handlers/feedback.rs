use crate::models::*;
use crate::services::FeedbackService;
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    get,
    path = "/feedback",
    tag = "feedback",
    responses(
        (status = 200, description = "获取反馈列表成功", body = [Feedback])
    )
)]
pub async fn list_feedback(service: web::Data<FeedbackService>) -> Result<HttpResponse> {
    match service.list().await {
        Ok(list) => Ok(HttpResponse::Ok().json(ApiResponse::success(list))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/feedback",
    tag = "feedback",
    request_body = SubmitFeedbackRequest,
    responses(
        (status = 201, description = "提交成功", body = Feedback),
        (status = 400, description = "内容为空或过长")
    )
)]
pub async fn submit_feedback(
    service: web::Data<FeedbackService>,
    request: web::Json<SubmitFeedbackRequest>,
) -> Result<HttpResponse> {
    match service.submit(request.into_inner()).await {
        Ok(feedback) => Ok(HttpResponse::Created().json(ApiResponse::success(feedback))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/feedback/{id}",
    tag = "feedback",
    params(
        ("id" = u64, Path, description = "反馈ID")
    ),
    responses(
        (status = 200, description = "删除成功"),
        (status = 404, description = "反馈不存在")
    )
)]
pub async fn delete_feedback(
    service: web::Data<FeedbackService>,
    path: web::Path<u64>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    match service.delete(id).await {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(
            id,
            "Feedback deleted",
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn feedback_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/feedback")
            .route("", web::get().to(list_feedback))
            .route("", web::post().to(submit_feedback))
            .route("/{id}", web::delete().to(delete_feedback)),
    );
}
