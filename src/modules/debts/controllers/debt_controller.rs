use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::debts::models::{
    DebtFilter, DebtResponse, InstallmentResponse, PayInstallmentRequest, RegisterDebtRequest,
};
use crate::modules::debts::services::DebtService;

/// Register a new debt
/// POST /api/debts
pub async fn register_debt(
    service: web::Data<Arc<DebtService>>,
    request: web::Json<RegisterDebtRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let debt = service.register_debt(request).await?;

    Ok(HttpResponse::Created().json(DebtResponse::from(&debt)))
}

/// Get a debt by id
/// GET /api/debts/{id}
pub async fn get_debt(
    service: web::Data<Arc<DebtService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let debt = service.get_debt(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(DebtResponse::from(&debt)))
}

/// List debts, optionally narrowed by creditorName, dueDate and statusId
/// GET /api/debts
pub async fn list_debts(
    service: web::Data<Arc<DebtService>>,
    filter: web::Query<DebtFilter>,
) -> Result<HttpResponse, AppError> {
    let debts = service.list_debts(&filter).await?;
    let response: Vec<DebtResponse> = debts.iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(response))
}

/// Pay one installment against a debt
/// POST /api/debts/{debt_id}/installments
pub async fn pay_installment(
    service: web::Data<Arc<DebtService>>,
    path: web::Path<i64>,
    request: web::Json<PayInstallmentRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let installment = service
        .pay_installment(path.into_inner(), request.value)
        .await?;

    Ok(HttpResponse::Created().json(InstallmentResponse::from(&installment)))
}

/// Configure debt routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/debts")
            .route("", web::post().to(register_debt))
            .route("", web::get().to(list_debts))
            .route("/{id}", web::get().to(get_debt))
            .route("/{debt_id}/installments", web::post().to(pay_installment)),
    );
}
