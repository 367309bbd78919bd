use std::sync::Arc;

use actix_web::{web, App, HttpResponse, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use debtrack::config::Config;
use debtrack::middleware::RequestId;
use debtrack::modules::debts::controllers;
use debtrack::modules::debts::repositories::{MySqlDebtRepository, MySqlInstallmentRepository};
use debtrack::modules::debts::services::DebtService;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debtrack=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    tracing::info!("Starting debtrack debt ledger");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Overdue interest rate: {}%", config.credit.interest_rate);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Create database connection pool
    let db_pool = config
        .database
        .create_pool()
        .await
        .context("Failed to create database pool")?;

    tracing::info!(
        "Database pool initialized ({} connections)",
        config.database.pool_size
    );

    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .context("Failed to run database migrations")?;

    // Wire repositories and the debt service
    let debt_repo = Arc::new(MySqlDebtRepository::new(db_pool.clone()));
    let installment_repo = Arc::new(MySqlInstallmentRepository::new(db_pool.clone()));
    let debt_service = Arc::new(DebtService::new(
        debt_repo,
        installment_repo,
        config.credit.interest_rate,
    ));

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(RequestId)
            .app_data(web::Data::new(debt_service.clone()))
            .configure(controllers::configure)
            .route("/health", web::get().to(health_check))
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("Server terminated unexpectedly")
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "debtrack"
    }))
}
