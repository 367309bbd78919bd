// HTTP-level tests for the debts API: routing, status codes and response
// shapes, backed by the in-memory store.

#[path = "../helpers/mod.rs"]
mod helpers;

use std::sync::Arc;

use actix_web::{test, web, App};
use chrono::NaiveDate;
use debtrack::modules::debts::controllers;
use debtrack::modules::debts::services::DebtService;
use helpers::{due_in_days, MemoryStore};
use rust_decimal_macros::dec;
use serde_json::json;

fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

macro_rules! test_app {
    () => {{
        let store = Arc::new(MemoryStore::new());
        let service = Arc::new(DebtService::new(store.clone(), store.clone(), dec!(5)));
        test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .configure(controllers::configure),
        )
        .await
    }};
}

#[actix_web::test]
async fn register_debt_returns_201_with_initial_state() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/debts")
        .set_json(json!({
            "creditorName": "Pedro",
            "totalValue": "600.00",
            "numberOfInstallments": 3,
            "dueDate": iso(due_in_days(30)),
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["creditorName"], "Pedro");
    assert_eq!(body["totalValue"], "600.00");
    assert_eq!(body["balanceDue"], "600.00");
    assert_eq!(body["numberOfInstallments"], 3);
    assert_eq!(body["statusId"], 1);
    assert!(body["installments"].as_array().unwrap().is_empty());
    assert!(body["id"].as_i64().unwrap() > 0);
}

#[actix_web::test]
async fn register_debt_rejects_invalid_body() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/debts")
        .set_json(json!({
            "creditorName": "x".repeat(101),
            "totalValue": "600.00",
            "numberOfInstallments": 3,
            "dueDate": iso(due_in_days(30)),
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn get_debt_returns_404_when_absent() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/api/debts/42").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["message"], "Debt not found");
    assert_eq!(body["error"]["code"], 404);
}

#[actix_web::test]
async fn list_debts_filters_by_query_params() {
    let app = test_app!();
    let due = due_in_days(30);

    for (name, total) in [("Pedro", "600.00"), ("Maria", "300.00"), ("Pedro", "90.00")] {
        let req = test::TestRequest::post()
            .uri("/api/debts")
            .set_json(json!({
                "creditorName": name,
                "totalValue": total,
                "numberOfInstallments": 3,
                "dueDate": iso(due),
            }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 201);
    }

    // No filters: everything
    let req = test::TestRequest::get().uri("/api/debts").to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body.as_array().unwrap().len(), 3);

    // creditorName narrows
    let req = test::TestRequest::get()
        .uri("/api/debts?creditorName=Pedro")
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    // AND of creditorName and statusId
    let uri = format!("/api/debts?creditorName=Maria&statusId=1&dueDate={}", iso(due));
    let req = test::TestRequest::get().uri(&uri).to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    let debts = body.as_array().unwrap();
    assert_eq!(debts.len(), 1);
    assert_eq!(debts[0]["creditorName"], "Maria");
}

#[actix_web::test]
async fn installment_flow_drives_status_codes() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/debts")
        .set_json(json!({
            "creditorName": "Pedro",
            "totalValue": "400.00",
            "numberOfInstallments": 2,
            "dueDate": iso(due_in_days(30)),
        }))
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    let debt_id = body["id"].as_i64().unwrap();

    // Wrong amount: 400 with the corrective message
    let req = test::TestRequest::post()
        .uri(&format!("/api/debts/{}/installments", debt_id))
        .set_json(json!({ "value": "150.00" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("The installment value for this debt is"));

    // Correct amount: 201 with the installment record
    let req = test::TestRequest::post()
        .uri(&format!("/api/debts/{}/installments", debt_id))
        .set_json(json!({ "value": "200.00" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["value"], "200.00");
    assert_eq!(body["interestRate"], "0");

    // Second payment settles the debt
    let req = test::TestRequest::post()
        .uri(&format!("/api/debts/{}/installments", debt_id))
        .set_json(json!({ "value": "200.00" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 201);

    let req = test::TestRequest::get()
        .uri(&format!("/api/debts/{}", debt_id))
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["statusId"], 3);
    assert_eq!(body["balanceDue"], "0.00");
    assert_eq!(body["installments"].as_array().unwrap().len(), 2);

    // Paying a settled debt conflicts
    let req = test::TestRequest::post()
        .uri(&format!("/api/debts/{}/installments", debt_id))
        .set_json(json!({ "value": "200.00" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 409);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["message"], "Debt already paid");
}

#[actix_web::test]
async fn overdue_debt_reports_corrected_amount() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/debts")
        .set_json(json!({
            "creditorName": "Pedro",
            "totalValue": "600.00",
            "numberOfInstallments": 3,
            "dueDate": iso(due_in_days(-1)),
        }))
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    let debt_id = body["id"].as_i64().unwrap();

    // The nominal amount is no longer acceptable once overdue
    let req = test::TestRequest::post()
        .uri(&format!("/api/debts/{}/installments", debt_id))
        .set_json(json!({ "value": "200.00" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let message = body["error"]["message"].as_str().unwrap();
    assert!(message.contains("overdue"));
    assert!(message.contains("5%"));

    // The interest-adjusted amount settles the installment
    let req = test::TestRequest::post()
        .uri(&format!("/api/debts/{}/installments", debt_id))
        .set_json(json!({ "value": "210.00" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["value"], "210.00");
    assert_eq!(body["interestRate"], "5");
}
