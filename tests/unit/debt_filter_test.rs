// Debt listing: optional equality predicates combined with AND.

#[path = "../helpers/mod.rs"]
mod helpers;

use chrono::NaiveDate;
use debtrack::modules::debts::models::{Debt, DebtFilter, DebtStatus};
use helpers::{due_in_days, register_request, service_with_store};
use rust_decimal_macros::dec;

fn sample_debt(creditor: &str, due_date: NaiveDate, status: DebtStatus) -> Debt {
    let mut debt = Debt::new(creditor.to_string(), dec!(500), 5, due_date);
    debt.id = 1;
    debt.status = status;
    debt
}

#[test]
fn empty_filter_matches_everything() {
    let debt = sample_debt("Pedro", due_in_days(10), DebtStatus::Created);
    assert!(DebtFilter::default().matches(&debt));
}

#[test]
fn creditor_name_is_exact_match() {
    let debt = sample_debt("Pedro", due_in_days(10), DebtStatus::Created);

    let filter = DebtFilter {
        creditor_name: Some("Pedro".to_string()),
        ..Default::default()
    };
    assert!(filter.matches(&debt));

    let filter = DebtFilter {
        creditor_name: Some("pedro".to_string()),
        ..Default::default()
    };
    assert!(!filter.matches(&debt));
}

#[test]
fn due_date_is_exact_match() {
    let due = due_in_days(10);
    let debt = sample_debt("Pedro", due, DebtStatus::Created);

    let filter = DebtFilter {
        due_date: Some(due),
        ..Default::default()
    };
    assert!(filter.matches(&debt));

    let filter = DebtFilter {
        due_date: Some(due_in_days(11)),
        ..Default::default()
    };
    assert!(!filter.matches(&debt));
}

#[test]
fn status_id_matches_wire_code() {
    let debt = sample_debt("Pedro", due_in_days(10), DebtStatus::PartiallyPaid);

    let filter = DebtFilter {
        status_id: Some(2),
        ..Default::default()
    };
    assert!(filter.matches(&debt));

    let filter = DebtFilter {
        status_id: Some(3),
        ..Default::default()
    };
    assert!(!filter.matches(&debt));
}

#[test]
fn predicates_combine_with_and() {
    let due = due_in_days(10);
    let debt = sample_debt("Pedro", due, DebtStatus::Created);

    let filter = DebtFilter {
        creditor_name: Some("Pedro".to_string()),
        due_date: Some(due),
        status_id: Some(1),
    };
    assert!(filter.matches(&debt));

    // One failing predicate is enough to exclude the debt
    let filter = DebtFilter {
        creditor_name: Some("Pedro".to_string()),
        due_date: Some(due),
        status_id: Some(3),
    };
    assert!(!filter.matches(&debt));
}

#[tokio::test]
async fn listing_narrows_by_supplied_predicates() {
    let (service, _store) = service_with_store(dec!(5));

    let due = due_in_days(30);
    service
        .register_debt(register_request("Pedro", dec!(600), 3, due))
        .await
        .unwrap();
    service
        .register_debt(register_request("Maria", dec!(300), 2, due))
        .await
        .unwrap();
    let paid = service
        .register_debt(register_request("Pedro", dec!(100), 1, due))
        .await
        .unwrap();
    service.pay_installment(paid.id, dec!(100.00)).await.unwrap();

    // No predicates: everything
    let all = service.list_debts(&DebtFilter::default()).await.unwrap();
    assert_eq!(all.len(), 3);

    // Single predicate
    let pedros = service
        .list_debts(&DebtFilter {
            creditor_name: Some("Pedro".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(pedros.len(), 2);

    // AND combination
    let paid_pedros = service
        .list_debts(&DebtFilter {
            creditor_name: Some("Pedro".to_string()),
            status_id: Some(DebtStatus::Paid.id()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(paid_pedros.len(), 1);
    assert_eq!(paid_pedros[0].id, paid.id);
    assert_eq!(paid_pedros[0].installments.len(), 1);
}
