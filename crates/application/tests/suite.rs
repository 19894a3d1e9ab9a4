//! Scenario suite against the in-memory Pet Store.

#![allow(clippy::unwrap_used)]

mod common;

use common::{service, FakePetStore};
use petprobe_application::fixtures;
use petprobe_application::{PetScenario, ScenarioContext, SuiteRunner};
use petprobe_domain::assertion::{
    assert_has_body, assert_not_allowed, assert_present, assert_status, assert_success, extract_body,
};
use petprobe_domain::{AssertionError, PetStatus, ResponseAssertion};
use pretty_assertions::assert_eq;

fn context() -> ScenarioContext {
    ScenarioContext::generate("pet.png")
}

#[tokio::test]
async fn test_full_suite_passes_in_order() {
    let store = FakePetStore::new();
    let ctx = context();
    let report = SuiteRunner::new(service(&store)).run(&ctx).await;

    let failures: Vec<_> = report
        .failures()
        .map(|r| format!("{}: {}", r.scenario, r.error.clone().unwrap_or_default()))
        .collect();
    assert_eq!(failures, Vec::<String>::new());
    assert_eq!(report.total, 15);
    assert_eq!(report.skipped, 0);
    assert!(report.all_passed());

    let order: Vec<_> = report.results.iter().map(|r| r.scenario).collect();
    assert_eq!(order, PetScenario::ALL.to_vec());

    // the suite cleans up after itself
    assert_eq!(store.get(ctx.pet.id), None);
}

#[tokio::test]
async fn test_stop_on_failure_skips_the_rest() {
    let store = FakePetStore::new();
    let ctx = context();
    store.insert(ctx.pet.clone());

    let report = SuiteRunner::new(service(&store))
        .with_stop_on_failure(true)
        .run(&ctx)
        .await;

    assert_eq!((report.total, report.failed, report.skipped), (1, 1, 14));
    assert_eq!(
        report.results[0].error.as_deref(),
        Some("expected status 200 OK but was 405 Method Not Allowed")
    );
}

#[tokio::test]
async fn test_failures_do_not_stop_the_suite_by_default() {
    let store = FakePetStore::new();
    let ctx = context();
    store.insert(ctx.pet.clone());

    let report = SuiteRunner::new(service(&store)).run(&ctx).await;

    assert_eq!(report.total, 15);
    assert_eq!(
        report.failures().map(|r| r.scenario).collect::<Vec<_>>(),
        vec![PetScenario::AddPet]
    );
}

#[tokio::test]
async fn test_unreachable_store_reports_missing_responses() {
    let store = FakePetStore::offline();
    let report = SuiteRunner::new(service(&store))
        .run_scenarios(&[PetScenario::FindByInvalidId], &context())
        .await;

    assert_eq!(report.failed, 1);
    assert_eq!(
        report.results[0].error.as_deref(),
        Some("expected a response but none was received [Invalid ID supplied]")
    );
    assert_eq!(store.calls(), 1);
}

#[tokio::test]
async fn test_create_then_fetch_returns_submitted_pet() {
    let store = FakePetStore::new();
    let svc = service(&store);
    let pet = fixtures::valid_pet();

    let created = svc.add_new_pet(&pet).await.unwrap();
    assert_success(created).and_then(assert_has_body).unwrap();

    let fetched = svc.find_pet_by_id(pet.id).await.unwrap();
    let body = assert_present(fetched)
        .and_then(|response| assert_status(response, 200_u16))
        .and_then(assert_has_body)
        .map(extract_body)
        .unwrap();
    assert_eq!(body, Some(pet));
}

#[tokio::test]
async fn test_update_after_delete_is_not_found() {
    let store = FakePetStore::new();
    let svc = service(&store);
    let pet = fixtures::valid_pet();
    store.insert(pet.clone());

    let deleted = svc.delete_pet(pet.id).await.unwrap();
    assert_success(deleted).unwrap();

    let err = ResponseAssertion::assert_that(svc.update_existing_pet(&pet).await.unwrap())
        .is_success()
        .unwrap_err();
    assert_eq!(
        err,
        AssertionError::UnexpectedStatus {
            expected: 200,
            actual: 404,
            description: None,
        }
    );
}

#[tokio::test]
async fn test_out_of_range_id_is_not_allowed() {
    let store = FakePetStore::new();
    let svc = service(&store);
    let pet = fixtures::pet_with_invalid_id(i64::from(i32::MAX) + 1);

    let err = assert_success(svc.add_new_pet(&pet).await.unwrap()).unwrap_err();
    assert_eq!(
        err,
        AssertionError::UnexpectedStatus {
            expected: 200,
            actual: 405,
            description: None,
        }
    );
    assert!(assert_not_allowed(svc.add_new_pet(&pet).await.unwrap()).is_ok());
}

#[tokio::test]
async fn test_unknown_status_is_bad_request() {
    let store = FakePetStore::new();
    let svc = service(&store);

    for status in fixtures::invalid_statuses() {
        let err = assert_success(svc.find_pets_by_status(&status).await.unwrap()).unwrap_err();
        assert_eq!(
            err,
            AssertionError::UnexpectedStatus {
                expected: 200,
                actual: 400,
                description: None,
            }
        );
    }

    let known = svc.find_pets_by_known_status(PetStatus::Sold).await.unwrap();
    assert_eq!(assert_success(known).map(extract_body).unwrap(), Some(Vec::new()));
}
