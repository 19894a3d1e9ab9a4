//! Ordered scenario runner.
//!
//! Runs scenarios one after another against a [`PetService`] and collects
//! a [`SuiteReport`].

use std::time::Instant;

use chrono::Utc;
use petprobe_domain::assertion::ResponseAssertion;
use petprobe_domain::petstore::{Category, Pet, PetStatus, PetUpdateStatus};
use tracing::{info, warn};

use super::error::{expect_eq, ScenarioError};
use super::{PetScenario, ScenarioContext, ScenarioResult, SuiteReport};
use crate::fixtures;
use crate::pet_service::PetService;
use crate::ports::HttpClient;

/// Runs the Pet Store scenario suite.
pub struct SuiteRunner<C: HttpClient> {
    service: PetService<C>,
    /// Whether to stop on first failure.
    stop_on_failure: bool,
}

impl<C: HttpClient> SuiteRunner<C> {
    /// Create a new runner over `service`.
    #[must_use]
    pub const fn new(service: PetService<C>) -> Self {
        Self {
            service,
            stop_on_failure: false,
        }
    }

    /// Set whether to stop on first failure.
    #[must_use]
    pub const fn with_stop_on_failure(mut self, stop: bool) -> Self {
        self.stop_on_failure = stop;
        self
    }

    /// Run every scenario in declared order.
    pub async fn run(&self, ctx: &ScenarioContext) -> SuiteReport {
        self.run_scenarios(&PetScenario::ALL, ctx).await
    }

    /// Run `scenarios` in the given order.
    pub async fn run_scenarios(
        &self,
        scenarios: &[PetScenario],
        ctx: &ScenarioContext,
    ) -> SuiteReport {
        let started_at = Utc::now();
        let start = Instant::now();
        let mut results = Vec::with_capacity(scenarios.len());

        info!(pet_id = ctx.pet.id, scenarios = scenarios.len(), "starting suite");

        for &scenario in scenarios {
            let result = self.run_scenario(scenario, ctx).await;
            let failed = !result.passed;
            results.push(result);

            if failed && self.stop_on_failure {
                warn!("stopping after first failure");
                break;
            }
        }

        let report = SuiteReport::new(started_at, results, scenarios.len(), elapsed_ms(start));
        info!(
            passed = report.passed,
            failed = report.failed,
            skipped = report.skipped,
            duration_ms = report.duration_ms,
            "suite finished"
        );
        report
    }

    /// Run a single scenario.
    pub async fn run_scenario(&self, scenario: PetScenario, ctx: &ScenarioContext) -> ScenarioResult {
        let start = Instant::now();
        let outcome = self.execute(scenario, ctx).await;
        let duration_ms = elapsed_ms(start);

        match outcome {
            Ok(()) => {
                info!(scenario = %scenario, duration_ms, "passed");
                ScenarioResult::pass(scenario, duration_ms)
            }
            Err(err) => {
                warn!(scenario = %scenario, duration_ms, error = %err, "failed");
                ScenarioResult::fail(scenario, err.to_string(), duration_ms)
            }
        }
    }

    async fn execute(&self, scenario: PetScenario, ctx: &ScenarioContext) -> Result<(), ScenarioError> {
        let service = &self.service;
        let pet = &ctx.pet;

        match scenario {
            PetScenario::AddPet => {
                let added = ResponseAssertion::assert_that(service.add_new_pet(pet).await?)
                    .is_success()?
                    .into_body()?;
                expect_eq(format!("pet {} added", pet.id), pet, &added)
            }

            PetScenario::RejectOutOfRangeIds => {
                for id in ctx.out_of_range_ids {
                    let invalid = fixtures::pet_with_invalid_id(id);
                    ResponseAssertion::assert_that(service.add_new_pet(&invalid).await?)
                        .described_as(format!("ID {id} exceeded max allowed value"))
                        .is_not_allowed()?;
                }
                Ok(())
            }

            PetScenario::FindById => {
                let found = ResponseAssertion::assert_that(service.find_pet_by_id(pet.id).await?)
                    .is_success()?
                    .into_body()?;
                expect_eq(format!("pet found by ID {}", pet.id), pet, &found)
            }

            PetScenario::FindByStatus => {
                let status = pet.status.unwrap_or(PetStatus::Available);
                let found =
                    ResponseAssertion::assert_that(service.find_pets_by_known_status(status).await?)
                        .is_success()?
                        .into_body()?;
                if found.is_empty() {
                    return Err(ScenarioError::mismatch(
                        format!("number of pets with status {status}"),
                        &"at least 1",
                        &0,
                    ));
                }
                Ok(())
            }

            PetScenario::FindByInvalidId => {
                ResponseAssertion::assert_that(service.find_pet_by_id(i64::MAX).await?)
                    .described_as("Invalid ID supplied")
                    .is_bad_request()?;
                Ok(())
            }

            PetScenario::FindByInvalidStatus => {
                for status in fixtures::invalid_statuses() {
                    ResponseAssertion::assert_that(service.find_pets_by_status(&status).await?)
                        .described_as(format!("Invalid status {status} was provided"))
                        .is_bad_request()?;
                }
                Ok(())
            }

            PetScenario::RejectDuplicate => {
                ResponseAssertion::assert_that(service.add_new_pet(pet).await?)
                    .described_as("Invalid input")
                    .is_not_allowed()?;
                Ok(())
            }

            PetScenario::UpdatePet => {
                let update = updated_pet(pet);
                let updated =
                    ResponseAssertion::assert_that(service.update_existing_pet(&update).await?)
                        .is_success()?
                        .into_body()?;
                expect_eq(format!("pet {} updated", pet.id), &update, &updated)
            }

            PetScenario::UpdateWithInvalidId => {
                let invalid = Pet::new(i64::MIN);
                ResponseAssertion::assert_that(service.update_existing_pet(&invalid).await?)
                    .described_as("Invalid ID supplied")
                    .is_bad_request()?;
                Ok(())
            }

            PetScenario::UpdateFailingValidation => {
                let invalid = Pet::new(pet.id).with_status(PetStatus::Sold);
                ResponseAssertion::assert_that(service.update_existing_pet(&invalid).await?)
                    .described_as("Validation exception")
                    .is_not_allowed()?;
                Ok(())
            }

            PetScenario::UpdateWithFormData => {
                let name = format!("{}_2", pet.name.as_deref().unwrap_or_default());
                let response = service
                    .update_pet_with_form_data(pet.id, &name, PetStatus::Sold)
                    .await?;
                let report = ResponseAssertion::assert_that(response)
                    .described_as("Pet name and status changed successfully")
                    .is_success()?
                    .into_body()?;
                expect_report(pet.id, &report)
            }

            PetScenario::UploadImage => {
                let report = ResponseAssertion::assert_that(service.upload_image(pet.id, &ctx.image).await?)
                    .described_as("Pet image uploaded successfully")
                    .is_success()?
                    .into_body()?;
                expect_report(pet.id, &report)
            }

            PetScenario::DeleteWithInvalidId => {
                ResponseAssertion::assert_that(service.delete_pet(i64::MAX).await?)
                    .described_as("Pet not found")
                    .is_not_found()?;
                Ok(())
            }

            PetScenario::DeletePet => {
                ResponseAssertion::assert_that(service.delete_pet(pet.id).await?)
                    .described_as("Deletes a pet")
                    .is_success()?
                    .has_body()?;
                Ok(())
            }

            PetScenario::UpdateAfterDelete => {
                ResponseAssertion::assert_that(service.update_existing_pet(pet).await?)
                    .described_as("Pet not found")
                    .is_not_found()?;
                Ok(())
            }
        }
    }
}

/// The update sent by [`PetScenario::UpdatePet`]: renamed category, pending
/// status and no name.
#[must_use]
pub fn updated_pet(pet: &Pet) -> Pet {
    let category_id = pet.category.as_ref().map_or(0, |c| c.id);
    Pet::new(pet.id)
        .with_category(Category::new(category_id, "Alligator"))
        .with_photo_urls(pet.photo_urls.iter().cloned())
        .with_tags(pet.tags.clone())
        .with_status(PetStatus::Pending)
}

fn expect_report(id: i64, report: &PetUpdateStatus) -> Result<(), ScenarioError> {
    let expected = PetUpdateStatus::ok_for(id);
    if report.matches_ignoring_type(&expected) {
        Ok(())
    } else {
        Err(ScenarioError::mismatch(
            format!("report for pet {id}"),
            &expected,
            report,
        ))
    }
}

#[allow(clippy::cast_possible_truncation)]
fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
