//! Petprobe - Pet Store REST API integration test runner
//!
//! Wires settings, the reqwest adapter and the scenario runner together.

pub mod cli;

use std::fmt::Write as _;
use std::io::Write as _;
use std::process::ExitCode;
use std::sync::Arc;

use petprobe_application::fixtures::SAMPLE_PNG;
use petprobe_application::{HttpClientError, PetService, ScenarioContext, SuiteReport, SuiteRunner};
use petprobe_infrastructure::{ConfigError, ReqwestHttpClient, load_settings};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info};

pub use cli::Args;

/// Errors that abort a run before any scenario executes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Settings could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The HTTP client could not be created.
    #[error(transparent)]
    Http(#[from] HttpClientError),

    /// The bundled sample image could not be written.
    #[error("failed to write sample image: {0}")]
    SampleImage(#[source] std::io::Error),
}

/// Loads settings, builds the client and runs the full suite.
///
/// # Errors
///
/// Returns an error if setup fails. Scenario failures are reported in the
/// returned [`SuiteReport`].
pub async fn run(args: &Args) -> Result<SuiteReport, AppError> {
    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(base_url) = &args.base_url {
        settings.base_url.clone_from(base_url);
    }
    info!(base_url = %settings.base_url, endpoint = %settings.pet_endpoint, "target");

    let client = Arc::new(ReqwestHttpClient::new(&settings)?);
    let service = PetService::new(client, settings);

    // removed from disk when dropped, so it must outlive the run
    let sample;
    let image = match &args.image {
        Some(path) => path.clone(),
        None => {
            sample = write_sample_image()?;
            sample.path().to_path_buf()
        }
    };
    let ctx = ScenarioContext::generate(image);

    Ok(SuiteRunner::new(service)
        .with_stop_on_failure(args.stop_on_failure)
        .run(&ctx)
        .await)
}

fn write_sample_image() -> Result<NamedTempFile, AppError> {
    let mut file = tempfile::Builder::new()
        .prefix("petprobe-")
        .suffix(".png")
        .tempfile()
        .map_err(AppError::SampleImage)?;
    file.write_all(SAMPLE_PNG).map_err(AppError::SampleImage)?;
    debug!(path = %file.path().display(), "wrote sample image");
    Ok(file)
}

/// Renders a plain-text summary of `report`.
#[must_use]
pub fn render_summary(report: &SuiteReport) -> String {
    let mut out = String::new();
    for result in &report.results {
        let mark = if result.passed { "PASS" } else { "FAIL" };
        let _ = writeln!(out, "[{mark}] {} ({}ms)", result.scenario, result.duration_ms);
        if let Some(error) = &result.error {
            let _ = writeln!(out, "       {error}");
        }
    }
    let _ = write!(
        out,
        "{} passed, {} failed, {} skipped ({:.1}%) in {}ms",
        report.passed,
        report.failed,
        report.skipped,
        report.pass_rate(),
        report.duration_ms
    );
    out
}

/// Process exit code for `report`: success only if nothing failed.
#[must_use]
pub fn exit_code(report: &SuiteReport) -> ExitCode {
    if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petprobe_application::PetScenario;
    use petprobe_application::scenarios::ScenarioResult;
    use pretty_assertions::assert_eq;

    fn report(results: Vec<ScenarioResult>) -> SuiteReport {
        SuiteReport::new(chrono::Utc::now(), results, PetScenario::ALL.len(), 12)
    }

    #[test]
    fn test_summary_lists_failures_with_reason() {
        let report = report(vec![
            ScenarioResult::pass(PetScenario::AddPet, 5),
            ScenarioResult::fail(
                PetScenario::RejectOutOfRangeIds,
                "expected status 405 Method Not Allowed but was 200 OK",
                7,
            ),
        ]);
        assert_eq!(
            render_summary(&report),
            "[PASS] Add a new pet to the store (5ms)\n\
             [FAIL] Pets with an out-of-range ID are not added (7ms)\n       \
             expected status 405 Method Not Allowed but was 200 OK\n\
             1 passed, 1 failed, 13 skipped (50.0%) in 12ms"
        );
        assert!(!report.all_passed());
    }

    #[test]
    fn test_summary_of_clean_run() {
        let report = report(vec![ScenarioResult::pass(PetScenario::AddPet, 1)]);
        assert!(report.all_passed());
        assert!(render_summary(&report).ends_with("1 passed, 0 failed, 14 skipped (100.0%) in 12ms"));
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_sample_image_is_removed_on_drop() {
        let first = write_sample_image().unwrap();
        let second = write_sample_image().unwrap();
        assert_ne!(first.path(), second.path());
        assert_eq!(std::fs::read(first.path()).unwrap(), SAMPLE_PNG);

        let path = first.path().to_path_buf();
        drop(first);
        assert!(!path.exists());
        assert!(second.path().exists());
    }
}
