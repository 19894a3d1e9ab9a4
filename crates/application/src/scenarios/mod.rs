//! End-to-end Pet Store scenarios and their runner

mod error;
mod report;
mod runner;
mod suite;

pub use error::{expect_eq, ScenarioError};
pub use report::{ScenarioResult, SuiteReport};
pub use runner::{updated_pet, SuiteRunner};
pub use suite::{PetScenario, ScenarioContext};
