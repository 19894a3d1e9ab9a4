//! The ordered Pet Store scenario catalogue.

use std::fmt;
use std::path::PathBuf;

use petprobe_domain::petstore::Pet;

use crate::fixtures;

/// One end-to-end check against the Pet Store.
///
/// Declaration order is run order: later scenarios rely on the pet created
/// by [`PetScenario::AddPet`] and the last two remove it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PetScenario {
    /// Create the fixture pet; the echoed body equals it.
    AddPet,
    /// Pets with an out-of-range id are rejected with 405.
    RejectOutOfRangeIds,
    /// Fetch the fixture pet by id.
    FindById,
    /// At least one pet shares the fixture's status.
    FindByStatus,
    /// Lookup by `i64::MAX` is a bad request.
    FindByInvalidId,
    /// Lookup by unrecognised status spellings is a bad request.
    FindByInvalidStatus,
    /// Creating the fixture pet twice is rejected with 405.
    RejectDuplicate,
    /// Change category and status; the echoed body equals the update.
    UpdatePet,
    /// Update with id `i64::MIN` is a bad request.
    UpdateWithInvalidId,
    /// Update without a name is rejected with 405.
    UpdateFailingValidation,
    /// Form update reports success for the fixture id.
    UpdateWithFormData,
    /// Image upload reports success for the fixture id.
    UploadImage,
    /// Delete by `i64::MAX` finds nothing.
    DeleteWithInvalidId,
    /// Delete the fixture pet.
    DeletePet,
    /// Updating the deleted pet finds nothing.
    UpdateAfterDelete,
}

impl PetScenario {
    /// All scenarios in run order.
    pub const ALL: [Self; 15] = [
        Self::AddPet,
        Self::RejectOutOfRangeIds,
        Self::FindById,
        Self::FindByStatus,
        Self::FindByInvalidId,
        Self::FindByInvalidStatus,
        Self::RejectDuplicate,
        Self::UpdatePet,
        Self::UpdateWithInvalidId,
        Self::UpdateFailingValidation,
        Self::UpdateWithFormData,
        Self::UploadImage,
        Self::DeleteWithInvalidId,
        Self::DeletePet,
        Self::UpdateAfterDelete,
    ];

    /// Human-readable title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::AddPet => "Add a new pet to the store",
            Self::RejectOutOfRangeIds => "Pets with an out-of-range ID are not added",
            Self::FindById => "Pet could be found by its ID",
            Self::FindByStatus => "Pets could be found by their status",
            Self::FindByInvalidId => "No pet is found when an invalid ID is provided",
            Self::FindByInvalidStatus => "No pets are found when an invalid status is provided",
            Self::RejectDuplicate => "A pet with an existing ID is not added again",
            Self::UpdatePet => "Update existing pet",
            Self::UpdateWithInvalidId => "Update with an invalid ID is rejected",
            Self::UpdateFailingValidation => "Update that fails validation is rejected",
            Self::UpdateWithFormData => "Update pet name and status via its ID",
            Self::UploadImage => "Upload pet image",
            Self::DeleteWithInvalidId => "No pet is removed when an invalid ID is provided",
            Self::DeletePet => "Pet could be removed by its ID",
            Self::UpdateAfterDelete => "Updating a removed pet fails",
        }
    }
}

impl fmt::Display for PetScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Data shared by every scenario of one suite run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioContext {
    /// The pet created, queried, updated and finally deleted.
    pub pet: Pet,
    /// File sent by the image upload.
    pub image: PathBuf,
    /// Ids used to probe create-time id validation.
    pub out_of_range_ids: [i64; 2],
}

impl ScenarioContext {
    /// Context with a random valid pet and random out-of-range ids.
    #[must_use]
    pub fn generate(image: impl Into<PathBuf>) -> Self {
        let mut rng = rand::rng();
        Self {
            pet: fixtures::valid_pet_with(&mut rng),
            image: image.into(),
            out_of_range_ids: fixtures::out_of_range_ids(&mut rng),
        }
    }
}
