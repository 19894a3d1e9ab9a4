//! Pet Store data-transfer records

mod pet;
mod update_status;

pub use pet::{Category, Pet, PetStatus, Tag};
pub use update_status::PetUpdateStatus;
