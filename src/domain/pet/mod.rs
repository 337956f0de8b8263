//! Pet module - profile aggregate, level curve, and rewards.

mod display;
mod level_curve;
mod profile;
pub mod rewards;

pub use display::{pet_art, pet_name};
pub use level_curve::requirement;
pub use profile::PetProfile;
