//! User profile data structures and saved-profile loading

mod data;
pub mod loader;

pub use data::{current_year, Gender, Profile};
pub use loader::{load_profiles, load_profiles_from_reader};
