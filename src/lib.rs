//! Retirement Planner - compound-interest projection engine and planning toolkit
//!
//! This library provides:
//! - Future-value projections for a lump sum plus monthly contributions
//! - A 4%-withdrawal-rate monthly retirement income estimate
//! - A five-step intake wizard with per-step validation
//! - Key-value storage abstraction for the persisted form record
//! - User and caregiver dashboard summaries
//! - A static educational article catalog

pub mod dashboard;
pub mod education;
pub mod profile;
pub mod projection;
pub mod scenario;
pub mod storage;
pub mod wizard;

// Re-export commonly used types
pub use dashboard::{CaregiverBenefits, DashboardSummary};
pub use profile::{Gender, Profile};
pub use projection::{ContributionPlan, ProjectionConfig, ProjectionEngine, ProjectionResult};
pub use scenario::ScenarioRunner;
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore};
pub use wizard::{FormState, Wizard, WizardStep};
