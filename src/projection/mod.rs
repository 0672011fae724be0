//! Future-value projection engine for lump-sum plus monthly contributions

mod engine;
mod series;

pub use engine::{
    future_value, monthly_return_rate, retirement_goal, ProjectionConfig, ProjectionEngine,
};
pub use series::{ContributionPlan, ProjectionPoint, ProjectionResult, ProjectionSummary};
