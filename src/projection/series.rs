//! Projection inputs and output series structures

use serde::{Deserialize, Serialize};

/// Contribution plan for a projection: what gets invested, and for how long
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ContributionPlan {
    /// One-time payment invested at time zero (PLN)
    pub one_time_payment: f64,

    /// Fixed contribution paid at the end of every month (PLN)
    pub monthly_payment: f64,

    /// Investment horizon in whole years
    pub horizon_years: u32,
}

impl Default for ContributionPlan {
    fn default() -> Self {
        // Calculator defaults
        Self {
            one_time_payment: 20_000.0,
            monthly_payment: 1_000.0,
            horizon_years: 30,
        }
    }
}

/// Projected portfolio state at the end of one year
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Years elapsed since the start of the plan (0 = today)
    pub year_index: u32,

    /// Total accumulated value at the end of the year
    pub total_value: f64,

    /// Estimated monthly retirement income at the configured withdrawal rate
    pub monthly_income: f64,
}

/// Complete year-by-year projection output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub points: Vec<ProjectionPoint>,
}

impl ProjectionResult {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn add_point(&mut self, point: ProjectionPoint) {
        self.points.push(point);
    }

    /// Final point of the series, if any
    pub fn final_point(&self) -> Option<&ProjectionPoint> {
        self.points.last()
    }

    /// Get summary statistics
    pub fn summary(&self, plan: &ContributionPlan) -> ProjectionSummary {
        let final_value = self.final_point().map(|p| p.total_value).unwrap_or(0.0);
        let final_monthly_income = self.final_point().map(|p| p.monthly_income).unwrap_or(0.0);
        let total_contributed =
            plan.one_time_payment + plan.monthly_payment * (plan.horizon_years * 12) as f64;

        ProjectionSummary {
            horizon_years: plan.horizon_years,
            final_value,
            final_monthly_income,
            total_contributed,
            total_growth: final_value - total_contributed,
        }
    }
}

impl Default for ProjectionResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub horizon_years: u32,
    pub final_value: f64,
    pub final_monthly_income: f64,
    pub total_contributed: f64,
    pub total_growth: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::ProjectionEngine;
    use approx::assert_relative_eq;

    #[test]
    fn test_summary_totals() {
        let plan = ContributionPlan {
            one_time_payment: 10_000.0,
            monthly_payment: 500.0,
            horizon_years: 10,
        };
        let result = ProjectionEngine::default().project(&plan);
        let summary = result.summary(&plan);

        assert_eq!(summary.horizon_years, 10);
        assert_relative_eq!(summary.total_contributed, 10_000.0 + 500.0 * 120.0);
        assert_relative_eq!(
            summary.final_value,
            result.points.last().unwrap().total_value
        );
        // Positive rate means growth over raw contributions
        assert!(summary.total_growth > 0.0);
    }

    #[test]
    fn test_empty_result_summary() {
        let plan = ContributionPlan::default();
        let summary = ProjectionResult::new().summary(&plan);
        assert_eq!(summary.final_value, 0.0);
        assert_eq!(summary.final_monthly_income, 0.0);
    }
}
