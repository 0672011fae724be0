//! Core compound-interest projection calculations
//!
//! All operations are pure functions of their inputs: no I/O, no shared state,
//! deterministic, bounded by the projection horizon. Inputs are caller-validated;
//! out-of-domain values (rate <= -1, NaN) propagate through the arithmetic
//! rather than being caught here.

use super::series::{ContributionPlan, ProjectionPoint, ProjectionResult};

/// Configuration for a projection run
///
/// Both rates are supplied by the caller rather than baked into the engine so
/// that alternative scenarios can be run against the same contribution plan.
#[derive(Debug, Clone, Copy)]
pub struct ProjectionConfig {
    /// Nominal annual return rate as a fraction (0.07 = 7%)
    pub annual_return_rate: f64,

    /// Fraction of accumulated value assumed safely withdrawable per year
    pub withdrawal_rate: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            annual_return_rate: 0.07, // long-run average equity return
            withdrawal_rate: 0.04,    // 4% rule
        }
    }
}

/// Convert an annual return rate to the equivalent monthly compounding rate
///
/// `m = (1 + annual)^(1/12) - 1`. Defined for any rate > -1.
pub fn monthly_return_rate(annual_return_rate: f64) -> f64 {
    (1.0 + annual_return_rate).powf(1.0 / 12.0) - 1.0
}

/// Future value of a one-time payment plus an ordinary monthly annuity
///
/// The lump sum compounds annually for `horizon_years`; the monthly
/// contributions compound at the equivalent monthly rate from each payment
/// date to the horizon end.
pub fn future_value(
    principal: f64,
    monthly_contribution: f64,
    horizon_years: u32,
    annual_return_rate: f64,
) -> f64 {
    let months = (horizon_years * 12) as f64;

    let lump_sum = principal * (1.0 + annual_return_rate).powi(horizon_years as i32);

    let monthly_rate = monthly_return_rate(annual_return_rate);
    // Zero monthly rate degrades the annuity factor to simple accumulation;
    // the closed form would divide by zero.
    let annuity = if monthly_rate == 0.0 {
        monthly_contribution * months
    } else {
        monthly_contribution * ((1.0 + monthly_rate).powf(months) - 1.0) / monthly_rate
    };

    lump_sum + annuity
}

/// Monthly retirement goal as a percentage of gross salary
///
/// `goal_percentage` is expressed in percent (70 = 70%). No clamping: range
/// enforcement is the caller's responsibility.
pub fn retirement_goal(gross_salary: f64, goal_percentage: f64) -> f64 {
    gross_salary * goal_percentage / 100.0
}

/// Projection engine producing a year-by-year value series
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Project a contribution plan, one point per year from 0 to the horizon
    ///
    /// Year 0 carries the principal only (no monthly periods elapsed). Each
    /// point's monthly income is `total * withdrawal_rate / 12`.
    pub fn project(&self, plan: &ContributionPlan) -> ProjectionResult {
        let mut result = ProjectionResult::new();

        for year in 0..=plan.horizon_years {
            let total_value = future_value(
                plan.one_time_payment,
                plan.monthly_payment,
                year,
                self.config.annual_return_rate,
            );
            let monthly_income = total_value * self.config.withdrawal_rate / 12.0;

            result.add_point(ProjectionPoint {
                year_index: year,
                total_value,
                monthly_income,
            });
        }

        result
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }
}

impl Default for ProjectionEngine {
    fn default() -> Self {
        Self::new(ProjectionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_monthly_rate_compounds_to_annual() {
        let m = monthly_return_rate(0.07);
        assert_relative_eq!((1.0 + m).powi(12) - 1.0, 0.07, epsilon = 1e-12);
    }

    #[test]
    fn test_monthly_rate_zero() {
        assert_eq!(monthly_return_rate(0.0), 0.0);
    }

    #[test]
    fn test_no_contribution_reduces_to_lump_sum_growth() {
        let fv = future_value(10_000.0, 0.0, 20, 0.05);
        assert_relative_eq!(fv, 10_000.0 * 1.05_f64.powi(20), epsilon = 1e-9);
    }

    #[test]
    fn test_zero_rate_is_linear() {
        // No compounding: principal plus raw contributions
        let fv = future_value(5_000.0, 200.0, 10, 0.0);
        assert_relative_eq!(fv, 5_000.0 + 200.0 * 120.0, epsilon = 1e-9);
    }

    #[test]
    fn test_all_zero_inputs() {
        assert_eq!(future_value(0.0, 0.0, 10, 0.07), 0.0);
    }

    #[test]
    fn test_zero_horizon_returns_principal() {
        assert_relative_eq!(future_value(20_000.0, 1_000.0, 0, 0.07), 20_000.0);
    }

    #[test]
    fn test_reference_case_order_of_magnitude() {
        // 20k one-time + 1k/month over 30 years at 7% lands around 1.37M zł
        let fv = future_value(20_000.0, 1_000.0, 30, 0.07);
        assert!(fv > 1_300_000.0 && fv < 1_450_000.0, "fv = {}", fv);
    }

    #[test]
    fn test_retirement_goal() {
        assert_relative_eq!(retirement_goal(5_000.0, 70.0), 3_500.0);
        assert_eq!(retirement_goal(5_000.0, 0.0), 0.0);
        assert_relative_eq!(retirement_goal(5_000.0, 100.0), 5_000.0);
    }

    #[test]
    fn test_series_length_and_year_indices() {
        let engine = ProjectionEngine::default();
        let plan = ContributionPlan {
            one_time_payment: 20_000.0,
            monthly_payment: 1_000.0,
            horizon_years: 30,
        };

        let result = engine.project(&plan);
        assert_eq!(result.points.len(), 31);
        for (i, point) in result.points.iter().enumerate() {
            assert_eq!(point.year_index, i as u32);
        }
    }

    #[test]
    fn test_year_zero_is_principal_only() {
        let engine = ProjectionEngine::default();
        let plan = ContributionPlan {
            one_time_payment: 20_000.0,
            monthly_payment: 1_000.0,
            horizon_years: 5,
        };

        let first = &engine.project(&plan).points[0];
        assert_relative_eq!(first.total_value, 20_000.0);
        assert_relative_eq!(first.monthly_income, 20_000.0 * 0.04 / 12.0);
    }

    #[test]
    fn test_series_monotonic_for_positive_rate() {
        let engine = ProjectionEngine::default();
        let plan = ContributionPlan::default();

        let result = engine.project(&plan);
        for pair in result.points.windows(2) {
            assert!(pair[1].total_value >= pair[0].total_value);
        }
    }

    #[test]
    fn test_monthly_income_tracks_withdrawal_rate() {
        let config = ProjectionConfig {
            annual_return_rate: 0.07,
            withdrawal_rate: 0.04,
        };
        let engine = ProjectionEngine::new(config);
        let result = engine.project(&ContributionPlan::default());

        for point in &result.points {
            assert_relative_eq!(
                point.monthly_income,
                point.total_value * 0.04 / 12.0,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_zero_horizon_series() {
        let engine = ProjectionEngine::default();
        let plan = ContributionPlan {
            one_time_payment: 1_000.0,
            monthly_payment: 100.0,
            horizon_years: 0,
        };

        let result = engine.project(&plan);
        assert_eq!(result.points.len(), 1);
        assert_relative_eq!(result.points[0].total_value, 1_000.0);
    }
}
