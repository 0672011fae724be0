//! Scenario runner for batch projections
//!
//! Holds a base configuration so many plans and alternative rate assumptions
//! can be projected without rebuilding the engine by hand each time.

use crate::projection::{ContributionPlan, ProjectionConfig, ProjectionEngine, ProjectionResult};

/// Runner for projecting plans under one or many configurations
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
///
/// for rate in [0.03, 0.05, 0.07] {
///     let config = ProjectionConfig { annual_return_rate: rate, ..Default::default() };
///     let result = runner.run_with_config(&plan, config);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base_config: ProjectionConfig,
}

impl ScenarioRunner {
    /// Create runner with the default rate assumptions
    pub fn new() -> Self {
        Self {
            base_config: ProjectionConfig::default(),
        }
    }

    /// Create runner with specific base assumptions
    pub fn with_config(base_config: ProjectionConfig) -> Self {
        Self { base_config }
    }

    /// Project a single plan under the base configuration
    pub fn run(&self, plan: &ContributionPlan) -> ProjectionResult {
        ProjectionEngine::new(self.base_config).project(plan)
    }

    /// Project a single plan under an alternative configuration
    pub fn run_with_config(
        &self,
        plan: &ContributionPlan,
        config: ProjectionConfig,
    ) -> ProjectionResult {
        ProjectionEngine::new(config).project(plan)
    }

    /// Project multiple plans under the base configuration
    pub fn run_batch(&self, plans: &[ContributionPlan]) -> Vec<ProjectionResult> {
        let engine = ProjectionEngine::new(self.base_config);
        plans.iter().map(|plan| engine.project(plan)).collect()
    }

    /// Project one plan under several alternative configurations
    pub fn run_scenarios(
        &self,
        plan: &ContributionPlan,
        configs: &[ProjectionConfig],
    ) -> Vec<ProjectionResult> {
        configs
            .iter()
            .map(|&config| ProjectionEngine::new(config).project(plan))
            .collect()
    }

    /// Base configuration used by [`run`](Self::run) and [`run_batch`](Self::run_batch)
    pub fn config(&self) -> &ProjectionConfig {
        &self.base_config
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_higher_rate_gives_higher_final_value() {
        let runner = ScenarioRunner::new();
        let plan = ContributionPlan::default();

        let configs: Vec<_> = [0.03, 0.05, 0.07]
            .iter()
            .map(|&rate| ProjectionConfig {
                annual_return_rate: rate,
                withdrawal_rate: 0.04,
            })
            .collect();

        let results = runner.run_scenarios(&plan, &configs);
        assert_eq!(results.len(), 3);
        assert!(
            results[2].final_point().unwrap().total_value
                > results[0].final_point().unwrap().total_value
        );
    }

    #[test]
    fn test_run_batch() {
        let runner = ScenarioRunner::new();
        let plans = vec![
            ContributionPlan {
                one_time_payment: 0.0,
                monthly_payment: 500.0,
                horizon_years: 10,
            },
            ContributionPlan::default(),
        ];

        let results = runner.run_batch(&plans);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].points.len(), 11);
        assert_eq!(results[1].points.len(), 31);
    }
}
