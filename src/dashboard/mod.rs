//! Dashboard summaries for the user and caregiver views

use serde::{Deserialize, Serialize};

use crate::profile::Profile;

/// Salary fraction projected before the statutory retirement age is reached
const PRE_RETIREMENT_BENEFIT_RATIO: f64 = 0.40;

/// Salary fraction projected at or after the statutory retirement age
const AT_RETIREMENT_BENEFIT_RATIO: f64 = 0.95;

/// Headline numbers for the user dashboard
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Monthly retirement goal (salary times goal percentage)
    pub retirement_goal: f64,

    /// Projected monthly retirement benefit
    pub projected_retirement: f64,

    /// Progress toward the goal, in whole percent
    pub progress_percent: u32,
}

impl DashboardSummary {
    /// Build the dashboard summary for a profile
    ///
    /// The projected benefit is a flat salary-ratio heuristic keyed on whether
    /// the statutory retirement age has been reached. It is an illustrative
    /// placeholder, not an actuarial estimate.
    pub fn for_profile(profile: &Profile) -> Self {
        let retirement_goal = profile.monthly_goal();

        let ratio = if profile.at_retirement_age() {
            AT_RETIREMENT_BENEFIT_RATIO
        } else {
            PRE_RETIREMENT_BENEFIT_RATIO
        };
        let projected_retirement = (profile.gross_salary * ratio).round();

        let progress_percent = if retirement_goal > 0.0 {
            (projected_retirement / retirement_goal * 100.0).round() as u32
        } else {
            0
        };

        Self {
            retirement_goal,
            projected_retirement,
            progress_percent,
        }
    }
}

/// Monthly benefit breakdown shown on the caregiver panel
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CaregiverBenefits {
    /// Care allowance (zasiłek pielęgnacyjny)
    pub care_allowance: f64,

    /// Support benefit (świadczenie wspierające)
    pub support_benefit: f64,

    /// Social pension (renta socjalna)
    pub social_pension: f64,
}

impl CaregiverBenefits {
    /// Total monthly benefits received
    pub fn monthly_total(&self) -> f64 {
        self.care_allowance + self.support_benefit + self.social_pension
    }
}

impl Default for CaregiverBenefits {
    fn default() -> Self {
        // Statutory amounts shown on the caregiver panel
        Self {
            care_allowance: 215.84,
            support_benefit: 1_200.00,
            social_pension: 1_780.96,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Gender;
    use approx::assert_relative_eq;

    fn profile(age: u8, gender: Gender) -> Profile {
        Profile {
            profile_id: 1,
            age,
            gender,
            gross_salary: 5_000.0,
            work_start_year: 2005,
            retirement_year: 2046,
            retirement_goal_percentage: 70.0,
            zus_account: None,
            zus_subaccount: None,
        }
    }

    #[test]
    fn test_pre_retirement_ratio() {
        let summary = DashboardSummary::for_profile(&profile(45, Gender::Male));
        assert_relative_eq!(summary.projected_retirement, 2_000.0);
        assert_relative_eq!(summary.retirement_goal, 3_500.0);
        assert_eq!(summary.progress_percent, 57);
    }

    #[test]
    fn test_at_retirement_ratio_by_gender() {
        // Age 62: past the female threshold (60), before the male one (65)
        let male = DashboardSummary::for_profile(&profile(62, Gender::Male));
        assert_relative_eq!(male.projected_retirement, 2_000.0);

        let female = DashboardSummary::for_profile(&profile(62, Gender::Female));
        assert_relative_eq!(female.projected_retirement, 4_750.0);
    }

    #[test]
    fn test_zero_goal_has_zero_progress() {
        let mut p = profile(45, Gender::Male);
        p.retirement_goal_percentage = 0.0;
        let summary = DashboardSummary::for_profile(&p);
        assert_eq!(summary.progress_percent, 0);
    }

    #[test]
    fn test_caregiver_benefits_total() {
        let benefits = CaregiverBenefits::default();
        assert_relative_eq!(benefits.monthly_total(), 3_196.80, epsilon = 1e-9);
    }
}
