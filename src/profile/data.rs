//! Profile data structures matching the intake form record

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::projection::retirement_goal;

/// Default retirement goal as a percentage of gross salary
fn default_goal_percentage() -> f64 {
    70.0
}

/// Gender of the planner, used for the statutory retirement age
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Statutory retirement age in Poland: 65 for men, 60 for women
    pub fn statutory_retirement_age(&self) -> u8 {
        match self {
            Gender::Male => 65,
            Gender::Female => 60,
        }
    }
}

/// A completed planner profile, as captured by the intake wizard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Unique profile identifier
    pub profile_id: u32,

    /// Current age in whole years
    pub age: u8,

    /// Gender of the planner
    pub gender: Gender,

    /// Gross monthly salary (PLN)
    pub gross_salary: f64,

    /// Calendar year the planner started working
    pub work_start_year: i32,

    /// Planned retirement calendar year
    pub retirement_year: i32,

    /// Retirement goal as a percentage of gross salary (0-100)
    #[serde(default = "default_goal_percentage")]
    pub retirement_goal_percentage: f64,

    /// Accumulated funds on the main ZUS account (PLN), if known
    #[serde(default)]
    pub zus_account: Option<f64>,

    /// Accumulated funds on the ZUS subaccount (PLN), if known
    #[serde(default)]
    pub zus_subaccount: Option<f64>,
}

impl Profile {
    /// Years remaining until the planned retirement year
    ///
    /// `None` when the planned year is not in the future; callers fall back to
    /// their own default horizon in that case.
    pub fn investment_horizon(&self, current_year: i32) -> Option<u32> {
        let years = self.retirement_year - current_year;
        if years > 0 {
            Some(years as u32)
        } else {
            None
        }
    }

    /// Monthly retirement goal derived from salary and goal percentage
    pub fn monthly_goal(&self) -> f64 {
        retirement_goal(self.gross_salary, self.retirement_goal_percentage)
    }

    /// Combined ZUS account and subaccount balances
    pub fn total_zus_savings(&self) -> f64 {
        self.zus_account.unwrap_or(0.0) + self.zus_subaccount.unwrap_or(0.0)
    }

    /// Whether the planner has reached the statutory retirement age
    pub fn at_retirement_age(&self) -> bool {
        self.age >= self.gender.statutory_retirement_age()
    }

    /// Calendar year in which the statutory retirement age is reached
    pub fn statutory_retirement_year(&self, current_year: i32) -> i32 {
        current_year + self.gender.statutory_retirement_age() as i32 - self.age as i32
    }
}

/// Current calendar year, for horizon and autofill calculations
pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}
