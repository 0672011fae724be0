//! Five-step intake wizard
//!
//! The intake flow is a linear state machine: one current step, a per-step
//! validity predicate, forward/back navigation. Career-step defaults are
//! derived from the answers given so far, matching the original form behavior.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::profile::{Gender, Profile};

/// Errors from wizard navigation and completion
#[derive(Debug, Error)]
pub enum WizardError {
    #[error("step {0:?} is incomplete")]
    IncompleteStep(WizardStep),

    #[error("already at the final step")]
    AtFinalStep,

    #[error("form is missing required field: {0}")]
    MissingField(&'static str),
}

/// The five intake steps, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardStep {
    Age,
    Gender,
    Salary,
    Career,
    Extras,
}

impl WizardStep {
    pub const COUNT: u32 = 5;

    /// 1-based position of the step
    pub fn index(&self) -> u32 {
        match self {
            WizardStep::Age => 1,
            WizardStep::Gender => 2,
            WizardStep::Salary => 3,
            WizardStep::Career => 4,
            WizardStep::Extras => 5,
        }
    }

    fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Age => Some(WizardStep::Gender),
            WizardStep::Gender => Some(WizardStep::Salary),
            WizardStep::Salary => Some(WizardStep::Career),
            WizardStep::Career => Some(WizardStep::Extras),
            WizardStep::Extras => None,
        }
    }

    fn previous(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Age => None,
            WizardStep::Gender => Some(WizardStep::Age),
            WizardStep::Salary => Some(WizardStep::Gender),
            WizardStep::Career => Some(WizardStep::Salary),
            WizardStep::Extras => Some(WizardStep::Career),
        }
    }
}

/// In-progress intake form: everything optional until completion
///
/// This is the record persisted across sessions via the storage layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormState {
    pub age: Option<u8>,
    pub gender: Option<Gender>,
    pub gross_salary: Option<f64>,
    pub work_start_year: Option<i32>,
    pub retirement_year: Option<i32>,
    pub retirement_goal_percentage: f64,
    pub zus_account: Option<f64>,
    pub zus_subaccount: Option<f64>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            age: None,
            gender: None,
            gross_salary: None,
            work_start_year: None,
            retirement_year: None,
            retirement_goal_percentage: 70.0,
            zus_account: None,
            zus_subaccount: None,
        }
    }
}

/// Linear intake wizard over a [`FormState`]
#[derive(Debug, Clone)]
pub struct Wizard {
    step: WizardStep,
    form: FormState,
    current_year: i32,
}

impl Wizard {
    /// Start a fresh wizard
    pub fn new(current_year: i32) -> Self {
        Self {
            step: WizardStep::Age,
            form: FormState::default(),
            current_year,
        }
    }

    /// Resume from a previously saved form
    ///
    /// Career years are cleared so they get recalculated from the (possibly
    /// updated) age and gender answers.
    pub fn resume(mut form: FormState, current_year: i32) -> Self {
        form.work_start_year = None;
        form.retirement_year = None;
        Self {
            step: WizardStep::Age,
            form,
            current_year,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Progress through the flow as a percentage
    pub fn progress_percent(&self) -> u32 {
        self.step.index() * 100 / WizardStep::COUNT
    }

    /// Whether the current step's required answers are present
    pub fn is_current_step_valid(&self) -> bool {
        match self.step {
            WizardStep::Age => self.form.age.is_some(),
            WizardStep::Gender => self.form.gender.is_some(),
            WizardStep::Salary => self.form.gross_salary.is_some(),
            WizardStep::Career => {
                self.form.work_start_year.is_some() && self.form.retirement_year.is_some()
            }
            // Step 5 has optional fields only
            WizardStep::Extras => true,
        }
    }

    /// Advance to the next step
    ///
    /// Fails when the current step is incomplete. Entering the Career step
    /// fills in default years from the age and gender answers.
    pub fn next(&mut self) -> Result<(), WizardError> {
        if !self.is_current_step_valid() {
            return Err(WizardError::IncompleteStep(self.step));
        }
        let next = self.step.next().ok_or(WizardError::AtFinalStep)?;
        self.step = next;

        if self.step == WizardStep::Career {
            self.fill_career_defaults();
        }
        Ok(())
    }

    /// Go back one step; no-op at the first step
    pub fn back(&mut self) {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
    }

    pub fn set_age(&mut self, age: u8) {
        self.form.age = Some(age);
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.form.gender = Some(gender);
    }

    pub fn set_gross_salary(&mut self, salary: f64) {
        self.form.gross_salary = Some(salary);
    }

    pub fn set_work_start_year(&mut self, year: i32) {
        self.form.work_start_year = Some(year);
    }

    pub fn set_retirement_year(&mut self, year: i32) {
        self.form.retirement_year = Some(year);
    }

    pub fn set_goal_percentage(&mut self, percentage: f64) {
        self.form.retirement_goal_percentage = percentage;
    }

    pub fn set_zus_account(&mut self, amount: Option<f64>) {
        self.form.zus_account = amount;
    }

    pub fn set_zus_subaccount(&mut self, amount: Option<f64>) {
        self.form.zus_subaccount = amount;
    }

    /// Complete the wizard, producing a validated profile
    pub fn finish(&self, profile_id: u32) -> Result<Profile, WizardError> {
        let form = &self.form;
        Ok(Profile {
            profile_id,
            age: form.age.ok_or(WizardError::MissingField("age"))?,
            gender: form.gender.ok_or(WizardError::MissingField("gender"))?,
            gross_salary: form
                .gross_salary
                .ok_or(WizardError::MissingField("gross_salary"))?,
            work_start_year: form
                .work_start_year
                .ok_or(WizardError::MissingField("work_start_year"))?,
            retirement_year: form
                .retirement_year
                .ok_or(WizardError::MissingField("retirement_year"))?,
            retirement_goal_percentage: form.retirement_goal_percentage,
            zus_account: form.zus_account,
            zus_subaccount: form.zus_subaccount,
        })
    }

    /// Derive default career years if not answered yet
    ///
    /// Work start assumes a career beginning at age 25; retirement defaults to
    /// the year the statutory retirement age is reached.
    fn fill_career_defaults(&mut self) {
        if let Some(age) = self.form.age {
            if self.form.work_start_year.is_none() {
                self.form.work_start_year = Some(self.current_year - (age as i32 - 25));
            }
            if self.form.retirement_year.is_none() {
                if let Some(gender) = self.form.gender {
                    let retirement_age = gender.statutory_retirement_age() as i32;
                    self.form.retirement_year =
                        Some(retirement_age - age as i32 + self.current_year);
                }
            }
        }
    }
}
