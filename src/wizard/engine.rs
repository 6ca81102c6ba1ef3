//! Wizard step sequencing and validation
//!
//! The engine owns the step position and the answer record, decides per-step
//! validity, and normalizes the collected answers into the fixed submission
//! payload. Validity is keyed on step identity, never on field order.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::answers::{
    AnswerRecord, BudgetBucket, CompanySize, DataType, IntegrationNeed, Position, TeamSize,
    UseCase,
};
use crate::models::QuestionnaireSubmission;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("step {step:?} is incomplete, cannot advance")]
    InvalidStep { step: WizardStep },

    #[error("questionnaire is incomplete, missing answers for {missing:?}")]
    IncompleteAnswers { missing: Vec<WizardStep> },
}

/// One screen of the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Position,
    UseCases,
    Budget,
    CompanySize,
    DataTypes,
    IntegrationNeeds,
    FinalQuestion,
    Summary,
}

impl WizardStep {
    /// All steps in questionnaire order
    pub fn all() -> &'static [WizardStep] {
        &[
            WizardStep::Position,
            WizardStep::UseCases,
            WizardStep::Budget,
            WizardStep::CompanySize,
            WizardStep::DataTypes,
            WizardStep::IntegrationNeeds,
            WizardStep::FinalQuestion,
            WizardStep::Summary,
        ]
    }

    /// Get the next step, if any
    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Position => Some(WizardStep::UseCases),
            WizardStep::UseCases => Some(WizardStep::Budget),
            WizardStep::Budget => Some(WizardStep::CompanySize),
            WizardStep::CompanySize => Some(WizardStep::DataTypes),
            WizardStep::DataTypes => Some(WizardStep::IntegrationNeeds),
            WizardStep::IntegrationNeeds => Some(WizardStep::FinalQuestion),
            WizardStep::FinalQuestion => Some(WizardStep::Summary),
            WizardStep::Summary => None,
        }
    }

    /// Get the previous step, if any
    pub fn previous(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Position => None,
            WizardStep::UseCases => Some(WizardStep::Position),
            WizardStep::Budget => Some(WizardStep::UseCases),
            WizardStep::CompanySize => Some(WizardStep::Budget),
            WizardStep::DataTypes => Some(WizardStep::CompanySize),
            WizardStep::IntegrationNeeds => Some(WizardStep::DataTypes),
            WizardStep::FinalQuestion => Some(WizardStep::IntegrationNeeds),
            WizardStep::Summary => Some(WizardStep::FinalQuestion),
        }
    }

    /// Step index (0-based)
    pub fn index(&self) -> usize {
        match self {
            WizardStep::Position => 0,
            WizardStep::UseCases => 1,
            WizardStep::Budget => 2,
            WizardStep::CompanySize => 3,
            WizardStep::DataTypes => 4,
            WizardStep::IntegrationNeeds => 5,
            WizardStep::FinalQuestion => 6,
            WizardStep::Summary => 7,
        }
    }

    /// Step number (1-based), as shown in the progress indicator
    pub fn number(&self) -> usize {
        self.index() + 1
    }

    /// Total number of steps
    pub fn count() -> usize {
        Self::all().len()
    }

    /// Question shown for this step
    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Position => "What is your professional position?",
            WizardStep::UseCases => "What are your primary use cases?",
            WizardStep::Budget => "What is your monthly budget?",
            WizardStep::CompanySize => "What is your company size?",
            WizardStep::DataTypes => "What types of data do you work with?",
            WizardStep::IntegrationNeeds => "What are your integration requirements?",
            WizardStep::FinalQuestion => "Tell us about your team or ideal solution",
            WizardStep::Summary => "Review your answers",
        }
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        WizardStep::Position
    }
}

/// Questionnaire wizard: step position plus the live answer record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardEngine {
    current_step: WizardStep,
    answers: AnswerRecord,
}

impl WizardEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_step(&self) -> WizardStep {
        self.current_step
    }

    pub fn answers(&self) -> &AnswerRecord {
        &self.answers
    }

    /// Progress through the wizard (0-100)
    pub fn progress_percent(&self) -> u8 {
        let total = WizardStep::count();
        ((self.current_step.number() as f32 / total as f32) * 100.0) as u8
    }

    /// Whether the given step has everything it needs. The summary step
    /// previews but collects nothing, so it is always valid.
    pub fn is_step_valid(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::Position => self.answers.position().is_some(),
            WizardStep::UseCases => !self.answers.use_cases().is_empty(),
            WizardStep::Budget => self.answers.budget().is_answered(),
            WizardStep::CompanySize => self.answers.company_size().is_some(),
            WizardStep::DataTypes => !self.answers.data_types().is_empty(),
            WizardStep::IntegrationNeeds => self.answers.integration_needs().is_some(),
            WizardStep::FinalQuestion => self.answers.final_answer().is_answered(),
            WizardStep::Summary => true,
        }
    }

    /// Move forward one step. The current step must be valid; on violation
    /// the state is unchanged and `InvalidStep` is returned. Advancing from
    /// the last step is a no-op.
    pub fn advance(&mut self) -> Result<WizardStep, WizardError> {
        if !self.is_step_valid(self.current_step) {
            return Err(WizardError::InvalidStep {
                step: self.current_step,
            });
        }
        if let Some(next) = self.current_step.next() {
            self.current_step = next;
        }
        Ok(self.current_step)
    }

    /// Move back one step; always succeeds, floored at the first step.
    pub fn retreat(&mut self) -> WizardStep {
        if let Some(previous) = self.current_step.previous() {
            self.current_step = previous;
        }
        self.current_step
    }

    /// Jump back to the first step, used on wizard (re-)entry. Answers are
    /// kept; idempotent.
    pub fn reset_to_start(&mut self) {
        self.current_step = WizardStep::Position;
    }

    /// Collecting steps that are still missing an answer
    pub fn missing_steps(&self) -> Vec<WizardStep> {
        WizardStep::all()
            .iter()
            .copied()
            .filter(|step| *step != WizardStep::Summary && !self.is_step_valid(*step))
            .collect()
    }

    /// Normalize the answer record into the fixed submission payload.
    ///
    /// This is the only place UI representation is reconciled to the wire
    /// contract: the use-case set joins to one string, a slider budget
    /// formats to `$N/month`, and the final answer fills the `team_size`
    /// slot whichever shape collected it.
    pub fn build_submission(&self) -> Result<QuestionnaireSubmission, WizardError> {
        let missing = self.missing_steps();
        if !missing.is_empty() {
            return Err(WizardError::IncompleteAnswers { missing });
        }

        let answers = &self.answers;
        let use_case = answers
            .use_cases()
            .iter()
            .map(|u| u.label())
            .collect::<Vec<_>>()
            .join(", ");
        let data_types = answers
            .data_types()
            .iter()
            .map(|d| d.label().to_string())
            .collect();

        // The missing-steps check above makes every unwrap_or arm below
        // unreachable.
        Ok(QuestionnaireSubmission {
            position: answers.position().map(|p| p.label().to_string()).unwrap_or_default(),
            use_case,
            budget: answers.budget().wire_value().unwrap_or_default(),
            company_size: answers
                .company_size()
                .map(|c| c.label().to_string())
                .unwrap_or_default(),
            data_types,
            integration_needs: answers
                .integration_needs()
                .map(|i| i.label().to_string())
                .unwrap_or_default(),
            team_size: answers.final_answer().wire_value().unwrap_or_default(),
        })
    }

    // Typed setters forwarding to the answer record. The record enforces the
    // set rules (uniqueness, the use-case cap); the engine stays the single
    // entry point for mutation.

    pub fn set_position(&mut self, position: Position) {
        self.answers.set_position(position);
    }

    pub fn add_use_case(&mut self, use_case: UseCase) -> bool {
        self.answers.add_use_case(use_case)
    }

    pub fn remove_use_case(&mut self, use_case: UseCase) -> bool {
        self.answers.remove_use_case(use_case)
    }

    pub fn set_budget_bucket(&mut self, bucket: BudgetBucket) {
        self.answers.set_budget_bucket(bucket);
    }

    pub fn set_budget_monthly(&mut self, amount: u32) {
        self.answers.set_budget_monthly(amount);
    }

    pub fn set_company_size(&mut self, size: CompanySize) {
        self.answers.set_company_size(size);
    }

    pub fn add_data_type(&mut self, data_type: DataType) -> bool {
        self.answers.add_data_type(data_type)
    }

    pub fn remove_data_type(&mut self, data_type: DataType) -> bool {
        self.answers.remove_data_type(data_type)
    }

    pub fn set_integration_needs(&mut self, need: IntegrationNeed) {
        self.answers.set_integration_needs(need);
    }

    pub fn set_team_size(&mut self, size: TeamSize) {
        self.answers.set_team_size(size);
    }

    pub fn set_perfect_solution(&mut self, text: impl Into<String>) {
        self.answers.set_perfect_solution(text);
    }
}
