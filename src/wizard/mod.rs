//! Questionnaire wizard
//!
//! A fixed sequence of input steps with per-step validation, heterogeneous
//! inputs (single-select, capped multi-select, budget slider, free text),
//! a derived progress indicator, and a final normalization of collected
//! answers into the submission payload.
//!
//! The questionnaire UI went through three revisions that changed how some
//! questions are collected; this module is the canonical union. See
//! `answers` for the per-field representations and `engine` for the step
//! rules.

pub mod answers;
pub mod engine;


pub use answers::{
    AnswerRecord, BudgetAnswer, BudgetBucket, CompanySize, DataType, FinalAnswer, IntegrationNeed,
    Position, TeamSize, UseCase, BUDGET_MAX, BUDGET_STEP, MAX_USE_CASES,
};
pub use engine::{WizardEngine, WizardError, WizardStep};
