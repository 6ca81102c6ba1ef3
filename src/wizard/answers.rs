//! Answer record and typed answer values
//!
//! One canonical record covers every revision of the questionnaire UI:
//! fields that changed representation between revisions (budget dropdown vs.
//! slider, team-size dropdown vs. free text) are modelled as enums so that
//! only one representation can be present at a time.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Maximum number of use cases a user may select
pub const MAX_USE_CASES: usize = 3;

/// Upper bound of the monthly budget slider, in dollars
pub const BUDGET_MAX: u32 = 1000;

/// Slider increment for the monthly budget, in dollars
pub const BUDGET_STEP: u32 = 50;

/// Professional position of the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    DataAnalyst,
    FinancialAnalyst,
    BusinessAnalyst,
    DataScientist,
    FinanceManager,
    Executive,
    Consultant,
    Other,
}

impl Position {
    /// All positions in questionnaire order
    pub fn all() -> &'static [Position] {
        &[
            Position::DataAnalyst,
            Position::FinancialAnalyst,
            Position::BusinessAnalyst,
            Position::DataScientist,
            Position::FinanceManager,
            Position::Executive,
            Position::Consultant,
            Position::Other,
        ]
    }

    /// Display label, as shown in the questionnaire and sent on the wire
    pub fn label(&self) -> &'static str {
        match self {
            Position::DataAnalyst => "Data Analyst",
            Position::FinancialAnalyst => "Financial Analyst",
            Position::BusinessAnalyst => "Business Analyst",
            Position::DataScientist => "Data Scientist",
            Position::FinanceManager => "Finance Manager",
            Position::Executive => "CFO/Executive",
            Position::Consultant => "Consultant",
            Position::Other => "Other",
        }
    }
}

/// Primary use case for a financial analysis tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UseCase {
    FinancialReporting,
    DataVisualization,
    PredictiveAnalytics,
    RiskAnalysis,
    BudgetPlanning,
    InvestmentAnalysis,
    ComplianceReporting,
    PerformanceTracking,
}

impl UseCase {
    pub fn all() -> &'static [UseCase] {
        &[
            UseCase::FinancialReporting,
            UseCase::DataVisualization,
            UseCase::PredictiveAnalytics,
            UseCase::RiskAnalysis,
            UseCase::BudgetPlanning,
            UseCase::InvestmentAnalysis,
            UseCase::ComplianceReporting,
            UseCase::PerformanceTracking,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            UseCase::FinancialReporting => "Financial Reporting",
            UseCase::DataVisualization => "Data Visualization",
            UseCase::PredictiveAnalytics => "Predictive Analytics",
            UseCase::RiskAnalysis => "Risk Analysis",
            UseCase::BudgetPlanning => "Budget Planning",
            UseCase::InvestmentAnalysis => "Investment Analysis",
            UseCase::ComplianceReporting => "Compliance Reporting",
            UseCase::PerformanceTracking => "Performance Tracking",
        }
    }
}

/// Budget bucket from the dropdown revisions of the questionnaire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetBucket {
    Free,
    Under50,
    From50To200,
    From200To500,
    From500To1000,
    Above1000,
    Enterprise,
}

impl BudgetBucket {
    pub fn all() -> &'static [BudgetBucket] {
        &[
            BudgetBucket::Free,
            BudgetBucket::Under50,
            BudgetBucket::From50To200,
            BudgetBucket::From200To500,
            BudgetBucket::From500To1000,
            BudgetBucket::Above1000,
            BudgetBucket::Enterprise,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            BudgetBucket::Free => "Free",
            BudgetBucket::Under50 => "Under $50/month",
            BudgetBucket::From50To200 => "$50-$200/month",
            BudgetBucket::From200To500 => "$200-$500/month",
            BudgetBucket::From500To1000 => "$500-$1000/month",
            BudgetBucket::Above1000 => "Above $1000/month",
            BudgetBucket::Enterprise => "Enterprise pricing",
        }
    }
}

/// Budget answer across both collecting representations
///
/// The dropdown revisions collect a bucket; the slider revision collects a
/// dollar amount. `Monthly(0)` is the slider's rest position and does not
/// count as answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum BudgetAnswer {
    Unanswered,
    Bucket(BudgetBucket),
    Monthly(u32),
}

impl BudgetAnswer {
    pub fn is_answered(&self) -> bool {
        match self {
            BudgetAnswer::Unanswered => false,
            BudgetAnswer::Bucket(_) => true,
            BudgetAnswer::Monthly(amount) => *amount > 0,
        }
    }

    /// Wire representation of the budget (`$N/month` for slider amounts)
    pub fn wire_value(&self) -> Option<String> {
        match self {
            BudgetAnswer::Unanswered => None,
            BudgetAnswer::Bucket(bucket) => Some(bucket.label().to_string()),
            BudgetAnswer::Monthly(amount) => Some(format!("${}/month", amount)),
        }
    }
}

impl Default for BudgetAnswer {
    fn default() -> Self {
        BudgetAnswer::Unanswered
    }
}

/// Company size of the user's organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanySize {
    Solo,
    Small,
    Medium,
    Large,
    Enterprise,
}

impl CompanySize {
    pub fn all() -> &'static [CompanySize] {
        &[
            CompanySize::Solo,
            CompanySize::Small,
            CompanySize::Medium,
            CompanySize::Large,
            CompanySize::Enterprise,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            CompanySize::Solo => "Solo/Freelancer",
            CompanySize::Small => "Small (2-10 employees)",
            CompanySize::Medium => "Medium (11-50 employees)",
            CompanySize::Large => "Large (51-200 employees)",
            CompanySize::Enterprise => "Enterprise (200+ employees)",
        }
    }
}

/// Kind of data the user works with
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    FinancialStatements,
    MarketData,
    CustomerData,
    SalesData,
    OperationalData,
    ExternalApis,
    Spreadsheets,
    Databases,
}

impl DataType {
    pub fn all() -> &'static [DataType] {
        &[
            DataType::FinancialStatements,
            DataType::MarketData,
            DataType::CustomerData,
            DataType::SalesData,
            DataType::OperationalData,
            DataType::ExternalApis,
            DataType::Spreadsheets,
            DataType::Databases,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            DataType::FinancialStatements => "Financial statements",
            DataType::MarketData => "Market data",
            DataType::CustomerData => "Customer data",
            DataType::SalesData => "Sales data",
            DataType::OperationalData => "Operational data",
            DataType::ExternalApis => "External APIs",
            DataType::Spreadsheets => "Spreadsheets",
            DataType::Databases => "Databases",
        }
    }
}

/// Integration requirements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationNeed {
    Spreadsheets,
    CloudDatabases,
    ApiIntegrations,
    ErpSystems,
    CrmSystems,
    None,
    Custom,
}

impl IntegrationNeed {
    pub fn all() -> &'static [IntegrationNeed] {
        &[
            IntegrationNeed::Spreadsheets,
            IntegrationNeed::CloudDatabases,
            IntegrationNeed::ApiIntegrations,
            IntegrationNeed::ErpSystems,
            IntegrationNeed::CrmSystems,
            IntegrationNeed::None,
            IntegrationNeed::Custom,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            IntegrationNeed::Spreadsheets => "Excel/Google Sheets",
            IntegrationNeed::CloudDatabases => "Cloud databases",
            IntegrationNeed::ApiIntegrations => "API integrations",
            IntegrationNeed::ErpSystems => "ERP systems",
            IntegrationNeed::CrmSystems => "CRM systems",
            IntegrationNeed::None => "No integrations needed",
            IntegrationNeed::Custom => "Custom integrations",
        }
    }
}

/// Team size buckets from the dropdown revisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamSize {
    JustMe,
    TwoToFive,
    SixToTen,
    ElevenToTwentyFive,
    TwentyFivePlus,
}

impl TeamSize {
    pub fn all() -> &'static [TeamSize] {
        &[
            TeamSize::JustMe,
            TeamSize::TwoToFive,
            TeamSize::SixToTen,
            TeamSize::ElevenToTwentyFive,
            TeamSize::TwentyFivePlus,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            TeamSize::JustMe => "Just me",
            TeamSize::TwoToFive => "2-5 people",
            TeamSize::SixToTen => "6-10 people",
            TeamSize::ElevenToTwentyFive => "11-25 people",
            TeamSize::TwentyFivePlus => "25+ people",
        }
    }
}

/// Final collecting question across both revisions
///
/// Earlier revisions asked for a team size; the latest asks for a free-text
/// description of the user's perfect solution. Never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FinalAnswer {
    Unanswered,
    TeamSize(TeamSize),
    PerfectSolution(String),
}

impl FinalAnswer {
    pub fn is_answered(&self) -> bool {
        match self {
            FinalAnswer::Unanswered => false,
            FinalAnswer::TeamSize(_) => true,
            FinalAnswer::PerfectSolution(text) => !text.trim().is_empty(),
        }
    }

    /// Value carried in the wire payload's `team_size` slot
    pub fn wire_value(&self) -> Option<String> {
        match self {
            FinalAnswer::Unanswered => None,
            FinalAnswer::TeamSize(size) => Some(size.label().to_string()),
            FinalAnswer::PerfectSolution(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
        }
    }
}

impl Default for FinalAnswer {
    fn default() -> Self {
        FinalAnswer::Unanswered
    }
}

/// Accumulated user responses for one wizard session
///
/// Exactly one record is live per session. Navigating away from the wizard
/// and back never clears it; re-entry only resets the step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    position: Option<Position>,
    use_cases: BTreeSet<UseCase>,
    budget: BudgetAnswer,
    company_size: Option<CompanySize>,
    data_types: BTreeSet<DataType>,
    integration_needs: Option<IntegrationNeed>,
    final_answer: FinalAnswer,
}

impl AnswerRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn use_cases(&self) -> &BTreeSet<UseCase> {
        &self.use_cases
    }

    pub fn budget(&self) -> BudgetAnswer {
        self.budget
    }

    pub fn company_size(&self) -> Option<CompanySize> {
        self.company_size
    }

    pub fn data_types(&self) -> &BTreeSet<DataType> {
        &self.data_types
    }

    pub fn integration_needs(&self) -> Option<IntegrationNeed> {
        self.integration_needs
    }

    pub fn final_answer(&self) -> &FinalAnswer {
        &self.final_answer
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = Some(position);
    }

    /// Add a use case. Returns false (and leaves the set unchanged) when the
    /// use case is already selected or the selection is at capacity.
    pub fn add_use_case(&mut self, use_case: UseCase) -> bool {
        if self.use_cases.contains(&use_case) {
            return false;
        }
        if self.use_cases.len() >= MAX_USE_CASES {
            return false;
        }
        self.use_cases.insert(use_case)
    }

    /// Remove a use case. Returns true iff it was selected.
    pub fn remove_use_case(&mut self, use_case: UseCase) -> bool {
        self.use_cases.remove(&use_case)
    }

    pub fn set_budget_bucket(&mut self, bucket: BudgetBucket) {
        self.budget = BudgetAnswer::Bucket(bucket);
    }

    /// Set a slider budget, clamped to [0, BUDGET_MAX] and snapped down to
    /// the nearest BUDGET_STEP increment.
    pub fn set_budget_monthly(&mut self, amount: u32) {
        let clamped = amount.min(BUDGET_MAX);
        let snapped = clamped - clamped % BUDGET_STEP;
        self.budget = BudgetAnswer::Monthly(snapped);
    }

    pub fn set_company_size(&mut self, size: CompanySize) {
        self.company_size = Some(size);
    }

    pub fn add_data_type(&mut self, data_type: DataType) -> bool {
        self.data_types.insert(data_type)
    }

    pub fn remove_data_type(&mut self, data_type: DataType) -> bool {
        self.data_types.remove(&data_type)
    }

    pub fn set_integration_needs(&mut self, need: IntegrationNeed) {
        self.integration_needs = Some(need);
    }

    /// Answer the final question with a team size, replacing any free text.
    pub fn set_team_size(&mut self, size: TeamSize) {
        self.final_answer = FinalAnswer::TeamSize(size);
    }

    /// Answer the final question with free text, replacing any team size.
    /// Blank text resets the question to unanswered.
    pub fn set_perfect_solution(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text.trim().is_empty() {
            self.final_answer = FinalAnswer::Unanswered;
        } else {
            self.final_answer = FinalAnswer::PerfectSolution(text);
        }
    }
}
