// Data models matching the directory backend's JSON shapes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A directory tool entry
///
/// `ai_summary` is filled in lazily by the backend on the first detail
/// fetch; list endpoints may return it absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub pricing: String,
    pub website: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub target_audience: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_summary: Option<String>,
}

/// Fixed-contract questionnaire payload
///
/// This seven-field shape is the stable wire contract regardless of which
/// UI revision collected the answers: multi-value use cases arrive as one
/// comma-joined string, a slider budget as a `$N/month` string, and the
/// final question (team size or free text) as `team_size`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionnaireSubmission {
    pub position: String,
    pub use_case: String,
    pub budget: String,
    pub company_size: String,
    pub data_types: Vec<String>,
    pub integration_needs: String,
    pub team_size: String,
}

/// An immutable past submission, created server-side
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHistoryEntry {
    pub id: String,
    pub responses: QuestionnaireSubmission,
    /// Ids of the tools recommended for this submission
    #[serde(default)]
    pub recommended_tools: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Request body for saving a tool to a user's list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveToolRequest {
    pub user_id: String,
    pub tool_id: String,
}

// Response envelopes, shaped exactly as the backend returns them.

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolsResponse {
    #[serde(default)]
    pub tools: Vec<Tool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDetailResponse {
    pub tool: Tool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionResponse {
    pub questionnaire_id: String,
    #[serde(default)]
    pub recommended_tools: Vec<Tool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SavedToolsResponse {
    #[serde(default)]
    pub saved_tools: Vec<Tool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecentSearchesResponse {
    #[serde(default)]
    pub recent_searches: Vec<SearchHistoryEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AckResponse {
    pub message: String,
}
