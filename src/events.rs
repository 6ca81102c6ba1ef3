// Event types and payload structures for frontend notification
// Emitted by the discovery session for the embedding UI to render

use serde::{Deserialize, Serialize};

use crate::navigator::AppScreen;

// Event name constants
pub const EVENT_SCREEN_CHANGED: &str = "view:screen_changed";
pub const EVENT_RECOMMENDATIONS_READY: &str = "discovery:recommendations_ready";
pub const EVENT_TOOL_SAVED: &str = "library:tool_saved";
pub const EVENT_TOOL_REMOVED: &str = "library:tool_removed";
pub const EVENT_COLLABORATOR_ERROR: &str = "api:error";

/// Payload for base-screen changes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenChangedPayload {
    pub screen: AppScreen,
}

/// Payload for a completed recommendation submission
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsReadyPayload {
    pub tool_ids: Vec<String>,
}

/// Payload for saved-list changes (both save and remove)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedToolPayload {
    pub tool_id: String,
}

/// Payload for a surfaced, non-fatal collaborator failure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaboratorErrorPayload {
    pub message: String,
}

/// Session events, tagged with the event name constants above
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", content = "payload")]
pub enum SessionEvent {
    #[serde(rename = "view:screen_changed")]
    ScreenChanged(ScreenChangedPayload),
    #[serde(rename = "discovery:recommendations_ready")]
    RecommendationsReady(RecommendationsReadyPayload),
    #[serde(rename = "library:tool_saved")]
    ToolSaved(SavedToolPayload),
    #[serde(rename = "library:tool_removed")]
    ToolRemoved(SavedToolPayload),
    #[serde(rename = "api:error")]
    CollaboratorError(CollaboratorErrorPayload),
}

impl SessionEvent {
    /// Event name for routing to frontend listeners
    pub fn name(&self) -> &'static str {
        match self {
            SessionEvent::ScreenChanged(_) => EVENT_SCREEN_CHANGED,
            SessionEvent::RecommendationsReady(_) => EVENT_RECOMMENDATIONS_READY,
            SessionEvent::ToolSaved(_) => EVENT_TOOL_SAVED,
            SessionEvent::ToolRemoved(_) => EVENT_TOOL_REMOVED,
            SessionEvent::CollaboratorError(_) => EVENT_COLLABORATOR_ERROR,
        }
    }
}
