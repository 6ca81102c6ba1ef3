//! Discovery session orchestration
//!
//! Single-threaded, event-driven glue between the wizard engine, the view
//! navigator, and the directory backend. All state mutation happens
//! synchronously in response to a user action or the completion of one
//! collaborator call; the `busy` flag gates interaction during calls that
//! feed a screen transition.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::api::{ApiError, DirectoryApi};
use crate::events::{self, SessionEvent};
use crate::models::{SearchHistoryEntry, Tool};
use crate::navigator::ViewNavigator;
use crate::wizard::{WizardEngine, WizardError};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Wizard(#[from] WizardError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("a submission is already in flight")]
    Busy,

    #[error("unknown search {0}")]
    UnknownSearch(String),
}

/// One user's discovery session: wizard, navigation, and cached backend data
pub struct DiscoverySession {
    id: String,
    user_id: String,
    api: Arc<dyn DirectoryApi>,
    wizard: WizardEngine,
    navigator: ViewNavigator,
    catalog: Vec<Tool>,
    saved_tools: Vec<Tool>,
    recent_searches: Vec<SearchHistoryEntry>,
    busy: bool,
    events: Option<mpsc::UnboundedSender<SessionEvent>>,
}

impl DiscoverySession {
    pub fn new(api: Arc<dyn DirectoryApi>, user_id: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            api,
            wizard: WizardEngine::new(),
            navigator: ViewNavigator::new(),
            catalog: Vec::new(),
            saved_tools: Vec::new(),
            recent_searches: Vec::new(),
            busy: false,
            events: None,
        }
    }

    /// Attach a channel for frontend notification events
    pub fn with_events(mut self, sender: mpsc::UnboundedSender<SessionEvent>) -> Self {
        self.events = Some(sender);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn wizard(&self) -> &WizardEngine {
        &self.wizard
    }

    pub fn wizard_mut(&mut self) -> &mut WizardEngine {
        &mut self.wizard
    }

    pub fn navigator(&self) -> &ViewNavigator {
        &self.navigator
    }

    pub fn catalog(&self) -> &[Tool] {
        &self.catalog
    }

    pub fn saved_tools(&self) -> &[Tool] {
        &self.saved_tools
    }

    pub fn recent_searches(&self) -> &[SearchHistoryEntry] {
        &self.recent_searches
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    fn emit(&self, event: SessionEvent) {
        if let Some(sender) = &self.events {
            let _ = sender.send(event);
        }
    }

    fn emit_screen_changed(&self) {
        self.emit(SessionEvent::ScreenChanged(events::ScreenChangedPayload {
            screen: self.navigator.screen(),
        }));
    }

    /// Load the tool catalog, typically once at startup
    pub async fn refresh_catalog(&mut self) -> Result<(), ApiError> {
        match self.api.list_tools().await {
            Ok(tools) => {
                self.catalog = tools;
                Ok(())
            }
            Err(err) => {
                log::warn!("session {}: catalog refresh failed: {}", self.id, err);
                Err(err)
            }
        }
    }

    pub async fn refresh_saved(&mut self) -> Result<(), ApiError> {
        match self.api.list_saved_tools(&self.user_id).await {
            Ok(tools) => {
                self.saved_tools = tools;
                Ok(())
            }
            Err(err) => {
                log::warn!("session {}: saved tools refresh failed: {}", self.id, err);
                Err(err)
            }
        }
    }

    pub async fn refresh_recent(&mut self) -> Result<(), ApiError> {
        match self.api.list_recent_searches(&self.user_id).await {
            Ok(searches) => {
                self.recent_searches = searches;
                Ok(())
            }
            Err(err) => {
                log::warn!("session {}: recent searches refresh failed: {}", self.id, err);
                Err(err)
            }
        }
    }

    pub fn open_dashboard(&mut self) {
        self.navigator.show_dashboard();
        self.emit_screen_changed();
    }

    /// Enter the wizard from anywhere; step resets to 1, answers persist.
    pub fn start_discovery(&mut self) {
        self.navigator.start_discovery(&mut self.wizard);
        self.emit_screen_changed();
    }

    /// Enter the Saved screen and re-query its projection. A refresh failure
    /// leaves the screen up with the previous list.
    pub async fn open_saved(&mut self) -> Result<(), ApiError> {
        self.navigator.show_saved();
        self.emit_screen_changed();
        self.refresh_saved().await
    }

    /// Enter the Recent screen and re-query its projection.
    pub async fn open_recent(&mut self) -> Result<(), ApiError> {
        self.navigator.show_recent();
        self.emit_screen_changed();
        self.refresh_recent().await
    }

    /// Submit the completed questionnaire for recommendations.
    ///
    /// Builds the normalized payload, calls the backend under the busy gate,
    /// and applies the result through the navigator's generation token, so a
    /// response that arrives after the user navigated away or re-submitted
    /// is discarded. On failure the screen stays on the wizard.
    pub async fn submit(&mut self) -> Result<(), SessionError> {
        if self.busy {
            return Err(SessionError::Busy);
        }
        let submission = self.wizard.build_submission()?;
        let token = self.navigator.begin_submission();

        self.busy = true;
        let result = self.api.submit_questionnaire(&submission).await;
        self.busy = false;

        match result {
            Ok(tools) => {
                let tool_ids: Vec<String> = tools.iter().map(|t| t.id.clone()).collect();
                if self.navigator.complete_submission(token, tools) {
                    log::info!(
                        "session {}: submission accepted, {} recommendations",
                        self.id,
                        tool_ids.len()
                    );
                    self.emit(SessionEvent::RecommendationsReady(
                        events::RecommendationsReadyPayload { tool_ids },
                    ));
                    self.emit_screen_changed();
                    // Best-effort: the new entry should show up under Recent.
                    if let Err(err) = self.refresh_recent().await {
                        log::warn!("session {}: post-submit history refresh failed: {}", self.id, err);
                    }
                } else {
                    log::info!("session {}: discarded superseded submission response", self.id);
                }
                Ok(())
            }
            Err(err) => {
                log::warn!("session {}: submission failed: {}", self.id, err);
                self.emit(SessionEvent::CollaboratorError(
                    events::CollaboratorErrorPayload {
                        message: err.to_string(),
                    },
                ));
                Err(err.into())
            }
        }
    }

    /// Open the detail overlay for a tool. On a stale or unknown id the
    /// overlay does not open and the error is surfaced.
    pub async fn open_tool_detail(&mut self, tool_id: &str) -> Result<(), ApiError> {
        self.busy = true;
        let result = self.api.get_tool_detail(tool_id).await;
        self.busy = false;

        match result {
            Ok(tool) => {
                self.navigator.open_tool_detail(tool);
                Ok(())
            }
            Err(err) => {
                log::warn!("session {}: tool detail {} failed: {}", self.id, tool_id, err);
                Err(err)
            }
        }
    }

    pub fn close_tool_detail(&mut self) {
        self.navigator.close_tool_detail();
    }

    pub fn open_settings(&mut self) {
        self.navigator.open_settings();
    }

    pub fn close_settings(&mut self) {
        self.navigator.close_settings();
    }

    pub async fn save_tool(&mut self, tool_id: &str) -> Result<(), ApiError> {
        self.api.save_tool(&self.user_id, tool_id).await?;
        self.emit(SessionEvent::ToolSaved(events::SavedToolPayload {
            tool_id: tool_id.to_string(),
        }));
        self.refresh_saved().await
    }

    pub async fn remove_saved_tool(&mut self, tool_id: &str) -> Result<(), ApiError> {
        self.api.remove_saved_tool(&self.user_id, tool_id).await?;
        self.emit(SessionEvent::ToolRemoved(events::SavedToolPayload {
            tool_id: tool_id.to_string(),
        }));
        self.refresh_saved().await
    }

    /// Replay a past search from the Recent screen: pure local recombination
    /// of the cached catalog against the entry's stored tool ids.
    pub fn replay_search(&mut self, search_id: &str) -> Result<(), SessionError> {
        let entry = self
            .recent_searches
            .iter()
            .find(|entry| entry.id == search_id)
            .cloned()
            .ok_or_else(|| SessionError::UnknownSearch(search_id.to_string()))?;
        self.navigator.replay_search(&entry, &self.catalog);
        self.emit_screen_changed();
        Ok(())
    }
}
