//! View navigation state
//!
//! Owns the single active base screen, the two overlays above it, the
//! active recommendation set, and the submission generation counter that
//! guards against stale recommendation responses.

use serde::{Deserialize, Serialize};

use crate::models::{SearchHistoryEntry, Tool};
use crate::wizard::WizardEngine;

/// Top-level screens. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppScreen {
    Dashboard,
    Wizard,
    Results,
    Saved,
    Recent,
}

impl AppScreen {
    pub fn all() -> &'static [AppScreen] {
        &[
            AppScreen::Dashboard,
            AppScreen::Wizard,
            AppScreen::Results,
            AppScreen::Saved,
            AppScreen::Recent,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AppScreen::Dashboard => "Dashboard",
            AppScreen::Wizard => "Find Tools",
            AppScreen::Results => "Recommendations",
            AppScreen::Saved => "Saved Tools",
            AppScreen::Recent => "Recent Searches",
        }
    }
}

impl Default for AppScreen {
    fn default() -> Self {
        AppScreen::Dashboard
    }
}

/// Screen state: one base screen plus two independent overlays.
///
/// Overlays never change the base screen, and closing one returns to
/// whatever base screen was beneath it. This is a pair of independent
/// dimensions, not a stack.
#[derive(Debug, Clone, Default)]
pub struct ViewNavigator {
    screen: AppScreen,
    recommendations: Vec<Tool>,
    tool_detail: Option<Tool>,
    settings_open: bool,
    submission_generation: u64,
}

impl ViewNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> AppScreen {
        self.screen
    }

    /// The active recommendation set, shown on the Results screen.
    /// Superseded wholesale on each submission or history replay.
    pub fn recommendations(&self) -> &[Tool] {
        &self.recommendations
    }

    pub fn tool_detail(&self) -> Option<&Tool> {
        self.tool_detail.as_ref()
    }

    pub fn is_settings_open(&self) -> bool {
        self.settings_open
    }

    pub fn show_dashboard(&mut self) {
        self.screen = AppScreen::Dashboard;
    }

    /// Enter the wizard. The engine jumps back to step 1; its answers are
    /// untouched.
    pub fn start_discovery(&mut self, wizard: &mut WizardEngine) {
        wizard.reset_to_start();
        self.screen = AppScreen::Wizard;
    }

    pub fn show_saved(&mut self) {
        self.screen = AppScreen::Saved;
    }

    pub fn show_recent(&mut self) {
        self.screen = AppScreen::Recent;
    }

    /// Register a new outstanding submission and get its token. Any earlier
    /// in-flight submission is superseded from this point on.
    pub fn begin_submission(&mut self) -> u64 {
        self.submission_generation += 1;
        self.submission_generation
    }

    /// Apply a completed submission. The result is taken only when the token
    /// is still the latest and the user is still on the wizard screen;
    /// superseded or off-screen completions are discarded. Returns whether
    /// the result was applied.
    pub fn complete_submission(&mut self, token: u64, tools: Vec<Tool>) -> bool {
        if token != self.submission_generation || self.screen != AppScreen::Wizard {
            return false;
        }
        self.recommendations = tools;
        self.screen = AppScreen::Results;
        true
    }

    /// Reconstruct a past search's results from the local catalog: the tools
    /// whose ids the entry recorded, in catalog order. No collaborator call.
    pub fn replay_search(&mut self, entry: &SearchHistoryEntry, catalog: &[Tool]) {
        self.recommendations = catalog
            .iter()
            .filter(|tool| entry.recommended_tools.contains(&tool.id))
            .cloned()
            .collect();
        self.screen = AppScreen::Results;
    }

    pub fn open_tool_detail(&mut self, tool: Tool) {
        self.tool_detail = Some(tool);
    }

    pub fn close_tool_detail(&mut self) {
        self.tool_detail = None;
    }

    pub fn open_settings(&mut self) {
        self.settings_open = true;
    }

    pub fn close_settings(&mut self) {
        self.settings_open = false;
    }
}
