//! End-to-end discovery flows against an in-memory directory backend

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use finai_tools_lib::api::{ApiError, DirectoryApi};
use finai_tools_lib::models::{QuestionnaireSubmission, SearchHistoryEntry, Tool};
use finai_tools_lib::navigator::AppScreen;
use finai_tools_lib::session::{DiscoverySession, SessionError};
use finai_tools_lib::wizard::{
    CompanySize, DataType, IntegrationNeed, Position, TeamSize, UseCase, WizardStep,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn tool(id: &str, name: &str, category: &str) -> Tool {
    Tool {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        description: format!("{name} description"),
        pricing: "Free".to_string(),
        website: format!("https://example.com/{id}"),
        features: vec!["Dashboards".to_string()],
        target_audience: vec!["Analysts".to_string()],
        ai_summary: None,
    }
}

/// In-memory stand-in for the directory backend. Recommends the first two
/// catalog tools for any submission and records the search history entry
/// the way the real backend does.
struct InMemoryDirectory {
    tools: Vec<Tool>,
    saved: Mutex<Vec<String>>,
    searches: Mutex<Vec<SearchHistoryEntry>>,
    fail_submissions: AtomicBool,
}

impl InMemoryDirectory {
    fn new(tools: Vec<Tool>) -> Self {
        Self {
            tools,
            saved: Mutex::new(Vec::new()),
            searches: Mutex::new(Vec::new()),
            fail_submissions: AtomicBool::new(false),
        }
    }

    fn set_fail_submissions(&self, fail: bool) {
        self.fail_submissions.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl DirectoryApi for InMemoryDirectory {
    async fn list_tools(&self) -> Result<Vec<Tool>, ApiError> {
        Ok(self.tools.clone())
    }

    async fn get_tool_detail(&self, tool_id: &str) -> Result<Tool, ApiError> {
        self.tools
            .iter()
            .find(|t| t.id == tool_id)
            .cloned()
            .map(|mut t| {
                t.ai_summary = Some(format!("AI summary for {}", t.name));
                t
            })
            .ok_or_else(|| ApiError::NotFound {
                resource: format!("tool {tool_id}"),
            })
    }

    async fn submit_questionnaire(
        &self,
        submission: &QuestionnaireSubmission,
    ) -> Result<Vec<Tool>, ApiError> {
        if self.fail_submissions.load(Ordering::SeqCst) {
            return Err(ApiError::Service {
                status: 500,
                message: "recommendation engine unavailable".to_string(),
            });
        }
        let recommended: Vec<Tool> = self.tools.iter().take(2).cloned().collect();
        let entry = SearchHistoryEntry {
            id: Uuid::new_v4().to_string(),
            responses: submission.clone(),
            recommended_tools: recommended.iter().map(|t| t.id.clone()).collect(),
            created_at: Utc::now(),
        };
        self.searches.lock().unwrap().push(entry);
        Ok(recommended)
    }

    async fn list_saved_tools(&self, _user_id: &str) -> Result<Vec<Tool>, ApiError> {
        let saved = self.saved.lock().unwrap();
        Ok(self
            .tools
            .iter()
            .filter(|t| saved.contains(&t.id))
            .cloned()
            .collect())
    }

    async fn save_tool(&self, _user_id: &str, tool_id: &str) -> Result<(), ApiError> {
        let mut saved = self.saved.lock().unwrap();
        if !saved.contains(&tool_id.to_string()) {
            saved.push(tool_id.to_string());
        }
        Ok(())
    }

    async fn remove_saved_tool(&self, _user_id: &str, tool_id: &str) -> Result<(), ApiError> {
        let mut saved = self.saved.lock().unwrap();
        match saved.iter().position(|id| id == tool_id) {
            Some(index) => {
                saved.remove(index);
                Ok(())
            }
            None => Err(ApiError::NotFound {
                resource: format!("saved tool {tool_id}"),
            }),
        }
    }

    async fn list_recent_searches(
        &self,
        _user_id: &str,
    ) -> Result<Vec<SearchHistoryEntry>, ApiError> {
        Ok(self.searches.lock().unwrap().clone())
    }
}

fn catalog() -> Vec<Tool> {
    vec![
        tool("7", "Tableau", "Data Visualization"),
        tool("9", "Power BI", "Data Visualization"),
        tool("12", "R", "Programming Tools"),
    ]
}

fn session_with(directory: Arc<InMemoryDirectory>) -> DiscoverySession {
    DiscoverySession::new(directory, "demo-user-123")
}

fn answer_all_steps(session: &mut DiscoverySession) {
    let wizard = session.wizard_mut();
    wizard.set_position(Position::FinancialAnalyst);
    wizard.add_use_case(UseCase::RiskAnalysis);
    wizard.set_budget_monthly(250);
    wizard.set_company_size(CompanySize::Small);
    wizard.add_data_type(DataType::MarketData);
    wizard.set_integration_needs(IntegrationNeed::ApiIntegrations);
    wizard.set_team_size(TeamSize::TwoToFive);
}

#[tokio::test]
async fn test_full_discovery_flow() -> anyhow::Result<()> {
    init_logging();
    let directory = Arc::new(InMemoryDirectory::new(catalog()));
    let mut session = session_with(directory);

    session.refresh_catalog().await?;
    assert_eq!(session.catalog().len(), 3);

    session.start_discovery();
    assert_eq!(session.navigator().screen(), AppScreen::Wizard);
    assert_eq!(session.wizard().current_step(), WizardStep::Position);

    answer_all_steps(&mut session);
    while session.wizard().current_step() != WizardStep::Summary {
        session.wizard_mut().advance()?;
    }

    session.submit().await?;
    assert_eq!(session.navigator().screen(), AppScreen::Results);
    let ids: Vec<&str> = session
        .navigator()
        .recommendations()
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(ids, vec!["7", "9"]);

    // The submission was recorded server-side and picked up by the refresh
    assert_eq!(session.recent_searches().len(), 1);
    let entry = &session.recent_searches()[0];
    assert_eq!(entry.responses.budget, "$250/month");
    assert_eq!(entry.recommended_tools, vec!["7", "9"]);
    Ok(())
}

#[tokio::test]
async fn test_submission_failure_keeps_wizard_screen() {
    init_logging();
    let directory = Arc::new(InMemoryDirectory::new(catalog()));
    directory.set_fail_submissions(true);
    let mut session = session_with(directory.clone());
    session.refresh_catalog().await.unwrap();

    session.start_discovery();
    answer_all_steps(&mut session);

    let err = session.submit().await.unwrap_err();
    assert!(matches!(err, SessionError::Api(ApiError::Service { status: 500, .. })));
    assert_eq!(session.navigator().screen(), AppScreen::Wizard);
    assert!(session.navigator().recommendations().is_empty());

    // Manual retry after the backend recovers
    directory.set_fail_submissions(false);
    session.submit().await.unwrap();
    assert_eq!(session.navigator().screen(), AppScreen::Results);
}

#[tokio::test]
async fn test_incomplete_wizard_cannot_submit() {
    init_logging();
    let directory = Arc::new(InMemoryDirectory::new(catalog()));
    let mut session = session_with(directory);

    session.start_discovery();
    session.wizard_mut().set_position(Position::DataAnalyst);

    let err = session.submit().await.unwrap_err();
    assert!(matches!(err, SessionError::Wizard(_)));
    assert_eq!(session.navigator().screen(), AppScreen::Wizard);
}

#[tokio::test]
async fn test_replay_reproduces_past_results() -> anyhow::Result<()> {
    init_logging();
    let directory = Arc::new(InMemoryDirectory::new(catalog()));
    let mut session = session_with(directory);
    session.refresh_catalog().await?;

    session.start_discovery();
    answer_all_steps(&mut session);
    session.submit().await?;

    session.open_recent().await?;
    assert_eq!(session.navigator().screen(), AppScreen::Recent);
    let entry_id = session.recent_searches()[0].id.clone();
    let expected = session.recent_searches()[0].recommended_tools.clone();

    session.replay_search(&entry_id)?;
    assert_eq!(session.navigator().screen(), AppScreen::Results);
    let replayed: Vec<String> = session
        .navigator()
        .recommendations()
        .iter()
        .map(|t| t.id.clone())
        .collect();
    assert_eq!(replayed, expected);
    Ok(())
}

#[tokio::test]
async fn test_replay_unknown_search_is_an_error() {
    init_logging();
    let directory = Arc::new(InMemoryDirectory::new(catalog()));
    let mut session = session_with(directory);
    session.open_recent().await.unwrap();

    let err = session.replay_search("missing").unwrap_err();
    assert!(matches!(err, SessionError::UnknownSearch(_)));
    assert_eq!(session.navigator().screen(), AppScreen::Recent);
}

#[tokio::test]
async fn test_tool_detail_not_found_does_not_open_overlay() {
    init_logging();
    let directory = Arc::new(InMemoryDirectory::new(catalog()));
    let mut session = session_with(directory);

    let err = session.open_tool_detail("999").await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound { .. }));
    assert!(session.navigator().tool_detail().is_none());

    session.open_tool_detail("7").await.unwrap();
    let detail = session.navigator().tool_detail().unwrap();
    assert_eq!(detail.name, "Tableau");
    assert!(detail.ai_summary.is_some());
}

#[tokio::test]
async fn test_save_and_remove_tool_refresh_saved_list() -> anyhow::Result<()> {
    init_logging();
    let directory = Arc::new(InMemoryDirectory::new(catalog()));
    let mut session = session_with(directory);

    session.save_tool("9").await?;
    assert_eq!(session.saved_tools().len(), 1);
    assert_eq!(session.saved_tools()[0].id, "9");

    session.remove_saved_tool("9").await?;
    assert!(session.saved_tools().is_empty());

    let err = session.remove_saved_tool("9").await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound { .. }));
    Ok(())
}

#[tokio::test]
async fn test_session_emits_frontend_events() -> anyhow::Result<()> {
    init_logging();
    let directory = Arc::new(InMemoryDirectory::new(catalog()));
    let (sender, mut receiver) = tokio::sync::mpsc::unbounded_channel();
    let mut session = session_with(directory).with_events(sender);
    session.refresh_catalog().await?;

    session.start_discovery();
    answer_all_steps(&mut session);
    session.submit().await?;

    let mut names = Vec::new();
    while let Ok(event) = receiver.try_recv() {
        names.push(event.name());
    }
    assert!(names.contains(&finai_tools_lib::events::EVENT_SCREEN_CHANGED));
    assert!(names.contains(&finai_tools_lib::events::EVENT_RECOMMENDATIONS_READY));
    Ok(())
}
