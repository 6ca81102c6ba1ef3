//! Directory backend collaborators
//!
//! The core consumes the backend through `DirectoryApi`, a trait seam so the
//! session logic can run against an in-memory double in tests.
//! `HttpDirectoryClient` is the production implementation over the backend's
//! JSON routes.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{
    AckResponse, QuestionnaireSubmission, RecentSearchesResponse, SaveToolRequest,
    SavedToolsResponse, SearchHistoryEntry, SubmissionResponse, Tool, ToolDetailResponse,
    ToolsResponse,
};

/// Collaborator failures. All are recoverable; retry is always a manual
/// repeat of the user action.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("directory service error ({status}): {message}")]
    Service { status: u16, message: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Request/response contract with the directory backend
#[async_trait]
pub trait DirectoryApi: Send + Sync {
    /// Full tool catalog
    async fn list_tools(&self) -> Result<Vec<Tool>, ApiError>;

    /// Single tool with extended fields (AI summary, features, audience)
    async fn get_tool_detail(&self, tool_id: &str) -> Result<Tool, ApiError>;

    /// Ranked recommendations for a submitted questionnaire
    async fn submit_questionnaire(
        &self,
        submission: &QuestionnaireSubmission,
    ) -> Result<Vec<Tool>, ApiError>;

    async fn list_saved_tools(&self, user_id: &str) -> Result<Vec<Tool>, ApiError>;

    async fn save_tool(&self, user_id: &str, tool_id: &str) -> Result<(), ApiError>;

    async fn remove_saved_tool(&self, user_id: &str, tool_id: &str) -> Result<(), ApiError>;

    async fn list_recent_searches(&self, user_id: &str) -> Result<Vec<SearchHistoryEntry>, ApiError>;
}

/// HTTP client for the directory backend
pub struct HttpDirectoryClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpDirectoryClient {
    /// Client for the backend named by the environment configuration
    pub fn from_config(config: &crate::config::ApiConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn check(
        response: reqwest::Response,
        resource: &str,
    ) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                resource: resource.to_string(),
            });
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Service {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl DirectoryApi for HttpDirectoryClient {
    async fn list_tools(&self) -> Result<Vec<Tool>, ApiError> {
        let response = self.client.get(self.url("/api/tools")).send().await?;
        let body: ToolsResponse = Self::check(response, "tool catalog").await?.json().await?;
        Ok(body.tools)
    }

    async fn get_tool_detail(&self, tool_id: &str) -> Result<Tool, ApiError> {
        let response = self
            .client
            .get(self.url(&format!("/api/tools/{}", tool_id)))
            .send()
            .await?;
        let body: ToolDetailResponse = Self::check(response, "tool").await?.json().await?;
        Ok(body.tool)
    }

    async fn submit_questionnaire(
        &self,
        submission: &QuestionnaireSubmission,
    ) -> Result<Vec<Tool>, ApiError> {
        let response = self
            .client
            .post(self.url("/api/questionnaire"))
            .json(submission)
            .send()
            .await?;
        let body: SubmissionResponse = Self::check(response, "questionnaire")
            .await?
            .json()
            .await?;
        log::debug!(
            "questionnaire {} returned {} recommendations",
            body.questionnaire_id,
            body.recommended_tools.len()
        );
        Ok(body.recommended_tools)
    }

    async fn list_saved_tools(&self, user_id: &str) -> Result<Vec<Tool>, ApiError> {
        let response = self
            .client
            .get(self.url(&format!("/api/saved-tools/{}", user_id)))
            .send()
            .await?;
        let body: SavedToolsResponse = Self::check(response, "saved tools").await?.json().await?;
        Ok(body.saved_tools)
    }

    async fn save_tool(&self, user_id: &str, tool_id: &str) -> Result<(), ApiError> {
        let request = SaveToolRequest {
            user_id: user_id.to_string(),
            tool_id: tool_id.to_string(),
        };
        let response = self
            .client
            .post(self.url("/api/saved-tools"))
            .json(&request)
            .send()
            .await?;
        let body: AckResponse = Self::check(response, "saved tool").await?.json().await?;
        log::debug!("save_tool {}: {}", tool_id, body.message);
        Ok(())
    }

    async fn remove_saved_tool(&self, user_id: &str, tool_id: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url(&format!("/api/saved-tools/{}/{}", user_id, tool_id)))
            .send()
            .await?;
        let body: AckResponse = Self::check(response, "saved tool").await?.json().await?;
        log::debug!("remove_saved_tool {}: {}", tool_id, body.message);
        Ok(())
    }

    async fn list_recent_searches(
        &self,
        user_id: &str,
    ) -> Result<Vec<SearchHistoryEntry>, ApiError> {
        let response = self
            .client
            .get(self.url(&format!("/api/recent-searches/{}", user_id)))
            .send()
            .await?;
        let body: RecentSearchesResponse = Self::check(response, "recent searches")
            .await?
            .json()
            .await?;
        Ok(body.recent_searches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_stripped() {
        let client = HttpDirectoryClient::new("http://localhost:8001/");
        assert_eq!(client.url("/api/tools"), "http://localhost:8001/api/tools");
    }
}
