//! Agile API endpoints: boards, sprints and sprint issues.

use serde_json::json;
use tracing::{debug, instrument};

use super::client::JiraClient;
use super::error::Result;
use super::pagination::collect_pages;
use super::types::{Board, BoardsPage, Sprint, SprintIssuesPage, SprintState, SprintsPage};

impl JiraClient {
    /// List every board visible to the user, walking all pages.
    #[instrument(skip(self))]
    pub async fn boards(&self) -> Result<Vec<Board>> {
        let boards = collect_pages(|start_at| async move {
            self.get::<BoardsPage>(&self.boards_url(start_at)).await
        })
        .await?;

        debug!("Fetched {} boards", boards.len());
        Ok(boards)
    }

    /// List every board as a JSON array.
    pub async fn get_boards(&self) -> Result<String> {
        let boards = self.boards().await?;
        Ok(serde_json::to_string(&boards)?)
    }

    /// Get the active sprint(s) of a board as raw JSON.
    #[instrument(skip(self))]
    pub async fn get_active_sprint(&self, board_id: u64) -> Result<String> {
        self.get_text(&self.sprints_url(board_id, Some(SprintState::Active), None))
            .await
    }

    /// List the sprints of a board, optionally filtered by state, walking all pages.
    #[instrument(skip(self))]
    pub async fn sprints(&self, board_id: u64, state: Option<SprintState>) -> Result<Vec<Sprint>> {
        let sprints = collect_pages(|start_at| async move {
            self.get::<SprintsPage>(&self.sprints_url(board_id, state, Some(start_at)))
                .await
        })
        .await?;

        debug!("Fetched {} sprints", sprints.len());
        Ok(sprints)
    }

    /// Collect every issue in a sprint, walking all pages.
    #[instrument(skip(self))]
    pub async fn sprint_issues(
        &self,
        board_id: u64,
        sprint_id: u64,
    ) -> Result<Vec<serde_json::Value>> {
        let issues = collect_pages(|start_at| async move {
            self.get::<SprintIssuesPage>(&self.sprint_issues_url(board_id, sprint_id, start_at))
                .await
        })
        .await?;

        debug!("Fetched {} sprint issues", issues.len());
        Ok(issues)
    }

    /// Collect every issue in a sprint as `{ "issues": [...] }` JSON.
    pub async fn get_sprint_issues(&self, board_id: u64, sprint_id: u64) -> Result<String> {
        let issues = self.sprint_issues(board_id, sprint_id).await?;
        Ok(serde_json::to_string(&json!({ "issues": issues }))?)
    }

    pub(crate) fn boards_url(&self, start_at: u32) -> String {
        self.agile_url(&format!(
            "/board?startAt={}&maxResults={}",
            start_at, self.board_page_size
        ))
    }

    pub(crate) fn sprints_url(
        &self,
        board_id: u64,
        state: Option<SprintState>,
        start_at: Option<u32>,
    ) -> String {
        let mut params = Vec::new();
        if let Some(state) = state {
            params.push(format!("state={}", state));
        }
        if let Some(start_at) = start_at {
            params.push(format!("startAt={}", start_at));
            params.push(format!("maxResults={}", self.board_page_size));
        }

        let mut url = self.agile_url(&format!("/board/{}/sprint", board_id));
        if !params.is_empty() {
            url.push('?');
            url.push_str(&params.join("&"));
        }
        url
    }

    pub(crate) fn sprint_issues_url(&self, board_id: u64, sprint_id: u64, start_at: u32) -> String {
        self.agile_url(&format!(
            "/board/{}/sprint/{}/issue?startAt={}&maxResults={}",
            board_id, sprint_id, start_at, self.board_page_size
        ))
    }
}
