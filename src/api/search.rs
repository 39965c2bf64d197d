//! JQL issue search.

use reqwest::Method;
use tracing::{debug, instrument};

use super::client::{decode, JiraClient};
use super::error::Result;
use super::pagination::collect_pages;
use super::types::{SearchIssue, SearchRequest, SearchResponse};

impl JiraClient {
    /// Run a JQL query and collect every matching issue, walking all pages.
    ///
    /// Each issue carries its summary, status and assignee.
    #[instrument(skip(self), fields(jql = %jql))]
    pub async fn get_issues_via_jql(&self, jql: &str) -> Result<Vec<SearchIssue>> {
        let url = self.api_url("/search");
        let page_size = self.search_page_size;

        let issues = collect_pages(|start_at| {
            let url = &url;
            async move { self.search_page(url, jql, start_at, page_size).await }
        })
        .await?;

        debug!("JQL search returned {} issues", issues.len());
        Ok(issues)
    }

    async fn search_page(
        &self,
        url: &str,
        jql: &str,
        start_at: u32,
        max_results: u32,
    ) -> Result<SearchResponse> {
        let request = SearchRequest::new(jql, start_at, max_results);
        let body = self.send_json(Method::POST, url, &request).await?;
        decode(&body)
    }
}
