//! Issue endpoints: retrieval, comments, description, assignment, user
//! search and workflow transitions.

use reqwest::Method;
use tracing::{debug, instrument, warn};

use super::client::{decode, segment, JiraClient};
use super::error::Result;
use super::types::{
    AssigneeRequest, CommentRequest, DescriptionRequest, Transition, TransitionRequest,
    TransitionsResponse, User,
};

impl JiraClient {
    /// Fetch an issue by key or id and return the raw JSON body.
    #[instrument(skip(self), fields(issue_key = %key))]
    pub async fn get_issue(&self, key: &str) -> Result<String> {
        debug!("Fetching issue");
        self.get_text(&self.issue_url(key, "")).await
    }

    /// Add a single-paragraph plain-text comment to an issue.
    ///
    /// Returns the created comment as raw JSON.
    #[instrument(skip(self, text), fields(issue_key = %key))]
    pub async fn add_comment(&self, key: &str, text: &str) -> Result<String> {
        self.add_comment_doc(key, &CommentRequest::plain(text)).await
    }

    /// Add a comment with a caller-built document body.
    #[instrument(skip(self, comment), fields(issue_key = %key))]
    pub async fn add_comment_doc(&self, key: &str, comment: &CommentRequest) -> Result<String> {
        debug!(paragraphs = comment.body.content.len(), "Adding comment");
        self.send_json(Method::POST, &self.issue_url(key, "/comment"), comment)
            .await
    }

    /// Replace the issue description with a single paragraph of text.
    ///
    /// Returns whether Jira accepted the update. A transport failure is an
    /// error, a rejected update is `Ok(false)`.
    #[instrument(skip(self, description), fields(issue_key = %key))]
    pub async fn set_description(&self, key: &str, description: &str) -> Result<bool> {
        let response = self
            .send_json_raw(
                Method::PUT,
                &self.issue_url(key, ""),
                &DescriptionRequest::plain(description),
            )
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, body = %body, "Description update rejected");
        }
        Ok(status.is_success())
    }

    /// Assign an issue to an account, or unassign it with `None`.
    #[instrument(skip(self), fields(issue_key = %key))]
    pub async fn assign_issue(&self, key: &str, account_id: Option<&str>) -> Result<()> {
        let payload = AssigneeRequest {
            account_id: account_id.map(str::to_string),
        };
        self.send_json(Method::PUT, &self.issue_url(key, "/assignee"), &payload)
            .await?;
        Ok(())
    }

    /// Search users by name or email and return the raw JSON array.
    #[instrument(skip(self))]
    pub async fn get_account(&self, query: &str) -> Result<String> {
        self.get_text(&self.user_search_url(query)).await
    }

    /// Search users by name or email.
    pub async fn search_users(&self, query: &str) -> Result<Vec<User>> {
        let body = self.get_account(query).await?;
        decode(&body)
    }

    /// Get the transitions available on an issue as raw JSON.
    #[instrument(skip(self), fields(issue_key = %key))]
    pub async fn get_transitions(&self, key: &str) -> Result<String> {
        self.get_text(&self.issue_url(key, "/transitions")).await
    }

    /// Get the transitions available on an issue.
    pub async fn transitions(&self, key: &str) -> Result<Vec<Transition>> {
        let body = self.get_transitions(key).await?;
        let response: TransitionsResponse = decode(&body)?;
        Ok(response.transitions)
    }

    /// Move an issue through a workflow transition.
    ///
    /// Returns the raw response body, which Jira leaves empty on success.
    #[instrument(skip(self), fields(issue_key = %key))]
    pub async fn transition_issue(&self, key: &str, transition_id: &str) -> Result<String> {
        self.send_json(
            Method::POST,
            &self.issue_url(key, "/transitions"),
            &TransitionRequest::new(transition_id),
        )
        .await
    }

    pub(crate) fn issue_url(&self, key: &str, suffix: &str) -> String {
        self.api_url(&format!("/issue/{}{}", segment(key), suffix))
    }

    pub(crate) fn user_search_url(&self, query: &str) -> String {
        self.api_url(&format!("/user/search?query={}", urlencoding::encode(query)))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{basic_auth, body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::api::client::tests::test_client;
    use crate::api::error::ApiError;
    use crate::api::types::CommentRequest;
    use crate::api::JiraClient;

    #[test]
    fn test_issue_urls() {
        let client =
            JiraClient::with_credentials("https://example.atlassian.net", "a@b.com", "t").unwrap();

        assert_eq!(
            client.issue_url("OPS-12", ""),
            "https://example.atlassian.net/rest/api/3/issue/OPS-12"
        );
        assert_eq!(
            client.issue_url("OPS-12", "/comment"),
            "https://example.atlassian.net/rest/api/3/issue/OPS-12/comment"
        );
        assert_eq!(
            client.user_search_url("sam doe@example.com"),
            "https://example.atlassian.net/rest/api/3/user/search?query=sam%20doe%40example.com"
        );
    }

    #[tokio::test]
    async fn test_get_issue_returns_raw_body() {
        let server = MockServer::start().await;
        let client = test_client(&server);

        Mock::given(method("GET"))
            .and(path("/rest/api/3/issue/OPS-7"))
            .and(basic_auth("test_user", "test_token"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"id":"10002","key":"OPS-7","fields":{}}"#),
            )
            .mount(&server)
            .await;

        let body = client.get_issue("OPS-7").await.unwrap();
        assert_eq!(body, r#"{"id":"10002","key":"OPS-7","fields":{}}"#);
    }

    #[tokio::test]
    async fn test_get_issue_not_found() {
        let server = MockServer::start().await;
        let client = test_client(&server);

        Mock::given(method("GET"))
            .and(path("/rest/api/3/issue/NOPE-1"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "errorMessages": ["Issue does not exist or you do not have permission to see it."],
                "errors": {}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let err = client.get_issue("NOPE-1").await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_add_comment_escapes_text() {
        let server = MockServer::start().await;
        let client = test_client(&server);
        let text = r#"He said "done" \o/"#;

        Mock::given(method("POST"))
            .and(path("/rest/api/3/issue/OPS-7/comment"))
            .and(body_json(json!({
                "body": {
                    "type": "doc",
                    "version": 1,
                    "content": [{
                        "type": "paragraph",
                        "content": [{ "type": "text", "text": text }]
                    }]
                }
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "10100" })))
            .expect(1)
            .mount(&server)
            .await;

        let body = client.add_comment("OPS-7", text).await.unwrap();
        assert!(body.contains("10100"));
    }

    #[tokio::test]
    async fn test_add_comment_doc_multiple_paragraphs() {
        let server = MockServer::start().await;
        let client = test_client(&server);

        Mock::given(method("POST"))
            .and(path("/rest/api/3/issue/OPS-7/comment"))
            .and(body_json(json!({
                "body": {
                    "type": "doc",
                    "version": 1,
                    "content": [
                        { "type": "paragraph", "content": [{ "type": "text", "text": "Deployed." }] },
                        { "type": "paragraph", "content": [{ "type": "text", "text": "Closing soon." }] }
                    ]
                }
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "10101" })))
            .expect(1)
            .mount(&server)
            .await;

        let comment = CommentRequest::paragraphs(["Deployed.", "Closing soon."]);
        client.add_comment_doc("OPS-7", &comment).await.unwrap();
    }

    #[tokio::test]
    async fn test_set_description_reports_success() {
        let server = MockServer::start().await;
        let client = test_client(&server);

        Mock::given(method("PUT"))
            .and(path("/rest/api/3/issue/OPS-7"))
            .and(body_json(json!({
                "fields": {
                    "description": {
                        "type": "doc",
                        "version": 1,
                        "content": [{
                            "type": "paragraph",
                            "content": [{ "type": "text", "text": "Updated scope" }]
                        }]
                    }
                }
            })))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        assert!(client.set_description("OPS-7", "Updated scope").await.unwrap());
    }

    #[tokio::test]
    async fn test_set_description_rejected_is_false() {
        let server = MockServer::start().await;
        let client = test_client(&server);

        Mock::given(method("PUT"))
            .and(path("/rest/api/3/issue/OPS-7"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "errorMessages": [],
                "errors": { "description": "Field 'description' cannot be set." }
            })))
            .expect(1)
            .mount(&server)
            .await;

        assert!(!client.set_description("OPS-7", "nope").await.unwrap());
    }

    #[tokio::test]
    async fn test_assign_issue() {
        let server = MockServer::start().await;
        let client = test_client(&server);

        Mock::given(method("PUT"))
            .and(path("/rest/api/3/issue/OPS-7/assignee"))
            .and(body_json(json!({ "accountId": "5b10ac8d82e05b22cc7d4ef5" })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        client
            .assign_issue("OPS-7", Some("5b10ac8d82e05b22cc7d4ef5"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_unassign_issue_sends_null() {
        let server = MockServer::start().await;
        let client = test_client(&server);

        Mock::given(method("PUT"))
            .and(path("/rest/api/3/issue/OPS-7/assignee"))
            .and(body_json(json!({ "accountId": null })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        client.assign_issue("OPS-7", None).await.unwrap();
    }

    #[tokio::test]
    async fn test_writes_are_not_retried() {
        let server = MockServer::start().await;
        let client = test_client(&server);

        Mock::given(method("PUT"))
            .and(path("/rest/api/3/issue/OPS-7/assignee"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let err = client.assign_issue("OPS-7", None).await.unwrap_err();
        assert!(matches!(err, ApiError::ServerError(_)));
    }

    #[tokio::test]
    async fn test_search_users() {
        let server = MockServer::start().await;
        let client = test_client(&server);

        Mock::given(method("GET"))
            .and(path("/rest/api/3/user/search"))
            .and(query_param("query", "sam"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "accountId": "abc",
                    "accountType": "atlassian",
                    "displayName": "Sam Doe",
                    "active": true
                },
                {
                    "accountId": "def",
                    "displayName": "Samira Ali",
                    "active": false
                }
            ])))
            .mount(&server)
            .await;

        let users = client.search_users("sam").await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].to_string(), "Sam Doe");
        assert!(!users[1].active);
    }

    #[tokio::test]
    async fn test_transitions() {
        let server = MockServer::start().await;
        let client = test_client(&server);

        Mock::given(method("GET"))
            .and(path("/rest/api/3/issue/OPS-7/transitions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "transitions": [
                    { "id": "11", "name": "To Do" },
                    { "id": "21", "name": "In Progress" },
                    { "id": "31", "name": "Done" }
                ]
            })))
            .mount(&server)
            .await;

        let transitions = client.transitions("OPS-7").await.unwrap();
        assert_eq!(transitions.len(), 3);
        assert_eq!(transitions[2].id, "31");
        assert_eq!(transitions[2].name, "Done");
    }

    #[tokio::test]
    async fn test_transition_issue() {
        let server = MockServer::start().await;
        let client = test_client(&server);

        Mock::given(method("POST"))
            .and(path("/rest/api/3/issue/OPS-7/transitions"))
            .and(body_json(json!({ "transition": { "id": "21" } })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let body = client.transition_issue("OPS-7", "21").await.unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_transition_issue_invalid_transition() {
        let server = MockServer::start().await;
        let client = test_client(&server);

        Mock::given(method("POST"))
            .and(path("/rest/api/3/issue/OPS-7/transitions"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "errorMessages": ["Transition id 'invalid' is not valid for this issue."],
                "errors": {}
            })))
            .mount(&server)
            .await;

        let err = client.transition_issue("OPS-7", "invalid").await.unwrap_err();
        match err {
            ApiError::BadRequest(msg) => assert!(msg.contains("not valid")),
            other => panic!("Expected BadRequest, got {:?}", other),
        }
    }
}
