//! Jira API request and response types.
//!
//! These mirror the JSON shapes of the Jira Cloud REST v3 and Agile 1.0
//! endpoints. Response types default every field that Jira may omit, so a
//! sparse payload still decodes.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::pagination::{Page, PageInfo};

fn default_true() -> bool {
    true
}

/// The current authenticated user.
///
/// Returned by `GET /rest/api/3/myself`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    /// The user's account ID.
    pub account_id: String,
    /// The user's display name.
    pub display_name: String,
    /// The user's email address (may be empty if hidden).
    #[serde(default)]
    pub email_address: String,
    /// Whether the user is active.
    #[serde(default = "default_true")]
    pub active: bool,
    /// The user's timezone.
    #[serde(default)]
    pub time_zone: Option<String>,
}

/// Avatar URLs for a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AvatarUrls {
    #[serde(rename = "16x16", default)]
    pub size_16: Option<String>,
    #[serde(rename = "24x24", default)]
    pub size_24: Option<String>,
    #[serde(rename = "32x32", default)]
    pub size_32: Option<String>,
    #[serde(rename = "48x48", default)]
    pub size_48: Option<String>,
}

/// A Jira user, as returned by user search or embedded as an assignee.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// The user's account ID.
    pub account_id: String,
    /// `atlassian`, `app` or `customer`.
    #[serde(default)]
    pub account_type: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub avatar_urls: Option<AvatarUrls>,
    #[serde(default)]
    pub display_name: String,
    /// May be absent depending on the user's privacy settings.
    #[serde(default)]
    pub email_address: Option<String>,
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
    #[serde(default)]
    pub time_zone: Option<String>,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name)
    }
}

/// Issue status.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    /// The status ID.
    pub id: String,
    /// The status name (e.g., "To Do", "In Progress", "Done").
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
    /// The status category.
    #[serde(default)]
    pub status_category: Option<StatusCategory>,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Status category (groups statuses into to-do, in-progress, done).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCategory {
    pub id: u32,
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub color_name: Option<String>,
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
}

/// JQL search request body.
///
/// Sent as `POST /rest/api/3/search`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub expand: Vec<String>,
    pub fields: Vec<String>,
    pub fields_by_keys: bool,
    pub jql: String,
    pub max_results: u32,
    pub start_at: u32,
}

impl SearchRequest {
    /// A request for the summary/status/assignee view of matching issues,
    /// expanded with field names, schema and operations.
    pub fn new(jql: &str, start_at: u32, max_results: u32) -> Self {
        Self {
            expand: vec![
                "names".to_string(),
                "schema".to_string(),
                "operations".to_string(),
            ],
            fields: vec![
                "summary".to_string(),
                "status".to_string(),
                "assignee".to_string(),
            ],
            fields_by_keys: false,
            jql: jql.to_string(),
            max_results,
            start_at,
        }
    }
}

/// One page of JQL search results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub expand: Option<String>,
    #[serde(default)]
    pub issues: Vec<SearchIssue>,
    #[serde(default)]
    pub max_results: u32,
    /// Display names of the returned fields, keyed by field id.
    #[serde(default)]
    pub names: BTreeMap<String, String>,
    /// Schema of the returned fields, keyed by field id.
    #[serde(default)]
    pub schema: BTreeMap<String, FieldSchema>,
    #[serde(default)]
    pub start_at: u32,
    #[serde(default)]
    pub total: Option<u32>,
    #[serde(default)]
    pub is_last: Option<bool>,
}

impl Page for SearchResponse {
    type Item = SearchIssue;

    fn info(&self) -> PageInfo {
        PageInfo {
            start_at: self.start_at,
            max_results: self.max_results,
            total: self.total,
            is_last: self.is_last,
        }
    }

    fn into_items(self) -> Vec<SearchIssue> {
        self.issues
    }
}

/// Field schema entry returned with `expand=schema`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldSchema {
    #[serde(default)]
    pub system: Option<String>,
    #[serde(rename = "type", default)]
    pub field_type: Option<String>,
}

/// An issue as returned by JQL search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchIssue {
    #[serde(default)]
    pub expand: Option<String>,
    #[serde(default)]
    pub fields: SearchIssueFields,
    pub id: String,
    /// The issue key (e.g., "PROJ-123").
    pub key: String,
    #[serde(default)]
    pub operations: Option<IssueOperations>,
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
}

impl SearchIssue {
    /// The assignee's display name, or "Unassigned".
    pub fn assignee_name(&self) -> &str {
        self.fields
            .assignee
            .as_ref()
            .map(|u| u.display_name.as_str())
            .unwrap_or("Unassigned")
    }

    /// The status name, if the status field was returned.
    pub fn status_name(&self) -> Option<&str> {
        self.fields.status.as_ref().map(|s| s.name.as_str())
    }
}

impl fmt::Display for SearchIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.fields.summary)
    }
}

/// The fields requested by [`SearchRequest::new`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchIssueFields {
    #[serde(default)]
    pub assignee: Option<User>,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default)]
    pub summary: String,
}

/// Operations available on an issue (`expand=operations`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueOperations {
    #[serde(default)]
    pub link_groups: Vec<LinkGroup>,
}

/// A group of operation links. Groups nest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkGroup {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub groups: Vec<LinkGroup>,
    #[serde(default)]
    pub links: Vec<OperationLink>,
    #[serde(default)]
    pub weight: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationLink {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub icon_class: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub style_class: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub weight: Option<i32>,
}

/// An agile board.
///
/// Returned by `GET /rest/agile/1.0/board`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub id: u64,
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
    pub name: String,
    /// `scrum`, `kanban` or `simple`.
    #[serde(rename = "type", default)]
    pub board_type: Option<String>,
    #[serde(default)]
    pub location: Option<BoardLocation>,
}

/// The project or user a board belongs to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardLocation {
    #[serde(default)]
    pub project_id: Option<u64>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub project_key: Option<String>,
    #[serde(default)]
    pub project_type_key: Option<String>,
    #[serde(rename = "avatarURI", default)]
    pub avatar_uri: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// One page of boards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardsPage {
    #[serde(default)]
    pub max_results: u32,
    #[serde(default)]
    pub start_at: u32,
    #[serde(default)]
    pub total: Option<u32>,
    #[serde(default)]
    pub is_last: Option<bool>,
    #[serde(default)]
    pub values: Vec<Board>,
}

impl Page for BoardsPage {
    type Item = Board;

    fn info(&self) -> PageInfo {
        PageInfo {
            start_at: self.start_at,
            max_results: self.max_results,
            total: self.total,
            is_last: self.is_last,
        }
    }

    fn into_items(self) -> Vec<Board> {
        self.values
    }
}

/// Sprint lifecycle state, used to filter sprint listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SprintState {
    Future,
    Active,
    Closed,
}

impl SprintState {
    /// The value Jira expects for the `state` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SprintState::Future => "future",
            SprintState::Active => "active",
            SprintState::Closed => "closed",
        }
    }
}

impl fmt::Display for SprintState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sprint on a board.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sprint {
    pub id: u64,
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
    pub state: SprintState,
    pub name: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub complete_date: Option<String>,
    #[serde(default)]
    pub origin_board_id: Option<u64>,
    #[serde(default)]
    pub goal: Option<String>,
}

/// One page of sprints.
///
/// Jira does not report a total for sprint listings; `isLast` ends the walk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SprintsPage {
    #[serde(default)]
    pub max_results: u32,
    #[serde(default)]
    pub start_at: u32,
    #[serde(default)]
    pub total: Option<u32>,
    #[serde(default)]
    pub is_last: Option<bool>,
    #[serde(default)]
    pub values: Vec<Sprint>,
}

impl Page for SprintsPage {
    type Item = Sprint;

    fn info(&self) -> PageInfo {
        PageInfo {
            start_at: self.start_at,
            max_results: self.max_results,
            total: self.total,
            is_last: self.is_last,
        }
    }

    fn into_items(self) -> Vec<Sprint> {
        self.values
    }
}

/// One page of issues in a sprint. Issues are passed through untyped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SprintIssuesPage {
    #[serde(default)]
    pub expand: Option<String>,
    #[serde(default)]
    pub start_at: u32,
    #[serde(default)]
    pub max_results: u32,
    #[serde(default)]
    pub is_last: Option<bool>,
    #[serde(default)]
    pub total: Option<u32>,
    #[serde(default)]
    pub issues: Vec<serde_json::Value>,
}

impl Page for SprintIssuesPage {
    type Item = serde_json::Value;

    fn info(&self) -> PageInfo {
        PageInfo {
            start_at: self.start_at,
            max_results: self.max_results,
            total: self.total,
            is_last: self.is_last,
        }
    }

    fn into_items(self) -> Vec<serde_json::Value> {
        self.issues
    }
}

/// A workflow transition available on an issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transition {
    pub id: String,
    pub name: String,
    /// The status the issue moves to.
    #[serde(default)]
    pub to: Option<Status>,
}

/// Returned by `GET /rest/api/3/issue/{key}/transitions`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransitionsResponse {
    #[serde(default)]
    pub transitions: Vec<Transition>,
}

/// Transition request payload.
#[derive(Debug, Clone, Serialize)]
pub struct TransitionRequest {
    pub transition: TransitionId,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransitionId {
    pub id: String,
}

impl TransitionRequest {
    pub fn new(id: &str) -> Self {
        Self {
            transition: TransitionId { id: id.to_string() },
        }
    }
}

/// Assignee request payload. `None` serializes to `null`, which unassigns.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssigneeRequest {
    pub account_id: Option<String>,
}

/// Comment request payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentRequest {
    pub body: AtlassianDoc,
}

impl CommentRequest {
    /// A comment consisting of a single paragraph of plain text.
    pub fn plain(text: &str) -> Self {
        Self {
            body: AtlassianDoc::paragraph(text),
        }
    }

    /// A comment with one paragraph per entry.
    pub fn paragraphs<I, S>(paragraphs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            body: AtlassianDoc::from_paragraphs(paragraphs),
        }
    }
}

/// Description update payload: `{ "fields": { "description": <doc> } }`.
#[derive(Debug, Clone, Serialize)]
pub struct DescriptionRequest {
    pub fields: DescriptionFields,
}

#[derive(Debug, Clone, Serialize)]
pub struct DescriptionFields {
    pub description: AtlassianDoc,
}

impl DescriptionRequest {
    pub fn plain(text: &str) -> Self {
        Self {
            fields: DescriptionFields {
                description: AtlassianDoc::paragraph(text),
            },
        }
    }
}

/// Atlassian Document Format (ADF) content.
///
/// Jira v3 uses ADF for rich text fields such as comments and descriptions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtlassianDoc {
    /// Always "doc" for root documents.
    #[serde(rename = "type")]
    pub doc_type: String,
    pub version: u32,
    #[serde(default)]
    pub content: Vec<AdfNode>,
}

/// A node in an ADF tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdfNode {
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<AdfNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<serde_json::Value>,
}

impl AdfNode {
    /// A `text` leaf.
    pub fn text(text: &str) -> Self {
        Self {
            node_type: "text".to_string(),
            text: Some(text.to_string()),
            content: Vec::new(),
            attrs: None,
        }
    }

    /// A `paragraph` holding one text node. ADF forbids empty text nodes, so
    /// an empty string yields an empty paragraph.
    pub fn paragraph(text: &str) -> Self {
        let content = if text.is_empty() {
            Vec::new()
        } else {
            vec![Self::text(text)]
        };
        Self {
            node_type: "paragraph".to_string(),
            text: None,
            content,
            attrs: None,
        }
    }
}

impl AtlassianDoc {
    /// A document with a single paragraph.
    pub fn paragraph(text: &str) -> Self {
        Self::from_paragraphs([text])
    }

    /// A document with one paragraph per entry.
    pub fn from_paragraphs<I, S>(paragraphs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            content: paragraphs
                .into_iter()
                .map(|p| AdfNode::paragraph(p.as_ref()))
                .collect(),
            ..Self::default()
        }
    }
}

impl Default for AtlassianDoc {
    fn default() -> Self {
        Self {
            doc_type: "doc".to_string(),
            version: 1,
            content: vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_comment_request_shape() {
        let request = CommentRequest::plain("Looks good");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "body": {
                    "type": "doc",
                    "version": 1,
                    "content": [
                        {
                            "type": "paragraph",
                            "content": [{ "type": "text", "text": "Looks good" }]
                        }
                    ]
                }
            })
        );
    }

    #[test]
    fn test_comment_text_with_quotes_and_backslashes_stays_valid_json() {
        let text = r#"path is C:\temp and he said "ship it""#;
        let body = serde_json::to_string(&CommentRequest::plain(text)).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed["body"]["content"][0]["content"][0]["text"], text);
    }

    #[test]
    fn test_empty_paragraph_has_no_text_node() {
        let doc = AtlassianDoc::paragraph("");
        assert_eq!(
            serde_json::to_value(&doc).unwrap(),
            json!({ "type": "doc", "version": 1, "content": [{ "type": "paragraph" }] })
        );
    }

    #[test]
    fn test_multi_paragraph_comment() {
        let request = CommentRequest::paragraphs(["first", "second"]);
        assert_eq!(
            serde_json::to_value(&request.body).unwrap()["content"],
            json!([
                { "type": "paragraph", "content": [{ "type": "text", "text": "first" }] },
                { "type": "paragraph", "content": [{ "type": "text", "text": "second" }] }
            ])
        );
    }

    #[test]
    fn test_description_request_shape() {
        let value = serde_json::to_value(DescriptionRequest::plain("New text")).unwrap();
        assert_eq!(value["fields"]["description"]["type"], "doc");
        assert_eq!(
            value["fields"]["description"]["content"][0]["content"][0]["text"],
            "New text"
        );
    }

    #[test]
    fn test_assignee_request_null_unassigns() {
        let unassign = AssigneeRequest { account_id: None };
        assert_eq!(
            serde_json::to_value(&unassign).unwrap(),
            json!({ "accountId": null })
        );

        let assign = AssigneeRequest {
            account_id: Some("5b10ac8d82e05b22cc7d4ef5".to_string()),
        };
        assert_eq!(
            serde_json::to_value(&assign).unwrap(),
            json!({ "accountId": "5b10ac8d82e05b22cc7d4ef5" })
        );
    }

    #[test]
    fn test_transition_request_shape() {
        assert_eq!(
            serde_json::to_value(TransitionRequest::new("31")).unwrap(),
            json!({ "transition": { "id": "31" } })
        );
    }

    #[test]
    fn test_search_request_shape() {
        let request = SearchRequest::new("project = \"OPS\"", 30, 15);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "expand": ["names", "schema", "operations"],
                "fields": ["summary", "status", "assignee"],
                "fieldsByKeys": false,
                "jql": "project = \"OPS\"",
                "maxResults": 15,
                "startAt": 30
            })
        );
    }

    #[test]
    fn test_parse_search_response() {
        let json = json!({
            "expand": "names,schema",
            "startAt": 0,
            "maxResults": 15,
            "total": 1,
            "issues": [{
                "expand": "operations",
                "id": "10002",
                "key": "OPS-7",
                "self": "https://example.atlassian.net/rest/api/3/issue/10002",
                "fields": {
                    "summary": "Rotate credentials",
                    "status": {
                        "id": "3",
                        "name": "In Progress",
                        "statusCategory": { "id": 4, "key": "indeterminate", "name": "In Progress", "colorName": "yellow" }
                    },
                    "assignee": {
                        "accountId": "abc",
                        "accountType": "atlassian",
                        "active": true,
                        "displayName": "Sam Doe",
                        "avatarUrls": { "48x48": "https://avatar/48" },
                        "timeZone": "Europe/Berlin"
                    }
                },
                "operations": {
                    "linkGroups": [{
                        "id": "view.issue.opsbar",
                        "links": [],
                        "groups": [{
                            "id": "edit-issue",
                            "weight": 1,
                            "groups": [],
                            "links": [{ "id": "edit", "label": "Edit", "href": "/edit", "weight": 1 }]
                        }]
                    }]
                }
            }],
            "names": { "summary": "Summary", "status": "Status", "assignee": "Assignee" },
            "schema": { "summary": { "type": "string", "system": "summary" } }
        });

        let page: SearchResponse = serde_json::from_value(json).unwrap();
        assert_eq!(page.total, Some(1));
        assert_eq!(page.is_last, None);
        assert_eq!(page.names["status"], "Status");
        assert_eq!(page.schema["summary"].field_type.as_deref(), Some("string"));

        let issue = &page.issues[0];
        assert_eq!(issue.to_string(), "OPS-7: Rotate credentials");
        assert_eq!(issue.status_name(), Some("In Progress"));
        assert_eq!(issue.assignee_name(), "Sam Doe");
        let ops = issue.operations.as_ref().unwrap();
        assert_eq!(ops.link_groups[0].groups[0].links[0].label.as_deref(), Some("Edit"));
    }

    #[test]
    fn test_unassigned_search_issue() {
        let issue: SearchIssue = serde_json::from_value(json!({
            "id": "1",
            "key": "OPS-1",
            "fields": { "summary": "Nobody owns this", "assignee": null }
        }))
        .unwrap();
        assert_eq!(issue.assignee_name(), "Unassigned");
        assert_eq!(issue.status_name(), None);
    }

    #[test]
    fn test_parse_boards_page() {
        let page: BoardsPage = serde_json::from_value(json!({
            "maxResults": 50,
            "startAt": 0,
            "total": 1,
            "isLast": true,
            "values": [{
                "id": 388,
                "self": "https://example.atlassian.net/rest/agile/1.0/board/388",
                "name": "OPS board",
                "type": "scrum",
                "location": {
                    "projectId": 10040,
                    "displayName": "Operations (OPS)",
                    "projectName": "Operations",
                    "projectKey": "OPS",
                    "projectTypeKey": "software",
                    "avatarURI": "/secure/projectavatar?size=small",
                    "name": "Operations (OPS)"
                }
            }]
        }))
        .unwrap();

        let info = page.info();
        assert_eq!(info.is_last, Some(true));
        let boards = page.into_items();
        assert_eq!(boards[0].board_type.as_deref(), Some("scrum"));
        let location = boards[0].location.as_ref().unwrap();
        assert_eq!(location.project_key.as_deref(), Some("OPS"));
        assert_eq!(location.avatar_uri.as_deref(), Some("/secure/projectavatar?size=small"));
    }

    #[test]
    fn test_parse_sprints_page_without_total() {
        let page: SprintsPage = serde_json::from_value(json!({
            "maxResults": 50,
            "startAt": 0,
            "isLast": true,
            "values": [{
                "id": 723,
                "state": "active",
                "name": "OPS Sprint 12",
                "startDate": "2024-03-04T09:00:00.000Z",
                "endDate": "2024-03-18T09:00:00.000Z",
                "originBoardId": 388,
                "goal": "Ship the migration"
            }]
        }))
        .unwrap();

        assert_eq!(page.total, None);
        assert_eq!(page.values[0].state, SprintState::Active);
        assert_eq!(page.values[0].origin_board_id, Some(388));
    }

    #[test]
    fn test_parse_transitions() {
        let response: TransitionsResponse = serde_json::from_value(json!({
            "transitions": [
                { "id": "11", "name": "To Do" },
                { "id": "31", "name": "Done", "to": { "id": "10002", "name": "Done" } }
            ]
        }))
        .unwrap();

        assert_eq!(response.transitions.len(), 2);
        assert_eq!(response.transitions[1].to.as_ref().unwrap().to_string(), "Done");
    }

    #[test]
    fn test_rich_document_survives_round_trip() {
        let value = json!({
            "type": "doc",
            "version": 1,
            "content": [
                { "type": "heading", "attrs": { "level": 2 }, "content": [{ "type": "text", "text": "Notes" }] },
                { "type": "paragraph", "content": [
                    { "type": "mention", "attrs": { "id": "abc", "text": "@Sam" } },
                    { "type": "text", "text": " please review" },
                    { "type": "hardBreak" },
                    { "type": "text", "text": "thanks" }
                ]},
                { "type": "bulletList", "content": [
                    { "type": "listItem", "content": [{ "type": "paragraph", "content": [{ "type": "text", "text": "one" }] }] }
                ]}
            ]
        });

        let doc: AtlassianDoc = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(doc.content[1].content[0].attrs.as_ref().unwrap()["text"], "@Sam");
        assert_eq!(serde_json::to_value(&doc).unwrap(), value);
    }
}
