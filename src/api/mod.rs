//! Jira API client and types.
//!
//! This module provides the interface for the Jira Cloud REST and Agile APIs.

mod agile;
pub mod auth;
mod client;
pub mod error;
mod issues;
pub mod pagination;
mod search;
pub mod types;

pub use auth::Auth;
pub use client::JiraClient;
pub use error::ApiError;
pub use types::{Board, SearchIssue, Sprint, SprintState, Transition, User};
