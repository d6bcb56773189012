//! Service layer for outbound integrations.

pub mod github_oauth;

pub use github_oauth::{GitHubOAuthClient, GitHubOAuthConfig};
