//! Access to the GitHub REST API.
//!
//! Provides basic-auth sessions against github.com or a GitHub Enterprise
//! instance, and the handful of repository operations a release needs.

/// Connection configuration for a GitHub session.
pub mod config;

/// GitHub API client implementation for GitHub.com and Enterprise.
pub mod github;

/// Wrapper adding dry-run behavior to any forge.
pub mod manager;

/// Request and response types exchanged with the forge.
pub mod request;

/// Trait abstracting the remote repository host.
pub mod traits;
