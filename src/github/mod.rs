// GitHub API module.
// Client, payload types, and profile normalization for the GitHub REST and GraphQL APIs.

pub mod client;
pub mod endpoints;
pub mod merge;
pub mod types;

pub use client::GitHubClient;
pub use types::{GitHubRepoStats, GitHubUserStats, LanguageStat, TopRepo};
