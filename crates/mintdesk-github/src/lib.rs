//! GitHub data for the portfolio panels.
//!
//! [`GithubClient`] speaks the REST API, [`GithubService`] layers retries
//! and a TTL cache on top, and the pure helpers in [`filter`] and [`stats`]
//! shape the responses for display.

pub mod cache;
pub mod client;
pub mod error;
pub mod filter;
pub mod retry;
pub mod service;
pub mod stats;
pub mod types;

pub use client::{ClientConfig, GithubApi, GithubClient, DEFAULT_API_BASE};
pub use error::GithubError;
pub use retry::RetryPolicy;
pub use service::{GithubService, ServiceSettings};
pub use types::{GithubEvent, GithubStats, LanguageCount, Repository, UserProfile};
