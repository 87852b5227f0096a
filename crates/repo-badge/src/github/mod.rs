pub mod client;
pub mod models;

pub use client::{
    AccountKind, ClientConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT, GithubClient, MIN_TIMEOUT,
    default_user_agent,
};
