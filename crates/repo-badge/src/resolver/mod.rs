//! Tiered repository-count resolution.
//!
//! A [`Resolver`] holds an ordered list of [`Tier`]s and folds over them until
//! one yields a count. Failed tiers contribute a reason; when all of them
//! miss, the most severe reason seen is reported.

mod graphql;
mod rest;
mod tier;

pub use graphql::{GraphQlTier, REPOSITORY_TOTALS_QUERY};
pub use rest::RestTier;
pub use tier::{Tier, TierOutcome};

use tracing::{info, warn};

use crate::github::{ClientConfig, GithubClient};
use crate::resolution::{Owner, ResolutionResult, UnavailableReason};

pub struct Resolver {
    tiers: Vec<Box<dyn Tier>>,
}

impl Resolver {
    pub fn new(tiers: Vec<Box<dyn Tier>>) -> Self {
        Self { tiers }
    }

    /// GraphQL first (only with a token), then the user and organization
    /// REST endpoints.
    pub fn for_github(client: GithubClient) -> Self {
        let mut tiers: Vec<Box<dyn Tier>> = Vec::with_capacity(3);
        if client.has_token() {
            tiers.push(Box::new(GraphQlTier::new(client.clone())));
        }
        tiers.push(Box::new(RestTier::user(client.clone())));
        tiers.push(Box::new(RestTier::organization(client)));
        Self::new(tiers)
    }

    pub fn tier_names(&self) -> Vec<&'static str> {
        self.tiers.iter().map(|t| t.name()).collect()
    }

    pub async fn resolve(&self, owner: Option<&Owner>) -> ResolutionResult {
        let Some(owner) = owner else {
            warn!("Missing owner; skipping all tiers");
            return ResolutionResult::unavailable(UnavailableReason::MissingOwner);
        };

        let mut reason = UnavailableReason::NoData;
        for tier in &self.tiers {
            match tier.attempt(owner).await {
                TierOutcome::Counted { count, source } => {
                    info!(tier = tier.name(), count, source = %source, "Resolved repository count");
                    return ResolutionResult::counted(count, source);
                }
                TierOutcome::Miss(miss) => {
                    info!(tier = tier.name(), reason = %miss, "Tier yielded no count");
                    reason = reason.max(miss);
                }
            }
        }

        warn!(owner = %owner, reason = %reason, "All tiers exhausted");
        ResolutionResult::unavailable(reason)
    }
}

/// Builds a client from `config` and runs the GitHub tiers for `owner`.
///
/// A missing owner short-circuits before any client is built; a client that
/// cannot be built folds into `request error`.
pub async fn resolve_repo_count(owner: Option<&Owner>, config: ClientConfig) -> ResolutionResult {
    if owner.is_none() {
        return Resolver::new(Vec::new()).resolve(None).await;
    }

    match GithubClient::new(config) {
        Ok(client) => Resolver::for_github(client).resolve(owner).await,
        Err(e) => {
            warn!(error = %e, "Failed to build HTTP client");
            ResolutionResult::unavailable(UnavailableReason::RequestError)
        }
    }
}
