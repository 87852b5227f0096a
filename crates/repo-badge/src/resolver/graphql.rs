use async_trait::async_trait;
use tracing::{debug, warn};

use super::tier::{Tier, TierOutcome};
use crate::github::GithubClient;
use crate::github::models::RepositoryTotals;
use crate::resolution::{Owner, SourceLabel, UnavailableReason};

pub const REPOSITORY_TOTALS_QUERY: &str = r#"query ($login: String!) {
  user(login: $login) { repositories(privacy: ALL) { totalCount } }
  organization(login: $login) { repositories(privacy: ALL) { totalCount } }
}"#;

/// Authenticated aggregate query. Counts private repositories too when the
/// token's scopes allow it.
pub struct GraphQlTier {
    client: GithubClient,
}

impl GraphQlTier {
    pub fn new(client: GithubClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tier for GraphQlTier {
    fn name(&self) -> &'static str {
        "graphql"
    }

    async fn attempt(&self, owner: &Owner) -> TierOutcome {
        let variables = serde_json::json!({ "login": owner.as_str() });
        let response = match self
            .client
            .graphql::<RepositoryTotals>(REPOSITORY_TOTALS_QUERY, variables)
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "GraphQL request failed, falling back to REST");
                return TierOutcome::REQUEST_ERROR;
            }
        };

        if response.has_errors() {
            warn!(
                errors = ?response.error_summaries(),
                "GraphQL errors, falling back to REST"
            );
            return TierOutcome::Miss(UnavailableReason::ApiError);
        }

        match response.data.as_ref().and_then(RepositoryTotals::preferred_total) {
            Some(count) => TierOutcome::Counted {
                count,
                source: SourceLabel::TotalAll,
            },
            None => {
                debug!(owner = %owner, "GraphQL returned no repository total");
                TierOutcome::Miss(UnavailableReason::NoData)
            }
        }
    }
}
