use async_trait::async_trait;
use tracing::{debug, warn};

use super::tier::{Tier, TierOutcome};
use crate::github::{AccountKind, GithubClient};
use crate::resolution::{Owner, SourceLabel, UnavailableReason};

/// Public lookup of `public_repos` on the user or organization endpoint.
/// Works without a token.
pub struct RestTier {
    client: GithubClient,
    kind: AccountKind,
}

impl RestTier {
    pub fn user(client: GithubClient) -> Self {
        Self {
            client,
            kind: AccountKind::User,
        }
    }

    pub fn organization(client: GithubClient) -> Self {
        Self {
            client,
            kind: AccountKind::Organization,
        }
    }

    fn source(&self) -> SourceLabel {
        match self.kind {
            AccountKind::User => SourceLabel::Public,
            AccountKind::Organization => SourceLabel::PublicOrg,
        }
    }
}

#[async_trait]
impl Tier for RestTier {
    fn name(&self) -> &'static str {
        match self.kind {
            AccountKind::User => "rest-user",
            AccountKind::Organization => "rest-org",
        }
    }

    async fn attempt(&self, owner: &Owner) -> TierOutcome {
        match self.client.account(self.kind, owner).await {
            Ok(Some(account)) => match account.public_repos() {
                Some(count) => TierOutcome::Counted {
                    count,
                    source: self.source(),
                },
                None => {
                    debug!(tier = self.name(), "response has no numeric public_repos");
                    TierOutcome::Miss(UnavailableReason::NoData)
                }
            },
            Ok(None) => TierOutcome::Miss(UnavailableReason::NoData),
            Err(e) => {
                warn!(tier = self.name(), error = %e, "REST lookup failed");
                TierOutcome::REQUEST_ERROR
            }
        }
    }
}
