use async_trait::async_trait;

use crate::resolution::{Owner, SourceLabel, UnavailableReason};

/// What one tier attempt produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TierOutcome {
    Counted { count: u64, source: SourceLabel },
    Miss(UnavailableReason),
}

impl TierOutcome {
    /// A transport or decoding failure.
    pub const REQUEST_ERROR: Self = Self::Miss(UnavailableReason::RequestError);
}

/// One strategy for obtaining a repository count.
///
/// Implementations must not fail: every error is reported as a
/// [`TierOutcome::Miss`] so the resolver can move on to the next tier.
#[async_trait]
pub trait Tier: Send + Sync {
    fn name(&self) -> &'static str;

    async fn attempt(&self, owner: &Owner) -> TierOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_error_is_a_miss() {
        assert_eq!(
            TierOutcome::REQUEST_ERROR,
            TierOutcome::Miss(UnavailableReason::RequestError)
        );
    }
}
