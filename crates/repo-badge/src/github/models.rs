use serde::Deserialize;
use serde_json::Value;

/// Envelope of a GraphQL response.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQlError>>,
}

impl<T> GraphQlResponse<T> {
    /// `true` when the server reported at least one error, even if partial
    /// data came back alongside it.
    pub fn has_errors(&self) -> bool {
        self.errors.as_ref().is_some_and(|errors| !errors.is_empty())
    }

    /// `"TYPE: message"` per error, or just the part that is present.
    pub fn error_summaries(&self) -> Vec<String> {
        self.errors
            .iter()
            .flatten()
            .map(|e| match (e.kind.as_deref(), e.message.as_deref()) {
                (Some(kind), Some(message)) => format!("{kind}: {message}"),
                (Some(kind), None) => kind.to_string(),
                (None, Some(message)) => message.to_string(),
                (None, None) => "unknown error".to_string(),
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// `data` of the aggregate query: the login read as a user and as an
/// organization in one round trip.
#[derive(Debug, Deserialize)]
pub struct RepositoryTotals {
    pub user: Option<RepositoryOwner>,
    pub organization: Option<RepositoryOwner>,
}

impl RepositoryTotals {
    /// The user's total if present, otherwise the organization's.
    pub fn preferred_total(&self) -> Option<u64> {
        self.user
            .as_ref()
            .and_then(RepositoryOwner::total_count)
            .or_else(|| self.organization.as_ref().and_then(RepositoryOwner::total_count))
    }
}

#[derive(Debug, Deserialize)]
pub struct RepositoryOwner {
    pub repositories: Option<RepositoryConnection>,
}

impl RepositoryOwner {
    fn total_count(&self) -> Option<u64> {
        self.repositories
            .as_ref()
            .and_then(|r| r.total_count.as_ref())
            .and_then(Value::as_u64)
    }
}

#[derive(Debug, Deserialize)]
pub struct RepositoryConnection {
    // Kept loose: a non-integer here means "no data", not a parse failure.
    #[serde(rename = "totalCount")]
    pub total_count: Option<Value>,
}

/// The subset of `GET /users/{login}` and `GET /orgs/{login}` we read.
#[derive(Debug, Deserialize)]
pub struct RestAccount {
    pub public_repos: Option<Value>,
}

impl RestAccount {
    pub fn public_repos(&self) -> Option<u64> {
        self.public_repos.as_ref().and_then(Value::as_u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(json: &str) -> RepositoryTotals {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn user_total_wins_over_organization_total() {
        let t = totals(
            r#"{"user":{"repositories":{"totalCount":7}},
                "organization":{"repositories":{"totalCount":99}}}"#,
        );
        assert_eq!(t.preferred_total(), Some(7));
    }

    #[test]
    fn organization_total_used_when_user_is_null() {
        let t = totals(r#"{"user":null,"organization":{"repositories":{"totalCount":12}}}"#);
        assert_eq!(t.preferred_total(), Some(12));
    }

    #[test]
    fn non_numeric_totals_yield_nothing() {
        let t = totals(
            r#"{"user":{"repositories":{"totalCount":"7"}},
                "organization":{"repositories":{"totalCount":-3}}}"#,
        );
        assert_eq!(t.preferred_total(), None);

        let t = totals(r#"{"user":{"repositories":null}}"#);
        assert_eq!(t.preferred_total(), None);
    }

    #[test]
    fn errors_detection() {
        let resp: GraphQlResponse<RepositoryTotals> = serde_json::from_str(
            r#"{"data":{"user":null,"organization":null},
                "errors":[{"type":"NOT_FOUND","message":"Could not resolve to a User"}]}"#,
        )
        .unwrap();
        assert!(resp.has_errors());
        assert_eq!(
            resp.error_summaries(),
            vec!["NOT_FOUND: Could not resolve to a User"]
        );

        let resp: GraphQlResponse<RepositoryTotals> =
            serde_json::from_str(r#"{"errors":[{"message":"Bad credentials"},{}]}"#).unwrap();
        assert_eq!(resp.error_summaries(), vec!["Bad credentials", "unknown error"]);

        let resp: GraphQlResponse<RepositoryTotals> =
            serde_json::from_str(r#"{"data":null,"errors":[]}"#).unwrap();
        assert!(!resp.has_errors());
    }

    #[test]
    fn rest_account_public_repos() {
        let account: RestAccount =
            serde_json::from_str(r#"{"login":"octo-org","public_repos":42}"#).unwrap();
        assert_eq!(account.public_repos(), Some(42));

        let account: RestAccount = serde_json::from_str(r#"{"message":"Not Found"}"#).unwrap();
        assert_eq!(account.public_repos(), None);
    }
}
