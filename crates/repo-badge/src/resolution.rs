//! The hand-off between the resolver and the renderer.

use std::fmt;

use serde::Serialize;

/// A GitHub login naming either a user or an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Owner(String);

impl Owner {
    /// Returns `None` when `raw` is empty or only whitespace.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a resolved count came from. Rendered under the number on the badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SourceLabel {
    #[serde(rename = "Total repos (all)")]
    TotalAll,
    #[serde(rename = "Public repos")]
    Public,
    #[serde(rename = "Public repos (org)")]
    PublicOrg,
}

impl SourceLabel {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TotalAll => "Total repos (all)",
            Self::Public => "Public repos",
            Self::PublicOrg => "Public repos (org)",
        }
    }
}

impl fmt::Display for SourceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why no count could be resolved.
///
/// The ordering ranks failures by severity: when several tiers fail, the
/// resolver reports the greatest reason it saw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum UnavailableReason {
    #[serde(rename = "missing owner")]
    MissingOwner,
    #[serde(rename = "no token / no public count")]
    NoData,
    #[serde(rename = "api error")]
    ApiError,
    #[serde(rename = "request error")]
    RequestError,
}

impl UnavailableReason {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MissingOwner => "missing owner",
            Self::NoData => "no token / no public count",
            Self::ApiError => "api error",
            Self::RequestError => "request error",
        }
    }
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResolutionResult {
    Counted { count: u64, source: SourceLabel },
    Unavailable { reason: UnavailableReason },
}

impl ResolutionResult {
    pub fn counted(count: u64, source: SourceLabel) -> Self {
        Self::Counted { count, source }
    }

    pub fn unavailable(reason: UnavailableReason) -> Self {
        Self::Unavailable { reason }
    }

    pub fn count(&self) -> Option<u64> {
        match self {
            Self::Counted { count, .. } => Some(*count),
            Self::Unavailable { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(UnavailableReason::MissingOwner, "missing owner")]
    #[case(UnavailableReason::NoData, "no token / no public count")]
    #[case(UnavailableReason::ApiError, "api error")]
    #[case(UnavailableReason::RequestError, "request error")]
    fn reason_strings(#[case] reason: UnavailableReason, #[case] expected: &str) {
        assert_eq!(reason.to_string(), expected);
        assert_eq!(
            serde_json::to_value(reason).unwrap(),
            serde_json::Value::String(expected.to_string())
        );
    }

    #[test]
    fn request_error_outranks_api_error_outranks_no_data() {
        assert!(UnavailableReason::RequestError > UnavailableReason::ApiError);
        assert!(UnavailableReason::ApiError > UnavailableReason::NoData);
        assert_eq!(
            UnavailableReason::NoData.max(UnavailableReason::RequestError),
            UnavailableReason::RequestError
        );
    }

    #[test]
    fn owner_rejects_blank_input() {
        assert_eq!(Owner::parse(""), None);
        assert_eq!(Owner::parse("   \t"), None);
        assert_eq!(Owner::parse(" alice ").unwrap().as_str(), "alice");
    }

    #[test]
    fn result_serializes_with_status_tag() {
        let counted = ResolutionResult::counted(7, SourceLabel::TotalAll);
        assert_eq!(
            serde_json::to_value(&counted).unwrap(),
            serde_json::json!({"status": "counted", "count": 7, "source": "Total repos (all)"})
        );

        let unavailable = ResolutionResult::unavailable(UnavailableReason::ApiError);
        assert_eq!(
            serde_json::to_value(&unavailable).unwrap(),
            serde_json::json!({"status": "unavailable", "reason": "api error"})
        );
        assert_eq!(unavailable.count(), None);
    }
}
