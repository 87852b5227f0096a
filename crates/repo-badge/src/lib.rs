//! Repository-count badge generation.
//!
//! Resolves how many repositories a GitHub account owns by trying, in order,
//! an authenticated GraphQL aggregate query and the public REST user and
//! organization endpoints, then renders the outcome as a self-contained SVG.
//! Resolution never fails: when no count is available the result carries the
//! reason, and the fallback badge displays it.
//!
//! ```
//! use repo_badge::{ResolutionResult, SourceLabel, render_badge};
//!
//! let svg = render_badge("octo-org", &ResolutionResult::counted(42, SourceLabel::PublicOrg));
//! assert!(svg.contains("Public repos (org)"));
//! ```

pub mod error;
pub mod github;
pub mod render;
pub mod resolution;
pub mod resolver;
pub mod writer;

pub use error::{BadgeError, Result};
pub use github::{ClientConfig, GithubClient};
pub use render::{escape_xml, render_badge};
pub use resolution::{Owner, ResolutionResult, SourceLabel, UnavailableReason};
pub use resolver::{Resolver, Tier, TierOutcome, resolve_repo_count};
pub use writer::{DEFAULT_OUTPUT_PATH, write_badge};
