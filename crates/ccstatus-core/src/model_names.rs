//! Model name resolution
//!
//! Bedrock inference-profile identifiers are long opaque strings
//! unsuitable for a narrow terminal line. The resolver maps their
//! trailing path segment through an injected read-only table; plain
//! display names pass through unchanged.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Default mapping from inference-profile suffixes to friendly names
///
/// Operator-editable: keep entries in sync with the profiles deployed
/// in the account.
pub static DEFAULT_MODEL_TABLE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("us.anthropic.claude-opus-4-1-20250805-v1:0", "Claude Opus 4.1"),
        ("us.anthropic.claude-opus-4-20250514-v1:0", "Claude Opus 4"),
        ("us.anthropic.claude-sonnet-4-5-20250929-v1:0", "Claude Sonnet 4.5"),
        ("us.anthropic.claude-sonnet-4-20250514-v1:0", "Claude Sonnet 4"),
        ("us.anthropic.claude-haiku-4-5-20251001-v1:0", "Claude Haiku 4.5"),
        ("us.anthropic.claude-3-7-sonnet-20250219-v1:0", "Claude Sonnet 3.7"),
        ("us.anthropic.claude-3-5-haiku-20241022-v1:0", "Claude Haiku 3.5"),
        ("eu.anthropic.claude-sonnet-4-5-20250929-v1:0", "Claude Sonnet 4.5"),
    ])
});

/// Resolves raw model display names into something fit for the line
pub struct ModelNameResolver<'a> {
    table: &'a HashMap<&'static str, &'static str>,
}

impl<'a> ModelNameResolver<'a> {
    /// Build a resolver over an injected lookup table
    pub fn new(table: &'a HashMap<&'static str, &'static str>) -> Self {
        Self { table }
    }

    /// Resolve a raw display name
    ///
    /// Empty input yields "Unknown". Identifiers shaped like a cloud
    /// resource name (colon-and-slash-delimited) are looked up by
    /// their trailing path segment; unmapped profiles get a generic
    /// placeholder rather than the raw identifier. Anything else
    /// passes through unchanged.
    pub fn resolve(&self, raw: &str) -> String {
        if raw.is_empty() {
            return "Unknown".to_string();
        }

        if !is_inference_profile(raw) {
            return raw.to_string();
        }

        let key = raw.rsplit('/').next().unwrap_or(raw);
        match self.table.get(key) {
            Some(friendly) => format!("{} by Bedrock", friendly),
            None => "Claude by Bedrock".to_string(),
        }
    }
}

impl Default for ModelNameResolver<'static> {
    fn default() -> Self {
        Self::new(&DEFAULT_MODEL_TABLE)
    }
}

/// Hierarchical resource identifiers carry both `:` and `/` delimiters
fn is_inference_profile(raw: &str) -> bool {
    raw.contains(':') && raw.contains('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARN: &str = "arn:aws:bedrock:us-east-1:123456789012:inference-profile/us.anthropic.claude-sonnet-4-5-20250929-v1:0";

    #[test]
    fn test_empty_name_is_unknown() {
        let resolver = ModelNameResolver::default();
        assert_eq!(resolver.resolve(""), "Unknown");
    }

    #[test]
    fn test_mapped_profile_gets_friendly_name() {
        let resolver = ModelNameResolver::default();
        assert_eq!(resolver.resolve(ARN), "Claude Sonnet 4.5 by Bedrock");
    }

    #[test]
    fn test_unmapped_profile_gets_placeholder_not_raw_id() {
        let resolver = ModelNameResolver::default();
        let arn = "arn:aws:bedrock:us-east-1:123456789012:inference-profile/us.anthropic.claude-future-v9:0";
        let resolved = resolver.resolve(arn);
        assert_eq!(resolved, "Claude by Bedrock");
        assert!(!resolved.contains("arn:"));
    }

    #[test]
    fn test_plain_name_passes_through() {
        let resolver = ModelNameResolver::default();
        assert_eq!(resolver.resolve("Opus 4.1"), "Opus 4.1");
        assert_eq!(resolver.resolve("claude-x"), "claude-x");
    }

    #[test]
    fn test_injected_table_is_consulted() {
        let table = HashMap::from([("custom-profile-v1:0", "Custom Model")]);
        let resolver = ModelNameResolver::new(&table);
        assert_eq!(
            resolver.resolve("arn:aws:bedrock:eu-west-1:42:inference-profile/custom-profile-v1:0"),
            "Custom Model by Bedrock"
        );
    }
}
