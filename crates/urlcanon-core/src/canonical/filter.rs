//! Tracking/session parameter removal.

use crate::config::TrackingConfig;
use crate::query::ParameterMapping;

/// Decides which query keys are dropped from the canonical form.
#[derive(Debug, Clone)]
pub struct TrackingFilter {
    prefixes: Vec<String>,
    substrings: Vec<String>,
}

impl TrackingFilter {
    pub fn new(rules: TrackingConfig) -> Self {
        Self {
            prefixes: rules.prefixes,
            substrings: rules.substrings,
        }
    }

    /// Case-sensitive: a key matches when it starts with a prefix or contains a substring.
    pub fn is_tracking(&self, key: &str) -> bool {
        self.prefixes.iter().any(|p| key.starts_with(p.as_str()))
            || self.substrings.iter().any(|s| key.contains(s.as_str()))
    }

    /// Returns a new mapping without tracking keys; order is preserved.
    pub fn retain_kept(&self, params: ParameterMapping) -> ParameterMapping {
        params
            .into_iter()
            .filter(|(key, _)| {
                let drop = self.is_tracking(key);
                if drop {
                    tracing::debug!(key = %key, "dropping tracking parameter");
                }
                !drop
            })
            .collect()
    }
}

impl Default for TrackingFilter {
    fn default() -> Self {
        Self::new(TrackingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules() {
        let f = TrackingFilter::default();
        assert!(f.is_tracking("utm_source"));
        assert!(f.is_tracking("utm_"));
        assert!(f.is_tracking("jsessionid"));
        assert!(f.is_tracking("session"));
        assert!(!f.is_tracking("PHPSESSID"));
        assert!(!f.is_tracking("UTM_source"));
        assert!(!f.is_tracking("x_utm_source"));
        assert!(!f.is_tracking("q"));
    }

    #[test]
    fn retain_kept_builds_filtered_copy() {
        let f = TrackingFilter::default();
        let params: ParameterMapping = [
            ("b", "2"),
            ("utm_medium", "mail"),
            ("a", "1"),
            ("sessionid", "xyz"),
        ]
        .into_iter()
        .collect();
        let kept = f.retain_kept(params);
        assert_eq!(kept.iter().collect::<Vec<_>>(), [("b", "2"), ("a", "1")]);
    }

    #[test]
    fn custom_rules() {
        let f = TrackingFilter::new(TrackingConfig {
            prefixes: vec!["mc_".to_string()],
            substrings: vec!["clid".to_string()],
        });
        assert!(f.is_tracking("mc_eid"));
        assert!(f.is_tracking("fbclid"));
        assert!(!f.is_tracking("utm_source"));
    }
}
