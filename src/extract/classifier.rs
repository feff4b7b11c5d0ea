use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::{Complexity, Domain};

/// Ordered keyword table. Earlier entries win: a mission mentioning both
/// "smart contract" and "payment" classifies as blockchain.
const DOMAIN_KEYWORDS: &[(Domain, &[&str])] = &[
    (
        Domain::Blockchain,
        &["blockchain", "defi", "smart contract", "crypto"],
    ),
    (
        Domain::Ecommerce,
        &["ecommerce", "e-commerce", "shopping", "payment"],
    ),
    (Domain::Mobile, &["mobile app", "ios", "android"]),
    (Domain::Ai, &["ai", "machine learning", "ml", "neural"]),
    (Domain::Iot, &["iot", "sensor", "device"]),
    (Domain::Enterprise, &["erp", "enterprise", "business"]),
];

/// Complexity indicators, checked in table order with first hit winning.
const COMPLEXITY_KEYWORDS: &[(Complexity, &[&str])] = &[
    (
        Complexity::Simple,
        &["basic", "simple", "minimal", "straightforward"],
    ),
    (
        Complexity::Medium,
        &["comprehensive", "full-featured", "scalable"],
    ),
    (
        Complexity::Complex,
        &["enterprise", "multi-chain", "advanced", "sophisticated", "complex"],
    ),
];

/// Result of domain classification, with the evidence that produced it.
/// `General` with confidence 0.0 means nothing matched.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DomainMatch {
    pub domain: Domain,
    pub confidence: f64,
    pub matched_keywords: Vec<String>,
}

impl DomainMatch {
    fn fallback() -> Self {
        Self {
            domain: Domain::General,
            confidence: 0.0,
            matched_keywords: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DomainClassifier;

impl DomainClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify mission text against the ordered domain table.
    /// Never errors; unmatched text yields the `General` fallback.
    pub fn classify(&self, text: &str) -> DomainMatch {
        let lower = text.to_lowercase();

        for (domain, keywords) in DOMAIN_KEYWORDS {
            let matched: Vec<String> = keywords
                .iter()
                .filter(|kw| lower.contains(*kw))
                .map(|kw| kw.to_string())
                .collect();

            if !matched.is_empty() {
                return DomainMatch {
                    domain: *domain,
                    confidence: matched.len() as f64 / keywords.len() as f64,
                    matched_keywords: matched,
                };
            }
        }

        DomainMatch::fallback()
    }

    /// Classify complexity; table order means "simple" language wins over a
    /// stray "complex" later in the mission. Defaults to `Medium`.
    pub fn classify_complexity(&self, text: &str) -> Complexity {
        let lower = text.to_lowercase();

        for (complexity, keywords) in COMPLEXITY_KEYWORDS {
            if keywords.iter().any(|kw| lower.contains(kw)) {
                return *complexity;
            }
        }

        Complexity::Medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blockchain_wins_over_ecommerce() {
        let m = DomainClassifier::new()
            .classify("A defi platform with payment rails and smart contract escrow");
        assert_eq!(m.domain, Domain::Blockchain);
        assert!(m.matched_keywords.contains(&"defi".to_string()));
        assert!(m.confidence > 0.0);
    }

    #[test]
    fn test_unmatched_falls_back_to_general() {
        let m = DomainClassifier::new().classify("organize a charity bake sale");
        assert_eq!(m.domain, Domain::General);
        assert_eq!(m.confidence, 0.0);
        assert!(m.matched_keywords.is_empty());
    }

    #[test]
    fn test_confidence_scales_with_matches() {
        let classifier = DomainClassifier::new();
        let one = classifier.classify("an ecommerce site");
        let two = classifier.classify("an ecommerce site with payment support");
        assert!(two.confidence > one.confidence);
    }

    #[test]
    fn test_complexity_table_order() {
        let classifier = DomainClassifier::new();
        assert_eq!(
            classifier.classify_complexity("a simple but sophisticated tool"),
            Complexity::Simple
        );
        assert_eq!(
            classifier.classify_complexity("an advanced multi-chain system"),
            Complexity::Complex
        );
        assert_eq!(classifier.classify_complexity("a web portal"), Complexity::Medium);
    }
}
