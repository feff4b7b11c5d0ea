//! Mission-text extraction: keyword and pattern scans that turn free text
//! into a `ProjectContext` and `ResourceContext`.
//!
//! Extraction never fails. Every field has a documented default and
//! ambiguous or missing signals silently fall back.

mod classifier;

use regex::Regex;
use tracing::debug;

use crate::config::ExtractionConfig;
use crate::model::{Constraint, ConstraintKind, ProjectContext, ResourceContext};

pub use classifier::{DomainClassifier, DomainMatch};

/// Role keyword table: a role is requested when any of its keywords appears.
const ROLE_KEYWORDS: &[(&str, &[&str])] = &[
    ("frontend", &["frontend", "ui", "ux", "react", "vue", "angular"]),
    ("backend", &["backend", "api", "server", "database"]),
    ("fullstack", &["fullstack", "full-stack", "full stack"]),
    ("devops", &["devops", "deployment", "ci/cd", "docker", "kubernetes"]),
    ("mobile", &["mobile", "ios", "android", "react native", "flutter"]),
    ("blockchain", &["blockchain", "smart contract", "solidity", "web3"]),
    ("ai", &["machine learning", "data science", " ai ", "ml model"]),
    ("qa", &["testing", "qa", "quality assurance"]),
    ("designer", &["design", "ui/ux", "graphic", "visual"]),
    ("pm", &["project manager", "scrum master", "product owner"]),
];

pub struct ContextExtractor {
    config: ExtractionConfig,
    classifier: DomainClassifier,
    weeks_re: Regex,
    months_re: Regex,
    days_re: Regex,
    team_size_res: Vec<Regex>,
    project_marker_re: Regex,
    project_phrase_res: Vec<Regex>,
    feature_section_re: Regex,
    milestone_banner_re: Regex,
    tech_res: Vec<Regex>,
    constraint_res: Vec<(Regex, ConstraintKind)>,
}

impl ContextExtractor {
    pub fn new(config: &ExtractionConfig) -> Self {
        // Patterns are fixed; compilation cannot fail.
        Self {
            config: config.clone(),
            classifier: DomainClassifier::new(),
            weeks_re: Regex::new(r"(\d+)\s*weeks?").unwrap(),
            months_re: Regex::new(r"(\d+)\s*months?").unwrap(),
            days_re: Regex::new(r"(\d+)\s*days?").unwrap(),
            team_size_res: vec![
                Regex::new(r"team\s+of\s+(\d+)").unwrap(),
                Regex::new(r"(\d+)\s+developers?").unwrap(),
                Regex::new(r"(\d+)\s+people").unwrap(),
                Regex::new(r"(\d+)\s+team\s+members?").unwrap(),
            ],
            project_marker_re: Regex::new(r"(?im)^\[PROJECT\]\s*(.+)$").unwrap(),
            project_phrase_res: vec![
                Regex::new(
                    r"(?:create|build|develop)\s+(?:a|an)\s+([^.\n\r]+?)(?:\s+with|\s+that|\s+for|\s+project|\.|\n)",
                )
                .unwrap(),
                Regex::new(
                    r"(?:create|build|develop)\s+([^.\n\r]+?)(?:\s+project|\s+system|\s+platform|\s+app|\s+application)",
                )
                .unwrap(),
            ],
            feature_section_re: Regex::new(r"(?is)(?:features?|requirements?)(.*?)(?:\n\s*\n|\z)")
                .unwrap(),
            milestone_banner_re: Regex::new(r"\[M\d+\][^\[]*").unwrap(),
            tech_res: vec![
                Regex::new(r"using\s+([^.\n]+?)(?:\s+for|\s+to|\.)").unwrap(),
                Regex::new(r"built\s+with\s+([^.\n]+?)(?:\s+for|\s+to|\.)").unwrap(),
                Regex::new(r"technologies?:\s*([^.\n]+)").unwrap(),
                Regex::new(r"stack:\s*([^.\n]+)").unwrap(),
            ],
            constraint_res: vec![
                (
                    Regex::new(r"budget\s*:?\s*\$?([0-9,]+)").unwrap(),
                    ConstraintKind::Budget,
                ),
                (
                    Regex::new(r"deadline\s*:?\s*([^.\n]+)").unwrap(),
                    ConstraintKind::Timeline,
                ),
                (
                    Regex::new(r"must\s+use\s+([^.\n]+)").unwrap(),
                    ConstraintKind::Technology,
                ),
                (
                    Regex::new(r"cannot\s+use\s+([^.\n]+)").unwrap(),
                    ConstraintKind::Restriction,
                ),
                (
                    Regex::new(r"limited\s+to\s+([^.\n]+)").unwrap(),
                    ConstraintKind::Limitation,
                ),
            ],
        }
    }

    /// Extract both contexts from the mission (plus any prior pipeline text
    /// the caller concatenated in). Infallible by design.
    pub fn extract(&self, mission: &str) -> (ProjectContext, ResourceContext) {
        let lower = mission.to_lowercase();

        let domain_match = self.classifier.classify(mission);
        let context = ProjectContext {
            name: self.extract_project_name(mission),
            domain: domain_match.domain,
            complexity: self.classifier.classify_complexity(mission),
            timeline_weeks: self.extract_timeline_weeks(&lower),
            features: self.extract_features(mission),
            milestones_text: self
                .milestone_banner_re
                .find_iter(mission)
                .map(|m| m.as_str().trim().to_string())
                .collect(),
        };

        let resources = ResourceContext {
            team_size: self.extract_team_size(&lower),
            roles_needed: self.extract_roles(&lower),
            technology_stack: self.extract_technology_stack(&lower),
            constraints: self.extract_constraints(&lower),
        };

        debug!(
            domain = %context.domain,
            confidence = domain_match.confidence,
            complexity = %context.complexity,
            timeline_weeks = context.timeline_weeks,
            team_size = ?resources.team_size,
            "Extracted mission context"
        );

        (context, resources)
    }

    /// Weeks first, then months (x4), then days (/7, floored, min 1).
    /// First match wins; default from config.
    fn extract_timeline_weeks(&self, lower: &str) -> u32 {
        if let Some(caps) = self.weeks_re.captures(lower) {
            if let Ok(weeks) = caps[1].parse::<u32>() {
                if weeks > 0 {
                    return weeks;
                }
            }
        }
        if let Some(caps) = self.months_re.captures(lower) {
            if let Ok(months) = caps[1].parse::<u32>() {
                if months > 0 {
                    return months * 4;
                }
            }
        }
        if let Some(caps) = self.days_re.captures(lower) {
            if let Ok(days) = caps[1].parse::<u32>() {
                if days > 0 {
                    return (days / 7).max(1);
                }
            }
        }
        self.config.default_timeline_weeks
    }

    fn extract_team_size(&self, lower: &str) -> Option<u32> {
        for re in &self.team_size_res {
            if let Some(caps) = re.captures(lower) {
                if let Ok(size) = caps[1].parse::<u32>() {
                    if size > 0 {
                        return Some(size);
                    }
                }
            }
        }
        None
    }

    /// Project name priority: explicit `[PROJECT]` marker line, then
    /// create/build/develop phrasing, then a fixed fallback.
    fn extract_project_name(&self, mission: &str) -> String {
        if let Some(caps) = self.project_marker_re.captures(mission) {
            let name = collapse_whitespace(caps[1].trim());
            return truncate_chars(&name, 80);
        }

        let lower = mission.to_lowercase();
        for re in &self.project_phrase_res {
            if let Some(caps) = re.captures(&lower) {
                let candidate = title_case(&collapse_whitespace(caps[1].trim()));
                if (3..=80).contains(&candidate.chars().count()) {
                    return candidate;
                }
            }
        }

        String::from("Untitled Project")
    }

    fn extract_features(&self, mission: &str) -> Vec<String> {
        let Some(caps) = self.feature_section_re.captures(mission) else {
            return Vec::new();
        };

        caps[1]
            .lines()
            .filter_map(|line| {
                let trimmed = line.trim();
                trimmed
                    .strip_prefix(['-', '*'])
                    .or_else(|| trimmed.strip_prefix('\u{2022}'))
                    .map(|f| f.trim().to_string())
            })
            .filter(|f| !f.is_empty())
            .collect()
    }

    fn extract_roles(&self, lower: &str) -> Vec<String> {
        ROLE_KEYWORDS
            .iter()
            .filter(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
            .map(|(role, _)| role.to_string())
            .collect()
    }

    fn extract_technology_stack(&self, lower: &str) -> Vec<String> {
        let mut stack = Vec::new();
        for re in &self.tech_res {
            if let Some(caps) = re.captures(lower) {
                for tech in split_tech_list(caps[1].trim()) {
                    if !stack.contains(&tech) {
                        stack.push(tech);
                    }
                }
            }
        }
        stack
    }

    fn extract_constraints(&self, lower: &str) -> Vec<Constraint> {
        let mut constraints = Vec::new();
        for (re, kind) in &self.constraint_res {
            for caps in re.captures_iter(lower) {
                constraints.push(Constraint {
                    kind: *kind,
                    description: caps[1].trim().to_string(),
                });
            }
        }
        constraints
    }
}

fn split_tech_list(text: &str) -> Vec<String> {
    text.split([',', '+', '&'])
        .flat_map(|part| part.split(" and "))
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Domain;

    fn extractor() -> ContextExtractor {
        ContextExtractor::new(&ExtractionConfig::default())
    }

    #[test]
    fn test_timeline_weeks_direct() {
        let (ctx, _) = extractor().extract("Build an ecommerce platform in 24 weeks");
        assert_eq!(ctx.timeline_weeks, 24);
        assert_eq!(ctx.domain, Domain::Ecommerce);
    }

    #[test]
    fn test_timeline_months_and_days() {
        let ex = extractor();
        let (ctx, _) = ex.extract("deliver within 3 months");
        assert_eq!(ctx.timeline_weeks, 12);

        let (ctx, _) = ex.extract("deliver within 30 days");
        assert_eq!(ctx.timeline_weeks, 4);
    }

    #[test]
    fn test_timeline_default() {
        let (ctx, _) = extractor().extract("build a portal");
        assert_eq!(ctx.timeline_weeks, 8);
    }

    #[test]
    fn test_team_size_phrases() {
        let ex = extractor();
        assert_eq!(ex.extract("a team of 5 will build it").1.team_size, Some(5));
        assert_eq!(ex.extract("we have 3 developers").1.team_size, Some(3));
        assert_eq!(ex.extract("no staffing mentioned").1.team_size, None);
    }

    #[test]
    fn test_project_name_marker_wins() {
        let (ctx, _) = extractor().extract("[PROJECT] Atlas   Storefront\nbuild a shop");
        assert_eq!(ctx.name, "Atlas Storefront");
    }

    #[test]
    fn test_project_name_phrase_heuristic() {
        let (ctx, _) = extractor().extract("Please build an online marketplace for artists");
        assert_eq!(ctx.name, "Online Marketplace");
    }

    #[test]
    fn test_features_and_milestone_banners() {
        let mission = "Requirements:\n- user accounts\n- order tracking\n\n[M1] Kickoff phase [M2] Launch";
        let (ctx, _) = extractor().extract(mission);
        assert_eq!(ctx.features, vec!["user accounts", "order tracking"]);
        assert_eq!(ctx.milestones_text.len(), 2);
        assert!(ctx.milestones_text[0].starts_with("[M1]"));
    }

    #[test]
    fn test_constraints() {
        let (_, res) =
            extractor().extract("budget: $50,000 and we must use postgres for storage");
        assert!(res
            .constraints
            .iter()
            .any(|c| c.kind == ConstraintKind::Budget && c.description == "50,000"));
        assert!(res.constraints.iter().any(|c| c.kind == ConstraintKind::Technology));
    }

    #[test]
    fn test_roles_from_keywords() {
        let (_, res) = extractor().extract("needs a react frontend and a backend api");
        assert!(res.roles_needed.contains(&"frontend".to_string()));
        assert!(res.roles_needed.contains(&"backend".to_string()));
    }
}
