//! Team synthesis: turn mission signals into a concrete roster of
//! `TeamMember` profiles with skills, experience tiers, and rates.

mod taxonomy;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::ComposerConfig;
use crate::model::{Complexity, ExperienceTier, ProjectContext, ResourceContext, TeamMember};

use taxonomy::{
    primary_skills, role_title, FIRST_NAMES, LAST_NAMES, SECONDARY_SKILLS,
};

/// Keyword bumps added to a discipline's base requirement score for every
/// keyword found in the mission.
const DISCIPLINE_KEYWORDS: &[(&str, f64, &[&str])] = &[
    ("backend", 2.0, &["api", "database", "server", "backend", "integration"]),
    ("frontend", 2.0, &["ui", "frontend", "interface", "web", "react"]),
    ("design", 3.0, &["design", "ux", "branding", "visual"]),
    ("devops", 3.0, &["deploy", "infrastructure", "kubernetes", "scaling", "cloud"]),
    ("management", 2.0, &["coordinate", "stakeholder", "manage", "agile", "scrum"]),
];

const BASE_SCORES: &[(&str, f64)] = &[
    ("backend", 5.0),
    ("frontend", 5.0),
    ("design", 3.0),
    ("devops", 2.0),
    ("management", 2.0),
];

pub struct TeamComposer {
    config: ComposerConfig,
}

impl TeamComposer {
    pub fn new(config: ComposerConfig) -> Self {
        Self { config }
    }

    /// Synthesize a roster for the mission.
    ///
    /// Requirement scores decide which disciplines are staffed and how
    /// senior they are; `resources.team_size` truncates the composed order
    /// when set. Seeded RNG keeps name selection and skill jitter
    /// reproducible for a given config.
    pub fn compose(
        &self,
        mission_text: &str,
        context: &ProjectContext,
        resources: &ResourceContext,
    ) -> Vec<TeamMember> {
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let scores = self.requirement_scores(mission_text, context.complexity);

        let mut used_names: Vec<String> = Vec::new();
        let mut members = Vec::new();

        for (discipline, score) in &scores {
            if *discipline == "management" {
                continue;
            }
            if *score < 3.0 {
                continue;
            }
            let headcount = if *score >= 8.0 { 2 } else { 1 };
            for _ in 0..headcount {
                members.push(self.synthesize(discipline, *score, &mut rng, &mut used_names));
            }
        }

        let management_score = scores
            .iter()
            .find(|(d, _)| *d == "management")
            .map(|(_, s)| *s)
            .unwrap_or(0.0);
        if management_score >= 4.0 || members.len() > 3 {
            members.push(self.synthesize("manager", management_score, &mut rng, &mut used_names));
        }

        if members.len() > 4 {
            let lead = self.synthesize("lead", 9.0, &mut rng, &mut used_names);
            members.insert(0, lead);
        }

        if let Some(size) = resources.team_size {
            members.truncate(size as usize);
        }

        debug!(
            team_size = members.len(),
            complexity = %context.complexity,
            "Composed team roster"
        );
        members
    }

    /// Requirement score per discipline: fixed base plus keyword bumps,
    /// scaled by complexity, capped at 10.
    fn requirement_scores(&self, mission_text: &str, complexity: Complexity) -> Vec<(&'static str, f64)> {
        let lower = mission_text.to_lowercase();
        let multiplier = match complexity {
            Complexity::Simple => 0.7,
            Complexity::Medium => 1.0,
            Complexity::Complex => 1.5,
        };

        BASE_SCORES
            .iter()
            .map(|(discipline, base)| {
                let bump = DISCIPLINE_KEYWORDS
                    .iter()
                    .find(|(d, _, _)| d == discipline)
                    .map(|(_, amount, keywords)| {
                        keywords.iter().filter(|kw| lower.contains(*kw)).count() as f64 * amount
                    })
                    .unwrap_or(0.0);
                (*discipline, ((base + bump) * multiplier).min(10.0))
            })
            .collect()
    }

    fn synthesize(
        &self,
        role: &str,
        score: f64,
        rng: &mut StdRng,
        used_names: &mut Vec<String>,
    ) -> TeamMember {
        let tier = match role {
            "devops" | "manager" | "lead" => ExperienceTier::Senior,
            _ if score > 7.0 => ExperienceTier::Senior,
            _ => ExperienceTier::Mid,
        };

        let mut member = TeamMember::new(pick_name(rng, used_names), role_title(role))
            .with_experience(tier);

        for skill in primary_skills(role) {
            let jitter = rng.gen_range(-1i32..=1);
            let level = (tier.base_skill_level() as i32 + jitter).clamp(1, 10) as u8;
            member = member.with_skill(*skill, level);
        }

        // Redraw on collisions so the full secondary budget lands on new
        // skills; the attempt cap guards against a depleted pool.
        let mut added = 0;
        let mut attempts = 0;
        while added < self.config.secondary_skill_count && attempts < 64 {
            attempts += 1;
            let skill = SECONDARY_SKILLS[rng.gen_range(0..SECONDARY_SKILLS.len())];
            if member.has_skill(skill) {
                continue;
            }
            member = member.with_skill(skill, rng.gen_range(3u8..=6));
            added += 1;
        }

        let rate = tier.base_rate() + (member.mean_skill_level() * 5.0).round() as u32;
        member.with_rate(rate)
    }
}

fn pick_name(rng: &mut StdRng, used: &mut Vec<String>) -> String {
    for _ in 0..64 {
        let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
        let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
        let name = format!("{} {}", first, last);
        if !used.contains(&name) {
            used.push(name.clone());
            return name;
        }
    }
    // Name pool exhausted by collisions; disambiguate with a counter.
    let name = format!("{} {} {}", FIRST_NAMES[0], LAST_NAMES[0], used.len());
    used.push(name.clone());
    name
}
