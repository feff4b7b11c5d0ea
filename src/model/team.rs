use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A synthesized team member profile.
///
/// Deliberately carries no workload counter: accumulated hours live in the
/// run-private `WorkloadLedger`, so a roster can be shared across runs
/// without hidden mutation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub experience: ExperienceTier,
    /// Skill name to level, 1..=10. BTreeMap keeps iteration deterministic.
    pub skills: BTreeMap<String, u8>,
    pub hourly_rate: u32,
}

impl TeamMember {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            experience: ExperienceTier::Mid,
            skills: BTreeMap::new(),
            hourly_rate: 0,
        }
    }

    pub fn with_experience(mut self, tier: ExperienceTier) -> Self {
        self.experience = tier;
        self
    }

    pub fn with_skill(mut self, skill: impl Into<String>, level: u8) -> Self {
        self.skills.insert(skill.into(), level.clamp(1, 10));
        self
    }

    pub fn with_rate(mut self, rate: u32) -> Self {
        self.hourly_rate = rate;
        self
    }

    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.contains_key(skill)
    }

    pub fn mean_skill_level(&self) -> f64 {
        if self.skills.is_empty() {
            return 0.0;
        }
        self.skills.values().map(|&v| v as f64).sum::<f64>() / self.skills.len() as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceTier {
    Junior,
    #[default]
    Mid,
    Senior,
    Expert,
}

impl ExperienceTier {
    /// Base skill level granted to primary skills at this tier.
    pub fn base_skill_level(self) -> u8 {
        match self {
            Self::Junior => 6,
            Self::Mid => 7,
            Self::Senior => 9,
            Self::Expert => 10,
        }
    }

    /// Base hourly rate before the mean-skill bonus.
    pub fn base_rate(self) -> u32 {
        match self {
            Self::Junior => 35,
            Self::Mid => 55,
            Self::Senior => 75,
            Self::Expert => 95,
        }
    }
}

impl std::fmt::Display for ExperienceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Junior => write!(f, "junior"),
            Self::Mid => write!(f, "mid"),
            Self::Senior => write!(f, "senior"),
            Self::Expert => write!(f, "expert"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_builders() {
        let member = TeamMember::new("Alex Smith", "Backend Developer")
            .with_experience(ExperienceTier::Senior)
            .with_skill("python", 9)
            .with_skill("sql", 8)
            .with_rate(118);

        assert!(member.has_skill("python"));
        assert!(!member.has_skill("react"));
        assert_eq!(member.mean_skill_level(), 8.5);
    }

    #[test]
    fn test_skill_level_clamped() {
        let member = TeamMember::new("A", "B").with_skill("python", 14);
        assert_eq!(member.skills["python"], 10);
    }
}
