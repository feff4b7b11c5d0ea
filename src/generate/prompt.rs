use crate::model::{Domain, ProjectContext, ResourceContext};

struct DomainExpertise {
    considerations: &'static [&'static str],
    phases: &'static [&'static str],
    risks: &'static [&'static str],
}

fn expertise_for(domain: Domain) -> DomainExpertise {
    match domain {
        Domain::Blockchain => DomainExpertise {
            considerations: &[
                "smart contract security and audit readiness",
                "gas optimization",
                "wallet and key management",
            ],
            phases: &[
                "contract architecture",
                "contract development",
                "security review",
                "mainnet deployment",
            ],
            risks: &["contract vulnerabilities", "chain congestion", "regulatory shifts"],
        },
        Domain::Ecommerce => DomainExpertise {
            considerations: &[
                "payment processing compliance",
                "inventory consistency",
                "checkout conversion",
            ],
            phases: &["catalog", "cart and checkout", "payments", "fulfillment"],
            risks: &["payment fraud", "peak-load outages", "cart abandonment"],
        },
        Domain::Mobile => DomainExpertise {
            considerations: &[
                "platform store guidelines",
                "offline behavior",
                "battery and memory budgets",
            ],
            phases: &["framework setup", "core screens", "device testing", "store release"],
            risks: &["store review rejection", "device fragmentation"],
        },
        Domain::Ai => DomainExpertise {
            considerations: &["data quality", "model evaluation", "inference cost"],
            phases: &["data pipeline", "model training", "evaluation", "serving"],
            risks: &["data drift", "poor generalization"],
        },
        Domain::Iot => DomainExpertise {
            considerations: &["device provisioning", "telemetry volume", "firmware updates"],
            phases: &["device integration", "ingestion pipeline", "monitoring"],
            risks: &["connectivity loss", "fleet heterogeneity"],
        },
        Domain::Enterprise => DomainExpertise {
            considerations: &[
                "legacy system integration",
                "role-based access control",
                "audit trails",
            ],
            phases: &["requirements", "integration", "migration", "rollout"],
            risks: &["scope creep", "stakeholder misalignment"],
        },
        Domain::General => DomainExpertise {
            considerations: &["clear requirements", "maintainability", "test coverage"],
            phases: &["analysis", "design", "implementation", "testing"],
            risks: &["unclear scope", "timeline pressure"],
        },
    }
}

/// Resource signals rendered into the prompt so the breakdown respects the
/// stated team, stack, and constraints.
fn resource_block(resources: &ResourceContext) -> String {
    let mut lines = Vec::new();

    if let Some(size) = resources.team_size {
        lines.push(format!("- Team size: {}", size));
    }
    if !resources.roles_needed.is_empty() {
        lines.push(format!("- Roles available: {}", resources.roles_needed.join(", ")));
    }
    if !resources.technology_stack.is_empty() {
        lines.push(format!(
            "- Technology stack: {}",
            resources.technology_stack.join(", ")
        ));
    }
    for constraint in &resources.constraints {
        lines.push(format!("- {}: {}", constraint.kind, constraint.description));
    }

    if lines.is_empty() {
        String::from("(none stated)")
    } else {
        lines.join("\n")
    }
}

/// Render the task-generation prompt for one project context.
pub fn build_task_prompt(context: &ProjectContext, resources: &ResourceContext) -> String {
    let expertise = expertise_for(context.domain);

    let features = if context.features.is_empty() {
        String::from("(none listed)")
    } else {
        context
            .features
            .iter()
            .map(|f| format!("- {}", f))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "You are an experienced {domain} delivery lead planning the project \"{name}\".\n\
         Complexity: {complexity}. Timeline: {weeks} weeks.\n\n\
         Key considerations: {considerations}.\n\
         Typical phases: {phases}.\n\
         Watch for: {risks}.\n\n\
         Requested features:\n{features}\n\n\
         Resource constraints:\n{resources}\n\n\
         Produce the full task breakdown as a JSON array. Each element must be an object with:\n\
         - \"title\": short unique task name\n\
         - \"description\": one or two sentences\n\
         - \"estimated_hours\": number\n\
         - \"priority\": one of \"urgent\", \"high\", \"medium\", \"low\"\n\
         - \"skills_required\": array of skill keywords\n\
         - \"dependencies\": array of titles of prerequisite tasks\n\n\
         Respond with the JSON array only, no commentary.",
        domain = context.domain,
        name = context.name,
        complexity = context.complexity,
        weeks = context.timeline_weeks,
        considerations = expertise.considerations.join(", "),
        phases = expertise.phases.join(", "),
        risks = expertise.risks.join(", "),
        features = features,
        resources = resource_block(resources),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Complexity, Constraint, ConstraintKind};

    #[test]
    fn test_prompt_carries_context() {
        let context = ProjectContext {
            name: "Atlas Storefront".into(),
            domain: Domain::Ecommerce,
            complexity: Complexity::Complex,
            timeline_weeks: 24,
            features: vec!["order tracking".into()],
            milestones_text: Vec::new(),
        };

        let prompt = build_task_prompt(&context, &ResourceContext::default());
        assert!(prompt.contains("Atlas Storefront"));
        assert!(prompt.contains("24 weeks"));
        assert!(prompt.contains("payment processing compliance"));
        assert!(prompt.contains("- order tracking"));
        assert!(prompt.contains("(none stated)"));
    }

    #[test]
    fn test_prompt_carries_resource_constraints() {
        let resources = ResourceContext {
            team_size: Some(4),
            roles_needed: vec!["frontend".into(), "backend".into()],
            technology_stack: vec!["react".into(), "nodejs".into()],
            constraints: vec![Constraint {
                kind: ConstraintKind::Budget,
                description: "120,000".into(),
            }],
        };

        let prompt = build_task_prompt(&ProjectContext::default(), &resources);
        assert!(prompt.contains("- Team size: 4"));
        assert!(prompt.contains("- Roles available: frontend, backend"));
        assert!(prompt.contains("- Technology stack: react, nodejs"));
        assert!(prompt.contains("- budget: 120,000"));
    }
}
