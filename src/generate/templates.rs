use crate::model::{Complexity, Domain, ProjectContext, Priority, Task};

/// Deterministic task breakdown used when text generation is unavailable,
/// times out, or returns nothing parseable.
///
/// The breakdown is a dependency chain: base analysis and architecture tasks,
/// then domain-specific work, then the common database/API/testing tail. Each
/// task depends on the one before it.
pub fn template_tasks(context: &ProjectContext) -> Vec<Task> {
    let complex = context.complexity == Complexity::Complex;
    let hours = |base: f64, when_complex: f64| if complex { when_complex } else { base };

    let mut tasks = vec![
        Task::new(
            "Requirements Analysis",
            "Gather and document functional and non-functional requirements",
        )
        .with_hours(hours(12.0, 16.0))
        .with_priority(Priority::High)
        .with_skills(["analysis", "documentation"]),
        Task::new(
            "Technical Architecture Design",
            "Define system components, data flow, and technology choices",
        )
        .with_hours(hours(16.0, 24.0))
        .with_priority(Priority::High)
        .with_skills(["architecture", "system_design"]),
    ];

    match context.domain {
        Domain::Blockchain => {
            tasks.push(
                Task::new(
                    "Smart Contract Architecture",
                    "Design contract interfaces, upgrade strategy, and access control",
                )
                .with_hours(32.0)
                .with_priority(Priority::High)
                .with_skills(["solidity", "architecture"]),
            );
            tasks.push(
                Task::new(
                    "Smart Contract Development",
                    "Implement and unit-test the contract suite",
                )
                .with_hours(80.0)
                .with_priority(Priority::High)
                .with_skills(["solidity", "testing"]),
            );
            tasks.push(
                Task::new(
                    "Security Audit Preparation",
                    "Harden contracts and assemble audit documentation",
                )
                .with_hours(24.0)
                .with_priority(Priority::Urgent)
                .with_skills(["security", "solidity"]),
            );
        }
        Domain::Ecommerce => {
            tasks.push(
                Task::new(
                    "Payment Gateway Integration",
                    "Integrate payment processors with fraud checks and refunds",
                )
                .with_hours(40.0)
                .with_priority(Priority::High)
                .with_skills(["payment_integration", "security"]),
            );
            tasks.push(
                Task::new(
                    "Product Catalog System",
                    "Build product models, search, and category browsing",
                )
                .with_hours(48.0)
                .with_priority(Priority::High)
                .with_skills(["backend", "database"]),
            );
            tasks.push(
                Task::new(
                    "Shopping Cart & Checkout",
                    "Implement cart state, checkout flow, and order creation",
                )
                .with_hours(36.0)
                .with_priority(Priority::High)
                .with_skills(["frontend", "backend"]),
            );
        }
        Domain::Mobile => {
            tasks.push(
                Task::new(
                    "Mobile Framework Setup",
                    "Set up project scaffolding, navigation, and CI for both platforms",
                )
                .with_hours(16.0)
                .with_priority(Priority::High)
                .with_skills(["mobile", "ci_cd"]),
            );
            tasks.push(
                Task::new(
                    "Mobile UI Implementation",
                    "Build the core screens and platform-adaptive components",
                )
                .with_hours(60.0)
                .with_priority(Priority::High)
                .with_skills(["mobile", "ui_design"]),
            );
        }
        Domain::Ai | Domain::Iot | Domain::Enterprise | Domain::General => {}
    }

    tasks.push(
        Task::new(
            "Database Design & Setup",
            "Model the schema, set up migrations, and seed environments",
        )
        .with_hours(hours(20.0, 28.0))
        .with_priority(Priority::Medium)
        .with_skills(["database", "sql"]),
    );
    tasks.push(
        Task::new(
            "API Development",
            "Implement the service API with validation and error handling",
        )
        .with_hours(hours(28.0, 40.0))
        .with_priority(Priority::Medium)
        .with_skills(["backend", "api_design"]),
    );
    tasks.push(
        Task::new(
            "Testing & Quality Assurance",
            "Write integration tests and run end-to-end verification",
        )
        .with_hours(32.0)
        .with_priority(Priority::Medium)
        .with_skills(["testing", "qa"]),
    );

    chain_dependencies(&mut tasks);
    adjust_for_timeline(&mut tasks, context.timeline_weeks);
    tasks
}

/// Each task depends on its predecessor, forming a single chain.
fn chain_dependencies(tasks: &mut [Task]) {
    for i in 1..tasks.len() {
        let previous = tasks[i - 1].title.clone();
        tasks[i].dependencies = vec![previous];
    }
}

/// Tight timelines compress estimates and drop Medium tasks to Low; High
/// and Urgent work keeps its priority. Generous timelines pad estimates.
fn adjust_for_timeline(tasks: &mut [Task], timeline_weeks: u32) {
    if timeline_weeks < 8 {
        for task in tasks.iter_mut() {
            task.estimated_hours *= 0.8;
            if task.priority == Priority::Medium {
                task.priority = Priority::Low;
            }
        }
    } else if timeline_weeks > 16 {
        for task in tasks.iter_mut() {
            task.estimated_hours *= 1.2;
        }
    }
}
