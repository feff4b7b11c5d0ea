use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use planwright::cli::{Cli, Commands, ConfigAction, OutputFormat};
use planwright::config::PlannerConfig;
use planwright::error::Result;
use planwright::planner::{Planner, ProjectPlan};
use planwright::textgen::HttpTextGenerator;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("planwright=debug")
    } else {
        EnvFilter::new("planwright=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Plan {
            mission,
            file,
            start_date,
            offline,
        } => {
            let mission_text = match (mission, file) {
                (Some(text), _) => text,
                (None, Some(path)) => tokio::fs::read_to_string(&path).await?,
                (None, None) => {
                    return Err(planwright::PlanError::Other(
                        "Provide a mission statement or --file".into(),
                    ));
                }
            };

            let config = PlannerConfig::load(Path::new(".")).await?;
            let planner = build_planner(config, offline)?;
            let plan = planner.plan_from(&mission_text, start_date).await?;

            match cli.format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&plan)?);
                }
                OutputFormat::Text => print_plan_summary(&plan),
            }
            Ok(())
        }
        Commands::Config { action } => cmd_config(action, cli.format).await,
    }
}

/// Fall back to the offline planner when no API key is configured, rather
/// than failing the run.
fn build_planner(config: PlannerConfig, offline: bool) -> Result<Planner> {
    if offline || config.textgen.resolve_api_key().is_none() {
        return Ok(Planner::offline(config));
    }
    let textgen = HttpTextGenerator::new(&config.textgen)?;
    Ok(Planner::new(config, Arc::new(textgen)))
}

async fn cmd_config(action: ConfigAction, format: OutputFormat) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = PlannerConfig::load(Path::new(".")).await?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
                OutputFormat::Text => println!(
                    "{}",
                    toml::to_string_pretty(&config)
                        .map_err(|e| planwright::PlanError::Config(e.to_string()))?
                ),
            }
        }
        ConfigAction::Reset => {
            let config = PlannerConfig::default();
            config.save(Path::new(".")).await?;
            println!("Wrote default configuration to planwright.toml");
        }
    }
    Ok(())
}

fn print_plan_summary(plan: &ProjectPlan) {
    println!("Project: {}", plan.context.name);
    println!(
        "Domain: {} ({} complexity), {} weeks",
        plan.context.domain, plan.context.complexity, plan.context.timeline_weeks
    );
    println!();

    println!("Milestones:");
    for entry in &plan.timeline.milestones {
        println!(
            "  {} .. {}  {}",
            entry.start_date, entry.end_date, entry.title
        );
    }
    println!();

    println!("Tasks:");
    for entry in &plan.timeline.tasks {
        let assignee = entry.assigned_to.as_deref().unwrap_or("unassigned");
        println!(
            "  {} .. {}  {} [{}]",
            entry.start_date, entry.end_date, entry.title, assignee
        );
    }
    println!();

    println!("Team ({} members):", plan.team.len());
    for member in &plan.team {
        println!(
            "  {} - {} ({}, ${}/h)",
            member.name, member.role, member.experience, member.hourly_rate
        );
    }

    if !plan.assignment.recommendations.is_empty() {
        println!();
        println!("Recommendations:");
        for recommendation in &plan.assignment.recommendations {
            println!("  - {}", recommendation);
        }
    }

    println!();
    println!(
        "Project ends {} ({} calendar days, {:.0} estimated hours, ${:.0} estimated cost)",
        plan.timeline.summary.project_end,
        plan.timeline.summary.total_duration_days,
        plan.timeline.summary.estimated_effort_hours,
        plan.allocation.estimated_cost
    );
}
