use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;

use relief_workflow::build_workflow;
use relief_workflow::domain::allocation::provider_trait::CandidateProviders;
use relief_workflow::domain::workflow::stage_registry::Collaborators;
use relief_workflow::domain::workflow::stages::offline::{NearestDisasterMatcher, PassthroughExtractor, UnavailablePlanner};
use relief_workflow::domain::workflow::workflow_state::WorkflowState;
use relief_workflow::loader::candidate_pool::CandidatePool;
use relief_workflow::loader::parser::{parse_json_file, write_json_file};
use relief_workflow::logger;
use relief_workflow::report::write_report_file;

/// Runs one disaster response workflow over an in-memory candidate pool.
#[derive(Parser, Debug)]
#[command(name = "relief-workflow", version, about)]
struct Args {
    /// Initial workflow state (JSON).
    #[arg(long)]
    state: PathBuf,

    /// Candidate pool with disasters, volunteers, admins and resources (JSON).
    #[arg(long)]
    candidates: PathBuf,

    /// Graph configuration (JSON). Uses the standard graph if omitted.
    #[arg(long)]
    graph: Option<PathBuf>,

    /// Where to write the final state (JSON).
    #[arg(long)]
    output: Option<PathBuf>,

    /// Where to write the allocation report (CSV).
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init();

    let pool = Arc::new(CandidatePool::from_file(&args.candidates).with_context(|| format!("loading candidates from {}", args.candidates.display()))?);

    let collaborators = Collaborators {
        extractor: Arc::new(PassthroughExtractor),
        directory: pool.clone(),
        matcher: Arc::new(NearestDisasterMatcher),
        planner: Arc::new(UnavailablePlanner),
        candidates: CandidateProviders::from_single(pool),
    };

    let executor = build_workflow(args.graph.as_deref(), collaborators).context("building the workflow graph")?;

    let initial_state: WorkflowState = parse_json_file(&args.state).with_context(|| format!("loading state from {}", args.state.display()))?;
    let run = executor.run_traced(initial_state).context("workflow run failed")?;

    print_summary(&run.state);

    if let Some(output) = &args.output {
        write_json_file(output, &run.state).with_context(|| format!("writing state to {}", output.display()))?;
        log::info!("Final state written to '{}'.", output.display());
    }

    if let Some(report) = &args.report {
        let allocations = run.state.task_allocations.as_deref().unwrap_or(&[]);
        let origin = run.state.disaster.as_ref().and_then(|disaster| disaster.disaster_coordinates.as_ref());
        write_report_file(report, origin, allocations).with_context(|| format!("writing report to {}", report.display()))?;
    }

    Ok(())
}

fn print_summary(state: &WorkflowState) {
    let Some(task_allocations) = &state.task_allocations else {
        println!("{}", "No allocations were made in this run.".yellow());
        return;
    };

    if let Some(disaster) = &state.disaster {
        println!("{} {} ({})", "Disaster".bold(), disaster.disaster_id, disaster.disaster_type);
    }

    for task_allocation in task_allocations {
        let shortfalls = task_allocation.shortfalls();
        let status = if shortfalls.is_empty() { "fully allocated".green() } else { "under-allocated".yellow() };

        println!(
            "  {} [{}]: {} resource allocations, {} volunteers",
            task_allocation.task.name.bold(),
            status,
            task_allocation.resource_allocations.len(),
            task_allocation.volunteer_allocations.len()
        );
        for shortfall in shortfalls {
            println!("    {} {}", "missing".red(), shortfall);
        }
    }
}
