//! socialgraph-cli - reproducible benchmark driver for the socialgraph library
//!
//! Imports a seeded random social network, then times the analytics queries:
//! attribute lookup, direct friends, friends of friends, suggestions and
//! eigenvector centrality.

mod generator;

use anyhow::{Context, Result};
use clap::Parser;
use comfy_table::{ContentArrangement, Table};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use socialgraph::{
    AnalyticsConfig, AttributeValue, CentralityState, FriendSuggestion, GraphSnapshot, GraphStore,
    NodeId,
};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

#[derive(Parser)]
#[command(name = "socialgraph", version, about = "Social graph analytics benchmark")]
struct Cli {
    /// Number of users to import
    #[arg(long, default_value_t = 10_000)]
    users: usize,

    /// Number of random relations to draw
    #[arg(long, default_value_t = 100_000)]
    relations: usize,

    /// Seed for the random generator
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// User the per-user queries run for
    #[arg(long, default_value_t = 1000)]
    user: u64,

    /// Age looked up through the attribute index
    #[arg(long, default_value_t = 33)]
    age: i64,

    /// Keep only the best N suggestions
    #[arg(long)]
    top: Option<usize>,

    /// YAML analytics config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Centrality convergence tolerance (overrides the config file)
    #[arg(long)]
    tolerance: Option<f64>,

    /// Centrality iteration limit (overrides the config file)
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Output format
    #[arg(long, default_value = "table")]
    format: OutputFormat,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Serialize)]
struct StepReport {
    step: &'static str,
    result: String,
    millis: f64,
}

#[derive(Serialize)]
struct Report {
    users: usize,
    relations: usize,
    seed: u64,
    user: NodeId,
    steps: Vec<StepReport>,
    suggestions: Vec<FriendSuggestion>,
    centrality: CentralityState,
}

/// Run `f`, log its duration and record it as a step
fn timed<T>(
    steps: &mut Vec<StepReport>,
    step: &'static str,
    f: impl FnOnce() -> Result<(T, String)>,
) -> Result<T> {
    let start = Instant::now();
    let (value, result) = f()?;
    let millis = start.elapsed().as_secs_f64() * 1000.0;
    info!("{}: {} ({:.3} ms)", step, result, millis);
    steps.push(StepReport { step, result, millis });
    Ok(value)
}

fn load_config(cli: &Cli) -> Result<AnalyticsConfig> {
    let mut config = match &cli.config {
        Some(path) => AnalyticsConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AnalyticsConfig::default(),
    };

    if let Some(tolerance) = cli.tolerance {
        config.centrality.tolerance = tolerance;
    }
    if let Some(max_iterations) = cli.max_iterations {
        config.centrality.max_iterations = max_iterations;
    }
    if cli.top.is_some() {
        config.suggestion_limit = cli.top;
    }
    config.validate()?;
    Ok(config)
}

fn run(cli: &Cli) -> Result<Report> {
    let config = load_config(cli)?;
    let user = NodeId::new(cli.user);
    let mut rng = StdRng::seed_from_u64(cli.seed);
    let mut steps = Vec::new();

    let mut store = GraphStore::with_capacity(cli.users, cli.relations);
    for attribute in &config.indexed_attributes {
        store.create_index(attribute.as_str());
    }

    let users = timed(&mut steps, "Import users", || {
        let users = generator::import_users(&mut store, cli.users, &mut rng);
        let summary = format!("{} users", users.len());
        Ok((users, summary))
    })?;

    timed(&mut steps, "Users by age", || {
        let found = store.index_lookup("age", &AttributeValue::Integer(cli.age));
        Ok(((), format!("{} users aged {}", found.len(), cli.age)))
    })?;

    timed(&mut steps, "Import relations", || {
        let stats =
            generator::import_relations(&mut store, &users, cli.relations, &config.relation, &mut rng)?;
        let summary = format!(
            "{} created, {} duplicates, {} self-loops",
            stats.created, stats.duplicates, stats.self_loops
        );
        Ok(((), summary))
    })?;

    // Import is done; everything below only reads the store
    let snapshot = timed(&mut steps, "Build snapshot", || {
        let snapshot = GraphSnapshot::from_config(&store, &config);
        let summary = format!(
            "{} nodes, {} edges",
            snapshot.view().node_count,
            snapshot.view().edge_count()
        );
        Ok((snapshot, summary))
    })?;

    timed(&mut steps, "Direct friends", || {
        let traversal = snapshot.traverse(user, 1)?;
        Ok(((), format!("{} friends of {}", traversal.frontier(1).len(), user)))
    })?;

    timed(&mut steps, "Friends of friends", || {
        let traversal = snapshot.traverse(user, 2)?;
        Ok(((), format!("{} at depth 2", traversal.frontier(2).len())))
    })?;

    let suggestions = timed(&mut steps, "Friend suggestions", || {
        let suggestions = snapshot.suggest_friends(user)?;
        let summary = match suggestions.first() {
            Some(best) => format!(
                "{} suggestions, best {} (score {})",
                suggestions.len(),
                best.name.as_deref().unwrap_or("<unnamed>"),
                best.score
            ),
            None => "no suggestions".to_string(),
        };
        Ok((suggestions, summary))
    })?;

    let centrality = timed(&mut steps, "Eigenvector centrality", || {
        let mut engine = snapshot.centrality(config.centrality);
        let state = engine.calculate()?;
        let value = engine.centrality(user)?;
        let summary = format!(
            "{:.6} for {} after {} iterations{}",
            value,
            user,
            state.iterations(),
            if state.is_converged() { "" } else { " (not converged)" }
        );
        Ok((state, summary))
    })?;

    Ok(Report {
        users: cli.users,
        relations: cli.relations,
        seed: cli.seed,
        user,
        steps,
        suggestions,
        centrality,
    })
}

fn print_table(report: &Report, top: Option<usize>) {
    println!(
        "Social graph analytics v{} ({} users, {} relations, seed {})",
        socialgraph::version(),
        report.users,
        report.relations,
        report.seed
    );

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Step", "Result", "Time (ms)"]);
    for step in &report.steps {
        table.add_row(vec![
            step.step.to_string(),
            step.result.clone(),
            format!("{:.3}", step.millis),
        ]);
    }
    println!("{}", table);

    if report.suggestions.is_empty() {
        return;
    }

    let mut suggestions = Table::new();
    suggestions.set_content_arrangement(ContentArrangement::Dynamic);
    suggestions.set_header(vec!["Suggestion", "Name", "Shared friends"]);
    for suggestion in report.suggestions.iter().take(top.unwrap_or(10)) {
        suggestions.add_row(vec![
            suggestion.node.to_string(),
            suggestion.name.clone().unwrap_or_default(),
            suggestion.score.to_string(),
        ]);
    }
    println!("{}", suggestions);
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let report = run(&cli)?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => print_table(&report, cli.top),
    }

    Ok(())
}
