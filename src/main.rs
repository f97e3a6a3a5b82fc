#![warn(clippy::all, rust_2018_idioms)]

use anyhow::Context;
use pulsardash::app::config::DashConfig;
use pulsardash::app::topology::TopologyLevel;
use pulsardash::Dashboard;
use serde_json::json;
use tracing_subscriber::prelude::*;

const USAGE: &str = "usage: pulsardash [VIEW] [LEVEL=ID ...]

VIEW    cluster | tenant | namespace | topic | producer | subscription (default: cluster)
LEVEL   same names; each LEVEL=ID adds one filter value

Prints the filter state, option catalog and scoped view as JSON.";

fn init_logging(config: &DashConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|e| {
            eprintln!("Invalid log filter {:?}: {}", config.log_filter, e);
            tracing_subscriber::EnvFilter::new("pulsardash=info")
        });

    // File logging keeps stdout clean for the JSON output
    let log_file = directories::ProjectDirs::from("com", "", "pulsardash").and_then(|dirs| {
        let log_dir = dirs.data_dir().join("logs");
        std::fs::create_dir_all(&log_dir).ok()?;
        let path = log_dir.join("pulsardash.log");
        std::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(&path)
            .ok()
            .map(|file| (path, file))
    });

    let registry = tracing_subscriber::registry().with(filter);
    let result = match log_file {
        Some((path, file)) => {
            let subscriber = registry.with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::sync::Mutex::new(file))
                    .with_ansi(false),
            );
            tracing::subscriber::set_global_default(subscriber).map(|_| Some(path))
        }
        None => {
            let subscriber =
                registry.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));
            tracing::subscriber::set_global_default(subscriber).map(|_| None)
        }
    };

    match result {
        Ok(path) => {
            // Bridge log crate records (reqwest, hyper) into tracing
            if let Err(e) = tracing_log::LogTracer::init() {
                eprintln!("Failed to initialize log-to-tracing bridge: {}", e);
            }
            if let Some(path) = path {
                tracing::info!("Logging initialized to: {:?}", path);
            }
        }
        Err(e) => eprintln!("Failed to set tracing subscriber: {}", e),
    }
}

/// Split the command line into the requested view and `LEVEL=ID` filters.
fn parse_args(args: &[String]) -> anyhow::Result<(TopologyLevel, Vec<(TopologyLevel, String)>)> {
    let mut view = TopologyLevel::Cluster;
    let mut filters = Vec::new();

    for (position, arg) in args.iter().enumerate() {
        match arg.split_once('=') {
            Some((level, id)) => {
                let level = level
                    .parse::<TopologyLevel>()
                    .with_context(|| format!("Invalid filter {:?}", arg))?;
                filters.push((level, id.to_string()));
            }
            None if position == 0 => {
                view = arg.parse()?;
            }
            None => anyhow::bail!("Unexpected argument {:?}\n\n{}", arg, USAGE),
        }
    }
    Ok((view, filters))
}

async fn run(
    dashboard: Dashboard,
    view: TopologyLevel,
    filters: Vec<(TopologyLevel, String)>,
) -> anyhow::Result<()> {
    let report = dashboard.load_options().await;
    for failure in report.failures() {
        tracing::warn!(
            "Option source {} unavailable: {:?}",
            failure.endpoint.path(),
            failure.status
        );
    }

    for (level, id) in &filters {
        if !dashboard.is_selected(*level, id).await {
            dashboard.add_filter(*level, id).await;
        }
    }
    dashboard.navigate(view).await;

    let scoped = dashboard.fetch_scoped(view).await;
    let snapshot = dashboard.snapshot().await;

    let output = json!({
        "snapshot": snapshot,
        "scoped": scoped,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{}", USAGE);
        return Ok(());
    }

    let config = DashConfig::load();
    init_logging(&config);
    tracing::info!(
        "pulsardash {} ({}) starting, args: {:?}",
        env!("CARGO_PKG_VERSION"),
        env!("PULSARDASH_GIT_COMMIT"),
        args
    );

    let (view, filters) = parse_args(&args)?;
    let dashboard = Dashboard::from_config(&config)?;

    let runtime = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
    runtime.block_on(run(dashboard, view, filters))
}
