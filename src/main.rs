use clap::Parser;
use colored::Colorize;
use miette::{IntoDiagnostic, Result, WrapErr};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

use screenmap::analysis::NavigationAnalyzer;
use screenmap::config::Config;
use screenmap::report::{ReportFormat, Reporter};
use screenmap::store::{MemoryStore, ScreenStore};

/// screenmap - Screen and navigation graph extraction for React Native projects
#[derive(Parser, Debug)]
#[command(name = "screenmap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the project directory to analyze
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Patterns to exclude (can be specified multiple times)
    #[arg(short, long)]
    exclude: Vec<String>,

    /// Output format (defaults to the configured report format)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Output file (for json/dot formats)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory where navigator discovery starts, relative to the project root
    #[arg(long, value_name = "DIR")]
    navigation_dir: Option<String>,

    /// Maximum nesting depth of navigator recursion
    #[arg(long)]
    max_depth: Option<usize>,

    /// Maximum number of files scanned for navigator declarations
    #[arg(long)]
    max_files: Option<usize>,

    /// Upsert screens and navigation paths into a JSON store file
    #[arg(long, value_name = "FILE")]
    store: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode - only output results
    #[arg(short, long)]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Debug, Default)]
enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Dot,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => ReportFormat::Terminal,
            OutputFormat::Json => ReportFormat::Json,
            OutputFormat::Dot => ReportFormat::Dot,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let config = load_config(&cli)?;
    let format = match &cli.format {
        Some(format) => format.clone().into(),
        None => parse_format(&config.report.format)?,
    };
    let show_timing = matches!(format, ReportFormat::Terminal) && !cli.quiet;

    let start_time = Instant::now();

    let analyzer = NavigationAnalyzer::new(&config)?;
    let analysis = analyzer.analyze(&cli.path);

    let root = cli.path.canonicalize().unwrap_or_else(|_| cli.path.clone());
    let reporter = Reporter::new(format, cli.output.clone()).with_project_root(root);
    reporter.report(&analysis)?;

    if let Some(store_path) = &cli.store {
        let mut store = MemoryStore::open(store_path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to open store: {}", store_path.display()))?;
        let new_screens = store.insert_screens(&analysis.graph.screens).into_diagnostic()?;
        let new_paths = store
            .insert_navigation_paths(&analysis.graph.edges)
            .into_diagnostic()?;
        store
            .save(store_path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to save store: {}", store_path.display()))?;
        info!(
            "Stored {} new screens and {} new navigation paths in {}",
            new_screens,
            new_paths,
            store_path.display()
        );
    }

    let elapsed = start_time.elapsed();
    if show_timing {
        println!(
            "{}",
            format!(
                "⏱  Analyzed {} screens in {:.2}s",
                analysis.graph.screen_count(),
                elapsed.as_secs_f64()
            )
            .dimmed()
        );
    }

    Ok(())
}

fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = if let Some(config_path) = &cli.config {
        Config::from_file(config_path)?
    } else {
        // Try to load from default locations
        Config::from_default_locations(&cli.path)?
    };

    // Override with CLI arguments
    if !cli.exclude.is_empty() {
        config.exclude.extend(cli.exclude.clone());
    }
    if let Some(dir) = &cli.navigation_dir {
        config.navigation.navigation_dir = dir.clone();
    }
    if let Some(max_depth) = cli.max_depth {
        config.limits.max_depth = max_depth;
    }
    if let Some(max_files) = cli.max_files {
        config.limits.max_files = max_files;
    }

    Ok(config)
}

fn parse_format(name: &str) -> Result<ReportFormat> {
    match name.to_ascii_lowercase().as_str() {
        "terminal" => Ok(ReportFormat::Terminal),
        "json" => Ok(ReportFormat::Json),
        "dot" => Ok(ReportFormat::Dot),
        other => Err(miette::miette!(
            "Unknown report format '{}' (expected terminal, json or dot)",
            other
        )),
    }
}
