use agglo::{
    Agglomerator, Linkage, LoadError, Loader, PartitionReport, DEFAULT_TARGET, FILE_FORMAT_HELP,
};
use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use env_logger::Builder;
use log::{debug, info, LevelFilter};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

/// Cluster 2-D objects by repeatedly merging the two closest clusters
#[derive(Parser, Debug)]
#[command(name = "agglo", version, after_help = FILE_FORMAT_HELP)]
struct Cli {
    /// File with the objects to cluster
    file: PathBuf,

    /// Number of clusters to stop at (N > 0)
    #[arg(default_value_t = DEFAULT_TARGET, value_parser = parse_target)]
    target: usize,

    /// How the distance between two clusters is measured
    #[arg(short, long, value_enum, default_value_t = LinkageArg::Avg)]
    linkage: LinkageArg,

    /// Shorthand for `--linkage avg`
    #[arg(long, hide = true, conflicts_with_all = ["linkage", "min", "max"])]
    avg: bool,

    /// Shorthand for `--linkage min`
    #[arg(long, hide = true, conflicts_with_all = ["linkage", "max"])]
    min: bool,

    /// Shorthand for `--linkage max`
    #[arg(long, hide = true, conflicts_with = "linkage")]
    max: bool,

    /// Output format for the final partition
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum LinkageArg {
    /// Unweighted pair-group average
    #[value(alias = "average")]
    Avg,
    /// Nearest neighbour (single linkage)
    #[value(aliases = ["nearest", "single"])]
    Min,
    /// Farthest neighbour (complete linkage)
    #[value(aliases = ["farthest", "complete"])]
    Max,
}

impl From<LinkageArg> for Linkage {
    fn from(arg: LinkageArg) -> Self {
        match arg {
            LinkageArg::Avg => Linkage::Average,
            LinkageArg::Min => Linkage::Nearest,
            LinkageArg::Max => Linkage::Farthest,
        }
    }
}

impl Cli {
    /// Linkage picked by `--linkage` or one of the bare shorthand flags
    fn linkage(&self) -> Linkage {
        let arg = if self.avg {
            LinkageArg::Avg
        } else if self.min {
            LinkageArg::Min
        } else if self.max {
            LinkageArg::Max
        } else {
            self.linkage
        };
        Linkage::from(arg)
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_target(raw: &str) -> std::result::Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("cluster count must be a positive integer, got \"{}\"", raw)),
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let start_time = Instant::now();
    let linkage = cli.linkage();

    let clusters = Loader::new()
        .load_path(&cli.file)
        .with_context(|| format!("Failed to load objects from {}", cli.file.display()))?;

    info!(
        "Clustering {} objects into {} clusters ({} linkage)",
        clusters.len(),
        cli.target,
        linkage
    );

    let result = Agglomerator::new(linkage)
        .target(cli.target)
        .run(clusters)
        .context("Clustering failed")?;

    let report = PartitionReport::new(&result, linkage, cli.target);
    match cli.format {
        OutputFormat::Text => print!("{}", report.to_text()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    info!("Finished in {:.3}s", start_time.elapsed().as_secs_f64());
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);

            if let Some(load_err) = err.downcast_ref::<LoadError>() {
                debug!("{} objects were loaded before the failure", load_err.loaded);
                if load_err.kind.is_format_error() {
                    eprintln!("\n{}", FILE_FORMAT_HELP);
                }
            }

            ExitCode::FAILURE
        }
    }
}
