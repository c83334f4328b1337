use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cursor-dance", version)]
struct Cli {
    /// Enable debug-level logging (overridden by `RUST_LOG`).
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play waypoints and write the sampled cursor frames as JSON.
    Sample(SampleArgs),
    /// Load and validate a configuration file.
    CheckConfig(CheckConfigArgs),
    /// Print the default configuration as JSON.
    DefaultConfig,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Input waypoint JSON.
    #[arg(long)]
    waypoints: PathBuf,

    /// Configuration JSON; defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Frames per second (times are in milliseconds).
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// First sampled time; defaults to the first waypoint's start.
    #[arg(long, allow_hyphen_values = true)]
    start: Option<f64>,

    /// Last sampled time; defaults to the last waypoint's end.
    #[arg(long, allow_hyphen_values = true)]
    end: Option<f64>,

    /// Number of independent cursors.
    #[arg(long, default_value_t = 1)]
    cursors: usize,

    /// Play cursors on a thread pool.
    #[arg(long)]
    parallel: bool,

    /// Thread pool size (with `--parallel`).
    #[arg(long)]
    threads: Option<usize>,

    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct CheckConfigArgs {
    /// Configuration JSON to check.
    #[arg(long)]
    config: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        "cursor_dance=debug"
    } else {
        "cursor_dance=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Sample(args) => cmd_sample(args),
        Command::CheckConfig(args) => cmd_check_config(args),
        Command::DefaultConfig => cmd_default_config(),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<cursor_dance::DanceConfig> {
    let config = match path {
        Some(p) => cursor_dance::DanceConfig::from_path(p)
            .with_context(|| format!("load config '{}'", p.display()))?,
        None => cursor_dance::DanceConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let doc = cursor_dance::WaypointDoc::from_path(&args.waypoints)
        .with_context(|| format!("load waypoints '{}'", args.waypoints.display()))?;
    let waypoints = doc.to_waypoints()?;

    let start = args
        .start
        .or_else(|| waypoints.first().map(|w| w.start_time))
        .unwrap_or(0.0);
    let end = args
        .end
        .or_else(|| waypoints.iter().map(|w| w.end_time).reduce(f64::max))
        .unwrap_or(start);

    let threading = cursor_dance::PlaybackThreading {
        parallel: args.parallel,
        threads: args.threads,
    };
    let tracks = cursor_dance::play_cursors(
        &waypoints,
        &config,
        args.cursors,
        args.fps,
        start,
        end,
        &threading,
    )?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let f = File::create(&args.out)
        .with_context(|| format!("create output '{}'", args.out.display()))?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, &tracks).with_context(|| "write frames JSON")?;
    w.flush()
        .with_context(|| format!("flush output '{}'", args.out.display()))?;

    let frames: usize = tracks.iter().map(|t| t.frames.len()).sum();
    tracing::info!(cursors = tracks.len(), frames, "sampling done");
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_check_config(args: CheckConfigArgs) -> anyhow::Result<()> {
    let config = load_config(Some(&args.config))?;
    println!(
        "config ok: mover '{}', {} momentum profile(s)",
        config.mover,
        config.momentum.len()
    );
    Ok(())
}

fn cmd_default_config() -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&cursor_dance::DanceConfig::default())
        .with_context(|| "serialize default config")?;
    println!("{json}");
    Ok(())
}
