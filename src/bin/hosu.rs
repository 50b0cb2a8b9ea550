use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "hosu", version)]
struct Cli {
    /// Log at debug level.
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a replay and print it as JSON.
    Inspect(InspectArgs),
    /// Print the variable table built from a replay.
    Vars(VarsArgs),
    /// Render a layout to a PNG.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Input `.osr` replay.
    #[arg(long)]
    replay: PathBuf,
}

#[derive(Parser, Debug)]
struct VarsArgs {
    /// Input `.osr` replay.
    #[arg(long)]
    replay: PathBuf,

    /// Extra variables (JSON object); these override replay variables.
    #[arg(long)]
    vars: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Layout JSON.
    #[arg(long)]
    layout: PathBuf,

    /// Replay whose fields become `REPLAY_*` variables.
    #[arg(long)]
    replay: Option<PathBuf>,

    /// Extra variables (JSON object); these override replay variables.
    #[arg(long)]
    vars: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    match cli.cmd {
        Command::Inspect(args) => cmd_inspect(args),
        Command::Vars(args) => cmd_vars(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn load_vars(replay: Option<&Path>, extra: Option<&Path>) -> anyhow::Result<hosu::VariableTable> {
    let mut vars = match replay {
        Some(path) => hosu::replay_variables(&hosu::ReplayRecord::from_path(path)?),
        None => hosu::VariableTable::new(),
    };
    if let Some(path) = extra {
        vars.extend(hosu::VariableTable::from_path(path)?);
    }
    Ok(vars)
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let rec = hosu::ReplayRecord::from_path(&args.replay)?;
    let json = serde_json::to_string_pretty(&rec.to_json_value())?;
    println!("{json}");
    Ok(())
}

fn cmd_vars(args: VarsArgs) -> anyhow::Result<()> {
    let vars = load_vars(Some(&args.replay), args.vars.as_deref())?;
    let json = serde_json::to_string_pretty(&vars)?;
    println!("{json}");
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let layout = hosu::Layout::from_path(&args.layout)?;
    let vars = load_vars(args.replay.as_deref(), args.vars.as_deref())?;
    let assets_root = args
        .layout
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf();

    let mut surface = hosu::RasterSurface::new(hosu::RasterSettings {
        assets_root,
        ..hosu::RasterSettings::default()
    });
    let (frame, stats) = hosu::render_layout_with_stats(&mut surface, &layout, &vars)?;
    if stats.widgets_failed > 0 {
        tracing::warn!(failed = stats.widgets_failed, "some widgets were skipped");
    }

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    frame.save_png(&args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
