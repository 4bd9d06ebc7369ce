use std::{
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "captionfx", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the render plan of one frame as JSON (`null` when no caption is active).
    Frame(FrameArgs),
    /// Print one JSON line per frame for a frame range.
    Frames(FramesArgs),
    /// List the animation catalog.
    Templates(TemplatesArgs),
    /// Report inconsistencies in an overlay; exits non-zero when any are found.
    Check(CheckArgs),
}

#[derive(Args, Debug)]
struct RenderOpts {
    /// Render settings JSON; flags below override its values.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Animation mode.
    #[arg(long, value_enum)]
    mode: Option<ModeChoice>,

    /// Seed for jittering templates (system randomness when omitted).
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeChoice {
    Block,
    Word,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input caption overlay JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    #[command(flatten)]
    render: RenderOpts,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Input caption overlay JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// End frame (exclusive); defaults to the overlay's duration.
    #[arg(long)]
    end: Option<u64>,

    /// Evaluate chunks on a thread pool.
    #[arg(long)]
    parallel: bool,

    /// Worker threads for `--parallel` (rayon default when omitted).
    #[arg(long)]
    threads: Option<usize>,

    /// Frames per parallel chunk.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,

    #[command(flatten)]
    render: RenderOpts,
}

#[derive(Parser, Debug)]
struct TemplatesArgs {
    /// Only list templates that need a pro plan.
    #[arg(long)]
    pro_only: bool,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Input caption overlay JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Render settings JSON (exit window length).
    #[arg(long)]
    settings: Option<PathBuf>,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Templates(args) => cmd_templates(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn read_overlay_json(path: &Path) -> anyhow::Result<captionfx::CaptionOverlay> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read overlay '{}'", path.display()))?;
    captionfx::CaptionOverlay::from_json_slice(&bytes)
        .with_context(|| format!("parse overlay '{}'", path.display()))
}

fn read_settings(path: Option<&Path>) -> anyhow::Result<captionfx::RenderSettings> {
    let Some(path) = path else {
        return Ok(captionfx::RenderSettings::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read settings '{}'", path.display()))?;
    captionfx::RenderSettings::from_json_str(&text)
        .with_context(|| format!("parse settings '{}'", path.display()))
}

fn resolve_settings(opts: &RenderOpts) -> anyhow::Result<captionfx::RenderSettings> {
    let mut settings = read_settings(opts.settings.as_deref())?;
    if let Some(mode) = opts.mode {
        settings = settings.with_mode(match mode {
            ModeChoice::Block => captionfx::AnimationMode::Block,
            ModeChoice::Word => captionfx::AnimationMode::WordRelative,
        });
    }
    if let Some(seed) = opts.seed {
        settings = settings.with_seed(seed);
    }
    Ok(settings)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<ExitCode> {
    let overlay = read_overlay_json(&args.in_path)?;
    let settings = resolve_settings(&args.render)?;

    let plan = captionfx::CaptionRenderer::render_frame(
        &overlay,
        captionfx::FrameIndex(args.frame),
        &settings,
    )?;

    let json = serde_json::to_string_pretty(&plan).context("serialize frame plan")?;
    println!("{json}");
    Ok(ExitCode::SUCCESS)
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<ExitCode> {
    let overlay = read_overlay_json(&args.in_path)?;
    let settings = resolve_settings(&args.render)?;

    let end = args.end.unwrap_or(overlay.duration_in_frames);
    let range =
        captionfx::FrameRange::new(captionfx::FrameIndex(args.start), captionfx::FrameIndex(end))?;
    let threading = captionfx::RenderThreading {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
    };

    let (frames, stats) =
        captionfx::render_frames_with_stats(&overlay, range, &settings, &threading)?;

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for frame in &frames {
        serde_json::to_writer(&mut out, frame).context("serialize frame plan")?;
        out.write_all(b"\n").context("write stdout")?;
    }
    out.flush().context("flush stdout")?;

    eprintln!(
        "rendered {} frames ({} with a caption, {} empty)",
        stats.frames_total, stats.frames_with_caption, stats.frames_empty
    );
    Ok(ExitCode::SUCCESS)
}

fn cmd_templates(args: TemplatesArgs) -> anyhow::Result<ExitCode> {
    for t in captionfx::all_templates() {
        if args.pro_only && !t.is_pro {
            continue;
        }
        let tier = if t.is_pro { "pro" } else { "free" };
        println!("{:<14} {:<16} {:<5} {}", t.key, t.name, tier, t.preview);
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<ExitCode> {
    let overlay = read_overlay_json(&args.in_path)?;
    let settings = read_settings(args.settings.as_deref())?;

    let diagnostics = captionfx::diagnose(&overlay, &settings);
    if diagnostics.is_empty() {
        eprintln!("ok: no issues found");
        return Ok(ExitCode::SUCCESS);
    }

    for d in &diagnostics {
        println!("{d}");
    }
    eprintln!("{} issue(s) found", diagnostics.len());
    Ok(ExitCode::FAILURE)
}
