use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "cohortviz", version)]
struct Cli {
    /// Chart configuration JSON. Defaults apply to every missing field.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the year range and rows per year, or the rows of one year.
    Inspect(InspectArgs),
    /// Render one year as an SVG or PNG (chosen by the output extension).
    Frame(FrameArgs),
    /// Play the timeline from the first year to the end, writing one file per rendered year.
    Play(PlayArgs),
    /// Render the animated timeline to an MP4 (requires `ffmpeg` on PATH).
    Render(RenderArgs),
    /// Interactive timeline driven by stdin commands (`play`, `pause`, `toggle`, `year N`, `quit`).
    Live(LiveArgs),
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Input CSV.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Only list the rows of this year.
    #[arg(long)]
    year: Option<i32>,

    /// Print JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input CSV.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Year to render (clamped to the data range).
    #[arg(long)]
    year: i64,

    /// Output path ending in `.svg` or `.png`.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    /// Input CSV.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Directory receiving `<year>.svg` / `<year>.png`.
    #[arg(long)]
    out_dir: PathBuf,

    #[arg(long, value_enum, default_value_t = FrameFormat::Svg)]
    format: FrameFormat,

    /// Pace the timer against the wall clock instead of running ticks back to back.
    #[arg(long)]
    realtime: bool,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input CSV.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output MP4 path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct LiveArgs {
    /// Input CSV.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// SVG file replaced with the current year on every render.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FrameFormat {
    Svg,
    Png,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let cfg = match &cli.config {
        Some(path) => cohortviz::ChartConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => cohortviz::ChartConfig::default(),
    };

    match cli.cmd {
        Command::Inspect(args) => cmd_inspect(args, cfg),
        Command::Frame(args) => cmd_frame(args, cfg),
        Command::Play(args) => cmd_play(args, cfg),
        Command::Render(args) => cmd_render(args, cfg),
        Command::Live(args) => cmd_live(args, cfg),
    }
}

fn open_session(path: &Path, cfg: cohortviz::ChartConfig) -> anyhow::Result<cohortviz::ChartSession> {
    cohortviz::ChartSession::open(path, cfg)
        .with_context(|| format!("open data '{}'", path.display()))
}

fn cmd_inspect(args: InspectArgs, cfg: cohortviz::ChartConfig) -> anyhow::Result<()> {
    let session = open_session(&args.in_path, cfg)?;
    let view = session.view();

    match args.year {
        Some(year) => {
            let rows = view.rows_for_year(year);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for r in rows {
                    println!("{}", r.detail_text().replace('\n', "  "));
                }
            }
        }
        None => {
            let range = session.range();
            let counts = view.year_counts();
            if args.json {
                let summary = serde_json::json!({
                    "rows": view.len(),
                    "range": range,
                    "rows_per_year": counts,
                });
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("rows:  {}", view.len());
                println!("years: {}..={}", range.min, range.max);
                for (year, n) in counts {
                    println!("  {year}: {n}");
                }
            }
        }
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs, cfg: cohortviz::ChartConfig) -> anyhow::Result<()> {
    let session = open_session(&args.in_path, cfg)?;
    let year = session.range().clamp(args.year);
    let svg = session.svg(year);

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    if is_png(&args.out) {
        let frame = cohortviz::Rasterizer::new().rasterize(&svg)?;
        cohortviz::render::save_png(&frame, &args.out)?;
    } else {
        std::fs::write(&args.out, svg)
            .with_context(|| format!("write svg '{}'", args.out.display()))?;
    }

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_play(args: PlayArgs, cfg: cohortviz::ChartConfig) -> anyhow::Result<()> {
    let session = open_session(&args.in_path, cfg)?;

    match (args.format, args.realtime) {
        (FrameFormat::Svg, false) => {
            let surface = cohortviz::SvgFileSurface::per_year(
                session.view().clone(),
                session.config().clone(),
                &args.out_dir,
            );
            let surface = session.play_through(surface)?;
            eprintln!("rendered {} frames into {}", surface.written().len(), args.out_dir.display());
        }
        (FrameFormat::Svg, true) => {
            let surface = cohortviz::SvgFileSurface::per_year(
                session.view().clone(),
                session.config().clone(),
                &args.out_dir,
            );
            let mut controller = session.controller(surface);
            controller.set_year(i64::from(session.range().min))?;
            let ticks = cohortviz::play_realtime(&mut controller)?;
            eprintln!("played {ticks} ticks into {}", args.out_dir.display());
        }
        (FrameFormat::Png, realtime) => {
            if realtime {
                tracing::warn!("--realtime is ignored for png output");
            }
            let frames = session.record_playback()?;
            let written =
                session.export_png_frames(&frames, &args.out_dir, &cohortviz::Rasterizer::new())?;
            eprintln!("wrote {written} png frames into {}", args.out_dir.display());
        }
    }
    Ok(())
}

fn cmd_render(args: RenderArgs, cfg: cohortviz::ChartConfig) -> anyhow::Result<()> {
    let session = open_session(&args.in_path, cfg)?;

    let mut opts = cohortviz::FfmpegSinkOpts::new(&args.out);
    let bg = session.config().background;
    opts.bg_rgb = [bg.r, bg.g, bg.b];

    session.render_video(cohortviz::Rasterizer::new(), cohortviz::FfmpegSink::new(opts))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_live(args: LiveArgs, cfg: cohortviz::ChartConfig) -> anyhow::Result<()> {
    let session = open_session(&args.in_path, cfg)?;
    let surface = cohortviz::SvgFileSurface::latest(
        session.view().clone(),
        session.config().clone(),
        &args.out,
    );
    let mut controller = session.controller(surface);
    controller.set_year(i64::from(session.range().min))?;

    let range = session.range();
    eprintln!(
        "years {}..={}; commands: play, pause, toggle, year N, quit",
        range.min, range.max
    );
    let stdin = std::io::BufReader::new(std::io::stdin());
    cohortviz::run_live(&mut controller, stdin)?;
    Ok(())
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"))
}
