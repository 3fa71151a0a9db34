use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use smartzoom::{
    Ease, Fps, FrameLayout, MarkerMode, NaturalSize, Point, QueryEngine, QueryOpts, TimeRange,
    Track, Viewport, ZoomMode, densify, natural_to_frame, parse_tracking_json, parse_zoom_json,
};

#[derive(Parser, Debug)]
#[command(name = "smartzoom", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sample a keyframe file at one point in time and print the result as JSON.
    Sample(SampleArgs),
    /// Resample a sparse keyframe file into fixed-rate samples.
    Densify(DensifyArgs),
    /// Map a natural-space point into frame space.
    Map(MapArgs),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Kind {
    Tracking,
    Zoom,
}

#[derive(Parser, Debug)]
struct TrackArgs {
    /// Input keyframe JSON (array of keyframes).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Keyframe kind stored in the file.
    #[arg(long, value_enum, default_value_t = Kind::Zoom)]
    kind: Kind,

    /// Trim range start in seconds.
    #[arg(long, default_value_t = 0.0)]
    trim_start: f64,

    /// Trim range end in seconds.
    #[arg(long)]
    trim_end: f64,

    /// Fallback marker position as `X,Y` in natural pixels.
    #[arg(long, value_parser = parse_point, default_value = "0,0")]
    anchor: Point,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    #[command(flatten)]
    track: TrackArgs,

    /// Playback time in seconds.
    #[arg(long)]
    time: f64,

    /// Show the raw value of this key instead of interpolating.
    #[arg(long)]
    active: Option<usize>,

    /// Interpolate markers without easing.
    #[arg(long, default_value_t = false)]
    no_ease: bool,

    /// Intrinsic media size as `WxH`; with `--layout`, output is in frame space.
    #[arg(long, value_parser = parse_size)]
    natural: Option<(f64, f64)>,

    /// Output rectangle as `WxH`.
    #[arg(long, value_parser = parse_size)]
    layout: Option<(f64, f64)>,
}

#[derive(Parser, Debug)]
struct DensifyArgs {
    #[command(flatten)]
    track: TrackArgs,

    /// Sample rate in frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct MapArgs {
    /// Natural-space point as `X,Y`.
    #[arg(long, value_parser = parse_point)]
    point: Point,

    /// Intrinsic media size as `WxH`.
    #[arg(long, value_parser = parse_size)]
    natural: (f64, f64),

    /// Output rectangle as `WxH`.
    #[arg(long, value_parser = parse_size)]
    layout: (f64, f64),
}

enum Loaded {
    Tracking(Track<smartzoom::TrackingKeyframe>),
    Zoom(Track<smartzoom::ZoomKeyframe>),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Sample(args) => cmd_sample(args),
        Command::Densify(args) => cmd_densify(args),
        Command::Map(args) => cmd_map(args),
    }
}

fn load(args: &TrackArgs) -> anyhow::Result<Loaded> {
    let json = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("read keyframes '{}'", args.in_path.display()))?;
    let trim = TimeRange::new(args.trim_start, args.trim_end)?;
    let loaded = match args.kind {
        Kind::Tracking => {
            Loaded::Tracking(Track::sparse(parse_tracking_json(&json, trim, args.anchor)?))
        }
        Kind::Zoom => Loaded::Zoom(Track::sparse(parse_zoom_json(&json, trim)?)),
    };
    Ok(loaded)
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let engine = QueryEngine::new(QueryOpts {
        default_anchor: args.track.anchor,
    });
    let viewport = Viewport {
        natural: args.natural.map(|(w, h)| NaturalSize::new(w, h)),
        layout: args.layout.map(|(w, h)| FrameLayout::new(w, h)),
    };
    let in_frame = viewport.natural.is_some() || viewport.layout.is_some();

    let value = match load(&args.track)? {
        Loaded::Tracking(track) => {
            let mode = match args.active {
                Some(active) => MarkerMode::Editing { active },
                None if args.no_ease => MarkerMode::Interpolate(Ease::Linear),
                None => MarkerMode::Interpolate(Ease::InOutQuad),
            };
            if in_frame {
                let placed = engine.place_marker(&track, args.time, mode, viewport).visible();
                serde_json::to_value(placed)?
            } else {
                serde_json::to_value(engine.marker_at(&track, args.time, mode))?
            }
        }
        Loaded::Zoom(track) => {
            let mode = match args.active {
                Some(active) => ZoomMode::Editing { active },
                None => ZoomMode::Preview,
            };
            if in_frame {
                let placed = engine.place_zoom(&track, args.time, mode, viewport).visible();
                serde_json::to_value(placed)?
            } else {
                serde_json::to_value(engine.zoom_at(&track, args.time, mode))?
            }
        }
    };

    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn cmd_densify(args: DensifyArgs) -> anyhow::Result<()> {
    let fps = Fps::new(args.fps, 1)?;
    let json = match load(&args.track)? {
        Loaded::Tracking(track) => serde_json::to_string_pretty(&densify(track.keys(), fps))?,
        Loaded::Zoom(track) => serde_json::to_string_pretty(&densify(track.keys(), fps))?,
    };

    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&out, json).with_context(|| format!("write '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_map(args: MapArgs) -> anyhow::Result<()> {
    let natural = NaturalSize::new(args.natural.0, args.natural.1);
    let layout = FrameLayout::new(args.layout.0, args.layout.1);
    let p = natural_to_frame(args.point, natural, layout);
    println!("{}", serde_json::to_string(&p)?);
    Ok(())
}

fn parse_pair(s: &str, sep: char) -> Result<(f64, f64), String> {
    let (a, b) = s
        .split_once(sep)
        .ok_or_else(|| format!("expected two numbers separated by '{sep}', got '{s}'"))?;
    let a = a.trim().parse::<f64>().map_err(|e| format!("'{a}': {e}"))?;
    let b = b.trim().parse::<f64>().map_err(|e| format!("'{b}': {e}"))?;
    Ok((a, b))
}

fn parse_size(s: &str) -> Result<(f64, f64), String> {
    parse_pair(s, 'x')
}

fn parse_point(s: &str) -> Result<Point, String> {
    parse_pair(s, ',').map(|(x, y)| Point::new(x, y))
}
