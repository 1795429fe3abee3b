use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use polyinset::geom2::rand::{draw_points_uniform, PointCloudCfg, ReplayToken, VertexCount};
use polyinset::{compute_frame, BuildingCfg, GeomCfg, InsetStrategy, Point2};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod frame_doc;
mod input;
mod provenance;
mod svg;

use frame_doc::FrameDoc;
use provenance::Payload;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Sort point sets into polygons and compute their insets")]
struct Cmd {
    /// Optional run label; propagated to outputs and logs
    #[arg(long, global = true)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum StrategyKind {
    /// Scale toward the centroid; amount is the factor in [0, 1]
    Scale,
    /// Erode by a distance; amount is the distance
    Buffer,
}

impl StrategyKind {
    fn with_amount(self, amount: f64) -> InsetStrategy {
        match self {
            Self::Scale => InsetStrategy::Scale(amount),
            Self::Buffer => InsetStrategy::Buffer(amount),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Scale => "scale",
            Self::Buffer => "buffer",
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Compute one frame and write it as JSON plus a provenance sidecar
    Run(RunArgs),
    /// Render a frame JSON as SVG
    Figure {
        #[arg(long)]
        from: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(clap::Args)]
struct RunArgs {
    /// Points file: .csv with x,y columns or .json as [[x, y], ...]
    #[arg(long, conflicts_with = "random")]
    input: Option<PathBuf>,
    /// Draw this many points uniformly in [-1, 1]² instead of reading a file
    #[arg(long)]
    random: Option<usize>,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, value_enum, default_value_t = StrategyKind::Buffer)]
    strategy: StrategyKind,
    /// Scale factor or buffer distance
    #[arg(long, default_value_t = 0.1)]
    amount: f64,
    #[arg(long, default_value_t = 1.0)]
    floor_height: f64,
    #[arg(long, default_value_t = 1)]
    floor_count: u32,
    /// Roof rise above the top floor
    #[arg(long, default_value_t = 0.5)]
    roof_height: f64,
    #[arg(long)]
    out: PathBuf,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run(args) => run(&args, cmd.tag).map(|_| ()),
        Action::Figure { from, out } => figure(&from, &out, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn load_points(args: &RunArgs) -> Result<Vec<Point2>> {
    match (&args.input, args.random) {
        (Some(path), _) => input::read_points(path),
        (None, Some(n)) => {
            let cfg = PointCloudCfg {
                vertex_count: VertexCount::Fixed(n),
                ..PointCloudCfg::default()
            };
            Ok(draw_points_uniform(cfg, ReplayToken { seed: args.seed, index: 0 }))
        }
        (None, None) => bail!("run needs --input <file> or --random <n>"),
    }
}

fn run(args: &RunArgs, tag: Option<String>) -> Result<FrameDoc> {
    let strategy = args.strategy.with_amount(args.amount);
    strategy.validate()?;
    let building = BuildingCfg {
        floor_height: args.floor_height,
        floor_count: args.floor_count,
        roof_height: args.roof_height,
    };
    building.validate()?;
    let points = load_points(args)?;
    tracing::info!(
        points = points.len(),
        strategy = args.strategy.name(),
        amount = args.amount,
        tag = ?tag,
        "run"
    );

    let frame = compute_frame(&points, strategy, &GeomCfg::default());
    if frame.inset_is_empty() {
        tracing::warn!("inset produced no rings");
    }
    let doc = FrameDoc::new(args.strategy.name(), args.amount, &frame, &building);

    create_parent(&args.out)?;
    fs::write(&args.out, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", args.out.display()))?;
    let params = json!({
        "input": args.input.as_ref().map(|p| p.to_string_lossy().into_owned()),
        "random": args.random,
        "seed": args.seed,
        "strategy": args.strategy.name(),
        "amount": args.amount,
        "points": points.len(),
        "rings": frame.inset_rings.len(),
        "floor_height": building.floor_height,
        "floor_count": building.floor_count,
        "roof_height": building.roof_height,
    });
    provenance::write_sidecar(&args.out, Payload::new(tag, params))?;
    Ok(doc)
}

fn figure(from: &Path, out: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(from = %from.display(), out = %out.display(), "figure");
    let bytes = fs::read(from).with_context(|| format!("reading {}", from.display()))?;
    let doc: FrameDoc = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing frame {}", from.display()))?;
    create_parent(out)?;
    fs::write(out, svg::render(&doc)).with_context(|| format!("writing {}", out.display()))?;
    let params = json!({ "from": from.to_string_lossy() });
    provenance::write_sidecar(out, Payload::new(tag, params))?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = provenance::block(&Payload::new(tag, json!({})), &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}
