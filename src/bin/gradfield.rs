use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "gradfield", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Shade a single query position and print the color.
    Sample(SampleArgs),
    /// Shade a planar grid through the samples' bounding box into a PNG.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Input material config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Query position as `x,y,z`.
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
    at: gradfield::Vec3,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input material config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Image width in pixels.
    #[arg(long, default_value_t = 512)]
    width: u32,

    /// Image height in pixels.
    #[arg(long, default_value_t = 512)]
    height: u32,

    /// Plane the grid is laid out in.
    #[arg(long, value_enum, default_value_t = PlaneChoice::Xy)]
    plane: PlaneChoice,

    /// Padding around the sample bounds, as a fraction of their extent.
    #[arg(long, default_value_t = 0.1)]
    margin: f64,

    /// Enable data-parallel shading.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Points per work item (parallel mode only).
    #[arg(long, default_value_t = 4096)]
    chunk_size: usize,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PlaneChoice {
    Xy,
    Xz,
    Yz,
}

impl From<PlaneChoice> for gradfield::Plane {
    fn from(p: PlaneChoice) -> Self {
        match p {
            PlaneChoice::Xy => Self::Xy,
            PlaneChoice::Xz => Self::Xz,
            PlaneChoice::Yz => Self::Yz,
        }
    }
}

fn parse_vec3(s: &str) -> Result<gradfield::Vec3, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid coordinate in '{s}': {e}"))?;
    match parts.as_slice() {
        [x, y, z] => Ok(gradfield::Vec3::new(*x, *y, *z)),
        _ => Err(format!("expected x,y,z but got '{s}'")),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Sample(args) => cmd_sample(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn load_material(path: &std::path::Path) -> anyhow::Result<gradfield::GradientMaterial> {
    let cfg = gradfield::MaterialConfig::from_path(path)
        .with_context(|| format!("load material config '{}'", path.display()))?;
    Ok(gradfield::GradientMaterial::new(&cfg)?)
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let material = load_material(&args.in_path)?;
    let c = material.evaluate(args.at)?;
    println!(
        "{} ({:.6}, {:.6}, {:.6})",
        c.to_hex_string(),
        c.r,
        c.g,
        c.b
    );
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let material = load_material(&args.in_path)?;
    let snapshot = material.snapshot()?;
    let grid = gradfield::PlaneGrid::fit(
        snapshot.samples().bounds(),
        args.plane.into(),
        args.width,
        args.height,
        args.margin,
    )?;
    let threading = gradfield::ShadeThreading {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
    };
    let frame = gradfield::render_grid(&snapshot, &grid, &threading)?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
