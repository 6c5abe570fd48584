use std::path::{Path, PathBuf};

use anyhow::Context as _;
use canvas_cleave::{CanvasImageSource, Image, RawImage, VerticalAlign};
use clap::{Parser, Subcommand, ValueEnum};
use rayon::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "cleave", version)]
struct Cli {
    /// Log debug output to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print decoded image metadata as JSON.
    Info(InfoArgs),
    /// Place images side by side, left to right.
    Tile(TileArgs),
    /// Draw one image over another.
    Overlay(OverlayArgs),
    /// Extract a rectangular region as RGBA.
    Crop(CropArgs),
}

#[derive(Parser, Debug)]
struct InfoArgs {
    /// Input image.
    input: PathBuf,
}

#[derive(Parser, Debug)]
struct TileArgs {
    /// Input images, in left-to-right order.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output image path; format follows the extension.
    #[arg(long)]
    out: PathBuf,

    /// Vertical alignment of shorter images.
    #[arg(long, value_enum, default_value_t = AlignChoice::Middle)]
    align: AlignChoice,

    /// Gap between images in pixels.
    #[arg(long, default_value_t = 0)]
    gap: u32,
}

#[derive(Parser, Debug)]
struct OverlayArgs {
    /// Background image; sets the output size.
    #[arg(long)]
    background: PathBuf,

    /// Image drawn on top.
    #[arg(long)]
    overlay: PathBuf,

    /// Overlay x offset (centered when omitted).
    #[arg(long, requires = "y", allow_negative_numbers = true)]
    x: Option<i64>,

    /// Overlay y offset (centered when omitted).
    #[arg(long, requires = "x", allow_negative_numbers = true)]
    y: Option<i64>,

    /// Output image path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct CropArgs {
    /// Input image.
    #[arg(long = "in")]
    in_path: PathBuf,

    #[arg(long, allow_negative_numbers = true)]
    x: i64,

    #[arg(long, allow_negative_numbers = true)]
    y: i64,

    /// Region width; negative extends left.
    #[arg(long, allow_negative_numbers = true)]
    width: i64,

    /// Region height; negative extends up.
    #[arg(long, allow_negative_numbers = true)]
    height: i64,

    /// Output image path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AlignChoice {
    Top,
    Middle,
    Bottom,
}

impl From<AlignChoice> for VerticalAlign {
    fn from(value: AlignChoice) -> Self {
        match value {
            AlignChoice::Top => VerticalAlign::Top,
            AlignChoice::Middle => VerticalAlign::Middle,
            AlignChoice::Bottom => VerticalAlign::Bottom,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Info(args) => cmd_info(args),
        Command::Tile(args) => cmd_tile(args),
        Command::Overlay(args) => cmd_overlay(args),
        Command::Crop(args) => cmd_crop(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_image(path: &Path) -> anyhow::Result<Image> {
    let raw = canvas_cleave::load_raw_image(path)
        .with_context(|| format!("load image '{}'", path.display()))?;
    Ok(Image::from_input(raw)?)
}

fn save(path: &Path, raw: &RawImage) -> anyhow::Result<()> {
    canvas_cleave::save_raw_image(path, raw)
        .with_context(|| format!("save image '{}'", path.display()))?;
    tracing::info!(path = %path.display(), "wrote image");
    Ok(())
}

fn cmd_info(args: InfoArgs) -> anyhow::Result<()> {
    let raw = canvas_cleave::load_raw_image(&args.input)
        .with_context(|| format!("load image '{}'", args.input.display()))?;
    println!("{}", serde_json::to_string_pretty(&raw.info)?);
    Ok(())
}

fn cmd_tile(args: TileArgs) -> anyhow::Result<()> {
    let images = args
        .inputs
        .par_iter()
        .map(|path| load_image(path))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let sources: Vec<CanvasImageSource<'_>> = images.iter().map(Into::into).collect();

    let canvas = canvas_cleave::tile_right(&sources, args.align.into(), args.gap)?;
    save(&args.out, &canvas.to_raw_image())
}

fn cmd_overlay(args: OverlayArgs) -> anyhow::Result<()> {
    let (background, overlay) = rayon::join(
        || load_image(&args.background),
        || load_image(&args.overlay),
    );
    let (background, overlay) = (background?, overlay?);
    let offset = args.x.zip(args.y);

    let canvas = canvas_cleave::overlay((&overlay).into(), Some((&background).into()), offset)?;
    save(&args.out, &canvas.to_raw_image())
}

fn cmd_crop(args: CropArgs) -> anyhow::Result<()> {
    let image = load_image(&args.in_path)?;
    let data = image
        .image_bitmap()
        .get_image_data(args.x, args.y, args.width, args.height)?;
    save(&args.out, &data.to_raw_image())
}
