use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use il_core::Image;
use il_edge::threshold_binary_u8;
use il_hough::{Circle, HoughConfig, circle_points};
use il_morph::fill_holes_u8;
use il_pupil::{PupilConfig, PupilLocation, PupilLocator};
use il_resize::shrink_to_max_u8;
use image::{GrayImage, Rgb, RgbImage};
use log::info;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "il_gallery")]
#[command(about = "Run iris-locate stages on eye images and dump the results")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Locate the pupil and draw both circles over the input
    #[command(name = "pupil")]
    Pupil(PupilArgs),
    /// Dump every intermediate image of the edge stage
    #[command(name = "stages")]
    Stages(StagesArgs),
    /// Fill enclosed bright blobs of a binarized input
    #[command(name = "fill-holes")]
    FillHoles(FillHolesArgs),
}

#[derive(Args, Debug, Clone)]
struct CommonArgs {
    #[arg(long, required = true)]
    input: PathBuf,
    #[arg(long, default_value = "out/gallery")]
    out: PathBuf,
}

#[derive(Args, Debug, Clone)]
struct PupilArgs {
    #[command(flatten)]
    common: CommonArgs,
    #[arg(long, default_value_t = 25)]
    dark_threshold: u8,
    #[arg(long, default_value_t = 60)]
    coarse_cap: usize,
    #[arg(long, default_value_t = 5)]
    min_radius: usize,
    #[arg(long, default_value_t = 14)]
    max_radius: usize,
}

#[derive(Args, Debug, Clone)]
struct StagesArgs {
    #[command(flatten)]
    common: CommonArgs,
    #[arg(long, default_value_t = 25)]
    dark_threshold: u8,
    #[arg(long, default_value_t = 60)]
    coarse_cap: usize,
}

#[derive(Args, Debug, Clone)]
struct FillHolesArgs {
    #[command(flatten)]
    common: CommonArgs,
    /// Input pixels above this value are foreground
    #[arg(long, default_value_t = 127)]
    threshold: u8,
}

#[derive(Debug, Clone, Serialize)]
struct CircleDto {
    x: i32,
    y: i32,
    r: i32,
}

impl From<Circle> for CircleDto {
    fn from(c: Circle) -> Self {
        Self {
            x: c.x,
            y: c.y,
            r: c.r,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct PupilResult {
    width: usize,
    height: usize,
    found: bool,
    approximate: CircleDto,
    refined: CircleDto,
    coarse_votes: u32,
    refined_votes: u32,
    scale: f64,
    elapsed_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
struct MetaStages {
    width: usize,
    height: usize,
    dark_threshold: u8,
    open_kernel: &'static str,
    coarse_size: [usize; 2],
    coarse_mult: f64,
    stages: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
struct MetaFillHoles {
    threshold: u8,
    connectivity: &'static str,
    filled_pixels: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.cmd {
        Command::Pupil(args) => run_pupil(args),
        Command::Stages(args) => run_stages(args),
        Command::FillHoles(args) => run_fill_holes(args),
    }
}

fn run_pupil(args: PupilArgs) -> Result<()> {
    ensure_coarse_cap(args.coarse_cap)?;
    if args.min_radius == 0 || args.min_radius > args.max_radius {
        bail!(
            "invalid radius range {}..={}: need 0 < min <= max.",
            args.min_radius,
            args.max_radius
        );
    }
    let case_dir = prepare_case(&args.common, "pupil")?;
    let img = load_input_u8(&args.common.input)?;

    let locator = PupilLocator::new(PupilConfig {
        dark_threshold: args.dark_threshold,
        hough: HoughConfig {
            radii: args.min_radius..=args.max_radius,
            max_coarse_dim: args.coarse_cap,
        },
        ..PupilConfig::default()
    });

    let t0 = Instant::now();
    let loc = locator
        .locate(&img.as_view())
        .with_context(|| format!("locating pupil in {}", args.common.input.display()))?;
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1e3;
    info!(
        "approximate={} refined={} ({elapsed_ms:.2} ms)",
        loc.approximate, loc.refined
    );

    save_rgb_image(case_dir.join("overlay.png"), &render_pupil_overlay(&img, &loc)?)?;
    write_json(
        case_dir.join("result.json"),
        &PupilResult {
            width: img.width(),
            height: img.height(),
            found: loc.is_found(),
            approximate: loc.approximate.into(),
            refined: loc.refined.into(),
            coarse_votes: loc.coarse_votes,
            refined_votes: loc.refined_votes,
            scale: loc.scale,
            elapsed_ms,
        },
    )?;

    Ok(())
}

fn run_stages(args: StagesArgs) -> Result<()> {
    ensure_coarse_cap(args.coarse_cap)?;
    let case_dir = prepare_case(&args.common, "stages")?;
    let img = load_input_u8(&args.common.input)?;

    let locator = PupilLocator::new(PupilConfig {
        dark_threshold: args.dark_threshold,
        hough: HoughConfig {
            max_coarse_dim: args.coarse_cap,
            ..HoughConfig::default()
        },
        ..PupilConfig::default()
    });
    let maps = locator
        .edge_maps(&img.as_view())
        .with_context(|| format!("computing edge maps for {}", args.common.input.display()))?;

    let mut names = Vec::new();
    for (name, stage) in maps.stages() {
        save_u8_image(case_dir.join(format!("{name}.png")), stage)?;
        names.push(name);
    }

    let coarse = shrink_to_max_u8(&maps.fused.as_view(), args.coarse_cap);
    save_u8_image(case_dir.join("coarse.png"), &coarse.image)?;
    names.push("coarse");

    write_json(
        case_dir.join("meta.json"),
        &MetaStages {
            width: img.width(),
            height: img.height(),
            dark_threshold: args.dark_threshold,
            open_kernel: "ellipse 7x7",
            coarse_size: [coarse.image.width(), coarse.image.height()],
            coarse_mult: coarse.mult,
            stages: names,
        },
    )?;

    Ok(())
}

fn run_fill_holes(args: FillHolesArgs) -> Result<()> {
    let case_dir = prepare_case(&args.common, "fill_holes")?;
    let img = load_input_u8(&args.common.input)?;

    let binary = threshold_binary_u8(&img.as_view(), args.threshold, 255);
    let filled = fill_holes_u8(&binary.as_view());
    let filled_pixels = binary
        .data()
        .iter()
        .zip(filled.data())
        .filter(|(a, b)| a != b)
        .count();

    save_u8_image(case_dir.join("binary.png"), &binary)?;
    save_u8_image(case_dir.join("filled.png"), &filled)?;
    write_json(
        case_dir.join("meta.json"),
        &MetaFillHoles {
            threshold: args.threshold,
            connectivity: "4-connected flood from the border",
            filled_pixels,
        },
    )?;

    Ok(())
}

fn prepare_case(common: &CommonArgs, case_name: &str) -> Result<PathBuf> {
    ensure_file_exists(&common.input, "input")?;

    let case_dir = common.out.join(case_name);
    fs::create_dir_all(&case_dir)
        .with_context(|| format!("creating output directory {}", case_dir.display()))?;

    Ok(case_dir)
}

fn load_input_u8(path: &Path) -> Result<Image<u8>> {
    let dyn_img =
        image::open(path).with_context(|| format!("opening input image {}", path.display()))?;
    let luma = dyn_img.to_luma8();
    let (w, h) = luma.dimensions();
    let data = luma.into_raw();

    Image::from_vec(w as usize, h as usize, data)
        .with_context(|| format!("constructing image from {}", path.display()))
}

fn save_u8_image(path: PathBuf, img: &Image<u8>) -> Result<()> {
    let gray = GrayImage::from_raw(img.width() as u32, img.height() as u32, img.data().to_vec())
        .context("constructing GrayImage from raw bytes")?;
    gray.save(&path)
        .with_context(|| format!("saving image {}", path.display()))
}

fn save_rgb_image(path: PathBuf, img: &RgbImage) -> Result<()> {
    img.save(&path)
        .with_context(|| format!("saving image {}", path.display()))
}

fn write_json(path: PathBuf, value: &impl Serialize) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value).context("serializing json")?;
    fs::write(&path, bytes).with_context(|| format!("writing json {}", path.display()))
}

fn render_pupil_overlay(input: &Image<u8>, loc: &PupilLocation) -> Result<RgbImage> {
    let gray = GrayImage::from_raw(
        input.width() as u32,
        input.height() as u32,
        input.data().to_vec(),
    )
    .context("constructing GrayImage from raw bytes")?;
    let mut rgb = image::DynamicImage::ImageLuma8(gray).to_rgb8();

    if loc.is_found() {
        draw_circle(&mut rgb, loc.approximate, Rgb([255, 0, 0]));
        draw_circle(&mut rgb, loc.refined, Rgb([0, 255, 0]));
    }

    Ok(rgb)
}

/// Two concentric one-pixel rings, `r` and `r + 1`.
fn draw_circle(img: &mut RgbImage, c: Circle, color: Rgb<u8>) {
    if c.r <= 0 {
        return;
    }
    for r in [c.r, c.r + 1] {
        draw_ring(img, c.x, c.y, r as usize, color);
    }
}

fn draw_ring(img: &mut RgbImage, cx: i32, cy: i32, r: usize, color: Rgb<u8>) {
    for p in circle_points(r) {
        let nx = cx + p.dx;
        let ny = cy + p.dy;
        if nx < 0 || ny < 0 {
            continue;
        }
        let (ux, uy) = (nx as u32, ny as u32);
        if ux >= img.width() || uy >= img.height() {
            continue;
        }
        img.put_pixel(ux, uy, color);
    }
}

fn ensure_coarse_cap(cap: usize) -> Result<()> {
    if cap == 0 {
        bail!("--coarse-cap must be > 0.");
    }
    Ok(())
}

fn ensure_file_exists(path: &Path, what: &str) -> Result<()> {
    if !path.exists() {
        bail!("{} file does not exist: {}", what, path.display());
    }
    if !path.is_file() {
        bail!("{} path is not a file: {}", what, path.display());
    }
    Ok(())
}
