//! Example: pupil localization over a batch of eye images.
//!
//! Each input is loaded as 8-bit grayscale and passed through
//! `PupilLocator`. Per-image and total timing is printed to stdout and all
//! results are written to one JSON file.
//!
//! Run from the workspace root:
//!   cargo run -p iris-locate --example locate_batch -- --help
//!   cargo run -p iris-locate --example locate_batch -- eye_0.png eye_1.png

use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use image::ImageReader;
use iris_locate::{Circle, HoughConfig, Image, PupilConfig, PupilLocator};
use log::warn;
use serde::Serialize;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(about = "Locate the pupil in a batch of grayscale eye images")]
struct Args {
    /// Input images (any format the `image` crate can decode)
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Normalized intensity at or below which pixels are pupil candidates
    #[arg(long, default_value_t = 25)]
    dark_threshold: u8,

    /// Cap on the smaller side of the coarse search image
    #[arg(long, default_value_t = 60)]
    coarse_cap: usize,

    /// Output JSON path
    #[arg(long, default_value = "pupils.json")]
    out: String,
}

// ── JSON DTOs ─────────────────────────────────────────────────────────────────

#[derive(Serialize)]
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

#[derive(Serialize)]
struct ImageResult {
    input: String,
    width: usize,
    height: usize,
    /// Wall-clock time for this image's localization, in milliseconds.
    elapsed_ms: f64,
    found: bool,
    approximate: CircleDto,
    refined: CircleDto,
    coarse_votes: u32,
    refined_votes: u32,
    scale: f64,
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_gray(path: &str) -> Result<Image<u8>> {
    let gray = ImageReader::open(path)
        .with_context(|| format!("opening {path}"))?
        .decode()
        .with_context(|| format!("decoding {path}"))?
        .into_luma8();
    let (w, h) = (gray.width() as usize, gray.height() as usize);
    Image::from_vec(w, h, gray.into_raw()).with_context(|| format!("building image for {path}"))
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.coarse_cap == 0 {
        bail!("--coarse-cap must be > 0");
    }

    let locator = PupilLocator::new(PupilConfig {
        dark_threshold: args.dark_threshold,
        hough: HoughConfig {
            max_coarse_dim: args.coarse_cap,
            ..HoughConfig::default()
        },
        ..PupilConfig::default()
    });
    println!(
        "config: dark_threshold={}, coarse_cap={}",
        args.dark_threshold, args.coarse_cap
    );

    let mut results = Vec::with_capacity(args.inputs.len());
    let total_start = Instant::now();

    for input in &args.inputs {
        let img = load_gray(input)?;

        let t0 = Instant::now();
        let loc = locator
            .locate(&img.as_view())
            .with_context(|| format!("locating pupil in {input}"))?;
        let elapsed_ms = t0.elapsed().as_secs_f64() * 1e3;

        if loc.is_found() {
            println!(
                "  {input}: {}x{} refined={} votes={}  ({elapsed_ms:.2} ms)",
                img.width(),
                img.height(),
                loc.refined,
                loc.refined_votes
            );
        } else {
            warn!("{input}: no circle supported by the fused edge map");
        }

        results.push(ImageResult {
            input: input.clone(),
            width: img.width(),
            height: img.height(),
            elapsed_ms,
            found: loc.is_found(),
            approximate: loc.approximate.into(),
            refined: loc.refined.into(),
            coarse_votes: loc.coarse_votes,
            refined_votes: loc.refined_votes,
            scale: loc.scale,
        });
    }

    let total_ms = total_start.elapsed().as_secs_f64() * 1e3;
    println!("total localization time: {total_ms:.2} ms");

    let out_file =
        std::fs::File::create(&args.out).with_context(|| format!("creating {}", args.out))?;
    serde_json::to_writer_pretty(out_file, &results)
        .with_context(|| format!("writing JSON to {}", args.out))?;

    println!("results written to {}", args.out);
    Ok(())
}
