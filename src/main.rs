use anyhow::{Context, Result, bail};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

mod config;
mod domain;
mod formats;
mod geometry;
mod render;
mod style;

use config::FileConfig;
use formats::{parse_election_results, parse_geography};
use render::{PngSurface, build_draw_plan, render_map, unmatched_regions};
use style::Style;

/// Render choropleth election maps from a polygon geography file and a CSV
/// results file
///
/// Examples:
///   # Red/blue map of a presidential election
///   votemap -g usa.txt -e usa-2020.csv -s red-blue -o usa-2020.png
///
///   # Purple (vote-share) map at a wider raster
///   votemap -g usa.txt -e usa-2020.csv -s purple --width 1600
///
///   # Plain region outlines, no vote data needed in the output
///   votemap -g counties.txt -e results.csv -s black-white
///
///   # Prompt interactively for anything not given
///   votemap
#[derive(Parser, Debug)]
#[command(name = "votemap")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches votemap.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Geography file holding the bounding box and region polygons
    #[arg(short = 'g', long)]
    geography: Option<PathBuf>,

    /// Election results CSV (header line, then name,rep,dem,other rows)
    #[arg(short = 'e', long)]
    election: Option<PathBuf>,

    /// Coloring style (prompted for interactively when not given)
    #[arg(short = 's', long, value_enum)]
    style: Option<Style>,

    /// Output PNG path (defaults to {geography stem}-{style}.png)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Raster width in pixels (height follows the bounding box aspect)
    #[arg(long, default_value = "1024")]
    width: u32,

    /// Enable verbose output
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    let file_config = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {:?}", config_path))?;
            Some(toml::from_str(&contents).context("Failed to parse config file")?)
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load()
    };

    let geography = args
        .geography
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.geography.clone()));
    let election = args
        .election
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.election.clone()));
    let style = args
        .style
        .or_else(|| file_config.as_ref().and_then(|c| c.style));
    let output = args
        .output
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.output.clone()));
    let width = if args.width != 1024 {
        args.width
    } else {
        file_config.as_ref().map(|c| c.width).unwrap_or(1024)
    };
    let verbose = args.verbose || file_config.as_ref().map(|c| c.verbose).unwrap_or(false);

    println!("votemap - Election Map Renderer");
    println!("===============================");
    println!();

    // Anything still missing after args and config is prompted for, keeping
    // the re-prompt loop here at the CLI boundary
    let geography = match geography {
        Some(path) => path,
        None => prompt_path("Enter the name of the geography file: ")?,
    };
    let election = match election {
        Some(path) => path,
        None => prompt_path("Enter the name of the election data file: ")?,
    };
    let style = match style {
        Some(style) => style,
        None => prompt_style()?,
    };

    let output_path = output.unwrap_or_else(|| default_output_path(&geography, style));

    if verbose {
        println!("Configuration:");
        println!("  Geography: {}", geography.display());
        println!("  Election results: {}", election.display());
        println!("  Style: {:?}", style);
        println!("  Raster width: {}px", width);
        println!("  Output: {}", output_path.display());
        println!();
    }

    let spinner = create_spinner("Parsing geography...");
    let start = Instant::now();
    let file = File::open(&geography)
        .with_context(|| format!("Failed to open geography file: {}", geography.display()))?;
    let (bounds, regions) = parse_geography(BufReader::new(file))
        .with_context(|| format!("Malformed geography file: {}", geography.display()))?;
    spinner.finish_with_message(format!(
        "Parsed {} regions [{:.1}s]",
        regions.len(),
        start.elapsed().as_secs_f32()
    ));

    let spinner = create_spinner("Loading election results...");
    let start = Instant::now();
    let file = File::open(&election)
        .with_context(|| format!("Failed to open election results file: {}", election.display()))?;
    let results = parse_election_results(BufReader::new(file))
        .with_context(|| format!("Malformed election results file: {}", election.display()))?;
    spinner.finish_with_message(format!(
        "Loaded vote counts for {} regions [{:.1}s]",
        results.len(),
        start.elapsed().as_secs_f32()
    ));

    let missing = unmatched_regions(&regions, &results);
    if !missing.is_empty() {
        println!(
            "Note: {} region(s) have no matching results row and render with zero votes",
            missing.len()
        );
        if verbose {
            // Name matching is whitespace-sensitive; listing the misses makes
            // a stray-space mismatch visible instead of silently gray
            for name in &missing {
                println!("  {:?}", name);
            }
        }
    }

    let plan = build_draw_plan(regions, &results, style);

    let spinner = create_spinner("Rendering map...");
    let start = Instant::now();
    let surface = PngSurface::create(&output_path, &bounds, width)
        .with_context(|| format!("Failed to create output image: {}", output_path.display()))?;
    render_map(surface, &plan).context("Failed to render map")?;
    spinner.finish_with_message(format!(
        "Rendered {} regions at {}x{} [{:.1}s]",
        plan.len(),
        width,
        bounds.scaled_height(width),
        start.elapsed().as_secs_f32()
    ));

    println!();
    println!(
        "Done! Total time: {:.1}s",
        total_start.elapsed().as_secs_f32()
    );
    println!();
    println!("Output: {}", output_path.display());

    Ok(())
}

/// Read a file path from stdin
fn prompt_path(prompt: &str) -> Result<PathBuf> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .context("Failed to read from stdin")?;
    if bytes == 0 {
        bail!("No input provided");
    }
    Ok(PathBuf::from(input.trim()))
}

/// Numbered style menu, re-prompting until the selection is valid
fn prompt_style() -> Result<Style> {
    loop {
        println!("What style of map would you like?");
        println!("Enter 1 for black & white.");
        println!("Enter 2 for red & blue.");
        println!("Enter 3 for purple.");
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        let bytes = io::stdin()
            .read_line(&mut input)
            .context("Failed to read from stdin")?;
        if bytes == 0 {
            bail!("No style selected");
        }

        match input.trim() {
            "1" => return Ok(Style::BlackWhite),
            "2" => return Ok(Style::RedBlue),
            "3" => return Ok(Style::Purple),
            _ => println!("Invalid selection!"),
        }
    }
}

fn default_output_path(geography: &Path, style: Style) -> PathBuf {
    let stem = geography
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("map");
    let suffix = match style {
        Style::BlackWhite => "black-white",
        Style::RedBlue => "red-blue",
        Style::Purple => "purple",
    };
    PathBuf::from(format!("{}-{}.png", stem, suffix))
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
