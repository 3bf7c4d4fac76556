mod config;
mod render;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use epicycle_core::{InputFile, Spectrum, export_spectra, import_any, spectra_for, trace};

use crate::config::Config;
use crate::render::{ListingPen, SvgPen, svg_document};

#[derive(Parser)]
#[command(name = "epicycle", about = "Draw traced contours with Fourier epicycles")]
struct Cli {
    /// Config file (defaults to $EPICYCLE_CONFIG, then ./epicycle.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    /// Compute the DFT across all cores regardless of contour length
    #[arg(long, global = true)]
    parallel: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute ranked Fourier coefficients for every contour
    Transform {
        /// Contour file (JSON)
        input: PathBuf,

        /// Write coefficients here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Keep only the K largest epicycles per contour
        #[arg(long)]
        top: Option<usize>,
    },

    /// Print reconstructed curve samples as M/L lines
    Sample {
        /// Contour or coefficient file (JSON)
        input: PathBuf,

        /// Keep only the K largest epicycles per contour
        #[arg(long)]
        top: Option<usize>,

        /// Samples per contour (defaults to the contour length)
        #[arg(long, value_parser = parse_steps)]
        steps: Option<usize>,
    },

    /// Render every contour into an SVG document
    Draw {
        /// Contour or coefficient file (JSON)
        input: PathBuf,

        /// Output SVG path
        #[arg(short, long)]
        output: PathBuf,

        /// Keep only the K largest epicycles per contour
        #[arg(long)]
        top: Option<usize>,

        /// Samples per contour (defaults to the contour length)
        #[arg(long, value_parser = parse_steps)]
        steps: Option<usize>,
    },
}

/// `--steps` must be a positive sample count.
fn parse_steps(s: &str) -> std::result::Result<usize, String> {
    let steps: usize = s.parse().map_err(|e| format!("{e}"))?;
    if steps == 0 {
        return Err("steps must be at least 1".to_string());
    }
    Ok(steps)
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load(cli.config.as_deref()).context("failed to load config")?;

    match &cli.command {
        Commands::Transform { input, output, top } => {
            cmd_transform(&cli, &config, input, output.as_deref(), *top)
        }
        Commands::Sample { input, top, steps } => cmd_sample(&cli, &config, input, *top, *steps),
        Commands::Draw {
            input,
            output,
            top,
            steps,
        } => cmd_draw(&cli, &config, input, output, *top, *steps),
    }
}

/// Read `path` and produce one ranked spectrum per contour. Contour files
/// are recentred onto the canvas first when configured to.
fn load_spectra(cli: &Cli, config: &Config, path: &Path) -> Result<Vec<Spectrum>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let input =
        import_any(&json).with_context(|| format!("failed to parse {}", path.display()))?;

    match input {
        InputFile::Spectra(spectra) => {
            tracing::info!("loaded {} spectra from {}", spectra.len(), path.display());
            Ok(spectra)
        }
        InputFile::Contours(mut contours) => {
            if config.canvas.recenter {
                for contour in &mut contours {
                    for point in contour.iter_mut() {
                        *point = config.canvas.to_math(*point);
                    }
                }
            }
            let empty = contours.iter().filter(|c| c.is_empty()).count();
            if empty > 0 {
                tracing::warn!("{empty} empty contour(s) in {}", path.display());
            }
            Ok(spectra_for(&contours, config.transform_mode(cli.parallel)))
        }
    }
}

fn cmd_transform(
    cli: &Cli,
    config: &Config,
    input: &Path,
    output: Option<&Path>,
    top: Option<usize>,
) -> Result<()> {
    let top_k = config.top_k(top);
    let spectra: Vec<Spectrum> = load_spectra(cli, config, input)?
        .iter()
        .map(|s| s.truncated(top_k))
        .collect();

    let json = export_spectra(&spectra).context("failed to serialize coefficients")?;
    match output {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            let terms: usize = spectra.iter().map(|s| s.coefficients().len()).sum();
            println!(
                "wrote {} contours, {} epicycles to {}",
                spectra.len(),
                terms,
                path.display()
            );
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_sample(
    cli: &Cli,
    config: &Config,
    input: &Path,
    top: Option<usize>,
    steps: Option<usize>,
) -> Result<()> {
    let top_k = config.top_k(top);
    let spectra = load_spectra(cli, config, input)?;

    let mut blocks = Vec::with_capacity(spectra.len());
    for spectrum in &spectra {
        let spectrum = spectrum.truncated(top_k);
        let mut pen = ListingPen::default();
        trace(
            spectrum.samples_with_steps(steps.unwrap_or(spectrum.len())),
            &mut pen,
        );
        blocks.push(pen.finish());
    }
    print!("{}", blocks.join("\n"));
    Ok(())
}

fn cmd_draw(
    cli: &Cli,
    config: &Config,
    input: &Path,
    output: &Path,
    top: Option<usize>,
    steps: Option<usize>,
) -> Result<()> {
    let top_k = config.top_k(top);
    let spectra = load_spectra(cli, config, input)?;

    let mut paths = Vec::with_capacity(spectra.len());
    let mut drawn = 0;
    for spectrum in &spectra {
        let spectrum = spectrum.truncated(top_k);
        let mut pen = SvgPen::new(&config.canvas);
        drawn += trace(
            spectrum.samples_with_steps(steps.unwrap_or(spectrum.len())),
            &mut pen,
        );
        paths.push(pen.finish(config.render.close_path));
    }

    let doc = svg_document(&paths, &config.canvas, &config.render);
    std::fs::write(output, doc).with_context(|| format!("failed to write {}", output.display()))?;
    println!(
        "drew {} contours, {} samples to {}",
        spectra.len(),
        drawn,
        output.display()
    );
    Ok(())
}
