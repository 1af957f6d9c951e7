//! bentplate CLI - plate layouts for bent frames, written as DXF.

use anyhow::{Context, Result, bail};
use bentplate::{ExportConfig, ExportDriver, Job, place_holes};
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "bentplate")]
#[command(version, about = "Flat plate layouts with evenly spaced hole rows", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build every plate of a job file and write one drawing
    Render {
        /// Job file (.toml)
        job: PathBuf,
        /// Export configuration (.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Output directory, overrides the configuration
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
        /// Drawing name without extension (default: job name, then job file stem)
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Validate a job file and print every hole center
    Check {
        /// Job file (.toml)
        job: PathBuf,
    },
    /// Write the sample drawing
    Demo {
        /// Output directory
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },
}

fn init_logging(verbose: &Verbosity<InfoLevel>) {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let env_filter = EnvFilter::builder()
        .with_default_directive(verbose.tracing_level_filter().into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.verbose);

    match cli.command {
        Command::Render {
            job,
            config,
            out_dir,
            name,
        } => render(&job, config.as_deref(), out_dir, name),
        Command::Check { job } => check(&job),
        Command::Demo { out_dir } => {
            let path = write_job(&Job::demo(), ExportConfig::in_directory(out_dir), "demo")?;
            println!("{}", path.display());
            Ok(())
        },
    }
}

fn render(
    job_path: &Path,
    config_path: Option<&Path>,
    out_dir: Option<PathBuf>,
    name: Option<String>,
) -> Result<()> {
    let job = Job::from_toml_file(job_path)
        .with_context(|| format!("failed to load job {}", job_path.display()))?;

    let mut config = match config_path {
        Some(path) => ExportConfig::from_toml_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ExportConfig::default(),
    };
    if let Some(dir) = out_dir {
        config.output.directory = dir;
    }

    let name = name
        .or_else(|| job.name.clone())
        .or_else(|| job_path.file_stem().map(|s| s.to_string_lossy().into_owned()))
        .context("cannot derive a drawing name, pass --name")?;

    let path = write_job(&job, config, &name)?;
    println!("{}", path.display());
    Ok(())
}

fn write_job(job: &Job, config: ExportConfig, name: &str) -> Result<PathBuf> {
    let mut driver = ExportDriver::new(config)?;
    let plates = job.render(&mut driver)?;
    info!(plates = plates.len(), "rendered job");
    Ok(driver.save(name)?)
}

fn check(job_path: &Path) -> Result<()> {
    let job = Job::from_toml_file(job_path)
        .with_context(|| format!("failed to load job {}", job_path.display()))?;

    let mut failures = 0;
    for (index, plate) in job.build_each().into_iter().enumerate() {
        let plate = match plate {
            Ok(plate) => plate,
            Err(e) => {
                failures += 1;
                println!("plate #{}: {}", index, e);
                continue;
            },
        };
        let rect = &plate.rectangle;
        println!(
            "plate #{}: {} x {} at ({}, {}), {} holes",
            index,
            rect.width(),
            rect.height(),
            plate.origin.x,
            plate.origin.y,
            rect.holes().len()
        );
        match place_holes(rect, plate.origin) {
            Ok(placements) => {
                for placement in placements {
                    println!("  ({:.3}, {:.3})", placement.center.x, placement.center.y);
                }
            },
            Err(e) => {
                failures += 1;
                println!("  {}", e);
            },
        }
    }

    if failures > 0 {
        bail!("{} plate(s) failed", failures);
    }
    Ok(())
}
