// ─────────────────────────────────────────────────────────────────────
// SCPN Heat Core — Solver CLI
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! heat-solver — subprocess entry point for the heat conduction solver.
//!
//! The hosting workbench writes the JSON input document, invokes this
//! binary, and reads back `summary.json` and the grid files. All
//! communication happens through those files, the log stream, and the
//! process exit code. Exit is 0 on completion regardless of convergence;
//! non-convergence is visible in the summary, not in the exit code.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use heat_core::flux::compute_heat_flux;
use heat_core::kernel::HeatKernel;
use heat_core::report::{summarize, write_summary};
use heat_core::vtk::{write_scalar_grid, write_vector_grid};
use heat_types::config::{LogLevel, SimulationConfig};
use heat_types::error::HeatResult;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

#[derive(Parser)]
#[command(name = "heat-solver", about = "Steady-state heat conduction solver")]
struct Cli {
    /// Path to the simulation input JSON file
    #[arg(short, long)]
    inputfile: PathBuf,

    /// Path to the output folder for solver results and visualization files
    #[arg(short, long)]
    outputfolder: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> HeatResult<()> {
    // The log level lives inside the document, so parse before installing
    // the subscriber; parse failures go to stderr.
    let config = SimulationConfig::from_file(&cli.inputfile)?;
    config.validate()?;

    std::fs::create_dir_all(&cli.outputfolder)?;
    init_logging(&cli.outputfolder, config.setup_settings.log_level)?;
    log_configuration(&config);

    let mut kernel = HeatKernel::new(config)?;
    let result = kernel.solve();

    let grid = kernel.grid();
    let k = kernel.config().material().thermal_conductivity;
    let flux = compute_heat_flux(grid, k);

    let record = summarize(grid, result.iterations);
    write_summary(&cli.outputfolder.join("summary.json"), &record)?;
    write_scalar_grid(
        &cli.outputfolder.join("Temperature.vtr"),
        &grid.x,
        &grid.y,
        &grid.z,
        "Temperature",
        &grid.t,
    )?;
    write_vector_grid(
        &cli.outputfolder.join("HeatFlux.vtr"),
        &grid.x,
        &grid.y,
        &grid.z,
        "HeatFlux",
        &flux,
    )?;

    info!("files are stored in {}", cli.outputfolder.display());
    Ok(())
}

/// Install a subscriber logging to both the console and `solver.log` in
/// the output folder, at the level requested by the document.
fn init_logging(output_dir: &Path, level: LogLevel) -> HeatResult<()> {
    let filter = match level {
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Error => LevelFilter::ERROR,
    };

    let log_file = File::create(output_dir.join("solver.log"))?;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_filter(filter),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Arc::new(log_file))
                .with_filter(filter),
        )
        .init();
    Ok(())
}

/// Log the key simulation parameters for reference and debugging.
fn log_configuration(config: &SimulationConfig) {
    let material = config.material();
    let grid = &config.grid_settings;
    let solver = &config.solver_settings;

    info!("=== Simulation Configuration Summary ===");
    info!("log level: {:?}", config.setup_settings.log_level);
    info!(
        "domain extents: x=[{}, {}], y=[{}, {}], z=[{}, {}]",
        material.xmin, material.xmax, material.ymin, material.ymax, material.zmin, material.zmax
    );
    info!(
        "grid spacing: dx={}, dy={}, dz={}",
        grid.dx, grid.dy, grid.dz
    );
    info!(
        "solver: method={:?}, tol={}, max_iter={}",
        solver.solver_method, solver.tolerance, solver.max_iter
    );
    info!(
        "material: thermal_conductivity={}",
        material.thermal_conductivity
    );
    for (idx, src) in config.source_settings.iter().enumerate() {
        info!(
            "  source {}: location=({}, {}, {}), value={}",
            idx + 1,
            src.x,
            src.y,
            src.z,
            src.volumetric_heat_source
        );
    }
    for bc in &config.boundary_settings {
        info!("  boundary: {:?}, temperature={}", bc.face, bc.temperature);
    }
    info!("========================================");
}
