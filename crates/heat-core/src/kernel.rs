// ─────────────────────────────────────────────────────────────────────
// SCPN Heat Core — Kernel
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! HeatKernel — the steady-state conduction solver.
//!
//! Owns the validated configuration and the domain grid, and drives the
//! stage sequence: source injection, boundary application, Jacobi
//! relaxation to convergence or the iteration cap.

use std::path::Path;

use heat_math::jacobi::{jacobi_sweep, max_abs_diff};
use heat_types::config::SimulationConfig;
use heat_types::error::HeatResult;
use heat_types::state::{DomainGrid, SolveResult};
use tracing::{info, warn};

/// Progress is logged once per this many sweeps.
const PROGRESS_LOG_INTERVAL: usize = 100;

/// The steady-state heat conduction solver.
pub struct HeatKernel {
    config: SimulationConfig,
    grid: DomainGrid,
}

impl HeatKernel {
    /// Create a kernel from a configuration, validating it and sizing the
    /// domain grid. The grid is allocated once here and never resized.
    pub fn new(config: SimulationConfig) -> HeatResult<Self> {
        config.validate()?;
        let grid = DomainGrid::build(config.material(), &config.grid_settings)?;
        Ok(HeatKernel { config, grid })
    }

    /// Create a kernel from a JSON config file.
    pub fn from_file(path: &Path) -> HeatResult<Self> {
        let config = SimulationConfig::from_file(path)?;
        Self::new(config)
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn grid(&self) -> &DomainGrid {
        &self.grid
    }

    /// Run the solver to convergence or the iteration cap.
    ///
    /// Each sweep snapshots the current temperature field and computes
    /// every interior point from that snapshot (full double-buffering),
    /// then measures the max absolute change. Sweeps are strictly
    /// sequential. Non-convergence is reported in the result, never as an
    /// error: the best-effort field is still usable for export.
    pub fn solve(&mut self) -> SolveResult {
        let material = self.config.material();
        let spacing = &self.config.grid_settings;

        let sources_skipped = crate::source::inject_sources(
            &mut self.grid,
            &self.config.source_settings,
            material,
            spacing,
        );
        crate::boundary::apply_boundary_conditions(&mut self.grid, &self.config.boundary_settings);

        let k = material.thermal_conductivity;
        let tol = self.config.solver_settings.tolerance;
        let max_iter = self.config.solver_settings.max_iter;
        let dx = self.grid.dx;

        info!("starting Jacobi relaxation: tol={tol:e}, max_iter={max_iter}");

        let mut converged = false;
        let mut iterations = 0;
        let mut residual = f64::MAX;

        for sweep in 1..=max_iter {
            let t_old = self.grid.t.clone();
            jacobi_sweep(&mut self.grid.t, &t_old, &self.grid.q, dx, k);
            residual = max_abs_diff(&self.grid.t, &t_old);
            iterations = sweep;

            if (sweep - 1) % PROGRESS_LOG_INTERVAL == 0 {
                info!("iteration {sweep}, max error: {residual:.6e}");
            }
            if residual < tol {
                info!("converged after {sweep} iterations, max error: {residual:.6e}");
                converged = true;
                break;
            }
        }

        if !converged {
            warn!(
                "tolerance {tol:e} not reached after {max_iter} iterations, \
                 last error: {residual:.6e}"
            );
        }

        SolveResult {
            converged,
            iterations,
            residual,
            sources_skipped,
        }
    }
}
