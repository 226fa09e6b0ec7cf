// ─────────────────────────────────────────────────────────────────────
// SCPN Heat Core — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use ndarray::{Array1, Array3, ShapeBuilder};
use serde::{Deserialize, Serialize};

use crate::config::{GridSettings, MaterialSettings};
use crate::error::{HeatError, HeatResult};

/// Discretized 3D computational domain with precomputed coordinate axes.
///
/// Both scalar fields are allocated in column-major order: x varies fastest
/// in memory, which is also the flattening order of the exported grid files.
/// The grid is sized once at build time and never resized afterwards.
#[derive(Debug, Clone)]
pub struct DomainGrid {
    pub nx: usize,
    pub ny: usize,
    pub nz: usize,
    pub x: Array1<f64>, // x coordinates [nx] - linspace(xmin, xmax, nx)
    pub y: Array1<f64>, // y coordinates [ny]
    pub z: Array1<f64>, // z coordinates [nz]
    pub dx: f64,        // input grid spacing, used by the stencil
    pub dy: f64,
    pub dz: f64,
    /// Temperature field [nx, ny, nz], mutated by the solver loop.
    pub t: Array3<f64>,
    /// Volumetric heat source field [nx, ny, nz], fixed before iteration.
    pub q: Array3<f64>,
}

impl DomainGrid {
    /// Size the grid from the material bounding box and the requested
    /// spacing, and allocate both fields zero-filled.
    ///
    /// Each dimension is `floor((max - min) / spacing) + 1`. A dimension
    /// below 3 leaves no interior point for the 7-point stencil and is
    /// rejected.
    pub fn build(material: &MaterialSettings, spacing: &GridSettings) -> HeatResult<Self> {
        let nx = ((material.xmax - material.xmin) / spacing.dx).floor() as usize + 1;
        let ny = ((material.ymax - material.ymin) / spacing.dy).floor() as usize + 1;
        let nz = ((material.zmax - material.zmin) / spacing.dz).floor() as usize + 1;

        for (axis, n) in [("nx", nx), ("ny", ny), ("nz", nz)] {
            if n < 3 {
                return Err(HeatError::Domain(format!(
                    "grid dimension {axis} = {n} leaves no interior stencil point (minimum 3)"
                )));
            }
        }

        let x = Array1::linspace(material.xmin, material.xmax, nx);
        let y = Array1::linspace(material.ymin, material.ymax, ny);
        let z = Array1::linspace(material.zmin, material.zmax, nz);

        Ok(DomainGrid {
            nx,
            ny,
            nz,
            x,
            y,
            z,
            dx: spacing.dx,
            dy: spacing.dy,
            dz: spacing.dz,
            t: Array3::zeros((nx, ny, nz).f()),
            q: Array3::zeros((nx, ny, nz).f()),
        })
    }
}

/// Heat-flux vector field, one component array per axis, same shape as `t`.
#[derive(Debug, Clone)]
pub struct FluxField {
    pub qx: Array3<f64>,
    pub qy: Array3<f64>,
    pub qz: Array3<f64>,
}

/// Outcome of the relaxation loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveResult {
    pub converged: bool,
    /// Number of completed sweeps (1-based).
    pub iterations: usize,
    /// Max absolute elementwise change of the final sweep.
    pub residual: f64,
    /// Sources that mapped outside the grid and were skipped.
    pub sources_skipped: usize,
}

/// Summary statistics written to `summary.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub min_temperature: f64,
    pub max_temperature: f64,
    pub mean_temperature: f64,
    pub argmin_index: [usize; 3],
    pub argmax_index: [usize; 3],
    pub total_heat_input: f64,
    pub iterations: usize,
}
