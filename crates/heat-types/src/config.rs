// ─────────────────────────────────────────────────────────────────────
// SCPN Heat Core — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{HeatError, HeatResult};

/// Top-level simulation configuration.
/// Maps 1:1 to the JSON document the host workbench writes for a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub setup_settings: SetupSettings,
    /// Materials occupying the domain. Only the first entry is used.
    pub material_settings: Vec<MaterialSettings>,
    /// The host UI emits this key without the double-t; keep the rename.
    #[serde(rename = "source_setings")]
    pub source_settings: Vec<SourceSettings>,
    pub boundary_settings: Vec<BoundarySettings>,
    pub grid_settings: GridSettings,
    pub solver_settings: SolverSettings,
}

/// Logging verbosity for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Debug,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetupSettings {
    #[serde(default = "default_log_level")]
    pub log_level: LogLevel,
}

/// Axis-aligned material region with a single scalar conductivity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialSettings {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
    pub zmin: f64,
    pub zmax: f64,
    /// Thermal conductivity in W/mK.
    #[serde(default = "default_thermal_conductivity")]
    pub thermal_conductivity: f64,
}

/// A point heat source with a volumetric generation rate in W/m³.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSettings {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    #[serde(default = "default_volumetric_heat_source")]
    pub volumetric_heat_source: f64,
}

/// The six outer faces of the rectangular domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Face {
    Xmin,
    Xmax,
    Ymin,
    Ymax,
    Zmin,
    Zmax,
}

/// Fixed-temperature (Dirichlet) condition on one face.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundarySettings {
    #[serde(default = "default_face")]
    pub face: Face,
    /// Fixed temperature in K.
    #[serde(default = "default_boundary_temperature")]
    pub temperature: f64,
}

/// Finite-difference grid spacing per axis, in meters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridSettings {
    #[serde(default = "default_spacing")]
    pub dx: f64,
    #[serde(default = "default_spacing")]
    pub dy: f64,
    #[serde(default = "default_spacing")]
    pub dz: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolverMethod {
    Jacobi,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverSettings {
    #[serde(default = "default_solver_method")]
    pub solver_method: SolverMethod,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(default = "default_max_iter")]
    pub max_iter: usize,
}

fn default_log_level() -> LogLevel {
    LogLevel::Info
}
fn default_thermal_conductivity() -> f64 {
    200.0
}
fn default_volumetric_heat_source() -> f64 {
    100.0
}
fn default_face() -> Face {
    Face::Xmin
}
fn default_boundary_temperature() -> f64 {
    0.0
}
fn default_spacing() -> f64 {
    1.0
}
fn default_solver_method() -> SolverMethod {
    SolverMethod::Jacobi
}
fn default_tolerance() -> f64 {
    1e-4
}
fn default_max_iter() -> usize {
    100
}

impl SimulationConfig {
    /// Load and parse a simulation document from a JSON file.
    pub fn from_file(path: &Path) -> HeatResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Reject numerically invalid documents. Either the whole model is
    /// usable or the run is aborted; there is no partial success.
    pub fn validate(&self) -> HeatResult<()> {
        let material = self.material_settings.first().ok_or_else(|| {
            HeatError::Config("material_settings must contain at least one material".to_string())
        })?;
        material.validate()?;
        self.grid_settings.validate()?;
        self.solver_settings.validate()?;
        Ok(())
    }

    /// The material region used for the run (first list entry).
    /// Call only on a validated config.
    pub fn material(&self) -> &MaterialSettings {
        &self.material_settings[0]
    }
}

impl MaterialSettings {
    pub fn validate(&self) -> HeatResult<()> {
        let axes = [
            ("x", self.xmin, self.xmax),
            ("y", self.ymin, self.ymax),
            ("z", self.zmin, self.zmax),
        ];
        for (axis, min, max) in axes {
            if min >= max {
                return Err(HeatError::Config(format!(
                    "{axis}min must be less than {axis}max, got [{min}, {max}]"
                )));
            }
        }
        if self.thermal_conductivity <= 0.0 {
            return Err(HeatError::Config(format!(
                "thermal_conductivity must be positive, got {}",
                self.thermal_conductivity
            )));
        }
        Ok(())
    }
}

impl GridSettings {
    pub fn validate(&self) -> HeatResult<()> {
        let spacings = [("dx", self.dx), ("dy", self.dy), ("dz", self.dz)];
        for (name, value) in spacings {
            if value <= 0.0 {
                return Err(HeatError::Config(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl SolverSettings {
    pub fn validate(&self) -> HeatResult<()> {
        if self.tolerance <= 0.0 {
            return Err(HeatError::Config(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if self.max_iter < 1 {
            return Err(HeatError::Config(format!(
                "max_iter must be at least 1, got {}",
                self.max_iter
            )));
        }
        Ok(())
    }
}
