//! Heat-flux field derived from the converged temperature field.
//!
//! Fourier's law: q = -k ∇T. The gradient uses central differences at
//! interior points and one-sided differences at the domain edges.

use heat_math::gradient::gradient_3d;
use heat_types::state::{DomainGrid, FluxField};

/// Compute the heat-flux vector field from the temperature field.
///
/// Consumes the grid immutably; the temperature field is read-only by the
/// time flux is derived.
pub fn compute_heat_flux(grid: &DomainGrid, k: f64) -> FluxField {
    let (mut qx, mut qy, mut qz) = gradient_3d(&grid.t, grid.dx, grid.dy, grid.dz);
    qx.mapv_inplace(|g| -k * g);
    qy.mapv_inplace(|g| -k * g);
    qz.mapv_inplace(|g| -k * g);

    FluxField { qx, qy, qz }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heat_types::config::{GridSettings, MaterialSettings};

    fn grid(extent: f64) -> DomainGrid {
        let material = MaterialSettings {
            xmin: 0.0,
            xmax: extent,
            ymin: 0.0,
            ymax: extent,
            zmin: 0.0,
            zmax: extent,
            thermal_conductivity: 1.0,
        };
        let spacing = GridSettings {
            dx: 1.0,
            dy: 1.0,
            dz: 1.0,
        };
        DomainGrid::build(&material, &spacing).unwrap()
    }

    #[test]
    fn test_uniform_temperature_gives_zero_flux() {
        let mut g = grid(3.0);
        g.t.fill(300.0);
        let flux = compute_heat_flux(&g, 50.0);

        assert!(flux.qx.iter().all(|v| v.abs() < 1e-12));
        assert!(flux.qy.iter().all(|v| v.abs() < 1e-12));
        assert!(flux.qz.iter().all(|v| v.abs() < 1e-12));
    }

    #[test]
    fn test_linear_profile_gives_constant_flux() {
        // T = 100 - 10x with k = 5: q_x = -k dT/dx = 50, other components 0.
        let mut g = grid(3.0);
        for ix in 0..g.nx {
            for iy in 0..g.ny {
                for iz in 0..g.nz {
                    g.t[[ix, iy, iz]] = 100.0 - 10.0 * ix as f64;
                }
            }
        }
        let flux = compute_heat_flux(&g, 5.0);

        for v in flux.qx.iter() {
            assert!((v - 50.0).abs() < 1e-10);
        }
        assert!(flux.qy.iter().all(|v| v.abs() < 1e-12));
        assert!(flux.qz.iter().all(|v| v.abs() < 1e-12));
    }

    #[test]
    fn test_flux_points_down_the_gradient() {
        // Hot center: flux must point outward along every axis.
        let mut g = grid(4.0);
        g.t[[2, 2, 2]] = 10.0;
        let flux = compute_heat_flux(&g, 1.0);

        assert!(flux.qx[[1, 2, 2]] < 0.0); // toward xmin
        assert!(flux.qx[[3, 2, 2]] > 0.0); // toward xmax
        assert!(flux.qy[[2, 1, 2]] < 0.0);
        assert!(flux.qy[[2, 3, 2]] > 0.0);
        assert!(flux.qz[[2, 2, 1]] < 0.0);
        assert!(flux.qz[[2, 2, 3]] > 0.0);
    }

    #[test]
    fn test_flux_shape_matches_temperature() {
        let g = grid(3.0);
        let flux = compute_heat_flux(&g, 1.0);
        assert_eq!(flux.qx.shape(), g.t.shape());
        assert_eq!(flux.qy.shape(), g.t.shape());
        assert_eq!(flux.qz.shape(), g.t.shape());
    }
}
