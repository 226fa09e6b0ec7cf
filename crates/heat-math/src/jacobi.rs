//! Jacobi relaxation for the steady-state heat equation.
//!
//! Uses the 7-point stencil for ∇²T = -Q/k on a uniform grid:
//!
//!   T[i,j,k] = ( T[i±1,j,k] + T[i,j±1,k] + T[i,j,k±1] + dx²·Q[i,j,k]/k ) / 6
//!
//! The source term carries dx² on every axis, so the discretization is
//! exact only for cubic cells (dx = dy = dz). Kept as-is for output
//! compatibility with existing runs.

use ndarray::Array3;

/// Perform one Jacobi sweep over the interior of the grid.
///
/// `t`: mutable [nx, ny, nz] temperature array receiving the update
/// `t_old`: immutable snapshot of the previous complete sweep
/// `q`: [nx, ny, nz] volumetric heat source field
/// `k`: thermal conductivity
///
/// Every interior point is computed from `t_old` only, never from values
/// already written in the current sweep. Boundary planes (first/last index
/// along each axis) are NOT updated.
pub fn jacobi_sweep(t: &mut Array3<f64>, t_old: &Array3<f64>, q: &Array3<f64>, dx: f64, k: f64) {
    let (nx, ny, nz) = t_old.dim();
    let dx_sq = dx * dx;

    for ix in 1..nx - 1 {
        for iy in 1..ny - 1 {
            for iz in 1..nz - 1 {
                t[[ix, iy, iz]] = (t_old[[ix + 1, iy, iz]]
                    + t_old[[ix - 1, iy, iz]]
                    + t_old[[ix, iy + 1, iz]]
                    + t_old[[ix, iy - 1, iz]]
                    + t_old[[ix, iy, iz + 1]]
                    + t_old[[ix, iy, iz - 1]]
                    + dx_sq * q[[ix, iy, iz]] / k)
                    / 6.0;
            }
        }
    }
}

/// Maximum absolute elementwise difference between two same-shaped fields.
///
/// Taken over the entire array; untouched boundary cells contribute zero.
pub fn max_abs_diff(a: &Array3<f64>, b: &Array3<f64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .fold(0.0_f64, |acc, (x, y)| acc.max((x - y).abs()))
}

/// L-infinity fixed-point defect of the stencil over interior points.
///
/// At the solution, `(sum of neighbors + dx²·Q/k) / 6` reproduces each
/// interior value, so the defect bounds how far `t` is from the discrete
/// steady state.
pub fn jacobi_residual(t: &Array3<f64>, q: &Array3<f64>, dx: f64, k: f64) -> f64 {
    let (nx, ny, nz) = t.dim();
    let dx_sq = dx * dx;

    let mut max_res: f64 = 0.0;
    for ix in 1..nx - 1 {
        for iy in 1..ny - 1 {
            for iz in 1..nz - 1 {
                let update = (t[[ix + 1, iy, iz]]
                    + t[[ix - 1, iy, iz]]
                    + t[[ix, iy + 1, iz]]
                    + t[[ix, iy - 1, iz]]
                    + t[[ix, iy, iz + 1]]
                    + t[[ix, iy, iz - 1]]
                    + dx_sq * q[[ix, iy, iz]] / k)
                    / 6.0;
                max_res = max_res.max((update - t[[ix, iy, iz]]).abs());
            }
        }
    }

    max_res
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    #[test]
    fn test_constant_field_is_fixed_point() {
        let t_old = Array3::from_elem((5, 5, 5), 42.0);
        let mut t = t_old.clone();
        let q = Array3::zeros((5, 5, 5));

        jacobi_sweep(&mut t, &t_old, &q, 1.0, 1.0);

        assert!(max_abs_diff(&t, &t_old) < 1e-15);
        assert!(jacobi_residual(&t, &q, 1.0, 1.0) < 1e-15);
    }

    #[test]
    fn test_boundary_planes_untouched() {
        let t_old = Array3::zeros((4, 4, 4));
        let mut t = Array3::zeros((4, 4, 4));
        // Stamp recognizable boundary values on the target array.
        for iy in 0..4 {
            for iz in 0..4 {
                t[[0, iy, iz]] = 7.0;
                t[[3, iy, iz]] = -7.0;
            }
        }
        let q = Array3::from_elem((4, 4, 4), 1.0);

        jacobi_sweep(&mut t, &t_old, &q, 1.0, 1.0);

        for iy in 0..4 {
            for iz in 0..4 {
                assert!((t[[0, iy, iz]] - 7.0).abs() < 1e-15);
                assert!((t[[3, iy, iz]] + 7.0).abs() < 1e-15);
            }
        }
    }

    #[test]
    fn test_source_raises_interior() {
        let t_old = Array3::zeros((3, 3, 3));
        let mut t = Array3::zeros((3, 3, 3));
        let mut q = Array3::zeros((3, 3, 3));
        q[[1, 1, 1]] = 60.0;

        jacobi_sweep(&mut t, &t_old, &q, 2.0, 5.0);

        // dx²·Q/k / 6 = 4 * 60 / 5 / 6 = 8
        assert!((t[[1, 1, 1]] - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_sweep_reads_snapshot_only() {
        // A sweep over a field whose interior disagrees with its snapshot
        // must use the snapshot values, not the partially updated array.
        let mut t_old = Array3::zeros((5, 3, 3));
        t_old[[1, 1, 1]] = 6.0;
        t_old[[3, 1, 1]] = 12.0;
        let mut t = t_old.clone();
        let q = Array3::zeros((5, 3, 3));

        jacobi_sweep(&mut t, &t_old, &q, 1.0, 1.0);

        // t[2,1,1] averages the OLD values at [1,1,1] and [3,1,1]
        // regardless of the order in which [1,1,1] was rewritten.
        assert!((t[[2, 1, 1]] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_max_abs_diff_picks_largest() {
        let a = Array3::zeros((3, 3, 3));
        let mut b = Array3::zeros((3, 3, 3));
        b[[0, 0, 0]] = -0.25;
        b[[2, 2, 2]] = 0.125;
        assert!((max_abs_diff(&a, &b) - 0.25).abs() < 1e-15);
    }

    #[test]
    fn test_residual_decreases_under_sweeps() {
        let mut t = Array3::zeros((8, 8, 8));
        let q = Array3::from_elem((8, 8, 8), 1.0);

        let res0 = jacobi_residual(&t, &q, 1.0, 1.0);
        for _ in 0..200 {
            let t_old = t.clone();
            jacobi_sweep(&mut t, &t_old, &q, 1.0, 1.0);
        }
        let res1 = jacobi_residual(&t, &q, 1.0, 1.0);

        assert!(
            res1 < res0,
            "Residual should decrease: {res0} -> {res1}"
        );
    }
}
