//! Finite-difference gradient of a 3D scalar field.

use ndarray::{Array3, ShapeBuilder};

/// Compute the gradient of `field` along each axis.
///
/// Central differences at interior points, one-sided differences at the
/// domain edges. Returns `(df_dx, df_dy, df_dz)` with the same shape as
/// `field`.
pub fn gradient_3d(
    field: &Array3<f64>,
    dx: f64,
    dy: f64,
    dz: f64,
) -> (Array3<f64>, Array3<f64>, Array3<f64>) {
    let (nx, ny, nz) = field.dim();
    let mut df_dx = Array3::zeros((nx, ny, nz).f());
    let mut df_dy = Array3::zeros((nx, ny, nz).f());
    let mut df_dz = Array3::zeros((nx, ny, nz).f());

    for ix in 0..nx {
        for iy in 0..ny {
            for iz in 0..nz {
                df_dx[[ix, iy, iz]] = if ix == 0 {
                    (field[[1, iy, iz]] - field[[0, iy, iz]]) / dx
                } else if ix == nx - 1 {
                    (field[[nx - 1, iy, iz]] - field[[nx - 2, iy, iz]]) / dx
                } else {
                    (field[[ix + 1, iy, iz]] - field[[ix - 1, iy, iz]]) / (2.0 * dx)
                };

                df_dy[[ix, iy, iz]] = if iy == 0 {
                    (field[[ix, 1, iz]] - field[[ix, 0, iz]]) / dy
                } else if iy == ny - 1 {
                    (field[[ix, ny - 1, iz]] - field[[ix, ny - 2, iz]]) / dy
                } else {
                    (field[[ix, iy + 1, iz]] - field[[ix, iy - 1, iz]]) / (2.0 * dy)
                };

                df_dz[[ix, iy, iz]] = if iz == 0 {
                    (field[[ix, iy, 1]] - field[[ix, iy, 0]]) / dz
                } else if iz == nz - 1 {
                    (field[[ix, iy, nz - 1]] - field[[ix, iy, nz - 2]]) / dz
                } else {
                    (field[[ix, iy, iz + 1]] - field[[ix, iy, iz - 1]]) / (2.0 * dz)
                };
            }
        }
    }

    (df_dx, df_dy, df_dz)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_constant_field_is_zero() {
        let field = Array3::from_elem((4, 5, 6), 3.5);
        let (gx, gy, gz) = gradient_3d(&field, 1.0, 0.5, 2.0);
        assert!(gx.iter().all(|v| v.abs() < 1e-15));
        assert!(gy.iter().all(|v| v.abs() < 1e-15));
        assert!(gz.iter().all(|v| v.abs() < 1e-15));
    }

    #[test]
    fn test_gradient_linear_field_exact() {
        // f(x, y, z) = 2x + 3y - z on a unit-spaced grid; both central and
        // one-sided differences are exact for a linear field.
        let field = Array3::from_shape_fn((5, 5, 5), |(ix, iy, iz)| {
            2.0 * ix as f64 + 3.0 * iy as f64 - iz as f64
        });
        let (gx, gy, gz) = gradient_3d(&field, 1.0, 1.0, 1.0);

        for ix in 0..5 {
            for iy in 0..5 {
                for iz in 0..5 {
                    assert!((gx[[ix, iy, iz]] - 2.0).abs() < 1e-12);
                    assert!((gy[[ix, iy, iz]] - 3.0).abs() < 1e-12);
                    assert!((gz[[ix, iy, iz]] + 1.0).abs() < 1e-12);
                }
            }
        }
    }

    #[test]
    fn test_gradient_respects_spacing() {
        // f = x over a grid with dx = 0.25: index step 1 means coordinate
        // step 0.25, so df/dx = (index step) / 0.25.
        let field = Array3::from_shape_fn((4, 3, 3), |(ix, _, _)| ix as f64);
        let (gx, _, _) = gradient_3d(&field, 0.25, 1.0, 1.0);
        for v in gx.iter() {
            assert!((v - 4.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_gradient_quadratic_one_sided_edges() {
        // f(x) = x²: central difference is exact, the one-sided edge
        // difference gives the secant slope instead.
        let field = Array3::from_shape_fn((5, 3, 3), |(ix, _, _)| (ix as f64).powi(2));
        let (gx, _, _) = gradient_3d(&field, 1.0, 1.0, 1.0);

        // Interior: exact derivative 2x.
        for ix in 1..4 {
            assert!((gx[[ix, 1, 1]] - 2.0 * ix as f64).abs() < 1e-12);
        }
        // Edges: secant slopes (1² - 0²)/1 = 1 and (4² - 3²)/1 = 7.
        assert!((gx[[0, 1, 1]] - 1.0).abs() < 1e-12);
        assert!((gx[[4, 1, 1]] - 7.0).abs() < 1e-12);
    }
}
