//! Dirichlet boundary application on the six outer faces.

use heat_types::config::{BoundarySettings, Face};
use heat_types::state::DomainGrid;
use ndarray::s;

/// Stamp each supplied fixed temperature onto its face plane of `t`.
///
/// The face set is closed, so dispatch is a plain match. Faces without a
/// supplied condition keep their initialized value of zero and are never
/// revisited by the solver loop: they act as an implicit fixed-zero
/// boundary, not as an insulated one. Later entries for the same face win.
pub fn apply_boundary_conditions(grid: &mut DomainGrid, boundaries: &[BoundarySettings]) {
    let (nx, ny, nz) = (grid.nx, grid.ny, grid.nz);

    for bc in boundaries {
        match bc.face {
            Face::Xmin => grid.t.slice_mut(s![0, .., ..]).fill(bc.temperature),
            Face::Xmax => grid.t.slice_mut(s![nx - 1, .., ..]).fill(bc.temperature),
            Face::Ymin => grid.t.slice_mut(s![.., 0, ..]).fill(bc.temperature),
            Face::Ymax => grid.t.slice_mut(s![.., ny - 1, ..]).fill(bc.temperature),
            Face::Zmin => grid.t.slice_mut(s![.., .., 0]).fill(bc.temperature),
            Face::Zmax => grid.t.slice_mut(s![.., .., nz - 1]).fill(bc.temperature),
        }
    }
}
