//! Mapping of point heat sources onto the grid.

use heat_types::config::{GridSettings, MaterialSettings, SourceSettings};
use heat_types::state::DomainGrid;
use tracing::warn;

/// Add each source's generation rate into `q` at the nearest grid cell.
///
/// The nearest index per axis is `round((coord - min) / spacing)`. Sources
/// landing on the same cell accumulate rather than overwrite, so no energy
/// input is silently lost. A source mapping outside `[0, n)` on any axis is
/// logged and skipped; it never aborts the run.
///
/// Returns the number of skipped sources.
pub fn inject_sources(
    grid: &mut DomainGrid,
    sources: &[SourceSettings],
    material: &MaterialSettings,
    spacing: &GridSettings,
) -> usize {
    let mut skipped = 0;

    for src in sources {
        let ix = ((src.x - material.xmin) / spacing.dx).round() as isize;
        let iy = ((src.y - material.ymin) / spacing.dy).round() as isize;
        let iz = ((src.z - material.zmin) / spacing.dz).round() as isize;

        let in_bounds = (0..grid.nx as isize).contains(&ix)
            && (0..grid.ny as isize).contains(&iy)
            && (0..grid.nz as isize).contains(&iz);

        if in_bounds {
            grid.q[[ix as usize, iy as usize, iz as usize]] += src.volumetric_heat_source;
        } else {
            warn!(
                "source at ({}, {}, {}) is out of bounds, skipping",
                src.x, src.y, src.z
            );
            skipped += 1;
        }
    }

    skipped
}
