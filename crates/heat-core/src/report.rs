//! Summary statistics over the solved fields.

use std::path::Path;

use heat_types::error::HeatResult;
use heat_types::state::{DomainGrid, SummaryRecord};

/// Reduce the solved grid to the summary record.
///
/// Extrema indices report the first occurrence in flat scan order with x
/// varying fastest, the same order the grid files are flattened in.
pub fn summarize(grid: &DomainGrid, iterations: usize) -> SummaryRecord {
    let mut min_temperature = f64::INFINITY;
    let mut max_temperature = f64::NEG_INFINITY;
    let mut argmin_index = [0usize; 3];
    let mut argmax_index = [0usize; 3];
    let mut sum = 0.0;

    for iz in 0..grid.nz {
        for iy in 0..grid.ny {
            for ix in 0..grid.nx {
                let v = grid.t[[ix, iy, iz]];
                sum += v;
                if v < min_temperature {
                    min_temperature = v;
                    argmin_index = [ix, iy, iz];
                }
                if v > max_temperature {
                    max_temperature = v;
                    argmax_index = [ix, iy, iz];
                }
            }
        }
    }

    let count = (grid.nx * grid.ny * grid.nz) as f64;

    SummaryRecord {
        min_temperature,
        max_temperature,
        mean_temperature: sum / count,
        argmin_index,
        argmax_index,
        total_heat_input: grid.q.sum(),
        iterations,
    }
}

/// Serialize the summary record to pretty-printed JSON at `path`.
pub fn write_summary(path: &Path, record: &SummaryRecord) -> HeatResult<()> {
    let json = serde_json::to_string_pretty(record)?;
    std::fs::write(path, json)?;
    Ok(())
}
