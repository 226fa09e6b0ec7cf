//! VTK XML rectilinear-grid writers for the exported fields.
//!
//! Emits `.vtr` files with ASCII data arrays, readable by ParaView and
//! friends. Point data is flattened with x varying fastest, matching the
//! in-memory layout of the field arrays.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use heat_types::error::HeatResult;
use heat_types::state::FluxField;
use ndarray::{Array1, Array3};

/// Write a scalar field over the given coordinate axes.
pub fn write_scalar_grid(
    path: &Path,
    x: &Array1<f64>,
    y: &Array1<f64>,
    z: &Array1<f64>,
    name: &str,
    field: &Array3<f64>,
) -> HeatResult<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let (nx, ny, nz) = field.dim();

    write_preamble(&mut w, x, y, z, nx, ny, nz)?;
    writeln!(w, "      <PointData Scalars=\"{name}\">")?;
    writeln!(
        w,
        "        <DataArray type=\"Float64\" Name=\"{name}\" format=\"ascii\">"
    )?;
    for iz in 0..nz {
        for iy in 0..ny {
            let row: Vec<String> = (0..nx).map(|ix| field[[ix, iy, iz]].to_string()).collect();
            writeln!(w, "          {}", row.join(" "))?;
        }
    }
    writeln!(w, "        </DataArray>")?;
    writeln!(w, "      </PointData>")?;
    write_closing(&mut w)?;

    w.flush()?;
    Ok(())
}

/// Write a 3-component vector field over the given coordinate axes.
pub fn write_vector_grid(
    path: &Path,
    x: &Array1<f64>,
    y: &Array1<f64>,
    z: &Array1<f64>,
    name: &str,
    flux: &FluxField,
) -> HeatResult<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let (nx, ny, nz) = flux.qx.dim();

    write_preamble(&mut w, x, y, z, nx, ny, nz)?;
    writeln!(w, "      <PointData Vectors=\"{name}\">")?;
    writeln!(
        w,
        "        <DataArray type=\"Float64\" Name=\"{name}\" \
         NumberOfComponents=\"3\" format=\"ascii\">"
    )?;
    for iz in 0..nz {
        for iy in 0..ny {
            let row: Vec<String> = (0..nx)
                .map(|ix| {
                    format!(
                        "{} {} {}",
                        flux.qx[[ix, iy, iz]],
                        flux.qy[[ix, iy, iz]],
                        flux.qz[[ix, iy, iz]]
                    )
                })
                .collect();
            writeln!(w, "          {}", row.join(" "))?;
        }
    }
    writeln!(w, "        </DataArray>")?;
    writeln!(w, "      </PointData>")?;
    write_closing(&mut w)?;

    w.flush()?;
    Ok(())
}

fn write_preamble<W: Write>(
    w: &mut W,
    x: &Array1<f64>,
    y: &Array1<f64>,
    z: &Array1<f64>,
    nx: usize,
    ny: usize,
    nz: usize,
) -> std::io::Result<()> {
    let extent = format!("0 {} 0 {} 0 {}", nx - 1, ny - 1, nz - 1);
    writeln!(w, "<?xml version=\"1.0\"?>")?;
    writeln!(
        w,
        "<VTKFile type=\"RectilinearGrid\" version=\"0.1\" byte_order=\"LittleEndian\">"
    )?;
    writeln!(w, "  <RectilinearGrid WholeExtent=\"{extent}\">")?;
    writeln!(w, "    <Piece Extent=\"{extent}\">")?;
    writeln!(w, "      <Coordinates>")?;
    write_axis(w, "X_COORDINATES", x)?;
    write_axis(w, "Y_COORDINATES", y)?;
    write_axis(w, "Z_COORDINATES", z)?;
    writeln!(w, "      </Coordinates>")?;
    Ok(())
}

fn write_axis<W: Write>(w: &mut W, name: &str, values: &Array1<f64>) -> std::io::Result<()> {
    writeln!(
        w,
        "        <DataArray type=\"Float64\" Name=\"{name}\" format=\"ascii\">"
    )?;
    let row: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    writeln!(w, "          {}", row.join(" "))?;
    writeln!(w, "        </DataArray>")?;
    Ok(())
}

fn write_closing<W: Write>(w: &mut W) -> std::io::Result<()> {
    writeln!(w, "    </Piece>")?;
    writeln!(w, "  </RectilinearGrid>")?;
    writeln!(w, "</VTKFile>")?;
    Ok(())
}
