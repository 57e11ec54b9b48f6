//! ASCII PLY serialization of the final mesh.

use std::io::{self, Write};

use crate::Mesh;

/// Writes `mesh` as PLY (format ascii 1.0), one vertex or face per line.
pub fn write_ply<W: Write>(out: &mut W, mesh: &Mesh) -> io::Result<()> {
    writeln!(out, "ply")?;
    writeln!(out, "format ascii 1.0")?;
    writeln!(out, "element vertex {}", mesh.vertices.len())?;
    writeln!(out, "property float x")?;
    writeln!(out, "property float y")?;
    writeln!(out, "property float z")?;
    writeln!(out, "element face {}", mesh.faces.len())?;
    writeln!(out, "property list uchar int vertex_index")?;
    writeln!(out, "end_header")?;

    for v in &mesh.vertices {
        writeln!(out, "{} {} {}", v.x, v.y, v.z)?;
    }
    for f in &mesh.faces {
        writeln!(out, "3 {} {} {}", f[0], f[1], f[2])?;
    }

    Ok(())
}
