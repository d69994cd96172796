//! Legacy ASCII VTK unstructured grid of the decomposed cube.
//!
//! ```text
//! # vtk DataFile Version 3.0
//! Cube
//! ASCII
//! DATASET UNSTRUCTURED_GRID
//! POINTS 15 float          x y z per line
//! CELLS 24 120             4 a b c d per line
//! CELL_TYPES 24            10 (VTK_TETRA) per line
//! POINT_DATA 15
//! SCALARS u float
//! LOOKUP_TABLE default     one sample value per line
//! ```

use std::fmt::Write as _;

use crate::geometry::Geometry;

/// VTK cell type id of a linear tetrahedron.
pub const VTK_TETRA: u8 = 10;

/// Name of the point scalar field.
pub const SCALAR_NAME: &str = "u";

/// Render the mesh with `values` attached as point scalars.
pub fn render(geometry: &Geometry, values: &[f64]) -> String {
  debug_assert_eq!(values.len(), geometry.points.len());

  let mut out = String::new();
  let tets = &geometry.tetrahedra;

  out.push_str("# vtk DataFile Version 3.0\n");
  out.push_str("Cube\n");
  out.push_str("ASCII\n");
  out.push_str("DATASET UNSTRUCTURED_GRID\n");

  let _ = writeln!(out, "POINTS {} float", geometry.points.len());
  for p in &geometry.points {
    let _ = writeln!(out, "{} {} {}", p.x, p.y, p.z);
  }

  let _ = writeln!(out, "CELLS {} {}", tets.len(), 5 * tets.len());
  for tet in tets {
    let [a, b, c, d] = tet.vertices;
    let _ = writeln!(out, "4 {} {} {} {}", a, b, c, d);
  }

  let _ = writeln!(out, "CELL_TYPES {}", tets.len());
  for _ in tets {
    let _ = writeln!(out, "{}", VTK_TETRA);
  }

  let _ = writeln!(out, "POINT_DATA {}", values.len());
  let _ = writeln!(out, "SCALARS {} float\nLOOKUP_TABLE default", SCALAR_NAME);
  for v in values {
    let _ = writeln!(out, "{}", v);
  }

  out
}
