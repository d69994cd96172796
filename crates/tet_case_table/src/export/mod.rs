//! Per-case diagnostics files for manual inspection.
//!
//! # Module Structure
//!
//! - [`vtk`]: tetrahedral mesh with sample values (`cube.{case}.vtk`)
//! - [`dot`]: kept-edge adjacency graph (`cube.{case}.dot`)
//!
//! Files for different cases are independent and may be written in any
//! order.

pub mod dot;
pub mod vtk;

use std::path::{Path, PathBuf};

use crate::edge_graph::EdgeGraph;
use crate::error::CaseTableError;
use crate::geometry::Geometry;
use crate::table::CaseReport;

/// Path of the VTK file for `case_mask` inside `dir`.
pub fn vtk_path(dir: &Path, case_mask: u8) -> PathBuf {
  dir.join(format!("cube.{}.vtk", case_mask))
}

/// Path of the Graphviz file for `case_mask` inside `dir`.
pub fn dot_path(dir: &Path, case_mask: u8) -> PathBuf {
  dir.join(format!("cube.{}.dot", case_mask))
}

/// Write both diagnostics files for one case.
pub fn write_case_diagnostics(
  dir: &Path,
  geometry: &Geometry,
  graph: &EdgeGraph,
  report: &CaseReport,
) -> Result<(), CaseTableError> {
  let case_mask = report.case_mask();

  let dot = dot::render(graph, &report.evaluation.marks);
  let path = dot_path(dir, case_mask);
  std::fs::write(&path, dot).map_err(|e| CaseTableError::io(&path, e))?;

  let vtk = vtk::render(geometry, &report.evaluation.values);
  let path = vtk_path(dir, case_mask);
  std::fs::write(&path, vtk).map_err(|e| CaseTableError::io(&path, e))?;

  Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
