//! Full 256-entry table generation and rendering.
//!
//! Geometry and the edge graph are built once and shared read-only; cases
//! are evaluated in parallel and collected back in case order, since the
//! rendered table is positional.

use std::fmt::Write as _;
use std::path::Path;

use rayon::prelude::*;

use crate::case_eval::{evaluate, CaseEvaluation};
use crate::config::GeneratorConfig;
use crate::constants::CASE_COUNT;
use crate::edge_graph::{build_edges, EdgeGraph};
use crate::encode::encode;
use crate::error::CaseTableError;
use crate::geometry::{build_geometry, Geometry};

/// Name of the generated C array.
pub const TABLE_NAME: &str = "edgeGroup";

/// Entries per rendered line.
pub const ENTRIES_PER_LINE: usize = 8;

/// One evaluated and encoded case.
#[derive(Clone, Debug, PartialEq)]
pub struct CaseReport {
  pub evaluation: CaseEvaluation,
  pub code: u32,
}

impl CaseReport {
  #[inline]
  pub fn case_mask(&self) -> u8 {
    self.evaluation.case_mask
  }
}

/// The generated lookup table together with the geometry it came from.
#[derive(Clone, Debug)]
pub struct CaseTable {
  geometry: Geometry,
  graph: EdgeGraph,
  reports: Vec<CaseReport>,
}

impl CaseTable {
  /// Evaluate and encode all 256 cases.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "table::generate"))]
  pub fn generate(config: &GeneratorConfig) -> Result<Self, CaseTableError> {
    let geometry = build_geometry();
    let graph = build_edges(&geometry.tetrahedra)?;

    let reports = (0..CASE_COUNT)
      .into_par_iter()
      .map(|case| {
        let evaluation = evaluate(case as u8, &graph, config)?;
        let code = encode(&evaluation, &graph)?;
        Ok(CaseReport { evaluation, code })
      })
      .collect::<Result<Vec<_>, CaseTableError>>()?;

    #[cfg(feature = "tracing")]
    tracing::info!(
      cases = reports.len(),
      max_patches = ?reports.iter().map(|r| r.evaluation.component_count).max(),
      "generated case table"
    );

    Ok(Self {
      geometry,
      graph,
      reports,
    })
  }

  #[inline]
  pub fn geometry(&self) -> &Geometry {
    &self.geometry
  }

  #[inline]
  pub fn graph(&self) -> &EdgeGraph {
    &self.graph
  }

  /// Reports in case order.
  #[inline]
  pub fn reports(&self) -> &[CaseReport] {
    &self.reports
  }

  /// Packed code of one case.
  #[inline]
  pub fn code(&self, case_mask: u8) -> u32 {
    self.reports[case_mask as usize].code
  }

  /// All packed codes in case order.
  pub fn codes(&self) -> Vec<u32> {
    self.reports.iter().map(|r| r.code).collect()
  }

  /// Render the C source fragment declaring `edgeGroup[256]`.
  pub fn render(&self) -> String {
    let mut out = String::with_capacity(32 + self.reports.len() * 10);
    let _ = write!(out, "static unsigned int {}[{}] = {{", TABLE_NAME, self.reports.len());
    for (case, report) in self.reports.iter().enumerate() {
      if case % ENTRIES_PER_LINE == 0 {
        out.push_str("\n\t");
      }
      let _ = write!(out, "0x{:06x},", report.code);
    }
    out.push_str("\n};\n");
    out
  }

  /// Write the rendered fragment to `path`.
  pub fn write(&self, path: &Path) -> Result<(), CaseTableError> {
    std::fs::write(path, self.render()).map_err(|e| CaseTableError::io(path, e))
  }
}

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;
