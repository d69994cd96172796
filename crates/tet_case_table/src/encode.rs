//! Packing a case's cube-edge patch labels into a 24-bit code.
//!
//! # Edge Layout
//!
//! ```text
//! 12 edges total (4 per axis), index from the two fixed coordinates:
//!
//! X-axis edges (index = y + 2z):
//!   Edge 0:  [0,1]    Edge 1:  [2,3]    Edge 2:  [4,5]    Edge 3:  [6,7]
//!
//! Y-axis edges (index = 4 + x + 2z):
//!   Edge 4:  [0,2]    Edge 5:  [1,3]    Edge 6:  [4,6]    Edge 7:  [5,7]
//!
//! Z-axis edges (index = 8 + x + 2y):
//!   Edge 8:  [0,4]    Edge 9:  [1,5]    Edge 10: [2,6]    Edge 11: [3,7]
//! ```
//!
//! # Code Layout
//!
//! ```text
//! bits: 23 22 | 21 20 | ... | 3 2 | 1 0
//!       edge11  edge10        edge1 edge0
//!
//! field 0..=2 : patch 1..=3
//! field 3     : edge is cut
//! ```

use crate::case_eval::{CaseEvaluation, Mark};
use crate::constants::{is_corner, BITS_PER_EDGE, CUBE_EDGE_COUNT, CUT_FIELD};
use crate::edge_graph::EdgeGraph;
use crate::error::CaseTableError;

/// Endpoint corners of each cube edge, by edge index.
pub const CUBE_EDGE_CORNERS: [[usize; 2]; CUBE_EDGE_COUNT] = [
  [0, 1], // Edge 0:  X axis at Y=0, Z=0
  [2, 3], // Edge 1:  X axis at Y=1, Z=0
  [4, 5], // Edge 2:  X axis at Y=0, Z=1
  [6, 7], // Edge 3:  X axis at Y=1, Z=1
  [0, 2], // Edge 4:  Y axis at X=0, Z=0
  [1, 3], // Edge 5:  Y axis at X=1, Z=0
  [4, 6], // Edge 6:  Y axis at X=0, Z=1
  [5, 7], // Edge 7:  Y axis at X=1, Z=1
  [0, 4], // Edge 8:  Z axis at X=0, Y=0
  [1, 5], // Edge 9:  Z axis at X=1, Y=0
  [2, 6], // Edge 10: Z axis at X=0, Y=1
  [3, 7], // Edge 11: Z axis at X=1, Y=1
];

/// Largest patch id that fits in a field.
const MAX_ENCODED_COMPONENT: u32 = CUT_FIELD;

/// Index (0..12) of the cube edge between corners `v1` and `v2`.
///
/// The corners must differ in exactly one coordinate bit.
pub fn cube_edge_index(v1: usize, v2: usize) -> Result<usize, CaseTableError> {
  if !is_corner(v1) || !is_corner(v2) {
    return Err(CaseTableError::MisalignedCubeEdge { v1, v2 });
  }

  let (x1, y1, z1) = (v1 & 1, (v1 >> 1) & 1, v1 >> 2);
  let (x2, y2, z2) = (v2 & 1, (v2 >> 1) & 1, v2 >> 2);

  match (x1 != x2, y1 != y2, z1 != z2) {
    (true, false, false) => Ok(y1 + 2 * z1),
    (false, true, false) => Ok(4 + x1 + 2 * z1),
    (false, false, true) => Ok(8 + x1 + 2 * y1),
    _ => Err(CaseTableError::MisalignedCubeEdge { v1, v2 }),
  }
}

/// Two-bit field for a cube edge's mark.
fn field_for(mark: Mark, case_mask: u8, label: usize) -> Result<u32, CaseTableError> {
  match mark {
    Mark::Cut => Ok(CUT_FIELD),
    Mark::Component(n) if (1..=MAX_ENCODED_COMPONENT).contains(&n) => Ok(n - 1),
    Mark::Component(component) => Err(CaseTableError::ComponentOverflow {
      case_mask,
      label,
      component,
    }),
    Mark::Unlabeled => Err(CaseTableError::UnlabeledEdge { case_mask, label }),
  }
}

/// Pack the marks of the 12 cube edges into a 24-bit code.
pub fn encode(eval: &CaseEvaluation, graph: &EdgeGraph) -> Result<u32, CaseTableError> {
  let mut code = 0u32;

  for label in graph.cube_edge_labels() {
    let (v1, v2) = graph.edge(label).endpoints();
    let edge = cube_edge_index(v1, v2)?;
    let field = field_for(eval.mark(label), eval.case_mask, label)?;

    #[cfg(feature = "tracing")]
    tracing::trace!(case_mask = eval.case_mask, v1, v2, edge, field, "cube edge");

    code |= field << (BITS_PER_EDGE * edge as u32);
  }

  Ok(code)
}

/// Two-bit field of cube edge `edge` in `code`.
#[inline(always)]
pub const fn edge_field(code: u32, edge: usize) -> u32 {
  (code >> (BITS_PER_EDGE * edge as u32)) & 0b11
}

#[cfg(test)]
#[path = "encode_test.rs"]
mod encode_test;
