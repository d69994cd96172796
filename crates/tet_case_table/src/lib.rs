//! tet_case_table - patch lookup table for tetrahedral cube isosurfaces
//!
//! The unit cube is split into 24 tetrahedra around its face centers and
//! body center. For every one of the 256 inside/outside assignments of the
//! cube's corners, this crate finds how the 50 edges of that decomposition
//! group into connected patches once edges crossing the isosurface are
//! removed, and packs the patch of each of the 12 cube edges into a 24-bit
//! code.
//!
//! # Pipeline
//!
//! - **Geometry**: 15 sample points, 24 tetrahedra (built once)
//! - **Edge graph**: dense edge labels, tetrahedron-sharing adjacency (built
//!   once)
//! - **Case evaluation**: sample values, cut edges, patch labeling (per case)
//! - **Encoding**: 2 bits per cube edge (per case)
//! - **Table**: `edgeGroup[256]` C fragment plus per-case diagnostics
//!
//! # Example
//!
//! ```no_run
//! use tet_case_table::{CaseTable, GeneratorConfig};
//!
//! let config = GeneratorConfig::default();
//! let table = CaseTable::generate(&config)?;
//! assert_eq!(table.code(0x01), 0x030303);
//! table.write(&config.table_path())?;
//! # Ok::<(), tet_case_table::CaseTableError>(())
//! ```

pub mod case_eval;
pub mod components;
pub mod config;
pub mod constants;
pub mod edge_graph;
pub mod encode;
pub mod error;
pub mod export;
pub mod geometry;
pub mod table;

// Re-export commonly used items
pub use case_eval::{evaluate, sample_values, CaseEvaluation, Mark};
pub use config::{ComponentStrategy, GeneratorConfig};
pub use constants::{CASE_COUNT, DEFAULT_THRESHOLD, EXPECTED_EDGE_COUNT, POINT_COUNT};
pub use edge_graph::{build_edges, EdgeGraph, EdgeId, Label};
pub use encode::{cube_edge_index, edge_field, encode, CUBE_EDGE_CORNERS};
pub use error::CaseTableError;
pub use export::write_case_diagnostics;
pub use geometry::{build_geometry, Geometry, Tetrahedron};
pub use table::{CaseReport, CaseTable};
