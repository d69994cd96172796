//! Error types for case table generation.
//!
//! Every variant except [`CaseTableError::Io`] is an internal-consistency
//! failure: the fixed geometry or the labeling algorithm is wrong and the
//! table must not be written.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building, evaluating, encoding or writing the table.
#[derive(Debug, Error)]
pub enum CaseTableError {
  /// The tetrahedral decomposition produced an unexpected number of edges.
  #[error("edge graph has {found} labels, expected {expected}")]
  EdgeCountMismatch { expected: usize, found: usize },

  /// A kept edge was left without a component id after labeling.
  #[error("case {case_mask}: kept edge label {label} has no component id")]
  UnlabeledEdge { case_mask: u8, label: usize },

  /// A cube edge belongs to a component that does not fit in two bits.
  #[error("case {case_mask}: cube edge label {label} is in component {component}, at most 3 fit")]
  ComponentOverflow {
    case_mask: u8,
    label: usize,
    component: u32,
  },

  /// Two corners do not differ in exactly one axis.
  #[error("corners {v1} and {v2} do not span a single cube edge")]
  MisalignedCubeEdge { v1: usize, v2: usize },

  /// The boolean closure stores rows as 64-bit masks.
  #[error("boolean closure supports at most 64 labels, graph has {labels}")]
  GraphTooLarge { labels: usize },

  /// Writing an artifact failed.
  #[error("failed to write {}", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}

impl CaseTableError {
  pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
    Self::Io {
      path: path.into(),
      source,
    }
  }
}
