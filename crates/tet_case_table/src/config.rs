//! GeneratorConfig - threshold, labeling strategy and output locations.

use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_THRESHOLD;

/// How connected components of the kept-edge subgraph are found.
///
/// Both strategies produce the same partition and the same
/// lowest-label-first numbering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ComponentStrategy {
  /// Disjoint-set pass over the adjacency lists.
  #[default]
  UnionFind,

  /// Repeated squaring of the boolean reachability matrix until it stops
  /// changing. Limited to 64 labels.
  BooleanClosure,
}

/// Configuration for table generation and artifact output.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
  /// A point is "inside" when its value is strictly above this.
  pub threshold: f64,

  /// Component labeling algorithm.
  pub strategy: ComponentStrategy,

  /// Directory receiving the table and diagnostics files.
  pub output_dir: PathBuf,

  /// File name of the generated table fragment.
  pub table_file_name: String,

  /// Write `cube.{case}.vtk` / `cube.{case}.dot` alongside the table.
  pub write_diagnostics: bool,
}

impl GeneratorConfig {
  /// Full path of the generated table fragment.
  #[inline]
  pub fn table_path(&self) -> PathBuf {
    self.output_dir.join(&self.table_file_name)
  }

  pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
    self.output_dir = dir.as_ref().to_path_buf();
    self
  }

  pub fn with_strategy(mut self, strategy: ComponentStrategy) -> Self {
    self.strategy = strategy;
    self
  }
}

impl Default for GeneratorConfig {
  fn default() -> Self {
    Self {
      threshold: DEFAULT_THRESHOLD,
      strategy: ComponentStrategy::default(),
      output_dir: PathBuf::from("."),
      table_file_name: "lut.h".to_string(),
      write_diagnostics: true,
    }
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
