//! Boolean transitive closure by repeated squaring.
//!
//! Row `i` is a bitmask of labels reachable from `i`. Squaring replaces each
//! row by the union of the rows it already reaches, doubling the covered
//! path length, so the fixed point is reached after at most
//! `ceil(log2(n)) + 1` iterations.

use crate::error::CaseTableError;

/// Maximum labels representable with one `u64` row per label.
pub const MAX_CLOSURE_LABELS: usize = u64::BITS as usize;

/// Dense reachability matrix over at most 64 labels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReachMatrix {
  rows: Vec<u64>,
}

impl ReachMatrix {
  /// Adjacency of the kept labels plus a self-loop on each kept label.
  /// Rows of dropped labels stay empty.
  pub fn build<'g>(
    len: usize,
    kept: &[bool],
    neighbors: impl Fn(usize) -> &'g [usize],
  ) -> Result<Self, CaseTableError> {
    if len > MAX_CLOSURE_LABELS {
      return Err(CaseTableError::GraphTooLarge { labels: len });
    }

    let mut rows = vec![0u64; len];
    for u in (0..len).filter(|&u| kept[u]) {
      rows[u] |= 1 << u;
      for &v in neighbors(u).iter().filter(|&&v| kept[v]) {
        rows[u] |= 1 << v;
        rows[v] |= 1 << u;
      }
    }
    Ok(Self { rows })
  }

  /// Boolean product `self * self`.
  pub fn squared(&self) -> Self {
    let rows = self
      .rows
      .iter()
      .map(|&row| {
        let mut out = 0u64;
        let mut bits = row;
        while bits != 0 {
          let k = bits.trailing_zeros() as usize;
          out |= self.rows[k];
          bits &= bits - 1;
        }
        out
      })
      .collect();
    Self { rows }
  }

  /// Square until the matrix no longer changes.
  pub fn into_closure(self) -> Self {
    let mut current = self;
    loop {
      let next = current.squared();
      if next == current {
        return current;
      }
      current = next;
    }
  }

  /// Whether `j` is reachable from `i`.
  #[inline]
  pub fn reaches(&self, i: usize, j: usize) -> bool {
    (self.rows[i] >> j) & 1 == 1
  }

  /// Lowest label reachable from `i`, or `None` for an empty row.
  #[inline]
  pub fn lowest_reachable(&self, i: usize) -> Option<usize> {
    match self.rows[i] {
      0 => None,
      row => Some(row.trailing_zeros() as usize),
    }
  }
}
