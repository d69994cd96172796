//! Disjoint-set (union-find) with path compression.

#[derive(Debug)]
pub(crate) struct UnionFind {
  parent: Vec<u32>,
}

impl UnionFind {
  pub fn new(n: usize) -> Self {
    Self {
      parent: (0..n as u32).collect(),
    }
  }

  pub fn find(&mut self, x: u32) -> u32 {
    let idx = x as usize;
    let p = self.parent[idx];
    if p != x {
      let root = self.find(p);
      self.parent[idx] = root;
    }
    self.parent[idx]
  }

  /// Order-dependent union: the smaller index always becomes the representative.
  /// Returns `true` if `a` and `b` were in different sets.
  pub fn union_keep_min(&mut self, a: u32, b: u32) -> bool {
    let ra = self.find(a);
    let rb = self.find(b);
    if ra == rb {
      return false;
    }
    let (min, max) = if ra <= rb { (ra, rb) } else { (rb, ra) };
    self.parent[max as usize] = min;
    true
  }
}
