//! Fixed tetrahedral decomposition of the unit cube.
//!
//! Each face is fanned into four triangles around its center, and each
//! triangle is coned to the body center:
//!
//! ```text
//!   face f, local vertex j:
//!
//!   c[j+1] ────── c[j]          tet = (c[j+1], c[j], 8+f, 14)
//!        \      /
//!         \ F  /                F = face center (8+f)
//!          \  /                 B = body center (14), behind the face
//!           \/
//! ```

use glam::DVec3;

use crate::constants::{BODY_CENTER, CORNER_COUNT, CUBE_FACES, FACE_COUNT, TETS_PER_FACE, TET_COUNT};

/// Four point indices spanning one tetrahedron.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tetrahedron {
  pub vertices: [usize; 4],
}

impl Tetrahedron {
  pub const fn new(a: usize, b: usize, c: usize, d: usize) -> Self {
    Self {
      vertices: [a, b, c, d],
    }
  }

  /// The six vertex pairs in canonical order:
  /// (a,b), (a,c), (a,d), (b,c), (b,d), (c,d).
  ///
  /// Edge discovery order depends on this ordering.
  #[inline]
  pub fn edge_pairs(&self) -> [(usize, usize); 6] {
    let [a, b, c, d] = self.vertices;
    [(a, b), (a, c), (a, d), (b, c), (b, d), (c, d)]
  }
}

/// Sample points and tetrahedra of the decomposed cube.
#[derive(Clone, Debug)]
pub struct Geometry {
  pub points: Vec<DVec3>,
  pub tetrahedra: Vec<Tetrahedron>,
}

/// Get corner position within unit cube.
#[inline(always)]
pub fn corner_position(corner: usize) -> DVec3 {
  DVec3::new(
    (corner & 1) as f64,
    ((corner >> 1) & 1) as f64,
    ((corner >> 2) & 1) as f64,
  )
}

/// Build the 15 sample points and 24 tetrahedra.
pub fn build_geometry() -> Geometry {
  let mut points: Vec<DVec3> = (0..CORNER_COUNT).map(corner_position).collect();

  for face in &CUBE_FACES {
    let sum: DVec3 = face.iter().map(|&c| points[c]).sum();
    points.push(sum * 0.25);
  }

  points.push(DVec3::splat(0.5));
  debug_assert_eq!(points.len(), BODY_CENTER + 1);

  let mut tetrahedra = Vec::with_capacity(TET_COUNT);
  for (face, corners) in CUBE_FACES.iter().enumerate() {
    for j in 0..TETS_PER_FACE {
      tetrahedra.push(Tetrahedron::new(
        corners[(j + 1) % TETS_PER_FACE],
        corners[j],
        CORNER_COUNT + face,
        BODY_CENTER,
      ));
    }
  }
  debug_assert_eq!(tetrahedra.len(), FACE_COUNT * TETS_PER_FACE);

  Geometry { points, tetrahedra }
}

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;
