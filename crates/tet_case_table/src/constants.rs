//! Point layout and fixed parameters of the tetrahedral cube.
//!
//! # Point Indices
//!
//! ```text
//!       6──────7         Corners (binary ZYX):
//!      /│     /│           0=(0,0,0)  1=(1,0,0)  2=(0,1,0)  3=(1,1,0)
//!     4─┼────5 │           4=(0,0,1)  5=(1,0,1)  6=(0,1,1)  7=(1,1,1)
//!     │ 2────┼─3
//!     │/     │/          Face centers: 8 + face
//!     0──────1           Body center:  14
//! ```
//!
//! # Face Layout
//!
//! ```text
//! Face 0: x=0  [0, 2, 6, 4]
//! Face 1: x=1  [1, 5, 7, 3]
//! Face 2: y=0  [0, 4, 5, 1]
//! Face 3: y=1  [2, 3, 7, 6]
//! Face 4: z=0  [0, 1, 3, 2]
//! Face 5: z=1  [4, 6, 7, 5]
//! ```
//!
//! Corner order within a face walks its boundary, so consecutive entries
//! (wrapping) are the face's four cube edges.

/// Number of cube corners.
pub const CORNER_COUNT: usize = 8;

/// Number of cube faces.
pub const FACE_COUNT: usize = 6;

/// Index of the first face-center point.
pub const FIRST_FACE_CENTER: usize = CORNER_COUNT;

/// Index of the body-center point.
pub const BODY_CENTER: usize = FIRST_FACE_CENTER + FACE_COUNT;

/// Total sample points (8 corners + 6 face centers + 1 body center).
pub const POINT_COUNT: usize = BODY_CENTER + 1;

/// Tetrahedra per face (one per face edge).
pub const TETS_PER_FACE: usize = 4;

/// Total tetrahedra in the decomposition.
pub const TET_COUNT: usize = FACE_COUNT * TETS_PER_FACE;

/// Unique edges in the decomposition: 12 cube edges, 24 corner-to-face,
/// 6 face-to-body and 8 corner-to-body.
pub const EXPECTED_EDGE_COUNT: usize = 50;

/// Number of cube edges carried in a packed code.
pub const CUBE_EDGE_COUNT: usize = 12;

/// Number of corner masks (one table entry each).
pub const CASE_COUNT: usize = 1 << CORNER_COUNT;

/// Default iso threshold.
///
/// Deliberately not the 0.5 midpoint: face centers with two set corners
/// (0.5) and the body center never exceed it, which changes the cut set.
pub const DEFAULT_THRESHOLD: f64 = 0.7;

/// Bits per cube edge in a packed code.
pub const BITS_PER_EDGE: u32 = 2;

/// Field value stored for a cut cube edge.
pub const CUT_FIELD: u32 = 3;

/// Corner indices of each face, in boundary order.
pub const CUBE_FACES: [[usize; 4]; FACE_COUNT] = [
  [0, 2, 6, 4], // x = 0
  [1, 5, 7, 3], // x = 1
  [0, 4, 5, 1], // y = 0
  [2, 3, 7, 6], // y = 1
  [0, 1, 3, 2], // z = 0
  [4, 6, 7, 5], // z = 1
];

/// Point index of the center of `face`.
#[inline(always)]
pub const fn face_center(face: usize) -> usize {
  FIRST_FACE_CENTER + face
}

/// Whether point `p` is a cube corner.
#[inline(always)]
pub const fn is_corner(p: usize) -> bool {
  p < CORNER_COUNT
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
