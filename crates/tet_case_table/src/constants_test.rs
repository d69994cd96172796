use super::*;

#[test]
fn test_point_layout() {
  assert_eq!(POINT_COUNT, 15);
  assert_eq!(BODY_CENTER, 14);
  assert_eq!(face_center(0), 8);
  assert_eq!(face_center(5), 13);
  assert_eq!(TET_COUNT, 24);
}

#[test]
fn test_faces_share_one_axis_value() {
  for (face, corners) in CUBE_FACES.iter().enumerate() {
    let axis = face / 2;
    let side = face % 2;
    for &corner in corners {
      assert_eq!(
        (corner >> axis) & 1,
        side,
        "Corner {} not on face {}",
        corner,
        face
      );
    }
  }
}

#[test]
fn test_face_boundary_walks_cube_edges() {
  // Consecutive face corners (wrapping) differ in exactly one bit
  for corners in &CUBE_FACES {
    for j in 0..4 {
      let diff = corners[j] ^ corners[(j + 1) % 4];
      assert_eq!(diff.count_ones(), 1, "Face {:?} step {}", corners, j);
    }
  }
}

#[test]
fn test_is_corner() {
  assert!(is_corner(0));
  assert!(is_corner(7));
  assert!(!is_corner(8));
  assert!(!is_corner(BODY_CENTER));
}
