use super::*;
use crate::case_eval::{evaluate, sample_values};
use crate::config::GeneratorConfig;
use crate::edge_graph::build_edges;
use crate::geometry::build_geometry;

fn graph() -> EdgeGraph {
  build_edges(&build_geometry().tetrahedra).expect("fixed geometry builds")
}

fn code_for(case_mask: u8) -> u32 {
  let graph = graph();
  let eval = evaluate(case_mask, &graph, &GeneratorConfig::default()).unwrap();
  encode(&eval, &graph).unwrap()
}

/// Evaluation with every label set to `mark`.
fn uniform_eval(mark: Mark) -> CaseEvaluation {
  CaseEvaluation {
    case_mask: 0x42,
    values: sample_values(0x42),
    marks: vec![mark; 50],
    component_count: 1,
  }
}

#[test]
fn test_cube_edge_index_matches_table() {
  for (edge, &[v1, v2]) in CUBE_EDGE_CORNERS.iter().enumerate() {
    assert_eq!(cube_edge_index(v1, v2).unwrap(), edge);
    assert_eq!(cube_edge_index(v2, v1).unwrap(), edge);
  }
}

#[test]
fn test_cube_edge_index_rejects_non_edges() {
  for (v1, v2) in [(0, 3), (0, 7), (5, 5), (1, 6), (0, 8), (14, 2)] {
    assert!(
      matches!(
        cube_edge_index(v1, v2),
        Err(CaseTableError::MisalignedCubeEdge { .. })
      ),
      "({}, {}) accepted",
      v1,
      v2
    );
  }
}

#[test]
fn test_uniform_cases_encode_to_zero() {
  assert_eq!(code_for(0x00), 0x000000);
  assert_eq!(code_for(0xff), 0x000000);
}

#[test]
fn test_single_corner_code() {
  // Edges 0, 4 and 8 touch corner 0
  let code = code_for(0x01);
  assert_eq!(code, 0x030303);
  for edge in 0..CUBE_EDGE_COUNT {
    let expected = if matches!(edge, 0 | 4 | 8) { 3 } else { 0 };
    assert_eq!(edge_field(code, edge), expected, "edge {}", edge);
  }
}

#[test]
fn test_corner_pair_code() {
  // Corners 0 and 1 set: x-edge [0,1] is kept, their y and z edges are cut
  assert_eq!(code_for(0x03), 0x0f0f00);
}

#[test]
fn test_code_fits_24_bits() {
  let graph = graph();
  let config = GeneratorConfig::default();
  for case_mask in 0..=255u8 {
    let eval = evaluate(case_mask, &graph, &config).unwrap();
    let code = encode(&eval, &graph).unwrap();
    assert_eq!(code >> 24, 0, "case {} overflows: {:#x}", case_mask, code);
    // Cut fields are exactly the straddling cube edges
    for (edge, &[v1, v2]) in CUBE_EDGE_CORNERS.iter().enumerate() {
      let straddles = ((case_mask >> v1) & 1) != ((case_mask >> v2) & 1);
      assert_eq!(edge_field(code, edge) == CUT_FIELD, straddles);
    }
  }
}

#[test]
fn test_all_cut_encodes_to_all_ones() {
  let eval = uniform_eval(Mark::Cut);
  assert_eq!(encode(&eval, &graph()).unwrap(), 0xffffff);
}

#[test]
fn test_third_component_is_two() {
  let eval = uniform_eval(Mark::Component(3));
  assert_eq!(encode(&eval, &graph()).unwrap(), 0xaaaaaa);
}

#[test]
fn test_fourth_component_overflows() {
  let eval = uniform_eval(Mark::Component(4));
  match encode(&eval, &graph()) {
    Err(CaseTableError::ComponentOverflow {
      case_mask,
      component,
      ..
    }) => {
      assert_eq!(case_mask, 0x42);
      assert_eq!(component, 4);
    }
    other => panic!("expected overflow, got {:?}", other),
  }
}

#[test]
fn test_unlabeled_cube_edge_is_rejected() {
  let eval = uniform_eval(Mark::Unlabeled);
  assert!(matches!(
    encode(&eval, &graph()),
    Err(CaseTableError::UnlabeledEdge { case_mask: 0x42, .. })
  ));
}
