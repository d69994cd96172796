use super::*;
use crate::case_eval::Mark;
use crate::config::GeneratorConfig;
use crate::table::CaseTable;

fn table() -> CaseTable {
  CaseTable::generate(&GeneratorConfig::default()).expect("table generates")
}

#[test]
fn test_file_names() {
  let dir = Path::new("out");
  assert_eq!(vtk_path(dir, 7), PathBuf::from("out/cube.7.vtk"));
  assert_eq!(dot_path(dir, 255), PathBuf::from("out/cube.255.dot"));
}

#[test]
fn test_vtk_sections() {
  let table = table();
  let report = &table.reports()[0x01];
  let vtk = vtk::render(table.geometry(), &report.evaluation.values);
  let lines: Vec<&str> = vtk.lines().collect();

  assert_eq!(lines[0], "# vtk DataFile Version 3.0");
  assert_eq!(lines[3], "DATASET UNSTRUCTURED_GRID");
  assert_eq!(lines[4], "POINTS 15 float");
  assert_eq!(lines[5], "0 0 0");
  assert_eq!(lines[6], "1 0 0");
  assert_eq!(lines[13], "0 0.5 0.5");
  assert_eq!(lines[19], "0.5 0.5 0.5");
  assert_eq!(lines[20], "CELLS 24 120");
  assert_eq!(lines[21], "4 2 0 8 14");
  assert_eq!(lines[45], "CELL_TYPES 24");
  assert!(lines[46..70].iter().all(|&l| l == "10"));
  assert_eq!(lines[70], "POINT_DATA 15");
  assert_eq!(lines[71], "SCALARS u float");
  assert_eq!(lines[72], "LOOKUP_TABLE default");
  assert_eq!(lines[73], "1");
  assert_eq!(lines[74], "0");
  assert_eq!(lines[87], "0.125");
  assert_eq!(lines.len(), 88);
}

#[test]
fn test_dot_uniform_case_lists_every_label() {
  let table = table();
  let graph = table.graph();
  let dot = dot::render(graph, &table.reports()[0].evaluation.marks);

  assert!(dot.starts_with("strict graph cube {\n"));
  assert!(dot.ends_with("}\n}\n"));
  assert_eq!(dot.matches(" -- {").count(), graph.len());
  assert_eq!(dot.matches("[style = bold];").count(), 12);
  // First label is the cube edge 0-2
  assert!(dot.contains("\ne0_2 [style = bold];\ne0_2 -- {"));
}

#[test]
fn test_dot_omits_cut_edges() {
  let table = table();
  let graph = table.graph();
  let marks = &table.reports()[0x01].evaluation.marks;
  let dot = dot::render(graph, marks);

  let kept = marks.iter().filter(|m| !m.is_cut()).count();
  assert_eq!(dot.matches(" -- {").count(), kept);
  // Nothing touching corner 0 survives
  for name in ["e0_1", "e0_2", "e0_4", "e0_8", "e0_10", "e0_12", "e0_14"] {
    assert!(!dot.contains(&format!("{} ", name)), "{} present", name);
    assert!(!dot.contains(&format!("{} --", name)), "{} present", name);
  }
  assert_eq!(dot.matches("[style = bold];").count(), 9);
}

#[test]
fn test_dot_all_cut_is_empty_graph() {
  let table = table();
  let marks = vec![Mark::Cut; table.graph().len()];
  assert_eq!(dot::render(table.graph(), &marks), "strict graph cube {\n}\n");
}

#[test]
fn test_write_case_diagnostics() {
  let dir = std::env::temp_dir().join(format!("tet_case_diag_{}", std::process::id()));
  std::fs::create_dir_all(&dir).unwrap();

  let table = table();
  let report = &table.reports()[0x81];
  write_case_diagnostics(&dir, table.geometry(), table.graph(), report).unwrap();

  let vtk = std::fs::read_to_string(vtk_path(&dir, 0x81)).unwrap();
  let dot = std::fs::read_to_string(dot_path(&dir, 0x81)).unwrap();
  assert_eq!(vtk, vtk::render(table.geometry(), &report.evaluation.values));
  assert_eq!(dot, dot::render(table.graph(), &report.evaluation.marks));

  std::fs::remove_dir_all(&dir).unwrap();
}
