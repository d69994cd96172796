//! Tetrahedral cube case table generator.
//!
//! Writes `lut.h` (the `edgeGroup[256]` lookup table) into the working
//! directory, plus `cube.{case}.vtk` and `cube.{case}.dot` per case for
//! manual inspection. Takes no arguments; output is fully deterministic.

use anyhow::{Context, Result};
use rayon::prelude::*;

use tet_case_table::{write_case_diagnostics, CaseTable, GeneratorConfig};

fn main() -> Result<()> {
	let config = GeneratorConfig::default();

	println!(
		"Generating case table (threshold {}, {:?})",
		config.threshold, config.strategy
	);

	let table = CaseTable::generate(&config).context("Case table generation failed")?;

	for report in table.reports() {
		println!(
			"case {:3}: {} disjoint patch(es), {} cut, code 0x{:06x} ({:024b})",
			report.case_mask(),
			report.evaluation.component_count,
			report.evaluation.cut_count(),
			report.code,
			report.code
		);
	}

	let table_path = config.table_path();
	table
		.write(&table_path)
		.with_context(|| format!("Failed to write table: {}", table_path.display()))?;
	println!("\n  ✓ {}", table_path.display());

	if config.write_diagnostics {
		table
			.reports()
			.par_iter()
			.try_for_each(|report| {
				write_case_diagnostics(&config.output_dir, table.geometry(), table.graph(), report)
			})
			.context("Failed to write diagnostics")?;
		println!(
			"  ✓ {} cube.*.vtk / cube.*.dot pairs",
			table.reports().len()
		);
	}

	println!("\nDone! Output written to: {}", config.output_dir.display());

	Ok(())
}
