use std::path::Path;

use anyhow::{Context, Result};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use thiserror::Error;

use super::model::{Cycle, Dataset, Parameters, Sample, CYCLE_COUNT};

// ---------------------------------------------------------------------------
// Sheet layout
// ---------------------------------------------------------------------------
//
// The workbooks follow one fixed layout; nothing is configurable. All
// coordinates below are 1-based, exactly as they read in Excel.

/// Scalar parameter cells as (row, column).
/// Beta sits below delta in the sheet – the order is quirky but it is how
/// the files are laid out, so don't "fix" it.
const EPSILON_CELL: (u32, u32) = (4, 2);
const ALPHA_CELL: (u32, u32) = (5, 2);
const BETA_CELL: (u32, u32) = (8, 2);
const DELTA_CELL: (u32, u32) = (7, 2);
const DT_CELL: (u32, u32) = (9, 2);

/// Inclusive row blocks holding the three oscillation runs.
pub const CYCLE_ROW_BLOCKS: [(u32, u32); CYCLE_COUNT] = [(3, 152), (153, 302), (303, 452)];

/// Series columns within each data row.
const TIME_COL: u32 = 3;
const PREY_COL: u32 = 4;
const PREDATOR_COL: u32 = 5;

#[derive(Debug, Error)]
enum SheetError {
    #[error("workbook contains no worksheets")]
    NoWorksheet,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a dataset from an `.xlsx` workbook. Only the first worksheet is read.
///
/// Hard failures (missing file, corrupt workbook, no worksheet) come back as
/// errors; per-cell problems never do – see [`parse_sheet`].
pub fn load_file(path: &Path) -> Result<Dataset> {
    let mut workbook: Xlsx<_> =
        open_workbook(path).with_context(|| format!("opening {}", path.display()))?;
    let sheet = workbook
        .worksheet_range_at(0)
        .ok_or(SheetError::NoWorksheet)?
        .context("reading first worksheet")?;

    let source_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("workbook")
        .to_string();

    Ok(parse_sheet(&sheet, source_name))
}

// ---------------------------------------------------------------------------
// Sheet parsing
// ---------------------------------------------------------------------------

/// Build a [`Dataset`] from a fully loaded cell range.
///
/// Parsing is deliberately lenient, matching the sheets in the wild: a
/// scalar cell that is missing or non-numeric reads as zero, and a data row
/// where any of the three columns fails to parse is skipped whole.
pub fn parse_sheet(sheet: &Range<Data>, source_name: String) -> Dataset {
    Dataset {
        source_name,
        parameters: read_parameters(sheet),
        cycles: CYCLE_ROW_BLOCKS.map(|(first, last)| read_cycle(sheet, first, last)),
    }
}

fn read_parameters(sheet: &Range<Data>) -> Parameters {
    Parameters {
        epsilon: scalar_cell(sheet, EPSILON_CELL),
        alpha: scalar_cell(sheet, ALPHA_CELL),
        beta: scalar_cell(sheet, BETA_CELL),
        delta: scalar_cell(sheet, DELTA_CELL),
        dt: scalar_cell(sheet, DT_CELL),
    }
}

fn scalar_cell(sheet: &Range<Data>, (row, col): (u32, u32)) -> f64 {
    cell_f64(sheet, row, col).unwrap_or(0.0)
}

/// Read one row block into an aligned pair of series.
///
/// A row contributes to BOTH series or to neither, keeping prey and predator
/// in lock-step.
fn read_cycle(sheet: &Range<Data>, first_row: u32, last_row: u32) -> Cycle {
    let mut cycle = Cycle::default();
    for row in first_row..=last_row {
        let (Some(time), Some(prey), Some(predator)) = (
            cell_f64(sheet, row, TIME_COL),
            cell_f64(sheet, row, PREY_COL),
            cell_f64(sheet, row, PREDATOR_COL),
        ) else {
            continue;
        };
        cycle.prey.push(Sample { time, value: prey });
        cycle.predator.push(Sample { time, value: predator });
    }
    cycle
}

/// Fetch a cell by 1-based sheet coordinates and coerce it to `f64`.
///
/// Numeric strings count (the sheets sometimes store numbers as text);
/// everything else – booleans, errors, dates, empty cells – does not.
fn cell_f64(sheet: &Range<Data>, row: u32, col: u32) -> Option<f64> {
    match sheet.get_value((row - 1, col - 1))? {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
