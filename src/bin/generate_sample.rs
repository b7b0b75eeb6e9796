//! Writes a sample population workbook in the layout the viewer expects:
//! parameter cells in column B (epsilon row 4, alpha row 5, delta row 7,
//! beta row 8, dt row 9) and 450 data rows at rows 3–452, columns C/D/E.

use rust_xlsxwriter::{Workbook, XlsxError};

const EPSILON: f64 = 0.3; // predator mortality
const ALPHA: f64 = 0.25; // prey growth
const BETA: f64 = 0.01; // predation rate
const DELTA: f64 = 0.00225; // predator gain per prey eaten
const DT: f64 = 0.1;

const STEPS: usize = 450;
const FIRST_DATA_ROW: u32 = 3; // 1-based sheet row

/// Forward-Euler integration of the Lotka-Volterra equations.
fn simulate(steps: usize) -> Vec<(f64, f64, f64)> {
    let mut prey = 80.0_f64;
    let mut predator = 30.0_f64;

    (0..steps)
        .map(|i| {
            let t = i as f64 * DT;
            let row = (t, prey, predator);
            let d_prey = (ALPHA * prey - BETA * prey * predator) * DT;
            let d_predator = (DELTA * prey * predator - EPSILON * predator) * DT;
            prey += d_prey;
            predator += d_predator;
            row
        })
        .collect()
}

fn main() -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    // Parameter labels and values. rust_xlsxwriter rows are 0-based, so
    // sheet row 4 is index 3.
    let parameters = [
        (3, "epsilon", EPSILON),
        (4, "alpha", ALPHA),
        (6, "delta", DELTA),
        (7, "beta", BETA),
        (8, "dt", DT),
    ];
    for (row, label, value) in parameters {
        sheet.write_string(row, 0, label)?;
        sheet.write_number(row, 1, value)?;
    }

    sheet.write_string(1, 2, "t")?;
    sheet.write_string(1, 3, "prey")?;
    sheet.write_string(1, 4, "predator")?;

    for (i, (t, prey, predator)) in simulate(STEPS).into_iter().enumerate() {
        let row = FIRST_DATA_ROW - 1 + i as u32;
        sheet.write_number(row, 2, t)?;
        sheet.write_number(row, 3, prey)?;
        sheet.write_number(row, 4, predator)?;
    }

    let output_path = "sample_cycles.xlsx";
    workbook.save(output_path)?;

    println!("Wrote {STEPS} rows (3 cycle blocks of 150) to {output_path}");
    Ok(())
}
