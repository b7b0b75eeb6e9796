// ---------------------------------------------------------------------------
// Sample – one measurement of one series
// ---------------------------------------------------------------------------

/// A single (time, value) measurement of one population series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: f64,
    pub value: f64,
}

// ---------------------------------------------------------------------------
// Cycle – one contiguous block of rows (one oscillation run)
// ---------------------------------------------------------------------------

/// One predator-prey oscillation run: two series aligned by index.
///
/// Both series come from the same row block, and a row only contributes when
/// all of its cells parse, so the two vectors always have equal length.
#[derive(Debug, Clone, Default)]
pub struct Cycle {
    pub prey: Vec<Sample>,
    pub predator: Vec<Sample>,
}

impl Cycle {
    /// Number of rows that parsed cleanly in this cycle's block.
    pub fn len(&self) -> usize {
        self.prey.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prey.is_empty()
    }
}

/// Number of cycle blocks in a workbook.
pub const CYCLE_COUNT: usize = 3;

// ---------------------------------------------------------------------------
// Parameters – scalar model coefficients from fixed cells
// ---------------------------------------------------------------------------

/// Lotka-Volterra coefficients read from the workbook's parameter cells.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Parameters {
    pub epsilon: f64,
    pub alpha: f64,
    pub beta: f64,
    pub delta: f64,
    pub dt: f64,
}

impl Parameters {
    /// Label/value pairs for the parameters panel.
    ///
    /// Each field has its own fixed display precision, matching how the
    /// source sheets were produced (delta is tiny, hence five decimals).
    pub fn display_fields(&self) -> [(&'static str, String); 5] {
        [
            ("ε", format!("{:.2}", self.epsilon)),
            ("α", format!("{:.3}", self.alpha)),
            ("β", format!("{:.2}", self.beta)),
            ("δ", format!("{:.5}", self.delta)),
            ("dt", format!("{:.2}", self.dt)),
        ]
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded workbook
// ---------------------------------------------------------------------------

/// Everything extracted from one workbook. Rebuilt from scratch on every
/// load; held in memory only for the UI session.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// File name of the source workbook (for the top bar).
    pub source_name: String,
    pub parameters: Parameters,
    pub cycles: [Cycle; CYCLE_COUNT],
}

impl Dataset {
    /// Total cleanly parsed rows across all cycles.
    pub fn total_samples(&self) -> usize {
        self.cycles.iter().map(Cycle::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_fields_use_per_field_precision() {
        let params = Parameters {
            epsilon: 0.3,
            alpha: 0.1234,
            beta: 0.0149,
            delta: 0.00225,
            dt: 0.1,
        };
        let fields = params.display_fields();
        assert_eq!(fields[0], ("ε", "0.30".to_string()));
        assert_eq!(fields[1], ("α", "0.123".to_string()));
        assert_eq!(fields[2], ("β", "0.01".to_string()));
        assert_eq!(fields[3], ("δ", "0.00225".to_string()));
        assert_eq!(fields[4], ("dt", "0.10".to_string()));
    }

    #[test]
    fn unparsed_scalar_displays_as_zero_at_field_precision() {
        // The loader maps bad cells to 0.0; the panel must still show a
        // properly formatted zero.
        let fields = Parameters::default().display_fields();
        assert_eq!(fields[0].1, "0.00");
        assert_eq!(fields[3].1, "0.00000");
    }

    #[test]
    fn total_samples_sums_all_cycles() {
        let sample = Sample { time: 0.0, value: 1.0 };
        let cycle = Cycle {
            prey: vec![sample; 4],
            predator: vec![sample; 4],
        };
        let dataset = Dataset {
            source_name: "test.xlsx".into(),
            parameters: Parameters::default(),
            cycles: [cycle.clone(), cycle, Cycle::default()],
        };
        assert_eq!(dataset.total_samples(), 8);
    }
}
