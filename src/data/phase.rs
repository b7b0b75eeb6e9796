use super::model::Cycle;

// ---------------------------------------------------------------------------
// Phase-plane derivation
// ---------------------------------------------------------------------------

/// Project one cycle onto the phase plane: point i is
/// (prey population, predator population) at sample i, with the time axis
/// dropped. Output length is bounded by the shorter series.
pub fn phase_points(cycle: &Cycle) -> Vec<[f64; 2]> {
    cycle
        .prey
        .iter()
        .zip(&cycle.predator)
        .map(|(prey, predator)| [prey.value, predator.value])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Sample;

    fn series(values: &[f64]) -> Vec<Sample> {
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| Sample { time: i as f64, value })
            .collect()
    }

    #[test]
    fn pairs_values_by_index_and_drops_time() {
        let cycle = Cycle {
            prey: series(&[10.0, 12.0]),
            predator: series(&[2.0, 4.0]),
        };
        assert_eq!(phase_points(&cycle), vec![[10.0, 2.0], [12.0, 4.0]]);
    }

    #[test]
    fn length_is_bounded_by_the_shorter_series() {
        let cycle = Cycle {
            prey: series(&[10.0, 12.0, 14.0]),
            predator: series(&[2.0]),
        };
        assert_eq!(phase_points(&cycle).len(), 1);
    }

    #[test]
    fn empty_cycle_gives_no_points() {
        assert!(phase_points(&Cycle::default()).is_empty());
    }
}
