use crate::data::model::{Dataset, CYCLE_COUNT};
use crate::data::phase::phase_points;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until user loads a workbook).
    pub dataset: Option<Dataset>,

    /// Per-cycle phase-plane trajectories, rebuilt on every load (cached).
    pub phase: [Vec<[f64; 2]>; CYCLE_COUNT],

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            phase: Default::default(),
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset, replacing all prior series wholesale
    /// and rebuilding the phase caches. Charts pick the new data up on the
    /// next frame; a failed load never reaches this point, so previously
    /// displayed data survives errors untouched.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.phase = [
            phase_points(&dataset.cycles[0]),
            phase_points(&dataset.cycles[1]),
            phase_points(&dataset.cycles[2]),
        ];
        self.dataset = Some(dataset);
        self.status_message = None;
        self.loading = false;
    }
}
