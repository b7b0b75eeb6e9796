/// Data layer: core types, workbook loading, and phase-plane derivation.
///
/// Architecture:
/// ```text
///      .xlsx
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse workbook → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Parameters + [Cycle; 3]
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  phase    │  (prey, predator) trajectory points
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod phase;
