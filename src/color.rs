use eframe::egui::Color32;

use crate::data::model::CYCLE_COUNT;

// ---------------------------------------------------------------------------
// Series palette
// ---------------------------------------------------------------------------
//
// Fixed palette carried over from the desktop app these sheets were first
// charted in: prey green, predator red on the time chart; blue / orange /
// black per cycle on the phase chart. The app runs with light visuals so
// the black trace stays readable.

pub const PREY: Color32 = Color32::from_rgb(0x00, 0x80, 0x00);
pub const PREDATOR: Color32 = Color32::from_rgb(0xd0, 0x2b, 0x20);

pub const CYCLES: [Color32; CYCLE_COUNT] = [
    Color32::from_rgb(0x1f, 0x4f, 0xd0), // cycle 1: blue
    Color32::from_rgb(0xe8, 0x8c, 0x1a), // cycle 2: orange
    Color32::from_rgb(0x20, 0x20, 0x20), // cycle 3: black
];
