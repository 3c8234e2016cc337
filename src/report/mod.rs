//! Result presentation.
//!
//! Maps scores and issue severities to display bands (good / warning /
//! critical) and renders the results card. Pure projections of the data
//! model; no lifecycle logic lives here.

mod band;
mod render;

// Re-export public API
pub use band::SeverityBand;
pub use render::{render_card, render_json};
