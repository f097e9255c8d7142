pub mod band;
pub mod engine;
pub mod outcome;

pub use band::{classify, classify_tier, BandOutcome};
pub use engine::score;
pub use outcome::{BreakdownRow, Deduction, Report, ScoreOutcome};
