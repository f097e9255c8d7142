//! Band classification: places one marker value on a severity scale.
//!
//! Two scales exist on purpose. The six-band scale drives the headline
//! score and adds "excellent" / "very bad" extremes beyond the configured
//! thresholds. The four-tier scale drives the breakdown table and stops at
//! the thresholds. They disagree at the extremes and must not be merged.

use crate::catalog::schema::{BandThresholds, PenaltyWeights};
use crate::model::{Band, Tier};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Outcome of classifying one value on the full six-band scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandOutcome {
    pub band: Band,
    pub penalty: Decimal,
}

impl BandOutcome {
    fn clean(band: Band) -> BandOutcome {
        BandOutcome {
            band,
            penalty: Decimal::ZERO,
        }
    }
}

/// Classify a value on the full six-band scale.
///
/// For consumption markers lower is better; for benefit markers
/// (`invert = true`) the comparisons flip. Inner boundaries are strict, so
/// a value sitting exactly on a threshold falls to the lower-severity band.
/// The excellent cutoff is inclusive. Beyond one and a half times the high
/// threshold the value is "very bad" and costs two points on top of the
/// high penalty.
pub fn classify(
    value: Decimal,
    bands: &BandThresholds,
    penalties: &PenaltyWeights,
    invert: bool,
) -> BandOutcome {
    let half = Decimal::new(5, 1);
    let one_and_half = Decimal::new(15, 1);

    if invert {
        if value < bands.high * half {
            BandOutcome {
                band: Band::VeryBad,
                penalty: penalties.high + Decimal::TWO,
            }
        } else if value < bands.high {
            BandOutcome {
                band: Band::High,
                penalty: penalties.high,
            }
        } else if value < bands.moderate {
            BandOutcome {
                band: Band::Moderate,
                penalty: penalties.moderate,
            }
        } else if value < bands.mild {
            BandOutcome {
                band: Band::Mild,
                penalty: penalties.mild,
            }
        } else if value >= bands.mild * one_and_half {
            BandOutcome::clean(Band::Excellent)
        } else {
            BandOutcome::clean(Band::Good)
        }
    } else if value > bands.high * one_and_half {
        BandOutcome {
            band: Band::VeryBad,
            penalty: penalties.high + Decimal::TWO,
        }
    } else if value > bands.high {
        BandOutcome {
            band: Band::High,
            penalty: penalties.high,
        }
    } else if value > bands.moderate {
        BandOutcome {
            band: Band::Moderate,
            penalty: penalties.moderate,
        }
    } else if value > bands.mild {
        BandOutcome {
            band: Band::Mild,
            penalty: penalties.mild,
        }
    } else if value <= bands.mild * half {
        BandOutcome::clean(Band::Excellent)
    } else {
        BandOutcome::clean(Band::Good)
    }
}

/// Classify a value on the simplified four-tier scale used by the breakdown
/// table. Same strict boundary semantics as [`classify`], no extremes.
pub fn classify_tier(value: Decimal, bands: &BandThresholds, invert: bool) -> Tier {
    if invert {
        if value < bands.high {
            Tier::High
        } else if value < bands.moderate {
            Tier::Moderate
        } else if value < bands.mild {
            Tier::Mild
        } else {
            Tier::Good
        }
    } else if value > bands.high {
        Tier::High
    } else if value > bands.moderate {
        Tier::Moderate
    } else if value > bands.mild {
        Tier::Mild
    } else {
        Tier::Good
    }
}
