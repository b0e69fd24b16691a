use std::fmt;
use std::str::FromStr;

use anchor_lang::prelude::*;

use crate::constants::presets;

/// Range preset selectable by the depositor
/// Each preset maps to a (lower, upper) multiplicative factor pair around the current price
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RangePreset {
    /// Range A - tighter range
    Tight,
    /// Range B - balanced
    #[default]
    Balanced,
    /// Range C - wider range
    Wide,
}

impl RangePreset {
    /// All presets, ordered from narrowest to widest
    pub const ALL: [RangePreset; 3] = [RangePreset::Tight, RangePreset::Balanced, RangePreset::Wide];

    /// (lower_factor, upper_factor), with lower_factor < 1.0 < upper_factor
    pub fn factors(&self) -> (f64, f64) {
        match self {
            RangePreset::Tight => (presets::TIGHT_LOWER_FACTOR, presets::TIGHT_UPPER_FACTOR),
            RangePreset::Balanced => (presets::BALANCED_LOWER_FACTOR, presets::BALANCED_UPPER_FACTOR),
            RangePreset::Wide => (presets::WIDE_LOWER_FACTOR, presets::WIDE_UPPER_FACTOR),
        }
    }

    /// Stable identifier used by the range selector ("A", "B", "C")
    pub fn id(&self) -> &'static str {
        match self {
            RangePreset::Tight => "A",
            RangePreset::Balanced => "B",
            RangePreset::Wide => "C",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RangePreset::Tight => "Tighter range",
            RangePreset::Balanced => "Balanced",
            RangePreset::Wide => "Wider range",
        }
    }
}

impl fmt::Display for RangePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Range {}", self.id())
    }
}

impl FromStr for RangePreset {
    type Err = String;

    /// Accepts the selector id ("A", "B", "C") or the preset name, case-insensitive
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" | "tight" => Ok(RangePreset::Tight),
            "b" | "balanced" => Ok(RangePreset::Balanced),
            "c" | "wide" => Ok(RangePreset::Wide),
            other => Err(format!("unknown range preset: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factors_bracket_one() {
        for preset in RangePreset::ALL {
            let (lower, upper) = preset.factors();
            assert!(lower < 1.0 && upper > 1.0, "{preset} factors must bracket 1.0");
        }
    }

    #[test]
    fn test_factors_nested() {
        let (tl, tu) = RangePreset::Tight.factors();
        let (bl, bu) = RangePreset::Balanced.factors();
        let (wl, wu) = RangePreset::Wide.factors();
        assert!(wl < bl && bl < tl);
        assert!(tu < bu && bu < wu);
    }

    #[test]
    fn test_default_is_balanced() {
        assert_eq!(RangePreset::default(), RangePreset::Balanced);
    }

    #[test]
    fn test_parse() {
        assert_eq!("A".parse::<RangePreset>().unwrap(), RangePreset::Tight);
        assert_eq!("b".parse::<RangePreset>().unwrap(), RangePreset::Balanced);
        assert_eq!(" Wide ".parse::<RangePreset>().unwrap(), RangePreset::Wide);
        assert!("D".parse::<RangePreset>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for preset in RangePreset::ALL {
            assert_eq!(preset.id().parse::<RangePreset>().unwrap(), preset);
        }
        assert_eq!(RangePreset::Balanced.to_string(), "Range B");
    }

    #[test]
    fn test_borsh_round_trip() {
        let mut bytes = Vec::new();
        RangePreset::Wide.serialize(&mut bytes).unwrap();
        assert_eq!(RangePreset::try_from_slice(&bytes).unwrap(), RangePreset::Wide);
    }
}
